/*
 * Choosing token types so that the grid keeps a target mix.
 *
 * Part of boolean_blocks
 * developed by A Bunch of Hacks.
 *
 * Copyright (c) 2018-2021 A Bunch of Hacks
 *
 * This library is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 *
 * [authors:]
 * Sander in 't Veld (sander@abunchofhacks.coop)
 */

use crate::logic::profile::{TargetRatioProfile, TypeCounts};
use crate::logic::token::TokenType;

// Pick the type that lags furthest behind its target share. Ties go to the
// type that comes first in profile order. The counts are not touched; the
// caller records the new token once it has actually been placed.
pub fn choose_next_type(
	counts: &TypeCounts,
	total: u32,
	profile: &TargetRatioProfile,
) -> TokenType
{
	let mut best: Option<(TokenType, f64)> = None;
	for (typ, target) in profile.iter()
	{
		let current = if total == 0
		{
			0.0
		}
		else
		{
			counts.get(typ) as f64 / total as f64
		};
		let delta = target - current;
		match best
		{
			Some((_, max)) if delta <= max => (),
			_ => best = Some((typ, delta)),
		}
	}

	// Profiles always contain at least the two literals.
	best.map(|(typ, _)| typ).unwrap_or(TokenType::True)
}

#[cfg(test)]
mod tests
{
	use super::*;

	fn draw(profile: &TargetRatioProfile, n: usize) -> TypeCounts
	{
		let mut counts = TypeCounts::default();
		for _ in 0..n
		{
			let typ = choose_next_type(&counts, counts.total(), profile);
			counts.increment(typ);
		}
		counts
	}

	#[test]
	fn test_empty_counts_pick_largest_target()
	{
		let counts = TypeCounts::default();
		let with_not = TargetRatioProfile::with_not();
		// True and False tie at 0.3; True comes first.
		assert_eq!(choose_next_type(&counts, 0, &with_not), TokenType::True);
		let without_not = TargetRatioProfile::without_not();
		assert_eq!(choose_next_type(&counts, 0, &without_not), TokenType::And);
	}

	#[test]
	fn test_lagging_type_wins()
	{
		let counts: TypeCounts =
			vec![TokenType::True, TokenType::False, TokenType::And]
				.into_iter()
				.collect();
		let profile = TargetRatioProfile::with_not();
		assert_eq!(choose_next_type(&counts, 3, &profile), TokenType::Or);
	}

	#[test]
	fn test_never_picks_excluded_type()
	{
		let profile = TargetRatioProfile::without_not();
		let counts = draw(&profile, 1000);
		assert_eq!(counts.get(TokenType::Not), 0);
	}

	#[test]
	fn test_ratio_convergence()
	{
		for &profile in [
			TargetRatioProfile::without_not(),
			TargetRatioProfile::with_not(),
		]
		.iter()
		{
			let counts = draw(&profile, 10_000);
			assert_eq!(counts.total(), 10_000);
			for &typ in TokenType::ALL.iter()
			{
				let realized = counts.fraction(typ);
				let target = profile.target(typ);
				assert!(
					(realized - target).abs() <= 0.02,
					"(type = {:?}, realized = {}, target = {})",
					typ,
					realized,
					target
				);
			}
		}
	}
}

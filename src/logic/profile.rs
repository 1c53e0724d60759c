/*
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

use crate::logic::token::TokenType;

use enumset::EnumSet;

/// Target share of each token type. Types outside of `types` never get
/// generated; iteration always runs True, False, And, Or, Not.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TargetRatioProfile
{
	types: EnumSet<TokenType>,
	fractions: [f64; TokenType::COUNT],
}

impl TargetRatioProfile
{
	pub fn without_not() -> TargetRatioProfile
	{
		TargetRatioProfile {
			types: TokenType::True
				| TokenType::False
				| TokenType::And
				| TokenType::Or,
			fractions: [0.2, 0.2, 0.3, 0.3, 0.0],
		}
	}

	pub fn with_not() -> TargetRatioProfile
	{
		TargetRatioProfile {
			types: EnumSet::all(),
			fractions: [0.3, 0.3, 0.15, 0.15, 0.1],
		}
	}

	pub fn for_mode(include_not: bool) -> TargetRatioProfile
	{
		if include_not
		{
			TargetRatioProfile::with_not()
		}
		else
		{
			TargetRatioProfile::without_not()
		}
	}

	pub fn contains(&self, typ: TokenType) -> bool
	{
		self.types.contains(typ)
	}

	pub fn target(&self, typ: TokenType) -> f64
	{
		if self.types.contains(typ)
		{
			self.fractions[typ as usize]
		}
		else
		{
			0.0
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (TokenType, f64)> + '_
	{
		self.types.iter().map(move |typ| (typ, self.fractions[typ as usize]))
	}
}

/// Number of live tokens of each type.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TypeCounts
{
	counts: [u32; TokenType::COUNT],
}

impl TypeCounts
{
	pub fn get(&self, typ: TokenType) -> u32
	{
		self.counts[typ as usize]
	}

	pub fn total(&self) -> u32
	{
		self.counts.iter().sum()
	}

	pub fn increment(&mut self, typ: TokenType)
	{
		self.counts[typ as usize] += 1;
	}

	pub fn decrement(&mut self, typ: TokenType)
	{
		debug_assert!(self.counts[typ as usize] > 0);
		self.counts[typ as usize] = self.counts[typ as usize].saturating_sub(1);
	}

	pub fn fraction(&self, typ: TokenType) -> f64
	{
		let total = self.total();
		if total == 0
		{
			0.0
		}
		else
		{
			self.get(typ) as f64 / total as f64
		}
	}
}

impl std::iter::FromIterator<TokenType> for TypeCounts
{
	fn from_iter<I: IntoIterator<Item = TokenType>>(iter: I) -> TypeCounts
	{
		let mut counts = TypeCounts::default();
		for typ in iter
		{
			counts.increment(typ);
		}
		counts
	}
}

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

use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum Mode
{
	ThreeByThree,
	FiveByFive,
}

impl Default for Mode
{
	fn default() -> Mode
	{
		Mode::ThreeByThree
	}
}

impl Mode
{
	pub fn side_length(self) -> usize
	{
		match self
		{
			Mode::ThreeByThree => 3,
			Mode::FiveByFive => 5,
		}
	}

	pub fn includes_not(self) -> bool
	{
		match self
		{
			Mode::ThreeByThree => false,
			Mode::FiveByFive => true,
		}
	}

	/// Whether lines that already match on the starting grid are cleared and
	/// scored before the first move. Otherwise they wait for the first swap.
	pub fn scores_starting_grid(self) -> bool
	{
		match self
		{
			Mode::ThreeByThree => false,
			Mode::FiveByFive => true,
		}
	}

	// The round clock is run by the front end.
	pub fn time_limit_in_seconds(self) -> u32
	{
		120
	}
}

impl std::fmt::Display for Mode
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		match self
		{
			Mode::ThreeByThree => write!(f, "three-by-three"),
			Mode::FiveByFive => write!(f, "five-by-five"),
		}
	}
}

#[derive(Debug)]
pub struct ParseModeError
{
	source: String,
}

impl std::error::Error for ParseModeError {}

impl std::fmt::Display for ParseModeError
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		write!(f, "unknown mode '{}'", self.source)
	}
}

impl std::str::FromStr for Mode
{
	type Err = ParseModeError;

	fn from_str(s: &str) -> Result<Mode, ParseModeError>
	{
		match s.trim().to_lowercase().as_str()
		{
			"3" | "3x3" | "three-by-three" => Ok(Mode::ThreeByThree),
			"5" | "5x5" | "five-by-five" => Ok(Mode::FiveByFive),
			_ => Err(ParseModeError {
				source: s.to_string(),
			}),
		}
	}
}

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

use crate::logic::position::Position;
use crate::logic::token::Token;

use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Axis
{
	Row,
	Column,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Line
{
	pub axis: Axis,
	pub index: i8,
}

impl Line
{
	pub fn row(index: i8) -> Line
	{
		Line {
			axis: Axis::Row,
			index,
		}
	}

	pub fn column(index: i8) -> Line
	{
		Line {
			axis: Axis::Column,
			index,
		}
	}

	pub fn positions(self, side: i8) -> impl Iterator<Item = Position>
	{
		(0..side).map(move |i| match self.axis
		{
			Axis::Row => Position::new(self.index, i),
			Axis::Column => Position::new(i, self.index),
		})
	}
}

// Everything that happened to the matrix during one resolution pass, in the
// order it happened. The matrix already reflects all of it by the time anyone
// gets to read these.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum Change
{
	Matched
	{
		line: Line
	},
	Destroyed
	{
		token: Token
	},
	Moved
	{
		token: Token,
		from: Position,
	},
	Created
	{
		token: Token
	},
}

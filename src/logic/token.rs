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

use enumset::EnumSetType;

use serde_derive::{Deserialize, Serialize};

#[derive(EnumSetType, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TokenType
{
	True,
	False,
	And,
	Or,
	Not,
}

impl TokenType
{
	pub const COUNT: usize = 5;

	pub const ALL: [TokenType; TokenType::COUNT] = [
		TokenType::True,
		TokenType::False,
		TokenType::And,
		TokenType::Or,
		TokenType::Not,
	];

	pub fn symbol(self) -> char
	{
		match self
		{
			TokenType::True => 'T',
			TokenType::False => 'F',
			TokenType::And => '&',
			TokenType::Or => '|',
			TokenType::Not => '!',
		}
	}

	pub fn from_symbol(symbol: char) -> Option<TokenType>
	{
		match symbol
		{
			'T' | 't' => Some(TokenType::True),
			'F' | 'f' => Some(TokenType::False),
			'&' => Some(TokenType::And),
			'|' => Some(TokenType::Or),
			'!' => Some(TokenType::Not),
			_ => None,
		}
	}

	pub fn is_literal(self) -> bool
	{
		match self
		{
			TokenType::True | TokenType::False => true,
			TokenType::And | TokenType::Or | TokenType::Not => false,
		}
	}
}

impl std::fmt::Display for TokenType
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		write!(f, "{}", self.symbol())
	}
}

/// The content of a single occupied cell. The type never changes after
/// creation; the position follows the token around the matrix and is only
/// written by the grid engine.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Token
{
	pub(crate) id: u32,

	#[serde(rename = "type")]
	pub(crate) typ: TokenType,

	pub(crate) position: Position,
}

impl Token
{
	pub fn id(&self) -> u32
	{
		self.id
	}

	pub fn typ(&self) -> TokenType
	{
		self.typ
	}

	pub fn position(&self) -> Position
	{
		self.position
	}
}

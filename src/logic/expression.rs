/*
 * Evaluation of a row or column of tokens as a boolean expression.
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

use crate::logic::token::TokenType;

use log::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum BinaryOperator
{
	And,
	Or,
}

impl BinaryOperator
{
	fn apply(self, a: bool, b: bool) -> bool
	{
		match self
		{
			BinaryOperator::And => a && b,
			BinaryOperator::Or => a || b,
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Symbol
{
	Literal(bool),
	Binary(BinaryOperator),
	Negation,
}

impl From<TokenType> for Symbol
{
	fn from(typ: TokenType) -> Symbol
	{
		match typ
		{
			TokenType::True => Symbol::Literal(true),
			TokenType::False => Symbol::Literal(false),
			TokenType::And => Symbol::Binary(BinaryOperator::And),
			TokenType::Or => Symbol::Binary(BinaryOperator::Or),
			TokenType::Not => Symbol::Negation,
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Malformed
{
	Empty,
	LeadingOperator
	{
		index: usize
	},
	ConsecutiveOperators
	{
		index: usize
	},
	MissingOperator
	{
		index: usize
	},
	MissingOperand,
}

impl std::error::Error for Malformed {}

impl std::fmt::Display for Malformed
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		match self
		{
			Malformed::Empty => write!(f, "empty expression"),
			Malformed::LeadingOperator { index } =>
			{
				write!(f, "binary operator without left operand at {}", index)
			}
			Malformed::ConsecutiveOperators { index } =>
			{
				write!(f, "binary operator follows operator at {}", index)
			}
			Malformed::MissingOperator { index } =>
			{
				write!(f, "operand follows operand at {}", index)
			}
			Malformed::MissingOperand =>
			{
				write!(f, "expression ends without operand")
			}
		}
	}
}

/// Evaluate a line of tokens as `operand (operator operand)*`, where each
/// operand may be prefixed by any number of `Not` tokens. And and Or have the
/// same precedence and are applied strictly left to right, so
/// `T | F & T` is `(T | F) & T`.
pub fn try_evaluate<I>(tokens: I) -> Result<bool, Malformed>
where
	I: IntoIterator<Item = TokenType>,
{
	let mut value: Option<bool> = None;
	let mut pending: Option<BinaryOperator> = None;
	let mut negations: usize = 0;

	for (index, typ) in tokens.into_iter().enumerate()
	{
		match Symbol::from(typ)
		{
			Symbol::Literal(x) =>
			{
				let x = x ^ (negations % 2 == 1);
				negations = 0;
				value = match (value, pending.take())
				{
					(None, _) => Some(x),
					(Some(acc), Some(op)) => Some(op.apply(acc, x)),
					(Some(_), None) =>
					{
						return Err(Malformed::MissingOperator { index })
					}
				};
			}
			Symbol::Negation =>
			{
				if value.is_some() && pending.is_none()
				{
					return Err(Malformed::MissingOperator { index });
				}
				negations += 1;
			}
			Symbol::Binary(op) =>
			{
				if value.is_none()
				{
					return Err(Malformed::LeadingOperator { index });
				}
				else if pending.is_some() || negations > 0
				{
					return Err(Malformed::ConsecutiveOperators { index });
				}
				pending = Some(op);
			}
		}
	}

	if pending.is_some() || negations > 0
	{
		Err(Malformed::MissingOperand)
	}
	else
	{
		value.ok_or(Malformed::Empty)
	}
}

/// Like `try_evaluate`, but a malformed line simply does not match.
pub fn evaluate<I>(tokens: I) -> bool
where
	I: IntoIterator<Item = TokenType>,
{
	match try_evaluate(tokens)
	{
		Ok(value) => value,
		Err(reason) =>
		{
			trace!("Malformed line: {}", reason);
			false
		}
	}
}

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

use crate::logic::grid::{GridEngine, GridError, PendingSwap};
use crate::logic::position::Position;

#[derive(Debug)]
pub enum Activation
{
	Selected(Position),
	Deselected(Position),
	Swapped
	{
		first: Position,
		second: Position,
		swap: PendingSwap,
	},
}

#[derive(Default, Debug)]
pub struct Selection
{
	selected: Option<Position>,
}

impl Selection
{
	pub fn selected(&self) -> Option<Position>
	{
		self.selected
	}

	pub fn clear(&mut self)
	{
		self.selected = None;
	}

	// A rejected activation leaves the current selection in place.
	pub fn on_cell_activated(
		&mut self,
		engine: &mut GridEngine,
		position: Position,
	) -> Result<Activation, GridError>
	{
		match self.selected
		{
			None =>
			{
				match engine.token_at(position)?
				{
					Some(_) =>
					{
						self.selected = Some(position);
						Ok(Activation::Selected(position))
					}
					None => Err(GridError::EmptyCellReferenced { position }),
				}
			}
			Some(previous) if previous == position =>
			{
				self.selected = None;
				Ok(Activation::Deselected(position))
			}
			Some(previous) =>
			{
				let swap = engine.swap(position, previous)?;
				self.selected = None;
				Ok(Activation::Swapped {
					first: position,
					second: previous,
					swap,
				})
			}
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	use crate::logic::grid::Phase;

	#[test]
	fn test_select_and_deselect() -> Result<(), GridError>
	{
		let mut engine = GridEngine::new(3, false)?;
		let mut selection = Selection::default();
		let a = Position::new(1, 2);

		match selection.on_cell_activated(&mut engine, a)?
		{
			Activation::Selected(x) => assert_eq!(x, a),
			other => panic!("unexpected {:?}", other),
		}
		assert_eq!(selection.selected(), Some(a));

		match selection.on_cell_activated(&mut engine, a)?
		{
			Activation::Deselected(x) => assert_eq!(x, a),
			other => panic!("unexpected {:?}", other),
		}
		assert_eq!(selection.selected(), None);
		assert_eq!(engine.phase(), Phase::Stable);
		Ok(())
	}

	#[test]
	fn test_second_cell_swaps() -> Result<(), GridError>
	{
		let mut engine = GridEngine::new(3, false)?;
		let mut selection = Selection::default();
		let a = Position::new(0, 0);
		let b = Position::new(2, 2);
		let before_a = engine.token_at(a)?.map(|t| t.id());
		let before_b = engine.token_at(b)?.map(|t| t.id());

		selection.on_cell_activated(&mut engine, a)?;
		match selection.on_cell_activated(&mut engine, b)?
		{
			Activation::Swapped { first, second, .. } =>
			{
				assert_eq!((first, second), (b, a));
			}
			other => panic!("unexpected {:?}", other),
		}
		assert_eq!(selection.selected(), None);
		assert_eq!(engine.token_at(a)?.map(|t| t.id()), before_b);
		assert_eq!(engine.token_at(b)?.map(|t| t.id()), before_a);
		assert_eq!(engine.phase(), Phase::Dirty);
		Ok(())
	}

	#[test]
	fn test_rejected_activation_keeps_selection() -> Result<(), GridError>
	{
		let mut engine = GridEngine::new(3, false)?;
		let mut selection = Selection::default();
		let outside = Position::new(5, 0);

		assert_eq!(
			selection.on_cell_activated(&mut engine, outside).err(),
			Some(GridError::OutOfBounds { position: outside })
		);
		assert_eq!(selection.selected(), None);

		let a = Position::new(0, 1);
		selection.on_cell_activated(&mut engine, a)?;
		assert!(selection.on_cell_activated(&mut engine, outside).is_err());
		assert_eq!(selection.selected(), Some(a));
		Ok(())
	}
}

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

use crate::logic::grid::Relocation;
use crate::logic::position::Position;
use crate::logic::token::TokenType;

/// The front end's side of the game: effects, animations and sound. None of
/// these calls can influence the state of the grid, which is already final
/// by the time they are made.
pub trait Presenter
{
	fn play_removal(&mut self, typ: TokenType, position: Position);

	/// Call `relocation.complete()` once the move has finished animating.
	fn play_move(&mut self, relocation: Relocation);

	fn play_match_cue(&mut self);
}

/// Presents nothing and finishes every move right away.
#[derive(Default, Debug)]
pub struct NullPresenter;

impl Presenter for NullPresenter
{
	fn play_removal(&mut self, _typ: TokenType, _position: Position) {}

	fn play_move(&mut self, relocation: Relocation)
	{
		relocation.complete();
	}

	fn play_match_cue(&mut self) {}
}

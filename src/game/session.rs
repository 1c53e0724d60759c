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

use crate::game::mode::Mode;
use crate::game::presenter::Presenter;
use crate::game::selection::{Activation, Selection};
use crate::game::settings::Settings;
use crate::logic::change::Change;
use crate::logic::grid::{GridEngine, GridError, Relocation, Settled, Snapshot};
use crate::logic::position::Position;

use log::*;

const MAX_CASCADE_PASSES: usize = 16;

#[derive(Debug)]
pub enum Outcome
{
	Selected(Position),
	Deselected(Position),
	Swapped(Settled),
}

/// What a call to `resolve` cleared. Falls handed to the presenter finish
/// when `settled` does.
#[derive(Default, Debug)]
pub struct Resolution
{
	pub lines: usize,
	pub cells: usize,
	pub settled: Settled,
}

pub struct Session<P: Presenter>
{
	engine: GridEngine,
	selection: Selection,
	presenter: P,
	mode: Mode,
	score: u32,
	cascade: bool,
}

impl<P: Presenter> Session<P>
{
	pub fn create(settings: &Settings, presenter: P)
		-> Result<Session<P>, GridError>
	{
		let engine = GridEngine::with_policy(
			settings.side_length(),
			settings.include_not(),
			settings.refill(),
		)?;
		Ok(Session::with_engine(engine, settings, presenter))
	}

	pub fn with_engine(
		engine: GridEngine,
		settings: &Settings,
		presenter: P,
	) -> Session<P>
	{
		Session {
			engine,
			selection: Selection::default(),
			presenter,
			mode: settings.mode(),
			score: 0,
			cascade: settings.cascade(),
		}
	}

	/// Clear and score whatever already matches on the starting grid, if the
	/// mode asks for it.
	pub fn start(&mut self) -> Resolution
	{
		info!(
			"Starting {} session on a {}x{} grid",
			self.mode,
			self.engine.side_length(),
			self.engine.side_length()
		);
		if self.mode.scores_starting_grid()
		{
			self.resolve()
		}
		else
		{
			Resolution::default()
		}
	}

	pub fn mode(&self) -> Mode
	{
		self.mode
	}

	pub fn score(&self) -> u32
	{
		self.score
	}

	pub fn engine(&self) -> &GridEngine
	{
		&self.engine
	}

	pub fn snapshot(&self) -> Snapshot
	{
		self.engine.snapshot()
	}

	pub fn selected(&self) -> Option<Position>
	{
		self.selection.selected()
	}

	pub fn presenter(&self) -> &P
	{
		&self.presenter
	}

	pub fn presenter_mut(&mut self) -> &mut P
	{
		&mut self.presenter
	}

	/// After a swap, wait for the returned `Settled` before calling
	/// `resolve`.
	pub fn activate(&mut self, position: Position)
		-> Result<Outcome, GridError>
	{
		let activation =
			self.selection.on_cell_activated(&mut self.engine, position)?;
		match activation
		{
			Activation::Selected(x) => Ok(Outcome::Selected(x)),
			Activation::Deselected(x) => Ok(Outcome::Deselected(x)),
			Activation::Swapped {
				first,
				second,
				swap,
			} =>
			{
				debug!("Swapping {} and {}", first, second);
				let [one, two] = swap.relocations;
				self.presenter.play_move(one);
				self.presenter.play_move(two);
				Ok(Outcome::Swapped(swap.settled))
			}
		}
	}

	/// Run one resolution pass, or keep going while new matches appear if
	/// cascading is enabled. Every broken cell is worth one point.
	pub fn resolve(&mut self) -> Resolution
	{
		let mut resolution = Resolution::default();
		for pass in 0..MAX_CASCADE_PASSES
		{
			let lines = self.resolve_once(&mut resolution);
			if lines == 0 || !self.cascade
			{
				return resolution;
			}
			trace!("Cascade pass {} matched {} lines", pass, lines);
		}
		warn!("Stopped cascading after {} passes", MAX_CASCADE_PASSES);
		resolution
	}

	fn resolve_once(&mut self, resolution: &mut Resolution) -> usize
	{
		let lines = self.engine.resolve_matches();
		let changes = self.engine.take_changes();
		if lines == 0
		{
			return 0;
		}

		self.presenter.play_match_cue();
		let mut cells = 0;
		for change in changes
		{
			match change
			{
				Change::Matched { .. } => (),
				Change::Destroyed { token } =>
				{
					cells += 1;
					self.presenter.play_removal(token.typ(), token.position());
				}
				Change::Moved { token, from } =>
				{
					let (relocation, receiver) =
						Relocation::signalled(token, from);
					resolution.settled.track(receiver);
					self.presenter.play_move(relocation);
				}
				Change::Created { .. } => (),
			}
		}

		resolution.lines += lines;
		resolution.cells += cells;
		self.score += cells as u32;
		info!(
			"Matched {} lines ({} cells), score is now {}",
			lines, cells, self.score
		);
		lines
	}
}

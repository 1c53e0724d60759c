/*
 * The grid of boolean tokens: generation, matching, clearing and refilling.
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

use crate::logic::balancer::choose_next_type;
use crate::logic::change::{Change, Line};
use crate::logic::expression::evaluate;
use crate::logic::position::Position;
use crate::logic::profile::{TargetRatioProfile, TypeCounts};
use crate::logic::token::{Token, TokenType};

use futures::channel::oneshot;

use itertools::Itertools;

use log::*;

use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase
{
	Stable,
	Dirty,
	Resolving,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum RefillPolicy
{
	/// Surviving tokens fall down into cleared cells; new tokens enter at
	/// the top.
	Gravity,
	/// Every cleared cell gets a new token where it stands.
	Replace,
}

impl Default for RefillPolicy
{
	fn default() -> RefillPolicy
	{
		RefillPolicy::Gravity
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GridError
{
	OutOfBounds
	{
		position: Position
	},
	EmptyCellReferenced
	{
		position: Position
	},
	InvalidSideLength
	{
		side: usize
	},
	NotSquare
	{
		rows: usize,
		row: usize,
		len: usize,
	},
	InvalidSymbol
	{
		symbol: char
	},
}

impl std::error::Error for GridError {}

impl std::fmt::Display for GridError
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		match self
		{
			GridError::OutOfBounds { position } =>
			{
				write!(f, "position {} is out of bounds", position)
			}
			GridError::EmptyCellReferenced { position } =>
			{
				write!(f, "cell {} is empty", position)
			}
			GridError::InvalidSideLength { side } =>
			{
				write!(f, "invalid side length {}", side)
			}
			GridError::NotSquare { rows, row, len } => write!(
				f,
				"row {} has {} cells but the layout has {} rows",
				row, len, rows
			),
			GridError::InvalidSymbol { symbol } =>
			{
				write!(f, "'{}' is not a token symbol", symbol)
			}
		}
	}
}

/// How many literals a fresh grid would contain if it were filled by quota
/// instead of by ratio balancing. Only reported, never enforced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SeedTargets
{
	pub truths: u32,
	pub falsehoods: u32,
	pub operators: u32,
}

impl SeedTargets
{
	fn for_cells(cells: u32) -> SeedTargets
	{
		// 30% rounded up, in integers.
		let truths = (cells * 3 + 9) / 10;
		SeedTargets {
			truths,
			falsehoods: truths,
			operators: cells.saturating_sub(2 * truths),
		}
	}
}

/// One token's move, as part of a swap or a fall. Whoever animates the move calls
/// `complete` when done; dropping the relocation counts as done as well.
#[derive(Debug)]
pub struct Relocation
{
	token: Token,
	from: Position,
	signal: Option<oneshot::Sender<()>>,
}

impl Relocation
{
	pub(crate) fn signalled(token: Token, from: Position)
		-> (Relocation, oneshot::Receiver<()>)
	{
		let (sender, receiver) = oneshot::channel();
		let relocation = Relocation {
			token,
			from,
			signal: Some(sender),
		};
		(relocation, receiver)
	}

	pub fn token(&self) -> Token
	{
		self.token
	}

	pub fn from(&self) -> Position
	{
		self.from
	}

	pub fn to(&self) -> Position
	{
		self.token.position
	}

	pub fn complete(mut self)
	{
		if let Some(signal) = self.signal.take()
		{
			// The receiving end may have given up waiting already.
			let _ = signal.send(());
		}
	}
}

#[derive(Default, Debug)]
pub struct Settled
{
	receivers: Vec<oneshot::Receiver<()>>,
}

impl Settled
{
	pub(crate) fn track(&mut self, receiver: oneshot::Receiver<()>)
	{
		self.receivers.push(receiver);
	}

	pub async fn wait(self)
	{
		futures::future::join_all(self.receivers).await;
	}

	pub fn is_settled(&mut self) -> bool
	{
		self.receivers.iter_mut().all(|receiver| match receiver.try_recv()
		{
			Ok(Some(())) => true,
			Ok(None) => false,
			Err(oneshot::Canceled) => true,
		})
	}
}

#[derive(Debug)]
pub struct PendingSwap
{
	pub relocations: [Relocation; 2],
	pub settled: Settled,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct Snapshot
{
	pub side: i8,
	pub cells: Vec<Option<Token>>,
}

impl Snapshot
{
	pub fn at(&self, position: Position) -> Option<&Token>
	{
		if position.row < 0
			|| position.row >= self.side
			|| position.col < 0
			|| position.col >= self.side
		{
			return None;
		}
		let i = position.row as usize * self.side as usize
			+ position.col as usize;
		self.cells[i].as_ref()
	}

	pub fn rows(&self) -> impl Iterator<Item = &[Option<Token>]>
	{
		self.cells.chunks(std::cmp::max(1, self.side as usize))
	}
}

impl std::fmt::Display for Snapshot
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		let text = self
			.rows()
			.map(|row| {
				row.iter()
					.map(|cell| match cell
					{
						Some(token) => token.typ.symbol(),
						None => '.',
					})
					.join(" ")
			})
			.join("\n");
		write!(f, "{}", text)
	}
}

#[derive(Debug)]
pub struct GridEngine
{
	side: i8,
	include_not: bool,
	policy: RefillPolicy,
	profile: TargetRatioProfile,
	seed_targets: SeedTargets,

	cells: Vec<Option<Token>>,
	counts: TypeCounts,
	phase: Phase,
	next_id: u32,

	changes: Vec<Change>,
}

impl GridEngine
{
	pub fn new(side: usize, include_not: bool)
		-> Result<GridEngine, GridError>
	{
		GridEngine::with_policy(side, include_not, RefillPolicy::default())
	}

	pub fn with_policy(
		side: usize,
		include_not: bool,
		policy: RefillPolicy,
	) -> Result<GridEngine, GridError>
	{
		let mut engine = GridEngine::empty(side, include_not, policy)?;

		debug!(
			"Filling {}x{} grid (not = {}, seed targets = {:?})",
			side, side, include_not, engine.seed_targets
		);

		// Row-major, so that later cells correct for the earlier ones.
		for i in 0..engine.cells.len()
		{
			let typ = engine.generate();
			engine.place(i, typ);
		}

		debug_assert!(engine.is_consistent());
		Ok(engine)
	}

	pub fn from_layout(
		rows: &[Vec<TokenType>],
		include_not: bool,
		policy: RefillPolicy,
	) -> Result<GridEngine, GridError>
	{
		let mut engine = GridEngine::empty(rows.len(), include_not, policy)?;
		for (r, row) in rows.iter().enumerate()
		{
			if row.len() != rows.len()
			{
				return Err(GridError::NotSquare {
					rows: rows.len(),
					row: r,
					len: row.len(),
				});
			}
			for (c, &typ) in row.iter().enumerate()
			{
				engine.place(r * rows.len() + c, typ);
			}
		}
		Ok(engine)
	}

	/// Parse a layout such as `"T&T/F|F/T&F"`, with rows separated by
	/// slashes or newlines. Whitespace is ignored.
	pub fn from_symbols(
		layout: &str,
		include_not: bool,
		policy: RefillPolicy,
	) -> Result<GridEngine, GridError>
	{
		let rows = layout
			.split(|x: char| x == '/' || x == '\n')
			.map(|row| row.trim())
			.filter(|row| !row.is_empty())
			.map(|row| {
				row.chars()
					.filter(|x| !x.is_whitespace())
					.map(|x| {
						TokenType::from_symbol(x)
							.ok_or(GridError::InvalidSymbol { symbol: x })
					})
					.collect::<Result<Vec<TokenType>, GridError>>()
			})
			.collect::<Result<Vec<Vec<TokenType>>, GridError>>()?;
		GridEngine::from_layout(&rows, include_not, policy)
	}

	fn empty(
		side: usize,
		include_not: bool,
		policy: RefillPolicy,
	) -> Result<GridEngine, GridError>
	{
		if side == 0 || side > i8::MAX as usize
		{
			return Err(GridError::InvalidSideLength { side });
		}

		Ok(GridEngine {
			side: side as i8,
			include_not,
			policy,
			profile: TargetRatioProfile::for_mode(include_not),
			seed_targets: SeedTargets::for_cells((side * side) as u32),
			cells: vec![None; side * side],
			counts: TypeCounts::default(),
			phase: Phase::Stable,
			next_id: 0,
			changes: Vec::new(),
		})
	}

	pub fn side_length(&self) -> usize
	{
		self.side as usize
	}

	pub fn includes_not(&self) -> bool
	{
		self.include_not
	}

	pub fn policy(&self) -> RefillPolicy
	{
		self.policy
	}

	pub fn profile(&self) -> &TargetRatioProfile
	{
		&self.profile
	}

	pub fn seed_targets(&self) -> SeedTargets
	{
		self.seed_targets
	}

	pub fn phase(&self) -> Phase
	{
		self.phase
	}

	pub fn counts(&self) -> &TypeCounts
	{
		&self.counts
	}

	pub fn count_total_blocks(&self) -> usize
	{
		self.cells.iter().filter(|cell| cell.is_some()).count()
	}

	fn index(&self, position: Position) -> Option<usize>
	{
		if position.row < 0
			|| position.row >= self.side
			|| position.col < 0
			|| position.col >= self.side
		{
			return None;
		}

		Some(position.row as usize * self.side as usize + position.col as usize)
	}

	fn position_of(&self, index: usize) -> Position
	{
		let side = self.side as usize;
		Position::new((index / side) as i8, (index % side) as i8)
	}

	pub fn token_at(&self, position: Position)
		-> Result<Option<Token>, GridError>
	{
		match self.index(position)
		{
			Some(i) => Ok(self.cells[i]),
			None => Err(GridError::OutOfBounds { position }),
		}
	}

	fn occupied(&self, position: Position) -> Result<(usize, Token), GridError>
	{
		let i = self
			.index(position)
			.ok_or(GridError::OutOfBounds { position })?;
		let token = self.cells[i]
			.ok_or(GridError::EmptyCellReferenced { position })?;
		Ok((i, token))
	}

	pub fn snapshot(&self) -> Snapshot
	{
		Snapshot {
			side: self.side,
			cells: self.cells.clone(),
		}
	}

	pub fn take_changes(&mut self) -> Vec<Change>
	{
		std::mem::replace(&mut self.changes, Vec::new())
	}

	fn generate(&self) -> TokenType
	{
		choose_next_type(&self.counts, self.counts.total(), &self.profile)
	}

	// The only two places where tokens come and go, so that the counts can
	// never disagree with the cells.
	fn place(&mut self, index: usize, typ: TokenType) -> Token
	{
		debug_assert!(self.cells[index].is_none());
		let token = Token {
			id: self.next_id,
			typ,
			position: self.position_of(index),
		};
		self.next_id = self.next_id.wrapping_add(1);
		self.cells[index] = Some(token);
		self.counts.increment(typ);
		token
	}

	fn take(&mut self, index: usize) -> Option<Token>
	{
		let token = self.cells[index].take()?;
		self.counts.decrement(token.typ);
		Some(token)
	}

	pub fn swap(&mut self, a: Position, b: Position)
		-> Result<PendingSwap, GridError>
	{
		let (i, mut first) = self.occupied(a)?;
		let (j, mut second) = self.occupied(b)?;

		first.position = b;
		second.position = a;
		self.cells[i] = Some(second);
		self.cells[j] = Some(first);
		self.phase = Phase::Dirty;

		trace!("Swapped {} and {}", a, b);

		let (one, x) = Relocation::signalled(first, a);
		let (two, y) = Relocation::signalled(second, b);
		Ok(PendingSwap {
			relocations: [one, two],
			settled: Settled {
				receivers: vec![x, y],
			},
		})
	}

	fn line_types(&self, line: Line) -> Option<Vec<TokenType>>
	{
		line.positions(self.side)
			.map(|position| {
				let i = self.index(position)?;
				self.cells[i].map(|token| token.typ)
			})
			.collect()
	}

	fn is_match(&self, line: Line) -> bool
	{
		match self.line_types(line)
		{
			Some(types) => evaluate(types),
			None => false,
		}
	}

	pub fn find_matches(&self) -> Vec<Line>
	{
		let rows = (0..self.side).map(Line::row);
		let columns = (0..self.side).map(Line::column);
		rows.chain(columns)
			.filter(|&line| self.is_match(line))
			.collect()
	}

	/// Run a single resolution pass and return the number of matched lines.
	/// Matches created by the refill are left for the next call.
	pub fn resolve_matches(&mut self) -> usize
	{
		let lines = self.find_matches();
		if lines.is_empty()
		{
			self.phase = Phase::Stable;
			return 0;
		}

		self.phase = Phase::Resolving;

		let side = self.side;
		let marked: Vec<usize> = lines
			.iter()
			.flat_map(|line| line.positions(side))
			.filter_map(|position| self.index(position))
			.unique()
			.collect();

		debug!(
			"Resolving {} lines ({} cells): {:?}",
			lines.len(),
			marked.len(),
			lines
		);

		self.changes
			.extend(lines.iter().map(|&line| Change::Matched { line }));
		for i in marked
		{
			if let Some(token) = self.take(i)
			{
				self.changes.push(Change::Destroyed { token });
			}
		}

		match self.policy
		{
			RefillPolicy::Gravity =>
			{
				self.collapse();
				self.fill_empty_cells();
			}
			RefillPolicy::Replace => self.fill_empty_cells(),
		}

		debug_assert!(self.is_consistent());
		self.phase = Phase::Stable;
		lines.len()
	}

	fn collapse(&mut self)
	{
		let side = self.side as usize;
		for col in 0..side
		{
			let mut floor = side;
			for row in (0..side).rev()
			{
				let i = row * side + col;
				if self.cells[i].is_some()
				{
					floor -= 1;
					if floor != row
					{
						self.relocate(i, floor * side + col);
					}
				}
			}
		}
	}

	fn relocate(&mut self, from: usize, to: usize)
	{
		debug_assert!(self.cells[to].is_none());
		let destination = self.position_of(to);
		if let Some(mut token) = self.cells[from].take()
		{
			let origin = token.position;
			token.position = destination;
			self.cells[to] = Some(token);
			self.changes.push(Change::Moved {
				token,
				from: origin,
			});
		}
	}

	fn fill_empty_cells(&mut self)
	{
		for i in 0..self.cells.len()
		{
			if self.cells[i].is_none()
			{
				let typ = self.generate();
				let token = self.place(i, typ);
				self.changes.push(Change::Created { token });
			}
		}
	}

	fn is_consistent(&self) -> bool
	{
		let recount: TypeCounts =
			self.cells.iter().flatten().map(|token| token.typ).collect();
		let placed = self.cells.iter().enumerate().all(|(i, cell)| match cell
		{
			Some(token) => self.index(token.position) == Some(i),
			None => true,
		});
		recount == self.counts && placed
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	use crate::logic::change::Axis;

	use rand::rngs::StdRng;
	use rand::Rng;
	use rand::SeedableRng;

	fn assert_stable(engine: &GridEngine)
	{
		let side = engine.side_length();
		assert_eq!(engine.count_total_blocks(), side * side);
		assert_eq!(engine.counts().total() as usize, side * side);
		assert!(engine.is_consistent());
		assert_eq!(engine.phase(), Phase::Stable);
	}

	fn ids(engine: &GridEngine, row: i8) -> Vec<u32>
	{
		(0..engine.side)
			.filter_map(|col| engine.token_at(Position::new(row, col)).ok())
			.flatten()
			.map(|token| token.id())
			.collect()
	}

	#[test]
	fn test_initialize_fills_every_cell() -> Result<(), GridError>
	{
		for side in 1..=8
		{
			for &include_not in [false, true].iter()
			{
				let engine = GridEngine::new(side, include_not)?;
				assert_stable(&engine);
				if !include_not
				{
					assert_eq!(engine.counts().get(TokenType::Not), 0);
				}
			}
		}
		Ok(())
	}

	#[test]
	fn test_initialize_is_ratio_balanced() -> Result<(), GridError>
	{
		let engine = GridEngine::new(3, false)?;
		let snapshot = engine.snapshot();
		let first: Vec<TokenType> = snapshot.cells[..3]
			.iter()
			.flatten()
			.map(|token| token.typ())
			.collect();
		assert_eq!(first, vec![TokenType::And, TokenType::Or, TokenType::True]);
		Ok(())
	}

	#[test]
	fn test_seed_targets()
	{
		assert_eq!(
			SeedTargets::for_cells(9),
			SeedTargets {
				truths: 3,
				falsehoods: 3,
				operators: 3,
			}
		);
		assert_eq!(SeedTargets::for_cells(25).truths, 8);
		assert_eq!(SeedTargets::for_cells(10).truths, 3);
		assert_eq!(SeedTargets::for_cells(1).operators, 0);
	}

	#[test]
	fn test_invalid_layouts()
	{
		assert_eq!(
			GridEngine::new(0, false).err(),
			Some(GridError::InvalidSideLength { side: 0 })
		);
		assert_eq!(
			GridEngine::new(200, false).err(),
			Some(GridError::InvalidSideLength { side: 200 })
		);
		assert_eq!(
			GridEngine::from_symbols("T&/F|F", false, RefillPolicy::Gravity)
				.err(),
			Some(GridError::NotSquare {
				rows: 2,
				row: 1,
				len: 3,
			})
		);
		assert_eq!(
			GridEngine::from_symbols("T?/FF", false, RefillPolicy::Gravity)
				.err(),
			Some(GridError::InvalidSymbol { symbol: '?' })
		);
	}

	#[test]
	fn test_token_at_bounds() -> Result<(), GridError>
	{
		let engine = GridEngine::new(3, false)?;
		for &(row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3)].iter()
		{
			let position = Position::new(row, col);
			assert_eq!(
				engine.token_at(position),
				Err(GridError::OutOfBounds { position })
			);
		}
		let token = engine.token_at(Position::new(2, 1))?;
		assert_eq!(token.map(|t| t.position()), Some(Position::new(2, 1)));
		Ok(())
	}

	#[test]
	fn test_swap_updates_positions() -> Result<(), GridError>
	{
		let mut engine = GridEngine::new(3, false)?;
		let a = Position::new(0, 0);
		let b = Position::new(2, 1);
		let before_a = engine.token_at(a)?;
		let before_b = engine.token_at(b)?;

		let swap = engine.swap(a, b)?;
		assert_eq!(engine.phase(), Phase::Dirty);

		let after_a = engine.token_at(a)?;
		let after_b = engine.token_at(b)?;
		assert_eq!(after_a.map(|t| t.id()), before_b.map(|t| t.id()));
		assert_eq!(after_b.map(|t| t.id()), before_a.map(|t| t.id()));
		assert_eq!(after_a.map(|t| t.position()), Some(a));
		assert_eq!(after_b.map(|t| t.position()), Some(b));

		let [one, two] = swap.relocations;
		assert_eq!((one.from(), one.to()), (a, b));
		assert_eq!((two.from(), two.to()), (b, a));
		assert!(engine.is_consistent());
		Ok(())
	}

	#[test]
	fn test_swap_symmetry() -> Result<(), GridError>
	{
		let mut rng = StdRng::seed_from_u64(1);
		let mut engine = GridEngine::new(5, true)?;
		for _ in 0..100
		{
			let a = Position::new(rng.gen_range(0, 5), rng.gen_range(0, 5));
			let b = Position::new(rng.gen_range(0, 5), rng.gen_range(0, 5));
			let before = engine.snapshot();
			engine.swap(a, b)?;
			engine.swap(a, b)?;
			assert_eq!(engine.snapshot(), before);
		}
		Ok(())
	}

	#[test]
	fn test_swap_completion() -> Result<(), GridError>
	{
		let mut engine = GridEngine::new(3, false)?;
		let PendingSwap {
			relocations,
			mut settled,
		} = engine.swap(Position::new(0, 0), Position::new(1, 1))?;
		assert!(!settled.is_settled());

		let [one, two] = relocations;
		one.complete();
		assert!(!settled.is_settled());
		// A relocation that is dropped without animating also counts.
		drop(two);
		assert!(settled.is_settled());
		Ok(())
	}

	#[test]
	fn test_swap_wait() -> Result<(), GridError>
	{
		let mut engine = GridEngine::new(3, false)?;
		let PendingSwap {
			relocations: [one, two],
			settled,
		} = engine.swap(Position::new(0, 0), Position::new(0, 1))?;
		one.complete();
		two.complete();
		futures::executor::block_on(settled.wait());
		Ok(())
	}

	#[test]
	fn test_swap_rejected_without_mutation() -> Result<(), GridError>
	{
		let mut engine = GridEngine::new(3, false)?;
		let before = engine.snapshot();

		let outside = Position::new(0, 3);
		assert_eq!(
			engine.swap(Position::new(0, 0), outside).err(),
			Some(GridError::OutOfBounds { position: outside })
		);

		let hole = Position::new(1, 1);
		let taken = engine.take(4);
		assert!(taken.is_some());
		assert_eq!(
			engine.swap(hole, Position::new(0, 0)).err(),
			Some(GridError::EmptyCellReferenced { position: hole })
		);
		assert_eq!(engine.token_at(hole), Ok(None));

		let mut expected = before;
		expected.cells[4] = None;
		assert_eq!(engine.snapshot(), expected);
		assert_eq!(engine.phase(), Phase::Stable);
		Ok(())
	}

	#[test]
	fn test_find_matches_is_idempotent() -> Result<(), GridError>
	{
		let mut rng = StdRng::seed_from_u64(2);
		let mut engine = GridEngine::new(5, true)?;
		for _ in 0..50
		{
			let a = Position::new(rng.gen_range(0, 5), rng.gen_range(0, 5));
			let b = Position::new(rng.gen_range(0, 5), rng.gen_range(0, 5));
			engine.swap(a, b)?;
			let first = engine.find_matches();
			let second = engine.find_matches();
			assert_eq!(first, second);
		}
		Ok(())
	}

	#[test]
	fn test_scenario() -> Result<(), GridError>
	{
		let mut engine =
			GridEngine::from_symbols("T&T/F|F/T&F", false, RefillPolicy::Gravity)?;
		assert_eq!(engine.find_matches(), vec![Line::row(0)]);

		let kept = (ids(&engine, 1), ids(&engine, 2));
		assert_eq!(engine.resolve_matches(), 1);
		assert_stable(&engine);
		assert_eq!((ids(&engine, 1), ids(&engine, 2)), kept);

		let changes = engine.take_changes();
		let destroyed: Vec<Position> = changes
			.iter()
			.filter_map(|change| match change
			{
				Change::Destroyed { token } => Some(token.position()),
				_ => None,
			})
			.collect();
		assert_eq!(destroyed, Line::row(0).positions(3).collect::<Vec<_>>());
		assert_eq!(changes[0], Change::Matched { line: Line::row(0) });
		assert!(engine.take_changes().is_empty());
		Ok(())
	}

	#[test]
	fn test_row_and_column_share_a_cell() -> Result<(), GridError>
	{
		let mut engine =
			GridEngine::from_symbols("T&T/&|F/TFF", false, RefillPolicy::Gravity)?;
		let lines = engine.find_matches();
		assert_eq!(lines, vec![Line::row(0), Line::column(0)]);
		assert_eq!(lines[1].axis, Axis::Column);

		assert_eq!(engine.resolve_matches(), 2);
		let destroyed = engine
			.take_changes()
			.into_iter()
			.filter(|change| match change
			{
				Change::Destroyed { .. } => true,
				_ => false,
			})
			.count();
		assert_eq!(destroyed, 5);
		assert_stable(&engine);
		Ok(())
	}

	#[test]
	fn test_no_match_is_a_no_op() -> Result<(), GridError>
	{
		let mut engine =
			GridEngine::from_symbols("F|F/T&F/F&T", false, RefillPolicy::Gravity)?;
		engine.swap(Position::new(0, 0), Position::new(0, 2))?;
		let before = engine.snapshot();
		assert_eq!(engine.resolve_matches(), 0);
		assert_eq!(engine.snapshot(), before);
		assert!(engine.take_changes().is_empty());
		assert_eq!(engine.phase(), Phase::Stable);
		Ok(())
	}

	#[test]
	fn test_gravity_refill() -> Result<(), GridError>
	{
		let mut engine =
			GridEngine::from_symbols("F|F/T&F/T&T", false, RefillPolicy::Gravity)?;
		let top = ids(&engine, 0);
		let middle = ids(&engine, 1);

		assert_eq!(engine.resolve_matches(), 1);
		assert_stable(&engine);
		assert_eq!(ids(&engine, 1), top);
		assert_eq!(ids(&engine, 2), middle);
		assert!(ids(&engine, 0).iter().all(|id| !top.contains(id)));

		let changes = engine.take_changes();
		let moved = changes
			.iter()
			.filter(|change| match change
			{
				Change::Moved { token, from } =>
				{
					token.position().row == from.row + 1
						&& token.position().col == from.col
				}
				_ => false,
			})
			.count();
		assert_eq!(moved, 6);
		let created = changes
			.iter()
			.filter(|change| match change
			{
				Change::Created { token } => token.position().row == 0,
				_ => false,
			})
			.count();
		assert_eq!(created, 3);
		Ok(())
	}

	#[test]
	fn test_gravity_falls_past_several_holes() -> Result<(), GridError>
	{
		let mut engine =
			GridEngine::from_symbols("F|F/T&T/T|F", false, RefillPolicy::Gravity)?;
		assert_eq!(engine.find_matches(), vec![Line::row(1), Line::row(2)]);
		let top = ids(&engine, 0);
		assert_eq!(engine.resolve_matches(), 2);
		assert_stable(&engine);
		assert_eq!(ids(&engine, 2), top);
		Ok(())
	}

	#[test]
	fn test_replace_refill() -> Result<(), GridError>
	{
		let mut engine =
			GridEngine::from_symbols("F|F/T&F/T&T", false, RefillPolicy::Replace)?;
		let top = ids(&engine, 0);
		let middle = ids(&engine, 1);
		let bottom = ids(&engine, 2);

		assert_eq!(engine.resolve_matches(), 1);
		assert_stable(&engine);
		assert_eq!(ids(&engine, 0), top);
		assert_eq!(ids(&engine, 1), middle);
		assert!(ids(&engine, 2).iter().all(|id| !bottom.contains(id)));

		let changes = engine.take_changes();
		assert!(!changes.iter().any(|change| match change
		{
			Change::Moved { .. } => true,
			_ => false,
		}));
		Ok(())
	}

	#[test]
	fn test_refill_keeps_grid_full() -> Result<(), GridError>
	{
		let mut rng = StdRng::seed_from_u64(3);
		for &policy in [RefillPolicy::Gravity, RefillPolicy::Replace].iter()
		{
			for &(side, include_not) in [(3, false), (5, true)].iter()
			{
				let mut engine =
					GridEngine::with_policy(side, include_not, policy)?;
				let n = side as i8;
				for _ in 0..200
				{
					let a = Position::new(rng.gen_range(0, n), rng.gen_range(0, n));
					let b = Position::new(rng.gen_range(0, n), rng.gen_range(0, n));
					engine.swap(a, b)?;
					engine.resolve_matches();
					assert_stable(&engine);
					engine.take_changes();
				}
			}
		}
		Ok(())
	}

	#[test]
	fn test_snapshot_display() -> Result<(), GridError>
	{
		let engine =
			GridEngine::from_symbols("T & T\nF | F\n!&F", true, RefillPolicy::Gravity)?;
		assert_eq!(engine.snapshot().to_string(), "T & T\nF | F\n! & F");
		assert_eq!(
			engine.snapshot().at(Position::new(2, 0)).map(|t| t.typ()),
			Some(TokenType::Not)
		);
		assert_eq!(engine.snapshot().at(Position::new(3, 0)), None);
		Ok(())
	}
}

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

use boolean_blocks::common::log;
use boolean_blocks::*;

use std::io::BufRead;
use std::io::Write;

use anyhow::Context;

use docopt::Docopt;

use serde_derive::Deserialize;

const USAGE: &str = "
Boolean Blocks.

Usage:
  blocks [--settings=<file>] [--mode=<mode>] [--layout=<layout>]
  blocks (-h | --help)

Options:
  -h --help          Show this screen.
  --settings=<file>  Load settings from a JSON or TOML file.
  --mode=<mode>      Either three-by-three or five-by-five.
  --layout=<layout>  Start from a fixed grid, such as 'T&T/F|F/T&F'.

Enter a row and a column to select a cell, then another to swap them.
Enter q to quit.
";

#[derive(Deserialize, Debug)]
struct Args
{
	flag_settings: Option<String>,
	flag_mode: Option<String>,
	flag_layout: Option<String>,
}

struct ConsolePresenter;

impl Presenter for ConsolePresenter
{
	fn play_removal(&mut self, typ: TokenType, position: Position)
	{
		println!("  {} breaks at {}", typ, position);
	}

	fn play_move(&mut self, relocation: Relocation)
	{
		::log::trace!(
			"Moving {} from {} to {}",
			relocation.token().typ(),
			relocation.from(),
			relocation.to()
		);
		relocation.complete();
	}

	fn play_match_cue(&mut self)
	{
		println!("  *match*");
	}
}

fn main() -> Result<(), anyhow::Error>
{
	let args: Args = Docopt::new(USAGE)
		.and_then(|d| d.deserialize())
		.unwrap_or_else(|e| e.exit());

	let mut settings = match &args.flag_settings
	{
		Some(filename) => Settings::load(filename)?,
		None => Settings::default(),
	};
	if let Some(mode) = &args.flag_mode
	{
		settings.override_mode(mode.parse()?);
	}

	log::start(settings.logname(), settings.loglevel())
		.context("starting logger")?;

	println!(
		"[ Boolean Blocks ] ({} v{})",
		settings.logname(),
		env!("CARGO_PKG_VERSION")
	);
	println!("");

	let mut session = match &args.flag_layout
	{
		Some(layout) =>
		{
			let engine = GridEngine::from_symbols(
				layout,
				settings.include_not(),
				settings.refill(),
			)?;
			Session::with_engine(engine, &settings, ConsolePresenter)
		}
		None => Session::create(&settings, ConsolePresenter)?,
	};

	session.start();
	show(&session);

	let stdin = std::io::stdin();
	for line in stdin.lock().lines()
	{
		let line = line?;
		let line = line.trim();
		if line == "q" || line == "quit"
		{
			break;
		}

		let position = match parse_position(line)
		{
			Some(position) => position,
			None =>
			{
				println!("Expected a row and a column, such as '1 2'.");
				continue;
			}
		};

		match session.activate(position)
		{
			Ok(Outcome::Selected(x)) => println!("Selected {}.", x),
			Ok(Outcome::Deselected(x)) => println!("Deselected {}.", x),
			Ok(Outcome::Swapped(settled)) =>
			{
				futures::executor::block_on(settled.wait());
				let resolution = session.resolve();
				if resolution.lines == 0
				{
					println!("No match.");
				}
				futures::executor::block_on(resolution.settled.wait());
				show(&session);
			}
			Err(error) => println!("Cannot do that: {}.", error),
		}
	}

	println!("");
	println!("[ Final score: {} ]", session.score());
	Ok(())
}

fn parse_position(line: &str) -> Option<Position>
{
	let mut parts = line
		.split(|x: char| x.is_whitespace() || x == ',')
		.filter(|part| !part.is_empty())
		.map(|part| part.parse::<i8>());
	let row = parts.next()?.ok()?;
	let col = parts.next()?.ok()?;
	if parts.next().is_some()
	{
		return None;
	}
	Some(Position::new(row, col))
}

fn show<P: Presenter>(session: &Session<P>)
{
	println!("");
	println!("{}", session.snapshot());
	println!("");
	println!("Score: {}", session.score());
	let _ = std::io::stdout().flush();
}

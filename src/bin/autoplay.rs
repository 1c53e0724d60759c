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

use anyhow::{anyhow, Context};

use docopt::Docopt;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use serde_derive::Deserialize;

const USAGE: &str = "
Boolean Blocks random play.

Usage:
  autoplay [--settings=<file>] [--turns=<n>] [--seed=<n>]
  autoplay (-h | --help)

Options:
  -h --help          Show this screen.
  --settings=<file>  Load settings from a JSON or TOML file.
  --turns=<n>        Number of swaps to attempt [default: 1000].
  --seed=<n>         Seed for picking cells.
";

#[derive(Deserialize, Debug)]
struct Args
{
	flag_settings: Option<String>,
	flag_turns: usize,
	flag_seed: Option<u64>,
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
	if settings.logname.is_none()
	{
		settings.override_logname("autoplay".to_string());
	}

	log::start(settings.logname(), settings.loglevel())
		.context("starting logger")?;

	let seed = args.flag_seed.unwrap_or_else(rand::random);
	println!(
		"[ Boolean Blocks Autoplay ] ({} v{}, seed {})",
		settings.logname(),
		env!("CARGO_PKG_VERSION"),
		seed
	);
	println!("");

	let mut rng = StdRng::seed_from_u64(seed);
	let mut session = Session::create(&settings, NullPresenter)?;
	let side = session.engine().side_length() as i8;
	let cells = session.engine().side_length().pow(2);

	let mut swaps = 0;
	let mut matched = session.start().lines;
	for turn in 0..args.flag_turns
	{
		let a = Position::new(rng.gen_range(0, side), rng.gen_range(0, side));
		let b = Position::new(rng.gen_range(0, side), rng.gen_range(0, side));
		session.activate(a)?;
		if let Outcome::Swapped(settled) = session.activate(b)?
		{
			futures::executor::block_on(settled.wait());
			swaps += 1;
			let resolution = session.resolve();
			futures::executor::block_on(resolution.settled.wait());
			matched += resolution.lines;
		}

		let engine = session.engine();
		if engine.count_total_blocks() != cells
			|| engine.counts().total() as usize != cells
			|| engine.find_matches() != engine.find_matches()
		{
			return Err(anyhow!(
				"invariant broken after turn {}:\n{}",
				turn,
				session.snapshot()
			));
		}
	}

	println!("Swaps: {}", swaps);
	println!("Matched lines: {}", matched);
	println!("Score: {}", session.score());
	println!("");

	let engine = session.engine();
	for (typ, target) in engine.profile().iter()
	{
		println!(
			"{}  target {:.2}  actual {:.2}",
			typ,
			target,
			engine.counts().fraction(typ)
		);
	}

	println!("");
	println!("[ Done ]");
	Ok(())
}

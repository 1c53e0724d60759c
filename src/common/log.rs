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
#[serde(rename_all = "lowercase")]
pub enum Level
{
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl Default for Level
{
	fn default() -> Level
	{
		Level::Info
	}
}

impl From<Level> for log::LevelFilter
{
	fn from(level: Level) -> log::LevelFilter
	{
		match level
		{
			Level::Error => log::LevelFilter::Error,
			Level::Warn => log::LevelFilter::Warn,
			Level::Info => log::LevelFilter::Info,
			Level::Debug => log::LevelFilter::Debug,
			Level::Trace => log::LevelFilter::Trace,
		}
	}
}

pub fn filename(logname: &str) -> String
{
	format!("logs/{}.log", logname)
}

pub fn start(logname: &str, level: Level) -> Result<(), fern::InitError>
{
	std::fs::create_dir_all("logs")?;

	let logfile = fern::Dispatch::new()
		.level(level.into())
		.chain(fern::log_file(filename(logname))?);

	let console = fern::Dispatch::new()
		.level(log::LevelFilter::Warn)
		.chain(std::io::stderr());

	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!(
				"{time} {lvl:5} [{tid:x}] [{target}.rs:{ln}] {msg}",
				time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
				lvl = record.level(),
				tid = thread_id::get(),
				target = record.target(),
				ln = record.line().unwrap_or(0),
				msg = message
			))
		})
		.chain(logfile)
		.chain(console)
		.apply()?;
	Ok(())
}

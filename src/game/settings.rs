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

use crate::common::log;
use crate::game::mode::Mode;
use crate::logic::grid::RefillPolicy;

use std::path::Path;

use serde_derive::Deserialize;

use anyhow::Context;

#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings
{
	#[serde(default)]
	pub logname: Option<String>,
	#[serde(default)]
	pub loglevel: Option<log::Level>,

	#[serde(default)]
	pub mode: Option<Mode>,
	#[serde(default)]
	pub side_length: Option<usize>,
	#[serde(default)]
	pub include_not: Option<bool>,

	#[serde(default)]
	pub refill: Option<RefillPolicy>,
	#[serde(default)]
	pub cascade: Option<bool>,
}

impl Settings
{
	pub fn load(filename: &str) -> Result<Settings, anyhow::Error>
	{
		let filename = Path::new(filename);
		let raw = std::fs::read_to_string(filename).with_context(|| {
			format!("reading settings from '{}'", filename.display())
		})?;
		let is_toml = filename
			.extension()
			.and_then(|x| x.to_str())
			.map(|x| x.eq_ignore_ascii_case("toml"))
			.unwrap_or(false);
		let settings = if is_toml
		{
			toml::from_str(&raw).with_context(|| {
				format!("parsing settings from '{}'", filename.display())
			})?
		}
		else
		{
			serde_json::from_str(&raw).with_context(|| {
				format!("parsing settings from '{}'", filename.display())
			})?
		};
		Ok(settings)
	}

	pub fn logname(&self) -> &str
	{
		self.logname.as_deref().unwrap_or("blocks")
	}

	pub fn override_logname(&mut self, logname: String)
	{
		self.logname = Some(logname);
	}

	pub fn loglevel(&self) -> log::Level
	{
		self.loglevel.unwrap_or_default()
	}

	pub fn mode(&self) -> Mode
	{
		self.mode.unwrap_or_default()
	}

	pub fn override_mode(&mut self, mode: Mode)
	{
		self.mode = Some(mode);
		self.side_length = None;
		self.include_not = None;
	}

	pub fn side_length(&self) -> usize
	{
		self.side_length.unwrap_or_else(|| self.mode().side_length())
	}

	pub fn include_not(&self) -> bool
	{
		self.include_not.unwrap_or_else(|| self.mode().includes_not())
	}

	pub fn refill(&self) -> RefillPolicy
	{
		self.refill.unwrap_or_default()
	}

	pub fn cascade(&self) -> bool
	{
		self.cascade.unwrap_or(false)
	}
}

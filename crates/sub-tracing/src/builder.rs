// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	filter: String,
	json: bool,
	with_target: bool,
	with_thread_names: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			filter: DEFAULT_FILTER.to_string(),
			json: false,
			with_target: true,
			with_thread_names: false,
		}
	}

	/// Filter directive used when `RUST_LOG` is not set, e.g.
	/// `"seqid_catalog=debug,info"`.
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	pub fn with_json(mut self, json: bool) -> Self {
		self.json = json;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	pub fn with_thread_names(mut self, with_thread_names: bool) -> Self {
		self.with_thread_names = with_thread_names;
		self
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub fn env_filter(&self) -> EnvFilter {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter))
	}

	/// Returns false when a global subscriber was already installed, in which
	/// case that one stays in place.
	pub fn init(self) -> bool {
		let subscriber = tracing_subscriber::fmt()
			.with_env_filter(self.env_filter())
			.with_target(self.with_target)
			.with_thread_names(self.with_thread_names);

		let installed = if self.json {
			subscriber.json().try_init().is_ok()
		} else {
			subscriber.try_init().is_ok()
		};

		if installed {
			debug!(filter = %self.filter, json = self.json, "tracing initialized");
		}
		installed
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionConfig {
	/// Upper bound for a single lock wait. `None` waits until the holder
	/// finishes.
	pub lock_timeout: Option<Duration>,
}

impl TransactionConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lock_timeout(mut self, timeout: Duration) -> Self {
		self.lock_timeout = Some(timeout);
		self
	}
}

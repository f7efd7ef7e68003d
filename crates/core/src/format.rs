// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Turns a raw sequence value into its external identifier form:
/// `prefix + zero padded value + suffix`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceFormat {
	/// Minimum number of digits; shorter values are left padded with zeros.
	pub padding: usize,
	pub prefix: String,
	pub suffix: String,
}

impl SequenceFormat {
	pub fn new(padding: usize, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
		Self {
			padding,
			prefix: prefix.into(),
			suffix: suffix.into(),
		}
	}

	pub fn apply(&self, value: u64) -> String {
		format!("{}{:0width$}{}", self.prefix, value, self.suffix, width = self.padding)
	}
}

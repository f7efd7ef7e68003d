// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use seqid_type::{error, error::diagnostic::serialization::serde_decode_error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
	/// Offer the native strategy. It is only offered when a native engine is
	/// attached as well.
	pub native_enabled: bool,
}

impl Default for SequenceConfig {
	fn default() -> Self {
		Self {
			native_enabled: true,
		}
	}
}

impl SequenceConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn native_enabled(mut self, enabled: bool) -> Self {
		self.native_enabled = enabled;
		self
	}

	pub fn from_json(json: &str) -> crate::Result<Self> {
		serde_json::from_str(json).map_err(|err| error!(serde_decode_error(err.to_string())))
	}
}

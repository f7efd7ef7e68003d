// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Coarse error classes surfaced to callers of the sequence facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Malformed sequence definition or an unavailable strategy.
	Validation,
	/// Unknown sequence id or code.
	NotFound,
	/// Native sequence object could not be created, altered, dropped or advanced.
	BackendProvisioning,
	/// Lock wait timed out or a lock upgrade would deadlock.
	ConcurrencyTimeout,
	/// No further values fit the value space.
	Exhausted,
	Serialization,
	Internal,
}

impl ErrorKind {
	pub fn from_code(code: &str) -> Self {
		let prefix = code.rsplit_once('_').map(|(prefix, _)| prefix).unwrap_or(code);
		match prefix {
			"VALIDATION" => ErrorKind::Validation,
			"NOT_FOUND" => ErrorKind::NotFound,
			"NATIVE" => ErrorKind::BackendProvisioning,
			"TXN" => ErrorKind::ConcurrencyTimeout,
			"SEQUENCE" => ErrorKind::Exhausted,
			"SERDE" => ErrorKind::Serialization,
			_ => ErrorKind::Internal,
		}
	}

	pub fn is_retryable(&self) -> bool {
		matches!(self, ErrorKind::ConcurrencyTimeout)
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorKind::Validation => f.write_str("validation"),
			ErrorKind::NotFound => f.write_str("not found"),
			ErrorKind::BackendProvisioning => f.write_str("backend provisioning"),
			ErrorKind::ConcurrencyTimeout => f.write_str("concurrency timeout"),
			ErrorKind::Exhausted => f.write_str("exhausted"),
			ErrorKind::Serialization => f.write_str("serialization"),
			ErrorKind::Internal => f.write_str("internal"),
		}
	}
}

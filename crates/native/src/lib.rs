// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Database native sequence objects.
//!
//! A native sequence hands out values atomically and outside of any host
//! transaction: a value once returned by `next_value` is never handed out
//! again, even if the caller's transaction rolls back.

use seqid_type::return_internal_error;

mod error;
mod memory;
mod sqlite;
mod statement;

pub use error::NativeError;
pub use memory::MemoryNativeSequences;
pub use seqid_type::Result;
pub use sqlite::{DbPath, SqliteConfig, SqliteNativeSequences};
pub use statement::NativeStatement;

/// Largest value a native sequence can hold; engines use signed 64-bit
/// counters.
pub const MAX_VALUE: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeSequenceState {
	pub increment: u64,
	/// Value the next `nextval` returns.
	pub next: u64,
}

pub trait NativeSequences: Send + Sync {
	fn engine(&self) -> &'static str;

	/// Executes `statement`. `NextVal` yields the value handed out, every
	/// other statement yields `None`.
	fn execute(&self, statement: &NativeStatement<'_>) -> crate::Result<Option<u64>>;

	fn state(&self, name: &str) -> crate::Result<Option<NativeSequenceState>>;

	fn exists(&self, name: &str) -> crate::Result<bool> {
		Ok(self.state(name)?.is_some())
	}

	fn create_sequence(&self, name: &str, increment: u64, start: u64) -> crate::Result<()> {
		self.execute(&NativeStatement::Create {
			name,
			increment,
			start,
		})
		.map(|_| ())
	}

	fn alter_sequence(&self, name: &str, increment: u64, restart: u64) -> crate::Result<()> {
		self.execute(&NativeStatement::Alter {
			name,
			increment,
			restart,
		})
		.map(|_| ())
	}

	fn drop_sequence(&self, name: &str) -> crate::Result<()> {
		self.execute(&NativeStatement::Drop {
			name,
		})
		.map(|_| ())
	}

	fn next_value(&self, name: &str) -> crate::Result<u64> {
		match self.execute(&NativeStatement::NextVal {
			name,
		})? {
			Some(value) => Ok(value),
			None => return_internal_error!("{} engine returned no value for nextval('{}')", self.engine(), name),
		}
	}
}

/// Rejects increments and start values the engines cannot represent.
pub(crate) fn check_bounds(engine: &'static str, statement: &NativeStatement<'_>) -> crate::Result<()> {
	let (increment, start, clause) = match *statement {
		NativeStatement::Create {
			increment,
			start,
			..
		} => (increment, start, "START WITH"),
		NativeStatement::Alter {
			increment,
			restart,
			..
		} => (increment, restart, "RESTART WITH"),
		NativeStatement::Drop {
			..
		}
		| NativeStatement::NextVal {
			..
		} => return Ok(()),
	};

	if increment == 0 || increment > MAX_VALUE {
		return Err(NativeError::Engine {
			engine,
			statement: statement.to_string(),
			reason: format!("INCREMENT BY must be between 1 and {MAX_VALUE}"),
		}
		.into());
	}

	if start > MAX_VALUE {
		return Err(NativeError::Engine {
			engine,
			statement: statement.to_string(),
			reason: format!("{clause} must not exceed {MAX_VALUE}"),
		}
		.into());
	}

	Ok(())
}

/// Value following `value`, as long as it stays representable.
pub(crate) fn successor(name: &str, value: u64, increment: u64) -> crate::Result<u64> {
	match value.checked_add(increment) {
		Some(next) if next <= MAX_VALUE => Ok(next),
		_ => Err(NativeError::Exhausted {
			name: name.to_string(),
			value,
		}
		.into()),
	}
}

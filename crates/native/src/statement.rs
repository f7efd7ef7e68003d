// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// The statements the native strategy issues against an engine.
///
/// `Display` renders the SQL an engine with native sequence support executes
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeStatement<'a> {
	Create {
		name: &'a str,
		increment: u64,
		start: u64,
	},
	Alter {
		name: &'a str,
		increment: u64,
		restart: u64,
	},
	Drop {
		name: &'a str,
	},
	NextVal {
		name: &'a str,
	},
}

impl NativeStatement<'_> {
	pub fn name(&self) -> &str {
		match self {
			NativeStatement::Create {
				name,
				..
			}
			| NativeStatement::Alter {
				name,
				..
			}
			| NativeStatement::Drop {
				name,
			}
			| NativeStatement::NextVal {
				name,
			} => name,
		}
	}
}

impl Display for NativeStatement<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			NativeStatement::Create {
				name,
				increment,
				start,
			} => write!(f, "CREATE SEQUENCE {name} INCREMENT BY {increment} START WITH {start}"),
			NativeStatement::Alter {
				name,
				increment,
				restart,
			} => write!(f, "ALTER SEQUENCE {name} INCREMENT BY {increment} RESTART WITH {restart}"),
			NativeStatement::Drop {
				name,
			} => write!(f, "DROP SEQUENCE {name}"),
			NativeStatement::NextVal {
				name,
			} => write!(f, "SELECT nextval('{name}')"),
		}
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{format::SequenceFormat, interface::SequenceId};

/// How the next raw value of a logical sequence is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
	/// Counter stored in the sequence row, incremented under an exclusive row lock.
	RowCounter,
	/// Database native sequence object, advanced outside of transactions.
	Native,
}

impl Strategy {
	pub const ALL: [Strategy; 2] = [Strategy::RowCounter, Strategy::Native];
}

impl Display for Strategy {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Strategy::RowCounter => f.write_str("row_counter"),
			Strategy::Native => f.write_str("native"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDef {
	pub id: SequenceId,
	pub name: String,
	/// Grouping key; several sequences may share one code.
	pub code: String,
	pub strategy: Strategy,
	/// Next raw value handed out by the row counter. For native sequences this
	/// is the value observed from the native object.
	pub number_next: u64,
	pub number_increment: u64,
	pub format: SequenceFormat,
}

impl SequenceDef {
	pub fn format_value(&self, value: u64) -> String {
		self.format.apply(value)
	}
}

/// Administrative input for a new logical sequence.
///
/// Numeric fields are signed so that invalid input can be reported instead of
/// being unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceToCreate {
	pub name: String,
	pub code: String,
	pub strategy: Strategy,
	pub number_next: i64,
	pub number_increment: i64,
	pub padding: i64,
	pub prefix: String,
	pub suffix: String,
}

impl SequenceToCreate {
	pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			code: code.into(),
			strategy: Strategy::RowCounter,
			number_next: 1,
			number_increment: 1,
			padding: 0,
			prefix: String::new(),
			suffix: String::new(),
		}
	}

	pub fn strategy(mut self, strategy: Strategy) -> Self {
		self.strategy = strategy;
		self
	}

	pub fn starting_at(mut self, number_next: i64) -> Self {
		self.number_next = number_next;
		self
	}

	pub fn increment_by(mut self, number_increment: i64) -> Self {
		self.number_increment = number_increment;
		self
	}

	pub fn padding(mut self, padding: i64) -> Self {
		self.padding = padding;
		self
	}

	pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
		self.suffix = suffix.into();
		self
	}
}

/// Partial update of a logical sequence; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceUpdate {
	pub name: Option<String>,
	pub code: Option<String>,
	pub strategy: Option<Strategy>,
	pub number_next: Option<i64>,
	pub number_increment: Option<i64>,
	pub padding: Option<i64>,
	pub prefix: Option<String>,
	pub suffix: Option<String>,
}

impl SequenceUpdate {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn strategy(mut self, strategy: Strategy) -> Self {
		self.strategy = Some(strategy);
		self
	}

	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn code(mut self, code: impl Into<String>) -> Self {
		self.code = Some(code.into());
		self
	}

	pub fn number_next(mut self, number_next: i64) -> Self {
		self.number_next = Some(number_next);
		self
	}

	pub fn number_increment(mut self, number_increment: i64) -> Self {
		self.number_increment = Some(number_increment);
		self
	}

	pub fn padding(mut self, padding: i64) -> Self {
		self.padding = Some(padding);
		self
	}

	pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
		self.suffix = Some(suffix.into());
		self
	}

	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}
}

/// Addresses a logical sequence either by id or by code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SequenceRef {
	Id(SequenceId),
	/// Resolves to the sequence with the lowest id among those sharing the code.
	Code(String),
}

impl From<SequenceId> for SequenceRef {
	fn from(id: SequenceId) -> Self {
		SequenceRef::Id(id)
	}
}

impl From<&str> for SequenceRef {
	fn from(code: &str) -> Self {
		SequenceRef::Code(code.to_string())
	}
}

impl From<String> for SequenceRef {
	fn from(code: String) -> Self {
		SequenceRef::Code(code)
	}
}

impl Display for SequenceRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			SequenceRef::Id(id) => write!(f, "#{}", id),
			SequenceRef::Code(code) => write!(f, "'{}'", code),
		}
	}
}

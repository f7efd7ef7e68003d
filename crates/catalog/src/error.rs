// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::interface::{SequenceId, Strategy};
use seqid_type::{Diagnostic, Error, IntoDiagnostic};

use crate::validate::MAX_PADDING;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum SequenceError {
	#[error("sequence increment must be positive, got {increment}")]
	InvalidIncrement {
		increment: i64,
	},

	#[error("sequence padding must be between 0 and {max}, got {padding}", max = MAX_PADDING)]
	InvalidPadding {
		padding: i64,
	},

	#[error("sequence start value must not be negative, got {number_next}")]
	InvalidStart {
		number_next: i64,
	},

	#[error("strategy `{strategy}` is not offered: {reason}")]
	StrategyNotOffered {
		strategy: Strategy,
		reason: &'static str,
	},

	#[error("sequence {id} not found")]
	NotFound {
		id: SequenceId,
	},

	#[error("no sequence with code `{code}`")]
	CodeNotFound {
		code: String,
	},

	#[error("sequence {id} is exhausted at {value}")]
	Exhausted {
		id: SequenceId,
		value: u64,
		increment: u64,
	},
}

impl IntoDiagnostic for SequenceError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		let (code, label, help, notes) = match self {
			SequenceError::InvalidIncrement {
				..
			} => ("VALIDATION_001", Some("number_increment".to_string()), Some("use an increment of 1 or more"), vec![]),
			SequenceError::InvalidPadding {
				..
			} => (
				"VALIDATION_002",
				Some("padding".to_string()),
				Some("use a non-negative padding within the limit"),
				vec![format!("formatted values are padded to at most {MAX_PADDING} digits")],
			),
			SequenceError::InvalidStart {
				..
			} => ("VALIDATION_003", Some("number_next".to_string()), Some("use a start value of 0 or more"), vec![]),
			SequenceError::StrategyNotOffered {
				strategy,
				..
			} => (
				"VALIDATION_004",
				Some(format!("strategy `{strategy}`")),
				None,
				vec!["the native strategy needs native sequences enabled and a native engine attached".to_string()],
			),
			SequenceError::NotFound {
				id,
			} => ("NOT_FOUND_001", Some(format!("sequence {id}")), None, vec![]),
			SequenceError::CodeNotFound {
				code,
			} => ("NOT_FOUND_002", Some(format!("code `{code}`")), None, vec![]),
			SequenceError::Exhausted {
				id,
				increment,
				..
			} => (
				"SEQUENCE_001",
				Some(format!("sequence {id}")),
				Some("restart the sequence at a lower value or use a new sequence"),
				vec![format!("the next value plus the increment of {increment} does not fit in 64 bits")],
			),
		};

		Diagnostic {
			code: code.to_string(),
			message,
			label,
			help: help.map(str::to_string),
			notes,
			cause: None,
		}
	}
}

impl From<SequenceError> for Error {
	fn from(err: SequenceError) -> Self {
		Error::new(err)
	}
}

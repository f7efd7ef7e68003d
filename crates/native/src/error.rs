// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum NativeError {
	#[error("native sequence `{name}` already exists")]
	AlreadyExists {
		name: String,
	},

	#[error("native sequence `{name}` does not exist")]
	Missing {
		name: String,
	},

	#[error("{engine} engine failed to execute `{statement}`: {reason}")]
	Engine {
		engine: &'static str,
		statement: String,
		reason: String,
	},

	#[error("native sequence `{name}` is exhausted at {value}")]
	Exhausted {
		name: String,
		value: u64,
	},
}

impl IntoDiagnostic for NativeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			NativeError::AlreadyExists {
				name,
			} => Diagnostic {
				code: "NATIVE_001".to_string(),
				message,
				label: Some(name),
				help: Some(
					"an object with the derived name is left over from an earlier sequence; drop it manually"
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
			NativeError::Missing {
				name,
			} => Diagnostic {
				code: "NATIVE_002".to_string(),
				message,
				label: Some(name),
				help: None,
				notes: vec!["a native backed sequence must own exactly one native object".to_string()],
				cause: None,
			},
			NativeError::Engine {
				statement,
				..
			} => Diagnostic {
				code: "NATIVE_003".to_string(),
				message,
				label: Some(statement),
				help: None,
				notes: vec![],
				cause: None,
			},
			NativeError::Exhausted {
				name,
				..
			} => Diagnostic {
				code: "SEQUENCE_001".to_string(),
				message,
				label: Some(name),
				help: Some("restart the sequence or switch it to a new one".to_string()),
				notes: vec!["native values are limited to the signed 64-bit range".to_string()],
				cause: None,
			},
		}
	}
}

impl From<NativeError> for Error {
	fn from(err: NativeError) -> Self {
		Error::new(err)
	}
}

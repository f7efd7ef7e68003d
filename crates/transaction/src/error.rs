// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

use seqid_core::EncodedKey;
use seqid_type::{Diagnostic, Error, IntoDiagnostic};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError, Clone, PartialEq)]
pub enum TransactionError {
	#[error("timed out after {waited:?} waiting for a lock on key {key}")]
	LockTimeout {
		key: String,
		waited: Duration,
	},

	#[error("lock upgrade on key {key} conflicts with another upgrading transaction")]
	UpgradeConflict {
		key: String,
	},
}

impl TransactionError {
	pub(crate) fn lock_timeout(key: &EncodedKey, waited: Duration) -> Self {
		Self::LockTimeout {
			key: hex(key),
			waited,
		}
	}

	pub(crate) fn upgrade_conflict(key: &EncodedKey) -> Self {
		Self::UpgradeConflict {
			key: hex(key),
		}
	}
}

impl IntoDiagnostic for TransactionError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TransactionError::LockTimeout {
				key,
				..
			} => Diagnostic {
				code: "TXN_001".to_string(),
				message,
				label: Some(format!("lock on {key}")),
				help: Some("retry the transaction".to_string()),
				notes: vec!["no partial effects of the transaction remain after rollback".to_string()],
				cause: None,
			},
			TransactionError::UpgradeConflict {
				key,
			} => Diagnostic {
				code: "TXN_002".to_string(),
				message,
				label: Some(format!("lock on {key}")),
				help: Some("retry the transaction".to_string()),
				notes: vec![
					"two transactions holding a shared lock both requested the exclusive lock".to_string(),
				],
				cause: None,
			},
		}
	}
}

impl From<TransactionError> for Error {
	fn from(err: TransactionError) -> Self {
		Error::new(err)
	}
}

fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::{
	EncodedKey, EncodedRow,
	interface::{CommandTransaction, LockMode},
};
use seqid_type::{Diagnostic, error};

/// Counter row for internal ids, advanced under the exclusive lock of the
/// caller's transaction.
pub(crate) struct GeneratorU64 {}

impl GeneratorU64 {
	pub(crate) fn next(txn: &mut impl CommandTransaction, key: &EncodedKey, default: Option<u64>) -> crate::Result<u64> {
		let next = match txn.get_locked(key, LockMode::Exclusive)? {
			Some(row) => {
				let current: u64 = row.decode()?;
				current.checked_add(1).ok_or_else(|| error!(system_sequence_exhausted()))?
			}
			None => default.unwrap_or(1),
		};

		txn.set(key, EncodedRow::encode(&next)?)?;
		Ok(next)
	}

	#[cfg(test)]
	pub(crate) fn current(txn: &mut impl CommandTransaction, key: &EncodedKey) -> crate::Result<Option<u64>> {
		txn.get(key)?.map(|row| row.decode()).transpose()
	}
}

fn system_sequence_exhausted() -> Diagnostic {
	Diagnostic {
		code: "SEQUENCE_002".to_string(),
		message: "internal id generator exhausted".to_string(),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

#[cfg(test)]
mod tests {
	use seqid_core::{EncodedKey, EncodedRow, interface::CommandTransaction};
	use seqid_transaction::test_utils::create_test_command_transaction;
	use seqid_type::ErrorKind;

	use super::GeneratorU64;

	#[test]
	fn test_ok() {
		let mut txn = create_test_command_transaction();
		let key = EncodedKey::new("sequence");
		for expected in 1..1000 {
			assert_eq!(GeneratorU64::next(&mut txn, &key, None).unwrap(), expected);
		}
		assert_eq!(GeneratorU64::current(&mut txn, &key).unwrap(), Some(999));
	}

	#[test]
	fn test_default() {
		let mut txn = create_test_command_transaction();
		let key = EncodedKey::new("sequence_with_default");
		assert_eq!(GeneratorU64::next(&mut txn, &key, Some(100)).unwrap(), 100);
		assert_eq!(GeneratorU64::next(&mut txn, &key, Some(100)).unwrap(), 101);
	}

	#[test]
	fn test_exhaustion() {
		let mut txn = create_test_command_transaction();
		let key = EncodedKey::new("sequence");
		txn.set(&key, EncodedRow::encode(&u64::MAX).unwrap()).unwrap();

		let err = GeneratorU64::next(&mut txn, &key, None).unwrap_err();
		assert_eq!(err.code(), "SEQUENCE_002");
		assert_eq!(err.kind(), ErrorKind::Exhausted);
	}
}

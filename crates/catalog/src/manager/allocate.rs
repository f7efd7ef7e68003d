// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::interface::{CommandTransaction, LockMode, SequenceDef, SequenceId, SequenceRef, Strategy};
use tracing::{instrument, trace};

use super::SequenceManager;
use crate::{SequenceError, backend::RowBackend, store::CatalogStore};

impl SequenceManager {
	/// Hands out the next value of a sequence in its external form:
	/// `prefix + zero padded value + suffix`.
	pub fn allocate(
		&self,
		txn: &mut impl CommandTransaction,
		reference: impl Into<SequenceRef>,
	) -> crate::Result<String> {
		let (def, value) = self.allocate_value(txn, &reference.into())?;
		Ok(def.format_value(value))
	}

	/// Hands out the next raw value of a sequence.
	pub fn next_value(&self, txn: &mut impl CommandTransaction, reference: impl Into<SequenceRef>) -> crate::Result<u64> {
		self.allocate_value(txn, &reference.into()).map(|(_, value)| value)
	}

	/// Resolves a reference to a sequence id; codes resolve to the lowest id
	/// using them.
	pub fn resolve(&self, txn: &mut impl CommandTransaction, reference: &SequenceRef) -> crate::Result<SequenceId> {
		match reference {
			SequenceRef::Id(id) => Ok(*id),
			SequenceRef::Code(code) => CatalogStore::find_sequence_id_by_code(txn, code)?.ok_or_else(|| {
				SequenceError::CodeNotFound {
					code: code.clone(),
				}
				.into()
			}),
		}
	}

	/// The row counter serializes allocators through the exclusive lock on
	/// the record. Native allocators share the lock, which only keeps them
	/// apart from administrative changes to the record.
	#[instrument(name = "sequence::allocate", level = "trace", skip_all, fields(reference = %reference))]
	fn allocate_value(
		&self,
		txn: &mut impl CommandTransaction,
		reference: &SequenceRef,
	) -> crate::Result<(SequenceDef, u64)> {
		let id = self.resolve(txn, reference)?;

		let mode = match CatalogStore::get_sequence(txn, id)?.strategy {
			Strategy::RowCounter => LockMode::Exclusive,
			Strategy::Native => LockMode::Shared,
		};
		let mut def = CatalogStore::get_sequence_locked(txn, id, mode)?;
		if def.strategy == Strategy::RowCounter && mode == LockMode::Shared {
			trace!(id = %id, "strategy changed before the lock was granted, escalating");
			def = CatalogStore::get_sequence_locked(txn, id, LockMode::Exclusive)?;
		}

		let value = match def.strategy {
			Strategy::RowCounter => RowBackend::next(txn, &mut def)?,
			Strategy::Native => self.native_backend()?.next(id)?,
		};
		trace!(id = %id, value, "allocated");
		Ok((def, value))
	}
}

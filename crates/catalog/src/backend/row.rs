// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::interface::{CommandTransaction, SequenceDef};
use tracing::{instrument, trace};

use crate::{SequenceError, store::CatalogStore};

/// Counter kept in the sequence record itself.
///
/// The caller must hold the exclusive lock on the record; the write joins the
/// caller's transaction, so a rollback hands the value out again.
pub(crate) struct RowBackend {}

impl RowBackend {
	#[instrument(name = "sequence::row::next", level = "trace", skip_all, fields(id = %def.id))]
	pub(crate) fn next(txn: &mut impl CommandTransaction, def: &mut SequenceDef) -> crate::Result<u64> {
		let value = def.number_next;
		let next = value.checked_add(def.number_increment).ok_or(SequenceError::Exhausted {
			id: def.id,
			value,
			increment: def.number_increment,
		})?;

		def.number_next = next;
		CatalogStore::write_sequence(txn, def)?;
		trace!(value, next, "advanced row counter");
		Ok(value)
	}
}

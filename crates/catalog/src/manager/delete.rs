// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::interface::{CommandTransaction, LockMode, SequenceId, Strategy};
use tracing::{debug, instrument};

use super::{SequenceManager, atomically};
use crate::store::CatalogStore;

impl SequenceManager {
	/// Removes a sequence together with its native object.
	#[instrument(name = "sequence::delete", level = "debug", skip(self, txn), fields(id = %id))]
	pub fn delete_sequence(&self, txn: &mut impl CommandTransaction, id: SequenceId) -> crate::Result<()> {
		atomically(txn, |txn| self.apply_delete(txn, id))
	}

	/// Removes several sequences; all of them go or none does.
	#[instrument(name = "sequence::delete_many", level = "debug", skip(self, txn), fields(count = ids.len()))]
	pub fn delete_sequences(&self, txn: &mut impl CommandTransaction, ids: &[SequenceId]) -> crate::Result<()> {
		atomically(txn, |txn| ids.iter().try_for_each(|id| self.apply_delete(txn, *id)))
	}

	fn apply_delete(&self, txn: &mut impl CommandTransaction, id: SequenceId) -> crate::Result<()> {
		let def = CatalogStore::get_sequence_locked(txn, id, LockMode::Exclusive)?;
		match def.strategy {
			Strategy::RowCounter => {}
			Strategy::Native => {
				self.native_backend()?.decommission(txn, id)?;
			}
		}
		CatalogStore::delete_sequence(txn, &def)?;
		debug!(id = %id, "deleted sequence");
		Ok(())
	}
}

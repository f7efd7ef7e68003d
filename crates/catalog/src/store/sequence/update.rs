// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::{
	interface::{CommandTransaction, Repair, SequenceDef, SequenceId},
	key::{SequenceCodeKey, SequenceKey},
};

use super::{decode, encode, index_row};
use crate::store::CatalogStore;

impl CatalogStore {
	/// Rewrites the record, moving its code index entry if the code changed.
	pub(crate) fn update_sequence(
		txn: &mut impl CommandTransaction,
		before: &SequenceDef,
		after: &SequenceDef,
	) -> crate::Result<()> {
		if before.code != after.code {
			txn.remove(&SequenceCodeKey::encoded(before.code.as_str(), before.id))?;
			txn.set(&SequenceCodeKey::encoded(after.code.as_str(), after.id), index_row())?;
		}
		Self::write_sequence(txn, after)
	}

	pub(crate) fn write_sequence(txn: &mut impl CommandTransaction, def: &SequenceDef) -> crate::Result<()> {
		txn.set(&SequenceKey::encoded(def.id), encode(def)?)
	}

	/// Raises the counter of the restored record to at least `number_next`
	/// while its transaction rolls back. A record that no longer exists is
	/// left alone.
	pub(crate) fn repair_number_next(repair: &mut dyn Repair, id: SequenceId, number_next: u64) -> crate::Result<()> {
		let key = SequenceKey::encoded(id);
		let Some(row) = repair.get(&key)? else {
			return Ok(());
		};
		let mut def = decode(&row)?;
		if def.number_next >= number_next {
			return Ok(());
		}
		def.number_next = number_next;
		repair.set(&key, encode(&def)?)
	}
}

#[cfg(test)]
mod tests {
	use seqid_core::interface::{CommandTransaction, LockMode, Repair};
	use seqid_transaction::test_utils::{create_test_command_transaction, create_test_engine};

	use crate::{store::CatalogStore, test_utils::sequence_def};

	#[test]
	fn test_update_moves_code_index() {
		let mut txn = create_test_command_transaction();
		let before = sequence_def(1, "purchase");
		CatalogStore::create_sequence(&mut txn, &before).unwrap();

		let mut after = before.clone();
		after.code = "purchase.order".to_string();
		after.number_next = 40;
		CatalogStore::update_sequence(&mut txn, &before, &after).unwrap();

		assert_eq!(CatalogStore::find_sequence_id_by_code(&mut txn, "purchase").unwrap(), None);
		assert_eq!(CatalogStore::find_sequence_id_by_code(&mut txn, "purchase.order").unwrap(), Some(after.id));
		assert_eq!(CatalogStore::get_sequence(&mut txn, after.id).unwrap().number_next, 40);
	}

	#[test]
	fn test_repair_raises_restored_counter() {
		let engine = create_test_engine();
		let def = sequence_def(3, "stock.move");
		engine.with_command(|txn| CatalogStore::create_sequence(txn, &def)).unwrap();

		let mut txn = engine.begin_command();
		let mut moved = CatalogStore::get_sequence_locked(&mut txn, def.id, LockMode::Exclusive).unwrap();
		moved.number_next = 90;
		CatalogStore::write_sequence(&mut txn, &moved).unwrap();
		let id = def.id;
		txn.on_rollback(Box::new(move |repair: &mut dyn Repair| {
			CatalogStore::repair_number_next(repair, id, 7).unwrap();
		}));
		txn.rollback().unwrap();

		let restored = engine.with_command(|txn| CatalogStore::get_sequence(txn, def.id)).unwrap();
		assert_eq!(restored.number_next, 7);
		assert_eq!(restored.code, def.code);
	}

	#[test]
	fn test_repair_never_lowers_counter() {
		let engine = create_test_engine();
		let mut def = sequence_def(4, "stock.move");
		def.number_next = 50;
		engine.with_command(|txn| CatalogStore::create_sequence(txn, &def)).unwrap();

		let mut txn = engine.begin_command();
		CatalogStore::get_sequence_locked(&mut txn, def.id, LockMode::Exclusive).unwrap();
		let id = def.id;
		txn.on_rollback(Box::new(move |repair: &mut dyn Repair| {
			CatalogStore::repair_number_next(repair, id, 7).unwrap();
		}));
		txn.rollback().unwrap();

		assert_eq!(engine.with_command(|txn| CatalogStore::get_sequence(txn, def.id)).unwrap().number_next, 50);
	}
}

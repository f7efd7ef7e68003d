// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::{
	interface::{CommandTransaction, SequenceDef},
	key::{SequenceCodeKey, SequenceKey},
};

use super::{encode, index_row};
use crate::store::CatalogStore;

impl CatalogStore {
	pub(crate) fn create_sequence(txn: &mut impl CommandTransaction, def: &SequenceDef) -> crate::Result<()> {
		txn.set(&SequenceKey::encoded(def.id), encode(def)?)?;
		txn.set(&SequenceCodeKey::encoded(def.code.as_str(), def.id), index_row())?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use seqid_transaction::test_utils::create_test_command_transaction;

	use crate::{store::CatalogStore, test_utils::sequence_def};

	#[test]
	fn test_create_is_visible_by_id_and_code() {
		let mut txn = create_test_command_transaction();
		let def = sequence_def(4, "stock.move");
		CatalogStore::create_sequence(&mut txn, &def).unwrap();

		assert_eq!(CatalogStore::find_sequence(&mut txn, def.id).unwrap(), Some(def.clone()));
		assert_eq!(CatalogStore::find_sequence_id_by_code(&mut txn, "stock.move").unwrap(), Some(def.id));
	}
}

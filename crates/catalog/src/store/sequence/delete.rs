// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::{
	interface::{CommandTransaction, SequenceDef},
	key::{SequenceCodeKey, SequenceKey},
};

use crate::store::CatalogStore;

impl CatalogStore {
	pub(crate) fn delete_sequence(txn: &mut impl CommandTransaction, def: &SequenceDef) -> crate::Result<()> {
		txn.remove(&SequenceCodeKey::encoded(def.code.as_str(), def.id))?;
		txn.remove(&SequenceKey::encoded(def.id))
	}
}

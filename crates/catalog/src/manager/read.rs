// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::interface::{CommandTransaction, SequenceDef, SequenceId};

use super::SequenceManager;
use crate::store::CatalogStore;

impl SequenceManager {
	pub fn get_sequence(&self, txn: &mut impl CommandTransaction, id: SequenceId) -> crate::Result<SequenceDef> {
		self.observe(CatalogStore::get_sequence(txn, id)?)
	}

	pub fn find_sequence(
		&self,
		txn: &mut impl CommandTransaction,
		id: SequenceId,
	) -> crate::Result<Option<SequenceDef>> {
		CatalogStore::find_sequence(txn, id)?.map(|def| self.observe(def)).transpose()
	}

	pub fn find_sequence_by_code(
		&self,
		txn: &mut impl CommandTransaction,
		code: &str,
	) -> crate::Result<Option<SequenceDef>> {
		match CatalogStore::find_sequence_id_by_code(txn, code)? {
			Some(id) => self.find_sequence(txn, id),
			None => Ok(None),
		}
	}

	pub fn list_sequences(&self, txn: &mut impl CommandTransaction) -> crate::Result<Vec<SequenceDef>> {
		CatalogStore::list_sequences(txn)?.into_iter().map(|def| self.observe(def)).collect()
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::{
	interface::{CommandTransaction, SequenceDef},
	key::SequenceKey,
};

use super::decode;
use crate::store::CatalogStore;

impl CatalogStore {
	/// All records in ascending id order.
	pub(crate) fn list_sequences(txn: &mut impl CommandTransaction) -> crate::Result<Vec<SequenceDef>> {
		txn.range(SequenceKey::full_scan())?.iter().map(|(_, row)| decode(row)).collect()
	}
}

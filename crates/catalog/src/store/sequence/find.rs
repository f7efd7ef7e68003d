// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::{
	EncodableKey,
	interface::{CommandTransaction, SequenceDef, SequenceId},
	key::{SequenceCodeKey, SequenceKey},
};

use super::decode;
use crate::store::CatalogStore;

impl CatalogStore {
	/// Reads the record without locking it.
	pub(crate) fn find_sequence(
		txn: &mut impl CommandTransaction,
		id: SequenceId,
	) -> crate::Result<Option<SequenceDef>> {
		txn.get(&SequenceKey::encoded(id))?.map(|row| decode(&row)).transpose()
	}

	/// Lowest id among the sequences using `code`.
	pub(crate) fn find_sequence_id_by_code(
		txn: &mut impl CommandTransaction,
		code: &str,
	) -> crate::Result<Option<SequenceId>> {
		let entries = txn.range(SequenceCodeKey::code_scan(code))?;
		Ok(entries.iter().find_map(|(key, _)| SequenceCodeKey::decode(key)).map(|entry| entry.sequence))
	}
}

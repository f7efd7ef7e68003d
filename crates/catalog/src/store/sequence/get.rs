// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::{
	interface::{CommandTransaction, LockMode, SequenceDef, SequenceId},
	key::SequenceKey,
};

use super::decode;
use crate::{SequenceError, store::CatalogStore};

impl CatalogStore {
	pub(crate) fn get_sequence(txn: &mut impl CommandTransaction, id: SequenceId) -> crate::Result<SequenceDef> {
		Self::find_sequence(txn, id)?.ok_or_else(|| SequenceError::NotFound {
			id,
		}
		.into())
	}

	/// Locks the record in `mode` for the rest of the transaction and reads it.
	pub(crate) fn get_sequence_locked(
		txn: &mut impl CommandTransaction,
		id: SequenceId,
		mode: LockMode,
	) -> crate::Result<SequenceDef> {
		match txn.get_locked(&SequenceKey::encoded(id), mode)? {
			Some(row) => decode(&row),
			None => Err(SequenceError::NotFound {
				id,
			}
			.into()),
		}
	}
}

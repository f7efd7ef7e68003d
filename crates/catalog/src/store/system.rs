// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use once_cell::sync::Lazy;
use seqid_core::{
	EncodedKey,
	interface::{CommandTransaction, SequenceId},
	key::{SystemSequenceId, SystemSequenceKey},
};

use crate::store::generator::GeneratorU64;

pub(crate) const SEQUENCE: SystemSequenceId = SystemSequenceId(1);

static SEQUENCE_KEY: Lazy<EncodedKey> = Lazy::new(|| SystemSequenceKey::encoded(SEQUENCE));

pub(crate) struct SystemSequence {}

impl SystemSequence {
	/// Ids are never handed out twice once the creating transaction commits.
	pub(crate) fn next_sequence_id(txn: &mut impl CommandTransaction) -> crate::Result<SequenceId> {
		GeneratorU64::next(txn, &SEQUENCE_KEY, Some(1)).map(SequenceId)
	}
}

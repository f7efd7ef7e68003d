// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use seqid_core::{
	format::SequenceFormat,
	interface::{SequenceDef, SequenceId, Strategy},
};
use seqid_native::MemoryNativeSequences;

use crate::{SequenceConfig, SequenceManager};

pub(crate) fn sequence_def(id: u64, code: &str) -> SequenceDef {
	SequenceDef {
		id: SequenceId(id),
		name: format!("sequence {id}"),
		code: code.to_string(),
		strategy: Strategy::RowCounter,
		number_next: 1,
		number_increment: 1,
		format: SequenceFormat::default(),
	}
}

/// Manager without a native engine.
pub(crate) fn create_test_manager() -> SequenceManager {
	SequenceManager::new(SequenceConfig::default())
}

/// Manager with an in-memory native engine, returned alongside so tests can
/// inspect the native objects.
pub(crate) fn create_native_test_manager() -> (SequenceManager, MemoryNativeSequences) {
	let engine = MemoryNativeSequences::new();
	let manager = SequenceManager::new(SequenceConfig::default()).with_native_engine(Arc::new(engine.clone()));
	(manager, engine)
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod common;

use std::{sync::Arc, time::Duration};

use common::engines;
use seqid::{
	ErrorKind, SequenceConfig, SequenceToCreate, SequenceUpdate, SequencesBuilder, Strategy, TransactionConfig,
	catalog::NativeBackend,
	native::{MemoryNativeSequences, NativeSequences},
};

#[test]
fn test_native_disabled_is_rejected() {
	let sequences = SequencesBuilder::new()
		.with_config(SequenceConfig::new().native_enabled(false))
		.in_memory_native()
		.build()
		.unwrap();

	let err = sequences.create(SequenceToCreate::new("Moves", "stock.move").strategy(Strategy::Native)).unwrap_err();
	assert_eq!(err.code(), "VALIDATION_004");
	assert_eq!(err.kind(), ErrorKind::Validation);

	let def = sequences.create(SequenceToCreate::new("Moves", "stock.move")).unwrap();
	let err = sequences.update_strategy(def.id, Strategy::Native).unwrap_err();
	assert_eq!(err.code(), "VALIDATION_004");
	assert!(sequences.list().unwrap().iter().all(|def| def.strategy == Strategy::RowCounter));
}

#[test]
fn test_invalid_definitions() {
	let sequences = SequencesBuilder::new().build().unwrap();

	let cases = [
		(SequenceToCreate::new("A", "a").increment_by(0), "VALIDATION_001"),
		(SequenceToCreate::new("A", "a").increment_by(-3), "VALIDATION_001"),
		(SequenceToCreate::new("A", "a").padding(-1), "VALIDATION_002"),
		(SequenceToCreate::new("A", "a").padding(i64::MAX), "VALIDATION_002"),
		(SequenceToCreate::new("A", "a").starting_at(-1), "VALIDATION_003"),
	];
	for (to_create, code) in cases {
		assert_eq!(sequences.create(to_create).unwrap_err().code(), code);
	}
	assert!(sequences.list().unwrap().is_empty());
}

#[test]
fn test_oversized_padding_update_is_rejected() {
	let sequences = SequencesBuilder::new().build().unwrap();
	let def = sequences.create(SequenceToCreate::new("Moves", "stock.move").padding(4)).unwrap();

	let err = sequences.update(def.id, SequenceUpdate::new().padding(1 << 40)).unwrap_err();
	assert_eq!(err.code(), "VALIDATION_002");
	assert_eq!(sequences.get(def.id).unwrap().format.padding, 4);
	assert_eq!(sequences.allocate(def.id).unwrap(), "0001");
}

#[test]
fn test_provisioning_failure_rolls_back() {
	let native = MemoryNativeSequences::new();
	let sequences = SequencesBuilder::new().with_native_engine(Arc::new(native.clone())).build().unwrap();

	let def = sequences.create(SequenceToCreate::new("Moves", "stock.move")).unwrap();
	sequences.next_value(def.id).unwrap();
	native.create_sequence(&NativeBackend::object_name(def.id), 1, 500).unwrap();

	let err = sequences.update_strategy(def.id, Strategy::Native).unwrap_err();
	assert_eq!(err.code(), "NATIVE_001");
	assert_eq!(err.kind(), ErrorKind::BackendProvisioning);

	assert_eq!(sequences.get(def.id).unwrap().strategy, Strategy::RowCounter);
	assert_eq!(sequences.next_value(def.id).unwrap(), 2);
}

#[test]
fn test_rolled_back_create_drops_native_object() {
	for (engine, sequences) in engines() {
		let native = sequences.manager().native().unwrap().engine().clone();

		let mut txn = sequences.begin_command();
		let def = sequences
			.manager()
			.create_sequence(&mut txn, SequenceToCreate::new("Moves", "stock.move").strategy(Strategy::Native))
			.unwrap();
		assert!(native.exists(&NativeBackend::object_name(def.id)).unwrap(), "{engine}");
		txn.rollback().unwrap();

		assert!(!native.exists(&NativeBackend::object_name(def.id)).unwrap(), "{engine}");
		assert!(sequences.list().unwrap().is_empty(), "{engine}");
	}
}

#[test]
fn test_delete_drops_native_object() {
	for (engine, sequences) in engines() {
		let native = sequences.manager().native().unwrap().engine().clone();
		let def = sequences.create(SequenceToCreate::new("Moves", "stock.move").strategy(Strategy::Native)).unwrap();
		sequences.next_value(def.id).unwrap();

		sequences.delete(def.id).unwrap();

		assert!(!native.exists(&NativeBackend::object_name(def.id)).unwrap(), "{engine}");
		assert_eq!(sequences.next_value(def.id).unwrap_err().code(), "NOT_FOUND_001", "{engine}");
	}
}

#[test]
fn test_ids_are_not_reused_after_delete() {
	let sequences = SequencesBuilder::new().build().unwrap();
	let first = sequences.create(SequenceToCreate::new("A", "a")).unwrap();
	sequences.delete(first.id).unwrap();
	let second = sequences.create(SequenceToCreate::new("B", "b")).unwrap();
	assert!(second.id > first.id);
}

#[test]
fn test_lock_wait_timeout_is_retryable() {
	let sequences = SequencesBuilder::new()
		.with_transaction_config(TransactionConfig::new().lock_timeout(Duration::from_millis(50)))
		.build()
		.unwrap();
	let def = sequences.create(SequenceToCreate::new("Invoices", "account.invoice")).unwrap();

	let mut holder = sequences.begin_command();
	assert_eq!(sequences.manager().next_value(&mut holder, def.id).unwrap(), 1);

	let err = sequences.next_value(def.id).unwrap_err();
	assert_eq!(err.code(), "TXN_001");
	assert!(err.is_retryable());

	holder.commit().unwrap();
	assert_eq!(sequences.next_value(def.id).unwrap(), 2);
}

#[test]
fn test_native_allocation_does_not_wait_for_allocators() {
	let sequences = SequencesBuilder::new()
		.with_transaction_config(TransactionConfig::new().lock_timeout(Duration::from_millis(50)))
		.in_memory_native()
		.build()
		.unwrap();
	let def = sequences.create(SequenceToCreate::new("Moves", "stock.move").strategy(Strategy::Native)).unwrap();

	let mut holder = sequences.begin_command();
	assert_eq!(sequences.manager().next_value(&mut holder, def.id).unwrap(), 1);
	assert_eq!(sequences.next_value(def.id).unwrap(), 2);

	// an administrative change has to wait for the open allocator
	let err = sequences.update_strategy(def.id, Strategy::RowCounter).unwrap_err();
	assert_eq!(err.code(), "TXN_001");

	holder.rollback().unwrap();
	assert_eq!(sequences.update_strategy(def.id, Strategy::RowCounter).unwrap().number_next, 3);
}

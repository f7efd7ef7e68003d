// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_catalog::SequenceManager;
use seqid_core::interface::{SequenceDef, SequenceId, SequenceRef, SequenceToCreate, SequenceUpdate, Strategy};
use seqid_transaction::{SvlCommandTransaction, TransactionSvl};

/// A transaction engine and a sequence manager wired together.
///
/// The one shot methods each run in their own command transaction. Use
/// `with_command` to combine several operations, or to allocate as part of
/// a larger unit of work.
#[derive(Clone)]
pub struct Sequences {
	engine: TransactionSvl,
	manager: SequenceManager,
}

impl Sequences {
	pub(crate) fn new(engine: TransactionSvl, manager: SequenceManager) -> Self {
		Self {
			engine,
			manager,
		}
	}

	pub fn engine(&self) -> &TransactionSvl {
		&self.engine
	}

	pub fn manager(&self) -> &SequenceManager {
		&self.manager
	}

	pub fn begin_command(&self) -> SvlCommandTransaction {
		self.engine.begin_command()
	}

	pub fn with_command<F, R>(&self, f: F) -> crate::Result<R>
	where
		F: FnOnce(&SequenceManager, &mut SvlCommandTransaction) -> crate::Result<R>,
	{
		self.engine.with_command(|txn| f(&self.manager, txn))
	}

	pub fn create(&self, to_create: SequenceToCreate) -> crate::Result<SequenceDef> {
		self.engine.with_command(|txn| self.manager.create_sequence(txn, to_create))
	}

	pub fn allocate(&self, reference: impl Into<SequenceRef>) -> crate::Result<String> {
		let reference = reference.into();
		self.engine.with_command(|txn| self.manager.allocate(txn, reference))
	}

	pub fn next_value(&self, reference: impl Into<SequenceRef>) -> crate::Result<u64> {
		let reference = reference.into();
		self.engine.with_command(|txn| self.manager.next_value(txn, reference))
	}

	pub fn update(&self, id: SequenceId, update: SequenceUpdate) -> crate::Result<SequenceDef> {
		self.engine.with_command(|txn| self.manager.update_sequence(txn, id, update))
	}

	pub fn update_strategy(&self, id: SequenceId, strategy: Strategy) -> crate::Result<SequenceDef> {
		self.engine.with_command(|txn| self.manager.update_strategy(txn, id, strategy))
	}

	pub fn delete(&self, id: SequenceId) -> crate::Result<()> {
		self.engine.with_command(|txn| self.manager.delete_sequence(txn, id))
	}

	pub fn get(&self, id: SequenceId) -> crate::Result<SequenceDef> {
		self.engine.with_command(|txn| self.manager.get_sequence(txn, id))
	}

	pub fn find_by_code(&self, code: &str) -> crate::Result<Option<SequenceDef>> {
		self.engine.with_command(|txn| self.manager.find_sequence_by_code(txn, code))
	}

	pub fn list(&self) -> crate::Result<Vec<SequenceDef>> {
		self.engine.with_command(|txn| self.manager.list_sequences(txn))
	}
}

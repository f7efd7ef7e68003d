// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use seqid_core::interface::{CommandTransaction, Repair, SequenceId};
use seqid_native::{NativeError, NativeSequenceState, NativeSequences};
use tracing::{debug, instrument, warn};

const OBJECT_PREFIX: &str = "sequence_";

/// Native sequence object backing a logical sequence.
///
/// DDL takes effect in the engine immediately. Each DDL call registers a
/// compensation on the caller's transaction that restores the previous engine
/// state if that transaction rolls back. Values handed out by `next` are never
/// returned to the engine.
#[derive(Clone)]
pub struct NativeBackend {
	engine: Arc<dyn NativeSequences>,
}

impl NativeBackend {
	pub fn new(engine: Arc<dyn NativeSequences>) -> Self {
		Self {
			engine,
		}
	}

	pub fn engine(&self) -> &Arc<dyn NativeSequences> {
		&self.engine
	}

	/// Name of the native object owned by sequence `id`.
	pub fn object_name(id: SequenceId) -> String {
		format!("{OBJECT_PREFIX}{id}")
	}

	#[instrument(name = "sequence::native::provision", level = "debug", skip(self, txn))]
	pub fn provision(
		&self,
		txn: &mut impl CommandTransaction,
		id: SequenceId,
		increment: u64,
		start: u64,
	) -> crate::Result<()> {
		let name = Self::object_name(id);
		self.engine.create_sequence(&name, increment, start)?;

		let engine = self.engine.clone();
		txn.on_rollback(Box::new(move |_: &mut dyn Repair| {
			if let Err(err) = engine.drop_sequence(&name) {
				warn!(%name, %err, "failed to drop native sequence while rolling back");
			}
		}));
		Ok(())
	}

	#[instrument(name = "sequence::native::reconfigure", level = "debug", skip(self, txn))]
	pub fn reconfigure(
		&self,
		txn: &mut impl CommandTransaction,
		id: SequenceId,
		increment: u64,
		restart: u64,
	) -> crate::Result<()> {
		let name = Self::object_name(id);
		let prior = self.engine.state(&name)?.ok_or_else(|| NativeError::Missing {
			name: name.clone(),
		})?;
		self.engine.alter_sequence(&name, increment, restart)?;

		let engine = self.engine.clone();
		txn.on_rollback(Box::new(move |_: &mut dyn Repair| {
			// values handed out after the restart stay handed out
			let next = match engine.state(&name) {
				Ok(Some(current)) => current.next.max(prior.next),
				_ => prior.next,
			};
			if let Err(err) = engine.alter_sequence(&name, prior.increment, next) {
				warn!(%name, %err, "failed to restore native sequence while rolling back");
			}
		}));
		Ok(())
	}

	/// Drops the native object. A missing object is not an error; the prior
	/// state is returned when there was one.
	#[instrument(name = "sequence::native::decommission", level = "debug", skip(self, txn))]
	pub fn decommission(
		&self,
		txn: &mut impl CommandTransaction,
		id: SequenceId,
	) -> crate::Result<Option<NativeSequenceState>> {
		let name = Self::object_name(id);
		let Some(prior) = self.engine.state(&name)? else {
			warn!(%name, "no native sequence to drop");
			return Ok(None);
		};
		self.engine.drop_sequence(&name)?;

		let engine = self.engine.clone();
		txn.on_rollback(Box::new(move |_: &mut dyn Repair| {
			if let Err(err) = engine.create_sequence(&name, prior.increment, prior.next) {
				warn!(%name, %err, "failed to recreate native sequence while rolling back");
			}
		}));
		debug!(next = prior.next, "decommissioned native sequence");
		Ok(Some(prior))
	}

	pub fn next(&self, id: SequenceId) -> crate::Result<u64> {
		self.engine.next_value(&Self::object_name(id))
	}

	pub fn state(&self, id: SequenceId) -> crate::Result<Option<NativeSequenceState>> {
		self.engine.state(&Self::object_name(id))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use seqid_core::interface::SequenceId;
	use seqid_native::{MemoryNativeSequences, NativeSequenceState, NativeSequences};
	use seqid_transaction::test_utils::create_test_engine;

	use super::NativeBackend;

	fn backend() -> (NativeBackend, MemoryNativeSequences) {
		let engine = MemoryNativeSequences::new();
		(NativeBackend::new(Arc::new(engine.clone())), engine)
	}

	#[test]
	fn test_object_name() {
		assert_eq!(NativeBackend::object_name(SequenceId(12)), "sequence_12");
	}

	#[test]
	fn test_provision_fails_fast_on_existing_object() {
		let (backend, engine) = backend();
		engine.create_sequence("sequence_1", 1, 1).unwrap();

		let mut txn = create_test_engine().begin_command();
		let err = backend.provision(&mut txn, SequenceId(1), 1, 1).unwrap_err();
		assert_eq!(err.code(), "NATIVE_001");
	}

	#[test]
	fn test_rollback_drops_provisioned_object() {
		let (backend, engine) = backend();
		let mut txn = create_test_engine().begin_command();
		backend.provision(&mut txn, SequenceId(1), 1, 5).unwrap();
		assert_eq!(backend.next(SequenceId(1)).unwrap(), 5);
		txn.rollback().unwrap();

		assert!(!engine.exists("sequence_1").unwrap());
	}

	#[test]
	fn test_rollback_restores_reconfigured_object() {
		let (backend, engine) = backend();
		engine.create_sequence("sequence_1", 1, 10).unwrap();

		let mut txn = create_test_engine().begin_command();
		backend.reconfigure(&mut txn, SequenceId(1), 4, 3).unwrap();
		assert_eq!(backend.next(SequenceId(1)).unwrap(), 3);
		txn.rollback().unwrap();

		assert_eq!(
			backend.state(SequenceId(1)).unwrap(),
			Some(NativeSequenceState {
				increment: 1,
				next: 10
			})
		);
	}

	#[test]
	fn test_rollback_never_rewinds_past_issued_values() {
		let (backend, engine) = backend();
		engine.create_sequence("sequence_1", 1, 10).unwrap();

		let mut txn = create_test_engine().begin_command();
		backend.reconfigure(&mut txn, SequenceId(1), 1, 100).unwrap();
		assert_eq!(backend.next(SequenceId(1)).unwrap(), 100);
		txn.rollback().unwrap();

		assert_eq!(backend.next(SequenceId(1)).unwrap(), 101);
	}

	#[test]
	fn test_decommission_is_idempotent() {
		let (backend, engine) = backend();
		engine.create_sequence("sequence_1", 2, 8).unwrap();

		let mut txn = create_test_engine().begin_command();
		assert_eq!(
			backend.decommission(&mut txn, SequenceId(1)).unwrap(),
			Some(NativeSequenceState {
				increment: 2,
				next: 8
			})
		);
		assert_eq!(backend.decommission(&mut txn, SequenceId(1)).unwrap(), None);
		txn.commit().unwrap();

		assert!(engine.is_empty());
	}

	#[test]
	fn test_rollback_recreates_decommissioned_object() {
		let (backend, engine) = backend();
		engine.create_sequence("sequence_1", 2, 8).unwrap();

		let mut txn = create_test_engine().begin_command();
		backend.decommission(&mut txn, SequenceId(1)).unwrap();
		drop(txn);

		assert_eq!(engine.next_value("sequence_1").unwrap(), 8);
		assert_eq!(engine.next_value("sequence_1").unwrap(), 10);
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{EncodedKey, EncodedKeyRange, row::EncodedRow};

/// Undo action for a side effect the host transaction cannot roll back by
/// itself, run when the transaction (or the savepoint it was registered
/// after) is rolled back.
pub type Compensation = Box<dyn FnOnce(&mut dyn Repair) + Send + 'static>;

/// Access a compensation gets to the transaction being rolled back.
///
/// Reads observe the state the rollback restored. Writes are only allowed on
/// keys the transaction holds exclusively; on a full rollback they are applied
/// as the rollback completes, on a rollback to a savepoint they become
/// ordinary pending writes.
pub trait Repair {
	fn get(&mut self, key: &EncodedKey) -> crate::Result<Option<EncodedRow>>;

	fn set(&mut self, key: &EncodedKey, row: EncodedRow) -> crate::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockMode {
	/// Compatible with other shared holders, blocks exclusive requests.
	Shared,
	/// Blocks every other holder.
	Exclusive,
}

/// Position inside a transaction that later work can be rolled back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Savepoint {
	pub writes: usize,
	pub compensations: usize,
}

/// The slice of the host's active transaction the sequence facility consumes.
///
/// Locks are acquired on demand and held until the transaction commits or
/// rolls back. Reads observe committed data plus the transaction's own writes.
pub trait CommandTransaction {
	fn get(&mut self, key: &EncodedKey) -> crate::Result<Option<EncodedRow>>;

	/// Acquires `mode` on `key`, blocking until it is granted, then reads it.
	fn get_locked(&mut self, key: &EncodedKey, mode: LockMode) -> crate::Result<Option<EncodedRow>>;

	fn contains_key(&mut self, key: &EncodedKey) -> crate::Result<bool> {
		Ok(self.get(key)?.is_some())
	}

	/// Rows within `range` in key order.
	fn range(&mut self, range: EncodedKeyRange) -> crate::Result<Vec<(EncodedKey, EncodedRow)>>;

	fn prefix(&mut self, prefix: &EncodedKey) -> crate::Result<Vec<(EncodedKey, EncodedRow)>> {
		self.range(EncodedKeyRange::prefix(prefix))
	}

	/// Buffers a write; takes the exclusive lock on `key`.
	fn set(&mut self, key: &EncodedKey, row: EncodedRow) -> crate::Result<()>;

	/// Buffers a delete; takes the exclusive lock on `key`.
	fn remove(&mut self, key: &EncodedKey) -> crate::Result<()>;

	fn savepoint(&mut self) -> Savepoint;

	/// Discards writes buffered after `savepoint` and runs the compensations
	/// registered after it, newest first. Locks stay held.
	fn rollback_to(&mut self, savepoint: Savepoint) -> crate::Result<()>;

	fn on_rollback(&mut self, compensation: Compensation);
}

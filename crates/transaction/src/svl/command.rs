// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeMap, HashMap},
	mem,
	ops::RangeBounds,
	sync::Arc,
};

use seqid_core::{
	EncodedKey, EncodedKeyRange, EncodedRow,
	interface::{CommandTransaction, Compensation, LockMode, Repair, Savepoint},
};
use seqid_type::return_internal_error;
use tracing::{debug, instrument, warn};

use super::TransactionSvlInner;
use crate::TransactionId;

/// A command transaction on [`super::TransactionSvl`].
///
/// Pending writes are kept per key together with an undo journal so that
/// savepoints can restore the pending state. Dropping an unfinished
/// transaction rolls it back.
pub struct SvlCommandTransaction {
	id: TransactionId,
	inner: Arc<TransactionSvlInner>,
	pending: BTreeMap<EncodedKey, Option<EncodedRow>>,
	journal: Vec<(EncodedKey, Option<Option<EncodedRow>>)>,
	held: HashMap<EncodedKey, LockMode>,
	compensations: Vec<Compensation>,
	finished: bool,
}

impl SvlCommandTransaction {
	pub(crate) fn new(id: TransactionId, inner: Arc<TransactionSvlInner>) -> Self {
		Self {
			id,
			inner,
			pending: BTreeMap::new(),
			journal: Vec::new(),
			held: HashMap::new(),
			compensations: Vec::new(),
			finished: false,
		}
	}

	pub fn id(&self) -> TransactionId {
		self.id
	}

	/// Number of keys with pending writes.
	pub fn pending_writes(&self) -> usize {
		self.pending.len()
	}

	#[instrument(name = "transaction::svl::commit", level = "debug", skip(self), fields(txn = %self.id))]
	pub fn commit(mut self) -> crate::Result<()> {
		let pending = mem::take(&mut self.pending);
		let writes = pending.len();
		{
			let mut store = self.inner.store.write();
			for (key, row) in pending {
				match row {
					Some(row) => {
						store.insert(key, row);
					}
					None => {
						store.remove(&key);
					}
				}
			}
		}

		self.journal.clear();
		self.compensations.clear();
		self.finish();
		debug!(writes, "committed");
		Ok(())
	}

	#[instrument(name = "transaction::svl::rollback", level = "debug", skip(self), fields(txn = %self.id))]
	pub fn rollback(mut self) -> crate::Result<()> {
		self.abort();
		Ok(())
	}

	fn abort(&mut self) {
		self.pending.clear();
		self.journal.clear();

		let compensations = mem::take(&mut self.compensations);
		let count = compensations.len();
		self.compensate(compensations, true);

		self.finish();
		debug!(compensations = count, "rolled back");
	}

	/// Runs `compensations` newest first. Locks are still held while they run.
	fn compensate(&mut self, compensations: Vec<Compensation>, complete: bool) {
		let mut repair = RollbackRepair {
			txn: self,
			complete,
		};
		for compensation in compensations.into_iter().rev() {
			compensation(&mut repair);
		}
	}

	fn finish(&mut self) {
		self.inner.locks.release_all(self.id, self.held.keys());
		self.held.clear();
		self.finished = true;
	}

	fn lock(&mut self, key: &EncodedKey, mode: LockMode) -> crate::Result<()> {
		if self.held.get(key).is_some_and(|held| *held >= mode) {
			return Ok(());
		}

		self.inner.locks.acquire(self.id, key, mode, self.inner.config.lock_timeout)?;
		self.held.insert(key.clone(), mode);
		Ok(())
	}

	fn write(&mut self, key: &EncodedKey, row: Option<EncodedRow>) -> crate::Result<()> {
		self.lock(key, LockMode::Exclusive)?;
		let previous = self.pending.insert(key.clone(), row);
		self.journal.push((key.clone(), previous));
		Ok(())
	}
}

impl CommandTransaction for SvlCommandTransaction {
	fn get(&mut self, key: &EncodedKey) -> crate::Result<Option<EncodedRow>> {
		if let Some(pending) = self.pending.get(key) {
			return Ok(pending.clone());
		}
		Ok(self.inner.store.read().get(key).cloned())
	}

	fn get_locked(&mut self, key: &EncodedKey, mode: LockMode) -> crate::Result<Option<EncodedRow>> {
		self.lock(key, mode)?;
		self.get(key)
	}

	fn range(&mut self, range: EncodedKeyRange) -> crate::Result<Vec<(EncodedKey, EncodedRow)>> {
		let mut rows: BTreeMap<EncodedKey, EncodedRow> = self
			.inner
			.store
			.read()
			.range::<EncodedKey, _>((range.start_bound(), range.end_bound()))
			.map(|(key, row)| (key.clone(), row.clone()))
			.collect();

		for (key, row) in self.pending.range::<EncodedKey, _>((range.start_bound(), range.end_bound())) {
			match row {
				Some(row) => {
					rows.insert(key.clone(), row.clone());
				}
				None => {
					rows.remove(key);
				}
			}
		}

		Ok(rows.into_iter().collect())
	}

	fn set(&mut self, key: &EncodedKey, row: EncodedRow) -> crate::Result<()> {
		self.write(key, Some(row))
	}

	fn remove(&mut self, key: &EncodedKey) -> crate::Result<()> {
		self.write(key, None)
	}

	fn savepoint(&mut self) -> Savepoint {
		Savepoint {
			writes: self.journal.len(),
			compensations: self.compensations.len(),
		}
	}

	fn rollback_to(&mut self, savepoint: Savepoint) -> crate::Result<()> {
		if savepoint.writes > self.journal.len() || savepoint.compensations > self.compensations.len() {
			return_internal_error!(
				"savepoint {:?} is ahead of transaction {} ({} writes, {} compensations)",
				savepoint,
				self.id,
				self.journal.len(),
				self.compensations.len()
			);
		}

		for (key, previous) in self.journal.drain(savepoint.writes..).rev() {
			match previous {
				Some(previous) => {
					self.pending.insert(key, previous);
				}
				None => {
					self.pending.remove(&key);
				}
			}
		}

		let compensations: Vec<Compensation> = self.compensations.drain(savepoint.compensations..).collect();
		self.compensate(compensations, false);

		Ok(())
	}

	fn on_rollback(&mut self, compensation: Compensation) {
		self.compensations.push(compensation);
	}
}

/// What a compensation sees of a transaction that is rolling back.
struct RollbackRepair<'a> {
	txn: &'a mut SvlCommandTransaction,
	/// Set for a full rollback, whose pending writes are already discarded.
	complete: bool,
}

impl Repair for RollbackRepair<'_> {
	fn get(&mut self, key: &EncodedKey) -> crate::Result<Option<EncodedRow>> {
		self.txn.get(key)
	}

	fn set(&mut self, key: &EncodedKey, row: EncodedRow) -> crate::Result<()> {
		if self.txn.held.get(key) != Some(&LockMode::Exclusive) {
			return_internal_error!(
				"transaction {} repairs key {:?} without holding it exclusively",
				self.txn.id,
				key
			);
		}

		if self.complete {
			self.txn.inner.store.write().insert(key.clone(), row);
			Ok(())
		} else {
			self.txn.write(key, Some(row))
		}
	}
}

impl Drop for SvlCommandTransaction {
	fn drop(&mut self) {
		if !self.finished {
			warn!(txn = %self.id, "command transaction dropped while active, rolling back");
			self.abort();
		}
	}
}

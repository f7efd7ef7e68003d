// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{HashMap, HashSet},
	time::{Duration, Instant},
};

use parking_lot::{Condvar, Mutex};
use seqid_core::{EncodedKey, interface::LockMode};
use tracing::trace;

use crate::{TransactionId, error::TransactionError};

/// Per key shared/exclusive locks held until a transaction finishes.
///
/// Locks are re-entrant and a shared holder may upgrade to exclusive. Once an
/// exclusive request is queued on a key, new shared requests on that key wait
/// behind it.
#[derive(Default)]
pub(crate) struct LockTable {
	keys: Mutex<HashMap<EncodedKey, KeyLock>>,
	released: Condvar,
}

#[derive(Debug, Default)]
struct KeyLock {
	exclusive: Option<TransactionId>,
	shared: HashSet<TransactionId>,
	exclusive_waiters: usize,
	upgrading: Option<TransactionId>,
}

#[derive(Debug, PartialEq, Eq)]
enum Grant {
	Granted,
	Wait,
	UpgradeConflict,
}

impl KeyLock {
	fn holds(&self, txn: TransactionId, mode: LockMode) -> bool {
		match mode {
			LockMode::Exclusive => self.exclusive == Some(txn),
			LockMode::Shared => self.exclusive == Some(txn) || self.shared.contains(&txn),
		}
	}

	fn try_grant(&mut self, txn: TransactionId, mode: LockMode) -> Grant {
		if self.holds(txn, mode) {
			return Grant::Granted;
		}

		match mode {
			LockMode::Shared => {
				if self.exclusive.is_some() || self.exclusive_waiters > 0 {
					return Grant::Wait;
				}
				self.shared.insert(txn);
				Grant::Granted
			}
			LockMode::Exclusive => {
				if self.exclusive.is_some() {
					return Grant::Wait;
				}

				if self.shared.iter().all(|holder| *holder == txn) {
					self.shared.remove(&txn);
					self.exclusive = Some(txn);
					if self.upgrading == Some(txn) {
						self.upgrading = None;
					}
					return Grant::Granted;
				}

				if !self.shared.contains(&txn) {
					return Grant::Wait;
				}

				match self.upgrading {
					Some(other) if other != txn => Grant::UpgradeConflict,
					_ => {
						self.upgrading = Some(txn);
						Grant::Wait
					}
				}
			}
		}
	}

	fn abandon(&mut self, txn: TransactionId) {
		self.exclusive_waiters -= 1;
		if self.upgrading == Some(txn) {
			self.upgrading = None;
		}
	}

	fn release(&mut self, txn: TransactionId) {
		if self.exclusive == Some(txn) {
			self.exclusive = None;
		}
		self.shared.remove(&txn);
	}

	fn is_idle(&self) -> bool {
		self.exclusive.is_none() && self.shared.is_empty() && self.exclusive_waiters == 0
	}
}

impl LockTable {
	pub(crate) fn acquire(
		&self,
		txn: TransactionId,
		key: &EncodedKey,
		mode: LockMode,
		timeout: Option<Duration>,
	) -> crate::Result<()> {
		let started = Instant::now();
		let deadline = timeout.map(|timeout| started + timeout);
		let mut keys = self.keys.lock();
		let mut queued = false;

		loop {
			let lock = keys.entry(key.clone()).or_default();
			match lock.try_grant(txn, mode) {
				Grant::Granted => {
					if queued {
						lock.exclusive_waiters -= 1;
						trace!(%txn, ?mode, waited = ?started.elapsed(), "lock granted after wait");
					}
					return Ok(());
				}
				Grant::UpgradeConflict => {
					if queued {
						lock.abandon(txn);
						self.released.notify_all();
					}
					return Err(TransactionError::upgrade_conflict(key).into());
				}
				Grant::Wait => {
					if !queued && mode == LockMode::Exclusive {
						lock.exclusive_waiters += 1;
						queued = true;
					}
				}
			}

			match deadline {
				Some(deadline) => {
					if self.released.wait_until(&mut keys, deadline).timed_out() {
						// a release may have raced the timeout
						let lock = keys.entry(key.clone()).or_default();
						if lock.try_grant(txn, mode) == Grant::Granted {
							if queued {
								lock.exclusive_waiters -= 1;
							}
							return Ok(());
						}
						if queued {
							lock.abandon(txn);
						}
						if lock.is_idle() {
							keys.remove(key);
						}
						self.released.notify_all();
						return Err(TransactionError::lock_timeout(key, started.elapsed()).into());
					}
				}
				None => self.released.wait(&mut keys),
			}
		}
	}

	pub(crate) fn release_all<'a>(&self, txn: TransactionId, held: impl IntoIterator<Item = &'a EncodedKey>) {
		let mut keys = self.keys.lock();
		for key in held {
			if let Some(lock) = keys.get_mut(key) {
				lock.release(txn);
				if lock.is_idle() {
					keys.remove(key);
				}
			}
		}
		self.released.notify_all();
	}

	#[cfg(test)]
	fn tracked(&self) -> usize {
		self.keys.lock().len()
	}
}

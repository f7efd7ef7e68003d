// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::BTreeMap, sync::Arc};

use parking_lot::RwLock;
use seqid_core::{EncodedKey, EncodedRow};
use tracing::instrument;

use crate::{TransactionConfig, TransactionId, lock::LockTable};

mod command;

pub use command::SvlCommandTransaction;

/// Single version store with per key locking.
///
/// Writes of a command transaction stay private until commit, which applies
/// them atomically. Locks taken by the transaction are held until it commits
/// or rolls back.
#[derive(Clone)]
pub struct TransactionSvl {
	inner: Arc<TransactionSvlInner>,
}

pub(crate) struct TransactionSvlInner {
	pub(crate) store: RwLock<BTreeMap<EncodedKey, EncodedRow>>,
	pub(crate) locks: LockTable,
	pub(crate) config: TransactionConfig,
}

impl TransactionSvl {
	pub fn new(config: TransactionConfig) -> Self {
		Self {
			inner: Arc::new(TransactionSvlInner {
				store: RwLock::new(BTreeMap::new()),
				locks: LockTable::default(),
				config,
			}),
		}
	}

	pub fn testing() -> Self {
		Self::new(TransactionConfig::default())
	}

	pub fn config(&self) -> &TransactionConfig {
		&self.inner.config
	}

	pub fn begin_command(&self) -> SvlCommandTransaction {
		SvlCommandTransaction::new(TransactionId::generate(), self.inner.clone())
	}

	/// Runs `f` in a fresh command transaction, committing on `Ok` and rolling
	/// back on `Err`.
	#[instrument(name = "transaction::svl::with_command", level = "trace", skip_all)]
	pub fn with_command<F, R>(&self, f: F) -> crate::Result<R>
	where
		F: FnOnce(&mut SvlCommandTransaction) -> crate::Result<R>,
	{
		let mut txn = self.begin_command();
		match f(&mut txn) {
			Ok(result) => {
				txn.commit()?;
				Ok(result)
			}
			Err(err) => {
				txn.rollback()?;
				Err(err)
			}
		}
	}

	/// Number of committed rows.
	pub fn len(&self) -> usize {
		self.inner.store.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

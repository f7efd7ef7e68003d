// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use seqid_core::interface::{CommandTransaction, SequenceDef, Strategy};
use seqid_native::NativeSequences;

use crate::{NativeBackend, SequenceConfig, SequenceError};

mod allocate;
mod create;
mod delete;
mod read;
mod update;

/// Entry point for administering logical sequences and allocating from them.
///
/// Every operation runs inside the caller's transaction. Administrative
/// operations are atomic: on error the transaction is left as it was before
/// the call, including the state of native objects.
#[derive(Clone)]
pub struct SequenceManager {
	config: SequenceConfig,
	native: Option<NativeBackend>,
}

impl SequenceManager {
	pub fn new(config: SequenceConfig) -> Self {
		Self {
			config,
			native: None,
		}
	}

	pub fn with_native_engine(mut self, engine: Arc<dyn NativeSequences>) -> Self {
		self.native = Some(NativeBackend::new(engine));
		self
	}

	pub fn config(&self) -> &SequenceConfig {
		&self.config
	}

	pub fn native(&self) -> Option<&NativeBackend> {
		self.native.as_ref()
	}

	/// Strategies new or updated sequences may use.
	pub fn strategies(&self) -> Vec<Strategy> {
		Strategy::ALL.into_iter().filter(|strategy| self.offered(*strategy).is_ok()).collect()
	}

	fn offered(&self, strategy: Strategy) -> crate::Result<()> {
		match strategy {
			Strategy::RowCounter => Ok(()),
			Strategy::Native if !self.config.native_enabled => Err(SequenceError::StrategyNotOffered {
				strategy,
				reason: "native sequences are disabled",
			}
			.into()),
			Strategy::Native => self.native_backend().map(|_| ()),
		}
	}

	/// Backend for sequences that already use the native strategy; only
	/// needs an attached engine.
	fn native_backend(&self) -> crate::Result<&NativeBackend> {
		self.native.as_ref().ok_or_else(|| {
			SequenceError::StrategyNotOffered {
				strategy: Strategy::Native,
				reason: "no native engine is attached",
			}
			.into()
		})
	}

	/// Reports the counter of native backed sequences from their native
	/// object, which advances outside of the record.
	fn observe(&self, mut def: SequenceDef) -> crate::Result<SequenceDef> {
		match def.strategy {
			Strategy::RowCounter => {}
			Strategy::Native => {
				if let Some(native) = &self.native {
					if let Some(state) = native.state(def.id)? {
						def.number_next = state.next;
					}
				}
			}
		}
		Ok(def)
	}
}

/// Runs `f` inside a savepoint, rolling back to it when `f` fails.
fn atomically<T, C: CommandTransaction>(
	txn: &mut C,
	f: impl FnOnce(&mut C) -> crate::Result<T>,
) -> crate::Result<T> {
	let savepoint = txn.savepoint();
	match f(txn) {
		Ok(result) => Ok(result),
		Err(err) => {
			if let Err(rollback) = txn.rollback_to(savepoint) {
				return Err(rollback.with_cause(err.diagnostic()));
			}
			Err(err)
		}
	}
}

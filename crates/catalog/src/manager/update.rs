// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::interface::{CommandTransaction, LockMode, Repair, SequenceDef, SequenceId, SequenceUpdate, Strategy};
use tracing::{debug, instrument, warn};

use super::{SequenceManager, atomically};
use crate::{store::CatalogStore, validate};

impl SequenceManager {
	/// Switches the strategy of a sequence, creating or dropping its native
	/// object to match.
	pub fn update_strategy(
		&self,
		txn: &mut impl CommandTransaction,
		id: SequenceId,
		strategy: Strategy,
	) -> crate::Result<SequenceDef> {
		self.update_sequence(txn, id, SequenceUpdate::new().strategy(strategy))
	}

	/// Applies `update` to a sequence.
	///
	/// The record is locked exclusively, so the update waits for every
	/// transaction that allocated from the sequence to finish and blocks new
	/// allocations until the caller's transaction ends. Native state is read
	/// back into the record first, so the counter carries over when the
	/// strategy changes in either direction.
	#[instrument(name = "sequence::update", level = "debug", skip(self, txn, update), fields(id = %id))]
	pub fn update_sequence(
		&self,
		txn: &mut impl CommandTransaction,
		id: SequenceId,
		update: SequenceUpdate,
	) -> crate::Result<SequenceDef> {
		atomically(txn, |txn| self.apply_update(txn, id, &update))
	}

	/// Applies the same update to several sequences; all of them change or
	/// none does.
	#[instrument(name = "sequence::update_many", level = "debug", skip(self, txn, update), fields(count = ids.len()))]
	pub fn update_sequences(
		&self,
		txn: &mut impl CommandTransaction,
		ids: &[SequenceId],
		update: SequenceUpdate,
	) -> crate::Result<Vec<SequenceDef>> {
		atomically(txn, |txn| ids.iter().map(|id| self.apply_update(txn, *id, &update)).collect())
	}

	fn apply_update(
		&self,
		txn: &mut impl CommandTransaction,
		id: SequenceId,
		update: &SequenceUpdate,
	) -> crate::Result<SequenceDef> {
		let stored = CatalogStore::get_sequence_locked(txn, id, LockMode::Exclusive)?;

		let before = match stored.strategy {
			Strategy::RowCounter => stored.clone(),
			Strategy::Native => {
				let mut synced = stored.clone();
				if let Some(state) = self.native_backend()?.state(id)? {
					synced.number_next = state.next;
				}
				synced
			}
		};

		let mut after = before.clone();
		if let Some(name) = &update.name {
			after.name = name.clone();
		}
		if let Some(code) = &update.code {
			after.code = code.clone();
		}
		if let Some(prefix) = &update.prefix {
			after.format.prefix = prefix.clone();
		}
		if let Some(suffix) = &update.suffix {
			after.format.suffix = suffix.clone();
		}
		if let Some(padding) = update.padding {
			after.format.padding = validate::padding(padding)?;
		}
		if let Some(number_increment) = update.number_increment {
			after.number_increment = validate::increment(number_increment)?;
		}
		if let Some(number_next) = update.number_next {
			after.number_next = validate::number_next(number_next)?;
		}
		if let Some(strategy) = update.strategy {
			if strategy != before.strategy {
				self.offered(strategy)?;
			}
			after.strategy = strategy;
		}

		match (before.strategy, after.strategy) {
			(Strategy::RowCounter, Strategy::RowCounter) => {}
			(Strategy::RowCounter, Strategy::Native) => {
				let native = self.native_backend()?.clone();
				native.provision(txn, id, after.number_increment, after.number_next)?;
				// runs before the object is dropped again; values it handed
				// out stay handed out once the record is back on the row counter
				txn.on_rollback(Box::new(move |repair: &mut dyn Repair| {
					let result = native.state(id).and_then(|state| match state {
						Some(state) => CatalogStore::repair_number_next(repair, id, state.next),
						None => Ok(()),
					});
					if let Err(err) = result {
						warn!(%id, %err, "failed to carry native counter back into the record while rolling back");
					}
				}));
				debug!(number_next = after.number_next, "switched to native strategy");
			}
			(Strategy::Native, Strategy::RowCounter) => {
				self.native_backend()?.decommission(txn, id)?;
				debug!(number_next = after.number_next, "switched to row counter strategy");
			}
			(Strategy::Native, Strategy::Native) => {
				if after.number_increment != before.number_increment || after.number_next != before.number_next {
					self.native_backend()?.reconfigure(txn, id, after.number_increment, after.number_next)?;
				}
			}
		}

		CatalogStore::update_sequence(txn, &stored, &after)?;
		Ok(after)
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use seqid_core::{
	format::SequenceFormat,
	interface::{CommandTransaction, SequenceDef, SequenceToCreate, Strategy},
};
use tracing::{debug, instrument};

use super::{SequenceManager, atomically};
use crate::{
	store::{CatalogStore, SystemSequence},
	validate,
};

impl SequenceManager {
	/// Persists a new logical sequence and, for the native strategy, its
	/// native object. Either both exist afterwards or neither does.
	#[instrument(name = "sequence::create", level = "debug", skip(self, txn, to_create), fields(
		name = %to_create.name,
		code = %to_create.code,
		strategy = %to_create.strategy
	))]
	pub fn create_sequence(
		&self,
		txn: &mut impl CommandTransaction,
		to_create: SequenceToCreate,
	) -> crate::Result<SequenceDef> {
		let number_increment = validate::increment(to_create.number_increment)?;
		let padding = validate::padding(to_create.padding)?;
		let number_next = validate::number_next(to_create.number_next)?;
		self.offered(to_create.strategy)?;

		atomically(txn, |txn| {
			let def = SequenceDef {
				id: SystemSequence::next_sequence_id(txn)?,
				name: to_create.name,
				code: to_create.code,
				strategy: to_create.strategy,
				number_next,
				number_increment,
				format: SequenceFormat::new(padding, to_create.prefix, to_create.suffix),
			};
			CatalogStore::create_sequence(txn, &def)?;

			match def.strategy {
				Strategy::RowCounter => {}
				Strategy::Native => {
					self.native_backend()?.provision(txn, def.id, number_increment, number_next)?
				}
			}

			debug!(id = %def.id, "created sequence");
			Ok(def)
		})
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Transactional identifier sequences.
//!
//! ```ignore
//! let sequences = SequencesBuilder::new().in_memory_native().build()?;
//! let def = sequences.create(SequenceToCreate::new("Invoices", "account.invoice").prefix("INV/"))?;
//! let number = sequences.allocate(def.id)?;
//! ```

mod builder;
mod sequences;

pub use builder::{NativeEngine, SequencesBuilder};
pub use seqid_catalog as catalog;
pub use seqid_catalog::{SequenceConfig, SequenceManager};
pub use seqid_core as core;
pub use seqid_core::interface::{
	CommandTransaction, SequenceDef, SequenceId, SequenceRef, SequenceToCreate, SequenceUpdate, Strategy,
};
pub use seqid_native as native;
#[cfg(feature = "sub_tracing")]
pub use seqid_sub_tracing::TracingBuilder;
pub use seqid_transaction as transaction;
pub use seqid_transaction::{SvlCommandTransaction, TransactionConfig, TransactionSvl};
pub use seqid_type::{Error, ErrorKind, Result};
pub use sequences::Sequences;

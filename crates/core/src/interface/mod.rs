// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod id;
mod sequence;
mod transaction;

pub use id::SequenceId;
pub use sequence::{SequenceDef, SequenceRef, SequenceToCreate, SequenceUpdate, Strategy};
pub use transaction::{CommandTransaction, Compensation, LockMode, Repair, Savepoint};

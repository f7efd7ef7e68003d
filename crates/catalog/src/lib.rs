// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Logical sequences: records, strategy dispatch and the lifecycle of their
//! backing native objects.

mod backend;
mod config;
mod error;
mod manager;
mod store;
#[cfg(test)]
mod test_utils;
mod validate;

pub use backend::NativeBackend;
pub use config::SequenceConfig;
pub use error::SequenceError;
pub use manager::SequenceManager;
pub use seqid_type::Result;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod format;
pub mod interface;
pub mod key;
pub mod row;

pub use key::{EncodableKey, EncodedKey, EncodedKeyRange, KeyKind};
pub use row::EncodedRow;
pub use seqid_type::{Error, Result};

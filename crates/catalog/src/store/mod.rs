// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod generator;
pub(crate) mod sequence;
mod system;

pub(crate) use system::SystemSequence;

/// Reads and writes catalog rows through the caller's transaction.
pub(crate) struct CatalogStore;

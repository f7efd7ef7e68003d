// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod native;
mod row;

pub use native::NativeBackend;
pub(crate) use row::RowBackend;

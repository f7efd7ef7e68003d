// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod create;
mod delete;
mod find;
mod get;
mod list;
mod update;

use seqid_core::{EncodedRow, interface::SequenceDef};

fn encode(def: &SequenceDef) -> crate::Result<EncodedRow> {
	EncodedRow::encode(def)
}

fn decode(row: &EncodedRow) -> crate::Result<SequenceDef> {
	row.decode()
}

/// Code index entries carry no payload; everything lives in the key.
fn index_row() -> EncodedRow {
	EncodedRow::new(Vec::new())
}

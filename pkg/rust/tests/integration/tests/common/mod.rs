// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![allow(dead_code)]

use seqid::{Sequences, SequencesBuilder};

/// One instance per native engine.
pub fn engines() -> Vec<(&'static str, Sequences)> {
	vec![
		("memory", SequencesBuilder::new().in_memory_native().build().unwrap()),
		("sqlite", SequencesBuilder::new().sqlite_native_in_memory().build().unwrap()),
	]
}

/// Reruns `f` while it fails with a retryable error.
pub fn retry<R>(mut f: impl FnMut() -> seqid::Result<R>) -> seqid::Result<R> {
	loop {
		match f() {
			Err(err) if err.is_retryable() => continue,
			result => return result,
		}
	}
}

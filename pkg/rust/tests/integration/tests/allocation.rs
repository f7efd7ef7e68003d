// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod common;

use std::{
	collections::HashSet,
	sync::{Arc, Barrier},
	thread,
};

use common::engines;
use seqid::{SequenceId, SequenceToCreate, Sequences, Strategy};

fn spawn_allocators<F>(sequences: &Sequences, threads: usize, f: F) -> Vec<Vec<(u64, bool)>>
where
	F: Fn(&Sequences, usize) -> (u64, bool) + Send + Sync + 'static,
{
	let barrier = Arc::new(Barrier::new(threads));
	let f = Arc::new(f);
	let handles: Vec<_> = (0..threads)
		.map(|_| {
			let sequences = sequences.clone();
			let barrier = barrier.clone();
			let f = f.clone();
			thread::spawn(move || {
				barrier.wait();
				(0..100).map(|i| f(&sequences, i)).collect::<Vec<_>>()
			})
		})
		.collect();
	handles.into_iter().map(|handle| handle.join().unwrap()).collect()
}

/// Allocates once in its own transaction and commits or rolls it back.
fn allocate_once(sequences: &Sequences, id: SequenceId, commit: bool) -> (u64, bool) {
	let mut txn = sequences.begin_command();
	let value = sequences.manager().next_value(&mut txn, id).unwrap();
	if commit {
		txn.commit().unwrap();
	} else {
		txn.rollback().unwrap();
	}
	(value, commit)
}

#[test]
fn test_concurrent_native_allocations_are_unique() {
	for (engine, sequences) in engines() {
		let def = sequences.create(SequenceToCreate::new("Moves", "stock.move").strategy(Strategy::Native)).unwrap();

		let barrier = Arc::new(Barrier::new(2));
		let handles: Vec<_> = (0..2)
			.map(|_| {
				let sequences = sequences.clone();
				let barrier = barrier.clone();
				thread::spawn(move || {
					barrier.wait();
					(0..500).map(|_| sequences.next_value(def.id).unwrap()).collect::<Vec<_>>()
				})
			})
			.collect();

		let values: HashSet<u64> = handles.into_iter().flat_map(|handle| handle.join().unwrap()).collect();
		assert_eq!(values.len(), 1000, "{engine}");
		assert_eq!(values.iter().max(), Some(&1000), "{engine}");
	}
}

#[test]
fn test_concurrent_row_allocations_are_contiguous() {
	for (engine, sequences) in engines() {
		let def = sequences.create(SequenceToCreate::new("Invoices", "account.invoice")).unwrap();
		let id = def.id;

		let results = spawn_allocators(&sequences, 4, move |sequences, _| allocate_once(sequences, id, true));

		let mut values: Vec<u64> = results.into_iter().flatten().map(|(value, _)| value).collect();
		values.sort_unstable();
		assert_eq!(values, (1..=400).collect::<Vec<_>>(), "{engine}");
	}
}

#[test]
fn test_aborted_row_allocations_are_reissued() {
	for (engine, sequences) in engines() {
		let def = sequences.create(SequenceToCreate::new("Invoices", "account.invoice")).unwrap();
		let id = def.id;

		let results = spawn_allocators(&sequences, 4, move |sequences, i| allocate_once(sequences, id, i % 2 == 0));

		let mut committed: Vec<u64> =
			results.into_iter().flatten().filter(|(_, commit)| *commit).map(|(value, _)| value).collect();
		committed.sort_unstable();
		assert_eq!(committed, (1..=200).collect::<Vec<_>>(), "{engine}");
		assert_eq!(sequences.next_value(id).unwrap(), 201, "{engine}");
	}
}

#[test]
fn test_aborted_native_allocations_leave_gaps() {
	for (engine, sequences) in engines() {
		let def = sequences.create(SequenceToCreate::new("Moves", "stock.move").strategy(Strategy::Native)).unwrap();
		let id = def.id;

		let results = spawn_allocators(&sequences, 2, move |sequences, i| allocate_once(sequences, id, i % 2 == 0));
		let results: Vec<(u64, bool)> = results.into_iter().flatten().collect();

		let values: HashSet<u64> = results.iter().map(|(value, _)| *value).collect();
		assert_eq!(values.len(), 200, "{engine}");
		assert_eq!(results.iter().filter(|(_, commit)| *commit).count(), 100, "{engine}");
		// aborted values are never handed out again
		assert_eq!(sequences.next_value(id).unwrap(), 201, "{engine}");
	}
}

#[test]
fn test_formatted_allocation_by_code() {
	for (engine, sequences) in engines() {
		for strategy in [Strategy::RowCounter, Strategy::Native] {
			let code = format!("{engine}.{strategy:?}");
			sequences
				.create(
					SequenceToCreate::new("Orders", code.as_str())
						.strategy(strategy)
						.prefix("SO")
						.padding(3)
						.suffix("/26")
						.starting_at(41)
						.increment_by(2),
				)
				.unwrap();

			assert_eq!(sequences.allocate(code.as_str()).unwrap(), "SO041/26", "{engine}");
			assert_eq!(sequences.allocate(code.as_str()).unwrap(), "SO043/26", "{engine}");
		}
	}
}

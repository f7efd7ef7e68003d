// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod common;

use std::{
	collections::HashSet,
	sync::{Arc, Barrier},
	thread,
};

use common::{engines, retry};
use seqid::{SequenceToCreate, SequenceUpdate, Strategy};

#[test]
fn test_round_trip_never_reissues() {
	for (engine, sequences) in engines() {
		let def = sequences.create(SequenceToCreate::new("Invoices", "account.invoice")).unwrap();

		let mut values = Vec::new();
		for strategy in [Strategy::RowCounter, Strategy::Native, Strategy::RowCounter, Strategy::Native] {
			sequences.update_strategy(def.id, strategy).unwrap();
			for _ in 0..3 {
				values.push(sequences.next_value(def.id).unwrap());
			}
		}

		assert_eq!(values, (1..=12).collect::<Vec<_>>(), "{engine}");
	}
}

#[test]
fn test_switch_keeps_increment() {
	for (engine, sequences) in engines() {
		let def = sequences.create(SequenceToCreate::new("Invoices", "account.invoice").increment_by(10)).unwrap();

		assert_eq!(sequences.next_value(def.id).unwrap(), 1, "{engine}");
		sequences.update_strategy(def.id, Strategy::Native).unwrap();
		assert_eq!(sequences.next_value(def.id).unwrap(), 11, "{engine}");
		sequences.update(def.id, SequenceUpdate::new().number_increment(5)).unwrap();
		assert_eq!(sequences.next_value(def.id).unwrap(), 21, "{engine}");
		sequences.update_strategy(def.id, Strategy::RowCounter).unwrap();
		assert_eq!(sequences.next_value(def.id).unwrap(), 26, "{engine}");
	}
}

#[test]
fn test_switch_under_concurrent_allocation() {
	for (engine, sequences) in engines() {
		let def = sequences.create(SequenceToCreate::new("Moves", "stock.move")).unwrap();
		let id = def.id;
		let barrier = Arc::new(Barrier::new(4));

		let allocators: Vec<_> = (0..3)
			.map(|_| {
				let sequences = sequences.clone();
				let barrier = barrier.clone();
				thread::spawn(move || {
					barrier.wait();
					(0..200).map(|_| retry(|| sequences.next_value(id)).unwrap()).collect::<Vec<_>>()
				})
			})
			.collect();

		let switcher = {
			let sequences = sequences.clone();
			let barrier = barrier.clone();
			thread::spawn(move || {
				barrier.wait();
				for round in 0..10 {
					let strategy = if round % 2 == 0 {
						Strategy::Native
					} else {
						Strategy::RowCounter
					};
					retry(|| sequences.update_strategy(id, strategy)).unwrap();
					thread::yield_now();
				}
			})
		};

		switcher.join().unwrap();
		let values: Vec<u64> = allocators.into_iter().flat_map(|handle| handle.join().unwrap()).collect();
		let unique: HashSet<u64> = values.iter().copied().collect();
		assert_eq!(unique.len(), values.len(), "{engine}: duplicate values were handed out");
		assert_eq!(values.len(), 600, "{engine}");

		// ten switches end on the row counter
		let current = sequences.get(id).unwrap();
		assert_eq!(current.strategy, Strategy::RowCounter, "{engine}");
		assert!(current.number_next > *unique.iter().max().unwrap(), "{engine}");
	}
}

#[test]
fn test_rolled_back_switch_restores_native_object() {
	for (engine, sequences) in engines() {
		let def = sequences.create(SequenceToCreate::new("Moves", "stock.move").strategy(Strategy::Native)).unwrap();
		sequences.next_value(def.id).unwrap();

		let mut txn = sequences.begin_command();
		sequences.manager().update_strategy(&mut txn, def.id, Strategy::RowCounter).unwrap();
		txn.rollback().unwrap();

		let current = sequences.get(def.id).unwrap();
		assert_eq!(current.strategy, Strategy::Native, "{engine}");
		assert_eq!(sequences.next_value(def.id).unwrap(), 2, "{engine}");
	}
}

#[test]
fn test_rolled_back_switch_to_native_keeps_issued_values() {
	for (engine, sequences) in engines() {
		let def = sequences.create(SequenceToCreate::new("Moves", "stock.move")).unwrap();

		let mut txn = sequences.begin_command();
		sequences.manager().update_strategy(&mut txn, def.id, Strategy::Native).unwrap();
		let issued: Vec<u64> = (0..3).map(|_| sequences.manager().next_value(&mut txn, def.id).unwrap()).collect();
		assert_eq!(issued, vec![1, 2, 3], "{engine}");
		txn.rollback().unwrap();

		let current = sequences.get(def.id).unwrap();
		assert_eq!(current.strategy, Strategy::RowCounter, "{engine}");
		assert_eq!(current.number_next, 4, "{engine}");
		assert_eq!(sequences.next_value(def.id).unwrap(), 4, "{engine}");
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, instrument};

use crate::{NativeError, NativeSequenceState, NativeSequences, NativeStatement, check_bounds, successor};

/// Process local native sequences.
///
/// `nextval` only contends on the counter of the sequence it advances.
#[derive(Clone, Default)]
pub struct MemoryNativeSequences {
	sequences: Arc<RwLock<HashMap<String, Mutex<NativeSequenceState>>>>,
}

impl MemoryNativeSequences {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.sequences.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn missing(name: &str) -> seqid_type::Error {
		NativeError::Missing {
			name: name.to_string(),
		}
		.into()
	}
}

impl NativeSequences for MemoryNativeSequences {
	fn engine(&self) -> &'static str {
		"memory"
	}

	#[instrument(name = "native::memory::execute", level = "trace", skip_all, fields(statement = %statement))]
	fn execute(&self, statement: &NativeStatement<'_>) -> crate::Result<Option<u64>> {
		check_bounds(self.engine(), statement)?;

		match *statement {
			NativeStatement::Create {
				name,
				increment,
				start,
			} => {
				let mut sequences = self.sequences.write();
				if sequences.contains_key(name) {
					return Err(NativeError::AlreadyExists {
						name: name.to_string(),
					}
					.into());
				}
				sequences.insert(
					name.to_string(),
					Mutex::new(NativeSequenceState {
						increment,
						next: start,
					}),
				);
				debug!(%statement, "created native sequence");
				Ok(None)
			}
			NativeStatement::Alter {
				name,
				increment,
				restart,
			} => {
				let sequences = self.sequences.read();
				let sequence = sequences.get(name).ok_or_else(|| Self::missing(name))?;
				*sequence.lock() = NativeSequenceState {
					increment,
					next: restart,
				};
				debug!(%statement, "altered native sequence");
				Ok(None)
			}
			NativeStatement::Drop {
				name,
			} => {
				self.sequences.write().remove(name).ok_or_else(|| Self::missing(name))?;
				debug!(%statement, "dropped native sequence");
				Ok(None)
			}
			NativeStatement::NextVal {
				name,
			} => {
				let sequences = self.sequences.read();
				let sequence = sequences.get(name).ok_or_else(|| Self::missing(name))?;
				let mut state = sequence.lock();
				let value = state.next;
				let next = successor(name, value, state.increment)?;
				state.next = next;
				Ok(Some(value))
			}
		}
	}

	fn state(&self, name: &str) -> crate::Result<Option<NativeSequenceState>> {
		Ok(self.sequences.read().get(name).map(|sequence| *sequence.lock()))
	}
}

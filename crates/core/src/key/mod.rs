// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

pub use range::EncodedKeyRange;
pub use sequence::SequenceKey;
pub use sequence_code::SequenceCodeKey;
pub use system_sequence::{SystemSequenceId, SystemSequenceKey};

mod range;
mod sequence;
mod sequence_code;
mod system_sequence;

const VERSION: u8 = 1;

#[derive(Debug, Clone, PartialOrd, Ord, Hash, PartialEq, Eq)]
pub struct EncodedKey(pub Vec<u8>);

impl Deref for EncodedKey {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(key.into())
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
	SystemSequence = 0x01,
	Sequence = 0x02,
	SequenceCode = 0x03,
}

impl TryFrom<u8> for KeyKind {
	type Error = u8;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0x01 => Ok(KeyKind::SystemSequence),
			0x02 => Ok(KeyKind::Sequence),
			0x03 => Ok(KeyKind::SequenceCode),
			other => Err(other),
		}
	}
}

pub trait EncodableKey {
	const KIND: KeyKind;

	fn encode(&self) -> EncodedKey;

	fn decode(key: &EncodedKey) -> Option<Self>
	where
		Self: Sized;
}

/// Splits `key` into its payload after checking version and kind.
fn payload(key: &EncodedKey, kind: KeyKind) -> Option<&[u8]> {
	match key.as_slice() {
		[version, k, rest @ ..] if *version == VERSION && *k == kind as u8 => Some(rest),
		_ => None,
	}
}

fn header(kind: KeyKind, capacity: usize) -> Vec<u8> {
	let mut out = Vec::with_capacity(2 + capacity);
	out.push(VERSION);
	out.push(kind as u8);
	out
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use super::{EncodableKey, EncodedKey, KeyKind, header, payload};

/// Identifies an internal id generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SystemSequenceId(pub u32);

impl Display for SystemSequenceId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSequenceKey {
	pub sequence: SystemSequenceId,
}

impl SystemSequenceKey {
	pub fn encoded(sequence: SystemSequenceId) -> EncodedKey {
		Self {
			sequence,
		}
		.encode()
	}
}

impl EncodableKey for SystemSequenceKey {
	const KIND: KeyKind = KeyKind::SystemSequence;

	fn encode(&self) -> EncodedKey {
		let mut out = header(Self::KIND, 4);
		out.extend(&self.sequence.0.to_be_bytes());
		EncodedKey::new(out)
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		let payload: [u8; 4] = payload(key, Self::KIND)?.try_into().ok()?;
		Some(Self {
			sequence: SystemSequenceId(u32::from_be_bytes(payload)),
		})
	}
}

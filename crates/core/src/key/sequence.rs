// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{EncodableKey, EncodedKey, EncodedKeyRange, KeyKind, header, payload};
use crate::interface::SequenceId;

/// Key of the row holding a logical sequence, including its counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceKey {
	pub sequence: SequenceId,
}

impl SequenceKey {
	pub fn encoded(sequence: impl Into<SequenceId>) -> EncodedKey {
		Self {
			sequence: sequence.into(),
		}
		.encode()
	}

	pub fn full_scan() -> EncodedKeyRange {
		EncodedKeyRange::prefix(&header(Self::KIND, 0))
	}
}

impl EncodableKey for SequenceKey {
	const KIND: KeyKind = KeyKind::Sequence;

	fn encode(&self) -> EncodedKey {
		let mut out = header(Self::KIND, 8);
		out.extend(&self.sequence.to_be_bytes());
		EncodedKey::new(out)
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		let payload: [u8; 8] = payload(key, Self::KIND)?.try_into().ok()?;
		Some(Self {
			sequence: SequenceId(u64::from_be_bytes(payload)),
		})
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{EncodableKey, EncodedKey, EncodedKeyRange, KeyKind, header, payload};
use crate::interface::SequenceId;

/// Index entry mapping a sequence code to one of the sequences using it.
///
/// The code is length prefixed and the id is stored big endian, so a prefix
/// scan over one code yields its sequences in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCodeKey {
	pub code: String,
	pub sequence: SequenceId,
}

impl SequenceCodeKey {
	pub fn encoded(code: impl Into<String>, sequence: impl Into<SequenceId>) -> EncodedKey {
		Self {
			code: code.into(),
			sequence: sequence.into(),
		}
		.encode()
	}

	pub fn code_scan(code: &str) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&Self::code_prefix(code))
	}

	fn code_prefix(code: &str) -> Vec<u8> {
		let bytes = code.as_bytes();
		let mut out = header(Self::KIND, 4 + bytes.len() + 8);
		out.extend(&(bytes.len() as u32).to_be_bytes());
		out.extend(bytes);
		out
	}
}

impl EncodableKey for SequenceCodeKey {
	const KIND: KeyKind = KeyKind::SequenceCode;

	fn encode(&self) -> EncodedKey {
		let mut out = Self::code_prefix(&self.code);
		out.extend(&self.sequence.to_be_bytes());
		EncodedKey::new(out)
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		let payload = payload(key, Self::KIND)?;
		let (len, rest) = payload.split_first_chunk::<4>()?;
		let len = u32::from_be_bytes(*len) as usize;
		if rest.len() != len + 8 {
			return None;
		}
		let (code, id) = rest.split_at(len);
		let id: [u8; 8] = id.try_into().ok()?;
		Some(Self {
			code: String::from_utf8(code.to_vec()).ok()?,
			sequence: SequenceId(u64::from_be_bytes(id)),
		})
	}
}

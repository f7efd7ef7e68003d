// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use serde::{Serialize, de::DeserializeOwned};
use seqid_type::{
	error,
	error::diagnostic::serialization::{serde_decode_error, serde_encode_error},
};

/// Opaque row bytes as stored by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedRow(pub Vec<u8>);

impl Deref for EncodedRow {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedRow {
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(bytes.into())
	}

	pub fn encode<T: Serialize>(value: &T) -> crate::Result<Self> {
		postcard::to_allocvec(value).map(Self).map_err(|err| error!(serde_encode_error(err.to_string())))
	}

	pub fn decode<T: DeserializeOwned>(&self) -> crate::Result<T> {
		postcard::from_bytes(&self.0).map_err(|err| error!(serde_decode_error(err.to_string())))
	}
}

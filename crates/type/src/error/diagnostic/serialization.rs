// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn serde_encode_error(reason: String) -> Diagnostic {
	Diagnostic {
		code: "SERDE_001".to_string(),
		message: format!("failed to encode row: {}", reason),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn serde_decode_error(reason: String) -> Diagnostic {
	Diagnostic {
		code: "SERDE_002".to_string(),
		message: format!("failed to decode row: {}", reason),
		label: None,
		help: Some("The stored row does not match the expected layout".to_string()),
		notes: vec![],
		cause: None,
	}
}

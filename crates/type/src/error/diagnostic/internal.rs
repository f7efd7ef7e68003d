// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Creates an internal error diagnostic carrying the source location it was raised at.
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();
	let error_id = format!("ERR-{}:{}", file.rsplit('/').next().unwrap_or(file).replace(".rs", ""), line);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error [{}]: {}", error_id, reason),
		label: Some(format!("Internal invariant violated at {}:{}:{}", file, line, column)),
		help: Some(format!(
			"This is an internal error that should never occur in normal operation.\n\
			 Module: {}\n\
			 Version: {}",
			module_path,
			env!("CARGO_PKG_VERSION"),
		)),
		notes: vec![
			"This error indicates an internal inconsistency.".to_string(),
			format!("Error tracking ID: {}", error_id),
		],
		cause: None,
	}
}

pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_internal_function() {
		let diagnostic = internal("basic internal error");
		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.message.contains("basic internal error"));
		assert!(diagnostic.label.as_ref().unwrap().contains("unknown:0:0"));
	}

	#[test]
	fn test_internal_with_context_function() {
		let diagnostic = internal_with_context("context error", "src/test.rs", 100, 20, "test::module");
		assert!(diagnostic.message.contains("[ERR-test:100]"));
		assert!(diagnostic.label.as_ref().unwrap().contains("src/test.rs:100:20"));
		assert!(diagnostic.help.as_ref().unwrap().contains("test::module"));
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::SequenceError;

pub(crate) fn increment(number_increment: i64) -> crate::Result<u64> {
	match u64::try_from(number_increment) {
		Ok(increment) if increment > 0 => Ok(increment),
		_ => Err(SequenceError::InvalidIncrement {
			increment: number_increment,
		}
		.into()),
	}
}

/// Widest zero padding a sequence may format its values with.
pub(crate) const MAX_PADDING: usize = 64;

pub(crate) fn padding(padding: i64) -> crate::Result<usize> {
	match usize::try_from(padding) {
		Ok(width) if width <= MAX_PADDING => Ok(width),
		_ => Err(SequenceError::InvalidPadding {
			padding,
		}
		.into()),
	}
}

pub(crate) fn number_next(number_next: i64) -> crate::Result<u64> {
	u64::try_from(number_next).map_err(|_| {
		SequenceError::InvalidStart {
			number_next,
		}
		.into()
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_increment() {
		assert_eq!(increment(3).unwrap(), 3);
		assert_eq!(increment(0).unwrap_err().code(), "VALIDATION_001");
		assert_eq!(increment(-2).unwrap_err().code(), "VALIDATION_001");
	}

	#[test]
	fn test_padding() {
		assert_eq!(padding(0).unwrap(), 0);
		assert_eq!(padding(MAX_PADDING as i64).unwrap(), MAX_PADDING);
		assert_eq!(padding(-1).unwrap_err().code(), "VALIDATION_002");
		assert_eq!(padding(MAX_PADDING as i64 + 1).unwrap_err().code(), "VALIDATION_002");
		assert_eq!(padding(i64::MAX).unwrap_err().code(), "VALIDATION_002");
	}

	#[test]
	fn test_number_next() {
		assert_eq!(number_next(0).unwrap(), 0);
		assert_eq!(number_next(-5).unwrap_err().code(), "VALIDATION_003");
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps anything implementing `IntoDiagnostic` into an `Error`.
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error::new($diagnostic)
	};
}

/// Returns early with the given diagnostic as an `Err`.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}

/// Builds an internal diagnostic that records where it was raised.
#[macro_export]
macro_rules! internal_error {
    ($reason:expr) => {
        $crate::error::diagnostic::internal::internal_with_context(
            $reason,
            file!(),
            line!(),
            column!(),
            module_path!(),
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::diagnostic::internal::internal_with_context(
            format!($fmt, $($arg)*),
            file!(),
            line!(),
            column!(),
            module_path!(),
        )
    };
}

#[macro_export]
macro_rules! return_internal_error {
    ($reason:expr) => {
        return Err($crate::error::Error::new($crate::internal_error!($reason)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::new($crate::internal_error!($fmt, $($arg)*)))
    };
}

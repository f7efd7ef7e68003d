// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod kind;
mod r#macro;

pub use diagnostic::{Diagnostic, IntoDiagnostic, render::DefaultRenderer};
pub use kind::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn new(diagnostic: impl IntoDiagnostic) -> Self {
		Self(Box::new(diagnostic.into_diagnostic()))
	}

	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		self.0.code.as_str()
	}

	/// Classifies the error by its diagnostic code.
	pub fn kind(&self) -> ErrorKind {
		ErrorKind::from_code(&self.0.code)
	}

	/// Whether the caller may retry the whole enclosing transaction.
	pub fn is_retryable(&self) -> bool {
		self.kind().is_retryable()
	}

	/// Attaches `cause` to the innermost diagnostic of this error.
	pub fn with_cause(mut self, cause: impl IntoDiagnostic) -> Self {
		fn attach(diagnostic: &mut Diagnostic, cause: Diagnostic) {
			match diagnostic.cause {
				Some(ref mut inner) => attach(inner, cause),
				None => diagnostic.cause = Some(Box::new(cause)),
			}
		}

		attach(&mut self.0, cause.into_diagnostic());
		self
	}
}

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.trim_end())
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Self(Box::new(diagnostic))
	}
}

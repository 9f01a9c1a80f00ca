use std::fmt::{Debug, Display};

/// The error raised by geometry operations when the caller's input cannot be processed:
/// an unknown unit name, a feature collection mixing geometry types, or a feature
/// that does not hold the geometry an operation requires.
///
/// Operations return it wrapped in [`anyhow::Error`]; recover it with
/// `err.downcast_ref::<GeometryOperationError>()`.
#[derive(Clone, PartialEq, Eq)]
pub struct GeometryOperationError {
	msg: String,
}

impl GeometryOperationError {
	/// Creates a new error with the given message.
	pub fn new(msg: impl Into<String>) -> Self {
		Self { msg: msg.into() }
	}

	pub fn message(&self) -> &str {
		&self.msg
	}
}

impl Display for GeometryOperationError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.msg)
	}
}

impl Debug for GeometryOperationError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("GeometryOperationError").field(&self.msg).finish()
	}
}

impl std::error::Error for GeometryOperationError {}

//! Contains the errors that can arise within tagbridge
//!
//! The primary error is [`TagBridgeError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::ffi::NulError;
use std::fmt::{Debug, Display, Formatter};

use image::ImageError;

/// Alias for `Result<T, TagBridgeError>`
pub type Result<T> = std::result::Result<T, TagBridgeError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Handle related errors
	/// The engine could not open the file
	///
	/// This covers missing paths, directories, empty buffers, and content the engine can't parse.
	OpenFailed(&'static str),

	// Native write errors
	/// The engine reported failure for a write, naming the operation
	WriteFailed(&'static str),

	// Picture related errors
	/// Embedded picture data could not be decoded
	DecodeFailed(ImageError),
	/// An image could not be encoded
	EncodeFailed(ImageError),
	/// Attempted to use a picture format other than JPEG or PNG
	UnsupportedFormat,
	/// An image isn't stored as an 8-bit RGB(A) bitmap
	ConversionFailed,

	/// Attempted to write an empty picture, or a field with no values
	EmptyPayload,

	/// A string can't cross the boundary, as it contains a NUL byte
	InvalidString(NulError),
}

/// Errors that could occur within tagbridge
pub struct TagBridgeError {
	pub(crate) kind: ErrorKind,
}

impl TagBridgeError {
	/// Create a `TagBridgeError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::error::{ErrorKind, TagBridgeError};
	///
	/// let empty = TagBridgeError::new(ErrorKind::EmptyPayload);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::error::{ErrorKind, TagBridgeError};
	///
	/// let empty = TagBridgeError::new(ErrorKind::EmptyPayload);
	/// if let ErrorKind::EmptyPayload = empty.kind() {
	/// 	println!("Nothing to write!");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for TagBridgeError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::DecodeFailed(ref err) | ErrorKind::EncodeFailed(ref err) => Some(err),
			ErrorKind::InvalidString(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for TagBridgeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<ErrorKind> for TagBridgeError {
	fn from(kind: ErrorKind) -> Self {
		Self { kind }
	}
}

impl From<NulError> for TagBridgeError {
	fn from(input: NulError) -> Self {
		Self {
			kind: ErrorKind::InvalidString(input),
		}
	}
}

impl Display for TagBridgeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::OpenFailed(reason) => write!(f, "Unable to open file: {reason}"),
			ErrorKind::WriteFailed(operation) => {
				write!(f, "The engine failed to {operation}")
			},
			ErrorKind::DecodeFailed(ref err) => write!(f, "Picture: failed to decode: {err}"),
			ErrorKind::EncodeFailed(ref err) => write!(f, "Picture: failed to encode: {err}"),
			ErrorKind::UnsupportedFormat => {
				write!(f, "Picture: only JPEG and PNG can be written")
			},
			ErrorKind::ConversionFailed => write!(
				f,
				"Picture: image is not an 8-bit RGB or RGBA bitmap"
			),
			ErrorKind::EmptyPayload => write!(f, "Attempted to write an empty payload"),
			ErrorKind::InvalidString(ref err) => write!(f, "{err}"),
		}
	}
}

//! A tag engine with a plain C calling convention.
//!
//! Every operation takes an opaque [`EngineFile`] pointer, created by one of the
//! `tagbridge_file_open*` functions and released by [`tagbridge_file_close`]. Results that
//! don't fit in a return value are delivered through callbacks, tagged with a caller-chosen
//! session id, for the duration of the call only.
//!
//! # Contract
//!
//! * Opening fails (returns null) for missing paths, directories, empty buffers and unknown formats.
//! * [`tagbridge_file_properties`] invokes its [`TagCallback`] once per `(field, value)` pair.
//!   Multi-valued fields produce one invocation per value, in file order.
//! * [`tagbridge_file_read_picture`] invokes its [`ImageCallback`] at most once.
//! * Writes are committed immediately, to disk for path-backed files and to the in-memory buffer
//!   otherwise. A write returns `false` if anything went wrong, and then changes nothing.
//!
//! Field names use the Vorbis comment naming (`TITLE`, `ARTIST`, `TRACKNUMBER`, ...). Values
//! passed to the write functions may pack several values, separated by `'\n'`. A write fails if
//! the file's tag can't hold a field, or can't hold several values for it (ID3v1, or ID3v2 frames
//! other than text frames). Fields a tag format has no name for are only kept by formats with
//! free-form keys, or under a raw frame ID.
//!
//! # Safety
//!
//! Strings must be valid, NUL-terminated, and UTF-8. Buffers must be valid for the given length.
//! A handle must not be used from two threads at once, and must not be used after it is closed.

mod ffi;
mod file;
mod picture;
mod properties;

pub use ffi::*;
pub use file::EngineFile;

use std::os::raw::{c_char, c_int};

/// Picture format tag for JPEG data
pub const PICTURE_FORMAT_JPEG: c_int = 0;
/// Picture format tag for PNG data
pub const PICTURE_FORMAT_PNG: c_int = 1;

/// Receives a single `(field, value)` pair
///
/// Both strings are only valid until the callback returns.
pub type TagCallback = unsafe extern "C" fn(session: u64, field: *const c_char, value: *const c_char);

/// Receives embedded picture data
///
/// `data` is only valid until the callback returns.
pub type ImageCallback = unsafe extern "C" fn(session: u64, data: *const u8, len: usize);

/// Audio properties of a file
///
/// Any field the engine couldn't determine is zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawAudioProperties {
	/// Duration in whole seconds
	pub length: u32,
	/// Duration in milliseconds
	pub length_ms: u32,
	/// Bitrate (kbps)
	pub bitrate: u32,
	/// Sample rate (Hz)
	pub sample_rate: u32,
	/// Channel count
	pub channels: u32,
}

//! The table of native entry points a [`File`](crate::file::File) calls through
//!
//! [`Engine::native()`] binds the table to [`tagbridge_engine`]. Any other engine exposing the
//! same C contract can be plugged in by filling out the table by hand, see
//! [`OpenOptions::engine`](crate::config::OpenOptions::engine).

use std::os::raw::{c_char, c_int};

pub use tagbridge_engine::{EngineFile, ImageCallback, RawAudioProperties, TagCallback};

/// Native entry points, one per operation of the engine contract
///
/// Every function receives the raw handle returned by one of the `open*` entries, which stays
/// valid until it is passed to [`Engine::close`].
///
/// An engine must allow a handle to be moved between threads, as long as it's only used by one
/// thread at a time.
#[derive(Copy, Clone)]
pub struct Engine {
	/// Open a file by path, null on failure
	pub open: unsafe extern "C" fn(path: *const c_char) -> *mut EngineFile,
	/// Open an in-memory file, null on failure
	pub open_memory: unsafe extern "C" fn(data: *const u8, len: usize) -> *mut EngineFile,
	/// Open an in-memory file with a filename hint, null on failure
	pub open_memory_named:
		unsafe extern "C" fn(name: *const c_char, data: *const u8, len: usize) -> *mut EngineFile,
	/// Release a handle
	pub close: unsafe extern "C" fn(file: *mut EngineFile),
	/// Report every `(field, value)` pair through the callback
	pub properties: unsafe extern "C" fn(file: *const EngineFile, session: u64, callback: TagCallback),
	/// Replace a single field
	pub write_property: unsafe extern "C" fn(
		file: *mut EngineFile,
		field: *const c_char,
		value: *const c_char,
	) -> bool,
	/// Replace every field
	pub write_properties: unsafe extern "C" fn(
		file: *mut EngineFile,
		len: usize,
		fields: *const *const c_char,
		values: *const *const c_char,
	) -> bool,
	/// Remove every field
	pub clear_properties: unsafe extern "C" fn(file: *mut EngineFile) -> bool,
	/// Fill out the audio properties, `false` if there are none
	pub audio_properties:
		unsafe extern "C" fn(file: *const EngineFile, out: *mut RawAudioProperties) -> bool,
	/// Report the embedded cover through the callback, if there is one
	pub read_picture: unsafe extern "C" fn(file: *const EngineFile, session: u64, callback: ImageCallback),
	/// Store a front cover
	pub write_picture: unsafe extern "C" fn(
		file: *mut EngineFile,
		data: *const u8,
		len: usize,
		width: u32,
		height: u32,
		format: c_int,
	) -> bool,
	/// Remove every picture
	pub remove_pictures: unsafe extern "C" fn(file: *mut EngineFile) -> bool,
}

impl Engine {
	/// The engine provided by [`tagbridge_engine`]
	pub const fn native() -> Self {
		Self {
			open: tagbridge_engine::tagbridge_file_open,
			open_memory: tagbridge_engine::tagbridge_file_open_memory,
			open_memory_named: tagbridge_engine::tagbridge_file_open_memory_named,
			close: tagbridge_engine::tagbridge_file_close,
			properties: tagbridge_engine::tagbridge_file_properties,
			write_property: tagbridge_engine::tagbridge_file_write_property,
			write_properties: tagbridge_engine::tagbridge_file_write_properties,
			clear_properties: tagbridge_engine::tagbridge_file_clear_properties,
			audio_properties: tagbridge_engine::tagbridge_file_audio_properties,
			read_picture: tagbridge_engine::tagbridge_file_read_picture,
			write_picture: tagbridge_engine::tagbridge_file_write_picture,
			remove_pictures: tagbridge_engine::tagbridge_file_remove_pictures,
		}
	}
}

impl Default for Engine {
	fn default() -> Self {
		Self::native()
	}
}

impl std::fmt::Debug for Engine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Engine").finish_non_exhaustive()
	}
}

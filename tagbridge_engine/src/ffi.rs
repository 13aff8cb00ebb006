use crate::file::EngineFile;
use crate::{ImageCallback, RawAudioProperties, TagCallback, picture, properties};

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::path::Path;
use std::ptr;

/// # Safety
///
/// `ptr` must be null or a valid NUL-terminated string, outliving `'a`
unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
	if ptr.is_null() {
		return None;
	}

	match unsafe { CStr::from_ptr(ptr) }.to_str() {
		Ok(s) => Some(s),
		Err(e) => {
			log::warn!("Engine: argument is not valid UTF-8: {e}");
			None
		},
	}
}

/// # Safety
///
/// `data` must be null or valid for `len` bytes, outliving `'a`
unsafe fn bytes_arg<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
	if data.is_null() || len == 0 {
		return None;
	}

	Some(unsafe { std::slice::from_raw_parts(data, len) })
}

fn into_handle(file: Option<EngineFile>) -> *mut EngineFile {
	match file {
		Some(file) => Box::into_raw(Box::new(file)),
		None => ptr::null_mut(),
	}
}

/// Open the file at `path`
///
/// Returns null if the path doesn't exist, is a directory, or isn't a supported format.
///
/// # Safety
///
/// `path` must be a valid NUL-terminated UTF-8 string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_open(path: *const c_char) -> *mut EngineFile {
	let Some(path) = (unsafe { str_arg(path) }) else {
		return ptr::null_mut();
	};

	into_handle(EngineFile::open(Path::new(path)))
}

/// Open a file from an in-memory buffer
///
/// The buffer is copied, it can be freed as soon as this returns. Returns null if the buffer is
/// empty or can't be parsed.
///
/// # Safety
///
/// `data` must be valid for `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_open_memory(data: *const u8, len: usize) -> *mut EngineFile {
	let Some(data) = (unsafe { bytes_arg(data, len) }) else {
		return ptr::null_mut();
	};

	into_handle(EngineFile::open_memory(None, data.to_vec()))
}

/// Open a file from an in-memory buffer, using `name` to help identify the format
///
/// Only the extension of `name` is used. See [`tagbridge_file_open_memory`].
///
/// # Safety
///
/// `name` must be a valid NUL-terminated UTF-8 string, and `data` must be valid for `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_open_memory_named(
	name: *const c_char,
	data: *const u8,
	len: usize,
) -> *mut EngineFile {
	let name = unsafe { str_arg(name) };
	let Some(data) = (unsafe { bytes_arg(data, len) }) else {
		return ptr::null_mut();
	};

	into_handle(EngineFile::open_memory(name, data.to_vec()))
}

/// Release a file handle
///
/// Passing null does nothing.
///
/// # Safety
///
/// `file` must be null or a handle returned by one of the `tagbridge_file_open*` functions that
/// hasn't been closed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_close(file: *mut EngineFile) {
	if !file.is_null() {
		drop(unsafe { Box::from_raw(file) });
	}
}

/// Report every textual field of the file through `callback`
///
/// `callback` is invoked once per `(field, value)` pair with `session` passed through untouched,
/// and never after this function returns.
///
/// # Safety
///
/// `file` must be a valid open handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_properties(
	file: *const EngineFile,
	session: u64,
	callback: TagCallback,
) {
	let Some(file) = (unsafe { file.as_ref() }) else {
		return;
	};

	for (field, value) in properties::enumerate(file) {
		let (Ok(field), Ok(value)) = (CString::new(field), CString::new(value)) else {
			log::warn!("Engine: skipping a field containing a NUL byte");
			continue;
		};

		unsafe { callback(session, field.as_ptr(), value.as_ptr()) };
	}
}

/// Replace a single field, splitting `value` on `'\n'` into multiple values
///
/// # Safety
///
/// `file` must be a valid open handle, `field` and `value` valid NUL-terminated UTF-8 strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_write_property(
	file: *mut EngineFile,
	field: *const c_char,
	value: *const c_char,
) -> bool {
	let Some(file) = (unsafe { file.as_mut() }) else {
		return false;
	};
	let (Some(field), Some(value)) = (unsafe { str_arg(field) }, unsafe { str_arg(value) }) else {
		return false;
	};

	properties::replace_one(file, field, value)
}

/// Replace every textual field of the file with the `len` given pairs
///
/// Each value is split on `'\n'` into multiple values. Pictures are left untouched.
///
/// # Safety
///
/// `file` must be a valid open handle. `fields` and `values` must both point to `len` valid
/// NUL-terminated UTF-8 strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_write_properties(
	file: *mut EngineFile,
	len: usize,
	fields: *const *const c_char,
	values: *const *const c_char,
) -> bool {
	let Some(file) = (unsafe { file.as_mut() }) else {
		return false;
	};

	if len > 0 && (fields.is_null() || values.is_null()) {
		return false;
	}

	let mut pairs = Vec::with_capacity(len);
	for i in 0..len {
		let field = unsafe { str_arg(*fields.add(i)) };
		let value = unsafe { str_arg(*values.add(i)) };
		let (Some(field), Some(value)) = (field, value) else {
			log::warn!("Engine: invalid field/value pair at index {i}");
			return false;
		};

		pairs.push((field, value));
	}

	properties::replace_all(file, &pairs)
}

/// Remove every textual field of the file
///
/// Pictures are left untouched.
///
/// # Safety
///
/// `file` must be a valid open handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_clear_properties(file: *mut EngineFile) -> bool {
	let Some(file) = (unsafe { file.as_mut() }) else {
		return false;
	};

	properties::replace_all(file, &[])
}

/// Write the file's audio properties into `out`
///
/// Returns `false`, leaving `out` untouched, if no properties are available.
///
/// # Safety
///
/// `file` must be a valid open handle, and `out` valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_audio_properties(
	file: *const EngineFile,
	out: *mut RawAudioProperties,
) -> bool {
	let Some(file) = (unsafe { file.as_ref() }) else {
		return false;
	};
	if out.is_null() {
		return false;
	}

	unsafe { out.write(properties::audio_properties(file)) };
	true
}

/// Report the embedded cover through `callback`
///
/// `callback` is invoked at most once, and not at all if the file has no pictures.
///
/// # Safety
///
/// `file` must be a valid open handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_read_picture(
	file: *const EngineFile,
	session: u64,
	callback: ImageCallback,
) {
	let Some(file) = (unsafe { file.as_ref() }) else {
		return;
	};

	match picture::cover(file) {
		Some(data) if !data.is_empty() => unsafe { callback(session, data.as_ptr(), data.len()) },
		_ => log::debug!("Engine: file has no embedded picture"),
	}
}

/// Store `data` as the file's front cover
///
/// `format` is one of [`PICTURE_FORMAT_JPEG`](crate::PICTURE_FORMAT_JPEG) or
/// [`PICTURE_FORMAT_PNG`](crate::PICTURE_FORMAT_PNG), anything else fails. Existing front covers
/// are replaced.
///
/// `width` and `height` are advisory, they are logged and never stored. Tag formats that record
/// picture dimensions (FLAC `METADATA_BLOCK_PICTURE`) take them from the encoded `data`.
///
/// # Safety
///
/// `file` must be a valid open handle, and `data` valid for `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_write_picture(
	file: *mut EngineFile,
	data: *const u8,
	len: usize,
	width: u32,
	height: u32,
	format: c_int,
) -> bool {
	let Some(file) = (unsafe { file.as_mut() }) else {
		return false;
	};
	let Some(data) = (unsafe { bytes_arg(data, len) }) else {
		log::warn!("Engine: refusing to write an empty picture");
		return false;
	};

	picture::set_cover(file, data.to_vec(), width, height, format)
}

/// Remove every embedded picture
///
/// # Safety
///
/// `file` must be a valid open handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tagbridge_file_remove_pictures(file: *mut EngineFile) -> bool {
	let Some(file) = (unsafe { file.as_mut() }) else {
		return false;
	};

	picture::remove_all(file)
}

//! Handles to files opened by the engine
//!
//! A [`File`] owns exactly one engine handle, released when the `File` is
//! [closed](File::close) or dropped.

mod picture;
mod tags;


use crate::config::OpenOptions;
use crate::engine::{Engine, EngineFile, RawAudioProperties};
use crate::error::{ErrorKind, Result};
use crate::properties::AudioProperties;
use crate::tag::TagMap;

use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::ptr::NonNull;

/// A file opened by the engine
///
/// A `File` can be sent to another thread, but can't be shared between threads. All writes are
/// committed by the engine immediately.
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> tagbridge::error::Result<()> {
/// use tagbridge::file::File;
///
/// let file = File::open("test.mp3")?;
/// println!("Has media: {}", file.has_media());
///
/// file.close();
/// # Ok(())
/// # }
/// ```
pub struct File {
	raw: NonNull<EngineFile>,
	engine: Engine,
}

// SAFETY: Engines must allow handles to move between threads. `File` is not `Sync`, so a handle is
//         never used by two threads at once.
unsafe impl Send for File {}

impl File {
	/// Open the file at `path` with the native engine
	///
	/// See [`OpenOptions`] to control how the file is opened.
	///
	/// # Errors
	///
	/// See [`OpenOptions::open`]
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// # fn main() -> tagbridge::error::Result<()> {
	/// use tagbridge::file::File;
	///
	/// let file = File::open("test.mp3")?;
	/// # Ok(())
	/// # }
	/// ```
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		OpenOptions::new().open(path)
	}

	/// Open a file from its contents with the native engine
	///
	/// The format is guessed from the content alone.
	///
	/// # Errors
	///
	/// See [`OpenOptions::open_bytes`]
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		OpenOptions::new().open_bytes(data)
	}

	/// Open a file from its contents with the native engine, using `name` as a format hint
	///
	/// # Errors
	///
	/// See [`OpenOptions::open_bytes`]
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// # fn main() -> tagbridge::error::Result<()> {
	/// use tagbridge::file::File;
	///
	/// # let received: Vec<u8> = Vec::new();
	/// let file = File::from_bytes_with_name("upload.flac", &received)?;
	/// # Ok(())
	/// # }
	/// ```
	pub fn from_bytes_with_name(name: &str, data: &[u8]) -> Result<Self> {
		OpenOptions::new().name_hint(name).open_bytes(data)
	}

	pub(crate) fn from_raw(raw: *mut EngineFile, engine: Engine) -> Option<Self> {
		let raw = NonNull::new(raw)?;
		log::debug!("File: opened handle {raw:p}");

		Some(Self { raw, engine })
	}

	/// Release the engine handle
	///
	/// This is equivalent to dropping the `File`.
	pub fn close(self) {
		drop(self);
	}

	fn as_ptr(&self) -> *const EngineFile {
		self.raw.as_ptr()
	}

	fn as_mut_ptr(&mut self) -> *mut EngineFile {
		self.raw.as_ptr()
	}

	/// Read the audio properties
	///
	/// This is `None` if the engine has no properties for the file at all. Properties the engine
	/// couldn't determine are zero.
	pub fn read_audio_properties(&self) -> Option<AudioProperties> {
		let mut raw = RawAudioProperties::default();
		if !unsafe { (self.engine.audio_properties)(self.as_ptr(), &mut raw) } {
			log::debug!("File: no audio properties available");
			return None;
		}

		Some(AudioProperties::from(raw))
	}

	/// Whether the file has playable media
	///
	/// This is the case if any of the audio properties is non-zero.
	pub fn has_media(&self) -> bool {
		self.read_audio_properties()
			.is_some_and(|properties| !properties.is_empty())
	}
}

impl Drop for File {
	fn drop(&mut self) {
		log::debug!("File: closing handle {:p}", self.raw);
		unsafe { (self.engine.close)(self.raw.as_ptr()) }
	}
}

impl Debug for File {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("File").field("raw", &self.raw).finish()
	}
}

fn committed(success: bool, operation: &'static str) -> Result<()> {
	if success {
		return Ok(());
	}

	log::warn!("File: the engine failed to {operation}");
	Err(ErrorKind::WriteFailed(operation).into())
}

/// Read the tags and audio properties of the file at `path`
///
/// # Errors
///
/// See [`File::open`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> tagbridge::error::Result<()> {
/// let (tags, properties) = tagbridge::read("test.mp3")?;
/// # Ok(())
/// # }
/// ```
pub fn read(path: impl AsRef<Path>) -> Result<(TagMap, Option<AudioProperties>)> {
	let file = File::open(path)?;
	Ok((file.read_tags(), file.read_audio_properties()))
}

/// Read the tags of the file at `path`
///
/// # Errors
///
/// See [`File::open`]
pub fn read_tags(path: impl AsRef<Path>) -> Result<TagMap> {
	File::open(path).map(|file| file.read_tags())
}

/// Read the audio properties of the file at `path`
///
/// # Errors
///
/// See [`File::open`]
pub fn read_audio_properties(path: impl AsRef<Path>) -> Result<Option<AudioProperties>> {
	File::open(path).map(|file| file.read_audio_properties())
}

use crate::engine::Engine;
use crate::error::{ErrorKind, Result};
use crate::file::File;

use std::ffi::CString;
use std::path::Path;

/// Options to control how a [`File`] is opened
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> tagbridge::error::Result<()> {
/// use tagbridge::config::OpenOptions;
///
/// # let data: Vec<u8> = Vec::new();
/// // The data came from somewhere without a path, but we know it's an MP3
/// let file = OpenOptions::new().name_hint("song.mp3").open_bytes(&data)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct OpenOptions {
	pub(crate) engine: Engine,
	pub(crate) name_hint: Option<String>,
}

impl Default for OpenOptions {
	/// The default implementation for `OpenOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// OpenOptions {
	/// 	engine: Engine::native(),
	/// 	name_hint: None,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl OpenOptions {
	/// Creates a new `OpenOptions`, alias for `Default` implementation
	///
	/// See also: [`OpenOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::config::OpenOptions;
	///
	/// let options = OpenOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			engine: Engine::native(),
			name_hint: None,
		}
	}

	/// The engine to open the file with
	///
	/// The file will use this engine for every operation, including closing it.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::config::OpenOptions;
	/// use tagbridge::engine::Engine;
	///
	/// // This is the default, any table with the same signatures can be used
	/// let options = OpenOptions::new().engine(Engine::native());
	/// ```
	pub fn engine(mut self, engine: Engine) -> Self {
		self.engine = engine;
		self
	}

	/// A filename to help the engine recognize in-memory data
	///
	/// This is only used by [`OpenOptions::open_bytes`]. The engine tries the format implied by
	/// the name's extension first, and falls back to guessing from the content.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagbridge::config::OpenOptions;
	///
	/// let options = OpenOptions::new().name_hint("song.flac");
	/// ```
	pub fn name_hint(mut self, name: impl Into<String>) -> Self {
		self.name_hint = Some(name.into());
		self
	}

	/// Open the file at `path`
	///
	/// # Errors
	///
	/// * `path` isn't valid UTF-8, or contains a NUL byte
	/// * The engine can't open the path (it doesn't exist, is a directory, or is an unknown format)
	pub fn open(&self, path: impl AsRef<Path>) -> Result<File> {
		let path = path.as_ref();
		let Some(path_str) = path.to_str() else {
			return Err(ErrorKind::OpenFailed("path is not valid UTF-8").into());
		};

		let c_path = CString::new(path_str)?;

		log::debug!("File: opening {}", path.display());
		let raw = unsafe { (self.engine.open)(c_path.as_ptr()) };

		File::from_raw(raw, self.engine)
			.ok_or_else(|| ErrorKind::OpenFailed("the engine could not open the path").into())
	}

	/// Open a file from its contents
	///
	/// The engine keeps its own copy of `data`. Writes to the file are committed to that copy,
	/// never to `data`.
	///
	/// # Errors
	///
	/// * `data` is empty (the engine isn't invoked)
	/// * The name hint contains a NUL byte
	/// * The engine can't recognize the content
	pub fn open_bytes(&self, data: &[u8]) -> Result<File> {
		if data.is_empty() {
			return Err(ErrorKind::OpenFailed("buffer is empty").into());
		}

		let raw = match &self.name_hint {
			Some(name) => {
				let c_name = CString::new(name.as_str())?;

				log::debug!("File: opening {} bytes, named {name:?}", data.len());
				unsafe { (self.engine.open_memory_named)(c_name.as_ptr(), data.as_ptr(), data.len()) }
			},
			None => {
				log::debug!("File: opening {} bytes", data.len());
				unsafe { (self.engine.open_memory)(data.as_ptr(), data.len()) }
			},
		};

		File::from_raw(raw, self.engine)
			.ok_or_else(|| ErrorKind::OpenFailed("the engine could not recognize the content").into())
	}
}

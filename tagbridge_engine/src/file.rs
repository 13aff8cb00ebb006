use lofty::config::{ParseOptions, ParsingMode, WriteOptions};
use lofty::error::{LoftyError, Result};
use lofty::file::{AudioFile, FileType, TaggedFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{Tag, TagType};

use std::io::{Cursor, Seek};
use std::path::{Path, PathBuf};

/// Where the file content lives, and where saves go
enum Source {
	Path(PathBuf),
	Memory(Cursor<Vec<u8>>),
}

/// An opened media file
///
/// This is only ever seen by callers as a pointer, created by one of the `tagbridge_file_open*`
/// functions and released by [`tagbridge_file_close`](crate::tagbridge_file_close).
pub struct EngineFile {
	tagged: TaggedFile,
	source: Source,
}

fn parse_options() -> ParseOptions {
	ParseOptions::new()
		.parsing_mode(ParsingMode::Relaxed)
		.read_properties(true)
}

impl EngineFile {
	pub(crate) fn open(path: &Path) -> Option<Self> {
		if path.is_dir() {
			log::warn!("Engine: refusing to open directory {}", path.display());
			return None;
		}

		let read = || -> Result<TaggedFile> {
			let mut probe = Probe::open(path)?.options(parse_options());
			if probe.file_type().is_none() {
				probe = probe.guess_file_type()?;
			}

			probe.read()
		};

		match read() {
			Ok(tagged) => {
				log::debug!(
					"Engine: opened {} as {:?}",
					path.display(),
					tagged.file_type()
				);
				Some(Self {
					tagged,
					source: Source::Path(path.to_path_buf()),
				})
			},
			Err(e) => {
				log::warn!("Engine: failed to open {}: {e}", path.display());
				None
			},
		}
	}

	/// Parse an in-memory file, optionally using `name` to pick the format
	///
	/// The extension of `name` is trusted first, content sniffing is the fallback.
	pub(crate) fn open_memory(name: Option<&str>, data: Vec<u8>) -> Option<Self> {
		if data.is_empty() {
			log::warn!("Engine: refusing to open an empty buffer");
			return None;
		}

		let mut cursor = Cursor::new(data);

		let hinted = name.and_then(FileType::from_path);
		let mut tagged = None;
		if let Some(file_type) = hinted {
			match Probe::with_file_type(&mut cursor, file_type)
				.options(parse_options())
				.read()
			{
				Ok(file) => tagged = Some(file),
				Err(e) => {
					log::debug!("Engine: name hint {file_type:?} did not match the content: {e}")
				},
			}
		}

		if tagged.is_none() {
			if let Err(e) = cursor.rewind() {
				log::warn!("Engine: failed to rewind buffer: {e}");
				return None;
			}

			let guessed = Probe::new(&mut cursor)
				.options(parse_options())
				.guess_file_type()
				.map_err(LoftyError::from)
				.and_then(Probe::read);

			match guessed {
				Ok(file) => tagged = Some(file),
				Err(e) => {
					log::warn!("Engine: failed to parse buffer: {e}");
					return None;
				},
			}
		}

		let tagged = tagged?;
		log::debug!(
			"Engine: opened {} byte buffer as {:?}",
			cursor.get_ref().len(),
			tagged.file_type()
		);

		Some(Self {
			tagged,
			source: Source::Memory(cursor),
		})
	}

	pub(crate) fn tagged(&self) -> &TaggedFile {
		&self.tagged
	}

	/// The tag reads should come from
	///
	/// This is the primary tag (ID3v2 for MPEG), or whatever tag the file has otherwise.
	pub(crate) fn read_tag(&self) -> Option<&Tag> {
		self.tagged
			.primary_tag()
			.or_else(|| self.tagged.first_tag())
	}

	/// The tag writes go to, creating the primary tag if it doesn't exist yet
	pub(crate) fn write_tag(&mut self) -> Option<&mut Tag> {
		let tag_type = self.tagged.primary_tag_type();
		if self.tagged.tag(tag_type).is_none() {
			log::debug!("Engine: creating a new {tag_type:?} tag");
			self.tagged.insert_tag(Tag::new(tag_type));
		}

		self.tagged.tag_mut(tag_type)
	}

	/// Every tag type currently present in the file
	pub(crate) fn tag_types(&self) -> Vec<TagType> {
		self.tagged.tags().iter().map(Tag::tag_type).collect()
	}

	pub(crate) fn tagged_mut(&mut self) -> &mut TaggedFile {
		&mut self.tagged
	}

	/// Commit the current tags to wherever the file came from
	pub(crate) fn save(&mut self) -> bool {
		let result = match &mut self.source {
			Source::Path(path) => self.tagged.save_to_path(path, WriteOptions::default()),
			Source::Memory(cursor) => cursor
				.rewind()
				.map_err(LoftyError::from)
				.and_then(|()| self.tagged.save_to(cursor, WriteOptions::default())),
		};

		match result {
			Ok(()) => true,
			Err(e) => {
				log::warn!("Engine: failed to save {:?} file: {e}", self.tagged.file_type());
				false
			},
		}
	}
}

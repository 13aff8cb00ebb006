//! Textual fields, flattened to `(FIELD, value)` pairs
//!
//! Field names use the Vorbis comment naming (`TITLE`, `TRACKNUMBER`, ...) regardless of the
//! underlying tag format, so a field read from an ID3v2 tag can be written back to a FLAC file
//! under the same name.

use crate::file::EngineFile;

use lofty::file::AudioFile;
use lofty::tag::{ItemKey, ItemValue, Tag, TagItem, TagType};

/// The tag type whose key names are used on the boundary
const NAMING: TagType = TagType::VorbisComments;

/// Separator of multiple values packed into a single written value
pub(crate) const VALUE_SEPARATOR: char = '\n';

/// Separator of multiple values within a single ID3v2.4 text frame or APE item
const NATIVE_SEPARATOR: &str = "\0";

/// How a tag stores several values of one field
enum Repeat {
	/// One item per value
	Items,
	/// A single item, values joined with [`NATIVE_SEPARATOR`]
	Packed,
	/// Only a single value fits
	Unsupported,
}

fn repeat(tag_type: TagType, key: &ItemKey) -> Repeat {
	match tag_type {
		TagType::VorbisComments => Repeat::Items,
		TagType::Ape => Repeat::Packed,
		// Only text frames can hold a list, comments and the like can't
		TagType::Id3v2
			if key
				.map_key(TagType::Id3v2, false)
				.is_some_and(|id| id.starts_with('T')) =>
		{
			Repeat::Packed
		},
		_ => Repeat::Unsupported,
	}
}

/// Whether `tag_type` can store a field under a name it doesn't know
fn holds_unknown(tag_type: TagType, name: &str) -> bool {
	match tag_type {
		TagType::VorbisComments | TagType::Ape => true,
		// Must be a valid frame/chunk ID
		TagType::Id3v2 | TagType::RiffInfo => {
			name.len() == 4
				&& name
					.bytes()
					.all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
		},
		_ => false,
	}
}

/// Map a generic key to its boundary name
fn field_name(key: &ItemKey) -> Option<String> {
	key.map_key(NAMING, true).map(str::to_uppercase)
}

/// Map a boundary name to a generic key
fn item_key(field: &str) -> ItemKey {
	ItemKey::from_key(NAMING, &field.to_uppercase())
}

/// All `(field, value)` pairs of the file, in tag order
///
/// Values packed into a single item are reported one by one.
pub(crate) fn enumerate(file: &EngineFile) -> Vec<(String, String)> {
	let Some(tag) = file.read_tag() else {
		log::debug!("Engine: file has no tags to enumerate");
		return Vec::new();
	};

	let mut pairs = Vec::new();
	for item in tag.items() {
		let value = match item.value() {
			ItemValue::Text(text) | ItemValue::Locator(text) => text,
			ItemValue::Binary(_) => continue,
		};

		let Some(field) = field_name(item.key()) else {
			log::debug!("Engine: no field name for {:?}, skipping", item.key());
			continue;
		};

		for value in value.split(NATIVE_SEPARATOR) {
			pairs.push((field.clone(), value.to_owned()));
		}
	}

	pairs
}

/// Push the values packed in `packed`, `false` if the tag can't hold all of them
fn push_values(tag: &mut Tag, field: &str, packed: &str) -> bool {
	let key = item_key(field);
	if let ItemKey::Unknown(name) = &key {
		if !holds_unknown(tag.tag_type(), name) {
			log::warn!(
				"Engine: {:?} tags cannot hold unknown field \"{field}\"",
				tag.tag_type()
			);
			return false;
		}
	}

	let values: Vec<&str> = packed.split(VALUE_SEPARATOR).collect();

	let items = match (values.len(), repeat(tag.tag_type(), &key)) {
		(1, _) | (_, Repeat::Items) => values.iter().map(|value| (*value).to_owned()).collect(),
		(_, Repeat::Packed) => vec![values.join(NATIVE_SEPARATOR)],
		(count, Repeat::Unsupported) => {
			log::warn!(
				"Engine: {:?} tags cannot hold {count} values for field \"{field}\"",
				tag.tag_type()
			);
			return false;
		},
	};

	for value in items {
		if !tag.push(TagItem::new(key.clone(), ItemValue::Text(value))) {
			log::warn!(
				"Engine: {:?} tags cannot hold field \"{field}\"",
				tag.tag_type()
			);
			return false;
		}
	}

	true
}

/// Apply `edit` to a copy of the writable tag, and save it if the whole edit succeeded
///
/// On failure, the file is left exactly as it was.
pub(crate) fn commit(file: &mut EngineFile, edit: impl FnOnce(&mut Tag) -> bool) -> bool {
	let Some(tag) = file.write_tag() else {
		log::warn!("Engine: file cannot hold a tag");
		return false;
	};

	let mut edited = tag.clone();
	if !edit(&mut edited) {
		return false;
	}

	let previous = std::mem::replace(tag, edited);
	if file.save() {
		return true;
	}

	if let Some(tag) = file.write_tag() {
		*tag = previous;
	}

	false
}

/// Replace every textual field with `fields`, then save
pub(crate) fn replace_all(file: &mut EngineFile, fields: &[(&str, &str)]) -> bool {
	let committed = commit(file, |tag| {
		tag.retain(|_| false);
		fields
			.iter()
			.all(|(field, packed)| push_values(tag, field, packed))
	});

	if committed {
		log::debug!("Engine: wrote {} fields", fields.len());
	}

	committed
}

/// Replace a single field, then save
pub(crate) fn replace_one(file: &mut EngineFile, field: &str, packed: &str) -> bool {
	commit(file, |tag| {
		let key = item_key(field);
		tag.retain(|item| item.key() != &key);
		push_values(tag, field, packed)
	})
}

/// Snapshot of the file's audio properties
pub(crate) fn audio_properties(file: &EngineFile) -> crate::RawAudioProperties {
	let properties = file.tagged().properties();
	let duration = properties.duration();

	crate::RawAudioProperties {
		length: duration.as_secs() as u32,
		length_ms: duration.as_millis() as u32,
		bitrate: properties
			.audio_bitrate()
			.or(properties.overall_bitrate())
			.unwrap_or(0),
		sample_rate: properties.sample_rate().unwrap_or(0),
		channels: u32::from(properties.channels().unwrap_or(0)),
	}
}

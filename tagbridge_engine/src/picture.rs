use crate::file::EngineFile;
use crate::properties;
use crate::{PICTURE_FORMAT_JPEG, PICTURE_FORMAT_PNG};

use std::os::raw::c_int;

use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, Picture, PictureType};

/// The embedded cover, if any
///
/// A front cover wins over any other picture. Without one, the first picture is used.
pub(crate) fn cover(file: &EngineFile) -> Option<&[u8]> {
	let pictures = file.read_tag()?.pictures();

	let picture = pictures
		.iter()
		.find(|picture| picture.pic_type() == PictureType::CoverFront)
		.or_else(|| pictures.first())?;

	Some(picture.data())
}

fn mime_type(format: c_int) -> Option<MimeType> {
	match format {
		PICTURE_FORMAT_JPEG => Some(MimeType::Jpeg),
		PICTURE_FORMAT_PNG => Some(MimeType::Png),
		_ => None,
	}
}

/// Store `data` as the file's front cover, replacing any existing one, then save
///
/// `width` and `height` are only logged. Formats that record picture dimensions get them from
/// `data` when the tag is written.
pub(crate) fn set_cover(
	file: &mut EngineFile,
	data: Vec<u8>,
	width: u32,
	height: u32,
	format: c_int,
) -> bool {
	let Some(mime_type) = mime_type(format) else {
		log::warn!("Engine: unknown picture format tag {format}");
		return false;
	};

	log::debug!(
		"Engine: storing {width}x{height} {mime_type:?} cover ({} bytes)",
		data.len()
	);

	properties::commit(file, |tag| {
		tag.remove_picture_type(PictureType::CoverFront);
		tag.push_picture(Picture::new_unchecked(
			PictureType::CoverFront,
			Some(mime_type),
			None,
			data,
		));

		true
	})
}

/// Strip every picture from every tag, then save
pub(crate) fn remove_all(file: &mut EngineFile) -> bool {
	let previous = file.tagged_mut().tags().to_vec();

	let mut removed = 0;
	for tag_type in file.tag_types() {
		let Some(tag) = file.tagged_mut().tag_mut(tag_type) else {
			continue;
		};

		removed += tag.pictures().len();

		let pic_types: Vec<PictureType> = tag.pictures().iter().map(Picture::pic_type).collect();
		for pic_type in pic_types {
			tag.remove_picture_type(pic_type);
		}
	}

	log::debug!("Engine: removed {removed} pictures");
	if file.save() {
		return true;
	}

	for tag in previous {
		file.tagged_mut().insert_tag(tag);
	}

	false
}

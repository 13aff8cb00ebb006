use super::{File, committed};
use crate::correlation::{self, CorrelationTable, SinkKind};
use crate::error::{ErrorKind, Result};
use crate::picture::{self, PictureFormat, PicturePayload};

use image::DynamicImage;

impl File {
	/// Read the encoded data of the embedded cover
	///
	/// The engine prefers the front cover, and falls back to the first picture in the file. This
	/// is `None` if the file has no pictures.
	pub fn read_image_data(&self) -> Option<Vec<u8>> {
		let session = CorrelationTable::global().session(SinkKind::Image);
		unsafe {
			(self.engine.read_picture)(
				self.as_ptr(),
				session.id().as_raw(),
				correlation::image_sink,
			)
		};

		let data = session.finish().into_image().unwrap_or_default();
		if data.is_empty() {
			log::debug!("File: no embedded picture");
			return None;
		}

		log::debug!("File: read a {} byte picture", data.len());
		Some(data)
	}

	/// Read and decode the embedded cover
	///
	/// A file without pictures is not an error, this returns `Ok(None)`.
	///
	/// # Errors
	///
	/// The picture data can't be decoded ([`ErrorKind::DecodeFailed`])
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// # fn main() -> tagbridge::error::Result<()> {
	/// use tagbridge::file::File;
	///
	/// let file = File::open("test.mp3")?;
	/// match file.read_image()? {
	/// 	Some(cover) => println!("Cover: {}x{}", cover.width(), cover.height()),
	/// 	None => println!("No cover"),
	/// }
	/// # Ok(())
	/// # }
	/// ```
	pub fn read_image(&self) -> Result<Option<DynamicImage>> {
		match self.read_image_data() {
			Some(data) => picture::decode(&data).map(Some),
			None => Ok(None),
		}
	}

	/// Encode `image` as `format`, and store it as the front cover
	///
	/// Existing front covers are replaced.
	///
	/// # Errors
	///
	/// * See [`PicturePayload::from_image`]
	/// * The engine fails to write the picture
	pub fn write_image(&mut self, image: &DynamicImage, format: PictureFormat) -> Result<()> {
		let payload = PicturePayload::from_image(image, format)?;
		self.write_picture(&payload)
	}

	/// Store a [`PicturePayload`] as the front cover
	///
	/// # Errors
	///
	/// The engine fails to write the picture
	pub fn write_picture(&mut self, payload: &PicturePayload) -> Result<()> {
		self.write_image_data(
			payload.data(),
			payload.format(),
			payload.width(),
			payload.height(),
		)
	}

	/// Store already encoded picture data as the front cover
	///
	/// `data` is passed to the engine as-is, it must actually be encoded as `format`. `width` and
	/// `height` are advisory, the native engine only logs them.
	///
	/// # Errors
	///
	/// * `data` is empty ([`ErrorKind::EmptyPayload`], the engine isn't invoked)
	/// * The engine fails to write the picture
	pub fn write_image_data(
		&mut self,
		data: &[u8],
		format: PictureFormat,
		width: u32,
		height: u32,
	) -> Result<()> {
		if data.is_empty() {
			return Err(ErrorKind::EmptyPayload.into());
		}

		log::debug!(
			"File: writing a {width}x{height} {format:?} picture ({} bytes)",
			data.len()
		);
		let success = unsafe {
			(self.engine.write_picture)(
				self.as_mut_ptr(),
				data.as_ptr(),
				data.len(),
				width,
				height,
				format.as_raw(),
			)
		};

		committed(success, "write picture")
	}

	/// Remove every embedded picture
	///
	/// # Errors
	///
	/// The engine fails to remove the pictures
	pub fn remove_pictures(&mut self) -> Result<()> {
		log::debug!("File: removing all pictures");

		let success = unsafe { (self.engine.remove_pictures)(self.as_mut_ptr()) };
		committed(success, "remove pictures")
	}
}

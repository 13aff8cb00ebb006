//! Embedded cover art
//!
//! Pictures cross the boundary as encoded bytes. [`decode`] turns what the engine hands back
//! into a [`DynamicImage`], and [`PicturePayload::from_image`] goes the other way.

use crate::error::{ErrorKind, Result, TagBridgeError};

use std::os::raw::c_int;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageFormat};

/// Encodings a picture can be stored in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PictureFormat {
	/// JPEG, encoded at [`PictureFormat::JPEG_QUALITY`]
	Jpeg,
	/// PNG
	Png,
}

impl PictureFormat {
	/// Quality used when encoding JPEG pictures
	pub const JPEG_QUALITY: u8 = 65;

	/// The format tag the engine expects
	pub fn as_raw(self) -> c_int {
		match self {
			Self::Jpeg => tagbridge_engine::PICTURE_FORMAT_JPEG,
			Self::Png => tagbridge_engine::PICTURE_FORMAT_PNG,
		}
	}
}

impl TryFrom<ImageFormat> for PictureFormat {
	type Error = TagBridgeError;

	fn try_from(input: ImageFormat) -> Result<Self> {
		match input {
			ImageFormat::Jpeg => Ok(Self::Jpeg),
			ImageFormat::Png => Ok(Self::Png),
			_ => Err(ErrorKind::UnsupportedFormat.into()),
		}
	}
}

/// Encoded picture data, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicturePayload {
	data: Vec<u8>,
	width: u32,
	height: u32,
	format: PictureFormat,
}

impl PicturePayload {
	/// Create a `PicturePayload` from already encoded data
	///
	/// # Errors
	///
	/// `data` is empty
	pub fn new(data: Vec<u8>, width: u32, height: u32, format: PictureFormat) -> Result<Self> {
		if data.is_empty() {
			return Err(ErrorKind::EmptyPayload.into());
		}

		Ok(Self {
			data,
			width,
			height,
			format,
		})
	}

	/// Encode `image` as `format`
	///
	/// # Errors
	///
	/// * `image` isn't an 8-bit RGB or RGBA bitmap ([`ErrorKind::ConversionFailed`])
	/// * The encoder fails, or produces no data
	pub fn from_image(image: &DynamicImage, format: PictureFormat) -> Result<Self> {
		let data = encode(image, format)?;
		Self::new(data, image.width(), image.height(), format)
	}

	/// The encoded data
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Declared width in pixels
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Declared height in pixels
	pub fn height(&self) -> u32 {
		self.height
	}

	/// The encoding of [`PicturePayload::data`]
	pub fn format(&self) -> PictureFormat {
		self.format
	}

	/// Consume the payload, returning the encoded data
	pub fn into_data(self) -> Vec<u8> {
		self.data
	}
}

/// Decode picture data, detecting the format from its content
pub fn decode(data: &[u8]) -> Result<DynamicImage> {
	image::load_from_memory(data).map_err(|e| ErrorKind::DecodeFailed(e).into())
}

/// Encode `image` as `format`
///
/// Only 8-bit RGB and RGBA bitmaps are accepted. JPEG has no alpha channel, so RGBA images lose
/// it when encoded as JPEG.
pub fn encode(image: &DynamicImage, format: PictureFormat) -> Result<Vec<u8>> {
	if !matches!(image, DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_)) {
		log::debug!("Picture: refusing to encode a {:?} image", image.color());
		return Err(ErrorKind::ConversionFailed.into());
	}

	let mut data = Vec::new();
	let encoded = match format {
		PictureFormat::Jpeg => {
			let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
			rgb.write_with_encoder(JpegEncoder::new_with_quality(
				&mut data,
				PictureFormat::JPEG_QUALITY,
			))
		},
		PictureFormat::Png => image.write_with_encoder(PngEncoder::new(&mut data)),
	};

	encoded.map_err(ErrorKind::EncodeFailed)?;

	if data.is_empty() {
		return Err(ErrorKind::EmptyPayload.into());
	}

	log::debug!(
		"Picture: encoded {}x{} image as {format:?} ({} bytes)",
		image.width(),
		image.height(),
		data.len()
	);

	Ok(data)
}

use crate::util;

use tagbridge::error::ErrorKind;
use tagbridge::file::File;
use tagbridge::picture::{PictureFormat, PicturePayload};

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

fn cover() -> DynamicImage {
	DynamicImage::ImageRgb8(RgbImage::from_fn(32, 16, |x, y| {
		Rgb([(x * 8) as u8, (y * 16) as u8, 0x40])
	}))
}

#[test_log::test]
fn no_picture() {
	let temp = util::temp_wav();
	let file = File::open(temp.path()).unwrap();

	assert!(file.read_image().unwrap().is_none());
	assert!(file.read_image_data().is_none());
}

#[test_log::test]
fn png() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_image(&cover(), PictureFormat::Png).unwrap();
	file.close();

	let file = File::open(temp.path()).unwrap();
	let image = file.read_image().unwrap().unwrap();
	assert_eq!(image.to_rgb8(), cover().to_rgb8());
}

#[test_log::test]
fn jpeg() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_image(&cover(), PictureFormat::Jpeg).unwrap();
	file.close();

	let file = File::open(temp.path()).unwrap();
	assert!(file.read_image_data().unwrap().starts_with(&[0xFF, 0xD8]));

	let image = file.read_image().unwrap().unwrap();
	assert_eq!((image.width(), image.height()), (32, 16));
}

#[test_log::test]
fn rgba_as_jpeg() {
	let temp = util::temp_wav();
	let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 128])));

	let mut file = File::open(temp.path()).unwrap();
	file.write_image(&rgba, PictureFormat::Jpeg).unwrap();

	let image = file.read_image().unwrap().unwrap();
	assert_eq!((image.width(), image.height()), (8, 8));
}

#[test_log::test]
fn replace_then_remove() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_image(&cover(), PictureFormat::Jpeg).unwrap();

	let payload = PicturePayload::from_image(&cover(), PictureFormat::Png).unwrap();
	file.write_picture(&payload).unwrap();
	file.close();

	let mut file = File::open(temp.path()).unwrap();
	assert_eq!(file.read_image_data().unwrap(), payload.data());

	file.remove_pictures().unwrap();
	file.close();

	let file = File::open(temp.path()).unwrap();
	assert!(file.read_image().unwrap().is_none());
}

#[test_log::test]
fn declared_dimensions_are_advisory() {
	let temp = util::temp_wav();
	let payload = PicturePayload::from_image(&cover(), PictureFormat::Png).unwrap();

	let mut file = File::open(temp.path()).unwrap();
	file.write_image_data(payload.data(), PictureFormat::Png, 1, 1)
		.unwrap();
	file.close();

	let file = File::open(temp.path()).unwrap();
	assert_eq!(file.read_image_data().unwrap(), payload.data());

	let image = file.read_image().unwrap().unwrap();
	assert_eq!((image.width(), image.height()), (32, 16));
}

#[test_log::test]
fn pictures_and_tags_are_independent() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_tags(&util::test_tags()).unwrap();
	file.write_image(&cover(), PictureFormat::Png).unwrap();
	file.write_tags(&util::modify(&util::test_tags())).unwrap();
	file.close();

	let file = File::open(temp.path()).unwrap();
	assert!(file.read_image().unwrap().is_some());
	assert_eq!(file.read_tags(), util::modify(&util::test_tags()));
}

#[test_log::test]
fn unsupported_images() {
	let temp = util::temp_wav();
	let mut file = File::open(temp.path()).unwrap();

	let err = file
		.write_image(&DynamicImage::new_luma8(4, 4), PictureFormat::Png)
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::ConversionFailed));

	let err = file
		.write_image_data(&[], PictureFormat::Png, 4, 4)
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::EmptyPayload));

	assert!(file.read_image_data().is_none());
}

use tagbridge::tag::TagMap;

use std::io::Write as _;

use byteorder::{LittleEndian, WriteBytesExt};
use tempfile::NamedTempFile;

pub const SAMPLE_RATE: u32 = 44100;
pub const CHANNELS: u16 = 2;
const BITS_PER_SAMPLE: u16 = 16;

/// A 16-bit stereo PCM WAV file holding `secs` seconds of silence
pub fn wav(secs: u32) -> Vec<u8> {
	let block_align = CHANNELS * (BITS_PER_SAMPLE / 8);
	let byte_rate = SAMPLE_RATE * u32::from(block_align);
	let data_len = byte_rate * secs;

	let mut wav = Vec::new();
	wav.write_all(b"RIFF").unwrap();
	wav.write_u32::<LittleEndian>(36 + data_len).unwrap();
	wav.write_all(b"WAVE").unwrap();

	wav.write_all(b"fmt ").unwrap();
	wav.write_u32::<LittleEndian>(16).unwrap();
	// PCM
	wav.write_u16::<LittleEndian>(1).unwrap();
	wav.write_u16::<LittleEndian>(CHANNELS).unwrap();
	wav.write_u32::<LittleEndian>(SAMPLE_RATE).unwrap();
	wav.write_u32::<LittleEndian>(byte_rate).unwrap();
	wav.write_u16::<LittleEndian>(block_align).unwrap();
	wav.write_u16::<LittleEndian>(BITS_PER_SAMPLE).unwrap();

	wav.write_all(b"data").unwrap();
	wav.write_u32::<LittleEndian>(data_len).unwrap();
	wav.resize(wav.len() + data_len as usize, 0);

	wav
}

/// MPEG-1 Layer III, 128 kbps, 44100 Hz, joint stereo, no padding or CRC
const MPEG_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const MPEG_FRAME_SIZE: usize = 417;

/// A CBR MP3 made of `frames` silent frames, with no tags
pub fn mp3(frames: usize) -> Vec<u8> {
	let mut mp3 = Vec::with_capacity(frames * MPEG_FRAME_SIZE);
	for _ in 0..frames {
		mp3.extend_from_slice(&MPEG_FRAME_HEADER);
		mp3.resize(mp3.len() + MPEG_FRAME_SIZE - MPEG_FRAME_HEADER.len(), 0);
	}

	mp3
}

/// A 128 byte ID3v1 tag, with no genre
pub fn id3v1(title: &str, artist: &str, album: &str) -> Vec<u8> {
	fn field(tag: &mut Vec<u8>, value: &str, len: usize) {
		let start = tag.len();
		tag.extend(value.bytes().take(len));
		tag.resize(start + len, 0);
	}

	let mut tag = b"TAG".to_vec();
	field(&mut tag, title, 30);
	field(&mut tag, artist, 30);
	field(&mut tag, album, 30);
	// Year and comment
	field(&mut tag, "", 4 + 30);
	tag.push(255);

	assert_eq!(tag.len(), 128);
	tag
}

/// Create a new temporary file, ending in `extension`, holding `content`
pub fn temp_file(content: &[u8], extension: &str) -> NamedTempFile {
	let mut file = tempfile::Builder::new()
		.suffix(extension)
		.tempfile()
		.unwrap();
	file.write_all(content).unwrap();
	file.flush().unwrap();

	file
}

/// A one second [`wav()`] in a [`temp_file()`]
pub fn temp_wav() -> NamedTempFile {
	temp_file(&wav(1), ".wav")
}

pub fn test_tags() -> TagMap {
	[
		("title", "The Title"),
		("artist", "The Artist"),
		("album", "The Album"),
		("comment", "A Comment"),
		("genre", "Booty Bass"),
		("date", "1942"),
		("tracknumber", "42"),
	]
	.into_iter()
	.collect()
}

/// Suffix every value with " MODIFIED", or increment it if it's a number
pub fn modify(tags: &TagMap) -> TagMap {
	let mut modified = TagMap::new();
	for (field, values) in tags {
		for value in values {
			let value = match value.parse::<u32>() {
				Ok(number) => (number + 1).to_string(),
				Err(_) => format!("{value} MODIFIED"),
			};

			modified.insert(field, value);
		}
	}

	modified
}

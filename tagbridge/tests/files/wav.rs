use crate::util::{self, CHANNELS, SAMPLE_RATE};

use tagbridge::error::ErrorKind;
use tagbridge::file::File;
use tagbridge::tag::TagMap;

#[test_log::test]
fn properties() {
	let file = File::from_bytes(&util::wav(1)).unwrap();

	let properties = file.read_audio_properties().unwrap();
	assert_eq!(properties.length_secs(), 1);
	assert_eq!(properties.length_ms(), 1000);
	assert_eq!(properties.sample_rate(), SAMPLE_RATE);
	assert_eq!(properties.channels(), u32::from(CHANNELS));
	// 44100 Hz * 16 bits * 2 channels
	assert!((1411..=1412).contains(&properties.bitrate()));

	assert!(file.has_media());
}

#[test_log::test]
fn no_tags() {
	let temp = util::temp_wav();

	let tags = tagbridge::read_tags(temp.path()).unwrap();
	assert!(tags.is_empty());
}

#[test_log::test]
fn tags_survive_reopening() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_tags(&util::test_tags()).unwrap();
	file.close();

	let (tags, properties) = tagbridge::read(temp.path()).unwrap();
	assert_eq!(tags, util::test_tags());
	assert_eq!(properties.unwrap().sample_rate(), SAMPLE_RATE);
}

#[test_log::test]
fn modified_tags_survive_reopening() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_tags(&util::test_tags()).unwrap();
	file.close();

	let mut file = File::open(temp.path()).unwrap();
	let modified = util::modify(&file.read_tags());
	assert_eq!(modified.get_first("title"), Some("The Title MODIFIED"));
	assert_eq!(modified.get_first("tracknumber"), Some("43"));
	assert_eq!(modified.get_first("date"), Some("1943"));

	file.write_tags(&modified).unwrap();
	file.close();

	let file = File::open(temp.path()).unwrap();
	assert_eq!(file.read_tags(), modified);
}

#[test_log::test]
fn read_then_write_is_idempotent() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_tags(&util::test_tags()).unwrap();

	let tags = file.read_tags();
	file.write_tags(&tags).unwrap();
	assert_eq!(file.read_tags(), tags);
	file.close();

	assert_eq!(tagbridge::read_tags(temp.path()).unwrap(), tags);
}

#[test_log::test]
fn single_field() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_tags(&util::test_tags()).unwrap();
	file.write_tag("TITLE", &["Another Title"]).unwrap();
	file.close();

	let mut expected = util::test_tags();
	expected.set("title", ["Another Title"]);
	assert_eq!(tagbridge::read_tags(temp.path()).unwrap(), expected);
}

#[test_log::test]
fn clearing() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_tags(&util::test_tags()).unwrap();
	file.write_tags(&TagMap::new()).unwrap();
	file.close();

	assert!(tagbridge::read_tags(temp.path()).unwrap().is_empty());
}

#[test_log::test]
fn multiple_values_survive_reopening() {
	let temp = util::temp_wav();

	let mut tags = util::test_tags();
	tags.set("genre", ["Jazz", "Fusion"]);
	tags.set("artist", ["A", "B", "C"]);

	let mut file = File::open(temp.path()).unwrap();
	file.write_tags(&tags).unwrap();
	file.write_tag("album", &["Side A", "Side B"]).unwrap();
	file.close();

	tags.set("album", ["Side A", "Side B"]);

	let read = tagbridge::read_tags(temp.path()).unwrap();
	assert_eq!(read.get("genre"), Some(&["Jazz".to_owned(), "Fusion".to_owned()][..]));
	assert_eq!(read, tags);
}

#[test_log::test]
fn unknown_fields_fail_the_write() {
	let temp = util::temp_wav();

	let mut tags = TagMap::new();
	tags.insert("title", "T");
	tags.insert("my_custom_field", "X");

	let mut file = File::open(temp.path()).unwrap();
	let err = file.write_tags(&tags).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::WriteFailed(_)));

	// Nothing from the batch was kept
	assert!(file.read_tags().is_empty());
	file.close();

	assert!(tagbridge::read_tags(temp.path()).unwrap().is_empty());
}

#[test_log::test]
fn failed_writes_keep_existing_tags() {
	let temp = util::temp_wav();

	let mut file = File::open(temp.path()).unwrap();
	file.write_tags(&util::test_tags()).unwrap();

	let err = file.write_tag("my_custom_field", &["X"]).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::WriteFailed(_)));

	// ID3v2 comments hold a single value
	let err = file.write_tag("comment", &["One", "Two"]).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::WriteFailed(_)));

	assert_eq!(file.read_tags(), util::test_tags());
	file.close();

	assert_eq!(tagbridge::read_tags(temp.path()).unwrap(), util::test_tags());
}

#[test_log::test]
fn in_memory_writes() {
	let data = util::wav(1);

	let mut file = File::from_bytes_with_name("song.wav", &data).unwrap();
	file.write_tags(&util::test_tags()).unwrap();
	assert_eq!(file.read_tags(), util::test_tags());
}

#[test_log::test]
fn name_hints() {
	let data = util::wav(1);

	for name in ["song.wav", "song.WAV", "no_extension", "blob.bin"] {
		let file = File::from_bytes_with_name(name, &data).unwrap();
		assert!(file.has_media(), "{name}");
	}
}

#[test_log::test]
fn handles_on_separate_threads() {
	std::thread::scope(|scope| {
		for thread in 0..4 {
			scope.spawn(move || {
				let temp = util::temp_wav();
				let title = format!("Title {thread}");

				let mut file = File::open(temp.path()).unwrap();
				file.write_tag("title", &[title.as_str()]).unwrap();

				// Handles can be moved, just not shared
				let file = std::thread::spawn(move || {
					assert_eq!(file.read_tags().get_first("title"), Some(title.as_str()));
					file
				})
				.join()
				.unwrap();

				file.close();
			});
		}
	});
}

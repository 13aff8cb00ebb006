use crate::util;

use tagbridge::error::ErrorKind;
use tagbridge::file::File;

fn assert_open_failed(result: tagbridge::error::Result<File>) {
	let err = result.unwrap_err();
	assert!(
		matches!(err.kind(), ErrorKind::OpenFailed(_)),
		"unexpected error: {err}"
	);
}

#[test_log::test]
fn missing_path() {
	let dir = tempfile::tempdir().unwrap();
	assert_open_failed(File::open(dir.path().join("missing.mp3")));
}

#[test_log::test]
fn directory() {
	let dir = tempfile::tempdir().unwrap();
	assert_open_failed(File::open(dir.path()));
}

#[test_log::test]
fn empty_buffer() {
	assert_open_failed(File::from_bytes(&[]));
	assert_open_failed(File::from_bytes_with_name("song.wav", &[]));
}

#[test_log::test]
fn garbage() {
	let garbage = b"This is not an audio file, whatever its name says".repeat(16);

	assert_open_failed(File::from_bytes(&garbage));

	let temp = util::temp_file(&garbage, ".txt");
	assert_open_failed(File::open(temp.path()));
}

#[test_log::test]
fn nul_in_path() {
	let err = File::open("song\0.wav").unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidString(_)));
}

#[test_log::test]
fn one_shot_reads_fail_too() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("missing.wav");

	assert!(tagbridge::read(&missing).is_err());
	assert!(tagbridge::read_tags(&missing).is_err());
	assert!(tagbridge::read_audio_properties(&missing).is_err());
}

//! Audio properties of a file

use crate::engine::RawAudioProperties;

use std::time::Duration;

/// Various *immutable* audio properties
///
/// Any field the engine couldn't determine is zero.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[non_exhaustive]
pub struct AudioProperties {
	pub(crate) length_secs: u32,
	pub(crate) length_ms: u32,
	pub(crate) bitrate: u32,
	pub(crate) sample_rate: u32,
	pub(crate) channels: u32,
}

impl AudioProperties {
	/// Create a new `AudioProperties`
	#[must_use]
	pub const fn new(
		length_secs: u32,
		length_ms: u32,
		bitrate: u32,
		sample_rate: u32,
		channels: u32,
	) -> Self {
		Self {
			length_secs,
			length_ms,
			bitrate,
			sample_rate,
			channels,
		}
	}

	/// Duration of the audio in whole seconds
	pub fn length_secs(&self) -> u32 {
		self.length_secs
	}

	/// Duration of the audio in milliseconds
	pub fn length_ms(&self) -> u32 {
		self.length_ms
	}

	/// Duration of the audio
	pub fn duration(&self) -> Duration {
		Duration::from_millis(u64::from(self.length_ms))
	}

	/// Bitrate (kbps)
	pub fn bitrate(&self) -> u32 {
		self.bitrate
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Channel count
	pub fn channels(&self) -> u32 {
		self.channels
	}

	/// Whether every property is zero, meaning there is no playable media
	pub fn is_empty(&self) -> bool {
		matches!(
			self,
			Self {
				length_secs: 0,
				length_ms: 0,
				bitrate: 0,
				sample_rate: 0,
				channels: 0,
			}
		)
	}
}

impl From<RawAudioProperties> for AudioProperties {
	fn from(input: RawAudioProperties) -> Self {
		let RawAudioProperties {
			length,
			length_ms,
			bitrate,
			sample_rate,
			channels,
		} = input;

		Self {
			length_secs: length,
			length_ms,
			bitrate,
			sample_rate,
			channels,
		}
	}
}

//! Read and write audio metadata through a native tag engine.
//!
//! Format parsing is left entirely to the engine (by default [`tagbridge_engine`]), which is
//! reached through a plain C calling convention. This crate owns the engine handles, pulls
//! multi-valued tags and pictures back across the boundary, and converts cover art to and from
//! [`image::DynamicImage`].
//!
//! # Examples
//!
//! ## Reading tags
//!
//! ```rust,no_run
//! # fn main() -> tagbridge::error::Result<()> {
//! use tagbridge::file::File;
//!
//! let file = File::open("test.mp3")?;
//! let tags = file.read_tags();
//!
//! if let Some(title) = tags.get_first("title") {
//! 	println!("Title: {title}");
//! }
//!
//! if let Some(properties) = file.read_audio_properties() {
//! 	println!("Length: {}s", properties.length_secs());
//! }
//!
//! // Released here, `File::close` can also be called explicitly
//! # Ok(())
//! # }
//! ```
//!
//! ## Writing tags
//!
//! ```rust,no_run
//! # fn main() -> tagbridge::error::Result<()> {
//! use tagbridge::file::File;
//!
//! let mut file = File::open("test.mp3")?;
//!
//! let mut tags = file.read_tags();
//! tags.set("genre", ["Jazz", "Fusion"]);
//! file.write_tags(&tags)?;
//!
//! file.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Cover art
//!
//! ```rust,no_run
//! # fn main() -> tagbridge::error::Result<()> {
//! use tagbridge::file::File;
//! use tagbridge::picture::PictureFormat;
//!
//! let mut file = File::open("test.mp3")?;
//!
//! if let Some(cover) = file.read_image()? {
//! 	// Store it again, this time as a PNG
//! 	file.write_image(&cover, PictureFormat::Png)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## One-shot reads
//!
//! ```rust,no_run
//! # fn main() -> tagbridge::error::Result<()> {
//! let (tags, properties) = tagbridge::read("test.mp3")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Notes on the engine
//!
//! Every write is committed by the engine immediately, there is no separate "save" step.
//!
//! Field names are those of the engine, lower-cased (`"title"`, `"artist"`, `"tracknumber"`, ...).
//! See [`tag`] for how multiple values are passed to the engine.

pub mod config;
pub mod correlation;
pub mod engine;
pub mod error;
pub mod file;
pub mod picture;
pub mod properties;
pub mod tag;

pub use crate::file::{read, read_audio_properties, read_tags};

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use tagbridge::prelude::*;
	//! ```

	pub use crate::file::File;
	pub use crate::picture::{PictureFormat, PicturePayload};
	pub use crate::properties::AudioProperties;
	pub use crate::tag::TagMap;
}

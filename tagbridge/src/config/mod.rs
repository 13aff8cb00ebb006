//! Various configuration options to control how files are opened

mod open_options;

pub use open_options::OpenOptions;

#![allow(missing_docs)]

mod open;
mod picture;
pub(crate) mod util;
mod wav;

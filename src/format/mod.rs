//! Edge-list file loading.

pub mod reader;

pub use reader::{EdgeListFormat, EdgeListReader, LoadOptions};

//!
//! Common utilities: source buffers and locations.
//!

pub mod file;
pub mod location;

pub use file::SourceFile;
pub use location::*;

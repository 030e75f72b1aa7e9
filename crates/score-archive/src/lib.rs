//! Versioned JSON archive for score documents.
//!
//! One serialization engine drives both directions: a record describes its
//! field sequence once in [`Serializable::serialize`] and the same method
//! body runs against the reading [`InputArchive`] and the writing
//! [`OutputArchive`]. Documents are pretty-printed JSON with a leading
//! schema version, and every structural or numeric mismatch aborts the
//! whole operation.
//!
//! # Example
//!
//! ```
//! use score_archive::{archive_record, load, save, Archive, ArchiveError, FileVersion, Serializable};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Entry {
//!     title: String,
//!     plays: u32,
//! }
//!
//! impl Serializable for Entry {
//!     fn serialize<A: Archive>(
//!         &mut self,
//!         archive: &mut A,
//!         _version: FileVersion,
//!     ) -> Result<(), ArchiveError> {
//!         archive.field("title", &mut self.title)?;
//!         archive.field("plays", &mut self.plays)
//!     }
//! }
//!
//! archive_record!(Entry);
//!
//! # fn main() -> Result<(), ArchiveError> {
//! let mut buffer = Vec::new();
//! let mut entry = Entry { title: "Intro".into(), plays: 3 };
//! save(&mut buffer, "entry", &mut entry)?;
//!
//! let mut copy = Entry::default();
//! load(buffer.as_slice(), "entry", &mut copy)?;
//! assert_eq!(entry, copy);
//! # Ok(())
//! # }
//! ```

pub mod bitset;
mod cursor;
pub mod error;
mod input;
mod output;
pub mod value;
pub mod version;
mod writer;

pub use bitset::Bitset;
pub use error::ArchiveError;
pub use input::{load, InputArchive};
pub use output::{save, save_with_version, OutputArchive};
pub use value::{Archive, ArchiveValue, Serializable};
pub use version::FileVersion;

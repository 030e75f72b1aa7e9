//! Schema version of the score document format.

use std::fmt;

use crate::error::ArchiveError;

/// Name of the top-level member that carries the schema version. It is
/// always the first member of the document, before the named root value.
pub(crate) const VERSION_FIELD: &str = "version";

/// Schema version carried by every document.
///
/// Records branch their field sequence on the version handed to
/// [`Serializable::serialize`](crate::Serializable::serialize); the named
/// constants mark the versions at which the format gained a feature.
/// Values outside `[INITIAL, LATEST]` cannot be constructed, so a
/// `FileVersion` held by an archive is always within the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileVersion(u32);

impl FileVersion {
    /// First version of the text-based format.
    pub const INITIAL: FileVersion = FileVersion(1);
    /// Scores carry view filters from this version on.
    pub const VIEW_FILTERS: FileVersion = FileVersion(2);
    /// The version written by default.
    pub const LATEST: FileVersion = FileVersion::VIEW_FILTERS;

    /// The raw version number as stored in the document.
    pub fn number(self) -> u32 {
        self.0
    }

    /// Checks a stored version number against the supported range.
    pub fn validate(raw: u32) -> Result<FileVersion, ArchiveError> {
        if raw < Self::INITIAL.0 || raw > Self::LATEST.0 {
            return Err(ArchiveError::UnsupportedVersion {
                found: raw,
                min: Self::INITIAL.0,
                max: Self::LATEST.0,
            });
        }
        Ok(FileVersion(raw))
    }
}

impl fmt::Display for FileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

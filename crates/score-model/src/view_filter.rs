//! Named filter selecting which players a view shows.
//!
//! View filters entered the format at
//! [`FileVersion::VIEW_FILTERS`](score_archive::FileVersion::VIEW_FILTERS);
//! the score gates their field on that version.

use score_archive::{archive_record, Archive, ArchiveError, FileVersion, Serializable};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewFilter {
    pub description: String,
    /// Player description patterns; a player matching any rule is shown.
    pub rules: Vec<String>,
}

impl Serializable for ViewFilter {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("description", &mut self.description)?;
        archive.field("rules", &mut self.rules)
    }
}

archive_record!(ViewFilter);

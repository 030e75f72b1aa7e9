//! A rhythmic position within a system.

use score_archive::{archive_record, Archive, ArchiveError, Bitset, FileVersion, Serializable};

use crate::note::Note;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Position {
    /// Horizontal offset within the system, in staff positions.
    pub offset: u32,
    pub simple_properties: Bitset<16>,
    pub notes: Vec<Note>,
}

impl Position {
    pub fn new(offset: u32) -> Self {
        Position {
            offset,
            ..Position::default()
        }
    }
}

impl Serializable for Position {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("position", &mut self.offset)?;
        archive.field("properties", &mut self.simple_properties)?;
        archive.field("notes", &mut self.notes)
    }
}

archive_record!(Position);

//! A performer and their instrument setup.

use score_archive::{archive_record, Archive, ArchiveError, FileVersion, Serializable};

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub description: String,
    pub tuning: Tuning,
    pub max_volume: u8,
    pub pan: u8,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            description: "Guitar".into(),
            tuning: Tuning::default(),
            max_volume: 127,
            pan: 64,
        }
    }
}

impl Serializable for Player {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("description", &mut self.description)?;
        archive.field("tuning", &mut self.tuning)?;
        archive.field("max_volume", &mut self.max_volume)?;
        archive.field("pan", &mut self.pan)
    }
}

archive_record!(Player);

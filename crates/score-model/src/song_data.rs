//! Song metadata.

use chrono::NaiveDate;
use score_archive::{archive_record, Archive, ArchiveError, FileVersion, Serializable};

/// Recording details for a bootleg source, when the transcription came
/// from one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BootlegInfo {
    pub title: String,
    pub date: NaiveDate,
}

impl Serializable for BootlegInfo {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("title", &mut self.title)?;
        archive.field("date", &mut self.date)
    }
}

archive_record!(BootlegInfo);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SongData {
    pub title: String,
    pub artist: String,
    pub transcriber: String,
    pub bootleg: Option<BootlegInfo>,
}

impl Serializable for SongData {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("title", &mut self.title)?;
        archive.field("artist", &mut self.artist)?;
        archive.field("transcriber", &mut self.transcriber)?;
        archive.field("bootleg", &mut self.bootleg)
    }
}

archive_record!(SongData);

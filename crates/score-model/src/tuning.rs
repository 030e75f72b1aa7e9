//! Instrument tuning.

use score_archive::{archive_record, Archive, ArchiveError, FileVersion, Serializable};

/// Tuning of one stringed instrument.
///
/// `notes` holds the MIDI pitch of each open string, highest string
/// first. `music_notation_offset` shifts standard notation in steps and
/// may be negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    pub name: String,
    pub notes: Vec<u8>,
    pub music_notation_offset: i8,
    pub uses_sharps: bool,
    pub capo: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        // Standard guitar tuning, high E to low E.
        Tuning {
            name: "Standard".into(),
            notes: vec![64, 59, 55, 50, 45, 40],
            music_notation_offset: 0,
            uses_sharps: true,
            capo: 0,
        }
    }
}

impl Tuning {
    pub fn string_count(&self) -> usize {
        self.notes.len()
    }
}

impl Serializable for Tuning {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("name", &mut self.name)?;
        archive.field("notes", &mut self.notes)?;
        archive.field("music_notation_offset", &mut self.music_notation_offset)?;
        archive.field("uses_sharps", &mut self.uses_sharps)?;
        archive.field("capo", &mut self.capo)
    }
}

archive_record!(Tuning);

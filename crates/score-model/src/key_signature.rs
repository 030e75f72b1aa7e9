//! Key signature attached to a system.

use score_archive::{archive_enum, archive_record, Archive, ArchiveError, FileVersion, Serializable};

/// Whether the key is major or minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyType {
    #[default]
    Major,
    Minor,
}

archive_enum!(KeyType { Major, Minor });

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeySignature {
    pub key_type: KeyType,
    pub num_accidentals: u8,
    pub uses_sharps: bool,
    pub is_visible: bool,
    pub is_cancellation: bool,
}

impl KeySignature {
    /// The maximum valid number of accidentals.
    pub const MAX_NUM_ACCIDENTALS: u8 = 7;
}

impl Serializable for KeySignature {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("key_type", &mut self.key_type)?;
        archive.field("num_accidentals", &mut self.num_accidentals)?;
        archive.field("uses_sharps", &mut self.uses_sharps)?;
        archive.field("is_visible", &mut self.is_visible)?;
        archive.field("is_cancellation", &mut self.is_cancellation)
    }
}

archive_record!(KeySignature);

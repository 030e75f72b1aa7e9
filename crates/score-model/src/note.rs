//! A single note at a position.

use score_archive::{archive_record, Archive, ArchiveError, Bitset, FileVersion, Serializable};

/// Boolean note flags, stored together as one bitset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteProperty {
    Tied,
    Muted,
    HammerOnOrPullOff,
    NaturalHarmonic,
    GhostNote,
    Octave8va,
    Octave8vb,
    Octave15ma,
    Octave15mb,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Note {
    pub string: u8,
    pub fret: u8,
    pub simple_properties: Bitset<16>,
    pub trilled_fret: Option<u8>,
}

impl Note {
    pub fn new(string: u8, fret: u8) -> Self {
        Note {
            string,
            fret,
            ..Note::default()
        }
    }

    pub fn has_property(&self, property: NoteProperty) -> bool {
        self.simple_properties.test(property as usize)
    }

    pub fn set_property(&mut self, property: NoteProperty, set: bool) {
        self.simple_properties.set(property as usize, set);
    }
}

impl Serializable for Note {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("string", &mut self.string)?;
        archive.field("fret", &mut self.fret)?;
        archive.field("properties", &mut self.simple_properties)?;
        archive.field("trilled_fret", &mut self.trilled_fret)
    }
}

archive_record!(Note);

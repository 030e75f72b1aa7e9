//! The score root record.

use std::collections::BTreeMap;

use score_archive::{archive_record, Archive, ArchiveError, FileVersion, Serializable};

use crate::key_signature::KeySignature;
use crate::player::Player;
use crate::position::Position;
use crate::song_data::SongData;
use crate::time_signature::TimeSignature;
use crate::view_filter::ViewFilter;

/// One staff system: its signatures and positions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct System {
    pub key_signature: KeySignature,
    pub time_signature: TimeSignature,
    pub positions: Vec<Position>,
}

impl Serializable for System {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("key_signature", &mut self.key_signature)?;
        archive.field("time_signature", &mut self.time_signature)?;
        archive.field("positions", &mut self.positions)
    }
}

archive_record!(System);

/// The whole document: song metadata, players, systems, bookmarks and
/// (since [`FileVersion::VIEW_FILTERS`]) view filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Score {
    pub song_data: SongData,
    pub players: Vec<Player>,
    pub systems: Vec<System>,
    /// User bookmarks keyed by system index.
    pub bookmarks: BTreeMap<i32, String>,
    /// Empty when loading documents older than `VIEW_FILTERS`.
    pub view_filters: Vec<ViewFilter>,
}

impl Serializable for Score {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("song_data", &mut self.song_data)?;
        archive.field("players", &mut self.players)?;
        archive.field("systems", &mut self.systems)?;
        archive.field("bookmarks", &mut self.bookmarks)?;
        if version >= FileVersion::VIEW_FILTERS {
            archive.field("view_filters", &mut self.view_filters)?;
        }
        Ok(())
    }
}

archive_record!(Score);

//! In-memory score document model.
//!
//! Every record implements [`score_archive::Serializable`] with one field
//! sequence shared by the reading and writing archives. Fields added in
//! later format versions branch on the [`score_archive::FileVersion`]
//! handed down by the archive, so old documents load with those fields
//! defaulted.

pub mod key_signature;
pub mod note;
pub mod player;
pub mod position;
pub mod score;
pub mod song_data;
pub mod time_signature;
pub mod tuning;
pub mod view_filter;

pub use key_signature::{KeySignature, KeyType};
pub use note::{Note, NoteProperty};
pub use player::Player;
pub use position::Position;
pub use score::{Score, System};
pub use song_data::{BootlegInfo, SongData};
pub use time_signature::{MeterType, TimeSignature};
pub use tuning::Tuning;
pub use view_filter::ViewFilter;

//! Time signature attached to a system.

use score_archive::{archive_enum, archive_record, Archive, ArchiveError, FileVersion, Serializable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeterType {
    #[default]
    Normal,
    CutTime,
    CommonTime,
}

archive_enum!(MeterType {
    Normal,
    CutTime,
    CommonTime,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSignature {
    pub meter_type: MeterType,
    pub beats_per_measure: u8,
    pub beat_value: u8,
    /// How beams group per beat, up to four groups; unused slots are zero.
    pub beaming_pattern: [u8; 4],
    pub num_pulses: u8,
    pub is_visible: bool,
}

impl Default for TimeSignature {
    fn default() -> Self {
        TimeSignature {
            meter_type: MeterType::Normal,
            beats_per_measure: 4,
            beat_value: 4,
            beaming_pattern: [4, 0, 0, 0],
            num_pulses: 4,
            is_visible: true,
        }
    }
}

impl Serializable for TimeSignature {
    fn serialize<A: Archive>(
        &mut self,
        archive: &mut A,
        _version: FileVersion,
    ) -> Result<(), ArchiveError> {
        archive.field("meter_type", &mut self.meter_type)?;
        archive.field("beats_per_measure", &mut self.beats_per_measure)?;
        archive.field("beat_value", &mut self.beat_value)?;
        archive.field("beaming_pattern", &mut self.beaming_pattern)?;
        archive.field("num_pulses", &mut self.num_pulses)?;
        archive.field("is_visible", &mut self.is_visible)
    }
}

archive_record!(TimeSignature);

//! Save and reload each record type and require an equivalent value back.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use score_archive::{load, save, save_with_version, ArchiveValue, FileVersion};
use score_model::{
    BootlegInfo, KeySignature, KeyType, MeterType, Note, NoteProperty, Player, Position, Score,
    SongData, System, TimeSignature, Tuning, ViewFilter,
};
use serde_json::Value;

fn roundtrip<T>(name: &str, original: &T)
where
    T: ArchiveValue + Clone + Default + PartialEq + std::fmt::Debug,
{
    let mut buffer = Vec::new();
    save(&mut buffer, name, &mut original.clone()).expect("save failed");

    let mut copy = T::default();
    load(buffer.as_slice(), name, &mut copy).expect("load failed");

    assert_eq!(original, &copy);
}

fn sample_score() -> Score {
    let mut trill = Note::new(1, 7);
    trill.trilled_fret = Some(9);
    trill.set_property(NoteProperty::HammerOnOrPullOff, true);

    let mut muted = Note::new(3, 0);
    muted.set_property(NoteProperty::Muted, true);

    let mut opening = Position::new(0);
    opening.notes = vec![trill, muted];

    Score {
        song_data: SongData {
            title: "Cliffs of Dover".into(),
            artist: "Eric Johnson".into(),
            transcriber: "tabber".into(),
            bootleg: Some(BootlegInfo {
                title: "Austin '88".into(),
                date: NaiveDate::from_ymd_opt(1988, 3, 21).unwrap(),
            }),
        },
        players: vec![
            Player::default(),
            Player {
                description: "Rhythm".into(),
                tuning: Tuning {
                    name: "Drop D".into(),
                    notes: vec![64, 59, 55, 50, 45, 38],
                    music_notation_offset: -1,
                    uses_sharps: false,
                    capo: 2,
                },
                max_volume: 100,
                pan: 32,
            },
        ],
        systems: vec![
            System {
                key_signature: KeySignature {
                    key_type: KeyType::Major,
                    num_accidentals: 4,
                    uses_sharps: true,
                    is_visible: true,
                    is_cancellation: false,
                },
                time_signature: TimeSignature::default(),
                positions: vec![opening, Position::new(4)],
            },
            System::default(),
        ],
        bookmarks: BTreeMap::from([(0, "intro".into()), (1, "verse".into())]),
        view_filters: vec![ViewFilter {
            description: "Guitars".into(),
            rules: vec!["Guitar".into(), "Rhythm".into()],
        }],
    }
}

#[test]
fn key_signature() {
    roundtrip(
        "key_signature",
        &KeySignature {
            key_type: KeyType::Minor,
            num_accidentals: 3,
            uses_sharps: false,
            is_visible: true,
            is_cancellation: false,
        },
    );
}

#[test]
fn time_signature() {
    roundtrip(
        "time_signature",
        &TimeSignature {
            meter_type: MeterType::CutTime,
            beats_per_measure: 2,
            beat_value: 2,
            beaming_pattern: [2, 2, 0, 0],
            num_pulses: 2,
            is_visible: false,
        },
    );
}

#[test]
fn tuning() {
    roundtrip(
        "tuning",
        &Tuning {
            name: "Open G".into(),
            notes: vec![62, 59, 55, 50, 43, 38],
            music_notation_offset: -2,
            uses_sharps: false,
            capo: 3,
        },
    );
}

#[test]
fn note_with_properties() {
    let mut note = Note::new(2, 12);
    note.set_property(NoteProperty::NaturalHarmonic, true);
    note.set_property(NoteProperty::Tied, true);
    note.trilled_fret = Some(14);
    assert!(note.has_property(NoteProperty::Tied));
    roundtrip("note", &note);
}

#[test]
fn position() {
    let mut position = Position::new(6);
    position.notes = vec![Note::new(5, 3), Note::new(4, 5)];
    roundtrip("position", &position);
}

#[test]
fn player() {
    roundtrip("player", &Player::default());
}

#[test]
fn song_data_with_and_without_bootleg() {
    roundtrip(
        "song_data",
        &SongData {
            title: "Intro".into(),
            artist: "".into(),
            transcriber: "someone".into(),
            bootleg: None,
        },
    );
    roundtrip(
        "song_data",
        &SongData {
            title: "Intro".into(),
            artist: "Band".into(),
            transcriber: "someone".into(),
            bootleg: Some(BootlegInfo {
                title: "Tape 3".into(),
                date: NaiveDate::from_ymd_opt(1979, 12, 1).unwrap(),
            }),
        },
    );
}

#[test]
fn full_score() {
    roundtrip("score", &sample_score());
}

#[test]
fn old_documents_load_with_view_filters_defaulted() {
    let mut original = sample_score();
    original.view_filters.clear();

    let mut buffer = Vec::new();
    save_with_version(&mut buffer, FileVersion::INITIAL, "score", &mut original.clone()).unwrap();

    // The gated field never reaches the wire at the old version.
    let parsed: Value = serde_json::from_slice(&buffer).unwrap();
    assert!(parsed["score"].get("view_filters").is_none());

    let mut copy = Score::default();
    load(buffer.as_slice(), "score", &mut copy).unwrap();
    assert_eq!(copy, original);
    assert!(copy.view_filters.is_empty());
}

#[test]
fn new_documents_carry_view_filters() {
    let original = sample_score();

    let mut buffer = Vec::new();
    save(&mut buffer, "score", &mut original.clone()).unwrap();

    let parsed: Value = serde_json::from_slice(&buffer).unwrap();
    assert!(parsed["score"]["view_filters"].is_array());

    let mut copy = Score::default();
    load(buffer.as_slice(), "score", &mut copy).unwrap();
    assert_eq!(copy, original);
}

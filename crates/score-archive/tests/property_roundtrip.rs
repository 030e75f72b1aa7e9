use std::collections::BTreeMap;

use proptest::prelude::*;
use score_archive::{load, save, ArchiveError, ArchiveValue, FileVersion};

fn roundtrip<T>(original: &T) -> T
where
    T: ArchiveValue + Clone + Default + PartialEq + std::fmt::Debug,
{
    let mut buffer = Vec::new();
    save(&mut buffer, "value", &mut original.clone()).expect("save failed");
    let mut copy = T::default();
    load(buffer.as_slice(), "value", &mut copy).expect("load failed");
    copy
}

proptest! {
    #[test]
    fn strings_round_trip(text in ".*") {
        let original: String = text;
        prop_assert_eq!(roundtrip(&original), original);
    }

    #[test]
    fn sequences_round_trip(items in prop::collection::vec(any::<i32>(), 0..16)) {
        prop_assert_eq!(roundtrip(&items), items);
    }

    #[test]
    fn optionals_round_trip(value in prop::option::of(any::<u32>())) {
        prop_assert_eq!(roundtrip(&value), value);
    }

    #[test]
    fn integer_keyed_maps_round_trip(
        entries in prop::collection::btree_map(any::<i32>(), any::<u32>(), 0..8)
    ) {
        prop_assert_eq!(roundtrip(&entries), entries);
    }

    #[test]
    fn unsupported_versions_never_reach_the_target(
        raw in (FileVersion::LATEST.number() + 1)..=u32::MAX
    ) {
        let text = format!("{{ \"version\": {raw}, \"value\": 5 }}");
        let mut target = 7u32;
        let result = load(text.as_bytes(), "value", &mut target);
        let is_unsupported = matches!(result, Err(ArchiveError::UnsupportedVersion { .. }));
        prop_assert!(is_unsupported);
        prop_assert_eq!(target, 7);
    }
}

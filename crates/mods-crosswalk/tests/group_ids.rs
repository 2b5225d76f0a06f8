//! Property tests for group id allocation.

use std::collections::{BTreeMap, BTreeSet};

use mods_common::RecordingNotifier;
use mods_crosswalk::{GroupIdAllocator, GroupKind, TransformOptions, transform_with};
use mods_model::{Description, DescriptiveValue};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = GroupKind> {
    prop_oneof![Just(GroupKind::AltRepGroup), Just(GroupKind::NameTitleGroup)]
}

fn parallel_title(branches: usize) -> DescriptiveValue {
    DescriptiveValue {
        parallel_value: (0..branches)
            .map(|idx| DescriptiveValue::from_value(format!("Title {idx}")))
            .collect(),
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn ids_count_up_per_kind(kinds in prop::collection::vec(kind_strategy(), 0..40)) {
        let mut ids = GroupIdAllocator::new();
        let mut expected = BTreeMap::new();
        for kind in kinds {
            let counter = expected.entry(kind.attribute()).or_insert(0u32);
            *counter += 1;
            let id = ids.next(kind);
            prop_assert_eq!(id.as_str(), counter.to_string());
        }
    }

    #[test]
    fn each_parallel_value_gets_its_own_group(
        branch_counts in prop::collection::vec(2usize..5, 1..6),
    ) {
        let description = Description {
            title: branch_counts.iter().copied().map(parallel_title).collect(),
            ..Default::default()
        };
        let document = transform_with(
            &description,
            "bc123df4567",
            &TransformOptions::default(),
            &RecordingNotifier::new(),
        )
        .expect("transform");

        let groups: Vec<&str> = document
            .root()
            .elements_named("titleInfo")
            .map(|title| title.attr("altRepGroup").unwrap_or_default())
            .collect();
        prop_assert_eq!(groups.len(), branch_counts.iter().sum::<usize>());

        let mut offset = 0;
        let mut seen = BTreeSet::new();
        for count in branch_counts {
            let value_groups: BTreeSet<&str> = groups[offset..offset + count].iter().copied().collect();
            prop_assert_eq!(value_groups.len(), 1);
            prop_assert!(seen.insert(groups[offset]));
            offset += count;
        }
    }
}

use std::collections::HashSet;

use proptest::prelude::*;
use tide_core::{IdentityRecord, aggregate};
use tide_fs::NormalizedPath;

fn uuid_from(n: u8) -> String {
    format!("{n:08x}-0000-4000-8000-000000000000")
}

fn records() -> impl Strategy<Value = Vec<IdentityRecord>> {
    prop::collection::vec(
        (0u8..8, "[a-zA-Z]{1,6}", "[A-Z][a-z]{0,6}"),
        0..24,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(key, file, name)| {
                IdentityRecord::threat_vector(
                    uuid_from(key),
                    name,
                    NormalizedPath::new(format!("Objects/Threat Vectors/{file}.yaml")),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_input_key_survives_exactly_once(input in records()) {
        let result = aggregate(input.clone());

        let expected: HashSet<&str> = input.iter().map(|r| r.key.as_str()).collect();
        let keys: Vec<&str> = result.corpus.keys().collect();
        let unique: HashSet<&str> = keys.iter().copied().collect();

        prop_assert_eq!(keys.len(), unique.len());
        prop_assert_eq!(unique, expected);
        prop_assert_eq!(result.corpus.len() + result.collisions.len(), input.len());
    }

    #[test]
    fn result_ignores_input_order(input in records()) {
        let mut reversed = input.clone();
        reversed.reverse();

        prop_assert_eq!(aggregate(input), aggregate(reversed));
    }

    #[test]
    fn corpus_is_sorted_by_case_insensitive_path(input in records()) {
        let result = aggregate(input);
        let paths: Vec<String> = result
            .corpus
            .records()
            .iter()
            .map(|r| r.source_path.as_str().to_lowercase())
            .collect();

        prop_assert!(paths.windows(2).all(|w| w[0] <= w[1]));
    }
}

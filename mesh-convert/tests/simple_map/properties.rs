//! Property tests for the merge pipeline.
//!
//! Ids are drawn from a deliberately tiny space so collisions, both within
//! a file and across the two files, come up in nearly every case.

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::tempdir;

use mesh_convert::simple_map::{build, MapOptions};

use crate::common::{entry_line, gz_fixture};

fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[DC][0-9]{2}", "[A-Za-z ()]{0,12}"), 0..10)
}

fn lines(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(id, name)| entry_line(id, name))
        .collect()
}

proptest! {
    /// The written map equals a plain sequential fold of both inputs:
    /// every id from either file appears exactly once, and the last
    /// occurrence (supplemental after descriptor) decides the name.
    #[test]
    fn merged_map_matches_sequential_fold(desc in entries(), suppl in entries()) {
        let dir = tempdir().unwrap();
        let desc_path = gz_fixture(dir.path(), "desc.ndjson.gz", &lines(&desc));
        let suppl_path = gz_fixture(dir.path(), "suppl.ndjson.gz", &lines(&suppl));
        let output = dir.path().join("mesh.json");

        build(&desc_path, &suppl_path, &output, &MapOptions::default()).unwrap();

        let written: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

        let mut expected = BTreeMap::new();
        for (id, name) in desc.iter().chain(suppl.iter()) {
            expected.insert(id.clone(), name.clone());
        }
        prop_assert_eq!(written, expected);
    }

    /// Rerunning over identical inputs writes byte-identical output.
    #[test]
    fn rerun_writes_identical_bytes(desc in entries(), suppl in entries()) {
        let dir = tempdir().unwrap();
        let desc_path = gz_fixture(dir.path(), "desc.ndjson.gz", &lines(&desc));
        let suppl_path = gz_fixture(dir.path(), "suppl.ndjson.gz", &lines(&suppl));
        let output = dir.path().join("mesh.json");

        build(&desc_path, &suppl_path, &output, &MapOptions::default()).unwrap();
        let first = fs::read(&output).unwrap();
        build(&desc_path, &suppl_path, &output, &MapOptions::default()).unwrap();
        let second = fs::read(&output).unwrap();

        prop_assert_eq!(first, second);
    }
}

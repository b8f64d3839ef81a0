//! Fixture catalogue written to a temporary directory.

use std::path::Path;

use asksg_config::Config;

pub(crate) const SNAPSHOT: &str = r#"[
    {"collectionId": 101, "name": "Bus stops", "description": "Locations of bus stops across the island"},
    {"collectionId": 102, "name": "Hawker centres", "description": "Food centres and their opening hours"},
    {"collectionId": 103, "name": "Rainfall", "description": "Daily rainfall readings by weather station"},
    {"collectionId": 104, "name": "School directory"},
    {"collectionId": 105, "name": "Carpark availability", "description": "Live carpark lots near bus interchanges"}
]"#;

/// Write the snapshot under `dir` and return a config pointing at it.
pub(crate) fn fixture_config(dir: &Path) -> Config {
    let snapshot_path = dir.join("collections.json");
    std::fs::write(&snapshot_path, SNAPSHOT).unwrap();

    let mut config = Config::default();
    config.corpus.snapshot_path = snapshot_path;
    config.index.vector_index_path = dir.join("index").join("collections.index.json");
    config.index.build_batch_size = 2;
    config.embedding.hash_dimension = 16;
    config.search.top_k = 3;
    config
}

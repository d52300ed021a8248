//! Integration tests for season lookups over real directories.
//!
//! Fixtures are written into a temp directory with the seed writer, then
//! read back through the store exactly as a host application would.
use bible_bowl_texts::{seed, FlatVerse, SeasonStore};
use std::fs;
use tempfile::TempDir;

fn seeded_store() -> (TempDir, SeasonStore) {
    let dir = TempDir::new().expect("create tempdir");
    seed::write_default_dataset(dir.path()).expect("write dataset");
    let store = SeasonStore::new(dir.path());
    (dir, store)
}

#[test]
fn season_by_id_returns_range_based_coverage_with_gaps() {
    let (_dir, store) = seeded_store();
    let season = store.season_by_id("16", None).expect("season 16");

    assert_eq!(season.id, "16");
    assert_eq!(season.name, "2025 Fall");
    // Chapter 25 is excluded by the range structure, not enumerated away.
    assert_eq!(season.text.ranges.len(), 2);
    assert_eq!(season.text.ranges[0].start.chapter, 16);
    assert_eq!(season.text.ranges[0].end.chapter, 24);
    assert_eq!(season.text.ranges[1].start.chapter, 26);
    assert_eq!(season.text.ranges[1].end.chapter, 31);
    assert_eq!(season.text.ranges[0].start.book, seed::FIRST_SAMUEL);
}

#[test]
fn missing_season_and_missing_block_both_read_as_none() {
    let (_dir, store) = seeded_store();

    assert!(store.season_by_id("999", None).is_none());
    assert!(store.season_by_name("Nonexistent Season", None).is_none());
    // Existing season, unassigned block number.
    assert!(store.block("16", 9, None).is_none());
    // Missing season; the block number is irrelevant.
    assert!(store.block("999", 1, None).is_none());
    assert!(store.memory_verses("999", None).is_none());
    assert!(store.memory_verses_flattened("999", None).is_none());
}

#[test]
fn block_lookup_pairs_number_with_coverage() {
    let (_dir, store) = seeded_store();
    let block = store.block("16", 1, None).expect("block 1");

    assert_eq!(block.number, 1);
    assert_eq!(block.range.ranges.len(), 1);
    assert_eq!(block.range.ranges[0].start.chapter, 16);
    assert_eq!(block.range.ranges[0].end.chapter, 19);
}

#[test]
fn season_by_name_matches_exactly_and_case_sensitively() {
    let (_dir, store) = seeded_store();

    let season = store.season_by_name("2025 Fall", None).expect("by name");
    assert_eq!(season.id, "16");
    assert!(store.season_by_name("2025 fall", None).is_none());
}

#[test]
fn duplicate_names_resolve_to_the_first_filename() {
    let dir = TempDir::new().expect("create tempdir");
    for id in ["02", "01"] {
        let body = format!(
            r#"{{"id": "{id}", "name": "Dup", "text": {{"ranges": []}}, "blocks": {{}}}}"#
        );
        fs::write(dir.path().join(format!("{id}.json")), body).expect("write fixture");
    }
    let store = SeasonStore::new(dir.path());

    let season = store.season_by_name("Dup", None).expect("by name");
    assert_eq!(season.id, "01");
}

#[test]
fn flattened_memory_verses_keep_walk_order_and_total_count() {
    let (_dir, store) = seeded_store();
    let flat = store.memory_verses_flattened("16", None).expect("flat");
    let tree = store.memory_verses("16", None).expect("tree");

    let total: usize = tree
        .books
        .iter()
        .flat_map(|(_, book)| book.chapters.iter())
        .map(|(_, chapter)| chapter.verses.len())
        .sum();
    assert_eq!(flat.len(), total);
    assert_eq!(
        flat[0],
        FlatVerse {
            book: seed::FIRST_SAMUEL,
            chapter: 16,
            verse: 1
        }
    );
    // The annotated 20:17 entry flattens to its verse number only.
    assert!(flat.contains(&FlatVerse {
        book: seed::FIRST_SAMUEL,
        chapter: 20,
        verse: 17
    }));
}

#[test]
fn all_seasons_reflects_the_directory_on_every_call() {
    let (dir, store) = seeded_store();
    assert_eq!(store.all_seasons(None).len(), 1);

    let extra = dir.path().join("17.json");
    fs::write(
        &extra,
        r#"{"id": "17", "name": "2026 Spring", "text": {"ranges": []}, "blocks": {}}"#,
    )
    .expect("write extra season");
    assert_eq!(store.all_seasons(None).len(), 2);

    fs::remove_file(&extra).expect("remove extra season");
    assert_eq!(store.all_seasons(None).len(), 1);
}

#[test]
fn undecodable_files_are_skipped_not_surfaced() {
    let (dir, store) = seeded_store();
    fs::write(dir.path().join("broken.json"), "{not json").expect("write broken file");

    assert!(store.season_by_id("broken", None).is_none());
    assert_eq!(store.all_seasons(None).len(), 1);
    // Name search walks past the broken file too.
    assert!(store.season_by_name("2025 Fall", None).is_some());
}

#[test]
fn program_directory_decides_which_file_is_read() {
    let (_dir, store) = seeded_store();

    let team = store.season_by_id("16", None).expect("team season");
    let beginner = store
        .season_by_id("16", Some("beginner"))
        .expect("beginner season");

    // Same id, independent files, different coverage shapes.
    assert_eq!(team.text.ranges.len(), 2);
    assert_eq!(beginner.text.ranges.len(), 8);
    assert_eq!(store.all_seasons(Some("beginner")).len(), 1);
}

#[test]
fn unknown_program_labels_behave_as_the_default() {
    let (_dir, store) = seeded_store();

    let by_default = store.season_by_id("16", None).expect("default");
    let by_unknown = store.season_by_id("16", Some("varsity")).expect("unknown");
    assert_eq!(by_default, by_unknown);
}

#[test]
fn missing_program_directory_lists_as_empty() {
    let dir = TempDir::new().expect("create tempdir");
    let store = SeasonStore::new(dir.path().join("never-written"));

    assert!(store.all_seasons(None).is_empty());
    assert!(store.all_seasons(Some("beginner")).is_empty());
    assert!(store.season_by_id("16", None).is_none());
}

#[test]
fn repeated_lookups_are_idempotent() {
    let (_dir, store) = seeded_store();

    assert_eq!(store.season_by_id("16", None), store.season_by_id("16", None));
    assert_eq!(store.block("16", 2, None), store.block("16", 2, None));
    assert_eq!(
        store.memory_verses_flattened("16", None),
        store.memory_verses_flattened("16", None)
    );
}

//! Built-in season dataset and its writer.
//!
//! Season files are generated offline and committed; this module holds the
//! hard-coded dataset and writes it as pretty-printed JSON. Coverage is
//! assembled with a local chapter-range builder so the accessor layer can
//! keep treating `TextCoverage` as opaque.
use crate::coverage::{ScriptureRange, TextCoverage, VerseRef};
use crate::keymap::NumberedMap;
use crate::season::Season;
use crate::verses::{BookVerses, ChapterVerses, MemoryVerse, MemoryVerseTree};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical book id for 1 Samuel.
pub const FIRST_SAMUEL: u32 = 9;

/// Chapter-granular coverage builder.
#[derive(Debug, Default)]
pub struct CoverageBuilder {
    ranges: Vec<ScriptureRange>,
}

impl CoverageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an inclusive chapter range of one book.
    pub fn chapters(mut self, book: u32, start: u32, end: u32) -> Self {
        self.ranges.push(ScriptureRange {
            start: VerseRef {
                book,
                chapter: start,
                verse: None,
            },
            end: VerseRef {
                book,
                chapter: end,
                verse: None,
            },
        });
        self
    }

    pub fn build(self) -> TextCoverage {
        TextCoverage {
            ranges: self.ranges,
        }
    }
}

fn plain(verses: &[u32]) -> ChapterVerses {
    ChapterVerses {
        verses: verses.iter().copied().map(MemoryVerse::Plain).collect(),
    }
}

/// The 2025 Fall team season: 1 Samuel 16-24 and 26-31, chapter 25 excluded.
pub fn season_2025_fall() -> Season {
    let mut blocks = NumberedMap::new();
    blocks.insert(
        1,
        CoverageBuilder::new().chapters(FIRST_SAMUEL, 16, 19).build(),
    );
    blocks.insert(
        2,
        CoverageBuilder::new().chapters(FIRST_SAMUEL, 20, 24).build(),
    );
    blocks.insert(
        3,
        CoverageBuilder::new().chapters(FIRST_SAMUEL, 26, 31).build(),
    );

    let mut chapters = NumberedMap::new();
    chapters.insert(16, plain(&[1, 7, 13, 18]));
    chapters.insert(17, plain(&[26, 36, 45, 46, 47]));
    chapters.insert(
        20,
        ChapterVerses {
            verses: vec![MemoryVerse::Annotated {
                verse: 17,
                lead_in: "Jonathan once again made David swear".to_string(),
                split_after_word: 6,
            }],
        },
    );
    let mut books = NumberedMap::new();
    books.insert(FIRST_SAMUEL, BookVerses { chapters });

    Season {
        id: "16".to_string(),
        name: "2025 Fall".to_string(),
        program: None,
        text: CoverageBuilder::new()
            .chapters(FIRST_SAMUEL, 16, 24)
            .chapters(FIRST_SAMUEL, 26, 31)
            .build(),
        blocks,
        memory_verses: MemoryVerseTree { books },
    }
}

/// The 2025 Fall beginner season: same id, independent coverage listed one
/// chapter at a time.
pub fn season_2025_fall_beginner() -> Season {
    let mut coverage = CoverageBuilder::new();
    for chapter in [16, 17, 18, 19, 20, 24, 26, 31] {
        coverage = coverage.chapters(FIRST_SAMUEL, chapter, chapter);
    }

    let mut blocks = NumberedMap::new();
    blocks.insert(
        1,
        CoverageBuilder::new().chapters(FIRST_SAMUEL, 16, 18).build(),
    );
    blocks.insert(
        2,
        CoverageBuilder::new().chapters(FIRST_SAMUEL, 19, 24).build(),
    );
    blocks.insert(
        3,
        CoverageBuilder::new().chapters(FIRST_SAMUEL, 26, 31).build(),
    );

    let mut chapters = NumberedMap::new();
    chapters.insert(16, plain(&[7]));
    chapters.insert(17, plain(&[45]));
    let mut books = NumberedMap::new();
    books.insert(FIRST_SAMUEL, BookVerses { chapters });

    Season {
        id: "16".to_string(),
        name: "2025 Fall".to_string(),
        program: None,
        text: coverage.build(),
        blocks,
        memory_verses: MemoryVerseTree { books },
    }
}

/// Write one season as `<dir>/<id>.json`, creating the directory.
pub fn write_season(dir: &Path, season: &Season) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create data dir {}", dir.display()))?;
    let path = dir.join(format!("{}.json", season.id));
    let mut json = serde_json::to_string_pretty(season).context("serialize season")?;
    json.push('\n');
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Write the built-in dataset into both program namespaces.
pub fn write_default_dataset(base: &Path) -> Result<Vec<PathBuf>> {
    let team = write_season(base, &season_2025_fall())?;
    let beginner = write_season(&base.join("beginner"), &season_2025_fall_beginner())?;
    Ok(vec![team, beginner])
}

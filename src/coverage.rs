//! Scripture coverage shapes.
//!
//! Ranges are produced offline by the range-builder collaborator; this
//! crate stores and replays them without validating or recomputing them.
use serde::{Deserialize, Serialize};

/// A single point in the canon. `verse: None` means the boundary is
/// chapter-granular ("whole chapter").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRef {
    pub book: u32,
    pub chapter: u32,
    pub verse: Option<u32>,
}

/// An inclusive start/end span of scripture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureRange {
    pub start: VerseRef,
    pub end: VerseRef,
}

/// An ordered list of ranges. Order defines reading order and is preserved
/// end to end; ranges are never sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCoverage {
    pub ranges: Vec<ScriptureRange>,
}

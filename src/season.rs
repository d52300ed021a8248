//! The season record: one program cycle's scripture assignment.
use crate::coverage::TextCoverage;
use crate::keymap::NumberedMap;
use crate::verses::{FlatVerse, MemoryVerseTree};
use serde::{Deserialize, Serialize};

/// One season as persisted in `<id>.json`. Immutable after construction;
/// deserialization is the only constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Filename stem of the season file.
    pub id: String,
    /// Display name, e.g. "2025 Fall".
    pub name: String,
    /// Advisory only. The directory a season was loaded from decides its
    /// program; this field is sometimes present in older files and must
    /// not be trusted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Overall season coverage.
    pub text: TextCoverage,
    /// Study blocks keyed by block number. Keys need not be contiguous.
    pub blocks: NumberedMap<TextCoverage>,
    /// Memory verse tree; absent in older files.
    #[serde(default, skip_serializing_if = "MemoryVerseTree::is_empty")]
    pub memory_verses: MemoryVerseTree,
}

/// A block lookup result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub number: u32,
    pub range: TextCoverage,
}

impl Season {
    /// Look up a block by number. `None` when the number is unassigned;
    /// never an error.
    pub fn block(&self, number: u32) -> Option<Block> {
        self.blocks.get(number).map(|range| Block {
            number,
            range: range.clone(),
        })
    }

    /// Memory verses as a flat `{book, chapter, verse}` list in document
    /// order. Annotation metadata is dropped in this projection.
    pub fn memory_verses_flattened(&self) -> Vec<FlatVerse> {
        self.memory_verses.flattened()
    }
}

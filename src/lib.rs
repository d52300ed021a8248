//! Static reference data and lookup helpers for Bible Bowl seasons.
//!
//! A season assigns scripture coverage for one program cycle, subdivided
//! into study blocks, plus a curated memory verse list. Seasons are
//! generated offline, persisted as one JSON file per (program, id) pair,
//! and read back through [`SeasonStore`]. Lookups never fail loudly:
//! absence is data, so every miss is `None` or an empty list.

pub mod coverage;
pub mod keymap;
pub mod paths;
pub mod season;
pub mod seed;
pub mod store;
pub mod verses;

pub use coverage::{ScriptureRange, TextCoverage, VerseRef};
pub use keymap::NumberedMap;
pub use paths::{DataPaths, Program};
pub use season::{Block, Season};
pub use store::{default_data_dir, SeasonStore};
pub use verses::{BookVerses, ChapterVerses, FlatVerse, MemoryVerse, MemoryVerseTree};

//! Read-only season lookups over the data directory.
//!
//! Every call re-reads disk; there is no cache, so tests and callers see
//! directory changes immediately. The public surface has exactly one
//! failure mode, absence: a missing file, an undecodable file, a missing
//! block, or a missing program directory all surface as `None` or an empty
//! list. Load errors stay observable through `tracing` at debug level.
use crate::paths::{DataPaths, Program};
use crate::season::{Block, Season};
use crate::verses::{FlatVerse, MemoryVerseTree};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Accessor over one base data directory and its program namespaces.
#[derive(Debug, Clone)]
pub struct SeasonStore {
    paths: DataPaths,
}

/// The crate-relative `data/` directory holding the committed dataset.
pub fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

impl Default for SeasonStore {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

impl SeasonStore {
    /// Create a store over the given base data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            paths: DataPaths::new(data_dir.into()),
        }
    }

    /// Return the base data directory.
    pub fn data_dir(&self) -> &Path {
        self.paths.root()
    }

    /// Load a season by id. `None` when the file is missing or does not
    /// decode; parse failures are swallowed, not surfaced.
    pub fn season_by_id(&self, id: &str, program: Option<&str>) -> Option<Season> {
        let path = self.paths.season_path(Program::from_label(program), id);
        if !path.is_file() {
            return None;
        }
        self.load_or_skip(&path)
    }

    /// Load the first season whose `name` matches exactly (case-sensitive,
    /// no normalization). Files are visited in filename order, so duplicate
    /// names resolve to the lexicographically first file.
    pub fn season_by_name(&self, name: &str, program: Option<&str>) -> Option<Season> {
        self.season_files(program)
            .iter()
            .filter_map(|path| self.load_or_skip(path))
            .find(|season| season.name == name)
    }

    /// Load every decodable season file in the program directory, in
    /// filename order. Undecodable files are skipped, not reported.
    pub fn all_seasons(&self, program: Option<&str>) -> Vec<Season> {
        self.season_files(program)
            .iter()
            .filter_map(|path| self.load_or_skip(path))
            .collect()
    }

    /// Load a block of a season. `None` covers both "season missing" and
    /// "block missing"; callers cannot tell the two apart here.
    pub fn block(&self, season_id: &str, number: u32, program: Option<&str>) -> Option<Block> {
        self.season_by_id(season_id, program)?.block(number)
    }

    /// Load a season's memory verse tree. `None` iff the season is missing.
    pub fn memory_verses(&self, season_id: &str, program: Option<&str>) -> Option<MemoryVerseTree> {
        Some(self.season_by_id(season_id, program)?.memory_verses)
    }

    /// Load a season's memory verses flattened to `{book, chapter, verse}`.
    pub fn memory_verses_flattened(
        &self,
        season_id: &str,
        program: Option<&str>,
    ) -> Option<Vec<FlatVerse>> {
        Some(self.season_by_id(season_id, program)?.memory_verses_flattened())
    }

    /// List `*.json` files directly inside the program directory, sorted by
    /// filename. A missing directory is an empty listing, not an error.
    fn season_files(&self, program: Option<&str>) -> Vec<PathBuf> {
        let dir = self.paths.program_dir(Program::from_label(program));
        let Ok(entries) = fs::read_dir(&dir) else {
            tracing::debug!(dir = %dir.display(), "season directory not readable");
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        files
    }

    fn load_or_skip(&self, path: &Path) -> Option<Season> {
        match load_season(path) {
            Ok(season) => Some(season),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "skipping unreadable season file");
                None
            }
        }
    }
}

fn load_season(path: &Path) -> Result<Season> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let season: Season = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse season file {}", path.display()))?;
    Ok(season)
}

//! Typed paths into the season data layout.
//!
//! Centralizing path construction keeps file access consistent across the
//! store and prevents drift when the layout evolves.
use std::path::{Path, PathBuf};

/// Subdirectory holding the beginner program's season files.
const BEGINNER_SUBDIR: &str = "beginner";

/// The two parallel curricula sharing the season id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// Default/team program, stored in the base data directory.
    Team,
    /// Beginner program, stored under `beginner/`.
    Beginner,
}

impl Program {
    /// Resolve an optional program label. Unknown labels behave as the
    /// default program; that is policy, not an error.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some(BEGINNER_SUBDIR) => Program::Beginner,
            _ => Program::Team,
        }
    }

    fn subdir(self) -> Option<&'static str> {
        match self {
            Program::Team => None,
            Program::Beginner => Some(BEGINNER_SUBDIR),
        }
    }
}

/// Convenience wrapper for locating season files under a data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a new path helper rooted at the base data directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Return the base data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the directory holding one program's season files.
    pub fn program_dir(&self, program: Program) -> PathBuf {
        match program.subdir() {
            Some(subdir) => self.root.join(subdir),
            None => self.root.clone(),
        }
    }

    /// Return the `<program dir>/<id>.json` path for a season.
    pub fn season_path(&self, program: Program, id: &str) -> PathBuf {
        self.program_dir(program).join(format!("{id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_labels_fall_back_to_team() {
        assert_eq!(Program::from_label(None), Program::Team);
        assert_eq!(Program::from_label(Some("team")), Program::Team);
        assert_eq!(Program::from_label(Some("varsity")), Program::Team);
        assert_eq!(Program::from_label(Some("beginner")), Program::Beginner);
    }

    #[test]
    fn beginner_paths_use_the_subdirectory() {
        let paths = DataPaths::new(PathBuf::from("/data"));
        assert_eq!(
            paths.season_path(Program::Team, "16"),
            PathBuf::from("/data/16.json")
        );
        assert_eq!(
            paths.season_path(Program::Beginner, "16"),
            PathBuf::from("/data/beginner/16.json")
        );
    }
}

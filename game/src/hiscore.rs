use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighScore {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub best: u32,
}

impl Default for HighScore {
    fn default() -> Self {
        Self {
            version: default_version(),
            best: 0,
        }
    }
}

fn default_version() -> u32 {
    1
}

/// Durable best-score entry, kept as a small JSON file.
///
/// A run's final score is offered via [`record`](HighScoreStore::record) and
/// only ever raises the stored value; a missing or unreadable store reads as
/// zero so the game never fails over it.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("DASH_HIGH_SCORE_PATH") {
            return Self {
                path: PathBuf::from(explicit),
            };
        }

        let base = std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".local");
                    p.push("share");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("dash-runner");
        path.push("high_score.json");
        Self { path }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> u32 {
        let Ok(bytes) = fs::read(&self.path) else {
            return 0;
        };
        serde_json::from_slice::<HighScore>(&bytes)
            .map(|stored| stored.best)
            .unwrap_or(0)
    }

    /// Persists `score` when it beats the stored best. Returns whether the
    /// stored value changed.
    pub fn record(&self, score: u32) -> io::Result<bool> {
        if score <= self.load() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let entry = HighScore {
            version: default_version(),
            best: score,
        };
        let text = serde_json::to_string_pretty(&entry)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)?;
        Ok(true)
    }
}

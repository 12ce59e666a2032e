use std::cmp::Ordering;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::MAX_NAME_LEN;
use crate::error::{Error, Result};
use crate::game::{Difficulty, Mode};

/// One persisted score record. Immutable once appended.
///
/// `score` is the absolute timing difference in seconds — lower ranks
/// higher. `difficulty` is recorded by the terminal frontend and absent for
/// web rounds, which play against a fixed global target instead of a tier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    pub mode: Mode,
    pub date: String,
}

/// Boundary check shared by entry construction and the web register
/// endpoint: 1 to 20 characters after trimming.
pub fn validate_player_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput("player name is empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(Error::InvalidInput(format!(
            "player name exceeds {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(name)
}

impl ScoreEntry {
    /// Validate and build an entry, stamping the current local time.
    ///
    /// The player name must be 1 to 20 characters after trimming; the score
    /// must be a finite non-negative number. Scores are kept at 3-decimal
    /// precision, matching the persisted format.
    pub fn new(
        player: &str,
        score: f64,
        difficulty: Option<Difficulty>,
        mode: Mode,
    ) -> Result<ScoreEntry> {
        let player = validate_player_name(player)?;
        if !score.is_finite() || score < 0.0 {
            return Err(Error::InvalidInput(format!(
                "score must be a non-negative number, got {}",
                score
            )));
        }
        Ok(ScoreEntry {
            player: player.to_string(),
            score: (score * 1000.0).round() / 1000.0,
            difficulty,
            mode,
            date: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        })
    }
}

/// Append-only JSON-lines leaderboard.
///
/// Each entry is one line; a torn or corrupt line spoils only itself. The
/// file is opened per operation — no in-memory cache goes stale across
/// processes — and appends serialize through an in-process lock so
/// concurrent writers land whole lines.
pub struct Leaderboard {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl Leaderboard {
    pub fn open(path: impl AsRef<Path>) -> Leaderboard {
        Leaderboard {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Durably add one entry. Never touches existing records.
    ///
    /// Write failures propagate — a round whose entry cannot be written is
    /// not durably recorded and the frontend reports that.
    pub fn append(&self, entry: &ScoreEntry) -> Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// All readable entries, ascending by score.
    ///
    /// A missing or unreadable file is an empty leaderboard. Malformed
    /// individual lines are skipped and counted, never failing the read.
    pub fn list(&self) -> Vec<ScoreEntry> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(_) => return Vec::new(),
        };

        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ScoreEntry>(&line) {
                Ok(entry) => entries.push(entry),
                Err(_) => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!(
                skipped,
                path = %self.path.display(),
                "skipped malformed leaderboard records"
            );
        }

        entries.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        entries
    }

    /// Best `n` entries
    pub fn top(&self, n: usize) -> Vec<ScoreEntry> {
        let mut entries = self.list();
        entries.truncate(n);
        entries
    }
}

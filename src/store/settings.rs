use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::game::{Difficulty, Mode};

/// Per-player preferences for the terminal game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub mode: Mode,
    pub difficulty: Difficulty,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings {
            mode: Mode::Hidden,
            difficulty: Difficulty::Medium,
        }
    }
}

fn default_target_time() -> f64 {
    5.0
}

/// Single process-wide record used by the web game.
///
/// Missing fields fall back individually, so a record written by an older
/// build still loads.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default = "default_target_time")]
    pub target_time: f64,
    #[serde(default)]
    pub mode: Mode,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            target_time: default_target_time(),
            mode: Mode::Hidden,
        }
    }
}

/// File-backed settings: a keyed per-player map and one global record.
///
/// Files are read and rewritten per operation, so concurrent processes see
/// fresh state. Updates go through an in-process lock and land via a temp
/// file rename, keeping partially written files out of the live paths.
pub struct SettingsStore {
    players_path: PathBuf,
    global_path: PathBuf,
    lock: Mutex<()>,
}

impl SettingsStore {
    pub fn open(players_path: impl AsRef<Path>, global_path: impl AsRef<Path>) -> SettingsStore {
        SettingsStore {
            players_path: players_path.as_ref().to_path_buf(),
            global_path: global_path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn load_player(&self, player: &str) -> Option<PlayerSettings> {
        self.read_player_map().remove(player)
    }

    /// Merge one player's settings into the keyed map without disturbing
    /// other players' entries.
    pub fn save_player(&self, player: &str, settings: PlayerSettings) -> Result<()> {
        let _guard = self.lock.lock();
        let mut all = self.read_player_map();
        all.insert(player.to_string(), settings);
        let json = serde_json::to_string_pretty(&all)?;
        write_atomically(&self.players_path, &json)
    }

    /// Global record, with defaults when the store is absent or corrupt
    pub fn load_global(&self) -> GlobalSettings {
        let text = match fs::read_to_string(&self.global_path) {
            Ok(text) => text,
            Err(_) => return GlobalSettings::default(),
        };
        match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(_) => {
                warn!(
                    path = %self.global_path.display(),
                    "global settings unreadable, using defaults"
                );
                GlobalSettings::default()
            }
        }
    }

    /// Overwrite the global record.
    ///
    /// The target time must be a finite positive number; rejected input
    /// leaves the stored record in effect. Mode validity is guaranteed by
    /// the type — surface input reaches here through `Mode::from_token`.
    pub fn save_global(&self, target_time: f64, mode: Mode) -> Result<()> {
        if !target_time.is_finite() || target_time <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "target time must be positive, got {}",
                target_time
            )));
        }
        let settings = GlobalSettings { target_time, mode };
        let json = serde_json::to_string_pretty(&settings)?;
        let _guard = self.lock.lock();
        write_atomically(&self.global_path, &json)
    }

    fn read_player_map(&self) -> HashMap<String, PlayerSettings> {
        let text = match fs::read_to_string(&self.players_path) {
            Ok(text) => text,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&text) {
            Ok(map) => map,
            Err(_) => {
                warn!(
                    path = %self.players_path.display(),
                    "player settings unreadable, starting from empty map"
                );
                HashMap::new()
            }
        }
    }
}

/// Write via a sibling temp file and rename over the destination
fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub mod leaderboard;
pub mod settings;

pub use leaderboard::{validate_player_name, Leaderboard, ScoreEntry};
pub use settings::{GlobalSettings, PlayerSettings, SettingsStore};

// Persisted store locations, relative to the working directory
pub const LEADERBOARD_FILE: &str = "leaderboard.jsonl";
pub const SETTINGS_FILE: &str = "settings.json";
pub const GLOBAL_SETTINGS_FILE: &str = "global_settings.json";

// Leaderboard view settings
pub const LEADERBOARD_TOP_N: usize = 10; // Entries shown in the ranked view
pub const NAME_DISPLAY_WIDTH: usize = 15; // Player names truncated beyond this

// Player name length bound (after trimming)
pub const MAX_NAME_LEN: usize = 20;

// Terminal event loop cadence (in milliseconds)
pub const TICK_MS: u64 = 16;

// Web server bind address
pub const WEB_BIND_ADDR: &str = "127.0.0.1:5717";

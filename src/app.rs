use crate::constants::MAX_NAME_LEN;
use crate::game::{generate_target, RoundResult, RoundSession};
use crate::store::{Leaderboard, PlayerSettings, ScoreEntry, SettingsStore};

/// Which screen the terminal frontend is on
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Register,
    Menu,
    Settings,
    Leaderboard,
    Armed,   // target drawn, waiting for the start key
    Running, // timer live, waiting for the stop key
    Results,
}

/// Terminal application state: current screen, the registered player and
/// their preferences, the in-flight round, and the persistent stores.
pub struct App {
    pub screen: Screen,
    pub player: String,
    pub name_input: String,
    pub settings: PlayerSettings,
    pub round: Option<RoundSession>,
    pub armed_target: Option<f64>,
    pub last_result: Option<RoundResult>,
    pub save_error: Option<String>,
    pub status: Option<String>,
    pub leaderboard: Leaderboard,
    pub settings_store: SettingsStore,
    pub should_quit: bool,
}

impl App {
    pub fn new(leaderboard: Leaderboard, settings_store: SettingsStore) -> App {
        App {
            screen: Screen::Register,
            player: String::new(),
            name_input: String::new(),
            settings: PlayerSettings::default(),
            round: None,
            armed_target: None,
            last_result: None,
            save_error: None,
            status: None,
            leaderboard,
            settings_store,
            should_quit: false,
        }
    }

    /// Accept the typed name, load that player's saved preferences, and
    /// move to the menu. Invalid names re-prompt.
    pub fn submit_name(&mut self) {
        let name = self.name_input.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            self.status = Some(format!(
                "Please enter a name of 1 to {} characters.",
                MAX_NAME_LEN
            ));
            return;
        }
        self.player = name.to_string();
        self.name_input.clear();
        self.settings = self
            .settings_store
            .load_player(&self.player)
            .unwrap_or_default();
        self.status = None;
        self.screen = Screen::Menu;
    }

    /// Drop back to the registration prompt to switch players
    pub fn change_player(&mut self) {
        self.player.clear();
        self.name_input.clear();
        self.status = None;
        self.screen = Screen::Register;
    }

    /// Draw a fresh target for the player's difficulty and arm the round
    pub fn arm_round(&mut self) {
        self.armed_target = Some(generate_target(self.settings.difficulty.range()));
        self.last_result = None;
        self.save_error = None;
        self.screen = Screen::Armed;
    }

    /// Start the timer against the armed target
    pub fn start_timer(&mut self) {
        if let Some(target) = self.armed_target.take() {
            self.round = Some(RoundSession::begin(target));
            self.screen = Screen::Running;
        }
    }

    /// Stop the timer, score the round, and record the result.
    ///
    /// A clock anomaly discards the round; a leaderboard write failure is
    /// kept for the results screen — the result still shows, with a warning
    /// that it was not durably recorded.
    pub fn stop_timer(&mut self) {
        let Some(session) = self.round.take() else {
            return;
        };
        match session.finish() {
            Ok(result) => {
                self.last_result = Some(result);
                match ScoreEntry::new(
                    &self.player,
                    result.difference,
                    Some(self.settings.difficulty),
                    self.settings.mode,
                ) {
                    Ok(entry) => {
                        if let Err(err) = self.leaderboard.append(&entry) {
                            self.save_error = Some(format!("Score not saved: {}", err));
                        }
                    }
                    Err(err) => {
                        self.save_error = Some(format!("Score not saved: {}", err));
                    }
                }
                self.screen = Screen::Results;
            }
            Err(err) => {
                self.status = Some(format!("Round discarded: {}", err));
                self.screen = Screen::Menu;
            }
        }
    }

    /// Abandon an armed or running round without recording anything
    pub fn abandon_round(&mut self) {
        self.round = None;
        self.armed_target = None;
        self.screen = Screen::Menu;
    }

    pub fn toggle_mode(&mut self) {
        self.settings.mode = self.settings.mode.toggle();
        self.persist_settings();
    }

    pub fn cycle_difficulty(&mut self) {
        self.settings.difficulty = self.settings.difficulty.next();
        self.persist_settings();
    }

    fn persist_settings(&mut self) {
        if let Err(err) = self.settings_store.save_player(&self.player, self.settings) {
            self.status = Some(format!("Settings not saved: {}", err));
        } else {
            self.status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Difficulty, Mode};
    use tempfile::tempdir;

    fn test_app(dir: &std::path::Path) -> App {
        App::new(
            Leaderboard::open(dir.join("leaderboard.jsonl")),
            SettingsStore::open(dir.join("settings.json"), dir.join("global.json")),
        )
    }

    #[test]
    fn registration_rejects_blank_and_oversized_names() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.name_input = "   ".to_string();
        app.submit_name();
        assert_eq!(app.screen, Screen::Register);
        assert!(app.status.is_some());

        app.name_input = "y".repeat(MAX_NAME_LEN + 1);
        app.submit_name();
        assert_eq!(app.screen, Screen::Register);

        app.name_input = "ada".to_string();
        app.submit_name();
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.player, "ada");
        assert!(app.status.is_none());
    }

    #[test]
    fn registration_restores_saved_preferences() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        let saved = PlayerSettings {
            mode: Mode::Visible,
            difficulty: Difficulty::Hard,
        };
        app.settings_store.save_player("ada", saved).unwrap();

        app.name_input = "ada".to_string();
        app.submit_name();
        assert_eq!(app.settings, saved);
    }

    #[test]
    fn a_full_round_lands_on_the_leaderboard() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.name_input = "ada".to_string();
        app.submit_name();

        app.arm_round();
        assert_eq!(app.screen, Screen::Armed);
        let target = app.armed_target.unwrap();
        let range = app.settings.difficulty.range();
        assert!(target >= range.min && target <= range.max);

        app.start_timer();
        assert_eq!(app.screen, Screen::Running);
        app.stop_timer();
        assert_eq!(app.screen, Screen::Results);
        assert!(app.last_result.is_some());
        assert!(app.save_error.is_none());

        let entries = app.leaderboard.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].player, "ada");
        assert_eq!(entries[0].difficulty, Some(Difficulty::Medium));
    }

    #[test]
    fn abandoning_a_round_records_nothing() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.name_input = "ada".to_string();
        app.submit_name();

        app.arm_round();
        app.start_timer();
        app.abandon_round();
        assert_eq!(app.screen, Screen::Menu);
        assert!(app.leaderboard.list().is_empty());
    }

    #[test]
    fn settings_changes_persist_per_player() {
        let dir = tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.name_input = "ada".to_string();
        app.submit_name();

        app.toggle_mode();
        app.cycle_difficulty();
        assert_eq!(app.settings.mode, Mode::Visible);
        assert_eq!(app.settings.difficulty, Difficulty::Hard);

        let reloaded = app.settings_store.load_player("ada").unwrap();
        assert_eq!(reloaded, app.settings);
    }
}

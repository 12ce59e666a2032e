use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io::stdout, time::Duration};

use splitsec::app::App;
use splitsec::constants::{GLOBAL_SETTINGS_FILE, LEADERBOARD_FILE, SETTINGS_FILE, TICK_MS};
use splitsec::input::handle_input;
use splitsec::store::{Leaderboard, SettingsStore};
use splitsec::ui::ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let leaderboard = Leaderboard::open(LEADERBOARD_FILE);
    let settings_store = SettingsStore::open(SETTINGS_FILE, GLOBAL_SETTINGS_FILE);
    let mut app = App::new(leaderboard, settings_store);

    // Event loop: redraw each tick so the running timer stays live
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(TICK_MS))? {
            if let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event::read()?
            {
                handle_input(&mut app, code, kind, modifiers);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

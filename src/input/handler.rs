use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

use crate::app::{App, Screen};

/// Route a key event to the current screen.
///
/// Quit keys are handled per screen rather than globally so that names
/// containing 'q' can be typed on the registration prompt.
pub fn handle_input(app: &mut App, code: KeyCode, kind: KeyEventKind, modifiers: KeyModifiers) {
    if kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C always exits
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        Screen::Register => handle_register(app, code),
        Screen::Menu => handle_menu(app, code),
        Screen::Settings => handle_settings(app, code),
        Screen::Leaderboard | Screen::Results => handle_return(app, code),
        Screen::Armed => handle_armed(app, code),
        Screen::Running => handle_running(app, code),
    }
}

fn handle_register(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            app.name_input.push(c);
        }
        KeyCode::Backspace => {
            app.name_input.pop();
        }
        KeyCode::Enter => {
            app.submit_name();
        }
        KeyCode::Esc => {
            // Esc on the very first screen is the only other way out
            app.should_quit = true;
        }
        _ => {}
    }
}

fn handle_menu(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('1') => app.arm_round(),
        KeyCode::Char('2') => app.screen = Screen::Settings,
        KeyCode::Char('3') => app.screen = Screen::Leaderboard,
        KeyCode::Char('4') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        _ => {}
    }
}

fn handle_settings(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('1') => app.toggle_mode(),
        KeyCode::Char('2') => app.cycle_difficulty(),
        KeyCode::Char('3') => app.change_player(),
        KeyCode::Char('4') | KeyCode::Esc => app.screen = Screen::Menu,
        _ => {}
    }
}

fn handle_return(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.screen = Screen::Menu,
        _ => {}
    }
}

fn handle_armed(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => app.start_timer(),
        KeyCode::Esc => app.abandon_round(),
        _ => {}
    }
}

fn handle_running(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => app.stop_timer(),
        KeyCode::Esc => app.abandon_round(),
        _ => {}
    }
}

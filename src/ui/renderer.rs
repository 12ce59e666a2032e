use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::constants::{LEADERBOARD_TOP_N, NAME_DISPLAY_WIDTH};
use crate::game::{Mode, Tier};

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Min(1),    // Screen body
        ])
        .split(f.size());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Register => render_register(f, app, chunks[1]),
        Screen::Menu => render_menu(f, app, chunks[1]),
        Screen::Settings => render_settings(f, app, chunks[1]),
        Screen::Leaderboard => render_leaderboard(f, app, chunks[1]),
        Screen::Armed => render_armed(f, app, chunks[1]),
        Screen::Running => render_running(f, app, chunks[1]),
        Screen::Results => render_results(f, app, chunks[1]),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let player = if app.player.is_empty() {
        "Guest"
    } else {
        app.player.as_str()
    };
    let header_text = vec![
        Line::from(vec![Span::styled(
            "SPLITSEC",
            Style::default().fg(Color::Magenta),
        )]),
        Line::from(vec![Span::raw(format!("Player: {}", player))]),
        Line::from(vec![Span::raw(format!(
            "Mode: {} | Difficulty: {}",
            app.settings.mode.label(),
            app.settings.difficulty.label()
        ))]),
    ];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_register(f: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(60, 40, area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Enter your name:")]),
        Line::from(vec![Span::styled(
            format!("{}_", app.name_input),
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("ENTER to confirm, ESC to quit")]),
    ];
    if let Some(status) = &app.status {
        lines.push(Line::from(vec![Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )]));
    }

    let register = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Registration"))
        .alignment(Alignment::Center);
    f.render_widget(register, popup_area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(50, 50, area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("1. Play Game")]),
        Line::from(vec![Span::raw("2. Settings")]),
        Line::from(vec![Span::raw("3. View Leaderboard")]),
        Line::from(vec![Span::raw("4. Exit")]),
    ];
    if let Some(status) = &app.status {
        lines.push(Line::from(vec![Span::raw("")]));
        lines.push(Line::from(vec![Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )]));
    }

    let menu = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Main Menu"))
        .alignment(Alignment::Center);
    f.render_widget(menu, popup_area);
}

fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(60, 50, area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!(
            "1. Toggle Target Visibility (Current: {})",
            app.settings.mode.label()
        ))]),
        Line::from(vec![Span::raw(format!(
            "2. Change Difficulty (Current: {})",
            app.settings.difficulty.label()
        ))]),
        Line::from(vec![Span::raw("3. Change Player")]),
        Line::from(vec![Span::raw("4. Return to Main Menu")]),
    ];
    if let Some(status) = &app.status {
        lines.push(Line::from(vec![Span::raw("")]));
        lines.push(Line::from(vec![Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )]));
    }

    let settings = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Settings"))
        .alignment(Alignment::Center);
    f.render_widget(settings, popup_area);
}

fn render_leaderboard(f: &mut Frame, app: &App, area: Rect) {
    let entries = app.leaderboard.top(LEADERBOARD_TOP_N);

    let mut lines = vec![Line::from(vec![Span::styled(
        format!(
            "{:<4} | {:<15} | {:<7} | {:<10} | {:<7} | Date",
            "Rank", "Player", "Score", "Difficulty", "Mode"
        ),
        Style::default().fg(Color::Cyan),
    )])];

    if entries.is_empty() {
        lines.push(Line::from(vec![Span::raw("")]));
        lines.push(Line::from(vec![Span::raw(
            "No records yet! Play some games to appear here.",
        )]));
    } else {
        for (rank, entry) in entries.iter().enumerate() {
            let difficulty = entry
                .difficulty
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            lines.push(Line::from(vec![Span::raw(format!(
                "{:<4} | {:<15} | {:<7.3} | {:<10} | {:<7} | {}",
                rank + 1,
                truncate_name(&entry.player),
                entry.score,
                difficulty,
                entry.mode,
                entry.date
            ))]));
        }
    }
    lines.push(Line::from(vec![Span::raw("")]));
    lines.push(Line::from(vec![Span::raw("ENTER to return")]));

    let board = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Leaderboard"))
        .alignment(Alignment::Left);
    f.render_widget(board, area);
}

fn render_armed(f: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(60, 40, area);
    f.render_widget(Clear, popup_area);

    let target_line = match (app.settings.mode, app.armed_target) {
        (Mode::Visible, Some(target)) => format!("TARGET TIME: {:.3} seconds", target),
        _ => {
            let range = app.settings.difficulty.range();
            format!("TARGET TIME: Hidden ({}-{} seconds)", range.min, range.max)
        }
    };

    let lines = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            target_line,
            Style::default().fg(Color::Yellow),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press ENTER or SPACE to start the timer")]),
        Line::from(vec![Span::raw("ESC to return to the menu")]),
    ];

    let armed = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Get Ready"))
        .alignment(Alignment::Center);
    f.render_widget(armed, popup_area);
}

fn render_running(f: &mut Frame, app: &App, area: Rect) {
    let Some(round) = &app.round else {
        return;
    };
    let elapsed = round.elapsed();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Gauge (visible mode only)
            Constraint::Min(1),    // Elapsed readout
        ])
        .split(centered_rect(70, 60, area));

    if app.settings.mode == Mode::Visible {
        let progress = (elapsed / round.target()).clamp(0.0, 1.0);
        let color = if progress < 0.3 {
            Color::Green
        } else if progress < 0.7 {
            Color::Yellow
        } else {
            Color::Red
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(color))
            .ratio(progress)
            .label(format!("Target: {:.3}s", round.target()));
        f.render_widget(gauge, chunks[0]);
    }

    let lines = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            format!("Elapsed: {:.3}s", elapsed),
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("TIMER RUNNING... ENTER or SPACE to STOP!")]),
    ];
    let running = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Running"))
        .alignment(Alignment::Center);
    f.render_widget(running, chunks[1]);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let Some(result) = &app.last_result else {
        return;
    };
    let popup_area = centered_rect(70, 60, area);
    f.render_widget(Clear, popup_area);

    let (feedback, color) = tier_feedback(result.tier);
    let mut lines = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!(
            "Target time was: {:.3} seconds",
            result.target
        ))]),
        Line::from(vec![Span::raw(format!(
            "You stopped at: {:.3} seconds",
            result.elapsed
        ))]),
        Line::from(vec![Span::raw(format!(
            "Difference: {:.3} seconds",
            result.difference
        ))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(feedback, Style::default().fg(color))]),
    ];
    if let Some(save_error) = &app.save_error {
        lines.push(Line::from(vec![Span::raw("")]));
        lines.push(Line::from(vec![Span::styled(
            save_error.clone(),
            Style::default().fg(Color::Red),
        )]));
    }
    lines.push(Line::from(vec![Span::raw("")]));
    lines.push(Line::from(vec![Span::raw("ENTER to return to the menu")]));

    let results = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .alignment(Alignment::Center);
    f.render_widget(results, popup_area);
}

/// Terminal rendering of a feedback tier
fn tier_feedback(tier: Tier) -> (&'static str, Color) {
    match tier {
        Tier::Perfect => ("PERFECT HIT! You're a timing master!", Color::Green),
        Tier::Excellent => ("EXCELLENT! Incredible precision!", Color::Green),
        Tier::Great => ("GREAT JOB! Very close!", Color::Yellow),
        Tier::Good => ("Good effort! Within 0.3 seconds", Color::Yellow),
        Tier::Okay => ("Not bad! Practice makes perfect", Color::Yellow),
        Tier::Missed => ("Missed! Keep trying!", Color::Red),
    }
}

/// Names wider than the rank column get cut with a trailing marker
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_DISPLAY_WIDTH {
        let cut: String = name.chars().take(NAME_DISPLAY_WIDTH).collect();
        format!("{}..", cut)
    } else {
        name.to_string()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

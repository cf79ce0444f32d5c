//! Drawing: the dice board, the win panel, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use tz_engine::DIE_COUNT;

use crate::app::TuiApp;

/// Dice per row on the board.
const COLUMNS: usize = 5;
/// Width of one die cell including its border.
const DIE_WIDTH: u16 = 7;
/// Height of one die cell including its border.
const DIE_HEIGHT: u16 = 3;
/// Horizontal gap between dice.
const GAP: u16 = 2;

/// Draw the whole screen and record die positions for mouse input.
pub fn draw(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    if app.state().won() {
        app.die_areas.clear();
        draw_win_panel(frame, app, chunks[0]);
    } else {
        draw_board(frame, app, chunks[0]);
    }

    let status = Paragraph::new(app.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[1]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

/// Lay out `DIE_COUNT` die cells centered in `area`, row-major.
pub fn dice_layout(area: Rect) -> Vec<Rect> {
    let rows = DIE_COUNT.div_ceil(COLUMNS) as u16;
    let width = COLUMNS as u16 * DIE_WIDTH + (COLUMNS as u16 - 1) * GAP;
    let height = rows * DIE_HEIGHT + rows.saturating_sub(1);
    let x0 = area.x + area.width.saturating_sub(width) / 2;
    let y0 = area.y + area.height.saturating_sub(height) / 2;

    (0..DIE_COUNT)
        .map(|i| {
            let col = (i % COLUMNS) as u16;
            let row = (i / COLUMNS) as u16;
            Rect::new(
                x0 + col * (DIE_WIDTH + GAP),
                y0 + row * (DIE_HEIGHT + 1),
                DIE_WIDTH,
                DIE_HEIGHT,
            )
            .intersection(area)
        })
        .collect()
}

fn draw_board(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let block = Block::default()
        .title(" Roll The Dice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Instructions
            Constraint::Min(8),    // Dice
            Constraint::Length(2), // Counters
        ])
        .split(inner);

    let intro = Paragraph::new(
        "Roll until all dice are the same. Freeze a die to keep its value between rolls.",
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(intro, chunks[0]);

    app.die_areas = dice_layout(chunks[1]);
    let state = app.game.state();
    for (die, cell) in state.dice().iter().zip(&app.die_areas) {
        let mut border = Style::default().fg(Color::White);
        if die.index == app.cursor {
            border = Style::default().fg(Color::Yellow).bold();
        }
        let face = if die.frozen {
            Style::default().fg(Color::Black).bg(Color::LightGreen).bold()
        } else {
            Style::default().fg(Color::White).bold()
        };
        let widget = Paragraph::new(die.value.to_string())
            .alignment(Alignment::Center)
            .style(face)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border),
            );
        frame.render_widget(widget, *cell);
    }

    let counters = Line::from(vec![
        Span::styled("Rolls: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.roll_count().to_string(),
            Style::default().fg(Color::Yellow).bold(),
        ),
        Span::raw("   "),
        Span::styled("Time: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}s", state.elapsed_seconds()),
            Style::default().fg(Color::Yellow).bold(),
        ),
        Span::raw("   "),
        Span::styled("Frozen: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}/{DIE_COUNT}", state.frozen_count()),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(counters).alignment(Alignment::Center),
        chunks[2],
    );
}

fn draw_win_panel(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let state = app.state();
    let taken = state
        .final_time_seconds()
        .unwrap_or(state.elapsed_seconds());

    let lines = vec![
        Line::from(""),
        Line::from("Congratulations!").style(Style::default().fg(Color::Green).bold()),
        Line::from(""),
        Line::from(format!("Rolled: {}", state.roll_count())),
        Line::from(format!("Time Taken: {taken} Seconds")),
        Line::from(""),
        Line::from(format!("Your Score: {}", app.game.score()))
            .style(Style::default().fg(Color::Yellow).bold()),
        Line::from(""),
        Line::from("Press n for a new game").style(Style::default().fg(Color::DarkGray)),
    ];

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" You Won ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    let popup = centered_rect(50, 60, area);
    frame.render_widget(panel, popup);
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

/// Draw the key help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  0-9         Freeze / release die"),
        Line::from("  Arrows/hjkl Move cursor"),
        Line::from("  Enter       Freeze / release die under cursor"),
        Line::from("  Click       Freeze / release die"),
        Line::from("  Space / r   Roll unfrozen dice"),
        Line::from("  n           New game"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

//! Application state: the engine, its round timer, and UI-only state.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use tz_engine::{DIE_COUNT, DiceGame, EngineConfig, GameState, RoundTimer};

/// Main application state for the TUI.
pub struct TuiApp {
    /// The game engine.
    pub game: DiceGame,
    /// Clock driving the engine's tick while a round is in progress.
    pub timer: RoundTimer,
    /// Die under the keyboard cursor.
    pub cursor: usize,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Screen cells of each die from the last draw, for mouse hit-testing.
    pub die_areas: Vec<Rect>,
}

impl TuiApp {
    /// Create the app and start the first round's clock.
    pub fn new(config: &EngineConfig) -> Self {
        let mut timer = RoundTimer::new(config.tick_period);
        timer.arm(Instant::now());
        Self {
            game: DiceGame::new(config),
            timer,
            cursor: 0,
            show_help: false,
            should_quit: false,
            die_areas: Vec::new(),
        }
    }

    /// The current round snapshot.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Esc => self.show_help = false,
            KeyCode::Char('n') => self.new_game(now),
            _ if self.state().won() => {}
            KeyCode::Char(' ') | KeyCode::Char('r') => self.roll(),
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.cursor + 1 < DIE_COUNT {
                    self.cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(5);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 5).min(DIE_COUNT - 1);
            }
            KeyCode::Enter => self.toggle(self.cursor),
            KeyCode::Char(c) => {
                if let Some(d) = c.to_digit(10) {
                    self.toggle(d as usize);
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event: a left click on a die toggles it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.state().won() {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);
        if let Some(index) = self.die_areas.iter().position(|r| r.contains(pos)) {
            self.cursor = index;
            self.toggle(index);
        }
    }

    /// Advance the clock if its deadline has passed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.timer.drive(&mut self.game, now)
    }

    fn roll(&mut self) {
        self.game.roll_all();
    }

    fn toggle(&mut self, index: usize) {
        if let Err(e) = self.game.toggle_freeze(index) {
            log::warn!("{e}");
            return;
        }
        if self.state().won() {
            self.timer.disarm();
        }
    }

    fn new_game(&mut self, now: Instant) {
        self.game.new_game();
        self.cursor = 0;
        self.timer.arm(now);
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &'static str {
        if self.state().won() {
            "n:new game  ?:help  q:quit"
        } else {
            "0-9/Enter/click:freeze  \u{2190}\u{2191}\u{2192}\u{2193}:move  Space/r:roll  n:new game  ?:help  q:quit"
        }
    }
}

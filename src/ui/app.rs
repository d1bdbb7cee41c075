//! The interactive keypad: owns the engine and runs the terminal event loop.

use super::keymap::action_for_key;
use super::keypad::{Action, ButtonArea, hit_test};
use super::render::{self, View};
use crate::calculator::{Calculator, Event, Operator, Outcome, copy_to_clipboard};
use crate::config::Config;
use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};

/// Keypad state between frames.
pub struct App {
    calc: Calculator,
    config: Config,
    buttons: Vec<ButtonArea>,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            calc: Calculator::new(),
            config,
            buttons: Vec::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Run a keypad action.
    pub fn perform(&mut self, action: Action) {
        // Status messages only last until the next action
        self.status = None;

        match action {
            Action::Calc(event) => {
                let outcome = self.calc.handle(event);
                let committed_equals = matches!(outcome, Outcome::Committed(_))
                    && event == Event::Operator(Operator::Equals);
                if committed_equals && self.config.clipboard.copy_on_equals {
                    self.copy_display();
                }
            }
            Action::Copy => self.copy_display(),
            Action::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    fn copy_display(&mut self) {
        let text = self.calc.display().to_string();
        match copy_to_clipboard(&text) {
            Ok(()) => self.status = Some(format!("Copied {text}")),
            Err(e) => {
                warn!("clipboard copy failed: {e:#}");
                self.status = Some(format!("Copy failed: {e}"));
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match action_for_key(key) {
            Some(action) => self.perform(action),
            None => debug!(?key, "unbound key"),
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(action) = hit_test(&self.buttons, mouse.column, mouse.row) {
            self.perform(action);
        }
    }

    /// Draw the keypad and remember where the buttons landed.
    pub fn draw(&mut self, frame: &mut Frame) {
        let error_message = self.calc.error_message();
        let view = View {
            display: self.calc.display(),
            error_message: &error_message,
            pending: self.calc.pending_operator().symbol(),
            status: self.status.as_deref(),
            ui: &self.config.ui,
        };
        self.buttons = render::draw(frame, &view);
    }
}

/// Take over the terminal and run the keypad until the user quits.
pub fn run(config: Config) -> Result<()> {
    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;
    let result = execute!(std::io::stdout(), EnableMouseCapture)
        .context("Failed to enable mouse capture")
        .and_then(|()| event_loop(&mut terminal, App::new(config)));

    if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
        warn!("failed to disable mouse capture: {e}");
    }
    ratatui::try_restore().context("Failed to restore terminal")?;
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal
            .draw(|frame| app.draw(frame))
            .context("Failed to draw keypad")?;

        match event::read().context("Failed to read terminal event")? {
            TermEvent::Key(key) => app.on_key(key),
            TermEvent::Mouse(mouse) => app.on_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}

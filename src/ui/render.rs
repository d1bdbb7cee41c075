//! Drawing the keypad.
//!
//! Renders the display at the top, the button grid in the middle and the error
//! line underneath, returning where each button ended up so mouse clicks can
//! be mapped back to actions.

use super::keypad::{Action, ButtonArea, clear_row, number_rows, operator_column};
use super::keymap::KEY_HINTS;
use crate::config::{ErrorColor, UiConfig};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// Everything the renderer needs for one frame.
pub struct View<'a> {
    pub display: &'a str,
    pub error_message: &'a str,
    /// Pending operator symbol, shown next to the display.
    pub pending: &'a str,
    pub status: Option<&'a str>,
    pub ui: &'a UiConfig,
}

const DISPLAY_HEIGHT: u16 = 3;

/// Draw one frame and return the button areas.
pub fn draw(frame: &mut Frame, view: &View) -> Vec<ButtonArea> {
    let outer = Block::bordered().title(Line::from(format!(" {} ", view.ui.title)).bold());
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let hint_height = u16::from(view.ui.show_key_hints || view.status.is_some());
    let [display_area, keypad_area, error_area, hint_area] = Layout::vertical([
        Constraint::Length(DISPLAY_HEIGHT),
        Constraint::Min(4),
        Constraint::Length(1),
        Constraint::Length(hint_height),
    ])
    .areas(inner);

    render_display(frame, display_area, view);
    let buttons = render_keypad(frame, keypad_area);
    render_error(frame, error_area, view);
    render_hints(frame, hint_area, view);

    buttons
}

fn render_display(frame: &mut Frame, area: Rect, view: &View) {
    let pending = Span::styled(
        format!("{} ", view.pending),
        Style::default().fg(Color::DarkGray),
    );
    let value = Span::styled(
        view.display.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    );

    let display = Paragraph::new(Line::from(vec![pending, value]))
        .alignment(Alignment::Right)
        .block(Block::bordered());
    frame.render_widget(display, area);
}

fn render_keypad(frame: &mut Frame, area: Rect) -> Vec<ButtonArea> {
    let [grid_area, bottom_area] =
        Layout::vertical([Constraint::Percentage(80), Constraint::Percentage(20)]).areas(area);
    let [numbers_area, operators_area] =
        Layout::horizontal([Constraint::Ratio(3, 4), Constraint::Ratio(1, 4)]).areas(grid_area);

    let mut buttons = Vec::new();

    let rows = Layout::vertical([Constraint::Ratio(1, 4); 4]).split(numbers_area);
    for (row_area, row) in rows.iter().zip(number_rows()) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(*row_area);
        for (cell, action) in cells.iter().zip(row) {
            buttons.push(render_button(frame, *cell, action));
        }
    }

    let cells = Layout::vertical([Constraint::Ratio(1, 4); 4]).split(operators_area);
    for (cell, action) in cells.iter().zip(operator_column()) {
        buttons.push(render_button(frame, *cell, action));
    }

    let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(bottom_area);
    for (cell, action) in cells.iter().zip(clear_row()) {
        buttons.push(render_button(frame, *cell, action));
    }

    buttons
}

fn render_button(frame: &mut Frame, area: Rect, action: Action) -> ButtonArea {
    let color = if action.is_operator() {
        Color::Cyan
    } else if action.is_control() {
        Color::Yellow
    } else {
        Color::White
    };

    // Center the label vertically when the button is tall enough
    let inner_height = area.height.saturating_sub(2);
    let padding = inner_height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); usize::from(padding)];
    lines.push(Line::from(action.label()));

    let button = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(button, area);

    ButtonArea { area, action }
}

fn render_error(frame: &mut Frame, area: Rect, view: &View) {
    let style = Style::default()
        .fg(error_color(view.ui.error_color))
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(view.error_message.to_string()).style(style), area);
}

fn render_hints(frame: &mut Frame, area: Rect, view: &View) {
    if area.height == 0 {
        return;
    }
    let line = match view.status {
        Some(status) => Line::from(status.to_string()),
        None => Line::from(KEY_HINTS),
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn error_color(color: ErrorColor) -> Color {
    match color {
        ErrorColor::Red => Color::LightRed,
        ErrorColor::Yellow => Color::Yellow,
        ErrorColor::Magenta => Color::Magenta,
        ErrorColor::White => Color::White,
    }
}

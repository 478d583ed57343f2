//! Layout calculation for the search form

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the title block: title, tagline wrapped over two lines, rule
pub const HEADER_HEIGHT: u16 = 4;
/// Height of the input and button row (content + borders)
pub const SEARCH_ROW_HEIGHT: u16 = 3;
/// Width reserved for the search button
pub const BUTTON_WIDTH: u16 = 16;
/// Height of an action button under the results panel
pub const ACTION_HEIGHT: u16 = 3;

/// Areas of the form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    /// Title and tagline
    pub header: Rect,
    /// Query text field
    pub input: Rect,
    /// Search button, right of the input
    pub button: Rect,
    /// Single line for validation and transport errors
    pub error_line: Rect,
    /// Results panel and its action button
    pub results: Rect,
    /// Usage tip and key hints
    pub footer: Rect,
}

/// Splits `area` into the form's regions
pub fn form_areas(area: Rect) -> FormAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_ROW_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let search_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
        .split(rows[1]);

    FormAreas {
        header: rows[0],
        input: search_row[0],
        button: search_row[1],
        error_line: rows[2],
        results: rows[3],
        footer: rows[4],
    }
}

/// Splits the results region into the panel and, if present, the action row
pub fn results_areas(area: Rect, has_action: bool) -> (Rect, Option<Rect>) {
    if !has_action {
        return (area, None);
    }
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(ACTION_HEIGHT)])
        .split(area);
    let action = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(split[1]);
    (split[0], Some(action[0]))
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

const INPUT_TITLE: &str = "Business name or ABN";
const PLACEHOLDER: &str = "Enter your business name to get started";

/// Single-line text field holding the user's query
pub struct InputManager {
    input_area: TextArea<'static>,
}

impl InputManager {
    /// Gets a reference to the input area
    pub fn input_area(&self) -> &TextArea<'static> {
        &self.input_area
    }

    /// Current text exactly as typed
    pub fn text(&self) -> String {
        self.input_area.lines().concat()
    }

    /// Applies a key press to the field and returns whether the text changed.
    ///
    /// Keys that would start a new line are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let newline = matches!(key.code, KeyCode::Enter)
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('m' | 'j')));
        if newline {
            return false;
        }
        self.input_area.input(*key)
    }

    /// Clears the input area
    pub fn clear(&mut self) {
        self.input_area = new_text_area();
    }

    /// Colours the border and text. `show_cursor` is false when the field
    /// is unfocused or disabled.
    pub fn apply_style(&mut self, border: Color, text: Color, show_cursor: bool) {
        self.input_area.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(INPUT_TITLE)
                .border_style(Style::default().fg(border)),
        );
        self.input_area.set_style(Style::default().fg(text));
        let cursor = if show_cursor {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.input_area.set_cursor_style(cursor);
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self {
            input_area: new_text_area(),
        }
    }
}

fn new_text_area() -> TextArea<'static> {
    let mut input_area = TextArea::default();
    input_area.set_block(Block::default().borders(Borders::ALL).title(INPUT_TITLE));
    input_area.set_cursor_line_style(Style::default());
    input_area.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    input_area.set_placeholder_text(PLACEHOLDER);
    input_area
}

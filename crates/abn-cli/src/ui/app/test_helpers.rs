//! Test accessors for `TuiApp`

use ratatui::backend::Backend;

use super::tui_app::TuiApp;
use crate::ui::state::UiState;

impl<B: Backend> TuiApp<B> {
    /// Backend the form draws to
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Form state and focus
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Current query text
    pub fn input_text(&self) -> String {
        self.input_manager.text()
    }
}

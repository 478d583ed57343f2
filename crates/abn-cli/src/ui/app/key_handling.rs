//! Keyboard input handling and dispatch

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::Backend;
use tracing::{info, warn};

use super::tui_app::TuiApp;
use crate::config::AppConfig;
use crate::ui::state::Focus;

impl<B: Backend> TuiApp<B> {
    /// Handles a single key event and returns true if the app should quit
    pub(super) fn handle_key_event(&mut self, key: &KeyEvent) -> bool {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q' | 'c') if control => return true,
            KeyCode::Char('p') if control => {
                self.cycle_theme();
                return false;
            }
            _ => {}
        }

        // Every control is disabled while a request is in flight.
        if self.state.session.is_loading() {
            return false;
        }

        match key.code {
            KeyCode::Tab => self.state.focus_next(),
            KeyCode::BackTab => self.state.focus_previous(),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Char(' ') if self.state.focus != Focus::Input => self.activate_focused(),
            _ if self.state.focus == Focus::Input => self.edit_input(key),
            _ => {}
        }
        false
    }

    /// Presses the focused control; Enter in the text field submits
    fn activate_focused(&mut self) {
        match self.state.focus {
            Focus::Input | Focus::SearchButton => self.submit(),
            Focus::TryAnother => self.reset_form(),
        }
    }

    fn edit_input(&mut self, key: &KeyEvent) {
        if self.input_manager.handle_key(key) {
            self.state.session.edit();
            self.state.settle_focus();
        }
    }

    /// "Try another name": clears everything and returns focus to the input
    pub(super) fn reset_form(&mut self) {
        self.input_manager.clear();
        self.state.session.reset();
        self.state.focus = Focus::Input;
    }

    /// Cycles to the next theme and saves it when a config file is known
    pub(super) fn cycle_theme(&mut self) {
        let theme = self.renderer.theme().next();
        self.renderer.set_theme(theme);
        info!("Theme changed to {theme:?}");

        let Some(path) = &self.config_path else {
            return;
        };
        let saved = AppConfig::load_or_create(path).and_then(|mut config| {
            config.ui.theme = theme;
            config.save_to_file(path)
        });
        if let Err(err) = saved {
            warn!("Failed to save theme to {}: {err}", path.display());
        }
    }
}

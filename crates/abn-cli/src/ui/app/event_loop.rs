//! Main event loop and event processing logic

use std::io;

use crossterm::event::{Event, KeyEventKind};
use ratatui::backend::Backend;

use super::tui_app::TuiApp;
use crate::ui::renderer::{RenderCtx, border_color};
use crate::ui::state::Focus;

impl<B: Backend> TuiApp<B> {
    /// Run the main event loop until quit
    ///
    /// Input events and search completions are processed as they arrive via
    /// `tokio::select!`, and the form is redrawn after each one.
    ///
    /// # Errors
    /// Returns an error if reading input or rendering fails.
    #[allow(clippy::future_not_send, reason = "Backends are not required to be Send")]
    pub async fn run_event_loop(&mut self) -> io::Result<()> {
        loop {
            tokio::select! {
                event_result = self.event_source.next_event() => {
                    match event_result {
                        Ok(Some(event)) => {
                            if self.handle_input(&event) {
                                break;
                            }
                        }
                        Ok(None) => break,
                        Err(error) => return Err(error),
                    }
                }

                Some(search_event) = self.search_receiver.recv() => {
                    self.handle_search_event(search_event);
                }
            }

            self.render()?;
        }

        Ok(())
    }

    /// Handle an input event and return true if the app should quit
    pub(super) fn handle_input(&mut self, event: &Event) -> bool {
        if let Event::Key(key) = event
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            return self.handle_key_event(key);
        }
        false
    }

    /// Renders the UI to the terminal
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub fn render(&mut self) -> io::Result<()> {
        let theme = self.renderer.theme();
        let loading = self.state.session.is_loading();
        let input_focused = self.state.focus == Focus::Input;
        self.input_manager.apply_style(
            border_color(input_focused, loading, theme),
            if loading { theme.muted() } else { theme.text() },
            input_focused && !loading,
        );

        let renderer = &self.renderer;
        let ctx = RenderCtx {
            state: &self.state,
            input: &self.input_manager,
        };
        self.terminal.draw(|frame| renderer.render(frame, &ctx))?;
        Ok(())
    }
}

//! Application lifecycle operations (constructors, raw mode)

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use abn_core::LookupService;
use crossterm::terminal;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tokio::sync::mpsc;

use super::tui_app::TuiApp;
use crate::ui::event_source::{CrosstermEventSource, InputEventSource};
use crate::ui::input::InputManager;
use crate::ui::renderer::Renderer;
use crate::ui::state::UiState;
use crate::ui::theme::Theme;

impl TuiApp<CrosstermBackend<io::Stdout>> {
    /// Creates a form drawing to stdout and reading the process terminal.
    /// Theme changes are saved to `config_path` when one is given.
    ///
    /// # Errors
    /// Returns an error if terminal initialization or clearing fails.
    pub fn new(
        service: Arc<dyn LookupService>,
        theme: Theme,
        config_path: Option<PathBuf>,
    ) -> io::Result<Self> {
        let mut app = Self::with_backend(
            CrosstermBackend::new(io::stdout()),
            Box::new(CrosstermEventSource::new()),
            service,
            theme,
        )?;
        app.config_path = config_path;
        Ok(app)
    }

    /// Enables raw mode
    ///
    /// # Errors
    /// Returns an error if enabling raw mode fails.
    pub fn enable_raw_mode() -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    /// Disables raw mode
    ///
    /// # Errors
    /// Returns an error if disabling raw mode or clearing the terminal fails.
    pub fn disable_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        self.terminal.clear()
    }
}

impl<B: Backend> TuiApp<B> {
    /// Creates a form over any backend and event source.
    ///
    /// # Errors
    /// Returns an error if terminal initialization or clearing fails.
    pub fn with_backend(
        backend: B,
        event_source: Box<dyn InputEventSource>,
        service: Arc<dyn LookupService>,
        theme: Theme,
    ) -> io::Result<Self> {
        let (search_sender, search_receiver) = mpsc::unbounded_channel();

        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            service,
            search_sender,
            search_receiver,
            state: UiState::default(),
            input_manager: InputManager::default(),
            renderer: Renderer::new(theme),
            event_source,
            config_path: None,
        })
    }
}

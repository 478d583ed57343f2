//! Main TUI application struct

use std::path::PathBuf;
use std::sync::Arc;

use abn_core::LookupService;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc;

use super::search_execution::SearchEvent;
use crate::ui::event_source::InputEventSource;
use crate::ui::input::InputManager;
use crate::ui::renderer::Renderer;
use crate::ui::state::UiState;

/// Main TUI application
pub struct TuiApp<B: Backend> {
    /// Terminal instance used to render the UI
    pub(super) terminal: Terminal<B>,
    /// Service that answers searches
    pub(super) service: Arc<dyn LookupService>,
    /// Sender handed to spawned searches
    pub(super) search_sender: mpsc::UnboundedSender<SearchEvent>,
    /// Completions of spawned searches
    pub(super) search_receiver: mpsc::UnboundedReceiver<SearchEvent>,
    /// Form state and focus
    pub(super) state: UiState,
    /// Query text field
    pub(super) input_manager: InputManager,
    /// Responsible for drawing UI components
    pub(super) renderer: Renderer,
    /// Source of input events (abstracted for testing)
    pub(super) event_source: Box<dyn InputEventSource>,
    /// Config file the theme is saved to when cycled
    pub(super) config_path: Option<PathBuf>,
}

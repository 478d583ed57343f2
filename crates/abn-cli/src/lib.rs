//! Library interface for abn-check
//!
//! Exposes the form, its state container and the configuration layer so the
//! binary and the integration tests share one implementation.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        reason = "Allow for tests"
    )
)]

/// Command-line arguments
pub mod cli;
/// Configuration loading and defaults
pub mod config;
/// Non-interactive single search
pub mod oneshot;
/// Terminal form
pub mod ui;

pub use config::AppConfig;
pub use ui::TuiApp;
pub use ui::event_source::{
    CrosstermEventSource, InputEventSource, ScriptedEventSource, ScriptedInput,
};
pub use ui::state::{Focus, SearchSession, UiState};
pub use ui::view::{ResultView, Tone, plain_text, result_view};

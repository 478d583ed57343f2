//! Terminal rendition of the business-name search form.

/// Input event source abstraction (public so tests can inject events)
pub mod event_source;
/// Query text field
pub mod input;
/// Layout calculation utilities
pub mod layout;
/// Rendering components
pub mod renderer;
/// Form state
pub mod state;
/// Theme definitions
pub mod theme;
/// Display states turned into panels of text
pub mod view;

/// TUI application and main event loop
mod app;

pub use app::{SearchEvent, TuiApp};

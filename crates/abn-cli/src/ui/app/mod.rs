//! TUI application module

mod event_loop;
mod key_handling;
mod lifecycle;
mod search_execution;
mod tui_app;

#[cfg(test)]
mod test_helpers;

pub use search_execution::SearchEvent;
pub use tui_app::TuiApp;

//! A single search without the form, for scripts and quick checks.

use std::process::ExitCode;

use abn_core::{DisplayState, LookupService};

use crate::ui::state::SearchSession;

/// Exit status for a blank query
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit status when the lookup service could not be reached or failed
pub const EXIT_TRANSPORT: u8 = 1;

/// Runs one search through the same state transitions as the form and
/// returns what the form would display.
pub async fn run_search(service: &dyn LookupService, raw_text: &str) -> DisplayState {
    let mut session = SearchSession::default();
    if let Some(query) = session.begin_submit(raw_text) {
        let outcome = service.search(query.raw_text()).await;
        session.complete(outcome);
    }
    session.display()
}

/// Process exit status for a finished search
pub fn exit_code(state: &DisplayState) -> ExitCode {
    match state {
        DisplayState::InvalidInput(_) => ExitCode::from(EXIT_INVALID_INPUT),
        DisplayState::TransportError(_) => ExitCode::from(EXIT_TRANSPORT),
        _ => ExitCode::SUCCESS,
    }
}

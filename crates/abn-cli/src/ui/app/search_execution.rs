//! Running searches off the UI loop

use abn_core::{Query, SearchResult};
use ratatui::backend::Backend;
use std::sync::Arc;
use tracing::{debug, info};

use super::tui_app::TuiApp;

/// Events sent back to the UI loop by background work
#[derive(Debug)]
pub enum SearchEvent {
    /// A spawned search finished
    Completed(abn_core::Result<SearchResult>),
}

impl<B: Backend> TuiApp<B> {
    /// Submits the current input. Blank input records the validation error
    /// without any request.
    pub(super) fn submit(&mut self) {
        let raw_text = self.input_manager.text();
        if let Some(query) = self.state.session.begin_submit(&raw_text) {
            self.spawn_search(query);
        } else {
            debug!("Submission produced no request");
        }
    }

    /// Spawns the request for `query` and reports the outcome on the channel
    fn spawn_search(&self, query: Query) {
        let service = Arc::clone(&self.service);
        let sender = self.search_sender.clone();

        tokio::spawn(async move {
            info!(
                "Running {} search via {} service",
                query.kind().label(),
                service.name()
            );
            let outcome = service.search(query.raw_text()).await;
            if sender.send(SearchEvent::Completed(outcome)).is_err() {
                debug!("Form closed before the search finished");
            }
        });
    }

    /// Applies an event from background work
    pub(super) fn handle_search_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Completed(outcome) => self.state.session.complete(outcome),
        }
        self.state.settle_focus();
    }
}

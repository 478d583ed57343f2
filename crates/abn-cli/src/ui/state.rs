use abn_core::{DisplayState, LookupError, Query, SearchResult};
use tracing::{info, warn};

/// State of one search form.
///
/// At most one of result and error is held at a time, and while a request is
/// in flight neither is.
#[derive(Debug, Default)]
pub struct SearchSession {
    /// Raw text of the most recent submission
    last_search_term: String,
    /// Outcome of the most recent completed search
    result: Option<SearchResult>,
    /// Validation or transport error of the most recent submission
    error: Option<LookupError>,
    /// Whether a request is in flight
    loading: bool,
}

impl SearchSession {
    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The user changed the query text; stale feedback is dropped.
    pub fn edit(&mut self) {
        if self.loading {
            return;
        }
        self.result = None;
        self.error = None;
    }

    /// Starts a submission of `raw_text`.
    ///
    /// Returns the query to send, or `None` when nothing should be sent: a
    /// request is already in flight, or the text is blank (which records the
    /// validation error).
    pub fn begin_submit(&mut self, raw_text: &str) -> Option<Query> {
        if self.loading {
            return None;
        }

        let Some(query) = Query::parse(raw_text) else {
            self.result = None;
            self.error = Some(LookupError::empty_input());
            return None;
        };

        info!("Submitting {} search", query.kind().label());
        self.loading = true;
        self.result = None;
        self.error = None;
        raw_text.clone_into(&mut self.last_search_term);
        Some(query)
    }

    /// Records the outcome of the in-flight request.
    pub fn complete(&mut self, outcome: abn_core::Result<SearchResult>) {
        if !self.loading {
            warn!("Ignoring search completion with no request in flight");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(error) => {
                warn!("Search failed: {error}");
                self.result = None;
                self.error = Some(error);
            }
        }
    }

    /// Returns the form to its initial state
    pub fn reset(&mut self) {
        if self.loading {
            return;
        }
        *self = Self::default();
    }

    /// What the form should show right now
    pub fn display(&self) -> DisplayState {
        if self.loading {
            return DisplayState::Loading;
        }
        if let Some(error) = &self.error {
            return DisplayState::from_error(error);
        }
        self.result.as_ref().map_or(DisplayState::Idle, |result| {
            DisplayState::from_result(result, &self.last_search_term)
        })
    }
}

/// Widgets that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Query text field
    #[default]
    Input,
    /// "Check name" button
    SearchButton,
    /// "Try another name" button, only shown when a name is taken
    TryAnother,
}

/// Main UI state
#[derive(Debug, Default)]
pub struct UiState {
    /// Search form contents
    pub session: SearchSession,
    /// Widget with keyboard focus
    pub focus: Focus,
}

impl UiState {
    /// Focus order for the current display
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Input, Focus::SearchButton];
        if self.session.display().offers_reset() {
            order.push(Focus::TryAnother);
        }
        order
    }

    /// Moves focus forward, wrapping around
    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let index = order.iter().position(|focus| *focus == self.focus).unwrap_or(0);
        self.focus = order[(index + 1) % order.len()];
    }

    /// Moves focus backward, wrapping around
    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        let index = order.iter().position(|focus| *focus == self.focus).unwrap_or(0);
        self.focus = order[(index + order.len() - 1) % order.len()];
    }

    /// Sends focus back to the input if the focused widget disappeared
    pub fn settle_focus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::Input;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abn_core::{NamePayload, QueryKind};
    use serde_json::json;

    fn name_result(value: serde_json::Value) -> SearchResult {
        SearchResult::Name(serde_json::from_value::<NamePayload>(value).unwrap())
    }

    #[test]
    fn test_blank_submission_records_validation_error() {
        let mut session = SearchSession::default();

        assert!(session.begin_submit("   ").is_none());

        assert!(!session.is_loading());
        assert_eq!(
            session.display(),
            DisplayState::InvalidInput("Please enter a business name".to_owned())
        );
    }

    #[test]
    fn test_submission_enters_loading_and_ignores_second_submit() {
        let mut session = SearchSession::default();

        let query = session.begin_submit("12 345 678 901").unwrap();
        assert_eq!(query.kind(), QueryKind::IdentifierLookup);
        assert_eq!(session.display(), DisplayState::Loading);
        assert!(session.begin_submit("Acme").is_none());
        assert_eq!(session.last_search_term, "12 345 678 901");
    }

    #[test]
    fn test_completion_shows_result_for_submitted_term() {
        let mut session = SearchSession::default();
        session.begin_submit("Zyxwv Trading").unwrap();

        session.complete(Ok(name_result(json!({ "results": [] }))));

        assert!(!session.is_loading());
        assert_eq!(
            session.display(),
            DisplayState::NameAvailable("Zyxwv Trading".to_owned())
        );
    }

    #[test]
    fn test_failure_replaces_previous_result() {
        let mut session = SearchSession::default();
        session.begin_submit("Acme").unwrap();
        session.complete(Ok(name_result(json!({ "results": [{ "name": "ACME" }] }))));

        session.begin_submit("Acme").unwrap();
        session.complete(Err(LookupError::Unreachable("refused".to_owned())));

        assert!(matches!(session.display(), DisplayState::TransportError(_)));
        assert!(!session.display().offers_reset());
    }

    #[test]
    fn test_edit_clears_feedback_but_not_while_loading() {
        let mut session = SearchSession::default();
        session.begin_submit("Acme").unwrap();
        session.edit();
        assert_eq!(session.display(), DisplayState::Loading);

        session.complete(Ok(name_result(json!({ "results": [] }))));
        session.edit();
        assert_eq!(session.display(), DisplayState::Idle);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut session = SearchSession::default();
        session.complete(Ok(name_result(json!({ "results": [] }))));
        assert_eq!(session.display(), DisplayState::Idle);
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut session = SearchSession::default();
        session.begin_submit("Acme").unwrap();
        session.complete(Ok(name_result(json!({ "results": [{ "name": "ACME" }] }))));

        session.reset();

        assert_eq!(session.display(), DisplayState::Idle);
        assert_eq!(session.last_search_term, "");
    }

    #[test]
    fn test_focus_order_includes_try_another_only_when_taken() {
        let mut state = UiState::default();
        assert_eq!(state.focus_order(), vec![Focus::Input, Focus::SearchButton]);

        state.session.begin_submit("Acme").unwrap();
        state
            .session
            .complete(Ok(name_result(json!({ "results": [{ "name": "ACME" }] }))));

        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus, Focus::TryAnother);
        state.focus_next();
        assert_eq!(state.focus, Focus::Input);
        state.focus_previous();
        assert_eq!(state.focus, Focus::TryAnother);

        state.session.edit();
        state.settle_focus();
        assert_eq!(state.focus, Focus::Input);
    }
}

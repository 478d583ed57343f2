//! Presentation of a [`DisplayState`] as titled rows of text.
//!
//! Shared by the terminal renderer and the plain-text output of
//! `abn-check search`.

use abn_core::{DisplayState, IdentifierRecord};

/// Label of the reset action shown when a name is taken
pub const TRY_ANOTHER_LABEL: &str = "Try another name";

const TAKEN_TIP: &str =
    "TIP: If the business name you want isn't available try adding another word or two.";

/// Whether a panel carries good or bad news
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Progress or nothing to report
    Neutral,
    /// Business found or name available
    Success,
    /// Error reported by the service or name taken
    Failure,
}

/// One line of a results panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    /// Field label, if the line is a labelled field
    pub label: Option<&'static str>,
    /// Line text
    pub text: String,
}

impl ViewRow {
    fn field(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label: Some(label),
            text: text.into(),
        }
    }

    fn line(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }
}

/// What the form shows for one [`DisplayState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Message shown beneath the search row instead of a panel
    pub inline_error: Option<String>,
    /// Panel heading
    pub title: Option<String>,
    /// Panel colouring
    pub tone: Tone,
    /// Panel body
    pub rows: Vec<ViewRow>,
    /// Action button offered under the panel
    pub action: Option<&'static str>,
    /// Hint printed after the panel
    pub tip: Option<&'static str>,
}

impl ResultView {
    fn empty() -> Self {
        Self {
            inline_error: None,
            title: None,
            tone: Tone::Neutral,
            rows: Vec::new(),
            action: None,
            tip: None,
        }
    }

    fn panel(title: &str, tone: Tone, rows: Vec<ViewRow>) -> Self {
        Self {
            title: Some(title.to_owned()),
            tone,
            rows,
            ..Self::empty()
        }
    }

    /// Whether there is a results panel to draw
    pub fn has_panel(&self) -> bool {
        self.title.is_some() || !self.rows.is_empty()
    }
}

/// Builds the view for `state`
pub fn result_view(state: &DisplayState) -> ResultView {
    match state {
        DisplayState::Idle => ResultView::empty(),
        DisplayState::Loading => ResultView {
            rows: vec![ViewRow::line("Searching...")],
            ..ResultView::empty()
        },
        DisplayState::InvalidInput(message) | DisplayState::TransportError(message) => {
            ResultView {
                inline_error: Some(message.clone()),
                ..ResultView::empty()
            }
        }
        DisplayState::IdentifierFound(record) => {
            ResultView::panel("Business Found", Tone::Success, record_rows(record))
        }
        DisplayState::IdentifierError { message, abn, mode } => ResultView::panel(
            "ABN Lookup Result",
            Tone::Failure,
            vec![
                ViewRow::field("Error", message.as_str()),
                ViewRow::field("ABN", abn.as_str()),
                ViewRow::field("Mode", mode.as_str()),
            ],
        ),
        DisplayState::NameError {
            message,
            search_term,
        } => ResultView::panel(
            "Business Name Search Result",
            Tone::Failure,
            vec![
                ViewRow::field("Error", message.as_str()),
                ViewRow::field("Search Term", search_term.as_str()),
            ],
        ),
        DisplayState::NameTaken(term) => ResultView {
            action: Some(TRY_ANOTHER_LABEL),
            tip: Some(TAKEN_TIP),
            ..ResultView::panel(
                "✕ That's a shame! This business name is already taken.",
                Tone::Failure,
                vec![ViewRow::line(term.as_str())],
            )
        },
        DisplayState::NameAvailable(term) => ResultView::panel(
            "Great News!",
            Tone::Success,
            vec![
                ViewRow::line(format!(
                    "The business name \"{term}\" appears to be available!"
                )),
                ViewRow::line("You can proceed with your business registration."),
            ],
        ),
    }
}

fn record_rows(record: &IdentifierRecord) -> Vec<ViewRow> {
    vec![
        ViewRow::field("ABN", record.abn.as_str()),
        ViewRow::field("Entity Name", record.entity_name.as_str()),
        ViewRow::field("Entity Type", record.entity_type.as_str()),
        ViewRow::field("GST Status", record.gst_status.as_str()),
        ViewRow::field("ABR Status", record.abr_status.as_str()),
        ViewRow::field("Mode", record.mode.as_str()),
        ViewRow::field("Retrieved", record.retrieved.as_str()),
    ]
}

/// Renders the panel as plain lines for terminal output without the form.
/// The inline error is not included.
pub fn plain_text(view: &ResultView) -> String {
    let mut lines = Vec::new();
    if let Some(title) = &view.title {
        lines.push(title.clone());
    }
    lines.extend(view.rows.iter().map(|row| match row.label {
        Some(label) => format!("{label}: {}", row.text),
        None => row.text.clone(),
    }));
    if let Some(tip) = view.tip {
        lines.push(String::new());
        lines.push(tip.to_owned());
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}

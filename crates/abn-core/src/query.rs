use std::sync::LazyLock;

use regex::Regex;

/// Eleven ASCII digits and nothing else. `[0-9]` rather than `\d`, which is
/// Unicode-aware in the `regex` crate.
static IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used, reason = "Pattern is a compile-time constant")]
    Regex::new(r"^[0-9]{11}$").unwrap()
});

/// Which lookup service a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Direct ABN lookup by an 11-digit identifier
    IdentifierLookup,
    /// Free-text business name search
    NameSearch,
}

impl QueryKind {
    /// Short label used in logs
    pub fn label(self) -> &'static str {
        match self {
            Self::IdentifierLookup => "abn",
            Self::NameSearch => "name",
        }
    }
}

/// Classifies raw user text.
///
/// All whitespace is stripped first, so `"12 345 678 901"` is an identifier.
/// Total over all strings.
pub fn classify(raw_text: &str) -> QueryKind {
    if IDENTIFIER_PATTERN.is_match(&normalize(raw_text)) {
        QueryKind::IdentifierLookup
    } else {
        QueryKind::NameSearch
    }
}

fn normalize(raw_text: &str) -> String {
    raw_text
        .chars()
        .filter(|character| !character.is_whitespace())
        .collect()
}

/// A submitted query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw_text: String,
    normalized: String,
    kind: QueryKind,
}

impl Query {
    /// Builds a query from the text exactly as the user typed it.
    ///
    /// Returns `None` when the text is empty or whitespace only.
    pub fn parse(raw_text: &str) -> Option<Self> {
        if raw_text.trim().is_empty() {
            return None;
        }

        Some(Self {
            raw_text: raw_text.to_owned(),
            normalized: normalize(raw_text),
            kind: classify(raw_text),
        })
    }

    /// Text as typed, used for name searches and for echoing back to the user
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Text with all whitespace removed, used as the ABN path segment
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Lookup this query is routed to
    pub fn kind(&self) -> QueryKind {
        self.kind
    }
}

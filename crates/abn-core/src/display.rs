//! Mapping from a search outcome to exactly one display state.

use core::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::error::LookupError;
use crate::payload::{IdentifierPayload, NamePayload};
use crate::result::SearchResult;

/// en-AU `toLocaleString` layout, e.g. `01/05/2024, 1:04:05 pm`
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %-I:%M:%S %P";

/// Business record shown for a successful ABN lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierRecord {
    /// ABN exactly as returned
    pub abn: String,
    /// Registered entity name
    pub entity_name: String,
    /// Entity type
    pub entity_type: String,
    /// GST registration status
    pub gst_status: String,
    /// ABR status
    pub abr_status: String,
    /// Service mode
    pub mode: String,
    /// Human-formatted retrieval time
    pub retrieved: String,
}

/// What the results area currently shows. Exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing submitted yet, or the form was reset
    Idle,
    /// A request is in flight
    Loading,
    /// Blank submission rejected locally
    InvalidInput(String),
    /// Transport failure or failure status from the service
    TransportError(String),
    /// ABN lookup succeeded
    IdentifierFound(IdentifierRecord),
    /// ABN lookup service reported an error
    IdentifierError {
        /// Service message
        message: String,
        /// ABN the service echoed back
        abn: String,
        /// Service mode
        mode: String,
    },
    /// Name search service reported an error
    NameError {
        /// Service message
        message: String,
        /// Term the service searched for, or the submitted term
        search_term: String,
    },
    /// The name is already registered
    NameTaken(String),
    /// No registration matched the name
    NameAvailable(String),
}

impl DisplayState {
    /// Applies the rendering decision table to a search result.
    ///
    /// `submitted_term` is the text as the user typed it when submitting.
    pub fn from_result(result: &SearchResult, submitted_term: &str) -> Self {
        match result {
            SearchResult::Identifier(payload) if payload.has_error() => Self::IdentifierError {
                message: text(payload.message.as_ref()),
                abn: text(payload.abn.as_ref()),
                mode: text(payload.mode.as_ref()),
            },
            SearchResult::Identifier(payload) => Self::IdentifierFound(record_from(payload)),
            SearchResult::Name(payload) if payload.has_error() => Self::NameError {
                message: text(payload.message.as_ref()),
                search_term: name_error_term(payload, submitted_term),
            },
            SearchResult::Name(payload) if payload.has_matches() => {
                Self::NameTaken(submitted_term.to_owned())
            }
            SearchResult::Name(_) => Self::NameAvailable(submitted_term.to_owned()),
        }
    }

    /// Maps a failed search to its inline message state.
    pub fn from_error(error: &LookupError) -> Self {
        if error.is_local() {
            Self::InvalidInput(error.user_message())
        } else {
            Self::TransportError(error.user_message())
        }
    }

    /// Whether this state offers the "Try another name" reset action
    pub fn offers_reset(&self) -> bool {
        matches!(self, Self::NameTaken(_))
    }
}

fn text(field: Option<&String>) -> String {
    field.cloned().unwrap_or_default()
}

fn name_error_term(payload: &NamePayload, submitted_term: &str) -> String {
    payload
        .search_term
        .as_deref()
        .filter(|term| !term.is_empty())
        .unwrap_or(submitted_term)
        .to_owned()
}

fn record_from(payload: &IdentifierPayload) -> IdentifierRecord {
    IdentifierRecord {
        abn: text(payload.abn.as_ref()),
        entity_name: text(payload.entity_name.as_ref()),
        entity_type: text(payload.entity_type.as_ref()),
        gst_status: text(payload.gst_status.as_ref()),
        abr_status: text(payload.abr_status.as_ref()),
        mode: text(payload.mode.as_ref()),
        retrieved: payload
            .timestamp
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_default(),
    }
}

/// Formats an ISO-8601 timestamp in the local time zone.
///
/// Unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Formats an ISO-8601 timestamp in `zone`. Timestamps without an offset are
/// taken to be in `zone` already.
pub fn format_timestamp_in<Tz>(raw: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed
            .with_timezone(zone)
            .format(TIMESTAMP_FORMAT)
            .to_string();
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| zone.from_local_datetime(&naive).earliest())
        .map_or_else(
            || raw.to_owned(),
            |local| local.format(TIMESTAMP_FORMAT).to_string(),
        )
}

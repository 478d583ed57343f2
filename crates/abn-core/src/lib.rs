//! Core types for the ABN and business name checker.
//!
//! This crate holds the pure part of the application: query classification,
//! the response payloads returned by the two lookup services, the mapping from
//! a search outcome to a display state, and the error taxonomy. It performs no
//! I/O; transports implement [`LookupService`].
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        reason = "Allow for tests"
    )
)]

/// Display states and the result rendering decision table.
pub mod display;
/// Error types and result definitions.
pub mod error;
/// Response payloads returned by the lookup services.
pub mod payload;
/// Query normalisation and classification.
pub mod query;
/// Search results tagged by the lookup that produced them.
pub mod result;
/// Trait implemented by lookup transports.
pub mod service;

pub use display::{DisplayState, IdentifierRecord, format_timestamp};
pub use error::{LookupError, Result};
pub use payload::{IdentifierPayload, NamePayload};
pub use query::{Query, QueryKind, classify};
pub use result::SearchResult;
pub use service::LookupService;

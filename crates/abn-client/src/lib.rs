//! Transports for the ABN lookup and business name search services.
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

/// Reqwest-backed client for the real services.
pub mod http;
/// In-memory service with canned responses, for tests.
pub mod mock;

pub use http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpLookupClient};
pub use mock::{MockCall, MockLookupService};

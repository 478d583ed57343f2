use async_trait::async_trait;

use crate::error::{LookupError, Result};
use crate::query::{Query, QueryKind};
use crate::result::SearchResult;

/// Transport that resolves a classified query against the lookup services.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Returns the unique identifier for this service implementation.
    fn name(&self) -> &'static str;

    /// Looks up an ABN. `abn` is the normalized 11-digit string.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or answers with a
    /// failure status.
    async fn lookup_identifier(&self, abn: &str) -> Result<SearchResult>;

    /// Searches for a business name. `name` is the text exactly as typed.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or answers with a
    /// failure status.
    async fn search_name(&self, name: &str) -> Result<SearchResult>;

    /// Validates, classifies and dispatches raw user text.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidInput`] for blank text without touching the
    /// network, or whatever the chosen lookup returns.
    async fn search(&self, raw_text: &str) -> Result<SearchResult> {
        let query = Query::parse(raw_text).ok_or_else(LookupError::empty_input)?;
        match query.kind() {
            QueryKind::IdentifierLookup => self.lookup_identifier(query.normalized()).await,
            QueryKind::NameSearch => self.search_name(query.raw_text()).await,
        }
    }
}

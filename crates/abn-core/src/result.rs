use crate::payload::{IdentifierPayload, NamePayload};

/// Body returned by a lookup, tagged by the service that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// Response from the ABN lookup service
    Identifier(IdentifierPayload),
    /// Response from the business name search service
    Name(NamePayload),
}

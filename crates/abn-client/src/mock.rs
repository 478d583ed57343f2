//! Mock lookup service for testing search flows.
//!
//! Returns pre-defined bodies per ABN or name, records every call, and can
//! hold responses behind a gate so tests can observe the in-flight state.

use core::result::Result as CoreResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use abn_core::{LookupError, LookupService, Result, SearchResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Notify;

/// Canned outcome: a JSON body to decode, or a failure.
type Canned = CoreResult<Value, LookupError>;

/// A lookup recorded by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    /// ABN lookup with the normalized identifier
    Identifier(String),
    /// Name search with the raw text
    Name(String),
}

/// In-memory [`LookupService`] with canned responses.
#[derive(Clone, Default)]
pub struct MockLookupService {
    /// Responses keyed by normalized ABN
    identifiers: Arc<Mutex<HashMap<String, Canned>>>,
    /// Responses keyed by raw name text
    names: Arc<Mutex<HashMap<String, Canned>>>,
    /// Outcome for lookups with no canned response
    fallback: Arc<Mutex<Option<Canned>>>,
    /// Call history for verification
    calls: Arc<Mutex<Vec<MockCall>>>,
    /// When set, each lookup waits for one notification before answering
    gate: Option<Arc<Notify>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockLookupService {
    /// Create an empty mock. Unmatched lookups fail as unreachable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer lookups of `abn` with `body`.
    #[must_use]
    pub fn with_identifier(self, abn: impl Into<String>, body: Value) -> Self {
        lock(&self.identifiers).insert(abn.into(), Ok(body));
        self
    }

    /// Answer searches for `name` with `body`.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>, body: Value) -> Self {
        lock(&self.names).insert(name.into(), Ok(body));
        self
    }

    /// Fail searches for `name` with `error`.
    #[must_use]
    pub fn with_name_failure(self, name: impl Into<String>, error: LookupError) -> Self {
        lock(&self.names).insert(name.into(), Err(error));
        self
    }

    /// Outcome for any lookup without a canned response.
    #[must_use]
    pub fn with_fallback(self, outcome: Canned) -> Self {
        *lock(&self.fallback) = Some(outcome);
        self
    }

    /// Hold every response until `gate` is notified once per lookup.
    #[must_use]
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// All lookups made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    /// Number of lookups made so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    async fn answer<T: DeserializeOwned>(&self, call: MockCall) -> Result<T> {
        let canned = {
            let table = match &call {
                MockCall::Identifier(abn) => lock(&self.identifiers).get(abn).cloned(),
                MockCall::Name(name) => lock(&self.names).get(name).cloned(),
            };
            table.or_else(|| lock(&self.fallback).clone())
        };
        lock(&self.calls).push(call);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let body = canned.unwrap_or_else(|| {
            Err(LookupError::Unreachable(
                "no canned response configured".to_owned(),
            ))
        })?;
        serde_json::from_value(body).map_err(|error| LookupError::Decode(error.to_string()))
    }
}

#[async_trait]
impl LookupService for MockLookupService {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn lookup_identifier(&self, abn: &str) -> Result<SearchResult> {
        self.answer(MockCall::Identifier(abn.to_owned()))
            .await
            .map(SearchResult::Identifier)
    }

    async fn search_name(&self, name: &str) -> Result<SearchResult> {
        self.answer(MockCall::Name(name.to_owned()))
            .await
            .map(SearchResult::Name)
    }
}

// Mock implementations for testing
//
// Provides recording mocks that can be injected into SiteApi for tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseBackend, BaseNotifier};
use crate::error::{ApiError, Result};
use crate::notifications::Notification;
use crate::queries::CollectionQuery;

// =============================================================================
// Mock Backend
// =============================================================================

/// Arguments captured from an invoke call
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub function: String,
    pub body: Value,
}

/// Backend that answers from queued responses, keyed by function or collection.
///
/// Unqueued functions answer `null`; unqueued collections answer no rows.
#[derive(Default)]
pub struct MockBackend {
    function_responses: Arc<Mutex<HashMap<String, Vec<Result<Value>>>>>,
    select_responses: Arc<Mutex<HashMap<String, Vec<Result<Vec<Value>>>>>>,
    invocations: Arc<Mutex<Vec<Invocation>>>,
    queries: Arc<Mutex<Vec<CollectionQuery>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful answer for `function`
    pub fn with_function_data(self, function: &str, data: Value) -> Self {
        self.push_function(function, Ok(data));
        self
    }

    /// Queue a failure for `function`
    pub fn with_function_error(self, function: &str, error: ApiError) -> Self {
        self.push_function(function, Err(error));
        self
    }

    /// Queue rows for `collection`
    pub fn with_rows(self, collection: &str, rows: Vec<Value>) -> Self {
        self.push_select(collection, Ok(rows));
        self
    }

    /// Queue a failure for `collection`
    pub fn with_select_error(self, collection: &str, error: ApiError) -> Self {
        self.push_select(collection, Err(error));
        self
    }

    /// All invoke calls in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// All select calls in order
    pub fn queries(&self) -> Vec<CollectionQuery> {
        self.queries.lock().unwrap().clone()
    }

    /// Check if a function was invoked
    pub fn was_invoked(&self, function: &str) -> bool {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .any(|i| i.function == function)
    }

    fn push_function(&self, function: &str, response: Result<Value>) {
        self.function_responses
            .lock()
            .unwrap()
            .entry(function.to_string())
            .or_default()
            .push(response);
    }

    fn push_select(&self, collection: &str, response: Result<Vec<Value>>) {
        self.select_responses
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(response);
    }
}

#[async_trait]
impl BaseBackend for MockBackend {
    async fn invoke(&self, function: &str, body: Value) -> Result<Value> {
        self.invocations.lock().unwrap().push(Invocation {
            function: function.to_string(),
            body,
        });

        let mut responses = self.function_responses.lock().unwrap();
        match responses.get_mut(function) {
            Some(queue) if !queue.is_empty() => queue.remove(0),
            _ => Ok(Value::Null),
        }
    }

    async fn select(&self, query: &CollectionQuery) -> Result<Vec<Value>> {
        self.queries.lock().unwrap().push(query.clone());

        let mut responses = self.select_responses.lock().unwrap();
        match responses.get_mut(&query.collection) {
            Some(queue) if !queue.is_empty() => queue.remove(0),
            _ => Ok(Vec::new()),
        }
    }
}

// =============================================================================
// Mock Notifier
// =============================================================================

/// Notifier that records everything it is asked to show.
#[derive(Default)]
pub struct MockNotifier {
    shown: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all notifications in the order they were shown
    pub fn notifications(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.shown.lock().unwrap().last().cloned()
    }

    /// Check if a notification with this title was shown
    pub fn was_shown(&self, title: &str) -> bool {
        self.shown.lock().unwrap().iter().any(|n| n.title == title)
    }
}

impl BaseNotifier for MockNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

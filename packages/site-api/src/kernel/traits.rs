// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Notification copy and error policy live in the facade.
//
// Naming convention: Base* for trait names (e.g., BaseBackend, BaseNotifier)

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::notifications::Notification;
use crate::queries::CollectionQuery;

// =============================================================================
// Backend Trait (Infrastructure - hosted functions and tables)
// =============================================================================

#[async_trait]
pub trait BaseBackend: Send + Sync {
    /// Invoke a named remote procedure with a JSON body, returning its data
    async fn invoke(&self, function: &str, body: Value) -> Result<Value>;

    /// Read a collection with the query's filter and ordering
    async fn select(&self, query: &CollectionQuery) -> Result<Vec<Value>>;
}

// =============================================================================
// Notifier Trait (Infrastructure - toast/snackbar presentation)
// =============================================================================

pub trait BaseNotifier: Send + Sync {
    /// Show a notification. Fire and forget.
    fn notify(&self, notification: Notification);
}

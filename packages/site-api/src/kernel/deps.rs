use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use supabase_client::SupabaseClient;

use super::BaseBackend;
use crate::error::Result;
use crate::queries::CollectionQuery;

// =============================================================================
// SupabaseClient Adapter (implements BaseBackend trait)
// =============================================================================

/// Wrapper around SupabaseClient that implements BaseBackend trait
#[derive(Clone)]
pub struct SupabaseAdapter(pub Arc<SupabaseClient>);

impl SupabaseAdapter {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseBackend for SupabaseAdapter {
    async fn invoke(&self, function: &str, body: Value) -> Result<Value> {
        let resp = self.0.invoke(function, &body).await?;
        Ok(resp.data)
    }

    async fn select(&self, query: &CollectionQuery) -> Result<Vec<Value>> {
        let mut builder = self.0.from(query.collection.as_str()).select("*");

        if let Some(filter) = &query.filter {
            builder = builder.eq(filter.column.as_str(), filter.value_literal());
        }

        let rows = builder
            .order(query.order.column.as_str(), query.order.ascending)
            .execute::<Value>()
            .await?;

        Ok(rows)
    }
}

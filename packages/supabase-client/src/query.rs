//! PostgREST read queries.
//!
//! Only the read surface the site needs: column selection, equality filters,
//! ordering and an optional row limit.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Result, SupabaseClient, SupabaseError};

/// Builder for a `GET /rest/v1/<table>` request.
#[derive(Debug, Clone)]
pub struct QueryBuilder<'a> {
    client: &'a SupabaseClient,
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    limit: Option<usize>,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Columns to return (PostgREST `select=`). Defaults to `*`.
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Keep only rows where `column` equals `value`.
    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters
            .push((column.into(), format!("eq.{}", value.to_string())));
        self
    }

    /// Order by `column`. Later calls replace earlier ones.
    pub fn order(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order = Some((column.into(), ascending));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Query string pairs in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.columns.clone())];
        pairs.extend(self.filters.iter().cloned());

        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            pairs.push(("order".to_string(), format!("{}.{}", column, direction)));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }

    /// Run the query and deserialize every row as `T`.
    pub async fn execute<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let pairs = self.query_pairs();
        debug!(table = %self.table, query = ?pairs, "Executing PostgREST read");

        let url = format!("{}/{}", self.client.rest_url(), self.table);
        let resp = self
            .client
            .request(reqwest::Method::GET, &url)
            .query(&pairs)
            .send()
            .await?;

        let resp = SupabaseClient::check_status(resp).await?;
        let body = resp.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            SupabaseError::Parse(format!(
                "Failed to deserialize rows from {}: {}",
                self.table, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_select_all() {
        let client = SupabaseClient::new("https://proj.supabase.co", "anon");
        let query = client.from("projects");
        assert_eq!(query.query_pairs(), owned(&[("select", "*")]));
    }

    #[test]
    fn test_filter_and_descending_order() {
        let client = SupabaseClient::new("https://proj.supabase.co", "anon");
        let query = client
            .from("blog_posts")
            .select("*")
            .eq("published", true)
            .order("created_at", false);

        assert_eq!(
            query.query_pairs(),
            owned(&[
                ("select", "*"),
                ("published", "eq.true"),
                ("order", "created_at.desc"),
            ])
        );
    }

    #[test]
    fn test_order_replaced_and_limit() {
        let client = SupabaseClient::new("https://proj.supabase.co", "anon");
        let query = client
            .from("job_openings")
            .order("title", true)
            .order("created_at", true)
            .limit(5);

        assert_eq!(
            query.query_pairs(),
            owned(&[("select", "*"), ("order", "created_at.asc"), ("limit", "5")])
        );
        assert_eq!(query.table(), "job_openings");
    }
}

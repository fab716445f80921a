//! Collection read definitions.
//!
//! Every public listing reads newest first.

use serde_json::Value;

pub const BLOG_POSTS: &str = "blog_posts";
pub const PROJECTS: &str = "projects";
pub const JOB_OPENINGS: &str = "job_openings";

const CREATED_AT: &str = "created_at";

/// Equality filter on a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct EqFilter {
    pub column: String,
    pub value: Value,
}

impl EqFilter {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Value as PostgREST expects it after `eq.`.
    pub fn value_literal(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

impl OrderBy {
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
        }
    }
}

/// A filtered, ordered read of a named collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionQuery {
    pub collection: String,
    pub filter: Option<EqFilter>,
    pub order: OrderBy,
}

impl CollectionQuery {
    /// All rows of `collection`, newest first.
    pub fn newest_first(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filter: None,
            order: OrderBy::desc(CREATED_AT),
        }
    }

    pub fn filter_eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter = Some(EqFilter::new(column, value));
        self
    }
}

/// Published blog posts.
pub fn blog_posts() -> CollectionQuery {
    CollectionQuery::newest_first(BLOG_POSTS).filter_eq("published", true)
}

/// Portfolio projects (unfiltered).
pub fn projects() -> CollectionQuery {
    CollectionQuery::newest_first(PROJECTS)
}

/// Job openings still accepting applications.
pub fn job_openings() -> CollectionQuery {
    CollectionQuery::newest_first(JOB_OPENINGS).filter_eq("active", true)
}

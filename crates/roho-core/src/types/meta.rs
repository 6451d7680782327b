//! Metadata common to many API objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation/update timestamps and canonical URL of an API object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub url: String,
}

/// The `{"results": [...]}` envelope wrapping every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Results<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Default for Results<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            next: None,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::*;
use crate::query::SortKey;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage<'a> {
  pub heading: String,
  pub description: &'static str,
  /// Set for unknown identifiers and for known categories with no
  /// articles; the UI renders an empty state, never an error.
  pub no_articles: bool,
  pub articles: Vec<&'a Article>,
  pub articles_count: usize,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SortRequest {
  pub sort: Option<String>,
}

impl SortRequest {
  pub fn sort_key(&self, default: SortKey) -> SortKey {
    match self.sort {
      Some(ref sort) if !sort.trim().is_empty() => SortKey::parse(sort),
      _ => default,
    }
  }
}

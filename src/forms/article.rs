use serde::{Deserialize, Serialize};

use crate::models::*;
use crate::query::*;

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleOut<T> {
  pub article: T,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleList<T> {
  pub articles: Vec<T>,
  pub articles_count: usize,
}

/// Article detail payload: the article plus its naive related set.
#[derive(Debug, Serialize)]
pub struct ArticleDetail<'a> {
  pub article: &'a Article,
  pub related: Vec<&'a Article>,
}

/// The category constraint as it arrived on the wire.  Unknown categories
/// are kept distinct from "all": they resolve to an empty source rather
/// than an unconstrained one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryParam {
  All,
  Known(Category),
  Unknown,
}

/// Query-string parameters shared by the article listing and search
/// endpoints.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ArticleRequest {
  pub category: Option<String>,
  pub q: Option<String>,
  pub sort: Option<String>,
}

impl ArticleRequest {
  /// Blank search text counts as absent.
  pub fn search_term(&self) -> Option<String> {
    match self.q {
      Some(ref q) if !q.trim().is_empty() => Some(q.trim().to_string()),
      _ => None,
    }
  }

  pub fn sort_key(&self, default: SortKey) -> SortKey {
    match self.sort {
      Some(ref sort) if !sort.trim().is_empty() => SortKey::parse(sort),
      _ => default,
    }
  }

  pub fn category_param(&self) -> CategoryParam {
    match self.category {
      None => CategoryParam::All,
      Some(ref ident) => {
        let ident = ident.trim();
        if ident.is_empty() || ident.eq_ignore_ascii_case("all") {
          CategoryParam::All
        } else {
          match Category::resolve(ident) {
            Some(cat) => CategoryParam::Known(cat),
            None => CategoryParam::Unknown,
          }
        }
      },
    }
  }
}

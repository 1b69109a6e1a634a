use chrono::{DateTime, FixedOffset};

use serde::{Deserialize, Serialize};

use crate::models::*;

/// An immutable news item.  Records are built once at startup and never
/// mutated, every derived list borrows from the same corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub id: i32,
  pub title: String,
  pub excerpt: String,
  /// May contain embedded markup, delivered verbatim.
  pub content: String,
  pub author: String,
  /// Raw ISO 8601 string as loaded; may be malformed, see `published_instant`.
  pub published_at: String,
  pub category: Category,
  pub image_url: String,
  /// Minutes.  Also doubles as the popularity proxy until real engagement
  /// metrics exist.
  pub read_time: u32,
  pub tags: Vec<String>,
}

impl Article {
  /// Parsed publication instant.  `None` for malformed timestamps.
  pub fn published_instant(&self) -> Option<DateTime<FixedOffset>> {
    crate::util::parse_published_at(&self.published_at)
  }

  /// Case-insensitive substring match against title, excerpt or any tag.
  pub fn matches(&self, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    self.title.to_lowercase().contains(&needle)
      || self.excerpt.to_lowercase().contains(&needle)
      || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
  }
}

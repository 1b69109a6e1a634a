use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

// publishedAt <-> chrono util functions.

pub fn parse_published_at(raw: &str) -> Option<DateTime<FixedOffset>> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }
  match DateTime::parse_from_rfc3339(raw) {
    Ok(ts) => Some(ts),
    Err(err) => {
      log::info!("Failed to parse publishedAt timestamp: {:?}", err);
      None
    },
  }
}

/// Ascending order over optional instants.  Unparseable timestamps order
/// after every valid instant so sorting stays deterministic.
pub fn cmp_instants(a: &Option<DateTime<FixedOffset>>, b: &Option<DateTime<FixedOffset>>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => a.cmp(b),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

/// Descending order over optional instants, invalid timestamps still last.
pub fn cmp_instants_desc(a: &Option<DateTime<FixedOffset>>, b: &Option<DateTime<FixedOffset>>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => b.cmp(a),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_rfc3339() {
    let ts = parse_published_at("2025-01-01T08:00:00Z");
    assert!(ts.is_some());
  }

  #[test]
  fn rejects_garbage() {
    assert!(parse_published_at("not-a-date").is_none());
    assert!(parse_published_at("").is_none());
    assert!(parse_published_at("   ").is_none());
  }

  #[test]
  fn invalid_sorts_last_both_directions() {
    let valid = parse_published_at("2025-01-01T08:00:00Z");
    let invalid = None;
    assert_eq!(cmp_instants(&valid, &invalid), Ordering::Less);
    assert_eq!(cmp_instants_desc(&valid, &invalid), Ordering::Less);
    assert_eq!(cmp_instants(&invalid, &valid), Ordering::Greater);
    assert_eq!(cmp_instants_desc(&invalid, &valid), Ordering::Greater);
  }
}

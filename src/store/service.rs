use std::time::Duration;

use async_std::task;

use crate::models::*;

use super::{BY_CATEGORY, CORPUS};

/// Related articles are a naive similarity stand-in: same category, first
/// few in corpus order.
const RELATED_LIMIT: usize = 3;

/// Read-only access to the article corpus.
///
/// Every fetch awaits a configurable delay standing in for the network
/// round trip of a future data service.  Callers issuing overlapping
/// fetches must discard stale responses themselves (see `views`).
#[derive(Debug, Clone, Default)]
pub struct StoreService {
  delay: Duration,
}

impl StoreService {
  pub fn new(delay_ms: u64) -> StoreService {
    StoreService {
      delay: Duration::from_millis(delay_ms),
    }
  }

  async fn simulate_latency(&self) {
    if self.delay > Duration::from_millis(0) {
      task::sleep(self.delay).await;
    }
  }

  /// The full corpus in load order.
  pub async fn fetch_all(&self) -> &'static [Article] {
    self.simulate_latency().await;
    CORPUS.as_slice()
  }

  /// Articles of one category, resolved case-insensitively from `ident`.
  /// Unknown identifiers yield an empty sequence, not an error.
  pub async fn fetch_category(&self, ident: &str) -> Vec<&'static Article> {
    self.simulate_latency().await;
    match Category::resolve(ident) {
      Some(cat) => BY_CATEGORY.get(&cat).cloned().unwrap_or_default(),
      None => Vec::new(),
    }
  }

  pub async fn fetch_article(&self, id: i32) -> Option<&'static Article> {
    self.simulate_latency().await;
    CORPUS.iter().find(|a| a.id == id)
  }

  /// Same category, the article itself excluded, capped in corpus order.
  pub async fn fetch_related(&self, article: &Article) -> Vec<&'static Article> {
    self.simulate_latency().await;
    CORPUS
      .iter()
      .filter(|a| a.category == article.category && a.id != article.id)
      .take(RELATED_LIMIT)
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::executor::block_on;

  #[test]
  fn category_fetch_resolves_case_insensitively() {
    let store = StoreService::new(0);
    let articles = block_on(store.fetch_category("WORLD"));
    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 4]);
  }

  #[test]
  fn unknown_category_fetch_is_empty() {
    let store = StoreService::new(0);
    assert!(block_on(store.fetch_category("foo")).is_empty());
  }

  #[test]
  fn article_lookup_by_id() {
    let store = StoreService::new(0);
    assert_eq!(block_on(store.fetch_article(3)).unwrap().id, 3);
    assert!(block_on(store.fetch_article(999)).is_none());
  }

  #[test]
  fn related_excludes_self_and_caps() {
    let store = StoreService::new(0);
    let one = block_on(store.fetch_article(1)).unwrap();
    let related = block_on(store.fetch_related(one));
    let ids: Vec<i32> = related.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![4]);
    assert!(related.len() <= RELATED_LIMIT);
  }
}

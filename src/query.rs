use std::borrow::Borrow;

use crate::models::*;
use crate::util::{cmp_instants, cmp_instants_desc};

/// Display sort order for article lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  Latest,
  Oldest,
  /// Descending read time.  Read time is a stand-in for engagement
  /// metrics that do not exist yet, not a real popularity signal.
  Popular,
  Title,
  /// Identity order: no relevance scoring is computed, results keep the
  /// order of the source sequence.
  Relevance,
}

impl Default for SortKey {
  fn default() -> Self {
    SortKey::Relevance
  }
}

impl SortKey {
  /// Parse a sort identifier from a query string.  Unknown keys fall back
  /// to identity order instead of failing.
  pub fn parse(raw: &str) -> SortKey {
    match raw.trim().to_lowercase().as_str() {
      "latest" | "date" => SortKey::Latest,
      "oldest" => SortKey::Oldest,
      "popular" | "popularity" => SortKey::Popular,
      "title" => SortKey::Title,
      _ => SortKey::Relevance,
    }
  }
}

/// Category constraint.  `All` leaves the source unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
  All,
  Only(Category),
}

impl Default for CategoryFilter {
  fn default() -> Self {
    CategoryFilter::All
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
  pub filter: CategoryFilter,
  pub search: Option<String>,
  pub sort: SortKey,
}

/// Filter and sort a source sequence for display.
///
/// Pure and total: never fails, never mutates `source`, always returns a
/// fresh sequence of borrows.  The search and category filters compose
/// with logical AND; sorting is stable, so ties keep their source order.
/// Articles with malformed `publishedAt` timestamps sort after every
/// valid instant under both `Latest` and `Oldest`.
pub fn query<'a, S>(source: &'a [S], params: &QueryParams) -> Vec<&'a Article>
where
  S: Borrow<Article>,
{
  let mut results: Vec<&Article> = source
    .iter()
    .map(<S as Borrow<Article>>::borrow)
    .filter(|article| match params.filter {
      CategoryFilter::All => true,
      CategoryFilter::Only(category) => article.category == category,
    })
    .filter(|article| match params.search {
      Some(ref needle) => article.matches(needle),
      None => true,
    })
    .collect();

  match params.sort {
    SortKey::Latest => {
      results.sort_by(|a, b| cmp_instants_desc(&a.published_instant(), &b.published_instant()));
    },
    SortKey::Oldest => {
      results.sort_by(|a, b| cmp_instants(&a.published_instant(), &b.published_instant()));
    },
    SortKey::Popular => {
      results.sort_by(|a, b| b.read_time.cmp(&a.read_time));
    },
    SortKey::Title => {
      results.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    },
    SortKey::Relevance => (),
  }

  results
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::CORPUS;

  fn ids(results: &[&Article]) -> Vec<i32> {
    results.iter().map(|a| a.id).collect()
  }

  #[test]
  fn latest_is_non_increasing() {
    let results = query(CORPUS.as_slice(), &QueryParams {
      sort: SortKey::Latest,
      ..Default::default()
    });
    for pair in results.windows(2) {
      assert!(pair[0].published_instant() >= pair[1].published_instant());
    }
    assert_eq!(ids(&results), vec![1, 2, 3, 4, 5, 6, 7]);
  }

  #[test]
  fn oldest_is_non_decreasing() {
    let results = query(CORPUS.as_slice(), &QueryParams {
      sort: SortKey::Oldest,
      ..Default::default()
    });
    for pair in results.windows(2) {
      assert!(pair[0].published_instant() <= pair[1].published_instant());
    }
    assert_eq!(ids(&results), vec![7, 6, 5, 4, 3, 2, 1]);
  }

  #[test]
  fn popular_is_descending_read_time() {
    let results = query(CORPUS.as_slice(), &QueryParams {
      sort: SortKey::Popular,
      ..Default::default()
    });
    for pair in results.windows(2) {
      assert!(pair[0].read_time >= pair[1].read_time);
    }
    // read_time ties (ids 2 and 6, both 6 minutes) keep corpus order.
    assert_eq!(ids(&results), vec![7, 1, 4, 2, 6, 3, 5]);
  }

  #[test]
  fn title_sorts_case_insensitively() {
    let results = query(CORPUS.as_slice(), &QueryParams {
      sort: SortKey::Title,
      ..Default::default()
    });
    let titles: Vec<String> = results.iter().map(|a| a.title.to_lowercase()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);
  }

  #[test]
  fn relevance_preserves_source_order() {
    let results = query(CORPUS.as_slice(), &QueryParams::default());
    assert_eq!(ids(&results), vec![1, 2, 3, 4, 5, 6, 7]);
  }

  #[test]
  fn category_filter_only_keeps_that_category() {
    for cat in CATEGORIES.iter() {
      let results = query(CORPUS.as_slice(), &QueryParams {
        filter: CategoryFilter::Only(*cat),
        ..Default::default()
      });
      assert!(results.iter().all(|a| a.category == *cat));
    }
  }

  #[test]
  fn search_is_case_insensitive() {
    let lower = query(CORPUS.as_slice(), &QueryParams {
      search: Some("climate".into()),
      ..Default::default()
    });
    let upper = query(CORPUS.as_slice(), &QueryParams {
      search: Some("CLIMATE".into()),
      ..Default::default()
    });
    assert_eq!(ids(&lower), ids(&upper));
    assert_eq!(ids(&lower), vec![1]);
  }

  #[test]
  fn search_matches_tags() {
    // "olympics" appears only in the tags of article 3.
    let results = query(CORPUS.as_slice(), &QueryParams {
      search: Some("olympics".into()),
      ..Default::default()
    });
    assert_eq!(ids(&results), vec![3]);
  }

  #[test]
  fn filters_compose_with_and() {
    let results = query(CORPUS.as_slice(), &QueryParams {
      filter: CategoryFilter::Only(Category::Business),
      search: Some("economy".into()),
      sort: SortKey::Latest,
    });
    assert_eq!(ids(&results), vec![2, 6]);
  }

  #[test]
  fn query_is_idempotent() {
    let params = QueryParams {
      filter: CategoryFilter::Only(Category::World),
      search: Some("research".into()),
      sort: SortKey::Oldest,
    };
    assert_eq!(ids(&query(CORPUS.as_slice(), &params)), ids(&query(CORPUS.as_slice(), &params)));
  }

  #[test]
  fn empty_source_yields_empty_result() {
    let empty: Vec<Article> = Vec::new();
    for sort in [SortKey::Latest, SortKey::Oldest, SortKey::Popular, SortKey::Title, SortKey::Relevance].iter() {
      let results = query(&empty, &QueryParams {
        search: Some("anything".into()),
        sort: *sort,
        ..Default::default()
      });
      assert!(results.is_empty());
    }
  }

  #[test]
  fn unknown_sort_key_falls_back_to_identity() {
    assert_eq!(SortKey::parse("trending"), SortKey::Relevance);
    assert_eq!(SortKey::parse(""), SortKey::Relevance);
    assert_eq!(SortKey::parse("LATEST"), SortKey::Latest);
    assert_eq!(SortKey::parse("popularity"), SortKey::Popular);
    assert_eq!(SortKey::parse("date"), SortKey::Latest);
  }

  #[test]
  fn malformed_timestamps_sort_last() {
    let mut articles: Vec<Article> = CORPUS.iter().take(3).cloned().collect();
    articles[1].published_at = "not-a-timestamp".into();
    let bad_id = articles[1].id;

    let latest = query(&articles, &QueryParams {
      sort: SortKey::Latest,
      ..Default::default()
    });
    assert_eq!(latest.last().unwrap().id, bad_id);

    let oldest = query(&articles, &QueryParams {
      sort: SortKey::Oldest,
      ..Default::default()
    });
    assert_eq!(oldest.last().unwrap().id, bad_id);
  }

  #[test]
  fn source_is_not_mutated() {
    let before: Vec<i32> = CORPUS.iter().map(|a| a.id).collect();
    let _ = query(CORPUS.as_slice(), &QueryParams {
      sort: SortKey::Title,
      search: Some("the".into()),
      ..Default::default()
    });
    let after: Vec<i32> = CORPUS.iter().map(|a| a.id).collect();
    assert_eq!(before, after);
  }
}

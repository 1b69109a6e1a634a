//! View-controller state for the portal's screens.
//!
//! Each view owns its transient display parameters and re-runs the query
//! engine when they change.  Store fetches are stamped with a `FetchToken`;
//! a response whose token is no longer current is dropped, so overlapping
//! fetches resolve last-write-wins even when an older fetch finishes late.

use crate::models::*;
use crate::query::*;
use crate::store::{StoreService, TRENDING_TOPICS};

pub const TOP_STORIES_LIMIT: usize = 6;
pub const SECTION_LIMIT: usize = 3;
pub const MOST_READ_LIMIT: usize = 5;

/// Shown on category pages whose identifier is not a known category.
pub static DEFAULT_CATEGORY_DESCRIPTION: &'static str =
  "Latest news and updates in this category.";

/// Token for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Monotonic counter minting fetch tokens.  Only the most recently
/// minted token is current.
#[derive(Debug, Clone, Copy, Default)]
struct Generation(u64);

impl Generation {
  fn mint(&mut self) -> FetchToken {
    self.0 += 1;
    FetchToken(self.0)
  }

  fn is_current(&self, token: FetchToken) -> bool {
    token.0 == self.0
  }
}

fn capitalize(ident: &str) -> String {
  let mut chars = ident.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

/// Homepage state.  The featured article and top-stories slice are index
/// based over the feed, not query results; both cap to available length.
#[derive(Debug, Default)]
pub struct HomeView {
  articles: Vec<&'static Article>,
}

impl HomeView {
  pub async fn load(store: &StoreService) -> HomeView {
    let source = store.fetch_all().await;
    HomeView {
      articles: source.iter().collect(),
    }
  }

  pub fn featured(&self) -> Option<&'static Article> {
    self.articles.first().copied()
  }

  /// Up to six stories after the featured one.
  pub fn top_stories(&self) -> &[&'static Article] {
    let start = 1.min(self.articles.len());
    let end = (1 + TOP_STORIES_LIMIT).min(self.articles.len());
    &self.articles[start..end]
  }

  /// Up to three articles per category in feed order.  Empty sections are
  /// skipped.
  pub fn sections(&self) -> Vec<(Category, Vec<&'static Article>)> {
    CATEGORIES
      .iter()
      .filter_map(|cat| {
        let articles: Vec<&'static Article> = self
          .articles
          .iter()
          .copied()
          .filter(|a| a.category == *cat)
          .take(SECTION_LIMIT)
          .collect();
        if articles.is_empty() {
          None
        } else {
          Some((*cat, articles))
        }
      })
      .collect()
  }

  pub fn most_read(&self) -> &[&'static Article] {
    &self.articles[..MOST_READ_LIMIT.min(self.articles.len())]
  }

  pub fn trending_topics(&self) -> &'static [&'static str] {
    &TRENDING_TOPICS
  }
}

/// Category listing state.  The source is fetched per category; sort
/// changes re-run the query engine locally without a refetch.
#[derive(Debug)]
pub struct CategoryView {
  ident: String,
  category: Option<Category>,
  sort: SortKey,
  source: Vec<&'static Article>,
  loading: bool,
  generation: Generation,
}

impl CategoryView {
  pub fn new(ident: &str) -> CategoryView {
    CategoryView {
      ident: ident.to_string(),
      category: Category::resolve(ident),
      sort: SortKey::Latest,
      source: Vec::new(),
      loading: false,
      generation: Generation::default(),
    }
  }

  pub fn category(&self) -> Option<Category> {
    self.category
  }

  pub fn heading(&self) -> String {
    match self.category {
      Some(cat) => cat.name().to_string(),
      None => capitalize(self.ident.trim()),
    }
  }

  pub fn description(&self) -> &'static str {
    match self.category {
      Some(cat) => cat.description(),
      None => DEFAULT_CATEGORY_DESCRIPTION,
    }
  }

  /// Start a fetch for this category.  Any earlier in-flight fetch
  /// becomes stale.
  pub fn begin_fetch(&mut self) -> FetchToken {
    self.loading = true;
    self.generation.mint()
  }

  /// Apply a finished fetch.  Returns false when the response was stale
  /// and has been dropped.
  pub fn apply(&mut self, token: FetchToken, source: Vec<&'static Article>) -> bool {
    if !self.generation.is_current(token) {
      return false;
    }
    self.source = source;
    self.loading = false;
    true
  }

  pub async fn refresh(&mut self, store: &StoreService) {
    let token = self.begin_fetch();
    let source = store.fetch_category(&self.ident).await;
    self.apply(token, source);
  }

  pub fn set_sort(&mut self, sort: SortKey) {
    self.sort = sort;
  }

  pub fn sort(&self) -> SortKey {
    self.sort
  }

  pub fn articles(&self) -> Vec<&Article> {
    query(&self.source, &QueryParams {
      sort: self.sort,
      ..Default::default()
    })
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  /// Empty state: unknown identifier or a known category with no articles.
  pub fn no_articles(&self) -> bool {
    !self.loading && self.source.is_empty()
  }
}

/// Search screen state.  Submission trims the term; blank input is a
/// no-op that leaves existing results untouched.
#[derive(Debug, Default)]
pub struct SearchView {
  term: String,
  submitted: Option<String>,
  filter: CategoryFilter,
  sort: SortKey,
  results: Vec<&'static Article>,
  loading: bool,
  generation: Generation,
}

impl SearchView {
  pub fn new() -> SearchView {
    Default::default()
  }

  pub fn set_term(&mut self, term: &str) {
    self.term = term.to_string();
  }

  pub fn set_filter(&mut self, filter: CategoryFilter) {
    self.filter = filter;
  }

  pub fn set_sort(&mut self, sort: SortKey) {
    self.sort = sort;
  }

  /// Submit the current term.  Returns the fetch token and the query to
  /// run against the corpus, or `None` for blank input.
  pub fn submit(&mut self) -> Option<(FetchToken, QueryParams)> {
    let term = self.term.trim();
    if term.is_empty() {
      return None;
    }
    self.submitted = Some(term.to_string());
    self.loading = true;
    let params = QueryParams {
      search: Some(term.to_string()),
      ..Default::default()
    };
    Some((self.generation.mint(), params))
  }

  /// Apply finished search results.  Returns false when the response was
  /// stale and has been dropped.
  pub fn apply(&mut self, token: FetchToken, results: Vec<&'static Article>) -> bool {
    if !self.generation.is_current(token) {
      return false;
    }
    self.results = results;
    self.loading = false;
    true
  }

  /// Submit, fetch and apply in one turn.  Returns false when the input
  /// was blank or the result was already stale.
  pub async fn search(&mut self, store: &StoreService) -> bool {
    match self.submit() {
      Some((token, params)) => {
        let source = store.fetch_all().await;
        let results = query(source, &params);
        self.apply(token, results)
      },
      None => false,
    }
  }

  pub fn submitted(&self) -> Option<&str> {
    self.submitted.as_deref()
  }

  /// Category filter and sort are applied locally over the last fetched
  /// results, matching the query engine semantics.
  pub fn articles(&self) -> Vec<&Article> {
    query(&self.results, &QueryParams {
      filter: self.filter,
      search: None,
      sort: self.sort,
    })
  }

  pub fn result_count(&self) -> usize {
    self.articles().len()
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn no_results(&self) -> bool {
    self.submitted.is_some() && !self.loading && self.articles().is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::CORPUS;
  use futures::executor::block_on;

  fn ids(results: &[&Article]) -> Vec<i32> {
    results.iter().map(|a| a.id).collect()
  }

  fn home() -> HomeView {
    block_on(HomeView::load(&StoreService::new(0)))
  }

  #[test]
  fn homepage_featured_is_first_of_feed() {
    assert_eq!(home().featured().unwrap().id, 1);
  }

  #[test]
  fn homepage_top_stories_are_the_next_six() {
    assert_eq!(ids(home().top_stories()), vec![2, 3, 4, 5, 6, 7]);
  }

  #[test]
  fn homepage_slices_cap_to_available_length() {
    let view = HomeView {
      articles: CORPUS.iter().take(3).collect(),
    };
    assert_eq!(ids(view.top_stories()), vec![2, 3]);
    assert_eq!(view.most_read().len(), 3);

    let empty = HomeView { articles: Vec::new() };
    assert!(empty.featured().is_none());
    assert!(empty.top_stories().is_empty());
    assert!(empty.most_read().is_empty());
    assert!(empty.sections().is_empty());
  }

  #[test]
  fn homepage_sections_cap_and_keep_feed_order() {
    let view = home();
    for (cat, articles) in view.sections() {
      assert!(articles.len() <= SECTION_LIMIT);
      assert!(!articles.is_empty());
      assert!(articles.iter().all(|a| a.category == cat));
    }
  }

  #[test]
  fn category_view_sorts_locally() {
    let store = StoreService::new(0);
    let mut view = CategoryView::new("business");
    block_on(view.refresh(&store));
    assert_eq!(ids(&view.articles()), vec![2, 6]);

    view.set_sort(SortKey::Oldest);
    assert_eq!(ids(&view.articles()), vec![6, 2]);
  }

  #[test]
  fn unknown_category_renders_no_articles_state() {
    let store = StoreService::new(0);
    let mut view = CategoryView::new("foo");
    block_on(view.refresh(&store));
    assert!(view.articles().is_empty());
    assert!(view.no_articles());
    assert_eq!(view.heading(), "Foo");
    assert_eq!(view.description(), DEFAULT_CATEGORY_DESCRIPTION);
  }

  #[test]
  fn known_category_heading_uses_the_canonical_name() {
    let view = CategoryView::new("WORLD");
    assert_eq!(view.heading(), "World");
    assert_eq!(view.category(), Some(Category::World));
  }

  #[test]
  fn blank_search_submit_is_a_noop() {
    let store = StoreService::new(0);
    let mut view = SearchView::new();
    view.set_term("climate");
    assert!(block_on(view.search(&store)));
    assert_eq!(ids(&view.articles()), vec![1]);

    // Whitespace-only input keeps the previous query and results.
    view.set_term("   ");
    assert!(!block_on(view.search(&store)));
    assert_eq!(view.submitted(), Some("climate"));
    assert_eq!(ids(&view.articles()), vec![1]);
  }

  #[test]
  fn search_trims_the_term() {
    let store = StoreService::new(0);
    let mut view = SearchView::new();
    view.set_term("  climate  ");
    assert!(block_on(view.search(&store)));
    assert_eq!(view.submitted(), Some("climate"));
  }

  #[test]
  fn stale_search_response_is_discarded() {
    let store = StoreService::new(0);
    let mut view = SearchView::new();

    view.set_term("climate");
    let (slow_token, slow_params) = view.submit().unwrap();

    view.set_term("economy");
    let (fast_token, fast_params) = view.submit().unwrap();

    // The newer request resolves first.
    let source = block_on(store.fetch_all());
    assert!(view.apply(fast_token, query(source, &fast_params)));
    let newer = ids(&view.articles());

    // The older, slower response arrives late and must not win.
    assert!(!view.apply(slow_token, query(source, &slow_params)));
    assert_eq!(ids(&view.articles()), newer);
    assert_eq!(view.submitted(), Some("economy"));
  }

  #[test]
  fn search_filter_and_sort_apply_over_results() {
    let store = StoreService::new(0);
    let mut view = SearchView::new();
    view.set_term("economy");
    assert!(block_on(view.search(&store)));
    assert_eq!(view.result_count(), 2);

    view.set_filter(CategoryFilter::Only(Category::Business));
    view.set_sort(SortKey::Oldest);
    assert_eq!(ids(&view.articles()), vec![6, 2]);
  }
}

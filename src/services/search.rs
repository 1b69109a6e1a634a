use actix_web::{
  get, web, HttpResponse,
  Error
};

use crate::error::*;
use crate::app::*;
use crate::forms::article::*;
use crate::forms::search::*;
use crate::query::*;
use crate::store::StoreService;
use crate::views::SearchView;

/// Search results.  A blank query is the empty search state, not an
/// error; the text match runs over title, excerpt and tags.
#[get("/search")]
async fn search(
  cfg: web::Data<SearchService>,
  store: web::Data<StoreService>,
  req: web::Query<ArticleRequest>,
) -> Result<HttpResponse, Error> {
  let req = req.into_inner();

  let mut view = SearchView::new();
  view.set_term(req.q.as_deref().unwrap_or(""));
  view.set_sort(req.sort_key(SortKey::parse(&cfg.default_sort)));

  match req.category_param() {
    CategoryParam::All => (),
    CategoryParam::Known(cat) => view.set_filter(CategoryFilter::Only(cat)),
    CategoryParam::Unknown => {
      // Unknown filter category: nothing can match.
      return Ok(HttpResponse::Ok().json(SearchPage {
        query: req.search_term(),
        results: Vec::new(),
        results_count: 0,
        no_results: req.search_term().is_some(),
      }));
    },
  };

  view.search(&store).await;

  let results = view.articles();
  Ok(HttpResponse::Ok().json(SearchPage {
    query: view.submitted().map(str::to_string),
    results_count: results.len(),
    no_results: view.no_results(),
    results,
  }))
}

#[derive(Debug, Clone)]
pub struct SearchService {
  pub default_sort: String,
}

impl Default for SearchService {
  fn default() -> Self {
    SearchService {
      default_sort: "relevance".to_string(),
    }
  }
}

impl super::Service for SearchService {
  fn load_app_config(&mut self, config: &AppConfig, _prefix: &str) -> Result<()> {
    if let Some(sort) = config.get_str("Search.default_sort")? {
      self.default_sort = sort;
    }
    Ok(())
  }

  fn api_config(&self, web: &mut web::ServiceConfig) {
    web
      .data(self.clone())
      .service(search);
  }
}

pub fn new_factory() -> SearchService {
  Default::default()
}

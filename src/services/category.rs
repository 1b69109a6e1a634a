use actix_web::{
  get, web, HttpResponse,
  Error
};

use crate::error::*;
use crate::app::*;
use crate::forms::category::*;
use crate::query::SortKey;
use crate::store::StoreService;
use crate::views::CategoryView;

/// Category listing.  Unknown identifiers get a 200 with an empty list
/// and the no-articles flag set, never an error.
#[get("/categories/{ident}")]
async fn get_category(
  cfg: web::Data<CategoryService>,
  store: web::Data<StoreService>,
  ident: web::Path<String>,
  req: web::Query<SortRequest>,
) -> Result<HttpResponse, Error> {
  let mut view = CategoryView::new(&ident);
  view.set_sort(req.sort_key(SortKey::parse(&cfg.default_sort)));
  view.refresh(&store).await;

  let articles = view.articles();
  Ok(HttpResponse::Ok().json(CategoryPage {
    heading: view.heading(),
    description: view.description(),
    no_articles: view.no_articles(),
    articles_count: articles.len(),
    articles,
  }))
}

#[derive(Debug, Clone)]
pub struct CategoryService {
  pub default_sort: String,
}

impl Default for CategoryService {
  fn default() -> Self {
    CategoryService {
      default_sort: "latest".to_string(),
    }
  }
}

impl super::Service for CategoryService {
  fn load_app_config(&mut self, config: &AppConfig, _prefix: &str) -> Result<()> {
    if let Some(sort) = config.get_str("Category.default_sort")? {
      self.default_sort = sort;
    }
    Ok(())
  }

  fn api_config(&self, web: &mut web::ServiceConfig) {
    web
      .data(self.clone())
      .service(get_category);
  }
}

pub fn new_factory() -> CategoryService {
  Default::default()
}

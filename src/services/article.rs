use actix_web::{
  get, web, HttpResponse,
  Error
};

use crate::error::*;
use crate::app::*;
use crate::forms::article::*;
use crate::models::Article;
use crate::query::*;
use crate::store::StoreService;

/// Get list of articles, filtered and sorted by the query engine.
#[get("/articles")]
async fn list(
  store: web::Data<StoreService>,
  req: web::Query<ArticleRequest>,
) -> Result<HttpResponse, Error> {
  let req = req.into_inner();

  let filter = match req.category_param() {
    CategoryParam::All => CategoryFilter::All,
    CategoryParam::Known(cat) => CategoryFilter::Only(cat),
    CategoryParam::Unknown => {
      // Unknown categories are an empty state, not an error.
      return Ok(HttpResponse::Ok().json(ArticleList::<&Article> {
        articles: Vec::new(),
        articles_count: 0,
      }));
    },
  };

  let params = QueryParams {
    filter,
    search: req.search_term(),
    sort: req.sort_key(SortKey::Latest),
  };
  let source = store.fetch_all().await;
  let articles = query(source, &params);

  Ok(HttpResponse::Ok().json(ArticleList {
    articles_count: articles.len(),
    articles,
  }))
}

/// Get article by id, with its related set.
#[get("/articles/{id}")]
async fn get_article(
  store: web::Data<StoreService>,
  id: web::Path<i32>,
) -> Result<HttpResponse, Error> {
  let id = id.into_inner();

  if let Some(article) = store.fetch_article(id).await {
    let related = store.fetch_related(article).await;
    Ok(HttpResponse::Ok().json(ArticleOut {
      article: ArticleDetail {
        article,
        related,
      },
    }))
  } else {
    Ok(HttpResponse::NotFound().finish())
  }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleService {
}

impl super::Service for ArticleService {
  fn load_app_config(&mut self, _config: &AppConfig, _prefix: &str) -> Result<()> {
    Ok(())
  }

  fn api_config(&self, web: &mut web::ServiceConfig) {
    web
      .data(self.clone())
      .service(list)
      .service(get_article);
  }
}

pub fn new_factory() -> ArticleService {
  Default::default()
}

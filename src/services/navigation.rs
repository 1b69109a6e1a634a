use actix_web::{
  get, web, HttpResponse,
  Error
};

use crate::error::*;
use crate::app::*;
use crate::forms::navigation::*;
use crate::models::CATEGORIES;

/// Category list for the navigation chrome.
#[get("/categories")]
async fn list(
  _cfg: web::Data<NavigationService>,
) -> Result<HttpResponse, Error> {
  let categories = CATEGORIES
    .iter()
    .map(|cat| NavCategory {
      name: cat.name(),
      slug: cat.slug(),
    })
    .collect();

  Ok(HttpResponse::Ok().json(Navigation { categories }))
}

#[derive(Debug, Clone, Default)]
pub struct NavigationService {
}

impl super::Service for NavigationService {
  fn load_app_config(&mut self, _config: &AppConfig, _prefix: &str) -> Result<()> {
    Ok(())
  }

  fn api_config(&self, web: &mut web::ServiceConfig) {
    web
      .data(self.clone())
      .service(list);
  }
}

pub fn new_factory() -> NavigationService {
  Default::default()
}

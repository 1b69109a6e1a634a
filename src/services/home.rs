use actix_web::{
  get, web, HttpResponse,
  Error
};

use crate::error::*;
use crate::app::*;
use crate::forms::home::*;
use crate::store::StoreService;
use crate::views::HomeView;

/// Homepage payload: hero article, top-stories slice, category sections
/// and sidebar data.
#[get("/home")]
async fn home(
  store: web::Data<StoreService>,
) -> Result<HttpResponse, Error> {
  let view = HomeView::load(&store).await;

  let sections = view
    .sections()
    .into_iter()
    .map(|(category, articles)| CategorySection { category, articles })
    .collect();

  Ok(HttpResponse::Ok().json(HomePage {
    featured: view.featured(),
    top_stories: view.top_stories().to_vec(),
    sections,
    most_read: view.most_read().to_vec(),
    trending_topics: view.trending_topics().to_vec(),
  }))
}

#[derive(Debug, Clone, Default)]
pub struct HomeService {
}

impl super::Service for HomeService {
  fn load_app_config(&mut self, _config: &AppConfig, _prefix: &str) -> Result<()> {
    Ok(())
  }

  fn api_config(&self, web: &mut web::ServiceConfig) {
    web
      .data(self.clone())
      .service(home);
  }
}

pub fn new_factory() -> HomeService {
  Default::default()
}

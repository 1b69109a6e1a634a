use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NavCategory {
  pub name: &'static str,
  pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct Navigation {
  pub categories: Vec<NavCategory>,
}

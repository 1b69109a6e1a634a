use serde::Serialize;

use crate::models::*;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage<'a> {
  pub featured: Option<&'a Article>,
  pub top_stories: Vec<&'a Article>,
  pub sections: Vec<CategorySection<'a>>,
  pub most_read: Vec<&'a Article>,
  pub trending_topics: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct CategorySection<'a> {
  pub category: Category,
  pub articles: Vec<&'a Article>,
}

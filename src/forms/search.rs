use serde::Serialize;

use crate::models::*;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<'a> {
  /// The submitted (trimmed) query; `None` when nothing was searched.
  pub query: Option<String>,
  pub results: Vec<&'a Article>,
  pub results_count: usize,
  pub no_results: bool,
}

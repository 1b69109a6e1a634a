use std::fmt;

use serde::{Deserialize, Serialize};

use slug::slugify;

/// Fixed set of sections the article corpus is partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  World,
  Politics,
  Business,
  Sports,
  Entertainment,
}

pub static CATEGORIES: [Category; 5] = [
  Category::World,
  Category::Politics,
  Category::Business,
  Category::Sports,
  Category::Entertainment,
];

impl Category {
  pub fn name(&self) -> &'static str {
    match self {
      Category::World => "World",
      Category::Politics => "Politics",
      Category::Business => "Business",
      Category::Sports => "Sports",
      Category::Entertainment => "Entertainment",
    }
  }

  /// Route identifier, e.g. "world" for `/categories/world`.
  pub fn slug(&self) -> String {
    slugify(self.name())
  }

  pub fn description(&self) -> &'static str {
    match self {
      Category::World => {
        "Breaking news and in-depth coverage of global events, international affairs, and worldwide developments."
      },
      Category::Politics => {
        "Political analysis, policy updates, election coverage, and governmental affairs from around the world."
      },
      Category::Business => {
        "Market trends, economic analysis, corporate news, and financial insights for informed decision-making."
      },
      Category::Sports => {
        "Latest scores, athlete profiles, championship coverage, and sports analysis across all major leagues."
      },
      Category::Entertainment => {
        "Celebrity news, movie reviews, music updates, and entertainment industry insights."
      },
    }
  }

  /// Resolve a category identifier (name or slug, case-insensitive).
  /// Unknown identifiers are not an error, they resolve to `None` and the
  /// caller renders an empty state.
  pub fn resolve(ident: &str) -> Option<Category> {
    let ident = ident.trim().to_lowercase();
    CATEGORIES.iter().find(|c| c.slug() == ident).copied()
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolve_is_case_insensitive() {
    assert_eq!(Category::resolve("world"), Some(Category::World));
    assert_eq!(Category::resolve("World"), Some(Category::World));
    assert_eq!(Category::resolve("ENTERTAINMENT"), Some(Category::Entertainment));
    assert_eq!(Category::resolve(" sports "), Some(Category::Sports));
  }

  #[test]
  fn resolve_unknown_is_none() {
    assert_eq!(Category::resolve("foo"), None);
    assert_eq!(Category::resolve(""), None);
  }

  #[test]
  fn slugs_are_lowercase_names() {
    for cat in CATEGORIES.iter() {
      assert_eq!(cat.slug(), cat.name().to_lowercase());
    }
  }
}

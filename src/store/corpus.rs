use std::collections::HashMap;

use crate::models::*;

// Fixed corpus, loaded once at startup and never mutated.  Stands in for
// a future data service; replace these statics with a real loader when
// one exists.

fn article(
  id: i32,
  title: &str,
  excerpt: &str,
  content: &str,
  author: &str,
  published_at: &str,
  category: Category,
  image_url: &str,
  read_time: u32,
  tags: &[&str],
) -> Article {
  Article {
    id,
    title: title.to_string(),
    excerpt: excerpt.to_string(),
    content: content.to_string(),
    author: author.to_string(),
    published_at: published_at.to_string(),
    category,
    image_url: image_url.to_string(),
    read_time,
    tags: tags.iter().map(|tag| tag.to_string()).collect(),
  }
}

static CLIMATE_SUMMIT_BODY: &'static str = r#"
<p>In a landmark decision that could reshape the global response to climate change, world leaders at the International Climate Summit have reached an unprecedented agreement to reduce carbon emissions by 50% over the next decade.</p>

<p>The agreement, signed by representatives from 195 countries, marks the most ambitious commitment to environmental action in history. The summit, held in Geneva, brought together heads of state, environmental scientists, and industry leaders in what many are calling a turning point for global climate policy.</p>

<h3>Key Provisions of the Agreement</h3>

<ul>
  <li>A binding commitment to reduce carbon emissions by 50% by 2035</li>
  <li>$500 billion in funding for renewable energy infrastructure</li>
  <li>Mandatory carbon pricing mechanisms for all participating nations</li>
  <li>Technology transfer programs to support developing countries</li>
</ul>

<h3>Implementation Challenges</h3>

<p>Despite the enthusiasm surrounding the agreement, experts acknowledge significant implementation challenges lie ahead. The transition to renewable energy sources will require massive infrastructure investments and coordinated international cooperation.</p>

<p>The next phase of the agreement will involve detailed national implementation plans, which each country must submit within six months. Regular review sessions will be held annually to track progress and adjust targets as needed.</p>
"#;

lazy_static! {
  /// All articles in corpus order.  Ordering matters: the homepage featured
  /// article and top-stories slice are index based.
  pub static ref CORPUS: Vec<Article> = vec![
    article(
      1,
      "Global Climate Summit Reaches Historic Agreement on Carbon Reduction",
      "World leaders unite in unprecedented commitment to reduce carbon emissions by 50% over the next decade, marking a turning point in climate action.",
      CLIMATE_SUMMIT_BODY,
      "Sarah Johnson",
      "2025-01-01T08:00:00Z",
      Category::World,
      "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=800&h=600&fit=crop",
      8,
      &["Climate", "Politics", "Environment"],
    ),
    article(
      2,
      "Tech Innovation Drives Economic Growth in Emerging Markets",
      "Artificial intelligence and renewable energy sectors show remarkable expansion in developing economies worldwide.",
      "Full article content here...",
      "Michael Chen",
      "2025-01-01T06:30:00Z",
      Category::Business,
      "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&h=600&fit=crop",
      6,
      &["Technology", "Economy", "Innovation"],
    ),
    article(
      3,
      "Olympic Games Preparation Intensifies as Host City Unveils New Venues",
      "State-of-the-art facilities showcase sustainable design principles while preparing to welcome athletes from around the globe.",
      "Full article content here...",
      "Emma Rodriguez",
      "2025-01-01T05:15:00Z",
      Category::Sports,
      "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=800&h=600&fit=crop",
      5,
      &["Olympics", "Sports", "Architecture"],
    ),
    article(
      4,
      "Breakthrough in Medical Research Offers Hope for Rare Disease Patients",
      "Scientists announce promising results from clinical trials of new gene therapy treatment.",
      "Full article content here...",
      "Dr. James Wilson",
      "2025-01-01T04:00:00Z",
      Category::World,
      "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=800&h=600&fit=crop",
      7,
      &["Medicine", "Research", "Health"],
    ),
    article(
      5,
      "Hollywood's Biggest Stars Gather for Charity Gala",
      "Annual fundraising event raises millions for education initiatives in underserved communities.",
      "Full article content here...",
      "Lisa Thompson",
      "2024-12-31T22:00:00Z",
      Category::Entertainment,
      "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=800&h=600&fit=crop",
      4,
      &["Entertainment", "Charity", "Celebrities"],
    ),
    article(
      6,
      "Financial Markets Show Strong Performance Despite Global Uncertainties",
      "Investors remain optimistic as major indices reach new heights driven by technology and healthcare sectors.",
      "Full article content here...",
      "Robert Kim",
      "2024-12-31T20:30:00Z",
      Category::Business,
      "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=800&h=600&fit=crop",
      6,
      &["Finance", "Markets", "Economy"],
    ),
    article(
      7,
      "Congressional Leaders Announce Bipartisan Infrastructure Bill",
      "New legislation promises to modernize transportation networks and expand broadband access nationwide.",
      "Full article content here...",
      "David Martinez",
      "2024-12-31T18:00:00Z",
      Category::Politics,
      "https://images.unsplash.com/photo-1500375592092-40eb2168fd21?w=800&h=600&fit=crop",
      9,
      &["Politics", "Infrastructure", "Bipartisan"],
    ),
  ];

  /// Category partition of the corpus, built once.  Lists keep corpus order.
  pub static ref BY_CATEGORY: HashMap<Category, Vec<&'static Article>> = {
    let mut map: HashMap<Category, Vec<&'static Article>> = HashMap::new();
    for cat in CATEGORIES.iter() {
      map.insert(*cat, CORPUS.iter().filter(|a| a.category == *cat).collect());
    }
    map
  };
}

/// Sidebar topics shown on the homepage.
pub static TRENDING_TOPICS: [&'static str; 5] = [
  "Climate Change",
  "AI Innovation",
  "Olympic Games",
  "Medical Breakthrough",
  "Global Economy",
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_are_unique() {
    let mut ids: Vec<i32> = CORPUS.iter().map(|a| a.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), CORPUS.len());
  }

  #[test]
  fn all_timestamps_parse() {
    for a in CORPUS.iter() {
      assert!(a.published_instant().is_some(), "article {} has a bad timestamp", a.id);
    }
  }

  #[test]
  fn partition_covers_the_corpus() {
    let total: usize = BY_CATEGORY.values().map(|v| v.len()).sum();
    assert_eq!(total, CORPUS.len());
    for (cat, articles) in BY_CATEGORY.iter() {
      assert!(articles.iter().all(|a| a.category == *cat));
    }
  }
}

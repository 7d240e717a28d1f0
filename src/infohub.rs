//! Info Hub
//!
//! Article search for the city guides. Results keep dataset order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::dataset::Article;

/// Words per minute used for the reading time badge
pub const WORDS_PER_MINUTE: usize = 200;

/// Active info hub filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFilter {
    pub query: String,
    pub category: Option<String>,
    pub city: Option<City>,
}

impl ArticleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(city: Option<City>) -> Self {
        Self {
            city,
            ..Self::default()
        }
    }

    /// Query matches title, content or any tag, case-insensitively
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(city) = self.city {
            if article.city != city {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &article.category != category {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        article.title.to_lowercase().contains(&query)
            || article.content.to_lowercase().contains(&query)
            || article
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }

    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        let matched: Vec<&Article> = articles.iter().filter(|a| self.matches(a)).collect();
        tracing::debug!(
            query = %self.query,
            category = ?self.category,
            matched = matched.len(),
            "Article filter evaluated"
        );
        matched
    }

    /// Select a category chip; picking the active one clears it
    pub fn toggle_category(&mut self, category: &str) {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_string());
        }
    }

    /// Reset query and category; the city stays
    pub fn clear(&mut self) {
        self.query.clear();
        self.category = None;
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.category.is_some()
    }
}

/// Distinct categories in first-seen order
pub fn categories(articles: &[Article]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for article in articles {
        if !seen.contains(&article.category) {
            seen.push(article.category.clone());
        }
    }
    seen
}

/// Estimated minutes to read `content`, never less than one
pub fn reading_time_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Card date, e.g. `Nov 10, 2023`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn articles() -> Vec<Article> {
        Dataset::bundled().unwrap().articles
    }

    #[test]
    fn test_no_filter_keeps_order() {
        let all = articles();
        let ids: Vec<u32> = ArticleFilter::new().apply(&all).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_city_filter() {
        let all = articles();
        let matched = ArticleFilter::with_city(Some(City::Dublin)).apply(&all);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|a| a.city == City::Dublin));
    }

    #[test]
    fn test_query_matches_tags() {
        let all = articles();
        let filter = ArticleFilter {
            query: "dog tax".into(),
            ..ArticleFilter::default()
        };
        let matched = filter.apply(&all);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let all = articles();
        let mut filter = ArticleFilter::new();
        filter.toggle_category("Health");

        let matched = filter.apply(&all);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|a| a.category == "Health"));
    }

    #[test]
    fn test_toggle_category_twice_clears() {
        let mut filter = ArticleFilter::new();
        filter.toggle_category("Legal");
        filter.toggle_category("Legal");
        assert_eq!(filter.category, None);

        filter.toggle_category("Legal");
        filter.toggle_category("Housing");
        assert_eq!(filter.category.as_deref(), Some("Housing"));
    }

    #[test]
    fn test_clear_keeps_city() {
        let mut filter = ArticleFilter::with_city(Some(City::Calgary));
        filter.query = "winter".into();
        filter.toggle_category("Health");
        assert!(filter.is_active());

        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.city, Some(City::Calgary));
    }

    #[test]
    fn test_categories_first_seen() {
        assert_eq!(
            categories(&articles()),
            vec!["Legal", "Recreation", "Health", "Transportation", "Housing"]
        );
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes("one two three"), 1);
        assert_eq!(reading_time_minutes(&"word ".repeat(200)), 1);
        assert_eq!(reading_time_minutes(&"word ".repeat(201)), 2);
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 10).unwrap();
        assert_eq!(format_date(date), "Nov 10, 2023");

        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(format_date(date), "Feb 1, 2024");
    }
}

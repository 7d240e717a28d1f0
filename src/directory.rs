//! Service Directory
//!
//! Filter, sort and paginate the provider listings. Every step is a pure
//! function of its inputs; the directory page keeps the filter in signals and
//! re-runs [`DirectoryQuery::run`] whenever one of them changes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::city::City;
use crate::dataset::{ServiceCategory, ServiceProvider};

/// Listings per directory page
pub const PAGE_SIZE: usize = 4;

/// Active directory filters
///
/// All set predicates must hold. An empty query, an empty category set and
/// no city each mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryFilter {
    pub query: String,
    pub categories: BTreeSet<u32>,
    pub city: Option<City>,
}

impl DirectoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, provider: &ServiceProvider) -> bool {
        if let Some(city) = self.city {
            if provider.city != city {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        if !query.is_empty()
            && !provider.name.to_lowercase().contains(&query)
            && !provider.description.to_lowercase().contains(&query)
        {
            return false;
        }

        self.categories.is_empty() || self.categories.contains(&provider.category)
    }

    /// Add the category if absent, remove it if present
    pub fn toggle_category(&mut self, id: u32) {
        if !self.categories.remove(&id) {
            self.categories.insert(id);
        }
    }

    /// Drop the query and category chips; the city stays
    pub fn clear(&mut self) {
        self.query.clear();
        self.categories.clear();
    }

    /// Whether anything beyond the city narrows the results
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || !self.categories.is_empty()
    }

    /// Number shown on the filter button badge
    pub fn active_count(&self) -> usize {
        self.categories.len()
    }
}

/// Directory sort orders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Dataset order
    #[default]
    Listing,
    /// Highest rating first
    Rating,
    /// Alphabetical, case-insensitive
    Name,
    /// Newest listing first
    Recent,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Listing,
        SortOrder::Rating,
        SortOrder::Name,
        SortOrder::Recent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Listing => "listing",
            SortOrder::Rating => "rating",
            SortOrder::Name => "name",
            SortOrder::Recent => "recent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Listing => "Featured",
            SortOrder::Rating => "Top rated",
            SortOrder::Name => "Name (A-Z)",
            SortOrder::Recent => "Newest",
        }
    }

    /// Stable sort in place; ties keep their incoming order
    pub fn apply(&self, items: &mut [&ServiceProvider]) {
        match self {
            SortOrder::Listing => {}
            SortOrder::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOrder::Name => items.sort_by_cached_key(|p| p.name.to_lowercase()),
            SortOrder::Recent => items.sort_by(|a, b| b.listed_on.cmp(&a.listed_on)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "listing" | "featured" => Ok(SortOrder::Listing),
            "rating" => Ok(SortOrder::Rating),
            "name" => Ok(SortOrder::Name),
            "recent" | "newest" => Ok(SortOrder::Recent),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, always within `1..=total_pages`
    pub page: usize,
    /// At least 1, even when there are no items
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// Cut `items` into pages of `page_size` and return the requested one
///
/// `page` is 1-based and clamped into range. Empty input yields a single
/// empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
        total_items,
    }
}

/// Filter, sort and page request over the provider list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    pub filter: DirectoryFilter,
    pub sort: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            filter: DirectoryFilter::default(),
            sort: SortOrder::default(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl DirectoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.filter.query = query.into();
        self
    }

    pub fn categories(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.filter.categories = ids.into_iter().collect();
        self
    }

    pub fn city(mut self, city: Option<City>) -> Self {
        self.filter.city = city;
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Matching providers in sort order, unpaged
    pub fn matching<'a>(&self, providers: &'a [ServiceProvider]) -> Vec<&'a ServiceProvider> {
        let mut matched: Vec<&ServiceProvider> = providers
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect();
        self.sort.apply(&mut matched);

        tracing::debug!(
            query = %self.filter.query,
            categories = self.filter.categories.len(),
            sort = %self.sort,
            matched = matched.len(),
            "Directory query evaluated"
        );

        matched
    }

    /// Filter, then sort, then paginate
    pub fn run(&self, providers: &[ServiceProvider]) -> Page<ServiceProvider> {
        let matched = self.matching(providers);
        paginate(&matched, self.page, self.page_size).map(|p| p.clone())
    }
}

/// Directory result layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryView {
    #[default]
    List,
    Grid,
}

impl DirectoryView {
    pub fn toggled(self) -> Self {
        match self {
            DirectoryView::List => DirectoryView::Grid,
            DirectoryView::Grid => DirectoryView::List,
        }
    }
}

/// Category name for a provider, `"Other"` when the id is unknown
pub fn category_name(categories: &[ServiceCategory], id: u32) -> &str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or("Other")
}

/// Names of the selected categories, in category list order
pub fn selected_category_names<'a>(
    categories: &'a [ServiceCategory],
    selected: &BTreeSet<u32>,
) -> Vec<&'a str> {
    categories
        .iter()
        .filter(|c| selected.contains(&c.id))
        .map(|c| c.name.as_str())
        .collect()
}

/// Parse a comma separated list of category ids, skipping junk
pub fn parse_category_list(raw: &str) -> BTreeSet<u32> {
    raw.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use std::collections::HashSet;

    fn providers() -> Vec<ServiceProvider> {
        Dataset::bundled().unwrap().providers
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let all = providers();
        let matched = DirectoryQuery::new().matching(&all);
        assert_eq!(matched.len(), all.len());
    }

    #[test]
    fn test_filter_is_subset_and_satisfies_predicates() {
        let all = providers();
        let query = DirectoryQuery::new()
            .query("pet")
            .categories([1, 4])
            .city(Some(City::Amsterdam));

        let matched = query.matching(&all);
        assert!(matched.len() <= all.len());
        assert!(!matched.is_empty());
        for p in matched {
            assert!(all.contains(p));
            assert_eq!(p.city, City::Amsterdam);
            assert!(p.category == 1 || p.category == 4);
            assert!(
                p.name.to_lowercase().contains("pet")
                    || p.description.to_lowercase().contains("pet")
            );
        }
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let all = providers();
        let matched = DirectoryQuery::new().query("  GROOMING ").matching(&all);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Calgary Pawfect Grooming");
    }

    #[test]
    fn test_city_and_category_are_anded() {
        let all = providers();
        // Category 2 (Veterinary) only exists in Dublin
        let matched = DirectoryQuery::new()
            .categories([2])
            .city(Some(City::Calgary))
            .matching(&all);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_rating_sort_non_increasing() {
        let all = providers();
        let matched = DirectoryQuery::new().sort(SortOrder::Rating).matching(&all);
        for pair in matched.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let all = providers();
        let matched = DirectoryQuery::new().sort(SortOrder::Rating).matching(&all);
        // Providers 1 and 6 tie at 4.8 and keep dataset order
        let ids: Vec<u32> = matched.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 6, 3, 4, 5]);
    }

    #[test]
    fn test_name_sort_non_decreasing() {
        let all = providers();
        let matched = DirectoryQuery::new().sort(SortOrder::Name).matching(&all);
        for pair in matched.windows(2) {
            assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }
    }

    #[test]
    fn test_recent_sort_newest_first() {
        let all = providers();
        let matched = DirectoryQuery::new().sort(SortOrder::Recent).matching(&all);
        assert_eq!(matched[0].id, 6);
        for pair in matched.windows(2) {
            assert!(pair[0].listed_on >= pair[1].listed_on);
        }
    }

    #[test]
    fn test_pages_partition_the_results() {
        let all = providers();
        let base = DirectoryQuery::new().sort(SortOrder::Name);
        let first = base.clone().run(&all);
        assert_eq!(first.total_items, all.len());
        assert_eq!(first.total_pages, 2);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let p = base.clone().page(page).run(&all);
            assert!(p.items.len() <= PAGE_SIZE);
            seen.extend(p.items.into_iter().map(|p| p.id));
        }

        let unique: HashSet<u32> = seen.iter().copied().collect();
        assert_eq!(seen.len(), all.len());
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_page_is_clamped() {
        let items: Vec<u32> = (0..10).collect();

        let last = paginate(&items, 99, 4);
        assert_eq!(last.page, 3);
        assert_eq!(last.items, vec![8, 9]);

        let first = paginate(&items, 0, 4);
        assert_eq!(first.page, 1);
        assert!(!first.has_previous());
        assert!(first.has_next());
    }

    #[test]
    fn test_empty_input_is_one_empty_page() {
        let page = paginate::<u32>(&[], 3, PAGE_SIZE);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut filter = DirectoryFilter::new();
        filter.city = Some(City::Dublin);
        filter.query = "vet".into();
        filter.toggle_category(2);
        filter.toggle_category(5);
        filter.toggle_category(2);

        assert_eq!(filter.categories, BTreeSet::from([5]));
        assert!(filter.is_active());

        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.city, Some(City::Dublin));
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("rating".parse::<SortOrder>(), Ok(SortOrder::Rating));
        assert_eq!("".parse::<SortOrder>(), Ok(SortOrder::Listing));
        assert_eq!("Newest".parse::<SortOrder>(), Ok(SortOrder::Recent));
        assert!("price".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_category_helpers() {
        let dataset = Dataset::bundled().unwrap();
        assert_eq!(category_name(&dataset.categories, 3), "Grooming");
        assert_eq!(category_name(&dataset.categories, 0), "Other");

        let selected = parse_category_list("3, 1,x,,");
        assert_eq!(selected, BTreeSet::from([1, 3]));
        assert_eq!(
            selected_category_names(&dataset.categories, &selected),
            vec!["Pet Shops", "Grooming"]
        );
    }

    #[test]
    fn test_view_toggle() {
        assert_eq!(DirectoryView::List.toggled(), DirectoryView::Grid);
        assert_eq!(DirectoryView::Grid.toggled(), DirectoryView::List);
    }
}

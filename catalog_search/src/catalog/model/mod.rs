// catalog/model/mod.rs - Shared data models for client and server
//
// These structs travel between the browser, the server functions and the
// course backend. Field names follow the backend's camelCase JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Backend identifier of a course category
pub type CategoryId = i64;

/// Course difficulty level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => write!(f, "Beginner"),
            Level::Intermediate => write!(f, "Intermediate"),
            Level::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Level {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Returned when a select value or URL parameter names no known variant
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown option '{0}'")]
pub struct UnknownVariant(pub String);

/// Price band selector in the sidebar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceFilter {
    #[default]
    All,
    Free,
    Paid,
}

impl PriceFilter {
    pub const ALL: [PriceFilter; 3] = [PriceFilter::All, PriceFilter::Free, PriceFilter::Paid];

    pub fn as_key(self) -> &'static str {
        match self {
            PriceFilter::All => "all",
            PriceFilter::Free => "free",
            PriceFilter::Paid => "paid",
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceFilter::All => write!(f, "All prices"),
            PriceFilter::Free => write!(f, "Free"),
            PriceFilter::Paid => write!(f, "Paid"),
        }
    }
}

impl FromStr for PriceFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceFilter::ALL
            .into_iter()
            .find(|p| p.as_key() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Inclusive price bounds picked in the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Sort options offered by the sort dropdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    Relevance,
    Popularity,
    Rating,
    PriceLow,
    PriceHigh,
    Newest,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Relevance,
        SortOption::Popularity,
        SortOption::Rating,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Newest,
    ];

    /// Value used in `<option value=...>`
    pub fn as_key(self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::Popularity => "popularity",
            SortOption::Rating => "rating",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Newest => "newest",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::Relevance => write!(f, "Most Relevant"),
            SortOption::Popularity => write!(f, "Most Popular"),
            SortOption::Rating => write!(f, "Highest Rated"),
            SortOption::PriceLow => write!(f, "Price: Low to High"),
            SortOption::PriceHigh => write!(f, "Price: High to Low"),
            SortOption::Newest => write!(f, "Newest"),
        }
    }
}

impl FromStr for SortOption {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_key() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Sortable fields understood by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Price,
    CreatedDate,
    EnrollmentCount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Category entry from `getAllCategories`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub course_count: i64,
}

/// Catalog-wide statistics from `getSearchStats`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub min_price: f64,
    pub max_price: f64,
    #[serde(rename = "levelStats", default)]
    pub level_counts: BTreeMap<Level, i64>,
}

impl SearchStats {
    pub fn level_count(&self, level: Level) -> Option<i64> {
        self.level_counts.get(&level).copied()
    }
}

/// One course card in the results grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructor_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
    pub price: Decimal,
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub enrollment_count: i64,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_date: Option<chrono::NaiveDateTime>,
}

impl CourseSummary {
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }

    /// Discount only counts when it is strictly below the list price
    pub fn is_discounted(&self) -> bool {
        self.discount_price.is_some_and(|d| d < self.price)
    }

    /// Price the learner actually pays
    pub fn effective_price(&self) -> Decimal {
        match self.discount_price {
            Some(d) if d < self.price => d,
            _ => self.price,
        }
    }
}

/// Page metadata block of a paged backend response
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_pages: u32,
    pub total_elements: u64,
}

/// Envelope of every paged backend endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub page: PageMeta,
}

/// Results of one settled search; replaced wholesale, never merged
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub items: Vec<CourseSummary>,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl From<PagedResponse<CourseSummary>> for SearchResultPage {
    fn from(resp: PagedResponse<CourseSummary>) -> Self {
        SearchResultPage {
            items: resp.content,
            total_pages: resp.page.total_pages,
            total_elements: resp.page.total_elements,
        }
    }
}

/// Flat request for `advancedSearch`
///
/// Unset constraints are left out of the query string entirely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_discounted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_option_default() {
        assert_eq!(SortOption::default(), SortOption::Relevance);
    }

    #[test]
    fn test_sort_option_keys_parse_back() {
        for option in SortOption::ALL {
            assert_eq!(option.as_key().parse::<SortOption>(), Ok(option));
        }
        assert!("cheapest".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("beginner".parse::<Level>(), Ok(Level::Beginner));
        assert_eq!(" ADVANCED ".parse::<Level>(), Ok(Level::Advanced));
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn test_price_range_validity() {
        assert!(PriceRange::new(0.0, 100.0).is_valid());
        assert!(PriceRange::new(50.0, 50.0).is_valid());
        assert!(!PriceRange::new(150.0, 50.0).is_valid());
    }

    #[test]
    fn test_search_params_skip_unset_fields() {
        let params = SearchParams {
            page: 2,
            size: 6,
            sort_by: Some(SortField::CreatedDate),
            sort_direction: Some(SortDirection::Desc),
            ..Default::default()
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "page": 2,
                "size": 6,
                "sortBy": "createdDate",
                "sortDirection": "desc"
            })
        );
    }

    #[test]
    fn test_paged_response_into_result_page() {
        let body = serde_json::json!({
            "content": [{
                "id": 7,
                "title": "Rust for Beginners",
                "level": "BEGINNER",
                "price": 0,
                "createdDate": "2024-03-01T10:00:00"
            }],
            "page": { "totalPages": 3, "totalElements": 13 }
        });

        let resp: PagedResponse<CourseSummary> = serde_json::from_value(body).unwrap();
        let page = SearchResultPage::from(resp);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 13);
        assert_eq!(page.items[0].level, Some(Level::Beginner));
        assert!(page.items[0].is_free());
    }

    #[test]
    fn test_stats_level_counts_from_level_stats() {
        let body = serde_json::json!({
            "minPrice": 0.0,
            "maxPrice": 499.0,
            "levelStats": { "BEGINNER": 3, "ADVANCED": 1 }
        });

        let stats: SearchStats = serde_json::from_value(body).unwrap();
        assert_eq!(stats.level_count(Level::Beginner), Some(3));
        assert_eq!(stats.level_count(Level::Intermediate), None);
    }

    #[test]
    fn test_discount_only_when_lower() {
        let mut course = CourseSummary {
            id: 1,
            title: "SQL".to_string(),
            description: None,
            instructor_name: None,
            category_name: None,
            level: None,
            price: Decimal::new(100, 0),
            discount_price: Some(Decimal::new(80, 0)),
            rating: None,
            enrollment_count: 0,
            thumbnail_url: None,
            created_date: None,
        };
        assert!(course.is_discounted());
        assert_eq!(course.effective_price(), Decimal::new(80, 0));

        course.discount_price = Some(Decimal::new(120, 0));
        assert!(!course.is_discounted());
        assert_eq!(course.effective_price(), Decimal::new(100, 0));
    }
}

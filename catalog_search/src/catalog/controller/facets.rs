// catalog/controller/facets.rs - Current selection of every filter dimension
//
// FacetState is plain data. Mutations that should reset pagination go through
// SearchController, which compares query inputs before and after a change.

use std::fmt;

use crate::catalog::model::{Level, PriceFilter, PriceRange, SortOption};

#[derive(Clone, Debug, PartialEq)]
pub struct FacetState {
    /// Raw value of the search input, updated on every keystroke
    pub search_term: String,
    /// Settled value of the search input, the only one sent to the backend
    pub debounced_search_term: String,
    /// Selected category names, in selection order
    pub selected_categories: Vec<String>,
    /// Selected levels, in selection order
    pub selected_levels: Vec<Level>,
    pub price_filter: PriceFilter,
    pub price_range: PriceRange,
    pub is_free: Option<bool>,
    pub is_discounted: Option<bool>,
    pub sort_by: SortOption,
}

impl FacetState {
    pub fn new(price_range: PriceRange) -> Self {
        Self {
            search_term: String::new(),
            debounced_search_term: String::new(),
            selected_categories: Vec::new(),
            selected_levels: Vec::new(),
            price_filter: PriceFilter::All,
            price_range,
            is_free: None,
            is_discounted: None,
            sort_by: SortOption::Relevance,
        }
    }

    /// Add the category if absent, remove it if present
    pub fn toggle_category(&mut self, category: &str) {
        if self.selected_categories.iter().any(|c| c == category) {
            self.selected_categories.retain(|c| c != category);
        } else {
            self.selected_categories.push(category.to_string());
        }
    }

    pub fn toggle_level(&mut self, level: Level) {
        if self.selected_levels.contains(&level) {
            self.selected_levels.retain(|l| *l != level);
        } else {
            self.selected_levels.push(level);
        }
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.selected_categories.iter().any(|c| c == category)
    }

    pub fn is_level_selected(&self, level: Level) -> bool {
        self.selected_levels.contains(&level)
    }

    /// Reset every facet, including the search term
    pub fn clear(&mut self, price_range: PriceRange) {
        *self = FacetState::new(price_range);
    }

    /// True when both states would produce the same query, ignoring paging
    ///
    /// The raw search term is not a query input; only its debounced value is.
    pub fn same_query_inputs(&self, other: &FacetState) -> bool {
        self.debounced_search_term == other.debounced_search_term
            && self.selected_categories == other.selected_categories
            && self.selected_levels == other.selected_levels
            && self.price_filter == other.price_filter
            && self.price_range == other.price_range
            && self.is_free == other.is_free
            && self.is_discounted == other.is_discounted
            && self.sort_by == other.sort_by
    }

    /// Copy without the raw search term, used as a change-detection key
    pub fn query_snapshot(&self) -> FacetState {
        FacetState {
            search_term: String::new(),
            ..self.clone()
        }
    }

    /// Removable chips for everything that narrows the result set
    pub fn active_chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();

        let term = self.debounced_search_term.trim();
        if !term.is_empty() {
            chips.push(FilterChip::SearchTerm(term.to_string()));
        }
        chips.extend(self.selected_categories.iter().cloned().map(FilterChip::Category));
        chips.extend(self.selected_levels.iter().copied().map(FilterChip::Level));
        if self.price_filter != PriceFilter::All {
            chips.push(FilterChip::Price(self.price_filter));
        }
        if self.is_free == Some(true) {
            chips.push(FilterChip::FreeOnly);
        }
        if self.is_discounted == Some(true) {
            chips.push(FilterChip::DiscountedOnly);
        }

        chips
    }

    /// Undo the facet a chip stands for
    pub fn remove_chip(&mut self, chip: &FilterChip) {
        match chip {
            FilterChip::SearchTerm(_) => {
                self.search_term.clear();
                self.debounced_search_term.clear();
            }
            FilterChip::Category(name) => self.selected_categories.retain(|c| c != name),
            FilterChip::Level(level) => self.selected_levels.retain(|l| l != level),
            FilterChip::Price(_) => self.price_filter = PriceFilter::All,
            FilterChip::FreeOnly => self.is_free = None,
            FilterChip::DiscountedOnly => self.is_discounted = None,
        }
    }
}

/// One active facet as shown above the results grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterChip {
    SearchTerm(String),
    Category(String),
    Level(Level),
    Price(PriceFilter),
    FreeOnly,
    DiscountedOnly,
}

impl fmt::Display for FilterChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChip::SearchTerm(term) => write!(f, "\"{}\"", term),
            FilterChip::Category(name) => write!(f, "{}", name),
            FilterChip::Level(level) => write!(f, "{}", level),
            FilterChip::Price(price) => write!(f, "{}", price),
            FilterChip::FreeOnly => write!(f, "Free only"),
            FilterChip::DiscountedOnly => write!(f, "On sale"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FacetState {
        FacetState::new(PriceRange::new(0.0, 1000.0))
    }

    #[test]
    fn test_toggle_category_is_involution() {
        let mut facets = state();
        facets.toggle_category("2");
        assert_eq!(facets.selected_categories, vec!["2".to_string()]);
        facets.toggle_category("2");
        assert!(facets.selected_categories.is_empty());
    }

    #[test]
    fn test_toggle_keeps_other_members() {
        let mut facets = state();
        facets.toggle_category("Web");
        facets.toggle_category("Data");
        facets.toggle_category("Design");
        facets.toggle_category("Data");
        assert_eq!(facets.selected_categories, vec!["Web".to_string(), "Design".to_string()]);
    }

    #[test]
    fn test_toggle_level() {
        let mut facets = state();
        facets.toggle_level(Level::Advanced);
        assert!(facets.is_level_selected(Level::Advanced));
        facets.toggle_level(Level::Advanced);
        assert!(facets.selected_levels.is_empty());
    }

    #[test]
    fn test_raw_term_is_not_a_query_input() {
        let before = state();
        let mut after = before.clone();
        after.search_term = "rea".to_string();
        assert!(before.same_query_inputs(&after));

        after.debounced_search_term = "react".to_string();
        assert!(!before.same_query_inputs(&after));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut facets = state();
        facets.search_term = "rust".to_string();
        facets.debounced_search_term = "rust".to_string();
        facets.toggle_category("Web");
        facets.toggle_level(Level::Beginner);
        facets.price_filter = PriceFilter::Paid;
        facets.is_discounted = Some(true);
        facets.sort_by = SortOption::Newest;

        facets.clear(PriceRange::new(0.0, 500.0));

        assert_eq!(facets, FacetState::new(PriceRange::new(0.0, 500.0)));
    }

    #[test]
    fn test_active_chips_and_removal() {
        let mut facets = state();
        facets.debounced_search_term = "  rust ".to_string();
        facets.toggle_category("Web");
        facets.toggle_level(Level::Intermediate);
        facets.price_filter = PriceFilter::Free;
        facets.is_discounted = Some(true);

        let chips = facets.active_chips();
        assert_eq!(
            chips,
            vec![
                FilterChip::SearchTerm("rust".to_string()),
                FilterChip::Category("Web".to_string()),
                FilterChip::Level(Level::Intermediate),
                FilterChip::Price(PriceFilter::Free),
                FilterChip::DiscountedOnly,
            ]
        );

        for chip in &chips {
            facets.remove_chip(chip);
        }
        assert!(facets.active_chips().is_empty());
    }

    #[test]
    fn test_chip_labels() {
        assert_eq!(FilterChip::SearchTerm("sql".to_string()).to_string(), "\"sql\"");
        assert_eq!(FilterChip::Level(Level::Beginner).to_string(), "Beginner");
        assert_eq!(FilterChip::DiscountedOnly.to_string(), "On sale");
    }
}

// catalog/controller/query.rs - Facet state to backend request
//
// Rules are applied in a fixed order:
// 1. price range validation (skipped when the free band is selected)
// 2. category: first selected entry only, resolved to a backend id
// 3. level: first selected entry only
// 4. price band
// 5. sort lookup table
// 6. paging and the debounced search term

use crate::catalog::error::ValidationError;
use crate::catalog::model::{
    Category, CategoryId, Level, PriceFilter, SearchParams, SortDirection, SortField, SortOption,
};

use super::facets::FacetState;

/// Constraint actually sent for a multi-select facet
///
/// The backend accepts a single category and a single level, so only the
/// first selected entry reaches the query. `ignored` counts the rest.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectiveConstraint<T> {
    Unconstrained,
    First { value: T, ignored: usize },
}

impl<T> EffectiveConstraint<T> {
    pub fn from_selection<I: IntoIterator<Item = T>>(selection: I) -> Self {
        let mut iter = selection.into_iter();
        match iter.next() {
            Some(value) => EffectiveConstraint::First {
                value,
                ignored: iter.count(),
            },
            None => EffectiveConstraint::Unconstrained,
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            EffectiveConstraint::Unconstrained => None,
            EffectiveConstraint::First { value, .. } => Some(value),
        }
    }

    pub fn ignored(&self) -> usize {
        match self {
            EffectiveConstraint::Unconstrained => 0,
            EffectiveConstraint::First { ignored, .. } => *ignored,
        }
    }
}

/// Price-related request fields
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceConstraint {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub is_free: Option<bool>,
    pub is_discounted: Option<bool>,
}

/// Look up a selected category in the catalog
///
/// Selections are category names; a selection that parses as an id also
/// matches that id. Unknown names yield `None`.
pub fn resolve_category(selection: &str, catalog: &[Category]) -> Option<CategoryId> {
    catalog
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(selection.trim()))
        .or_else(|| {
            let id = selection.trim().parse::<CategoryId>().ok()?;
            catalog.iter().find(|c| c.id == id)
        })
        .map(|c| c.id)
}

pub fn effective_category(facets: &FacetState) -> EffectiveConstraint<&str> {
    EffectiveConstraint::from_selection(facets.selected_categories.iter().map(String::as_str))
}

pub fn effective_level(facets: &FacetState) -> EffectiveConstraint<Level> {
    EffectiveConstraint::from_selection(facets.selected_levels.iter().copied())
}

/// Price band rules; the free band overrides the manual range
pub fn price_constraint(facets: &FacetState) -> PriceConstraint {
    match facets.price_filter {
        PriceFilter::Free => PriceConstraint {
            min_price: Some(0.0),
            max_price: Some(0.0),
            is_free: Some(true),
            is_discounted: facets.is_discounted,
        },
        PriceFilter::Paid => PriceConstraint {
            min_price: Some(facets.price_range.min.max(1.0)),
            max_price: None,
            is_free: None,
            is_discounted: facets.is_discounted,
        },
        PriceFilter::All => PriceConstraint {
            min_price: None,
            max_price: None,
            is_free: facets.is_free,
            is_discounted: facets.is_discounted,
        },
    }
}

/// Fixed sort lookup
///
/// Ratings are not sortable server-side, so `Rating` falls back to recency.
pub fn sort_constraint(sort: SortOption) -> Option<(SortField, SortDirection)> {
    match sort {
        SortOption::Relevance => None,
        SortOption::Popularity => Some((SortField::EnrollmentCount, SortDirection::Desc)),
        SortOption::Rating => Some((SortField::CreatedDate, SortDirection::Desc)),
        SortOption::PriceLow => Some((SortField::Price, SortDirection::Asc)),
        SortOption::PriceHigh => Some((SortField::Price, SortDirection::Desc)),
        SortOption::Newest => Some((SortField::CreatedDate, SortDirection::Desc)),
    }
}

pub fn validate(facets: &FacetState) -> Result<(), ValidationError> {
    let range = facets.price_range;
    if facets.price_filter != PriceFilter::Free && !range.is_valid() {
        return Err(ValidationError::MinPriceExceedsMax {
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

/// Build the single flat request for the current facets and page
pub fn build_search_params(
    facets: &FacetState,
    page: u32,
    size: u32,
    catalog: &[Category],
) -> Result<SearchParams, ValidationError> {
    validate(facets)?;

    let category = effective_category(facets);
    if category.ignored() > 0 {
        tracing::debug!("Only the first category is sent, {} ignored", category.ignored());
    }
    let category_id = category.value().and_then(|name| {
        let id = resolve_category(name, catalog);
        if id.is_none() {
            tracing::debug!("Category '{}' not in catalog, constraint dropped", name);
        }
        id
    });

    let level = effective_level(facets);
    if level.ignored() > 0 {
        tracing::debug!("Only the first level is sent, {} ignored", level.ignored());
    }

    let price = price_constraint(facets);
    let sort = sort_constraint(facets.sort_by);

    let term = facets.debounced_search_term.trim();

    Ok(SearchParams {
        page,
        size,
        search_term: (!term.is_empty()).then(|| term.to_string()),
        category_id,
        level: level.value(),
        min_price: price.min_price,
        max_price: price.max_price,
        is_free: price.is_free,
        is_discounted: price.is_discounted,
        sort_by: sort.map(|(field, _)| field),
        sort_direction: sort.map(|(_, dir)| dir),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::PriceRange;

    fn catalog() -> Vec<Category> {
        vec![
            Category { id: 1, name: "Web Development".to_string(), course_count: 4 },
            Category { id: 2, name: "Data Science".to_string(), course_count: 3 },
        ]
    }

    fn facets() -> FacetState {
        FacetState::new(PriceRange::new(0.0, 1000.0))
    }

    #[test]
    fn test_defaults_produce_bare_request() {
        let params = build_search_params(&facets(), 0, 6, &catalog()).unwrap();
        assert_eq!(
            params,
            SearchParams {
                page: 0,
                size: 6,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_only_debounced_term_is_sent() {
        let mut f = facets();
        f.search_term = "reac".to_string();
        f.debounced_search_term = " react ".to_string();
        let params = build_search_params(&f, 0, 6, &catalog()).unwrap();
        assert_eq!(params.search_term.as_deref(), Some("react"));
    }

    #[test]
    fn test_first_category_wins() {
        let mut f = facets();
        f.toggle_category("Data Science");
        f.toggle_category("Web Development");
        let params = build_search_params(&f, 0, 6, &catalog()).unwrap();
        assert_eq!(params.category_id, Some(2));
        assert_eq!(effective_category(&f).ignored(), 1);
    }

    #[test]
    fn test_unknown_category_is_dropped() {
        let mut f = facets();
        f.toggle_category("Cooking");
        let params = build_search_params(&f, 0, 6, &catalog()).unwrap();
        assert_eq!(params.category_id, None);
    }

    #[test]
    fn test_category_resolves_by_id_string() {
        assert_eq!(resolve_category("2", &catalog()), Some(2));
        assert_eq!(resolve_category("data science", &catalog()), Some(2));
        assert_eq!(resolve_category("9", &catalog()), None);
    }

    #[test]
    fn test_first_level_wins() {
        let mut f = facets();
        f.toggle_level(Level::Advanced);
        f.toggle_level(Level::Beginner);
        let params = build_search_params(&f, 0, 6, &catalog()).unwrap();
        assert_eq!(params.level, Some(Level::Advanced));
    }

    #[test]
    fn test_paid_floor_is_one() {
        let mut f = facets();
        f.price_filter = PriceFilter::Paid;
        f.price_range = PriceRange::new(0.0, 200.0);
        let price = price_constraint(&f);
        assert_eq!(price.min_price, Some(1.0));
        assert_eq!(price.max_price, None);

        f.price_range = PriceRange::new(25.0, 200.0);
        assert_eq!(price_constraint(&f).min_price, Some(25.0));
    }

    #[test]
    fn test_all_band_forwards_flags_only() {
        let mut f = facets();
        f.price_range = PriceRange::new(10.0, 20.0);
        f.is_discounted = Some(true);
        let price = price_constraint(&f);
        assert_eq!(
            price,
            PriceConstraint {
                min_price: None,
                max_price: None,
                is_free: None,
                is_discounted: Some(true),
            }
        );
    }

    #[test]
    fn test_invalid_range_ignored_when_free() {
        let mut f = facets();
        f.price_filter = PriceFilter::Free;
        f.price_range = PriceRange::new(150.0, 50.0);
        assert!(validate(&f).is_ok());

        f.price_filter = PriceFilter::All;
        assert!(validate(&f).is_err());
    }

    #[test]
    fn test_sort_table() {
        assert_eq!(sort_constraint(SortOption::Relevance), None);
        assert_eq!(
            sort_constraint(SortOption::PriceLow),
            Some((SortField::Price, SortDirection::Asc))
        );
        assert_eq!(
            sort_constraint(SortOption::Rating),
            sort_constraint(SortOption::Newest)
        );
    }
}

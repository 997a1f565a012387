// common/mod.rs - Shared test fixtures
//
// InMemoryCatalog implements CatalogBackend over a fixed catalog of seven
// courses (three of them Beginner). It applies the same filters, sort and
// paging the real backend does, counts search calls, and records every
// request so tests can assert on exactly what was sent.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use catalog_search::catalog::backend::CatalogBackend;
use catalog_search::catalog::error::BackendError;
use catalog_search::catalog::model::*;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub const PROGRAMMING: CategoryId = 1;
pub const WEB_DEVELOPMENT: CategoryId = 2;
pub const DATA_SCIENCE: CategoryId = 3;

pub struct InMemoryCatalog {
    courses: Vec<CourseSummary>,
    categories: Vec<Category>,
    reference_available: bool,
    search_calls: AtomicUsize,
    requests: Mutex<Vec<SearchParams>>,
    next_failure: Mutex<Option<BackendError>>,
}

fn course(
    id: i64,
    title: &str,
    category: &str,
    level: Level,
    price: Decimal,
    discount_price: Option<Decimal>,
    enrollment_count: i64,
    day: u32,
) -> CourseSummary {
    CourseSummary {
        id,
        title: title.to_string(),
        description: Some(format!("Learn {} step by step.", title.to_lowercase())),
        instructor_name: Some("Ada Lindqvist".to_string()),
        category_name: Some(category.to_string()),
        level: Some(level),
        price,
        discount_price,
        rating: Some(4.0 + (id as f64) / 10.0),
        enrollment_count,
        thumbnail_url: None,
        created_date: NaiveDate::from_ymd_opt(2024, 1, day).and_then(|d| d.and_hms_opt(9, 0, 0)),
    }
}

impl InMemoryCatalog {
    pub fn seeded() -> Self {
        #[rustfmt::skip]
        let courses = vec![
            course(1, "Rust for Beginners", "Programming", Level::Beginner, Decimal::ZERO, None, 1200, 3),
            course(2, "React Fundamentals", "Web Development", Level::Beginner, Decimal::new(4999, 2), Some(Decimal::new(1999, 2)), 5400, 10),
            course(3, "Data Analysis with Pandas", "Data Science", Level::Beginner, Decimal::from(89), None, 3100, 7),
            course(4, "Advanced React Patterns", "Web Development", Level::Advanced, Decimal::from(129), None, 800, 21),
            course(5, "Async Rust in Depth", "Programming", Level::Advanced, Decimal::from(149), Some(Decimal::from(99)), 650, 28),
            course(6, "Machine Learning Basics", "Data Science", Level::Intermediate, Decimal::ZERO, None, 9100, 14),
            course(7, "CSS Layouts", "Web Development", Level::Intermediate, Decimal::from(29), None, 2300, 1),
        ];
        let categories = vec![
            Category { id: PROGRAMMING, name: "Programming".to_string(), course_count: 2 },
            Category { id: WEB_DEVELOPMENT, name: "Web Development".to_string(), course_count: 3 },
            Category { id: DATA_SCIENCE, name: "Data Science".to_string(), course_count: 2 },
        ];

        Self {
            courses,
            categories,
            reference_available: true,
            search_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            next_failure: Mutex::new(None),
        }
    }

    /// Categories and stats requests fail; searches still work
    pub fn without_reference_data() -> Self {
        Self {
            reference_available: false,
            ..Self::seeded()
        }
    }

    /// The next search call fails with `error`
    pub fn fail_next_search(&self, error: BackendError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<SearchParams> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn requests(&self) -> Vec<SearchParams> {
        self.requests.lock().unwrap().clone()
    }

    fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.categories.iter().find(|c| c.id == id).map(|c| c.name.as_str())
    }

    fn matches(&self, course: &CourseSummary, params: &SearchParams) -> bool {
        if let Some(term) = &params.search_term {
            let term = term.to_lowercase();
            if !course.title.to_lowercase().contains(&term) {
                return false;
            }
        }
        if let Some(id) = params.category_id {
            if course.category_name.as_deref() != self.category_name(id) {
                return false;
            }
        }
        if params.level.is_some() && course.level != params.level {
            return false;
        }
        let price = course.price.to_f64().unwrap_or_default();
        if params.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if params.max_price.is_some_and(|max| price > max) {
            return false;
        }
        if params.is_free == Some(true) && !course.is_free() {
            return false;
        }
        if params.is_discounted == Some(true) && !course.is_discounted() {
            return false;
        }
        true
    }
}

impl CatalogBackend for InMemoryCatalog {
    async fn advanced_search(
        &self,
        params: SearchParams,
    ) -> Result<SearchResultPage, BackendError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(params.clone());

        if let Some(error) = self.next_failure.lock().unwrap().take() {
            return Err(error);
        }

        let mut hits: Vec<CourseSummary> = self
            .courses
            .iter()
            .filter(|c| self.matches(c, &params))
            .cloned()
            .collect();

        match params.sort_by {
            Some(SortField::Price) => hits.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(SortField::CreatedDate) => hits.sort_by_key(|c| c.created_date),
            Some(SortField::EnrollmentCount) => hits.sort_by_key(|c| c.enrollment_count),
            None => {}
        }
        if params.sort_direction == Some(SortDirection::Desc) {
            hits.reverse();
        }

        let size = params.size.max(1) as usize;
        let total_elements = hits.len() as u64;
        let total_pages = hits.len().div_ceil(size) as u32;
        let items = hits
            .into_iter()
            .skip(params.page as usize * size)
            .take(size)
            .collect();

        Ok(SearchResultPage {
            items,
            total_pages,
            total_elements,
        })
    }

    async fn get_all_categories(

        &self,

        page: u32,

        size: u32,

    ) -> Result<Vec<Category>, BackendError> {
        if !self.reference_available {
            return Err(BackendError::Transport("categories unavailable".to_string()));
        }
        Ok(self
            .categories
            .iter()
            .skip((page * size) as usize)
            .take(size as usize)
            .cloned()
            .collect())
    }

    async fn get_search_stats(&self) -> Result<SearchStats, BackendError> {
        if !self.reference_available {
            return Err(BackendError::Status {
                status: 503,
                body: "stats unavailable".to_string(),
            });
        }
        let prices: Vec<f64> = self
            .courses
            .iter()
            .filter_map(|c| c.price.to_f64())
            .collect();
        let mut level_counts = BTreeMap::new();
        for level in self.courses.iter().filter_map(|c| c.level) {
            *level_counts.entry(level).or_insert(0) += 1;
        }
        Ok(SearchStats {
            min_price: prices.iter().copied().fold(f64::INFINITY, f64::min),
            max_price: prices.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            level_counts,
        })
    }
}

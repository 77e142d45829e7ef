//! Query string parameter types for API handlers.
//!
//! Fields are deserialized as optional so a missing parameter falls back to
//! its default; a present but malformed value is rejected by the extractor.

use archivist_core::error::CoreError;
use archivist_core::filter::{SortColumn, SortDirection};
use archivist_core::pagination::{clamp_limit, PageRequest, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use archivist_core::types::DbId;
use archivist_core::validation::{optional_search_term, price_range};
use archivist_db::models::product::{ProductFilter, ProductSort};
use serde::Deserialize;

/// `?page=&limit=` on paginated endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

/// `?limit=` on bounded, unpaginated lists.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

impl LimitParams {
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT)
    }
}

/// `?page=&limit=&sort_by=&sort_order=` on `/api/categories/{id}/products`.
#[derive(Debug, Default, Deserialize)]
pub struct SortedPageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl SortedPageParams {
    /// Product filter restricted to one category.
    pub fn into_category_filter(
        self,
        category_id: DbId,
    ) -> Result<(ProductFilter, PageRequest), CoreError> {
        let filter = ProductFilter {
            category_id: Some(category_id),
            sort: ProductSort::parse_optional(self.sort_by.as_deref(), ProductSort::default())?,
            direction: SortDirection::parse_optional(self.sort_order.as_deref())?,
            ..ProductFilter::default()
        };
        Ok((filter, PageRequest::new(self.page, self.limit)))
    }
}

/// Every criterion accepted by `/api/products/search`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductSearchParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
    pub is_featured: Option<bool>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ProductSearchParams {
    /// Validate the raw parameters and build the repository filter.
    pub fn into_filter(self) -> Result<(ProductFilter, PageRequest), CoreError> {
        price_range(self.min_price, self.max_price)?;
        let search = optional_search_term(self.search.as_deref())?.map(str::to_string);

        let filter = ProductFilter {
            category_id: self.category_id,
            brand_id: self.brand_id,
            min_price: self.min_price,
            max_price: self.max_price,
            in_stock: self.in_stock,
            is_featured: self.is_featured,
            search,
            sort: ProductSort::parse_optional(self.sort_by.as_deref(), ProductSort::default())?,
            direction: SortDirection::parse_optional(self.sort_order.as_deref())?,
        };
        Ok((filter, PageRequest::new(self.page, self.limit)))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_search_params_match_everything() {
        let (filter, page) = ProductSearchParams::default().into_filter().unwrap();
        assert_eq!(page, PageRequest::new(Some(1), Some(10)));
        assert_eq!(filter.sort, ProductSort::CreatedAt);
        assert_eq!(filter.direction, SortDirection::Desc);
        assert!(filter.search.is_none());
        assert!(filter.category_id.is_none());
    }

    #[test]
    fn blank_search_is_ignored_and_short_search_rejected() {
        let params = ProductSearchParams {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert!(params.into_filter().unwrap().0.search.is_none());

        let params = ProductSearchParams {
            search: Some("a".into()),
            ..Default::default()
        };
        assert_matches!(params.into_filter(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn unknown_sort_and_inverted_range_are_rejected() {
        let params = ProductSearchParams {
            sort_by: Some("popularity".into()),
            ..Default::default()
        };
        assert_matches!(
            params.into_filter(),
            Err(CoreError::Validation(msg)) if msg.starts_with("Invalid sort_by")
        );

        let params = ProductSearchParams {
            min_price: Some(50.0),
            max_price: Some(10.0),
            ..Default::default()
        };
        assert_matches!(params.into_filter(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn limit_params_are_clamped() {
        assert_eq!(LimitParams { limit: None }.limit(), 10);
        assert_eq!(LimitParams { limit: Some(500) }.limit(), 100);
        assert_eq!(LimitParams { limit: Some(0) }.limit(), 1);
    }
}

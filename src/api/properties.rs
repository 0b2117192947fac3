//! Property catalog endpoints.

use axum::extract::{Path, State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{success, ApiResult, QueryParams};
use crate::data::Catalog;
use crate::errors::AppError;
use crate::models::{
    empty_string_as_none, Amenity, Availability, PaginatedResponse, Property, PropertyQuery,
};
use crate::pricing::{self, PriceQuote};
use crate::search::{filter_properties, paginate, sort_properties};
use crate::AppState;

/// A property with the listings suggested next to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    pub property: Property,
    pub similar_properties: Vec<Property>,
}

/// Optional stay dates for a quote.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub check_out: Option<NaiveDate>,
}

/// Filter, sort and page the catalog. Shared by the JSON API and the listing page.
pub fn search_catalog(
    catalog: &Catalog,
    query: &PropertyQuery,
) -> Result<PaginatedResponse<Property>, AppError> {
    if let (Some(check_in), Some(check_out)) = (query.check_in, query.check_out) {
        if check_out <= check_in {
            return Err(AppError::Validation(
                "Check-out must be after check-in".to_string(),
            ));
        }
    }
    if [query.min_price, query.max_price]
        .iter()
        .flatten()
        .any(|bound| !bound.is_finite())
    {
        return Err(AppError::Validation(
            "Price bounds must be finite numbers".to_string(),
        ));
    }
    if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
        if min > max {
            return Err(AppError::Validation(
                "Minimum price cannot exceed maximum price".to_string(),
            ));
        }
    }

    let mut matches = filter_properties(catalog.get_all_properties(), &query.filters());
    sort_properties(&mut matches, query.sort_by(), query.sort_order());
    let owned: Vec<Property> = matches.into_iter().cloned().collect();

    Ok(paginate(&owned, query.page, query.limit))
}

/// GET /api/properties - Filtered, sorted and paginated listings.
pub async fn list_properties(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PropertyQuery>,
) -> ApiResult<PaginatedResponse<Property>> {
    let page = search_catalog(&state.catalog, &query)?;
    tracing::debug!(total = page.total, "Property search");
    success(page)
}

/// GET /api/properties/featured - Listings for the home page.
pub async fn featured_properties(State(state): State<AppState>) -> ApiResult<Vec<Property>> {
    success(state.catalog.get_featured_properties().to_vec())
}

/// GET /api/properties/:id - A property and its similar listings.
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<PropertyDetail> {
    let property = state
        .catalog
        .get_property_by_id(&id)
        .ok_or_else(|| AppError::property_not_found(&id))?;

    success(PropertyDetail {
        property: property.clone(),
        similar_properties: state
            .catalog
            .similar_properties(&id)
            .into_iter()
            .cloned()
            .collect(),
    })
}

/// GET /api/properties/:id/availability - Generated availability window.
pub async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Availability>> {
    let property = state
        .catalog
        .get_property_by_id(&id)
        .ok_or_else(|| AppError::property_not_found(&id))?;

    success(property.availability.clone())
}

/// GET /api/properties/:id/quote - Price breakdown for optional stay dates.
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    QueryParams(stay): QueryParams<StayQuery>,
) -> ApiResult<PriceQuote> {
    let property = state
        .catalog
        .get_property_by_id(&id)
        .ok_or_else(|| AppError::property_not_found(&id))?;

    success(pricing::quote(property, stay.check_in, stay.check_out)?)
}

/// GET /api/amenities - Amenity reference list.
pub async fn list_amenities(State(state): State<AppState>) -> ApiResult<Vec<Amenity>> {
    success(state.catalog.amenities().to_vec())
}

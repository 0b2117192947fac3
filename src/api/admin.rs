//! Admin dashboard endpoints.

use axum::extract::{Path, State};
use serde::Serialize;

use super::{success, ApiResponse, ApiResult};
use crate::errors::AppError;
use crate::models::{Booking, DashboardStats, Property};
use crate::AppState;

/// Rows shown in each overview panel.
const OVERVIEW_ROWS: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub stats: DashboardStats,
    pub recent_bookings: Vec<Booking>,
    pub top_properties: Vec<Property>,
}

pub async fn load_dashboard(state: &AppState) -> AdminDashboard {
    let bookings = state.bookings.list().await;
    AdminDashboard {
        stats: state.bookings.stats(state.catalog.len()).await,
        recent_bookings: bookings.into_iter().take(OVERVIEW_ROWS).collect(),
        top_properties: state
            .catalog
            .get_all_properties()
            .iter()
            .take(OVERVIEW_ROWS)
            .cloned()
            .collect(),
    }
}

/// GET /api/admin/dashboard - Overview stats and panels.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<AdminDashboard> {
    success(load_dashboard(&state).await)
}

/// GET /api/admin/bookings - All bookings in arrival order.
pub async fn list_bookings(State(state): State<AppState>) -> ApiResult<Vec<Booking>> {
    success(state.bookings.list().await)
}

/// GET /api/admin/bookings/:id - A single booking.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Booking> {
    let booking = state
        .bookings
        .get(&id)
        .await
        .ok_or_else(|| AppError::booking_not_found(&id))?;
    success(booking)
}

/// POST /api/admin/bookings/:id/confirm - Confirm a pending booking.
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Booking> {
    let booking = state.bookings.confirm(&id).await?;
    Ok(ApiResponse::new(booking).with_message("Booking confirmed"))
}

/// POST /api/admin/bookings/:id/cancel - Cancel a pending or confirmed booking.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Booking> {
    let booking = state.bookings.cancel(&id).await?;
    Ok(ApiResponse::new(booking).with_message("Booking cancelled"))
}

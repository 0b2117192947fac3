//! Booking submission endpoint.

use axum::extract::State;

use super::{is_valid_email, require, ApiResponse, ApiResult, JsonBody};
use crate::data::{Catalog, NewBooking};
use crate::errors::AppError;
use crate::models::{Booking, BookingFormData};
use crate::pricing;
use crate::AppState;

/// Check the form and price the stay. Overlaps with other bookings are not checked.
pub fn validate_booking(catalog: &Catalog, form: &BookingFormData) -> Result<NewBooking, AppError> {
    require(&form.property_id, "Property")?;
    let property = catalog
        .get_property_by_id(form.property_id.trim())
        .ok_or_else(|| AppError::property_not_found(&form.property_id))?;

    let check_in = form
        .check_in
        .ok_or_else(|| AppError::Validation("Check-in date is required".to_string()))?;
    let check_out = form
        .check_out
        .ok_or_else(|| AppError::Validation("Check-out date is required".to_string()))?;

    require(&form.first_name, "First name")?;
    require(&form.last_name, "Last name")?;
    require(&form.email, "Email")?;
    require(&form.phone, "Phone")?;
    if !is_valid_email(&form.email) {
        return Err(AppError::Validation(
            "Email address is not valid".to_string(),
        ));
    }

    if form.guests == 0 || form.guests > property.capacity.guests {
        return Err(AppError::Validation(format!(
            "Guests must be between 1 and {}",
            property.capacity.guests
        )));
    }

    let quote = pricing::quote(property, Some(check_in), Some(check_out))?;

    Ok(NewBooking {
        property_id: property.id.clone(),
        check_in,
        check_out,
        total_price: quote.total,
    })
}

/// POST /api/booking - Submit a booking request from the detail page.
pub async fn create_booking(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<BookingFormData>,
) -> ApiResult<Booking> {
    let new_booking = validate_booking(&state.catalog, &form)?;
    let booking = state.bookings.submit(new_booking, &form).await;

    tracing::info!(
        booking_id = %booking.id,
        property_id = %booking.property_id,
        check_in = %booking.check_in,
        check_out = %booking.check_out,
        guests = booking.guests,
        total_price = booking.total_price,
        "Booking received"
    );

    Ok(ApiResponse::new(booking).with_message("Booking successful!"))
}

//! In-memory booking store backing the booking form and admin dashboard.

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::{
    Booking, BookingFormData, BookingStatus, DashboardStats, Guest, PaymentStatus,
};

/// A validated booking submission ready to be recorded.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub property_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: f64,
}

/// Bookings live only for the lifetime of the process.
///
/// Submissions are appended in arrival order. Nothing checks them against
/// each other or against the generated availability.
pub struct BookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingStore {
    pub fn new(seed: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(seed),
        }
    }

    pub async fn list(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Booking> {
        self.bookings
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// Record a pending booking from the detail page form.
    pub async fn submit(&self, booking: NewBooking, form: &BookingFormData) -> Booking {
        let now = Utc::now();
        let record = Booking {
            id: uuid::Uuid::new_v4().to_string(),
            property_id: booking.property_id,
            guest: Guest {
                id: uuid::Uuid::new_v4().to_string(),
                first_name: form.first_name.trim().to_string(),
                last_name: form.last_name.trim().to_string(),
                email: form.email.trim().to_string(),
                phone: form.phone.trim().to_string(),
                avatar: None,
            },
            check_in: booking.check_in,
            check_out: booking.check_out,
            guests: form.guests,
            total_price: booking.total_price,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
            special_requests: form
                .special_requests
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            payment_status: PaymentStatus::Pending,
        };

        self.bookings.write().await.push(record.clone());
        record
    }

    /// Move a pending booking to confirmed.
    pub async fn confirm(&self, id: &str) -> Result<Booking, AppError> {
        self.transition(id, BookingStatus::Confirmed, |status| {
            status == BookingStatus::Pending
        })
        .await
    }

    /// Cancel a pending or confirmed booking.
    pub async fn cancel(&self, id: &str) -> Result<Booking, AppError> {
        self.transition(id, BookingStatus::Cancelled, |status| {
            matches!(status, BookingStatus::Pending | BookingStatus::Confirmed)
        })
        .await
    }

    async fn transition(
        &self,
        id: &str,
        next: BookingStatus,
        allowed_from: impl Fn(BookingStatus) -> bool,
    ) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::booking_not_found(id))?;

        if !allowed_from(booking.status) {
            return Err(AppError::Conflict(format!(
                "Booking {} is {} and cannot become {}",
                id,
                booking.status.as_str(),
                next.as_str()
            )));
        }

        booking.status = next;
        booking.updated_at = Utc::now();
        tracing::info!(booking_id = %id, status = next.as_str(), "Booking status changed");
        Ok(booking.clone())
    }

    pub async fn stats(&self, total_properties: usize) -> DashboardStats {
        let bookings = self.bookings.read().await;
        DashboardStats {
            total_properties,
            total_bookings: bookings.len(),
            confirmed_bookings: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Confirmed)
                .count(),
            total_revenue: bookings
                .iter()
                .filter(|b| b.payment_status == PaymentStatus::Paid)
                .map(|b| b.total_price)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock_bookings;

    fn form() -> BookingFormData {
        serde_json::from_value(serde_json::json!({
            "propertyId": "mountain-cabin",
            "checkIn": "2025-03-10",
            "checkOut": "2025-03-12",
            "guests": 3,
            "firstName": " Ada ",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phone": "+27 21 555 0100",
            "specialRequests": "   "
        }))
        .unwrap()
    }

    fn new_booking() -> NewBooking {
        NewBooking {
            property_id: "mountain-cabin".to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            total_price: 13014.0,
        }
    }

    #[tokio::test]
    async fn test_submit_records_pending_booking() {
        let store = BookingStore::new(mock_bookings());
        let booking = store.submit(new_booking(), &form()).await;

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(booking.guest.first_name, "Ada");
        assert_eq!(booking.guests, 3);
        assert!(booking.special_requests.is_none());
        assert_eq!(store.list().await.len(), 3);
        assert_eq!(store.get(&booking.id).await, Some(booking));
    }

    #[tokio::test]
    async fn test_duplicate_submissions_are_not_deduplicated() {
        let store = BookingStore::new(Vec::new());
        let first = store.submit(new_booking(), &form()).await;
        let second = store.submit(new_booking(), &form()).await;

        assert_ne!(first.id, second.id);
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_confirm_and_cancel_transitions() {
        let store = BookingStore::new(mock_bookings());

        let confirmed = store.confirm("booking-2").await.unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);

        let again = store.confirm("booking-2").await.unwrap_err();
        assert_eq!(again.error_code(), "CONFLICT");

        let cancelled = store.cancel("booking-2").await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        assert!(matches!(
            store.cancel("booking-2").await,
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            store.confirm("booking-404").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_stats_count_paid_revenue_only() {
        let store = BookingStore::new(mock_bookings());
        let stats = store.stats(2).await;

        assert_eq!(stats.total_properties, 2);
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.confirmed_bookings, 1);
        assert!((stats.total_revenue - 2450.0).abs() < f64::EPSILON);
    }
}

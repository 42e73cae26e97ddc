//! Bookings API endpoints
//!
//! Hotel and package bookings share the `/bookings` collection. Package
//! bookings carry no `userId`, so listing by user only returns hotel stays.

use crate::client::TravelClient;
use crate::error::ApiResult;
use serde::Serialize;
use wanderstay_core::models::{
    BookingRecord, BookingStatus, NewBooking, NewPackageBooking, PackageBooking,
};

/// Bookings API interface
#[derive(Clone)]
pub struct BookingsApi {
    client: TravelClient,
}

impl BookingsApi {
    pub(crate) fn new(client: TravelClient) -> Self {
        Self { client }
    }

    /// POST /bookings
    pub async fn create(&self, booking: &NewBooking) -> ApiResult<BookingRecord> {
        self.client.post("bookings", booking).await
    }

    /// POST /bookings with a package booking body
    pub async fn create_package(&self, booking: &NewPackageBooking) -> ApiResult<PackageBooking> {
        self.client.post("bookings", booking).await
    }

    /// GET /bookings/<id>
    pub async fn get(&self, id: &str) -> ApiResult<BookingRecord> {
        self.client.get(&format!("bookings/{id}"), &[]).await
    }

    /// GET /bookings?userId=<id>
    pub async fn list_for_user(&self, user_id: &str) -> ApiResult<Vec<BookingRecord>> {
        self.client.get("bookings", &[("userId", user_id)]).await
    }

    /// PATCH /bookings/<id> {"status": ...}
    pub async fn set_status(&self, id: &str, status: BookingStatus) -> ApiResult<BookingRecord> {
        self.client
            .patch(&format!("bookings/{id}"), &StatusPatch { status })
            .await
    }
}

#[derive(Debug, Serialize)]
struct StatusPatch {
    status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_patch_body() {
        let body = serde_json::to_value(StatusPatch {
            status: BookingStatus::Cancelled,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "cancelled" }));
    }
}

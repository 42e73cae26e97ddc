//! [`TravelStore`] over HTTP
//!
//! The backend has no conditional writes, so the inventory and booking status
//! compare-and-swaps read the record, compare, then patch. Two clients racing
//! between the read and the patch can still both succeed.

use crate::client::TravelClient;
use crate::error::ApiError;
use async_trait::async_trait;
use wanderstay_booking::{StoreError, StoreResult, TravelStore};
use wanderstay_core::models::{
    BookingRecord, BookingStatus, Bookmark, Hotel, NewBooking, NewPackageBooking, Package,
    PackageBooking, Place, User,
};

#[async_trait]
impl TravelStore for TravelClient {
    async fn list_hotels(&self, place_id: Option<&str>) -> StoreResult<Vec<Hotel>> {
        self.hotels()
            .list(place_id)
            .await
            .map_err(|e| e.into_store_error("place", place_id.unwrap_or_default()))
    }

    async fn get_hotel(&self, hotel_id: &str) -> StoreResult<Hotel> {
        self.hotels()
            .get(hotel_id)
            .await
            .map_err(|e| e.into_store_error("hotel", hotel_id))
    }

    async fn update_inventory(
        &self,
        hotel_id: &str,
        expected: u32,
        rooms_available: u32,
    ) -> StoreResult<Hotel> {
        let current = self.get_hotel(hotel_id).await?;
        if current.rooms_available != expected {
            return Err(StoreError::Conflict {
                current: current.rooms_available,
            });
        }

        tracing::debug!(hotel_id, expected, rooms_available, "Patching hotel inventory");
        self.hotels()
            .set_rooms_available(hotel_id, rooms_available)
            .await
            .map_err(|e| e.into_store_error("hotel", hotel_id))
    }

    async fn create_booking(&self, booking: NewBooking) -> StoreResult<BookingRecord> {
        self.bookings()
            .create(&booking)
            .await
            .map_err(ApiError::into_transport_error)
    }

    async fn get_booking(&self, booking_id: &str) -> StoreResult<BookingRecord> {
        self.bookings()
            .get(booking_id)
            .await
            .map_err(|e| e.into_store_error("booking", booking_id))
    }

    async fn patch_booking_status(
        &self,
        booking_id: &str,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> StoreResult<BookingRecord> {
        let current = self.get_booking(booking_id).await?;
        if current.status != expected {
            return Err(StoreError::StatusConflict {
                current: current.status,
            });
        }

        tracing::debug!(booking_id, %expected, %status, "Patching booking status");
        self.bookings()
            .set_status(booking_id, status)
            .await
            .map_err(|e| e.into_store_error("booking", booking_id))
    }

    async fn list_user_bookings(&self, user_id: &str) -> StoreResult<Vec<BookingRecord>> {
        self.bookings()
            .list_for_user(user_id)
            .await
            .map_err(|e| e.into_store_error("user", user_id))
    }

    async fn create_package_booking(
        &self,
        booking: NewPackageBooking,
    ) -> StoreResult<PackageBooking> {
        self.bookings()
            .create_package(&booking)
            .await
            .map_err(ApiError::into_transport_error)
    }

    async fn update_user_bookmarks(
        &self,
        user_id: &str,
        bookmarks: &[Bookmark],
    ) -> StoreResult<User> {
        self.users()
            .update_bookmarks(user_id, bookmarks)
            .await
            .map_err(|e| e.into_store_error("user", user_id))
    }

    async fn list_places(&self, query: Option<&str>) -> StoreResult<Vec<Place>> {
        self.places()
            .list(query)
            .await
            .map_err(|e| e.into_store_error("place", query.unwrap_or_default()))
    }

    async fn get_place(&self, place_id: &str) -> StoreResult<Place> {
        self.places()
            .get(place_id)
            .await
            .map_err(|e| e.into_store_error("place", place_id))
    }

    async fn list_packages(&self) -> StoreResult<Vec<Package>> {
        self.packages()
            .list()
            .await
            .map_err(|e| e.into_store_error("package", ""))
    }

    async fn get_package(&self, package_id: &str) -> StoreResult<Package> {
        self.packages()
            .get(package_id)
            .await
            .map_err(|e| e.into_store_error("package", package_id))
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<User> {
        self.users()
            .find_by_email(email)
            .await
            .map_err(|e| e.into_store_error("user", email))
    }
}

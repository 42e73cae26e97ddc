//! Persistence boundary
//!
//! The reservation engine talks to the backend only through [`TravelStore`].
//! `wanderstay-api-client` implements it over HTTP; [`InMemoryStore`]
//! implements it in process.
//!
//! [`InMemoryStore`]: crate::memory::InMemoryStore

use crate::error::StoreResult;
use async_trait::async_trait;
use wanderstay_core::models::{
    BookingRecord, BookingStatus, Bookmark, Hotel, NewBooking, NewPackageBooking, Package,
    PackageBooking, Place, User,
};

/// CRUD over the backend's `places`, `hotels`, `bookings`, `users` and
/// `packages` collections.
#[async_trait]
pub trait TravelStore: Send + Sync {
    /// Hotels, optionally restricted to one place
    async fn list_hotels(&self, place_id: Option<&str>) -> StoreResult<Vec<Hotel>>;

    async fn get_hotel(&self, hotel_id: &str) -> StoreResult<Hotel>;

    /// Set `roomsAvailable` to `rooms_available` only if it still equals
    /// `expected`. Otherwise fails with [`StoreError::Conflict`] carrying
    /// the current count.
    ///
    /// [`StoreError::Conflict`]: crate::error::StoreError::Conflict
    async fn update_inventory(
        &self,
        hotel_id: &str,
        expected: u32,
        rooms_available: u32,
    ) -> StoreResult<Hotel>;

    async fn create_booking(&self, booking: NewBooking) -> StoreResult<BookingRecord>;

    async fn get_booking(&self, booking_id: &str) -> StoreResult<BookingRecord>;

    /// Set the booking's status to `status` only if it is still `expected`.
    /// Otherwise fails with [`StoreError::StatusConflict`] carrying the
    /// current status.
    ///
    /// [`StoreError::StatusConflict`]: crate::error::StoreError::StatusConflict
    async fn patch_booking_status(
        &self,
        booking_id: &str,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> StoreResult<BookingRecord>;

    async fn list_user_bookings(&self, user_id: &str) -> StoreResult<Vec<BookingRecord>>;

    async fn create_package_booking(
        &self,
        booking: NewPackageBooking,
    ) -> StoreResult<PackageBooking>;

    /// Replace a user's bookmark list
    async fn update_user_bookmarks(
        &self,
        user_id: &str,
        bookmarks: &[Bookmark],
    ) -> StoreResult<User>;

    /// Places whose fields contain `query`, or all places
    async fn list_places(&self, query: Option<&str>) -> StoreResult<Vec<Place>>;

    async fn get_place(&self, place_id: &str) -> StoreResult<Place>;

    async fn list_packages(&self) -> StoreResult<Vec<Package>>;

    async fn get_package(&self, package_id: &str) -> StoreResult<Package>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<User>;
}

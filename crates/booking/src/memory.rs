//! In-process store
//!
//! Holds every collection behind one mutex, so the inventory
//! compare-and-swap is atomic. The state can be loaded from and saved to a
//! json-server style `db.json` file, which is what the CLI's offline mode
//! uses.

use crate::error::{StoreError, StoreResult};
use crate::store::TravelStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use wanderstay_core::models::{
    BookingRecord, BookingStatus, Bookmark, Hotel, NewBooking, NewPackageBooking, Package,
    PackageBooking, Place, User,
};
use wanderstay_core::ResultExt;

/// Every collection of the backend, as laid out in `db.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
    #[serde(default)]
    pub package_bookings: Vec<PackageBooking>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// Store operations that can be made to fail on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailPoint {
    UpdateInventory,
    CreateBooking,
    PatchBookingStatus,
    UpdateBookmarks,
}

#[derive(Debug, Clone, Copy, Default)]
struct Failures {
    skip: u32,
    remaining: u32,
}

#[derive(Default)]
struct State {
    data: Snapshot,
    failures: HashMap<FailPoint, Failures>,
}

impl State {
    fn check(&mut self, point: FailPoint) -> StoreResult<()> {
        let Some(plan) = self.failures.get_mut(&point) else {
            return Ok(());
        };
        if plan.skip > 0 {
            plan.skip -= 1;
            return Ok(());
        }
        if plan.remaining == 0 {
            return Ok(());
        }
        plan.remaining -= 1;
        Err(StoreError::transport(
            format!("injected failure at {point:?}"),
            true,
        ))
    }

    fn hotel_mut(&mut self, hotel_id: &str) -> StoreResult<&mut Hotel> {
        self.data
            .hotels
            .iter_mut()
            .find(|h| h.id == hotel_id)
            .ok_or_else(|| StoreError::not_found("hotel", hotel_id))
    }
}

/// A [`TravelStore`] kept entirely in memory.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new(data: Snapshot) -> Self {
        Self {
            state: Mutex::new(State {
                data,
                failures: HashMap::new(),
            }),
        }
    }

    /// Read a `db.json` file.
    pub fn load(path: &Path) -> wanderstay_core::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(wanderstay_core::Error::from)
            .context(format!("Failed to read {}", path.display()))?;
        let data: Snapshot = serde_json::from_str(&content)
            .map_err(wanderstay_core::Error::from)
            .context(format!("Failed to parse {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            hotels = data.hotels.len(),
            bookings = data.bookings.len(),
            "Loaded offline store"
        );
        Ok(Self::new(data))
    }

    /// Write the current state back as pretty-printed `db.json`.
    pub fn save(&self, path: &Path) -> wanderstay_core::Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        std::fs::write(path, json)
            .map_err(wanderstay_core::Error::from)
            .context(format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Saved offline store");
        Ok(())
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        self.lock().data.clone()
    }

    /// Make the next `times` calls at `point` fail with a retryable
    /// transport error.
    pub fn fail_at(&self, point: FailPoint, times: u32) {
        self.fail_after(point, 0, times);
    }

    /// Let `skip` calls at `point` through, then fail the next `times`.
    pub fn fail_after(&self, point: FailPoint, skip: u32, times: u32) {
        self.lock().failures.insert(
            point,
            Failures {
                skip,
                remaining: times,
            },
        );
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Next id in a collection of numeric-looking ids.
fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

fn contains_ci(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

#[async_trait]
impl TravelStore for InMemoryStore {
    async fn list_hotels(&self, place_id: Option<&str>) -> StoreResult<Vec<Hotel>> {
        let state = self.lock();
        Ok(state
            .data
            .hotels
            .iter()
            .filter(|h| place_id.is_none() || h.place_id.as_deref() == place_id)
            .cloned()
            .collect())
    }

    async fn get_hotel(&self, hotel_id: &str) -> StoreResult<Hotel> {
        self.lock().hotel_mut(hotel_id).map(|h| h.clone())
    }

    async fn update_inventory(
        &self,
        hotel_id: &str,
        expected: u32,
        rooms_available: u32,
    ) -> StoreResult<Hotel> {
        let mut state = self.lock();
        state.check(FailPoint::UpdateInventory)?;

        let hotel = state.hotel_mut(hotel_id)?;
        if hotel.rooms_available != expected {
            return Err(StoreError::Conflict {
                current: hotel.rooms_available,
            });
        }
        hotel.rooms_available = rooms_available;
        Ok(hotel.clone())
    }

    async fn create_booking(&self, booking: NewBooking) -> StoreResult<BookingRecord> {
        let mut state = self.lock();
        state.check(FailPoint::CreateBooking)?;

        let id = next_id(state.data.bookings.iter().map(|b| b.id.as_str()));
        let record = booking.into_record(id);
        state.data.bookings.push(record.clone());
        Ok(record)
    }

    async fn get_booking(&self, booking_id: &str) -> StoreResult<BookingRecord> {
        self.lock()
            .data
            .bookings
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("booking", booking_id))
    }

    async fn patch_booking_status(
        &self,
        booking_id: &str,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> StoreResult<BookingRecord> {
        let mut state = self.lock();
        state.check(FailPoint::PatchBookingStatus)?;

        let booking = state
            .data
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| StoreError::not_found("booking", booking_id))?;
        if booking.status != expected {
            return Err(StoreError::StatusConflict {
                current: booking.status,
            });
        }
        booking.status = status;
        Ok(booking.clone())
    }

    async fn list_user_bookings(&self, user_id: &str) -> StoreResult<Vec<BookingRecord>> {
        Ok(self
            .lock()
            .data
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_package_booking(
        &self,
        booking: NewPackageBooking,
    ) -> StoreResult<PackageBooking> {
        let mut state = self.lock();
        state.check(FailPoint::CreateBooking)?;

        let id = next_id(state.data.package_bookings.iter().map(|b| b.id.as_str()));
        let record = booking.into_record(id);
        state.data.package_bookings.push(record.clone());
        Ok(record)
    }

    async fn update_user_bookmarks(
        &self,
        user_id: &str,
        bookmarks: &[Bookmark],
    ) -> StoreResult<User> {
        let mut state = self.lock();
        state.check(FailPoint::UpdateBookmarks)?;

        let user = state
            .data
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| StoreError::not_found("user", user_id))?;
        user.bookmarks = bookmarks.to_vec();
        Ok(user.clone())
    }

    async fn list_places(&self, query: Option<&str>) -> StoreResult<Vec<Place>> {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        Ok(self
            .lock()
            .data
            .places
            .iter()
            .filter(|p| match &needle {
                None => true,
                Some(q) => {
                    contains_ci(Some(p.name.as_str()), q)
                        || contains_ci(p.city.as_deref(), q)
                        || contains_ci(p.description.as_deref(), q)
                }
            })
            .cloned()
            .collect())
    }

    async fn get_place(&self, place_id: &str) -> StoreResult<Place> {
        self.lock()
            .data
            .places
            .iter()
            .find(|p| p.id == place_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("place", place_id))
    }

    async fn list_packages(&self) -> StoreResult<Vec<Package>> {
        Ok(self.lock().data.packages.clone())
    }

    async fn get_package(&self, package_id: &str) -> StoreResult<Package> {
        self.lock()
            .data
            .packages
            .iter()
            .find(|p| p.id == package_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("package", package_id))
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<User> {
        self.lock()
            .data
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| StoreError::not_found("user", email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> InMemoryStore {
        let data: Snapshot = serde_json::from_value(json!({
            "places": [
                { "id": 1, "name": "Shimla", "city": "Shimla", "description": "Queen of hills" },
                { "id": 2, "name": "Taj Mahal", "city": "Agra" }
            ],
            "hotels": [
                { "id": 1, "placeId": 1, "name": "Ridge View", "address": "Mall Road, Shimla",
                  "pricePerNight": 3000, "roomsAvailable": 5 },
                { "id": 2, "placeId": 2, "name": "Taj Stay", "address": "Fatehabad Road, Agra",
                  "pricePerNight": 2000, "roomsAvailable": 1 }
            ],
            "users": [ { "id": 1, "name": "Asha", "email": "asha@example.com", "password": "x" } ],
            "packages": [ { "id": 1, "name": "Himachal Escape", "price": 15000 } ]
        }))
        .unwrap();
        InMemoryStore::new(data)
    }

    #[tokio::test]
    async fn test_list_hotels_by_place() {
        let store = store();
        assert_eq!(store.list_hotels(None).await.unwrap().len(), 2);
        let shimla = store.list_hotels(Some("1")).await.unwrap();
        assert_eq!(shimla.len(), 1);
        assert_eq!(shimla[0].name, "Ridge View");
    }

    #[tokio::test]
    async fn test_update_inventory_compare_and_swap() {
        let store = store();
        let hotel = store.update_inventory("1", 5, 3).await.unwrap();
        assert_eq!(hotel.rooms_available, 3);

        let err = store.update_inventory("1", 5, 4).await.unwrap_err();
        assert_eq!(err, StoreError::Conflict { current: 3 });
        assert_eq!(store.get_hotel("1").await.unwrap().rooms_available, 3);
    }

    #[tokio::test]
    async fn test_patch_status_compare_and_swap() {
        let store = store();
        let booking = store.create_booking(new_booking()).await.unwrap();

        let cancelled = store
            .patch_booking_status(&booking.id, BookingStatus::Confirmed, BookingStatus::Cancelled)
            .await
            .unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        let err = store
            .patch_booking_status(&booking.id, BookingStatus::Confirmed, BookingStatus::Cancelled)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::StatusConflict {
                current: BookingStatus::Cancelled
            }
        );
    }

    #[tokio::test]
    async fn test_missing_hotel() {
        let err = store().update_inventory("99", 1, 0).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { resource: "hotel", .. }));
    }

    fn new_booking() -> NewBooking {
        NewBooking {
            user_id: "1".into(),
            hotel_id: "1".into(),
            place_id: Some("1".into()),
            check_in: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            check_out: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            guests: 1,
            rooms: 1,
            total_price: 3360.0,
            status: BookingStatus::Confirmed,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_booking_ids_increment() {
        let store = store();
        let booking = new_booking();

        let first = store.create_booking(booking.clone()).await.unwrap();
        let second = store.create_booking(booking).await.unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(store.list_user_bookings("1").await.unwrap().len(), 2);
        assert!(store.list_user_bookings("2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_injected_failures_are_counted() {
        let store = store();
        store.fail_at(FailPoint::UpdateInventory, 1);

        let err = store.update_inventory("1", 5, 4).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(store.update_inventory("1", 5, 4).await.is_ok());
    }

    #[tokio::test]
    async fn test_failures_after_skipped_calls() {
        let store = store();
        store.fail_after(FailPoint::UpdateInventory, 1, 1);

        assert!(store.update_inventory("1", 5, 4).await.is_ok());
        assert!(store.update_inventory("1", 4, 3).await.is_err());
        assert!(store.update_inventory("1", 4, 3).await.is_ok());
    }

    #[tokio::test]
    async fn test_place_search_is_case_insensitive() {
        let store = store();
        assert_eq!(store.list_places(Some("QUEEN")).await.unwrap().len(), 1);
        assert_eq!(store.list_places(Some("agra")).await.unwrap()[0].name, "Taj Mahal");
        assert_eq!(store.list_places(Some("  ")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let store = store();
        let user = store.find_user_by_email("asha@example.com").await.unwrap();
        assert_eq!(user.id, "1");
        assert!(store.find_user_by_email("nobody@example.com").await.is_err());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = store();
        store.update_inventory("2", 1, 0).await.unwrap();
        store.save(&path).unwrap();

        let reloaded = InMemoryStore::load(&path).unwrap();
        assert_eq!(reloaded.get_hotel("2").await.unwrap().rooms_available, 0);
        assert_eq!(reloaded.snapshot(), store.snapshot());
    }

    #[test]
    fn test_load_missing_file() {
        let err = InMemoryStore::load(Path::new("/nonexistent/db.json")).err().unwrap();
        assert_eq!(err.code, wanderstay_core::ErrorCode::FileNotFound);
    }
}

//! Backend resource records
//!
//! These mirror the JSON documents served by the travel backend
//! (`places`, `hotels`, `bookings`, `users`, `packages`). Field names on the
//! wire are camelCase; identifiers may arrive as numbers or strings and are
//! always held as strings here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A hotel snapshot as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    /// Place (destination) the hotel belongs to
    #[serde(default, deserialize_with = "opt_id_from_any", skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub name: String,
    /// Free-text address, usually ending in the city name
    pub address: String,
    pub price_per_night: f64,
    pub rooms_available: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Lifecycle of a booking.
///
/// Hotel bookings start `Confirmed`; package bookings start `Pending`.
/// `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Whether moving from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of a hotel booking before the backend assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: String,
    pub hotel_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
    /// Unrounded total including tax
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl NewBooking {
    /// Attach a backend-assigned id.
    pub fn into_record(self, id: impl Into<String>) -> BookingRecord {
        BookingRecord {
            id: id.into(),
            user_id: self.user_id,
            hotel_id: self.hotel_id,
            place_id: self.place_id,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            rooms: self.rooms,
            total_price: self.total_price,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// A persisted hotel booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(deserialize_with = "id_from_any")]
    pub user_id: String,
    #[serde(deserialize_with = "id_from_any")]
    pub hotel_id: String,
    #[serde(default, deserialize_with = "opt_id_from_any", skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// A tour package. Packages carry a flat price and no room inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Fields of a package booking before the backend assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPackageBooking {
    pub package_id: String,
    pub package_name: String,
    pub price: f64,
    pub start_date: Option<String>,
    pub user_email: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl NewPackageBooking {
    pub fn into_record(self, id: impl Into<String>) -> PackageBooking {
        PackageBooking {
            id: id.into(),
            package_id: self.package_id,
            package_name: self.package_name,
            price: self.price,
            start_date: self.start_date,
            user_email: self.user_email,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// A persisted package booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageBooking {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(deserialize_with = "id_from_any")]
    pub package_id: String,
    pub package_name: String,
    pub price: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// A saved place on a user's profile.
///
/// Internal places carry a backend `id`; places found through the external
/// geocoder carry a `place_id` instead. Any other fields are kept verbatim so
/// a bookmark list survives a read-modify-write round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(default, deserialize_with = "opt_id_from_any", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Bookmark {
    /// Bookmark for a backend place.
    pub fn for_place(place: &Place) -> Self {
        Self {
            id: Some(place.id.clone()),
            place_id: None,
            name: Some(place.name.clone()),
            city: place.city.clone(),
            extra: serde_json::Map::new(),
        }
    }

    /// Whether two bookmarks refer to the same place.
    pub fn same_place(&self, other: &Bookmark) -> bool {
        if let (Some(a), Some(b)) = (&self.id, &other.id) {
            if a == b {
                return true;
            }
        }
        matches!((&self.place_id, &other.place_id), (Some(a), Some(b)) if a == b)
    }
}

/// A registered user. Credentials are never deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyId {
    Str(String),
    Int(i64),
    Uint(u64),
}

impl From<AnyId> for String {
    fn from(id: AnyId) -> Self {
        match id {
            AnyId::Str(s) => s,
            AnyId::Int(n) => n.to_string(),
            AnyId::Uint(n) => n.to_string(),
        }
    }
}

fn id_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    AnyId::deserialize(deserializer).map(String::from)
}

fn opt_id_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<AnyId>::deserialize(deserializer).map(|id| id.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hotel_deserialize_numeric_ids() {
        let hotel: Hotel = serde_json::from_value(json!({
            "id": 7,
            "placeId": 3,
            "name": "Snow Valley Resort",
            "address": "Mall Road, Shimla",
            "pricePerNight": 4500,
            "roomsAvailable": 12,
            "amenities": ["wifi", "pool"],
            "rating": 4.4
        }))
        .unwrap();

        assert_eq!(hotel.id, "7");
        assert_eq!(hotel.place_id.as_deref(), Some("3"));
        assert_eq!(hotel.price_per_night, 4500.0);
        assert!(hotel.images.is_empty());
    }

    #[test]
    fn test_booking_serializes_camel_case() {
        let booking = NewBooking {
            user_id: "u1".into(),
            hotel_id: "h1".into(),
            place_id: Some("p1".into()),
            check_in: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            guests: 2,
            rooms: 1,
            total_price: 2240.0,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["checkIn"], "2024-01-01");
        assert_eq!(value["totalPrice"], 2240.0);
        assert_eq!(value["status"], "confirmed");
    }

    #[test]
    fn test_status_transitions() {
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Confirmed));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn test_bookmark_identity() {
        let internal = Bookmark::for_place(&Place {
            id: "5".into(),
            name: "Jakhoo Temple".into(),
            city: Some("Shimla".into()),
            description: None,
            rating: None,
            images: vec![],
        });
        let external: Bookmark = serde_json::from_value(json!({
            "place_id": "geo-51f2",
            "name": "Ridge",
            "lat": 31.1
        }))
        .unwrap();

        assert!(internal.same_place(&internal.clone()));
        assert!(external.same_place(&external.clone()));
        assert!(!internal.same_place(&external));
        assert_eq!(external.extra["lat"], 31.1);
    }

    #[test]
    fn test_user_ignores_password() {
        let user: User = serde_json::from_value(json!({
            "id": "1",
            "email": "asha@example.com",
            "password": "secret"
        }))
        .unwrap();

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert!(user.bookmarks.is_empty());
    }
}

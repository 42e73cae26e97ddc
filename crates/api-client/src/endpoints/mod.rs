//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one backend collection.
//!
//! | Module | Collection | Operations |
//! |--------|-----------|------------|
//! | `hotels` | `/hotels` | list by place, get, set available rooms |
//! | `bookings` | `/bookings` | create, get, list by user, set status |
//! | `places` | `/places` | full-text list, get |
//! | `users` | `/users` | find by email, replace bookmarks |
//! | `packages` | `/packages` | list, get |

pub mod bookings;
pub mod hotels;
pub mod packages;
pub mod places;
pub mod users;

pub use bookings::BookingsApi;
pub use hotels::HotelsApi;
pub use packages::PackagesApi;
pub use places::PlacesApi;
pub use users::UsersApi;

//! Logged-in user

use crate::error::Result;
use crate::store::TravelStore;
use wanderstay_core::models::{Bookmark, User};

/// The user on whose behalf bookings and bookmarks are made.
///
/// Passed explicitly to every operation that needs a user; nothing reads a
/// process-wide "current user".
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn login(user: User) -> Self {
        tracing::debug!(user_id = %user.id, "Session started");
        Self { user }
    }

    /// Look the user up by email and start a session.
    pub async fn login_with_email(store: &dyn TravelStore, email: &str) -> Result<Self> {
        let user = store.find_user_by_email(email).await?;
        Ok(Self::login(user))
    }

    /// End the session, handing back the user as last seen.
    pub fn logout(self) -> User {
        tracing::debug!(user_id = %self.user.id, "Session ended");
        self.user
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.user.bookmarks
    }

    pub(crate) fn bookmarks_mut(&mut self) -> &mut Vec<Bookmark> {
        &mut self.user.bookmarks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookingError;
    use crate::memory::{InMemoryStore, Snapshot};

    fn user() -> User {
        User {
            id: "7".into(),
            name: Some("Ravi".into()),
            email: "ravi@example.com".into(),
            bookmarks: vec![],
        }
    }

    #[test]
    fn test_login_logout() {
        let session = Session::login(user());
        assert_eq!(session.user_id(), "7");
        assert_eq!(session.email(), "ravi@example.com");
        assert_eq!(session.logout(), user());
    }

    #[tokio::test]
    async fn test_login_with_email() {
        let store = InMemoryStore::new(Snapshot {
            users: vec![user()],
            ..Default::default()
        });

        let session = Session::login_with_email(&store, "ravi@example.com")
            .await
            .unwrap();
        assert_eq!(session.user().name.as_deref(), Some("Ravi"));

        let err = Session::login_with_email(&store, "nobody@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound { resource: "user", .. }));
    }
}

//! Users API endpoints

use crate::client::TravelClient;
use crate::error::{ApiError, ApiResult};
use serde::Serialize;
use wanderstay_core::models::{Bookmark, User};

/// Users API interface
#[derive(Clone)]
pub struct UsersApi {
    client: TravelClient,
}

impl UsersApi {
    pub(crate) fn new(client: TravelClient) -> Self {
        Self { client }
    }

    /// Look a user up by exact email
    ///
    /// GET /users?email=<email>
    pub async fn find_by_email(&self, email: &str) -> ApiResult<User> {
        let users: Vec<User> = self.client.get("users", &[("email", email)]).await?;
        users
            .into_iter()
            .find(|u| u.email == email)
            .ok_or_else(|| ApiError::api_response(404, format!("no user with email {email}")))
    }

    /// Replace the bookmark list
    ///
    /// PATCH /users/<id> {"bookmarks": [...]}
    pub async fn update_bookmarks(&self, id: &str, bookmarks: &[Bookmark]) -> ApiResult<User> {
        self.client
            .patch(&format!("users/{id}"), &BookmarksPatch { bookmarks })
            .await
    }
}

#[derive(Debug, Serialize)]
struct BookmarksPatch<'a> {
    bookmarks: &'a [Bookmark],
}

//! Bookmark toggling with optimistic local update

use crate::error::{BookingError, Result};
use crate::session::Session;
use crate::store::TravelStore;
use wanderstay_core::models::Bookmark;
use wanderstay_core::retry::RetryConfig;

/// Add `bookmark` to the session user's list, or remove it if already there.
///
/// The local list changes first and is then pushed to the store, retrying
/// retryable failures per `retry`. If the push fails for good, the local
/// change is undone and the error returned.
///
/// Returns whether the place is bookmarked afterwards.
#[tracing::instrument(skip_all, fields(user_id = %session.user_id()))]
pub async fn toggle_bookmark(
    store: &dyn TravelStore,
    session: &mut Session,
    bookmark: Bookmark,
    retry: &RetryConfig,
) -> Result<bool> {
    let previous = session.bookmarks().to_vec();

    let bookmarked = {
        let list = session.bookmarks_mut();
        match list.iter().position(|b| b.same_place(&bookmark)) {
            Some(index) => {
                list.remove(index);
                false
            }
            None => {
                list.push(bookmark);
                true
            }
        }
    };

    let user_id = session.user_id().to_string();
    let updated = session.bookmarks().to_vec();
    let max_attempts = retry.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        tokio::time::sleep(retry.delay_for_attempt(attempt)).await;

        match store.update_user_bookmarks(&user_id, &updated).await {
            Ok(_) => {
                tracing::info!(bookmarked, count = updated.len(), "Bookmarks saved");
                return Ok(bookmarked);
            }
            Err(e) if e.is_retryable() && attempt + 1 < max_attempts => {
                tracing::warn!(attempt = attempt + 1, error = %e, "Bookmark update failed, retrying");
                attempt += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Bookmark update failed, reverting");
                *session.bookmarks_mut() = previous;
                return Err(BookingError::from(e));
            }
        }
    }
}

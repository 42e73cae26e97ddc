use crate::context::AppContext;
use anyhow::Result;
use wanderstay_booking::{toggle_bookmark, BookingError};
use wanderstay_cli::output::{print_json, Status};
use wanderstay_core::models::Bookmark;

/// Bookmark `place_id` for the user, or drop the bookmark if it is set
pub async fn toggle(ctx: &AppContext, place_id: &str) -> Result<()> {
    let mut session = ctx.session().await?;
    let place = ctx
        .store()
        .get_place(place_id)
        .await
        .map_err(BookingError::from)?;

    let spinner = ctx.spinner("Saving bookmarks...");
    let result = toggle_bookmark(
        ctx.store(),
        &mut session,
        Bookmark::for_place(&place),
        &ctx.retry,
    )
    .await;
    spinner.finish_and_clear();
    let bookmarked = result?;
    ctx.persist()?;

    if !ctx.format.is_text() {
        print_json(&serde_json::json!({
            "placeId": place.id,
            "bookmarked": bookmarked,
            "bookmarks": session.bookmarks(),
        }))?;
        return Ok(());
    }

    if bookmarked {
        Status::success(&format!("Bookmarked {}", place.name));
    } else {
        Status::success(&format!("Removed bookmark for {}", place.name));
    }
    Ok(())
}

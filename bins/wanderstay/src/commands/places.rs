use crate::context::AppContext;
use anyhow::Result;
use owo_colors::OwoColorize;
use wanderstay_booking::BookingError;
use wanderstay_cli::output::{format_count, format_rating, print_json, Status};

/// Search places by name, city or description
pub async fn list(ctx: &AppContext, query: Option<&str>) -> Result<()> {
    let spinner = ctx.spinner("Searching places...");
    let places = ctx.store().list_places(query).await;
    spinner.finish_and_clear();
    let places = places.map_err(BookingError::from)?;

    if !ctx.format.is_text() {
        print_json(&places)?;
        return Ok(());
    }

    if places.is_empty() {
        Status::warning("No places found");
        return Ok(());
    }

    Status::header(&format_count(places.len(), "place", "places"));
    for place in &places {
        let city = place.city.as_deref().unwrap_or("");
        let rating = place.rating.map(format_rating).unwrap_or_default();
        println!(
            "  {} {}  {}  {}",
            format!("[{}]", place.id).dimmed(),
            place.name.bold(),
            city,
            rating.yellow()
        );
    }
    println!();
    Ok(())
}

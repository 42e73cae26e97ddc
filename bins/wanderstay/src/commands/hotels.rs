//! Hotel listing and quotes

use crate::context::AppContext;
use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use wanderstay_booking::BookingError;
use wanderstay_cli::output::{
    format_amount, format_count, format_rating, format_stay, print_json, Status,
};
use wanderstay_core::models::Hotel;

/// List hotels, optionally narrowed to a place and filtered by `query`
pub async fn list(ctx: &AppContext, query: Option<&str>, place: Option<&str>) -> Result<()> {
    let spinner = ctx.spinner("Fetching hotels...");
    let hotels = ctx.store().list_hotels(place).await;
    spinner.finish_and_clear();
    let hotels = hotels.map_err(BookingError::from)?;

    let hotels = match query {
        Some(q) => ctx.matcher.filter(&hotels, q),
        None => hotels,
    };

    if !ctx.format.is_text() {
        print_json(&hotels)?;
        return Ok(());
    }

    if hotels.is_empty() {
        Status::warning("No hotels found");
        return Ok(());
    }

    Status::header(&format_count(hotels.len(), "hotel", "hotels"));
    for hotel in &hotels {
        print_hotel(hotel);
    }
    println!();
    Ok(())
}

fn print_hotel(hotel: &Hotel) {
    let rooms = if hotel.rooms_available == 0 {
        "sold out".red().to_string()
    } else {
        format_count(hotel.rooms_available as usize, "room left", "rooms left")
            .green()
            .to_string()
    };
    println!(
        "  {} {}  {}",
        format!("[{}]", hotel.id).dimmed(),
        hotel.name.bold(),
        format_rating(hotel.rating).yellow()
    );
    println!(
        "      {}  {} / night  {}",
        hotel.address,
        format_amount(hotel.price_per_night),
        rooms
    );
}

/// Price a stay without reserving anything
pub async fn quote(
    ctx: &AppContext,
    hotel_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    rooms: u32,
) -> Result<()> {
    let spinner = ctx.spinner("Fetching hotel...");
    let hotel = ctx.store().get_hotel(hotel_id).await;
    spinner.finish_and_clear();
    let hotel = hotel.map_err(BookingError::from)?;

    let price = ctx.engine.price_stay(&hotel, check_in, check_out, rooms)?;

    if !ctx.format.is_text() {
        print_json(&price)?;
        return Ok(());
    }

    Status::header(&hotel.name);
    println!("  {}", format_stay(check_in, check_out));
    println!(
        "  {} x {} x {}",
        format_amount(price.nightly_rate),
        format_count(price.nights as usize, "night", "nights"),
        format_count(price.rooms as usize, "room", "rooms")
    );
    println!("  Subtotal  {:>14}", format_amount(price.subtotal));
    println!("  Tax       {:>14}", format_amount(price.tax));
    println!("  {}     {:>14}", "Total".bold(), format_amount(price.total).bold());
    if rooms > hotel.rooms_available {
        println!();
        Status::warning(&format!(
            "Only {} rooms available right now",
            hotel.rooms_available
        ));
    }
    println!();
    Ok(())
}

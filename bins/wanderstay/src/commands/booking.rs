//! Hotel bookings: confirm, cancel, list

use crate::context::AppContext;
use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use wanderstay_booking::{BookingError, Session, StayRequest};
use wanderstay_cli::output::{format_amount, format_count, format_stay, format_status, print_json, Status};
use wanderstay_core::models::BookingRecord;

/// Reserve rooms and record a confirmed booking
pub async fn book(
    ctx: &AppContext,
    hotel_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    rooms: u32,
) -> Result<()> {
    let session = ctx.session().await?;

    let spinner = ctx.spinner("Booking...");
    let stay = StayRequest::new(check_in, check_out, guests, rooms);
    let result = confirm(ctx, hotel_id, &stay, &session).await;
    spinner.finish_and_clear();

    // a failed booking can still leave inventory changed
    ctx.persist()?;
    let booking = result?;

    if !ctx.format.is_text() {
        print_json(&booking)?;
        return Ok(());
    }

    Status::success(&format!("Booking {} confirmed", booking.id));
    print_booking(&booking);
    Ok(())
}

async fn confirm(
    ctx: &AppContext,
    hotel_id: &str,
    stay: &StayRequest,
    session: &Session,
) -> Result<BookingRecord, BookingError> {
    let hotel = ctx.store().get_hotel(hotel_id).await?;
    ctx.engine.confirm_booking(&hotel, stay, session).await
}

pub async fn cancel(ctx: &AppContext, booking_id: &str) -> Result<()> {
    let spinner = ctx.spinner("Cancelling...");
    let result = ctx.engine.cancel_booking(booking_id).await;
    spinner.finish_and_clear();

    // a failed cancellation can still leave the booking or inventory changed
    ctx.persist()?;
    let booking = result?;

    if !ctx.format.is_text() {
        print_json(&booking)?;
        return Ok(());
    }

    Status::success(&format!("Booking {} cancelled", booking.id));
    Ok(())
}

/// The logged-in user's hotel bookings
pub async fn list(ctx: &AppContext) -> Result<()> {
    let session = ctx.session().await?;

    let spinner = ctx.spinner("Fetching bookings...");
    let bookings = ctx.engine.user_bookings(&session).await;
    spinner.finish_and_clear();
    let bookings = bookings?;

    if !ctx.format.is_text() {
        print_json(&bookings)?;
        return Ok(());
    }

    if bookings.is_empty() {
        Status::info("No bookings yet");
        return Ok(());
    }

    Status::header(&format_count(bookings.len(), "booking", "bookings"));
    for booking in &bookings {
        print_booking(booking);
    }
    println!();
    Ok(())
}

fn print_booking(booking: &BookingRecord) {
    println!(
        "  {} hotel {}  {}  {}",
        format!("[{}]", booking.id).dimmed(),
        booking.hotel_id,
        format_stay(booking.check_in, booking.check_out),
        format_status(booking.status)
    );
    println!(
        "      {}, {}  {}",
        format_count(booking.rooms as usize, "room", "rooms"),
        format_count(booking.guests as usize, "guest", "guests"),
        format_amount(booking.total_price).bold()
    );
}

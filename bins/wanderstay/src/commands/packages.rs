//! Tour packages

use crate::context::AppContext;
use anyhow::Result;
use owo_colors::OwoColorize;
use wanderstay_booking::BookingError;
use wanderstay_cli::output::{format_amount, format_count, format_status, print_json, Status};

pub async fn list(ctx: &AppContext) -> Result<()> {
    let spinner = ctx.spinner("Fetching packages...");
    let packages = ctx.store().list_packages().await;
    spinner.finish_and_clear();
    let packages = packages.map_err(BookingError::from)?;

    if !ctx.format.is_text() {
        print_json(&packages)?;
        return Ok(());
    }

    if packages.is_empty() {
        Status::warning("No packages available");
        return Ok(());
    }

    Status::header(&format_count(packages.len(), "package", "packages"));
    for package in &packages {
        println!(
            "  {} {}  {}",
            format!("[{}]", package.id).dimmed(),
            package.name.bold(),
            format_amount(package.price)
        );
        let when = match (&package.start_date, &package.duration) {
            (Some(start), Some(duration)) => format!("from {start}, {duration}"),
            (Some(start), None) => format!("from {start}"),
            (None, Some(duration)) => duration.clone(),
            (None, None) => String::new(),
        };
        if !when.is_empty() {
            println!("      {}", when.dimmed());
        }
    }
    println!();
    Ok(())
}

/// Request a package; it stays pending until the operator confirms it
pub async fn book(ctx: &AppContext, package_id: &str) -> Result<()> {
    let session = ctx.session().await?;

    let spinner = ctx.spinner("Booking package...");
    let result = async {
        let package = ctx
            .store()
            .get_package(package_id)
            .await
            .map_err(BookingError::from)?;
        ctx.engine.book_package(&package, &session).await
    }
    .await;
    spinner.finish_and_clear();
    let booking = result?;
    ctx.persist()?;

    if !ctx.format.is_text() {
        print_json(&booking)?;
        return Ok(());
    }

    Status::success(&format!(
        "Package {} requested ({})",
        booking.package_name,
        format_status(booking.status)
    ));
    println!("  Booking {}  {}", booking.id, format_amount(booking.price));
    Ok(())
}

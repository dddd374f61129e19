//! Pagination example.
//!
//! Walks every charge page by page with `list_stream`, then prints the
//! most recent events.
//!
//! Run with: COMMERCE_KEY=test_... cargo run --example list_charges

use busha_commerce::{CommerceClient, ListParams};
use futures_util::StreamExt;

#[tokio::main]
async fn main() -> busha_commerce::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = CommerceClient::from_env()?;

    // Log each outgoing request
    client.set_debug(std::env::var("COMMERCE_DEBUG").is_ok());

    let first = client
        .charges()
        .list(&ListParams::new().sort("desc").limit(20))
        .await?;
    println!(
        "{} charge(s) across {} page(s)",
        first.pagination.total_entries_size, first.pagination.total_pages
    );

    let mut charges = client
        .charges()
        .list_stream(ListParams::new().sort("desc").limit(20));
    let mut seen = 0;
    while let Some(charge) = charges.next().await {
        let charge = charge?;
        seen += 1;
        println!(
            "{:>4}. {} {} {}",
            seen, charge.reference, charge.local_amount, charge.local_currency
        );
    }

    let events = client.events().list(&ListParams::new().limit(5)).await?;
    println!("\nLatest events:");
    for event in &events.data {
        println!(
            "  - {} {}",
            event.resource,
            event.data.event_type.as_deref().unwrap_or("unknown")
        );
    }

    Ok(())
}

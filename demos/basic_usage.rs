//! Basic usage example.
//!
//! This example creates a fixed-price charge, fetches it back, and lists
//! the business's deposit addresses.
//!
//! Run with: COMMERCE_KEY=test_... cargo run --example basic_usage

use busha_commerce::models::{AddressRequest, ChargeRequest};
use busha_commerce::{CommerceClient, Error, ListParams};
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::main]
async fn main() -> busha_commerce::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = CommerceClient::from_env()?;
    println!("Connected to the {} environment", client.environment());

    // Create a charge for 5,000 NGN
    let request = ChargeRequest::fixed(dec!(5000), "NGN")
        .with_reference("order-1042")
        .with_meta(json!({"name": "Sarah Shaw", "email": "sarah.shaw@example.co"}));
    let created = client.charges().create(&request).await?;
    let charge = created.data;

    println!("\nCharge {} created", charge.id);
    println!("  Pay at: {}", charge.hosted_url);
    for price in &charge.pricing {
        println!("  {} {}", price.amount, price.currency_id);
    }

    // Read it back
    let fetched = client.charges().get(&charge.id.to_string()).await?;
    if let Some(step) = fetched.data.timeline.last() {
        println!("  Status: {}", step.status);
    }

    // API rejections come back as Error::Api
    let bad = AddressRequest {
        currency_id: "USDT".into(),
        chains: vec![],
        label: String::new(),
    };
    match client.addresses().create(&bad).await {
        Ok(_) => println!("\nUnexpectedly created an address with no chains"),
        Err(Error::Api(err)) => println!("\nAddress rejected ({}): {}", err.status, err),
        Err(err) => return Err(err),
    }

    let addresses = client
        .addresses()
        .list(&ListParams::new().currency("USDT").limit(5))
        .await?;
    println!("\nFound {} USDT address(es):", addresses.data.len());
    for address in &addresses.data {
        println!("  - {} on {}", address.address, address.chain);
    }

    println!("\nDone!");
    Ok(())
}

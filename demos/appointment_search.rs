//! Basic usage example for the Co-WIN appointment client
//!
//! This example demonstrates how to:
//! - Create a client with default settings
//! - Look up states and districts
//! - Search appointments by pin for a single day
//! - Search appointments by district for a calendar week
//!
//! Pass a postal code as the first argument (defaults to 560001).

use cowin_client::{CowinClient, SearchOptions};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pin = std::env::args().nth(1).unwrap_or_else(|| "560001".to_string());

    // Example 1: Create a client with default settings
    println!("=== Example 1: Default Client ===");
    let client = CowinClient::new()?;
    println!("✓ Client created against the public endpoint");

    // Example 2: Create a client with custom HTTP configuration
    println!("\n=== Example 2: Custom HTTP Configuration ===");
    let _configured_client = CowinClient::builder()
        .client_builder(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .use_rustls_tls(),
        )
        .build()?;
    println!("✓ Client created with custom timeout (30s)");

    // Look up the reference data
    println!("\nFetching states...");
    let states = client.get_states()?;
    println!("✓ {} states supported", states.len());

    if let Some(state) = states.first() {
        let districts = client.get_districts(state.state_id)?;
        println!("✓ {} districts in {}", districts.len(), state.state_name);
    }

    // Search today's sessions around the pin
    println!("\nSearching today's appointments around {pin}...");
    match client.find_appointments_by_pin(&pin, SearchOptions::default()) {
        Ok(appointments) => {
            println!("✓ {} centers with sessions today", appointments.len());
            for appointment in appointments.iter().take(5) {
                let session = &appointment.sessions[0];
                println!(
                    "  {} — {} ({}+): {} doses",
                    appointment.center.name,
                    session.vaccine,
                    session.min_age_limit,
                    session.available_capacity,
                );
            }
        }
        Err(e) => {
            println!("✗ Search failed: {e}");
        }
    }

    // Search a week of sessions for a district
    let district_id = 294;
    println!("\nSearching this week's appointments for district {district_id}...");
    match client.find_appointments_by_district(
        district_id,
        SearchOptions {
            week: true,
            ..Default::default()
        },
    ) {
        Ok(appointments) => {
            println!("✓ {} centers this week", appointments.len());
            for appointment in appointments.iter().take(5) {
                println!(
                    "  {} — {} session(s)",
                    appointment.center.name,
                    appointment.sessions.len(),
                );
            }
        }
        Err(e) => {
            println!("✗ Search failed: {e}");
        }
    }

    Ok(())
}

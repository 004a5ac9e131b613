//! Co-WIN Appointment Client Library
//!
//! This library queries the public Co-WIN vaccination-appointment API and
//! reshapes the raw JSON into a normalized [`Appointment`]/[`Session`]
//! object model. It also exposes lookups for the supported states and
//! districts.
//!
//! # Features
//!
//! - Appointment search by postal code or district id, per day or per
//!   calendar week
//! - Day results normalized so every appointment carries its sessions as a
//!   list, matching the calendar shape
//! - State and district reference lookups
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use cowin_client::{CowinClient, SearchOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client against the public endpoint
//! let client = CowinClient::new()?;
//!
//! // Today's sessions around a postal code
//! let appointments = client.find_appointments_by_pin("560001", SearchOptions::default())?;
//! for appointment in &appointments {
//!     let session = &appointment.sessions[0];
//!     println!(
//!         "{} ({}): {} doses of {}",
//!         appointment.center.name,
//!         appointment.center.pincode,
//!         session.available_capacity,
//!         session.vaccine,
//!     );
//! }
//!
//! // A week of sessions for a district
//! let options = SearchOptions { week: true, ..Default::default() };
//! let weekly = client.find_appointments_by_district(294, options)?;
//! println!("{} centers this week", weekly.len());
//!
//! // Reference lookups
//! let states = client.get_states()?;
//! let districts = client.get_districts(states[0].state_id)?;
//! println!("{} districts in {}", districts.len(), states[0].state_name);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod response;
mod types;

pub use client::{CowinClient, CowinClientBuilder, SearchOptions};
pub use error::CowinError;
pub use types::{Appointment, Center, District, Session, State};

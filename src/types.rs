//! Data model for Co-WIN API responses

use serde::{Deserialize, Serialize};

/// A vaccination center as reported by the Co-WIN API
///
/// Value object built fresh from each response; the `center_id` is the only
/// identity the upstream guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Center {
    /// Upstream numeric center id
    pub center_id: u32,
    pub name: String,
    pub address: String,
    pub state_name: String,
    pub district_name: String,
    pub block_name: String,
    pub pincode: u32,
    pub lat: f64,
    pub long: f64,
    /// Opening time, e.g. "09:00:00"
    pub from: String,
    /// Closing time, e.g. "18:00:00"
    pub to: String,
    /// "Free" or "Paid"
    pub fee_type: String,
    /// Fee amount as reported on day-query records; week-query payloads
    /// carry no per-center fee field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
}

/// One bookable day at a center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    /// Session date in the upstream's `DD-MM-YYYY` rendering
    pub date: String,
    pub available_capacity: u32,
    pub available_capacity_dose1: u32,
    pub available_capacity_dose2: u32,
    pub min_age_limit: u16,
    pub vaccine: String,
    /// Time-slot strings, e.g. "09:00AM-11:00AM"
    pub slots: Vec<String>,
}

/// A center together with its bookable sessions
///
/// Day queries always produce exactly one session per appointment; week
/// queries pass the upstream multi-session shape through unchanged (up to
/// seven sessions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// The center the sessions belong to
    #[serde(flatten)]
    pub center: Center,
    pub sessions: Vec<Session>,
}

/// A state supported by the Co-WIN API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub state_id: u32,
    pub state_name: String,
}

/// An administrative district within a state
///
/// The upstream returns districts per state id but does not attach the
/// parent state id to each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub district_id: u32,
    pub district_name: String,
}

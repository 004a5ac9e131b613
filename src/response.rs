//! Response shaping: date rendering and flat-record reshaping

use crate::types::{Appointment, Center, District, Session, State};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Render a date the way the Co-WIN query string expects it
///
/// Day-first with literal dashes and no zero-padding: 2021-05-23 becomes
/// `"23-5-2021"`. Total over all valid dates.
pub(crate) fn format_request_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

/// One flat record from the day endpoints: center fields and the fields of
/// a single session side by side
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SessionRecord {
    #[serde(flatten)]
    pub center: Center,
    pub session_id: String,
    pub date: String,
    pub available_capacity: u32,
    pub available_capacity_dose1: u32,
    pub available_capacity_dose2: u32,
    pub min_age_limit: u16,
    pub vaccine: String,
    pub slots: Vec<String>,
}

impl From<SessionRecord> for Appointment {
    /// Reshape a flat day-endpoint record into an appointment with a
    /// single-element session list
    ///
    /// The partition is total: every flat field lands in either the center
    /// or the session, never both, never neither. Applied once per record;
    /// records are never merged across centers.
    fn from(record: SessionRecord) -> Self {
        let SessionRecord {
            center,
            session_id,
            date,
            available_capacity,
            available_capacity_dose1,
            available_capacity_dose2,
            min_age_limit,
            vaccine,
            slots,
        } = record;

        Appointment {
            center,
            sessions: vec![Session {
                session_id,
                date,
                available_capacity,
                available_capacity_dose1,
                available_capacity_dose2,
                min_age_limit,
                vaccine,
                slots,
            }],
        }
    }
}

/// Body of the day endpoints: a list of flat center-session records
#[derive(Debug, Deserialize)]
pub(crate) struct SessionsEnvelope {
    pub sessions: Vec<SessionRecord>,
}

/// Body of the calendar endpoints: centers already carrying session lists
#[derive(Debug, Deserialize)]
pub(crate) struct CentersEnvelope {
    pub centers: Vec<Appointment>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatesEnvelope {
    pub states: Vec<State>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DistrictsEnvelope {
    pub districts: Vec<District>,
}

//! Co-WIN HTTP client implementation

use crate::error::CowinError;
use crate::response::{
    CentersEnvelope, DistrictsEnvelope, SessionsEnvelope, StatesEnvelope, format_request_date,
};
use crate::types::{Appointment, District, State};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;

const DEFAULT_BASE_URL: &str = "https://cdn-api.co-vin.in/api/v2";

const FIND_BY_PIN: [&str; 4] = ["appointment", "sessions", "public", "findByPin"];
const FIND_BY_DISTRICT: [&str; 4] = ["appointment", "sessions", "public", "findByDistrict"];
const CALENDAR_BY_PIN: [&str; 4] = ["appointment", "sessions", "public", "calendarByPin"];
const CALENDAR_BY_DISTRICT: [&str; 4] = ["appointment", "sessions", "public", "calendarByDistrict"];
const GET_STATES: [&str; 3] = ["admin", "location", "states"];
const GET_DISTRICTS: [&str; 3] = ["admin", "location", "districts"];

/// Options for the appointment search facades
///
/// `date` defaults to "now" in the caller's local timezone; `week` selects
/// the seven-day calendar query instead of the single-day one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Date to search for; the current local date when `None`
    pub date: Option<NaiveDate>,
    /// Query a calendar week starting at `date` instead of a single day
    pub week: bool,
}

/// The main Co-WIN HTTP client
///
/// Provides appointment searches by postal code or district (per day or per
/// calendar week) and lookups for the supported states and districts. Every
/// operation issues a single blocking GET and returns when the round-trip
/// completes; there is no retrying, caching, or shared state between calls.
///
/// # Example
///
/// ```no_run
/// use cowin_client::{CowinClient, SearchOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CowinClient::new()?;
///
/// let appointments = client.find_appointments_by_pin("560001", SearchOptions::default())?;
/// for appointment in &appointments {
///     println!("{}: {} session(s)", appointment.center.name, appointment.sessions.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CowinClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl CowinClient {
    /// Create a new client against the public Co-WIN endpoint with
    /// rustls-tls configuration
    ///
    /// # Errors
    ///
    /// Returns `CowinError::ClientInit` if the HTTP client cannot be
    /// initialized.
    pub fn new() -> Result<Self, CowinError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cowin_client::CowinClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CowinClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> CowinClientBuilder {
        CowinClientBuilder::new()
    }

    /// Search for appointments by postal code
    ///
    /// Dispatches to the single-day or calendar-week query depending on
    /// `options.week`; `options.date` defaults to the current local date.
    /// No shape validation of `pin` is performed; an unknown or malformed
    /// pin surfaces as an upstream rejection.
    ///
    /// # Arguments
    ///
    /// * `pin` - The postal code to search around
    /// * `options` - Day-vs-week selection and the search date
    ///
    /// # Errors
    ///
    /// * `CowinError::Request` - Network or transport failure
    /// * `CowinError::UpstreamRejected` - Non-success response, with the
    ///   upstream error body when parseable
    /// * `CowinError::MalformedResponse` - Success response with an
    ///   unexpected body shape
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use cowin_client::{CowinClient, SearchOptions};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CowinClient::new()?;
    ///
    /// // Seven-day calendar starting on a specific date
    /// let options = SearchOptions {
    ///     date: NaiveDate::from_ymd_opt(2021, 5, 23),
    ///     week: true,
    /// };
    /// let appointments = client.find_appointments_by_pin("560001", options)?;
    /// println!("{} centers found", appointments.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_appointments_by_pin(
        &self,
        pin: &str,
        options: SearchOptions,
    ) -> Result<Vec<Appointment>, CowinError> {
        let date = options.date.unwrap_or_else(|| Local::now().date_naive());
        if options.week {
            self.find_by_pin_week(pin, date)
        } else {
            self.find_by_pin_day(pin, date)
        }
    }

    /// Search for appointments by district id
    ///
    /// Dispatches to the single-day or calendar-week query depending on
    /// `options.week`; `options.date` defaults to the current local date.
    /// District ids come from [`get_districts`](Self::get_districts).
    ///
    /// # Errors
    ///
    /// Same contract as [`find_appointments_by_pin`](Self::find_appointments_by_pin).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cowin_client::{CowinClient, SearchOptions};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CowinClient::new()?;
    /// let appointments = client.find_appointments_by_district(395, SearchOptions::default())?;
    /// println!("{} centers found", appointments.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_appointments_by_district(
        &self,
        district_id: u32,
        options: SearchOptions,
    ) -> Result<Vec<Appointment>, CowinError> {
        let date = options.date.unwrap_or_else(|| Local::now().date_naive());
        if options.week {
            self.find_by_district_week(district_id, date)
        } else {
            self.find_by_district_day(district_id, date)
        }
    }

    /// Fetch the list of supported states
    ///
    /// # Errors
    ///
    /// Same contract as the search operations: transport failures,
    /// upstream rejections, and undecodable bodies each map to their
    /// `CowinError` variant.
    pub fn get_states(&self) -> Result<Vec<State>, CowinError> {
        let url = self.endpoint_url(&GET_STATES)?;
        let envelope: StatesEnvelope = self.get_json(self.client.get(url))?;
        Ok(envelope.states)
    }

    /// Fetch the districts of the given state
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cowin_client::CowinClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CowinClient::new()?;
    /// for district in client.get_districts(16)? {
    ///     println!("{}: {}", district.district_id, district.district_name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_districts(&self, state_id: u32) -> Result<Vec<District>, CowinError> {
        let state_segment = state_id.to_string();
        let mut segments = GET_DISTRICTS.to_vec();
        segments.push(&state_segment);

        let url = self.endpoint_url(&segments)?;
        let envelope: DistrictsEnvelope = self.get_json(self.client.get(url))?;
        Ok(envelope.districts)
    }

    /// Single-day search by pin: the upstream returns one flat record per
    /// center, reshaped here into single-session appointments
    fn find_by_pin_day(&self, pin: &str, date: NaiveDate) -> Result<Vec<Appointment>, CowinError> {
        let url = self.endpoint_url(&FIND_BY_PIN)?;
        let query = [
            ("pincode", pin.to_string()),
            ("date", format_request_date(date)),
        ];

        let envelope: SessionsEnvelope = self.get_json(self.client.get(url).query(&query))?;
        Ok(envelope.sessions.into_iter().map(Appointment::from).collect())
    }

    /// Single-day search by district, same reshaping as the pin variant
    fn find_by_district_day(
        &self,
        district_id: u32,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, CowinError> {
        let url = self.endpoint_url(&FIND_BY_DISTRICT)?;
        let query = [
            ("district_id", district_id.to_string()),
            ("date", format_request_date(date)),
        ];

        let envelope: SessionsEnvelope = self.get_json(self.client.get(url).query(&query))?;
        Ok(envelope.sessions.into_iter().map(Appointment::from).collect())
    }

    /// Calendar-week search by pin: the upstream already nests sessions
    /// under each center, so the list passes through unshaped
    fn find_by_pin_week(&self, pin: &str, date: NaiveDate) -> Result<Vec<Appointment>, CowinError> {
        let url = self.endpoint_url(&CALENDAR_BY_PIN)?;
        let query = [
            ("pincode", pin.to_string()),
            ("date", format_request_date(date)),
        ];

        let envelope: CentersEnvelope = self.get_json(self.client.get(url).query(&query))?;
        Ok(envelope.centers)
    }

    /// Calendar-week search by district
    fn find_by_district_week(
        &self,
        district_id: u32,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, CowinError> {
        let url = self.endpoint_url(&CALENDAR_BY_DISTRICT)?;
        let query = [
            ("district_id", district_id.to_string()),
            ("date", format_request_date(date)),
        ];

        let envelope: CentersEnvelope = self.get_json(self.client.get(url).query(&query))?;
        Ok(envelope.centers)
    }

    /// Join endpoint path segments onto the configured base URL
    fn endpoint_url(&self, segments: &[&str]) -> Result<reqwest::Url, CowinError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CowinError::ClientInit("Cannot modify base URL path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Execute a GET and decode the JSON envelope
    ///
    /// Non-success statuses become `UpstreamRejected` carrying whatever
    /// error body the upstream attached; success bodies that fail to
    /// deserialize become `MalformedResponse`.
    fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<T, CowinError> {
        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CowinError::upstream_rejected(status, response.text().ok()));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(CowinError::MalformedResponse)
    }
}

/// Builder for configuring a Co-WIN client
///
/// Allows overriding the base URL (useful for tests against a mock server)
/// and the underlying HTTP client configuration.
///
/// # Example
///
/// ```no_run
/// use cowin_client::CowinClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL for testing
/// let client = CowinClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom timeout
/// let client = CowinClient::builder()
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CowinClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl CowinClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// The URL is parsed and validated at builder time, catching errors
    /// early.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, CowinError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    ///
    /// Allows full customization of the transport (timeouts, proxies,
    /// etc.). The library itself imposes no timeout; callers wanting one
    /// configure it here.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `CowinError::ClientInit` if the HTTP client cannot be
    /// initialized.
    pub fn build(self) -> Result<CowinClient, CowinError> {
        // Use provided base URL or default to the public endpoint
        let base_url = self.base_url.unwrap_or_else(|| {
            reqwest::Url::parse(DEFAULT_BASE_URL).expect("Default base URL should always be valid")
        });

        // Use provided client builder or create default with rustls-tls
        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .build()
            .map_err(|e| CowinError::ClientInit(e.to_string()))?;

        Ok(CowinClient { client, base_url })
    }
}

impl Default for CowinClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

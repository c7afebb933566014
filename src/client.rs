use crate::error::{ApiError, WellnessError};
use chrono::NaiveDate;
use log::{debug, info};
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;

const BASE_URL: &str = "https://connectapi.garmin.com";

/// Session-authenticated client for the Garmin Connect wellness endpoints.
///
/// Authentication itself (OAuth token exchange, token refresh) is out of
/// scope; the caller supplies an already-valid session bearer token.
#[derive(Debug, Clone)]
pub struct Client {
    token: String,
    http: HttpClient,
    base_url: String,
}

impl Client {
    /// Create a new client with the default base URL.
    pub fn new(token: impl Into<String>) -> Result<Self, WellnessError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(WellnessError::MissingCredentials);
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        info!("Initialized Garmin wellness client with default base URL");
        Ok(Self {
            token,
            http,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Override the base URL (useful for tests or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        info!("Updated Garmin base URL to {}", self.base_url);
        self
    }

    /// Fetch the daily heart-rate-variability summary for one date.
    pub async fn get_hrv_data(&self, day: NaiveDate) -> Result<String, WellnessError> {
        let path = format!("/hrv-service/hrv/{}", day.format("%Y-%m-%d"));
        self.get_metric(path, "hrv").await
    }

    /// Fetch the daily sleep summary for one date.
    pub async fn get_sleep_data(&self, day: NaiveDate) -> Result<String, WellnessError> {
        let path = format!(
            "/wellness-service/wellness/dailySleepData?date={}",
            day.format("%Y-%m-%d")
        );
        self.get_metric(path, "sleep").await
    }

    /// Fetch the daily blood-oxygen summary for one date.
    pub async fn get_spo2_data(&self, day: NaiveDate) -> Result<String, WellnessError> {
        let path = format!(
            "/wellness-service/wellness/daily/spo2/{}",
            day.format("%Y-%m-%d")
        );
        self.get_metric(path, "spo2").await
    }

    /// Fetch the daily respiration summary for one date.
    pub async fn get_respiration_data(&self, day: NaiveDate) -> Result<String, WellnessError> {
        let path = format!(
            "/wellness-service/wellness/daily/respiration/{}",
            day.format("%Y-%m-%d")
        );
        self.get_metric(path, "resp").await
    }

    /// Fetch the all-day stress summary for one date.
    pub async fn get_all_day_stress(&self, day: NaiveDate) -> Result<String, WellnessError> {
        let path = format!(
            "/wellness-service/wellness/dailyStress/{}",
            day.format("%Y-%m-%d")
        );
        self.get_metric(path, "stress").await
    }

    /// An empty body or 204 means the vendor has no data for that metric on
    /// that day; only error statuses are failures.
    async fn get_metric(&self, path: String, metric: &'static str) -> Result<String, WellnessError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET request to {}{}", self.base_url, path);
        let response = self.http.get(url).bearer_auth(&self.token).send().await?;
        let status = response.status();
        debug!("Received status {} for {}", status, metric);
        if status == StatusCode::NO_CONTENT {
            return Ok(String::new());
        }
        self.handle_status(status)?;
        response.text().await.map_err(WellnessError::from)
    }

    fn handle_status(&self, status: StatusCode) -> Result<(), WellnessError> {
        if status.is_success() {
            return Ok(());
        }
        let api_error = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::InvalidRequest,
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
            s if s.is_server_error() => ApiError::Server(s),
            s => ApiError::UnexpectedStatus(s),
        };
        Err(WellnessError::Api(api_error))
    }
}

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("missing credentials: session token is empty")]
    MissingCredentials,

    #[error("invalid date range: start {start} must be before or equal to end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api rejected request: {0}")]
    Api(#[from] ApiError),

    #[error("malformed {metric} payload for {day}: {source}")]
    MalformedPayload {
        metric: &'static str,
        day: NaiveDate,
        source: serde_json::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authorized (401/403)")]
    Unauthorized,

    #[error("invalid request (404)")]
    InvalidRequest,

    #[error("rate limited (429)")]
    RateLimited,

    #[error("server error ({0})")]
    Server(reqwest::StatusCode),

    #[error("unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

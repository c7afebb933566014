//! Rust client for exporting Garmin Connect wellness metrics.
//! Fetches per-day HRV, sleep, SpO2, respiration and stress documents for a
//! rolling two-year window, dumps the raw payloads to a CSV store, and
//! flattens them into a fixed-schema CSV for spreadsheet analysis.

pub mod client;
pub mod collect;
pub mod decode;
pub mod error;
pub mod export;
pub mod window;

pub use client::Client;
pub use collect::{DailyRawRecord, collect, read_raw_records, write_raw_records};
pub use decode::decode;
pub use error::{ApiError, WellnessError};
pub use export::{COLUMNS, SpreadsheetRow, flatten_record, transform, write_rows};
pub use window::{date_window, date_window_ending_today};

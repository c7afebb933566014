use crate::collect::{DailyRawRecord, read_raw_records};
use crate::decode::decode;
use crate::error::WellnessError;
use chrono::NaiveDate;
use log::info;
use serde_json::Value;
use std::path::Path;

/// Fixed output schema. Every row carries exactly these columns in this
/// order; unavailable values are empty cells. "Sleep Heart Rate" is reserved
/// in the schema but never populated.
pub const COLUMNS: [&str; 16] = [
    "Day",
    "HRV: Weekly Average",
    "HRV: Last Night Average",
    "HRV: Last Night 5 Minute High",
    "HRV: Status",
    "HRV: Baseline Range Low Upper",
    "HRV: Baseline Range Balanced Low",
    "HRV: Baseline Range Balanced Upper",
    "Resting Heart Rate (Sleep)",
    "Sleep Score",
    "Body Battery",
    "Sleep Heart Rate",
    "Average SpO2",
    "Average Respiration Value (Sleep)",
    "Average Stress Level",
    "Max Stress Level",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpreadsheetRow {
    pub day: String,
    pub hrv_weekly_avg: Option<String>,
    pub hrv_last_night_avg: Option<String>,
    pub hrv_last_night_5min_high: Option<String>,
    pub hrv_status: Option<String>,
    pub hrv_baseline_low_upper: Option<String>,
    pub hrv_baseline_balanced_low: Option<String>,
    pub hrv_baseline_balanced_upper: Option<String>,
    pub resting_heart_rate: Option<String>,
    pub sleep_score: Option<String>,
    pub body_battery: Option<String>,
    pub sleep_heart_rate: Option<String>,
    pub average_spo2: Option<String>,
    pub avg_sleep_respiration: Option<String>,
    pub avg_stress_level: Option<String>,
    pub max_stress_level: Option<String>,
}

impl SpreadsheetRow {
    /// Cells in `COLUMNS` order; absent values become empty cells.
    pub fn into_record(self) -> Vec<String> {
        vec![
            self.day,
            cell(self.hrv_weekly_avg),
            cell(self.hrv_last_night_avg),
            cell(self.hrv_last_night_5min_high),
            cell(self.hrv_status),
            cell(self.hrv_baseline_low_upper),
            cell(self.hrv_baseline_balanced_low),
            cell(self.hrv_baseline_balanced_upper),
            cell(self.resting_heart_rate),
            cell(self.sleep_score),
            cell(self.body_battery),
            cell(self.sleep_heart_rate),
            cell(self.average_spo2),
            cell(self.avg_sleep_respiration),
            cell(self.avg_stress_level),
            cell(self.max_stress_level),
        ]
    }
}

fn cell(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn decode_metric(
    raw: &str,
    metric: &'static str,
    day: NaiveDate,
) -> Result<Value, WellnessError> {
    decode(raw).map_err(|source| WellnessError::MalformedPayload {
        metric,
        day,
        source,
    })
}

/// Flatten one day's raw payloads into a fixed-shape row.
///
/// Each metric is extracted only when its payload is non-empty; inside a
/// payload, missing sub-structures leave their cells empty rather than
/// failing. Undecodable payloads abort the run.
pub fn flatten_record(record: &DailyRawRecord) -> Result<SpreadsheetRow, WellnessError> {
    let mut row = SpreadsheetRow {
        day: record.day.format("%Y-%m-%d").to_string(),
        ..Default::default()
    };

    if !record.hrv.is_empty() {
        let doc = decode_metric(&record.hrv, "hrv", record.day)?;
        let summary = &doc["hrvSummary"];
        row.hrv_weekly_avg = scalar(&summary["weeklyAvg"]);
        row.hrv_last_night_avg = scalar(&summary["lastNightAvg"]);
        row.hrv_last_night_5min_high = scalar(&summary["lastNight5MinHigh"]);
        row.hrv_status = scalar(&summary["status"]);

        let baseline = &summary["baseline"];
        if baseline.as_object().is_some_and(|b| !b.is_empty()) {
            row.hrv_baseline_low_upper = scalar(&baseline["lowUpper"]);
            row.hrv_baseline_balanced_low = scalar(&baseline["balancedLow"]);
            row.hrv_baseline_balanced_upper = scalar(&baseline["balancedUpper"]);
        }
    }

    if !record.sleep.is_empty() {
        let doc = decode_metric(&record.sleep, "sleep", record.day)?;
        row.resting_heart_rate = scalar(&doc["restingHeartRate"]);

        if doc.get("sleepScores").is_some() {
            row.sleep_score = scalar(&doc["sleepScores"]["overall"]["value"]);
        }

        if let Some(series) = doc["sleepBodyBattery"].as_array() {
            if let Some(last) = series.last() {
                row.body_battery = scalar(&last["value"]);
            }
        }
    }

    if !record.spo2.is_empty() {
        let doc = decode_metric(&record.spo2, "spo2", record.day)?;
        row.average_spo2 = scalar(&doc["averageSpO2"]);
    }

    if !record.resp.is_empty() {
        let doc = decode_metric(&record.resp, "resp", record.day)?;
        row.avg_sleep_respiration = scalar(&doc["avgSleepRespirationValue"]);
    }

    if !record.stress.is_empty() {
        let doc = decode_metric(&record.stress, "stress", record.day)?;
        row.avg_stress_level = scalar(&doc["avgStressLevel"]);
        row.max_stress_level = scalar(&doc["maxStressLevel"]);
    }

    Ok(row)
}

/// Write the header plus all rows in one batch, overwriting the file.
pub fn write_rows(
    path: impl AsRef<Path>,
    rows: Vec<SpreadsheetRow>,
) -> Result<(), WellnessError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(COLUMNS)?;
    let count = rows.len();
    for row in rows {
        writer.write_record(row.into_record())?;
    }
    writer.flush()?;
    info!("Wrote {} rows to {}", count, path.as_ref().display());
    Ok(())
}

/// Read the intermediate store and produce the analysis CSV.
///
/// Every row is flattened before the output file is opened, so a fatal error
/// leaves any previous output untouched.
pub fn transform(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<(), WellnessError> {
    let records = read_raw_records(input)?;
    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        rows.push(flatten_record(record)?);
    }
    write_rows(output, rows)
}

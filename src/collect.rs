use crate::client::Client;
use crate::error::WellnessError;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One day's worth of raw metric payloads, exactly as the API returned them.
/// An empty field means the vendor had no data for that metric, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRawRecord {
    pub day: NaiveDate,
    pub hrv: String,
    pub sleep: String,
    pub spo2: String,
    pub resp: String,
    pub stress: String,
}

/// Fetch all five metric documents for every date in the window, in date
/// order. Sequential on purpose; any failed request aborts the whole batch.
pub async fn collect(
    client: &Client,
    window: &[NaiveDate],
) -> Result<Vec<DailyRawRecord>, WellnessError> {
    let mut records = Vec::with_capacity(window.len());
    for &day in window {
        let hrv = client.get_hrv_data(day).await?;
        let sleep = client.get_sleep_data(day).await?;
        let spo2 = client.get_spo2_data(day).await?;
        let resp = client.get_respiration_data(day).await?;
        let stress = client.get_all_day_stress(day).await?;
        records.push(DailyRawRecord {
            day,
            hrv,
            sleep,
            spo2,
            resp,
            stress,
        });
        info!("Fetched {}", day);
    }
    Ok(records)
}

/// Write the full batch to the intermediate store, overwriting it.
pub fn write_raw_records(
    path: impl AsRef<Path>,
    records: &[DailyRawRecord],
) -> Result<(), WellnessError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!(
        "Wrote {} raw records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read the intermediate store back, preserving file order.
pub fn read_raw_records(path: impl AsRef<Path>) -> Result<Vec<DailyRawRecord>, WellnessError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    debug!(
        "Read {} raw records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(day: &str) -> DailyRawRecord {
        DailyRawRecord {
            day: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            hrv: r#"{"hrvSummary": {"weeklyAvg": 55}}"#.to_string(),
            sleep: String::new(),
            spo2: r#"{"averageSpO2": 95}"#.to_string(),
            resp: String::new(),
            stress: String::new(),
        }
    }

    #[test]
    fn raw_store_round_trip_preserves_records_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hrv_dump.csv");

        let records = vec![sample_record("2023-01-01"), sample_record("2023-01-02")];
        write_raw_records(&path, &records).unwrap();
        let read_back = read_raw_records(&path).unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn write_overwrites_previous_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hrv_dump.csv");

        write_raw_records(&path, &[sample_record("2023-01-01")]).unwrap();
        write_raw_records(&path, &[sample_record("2024-05-05")]).unwrap();

        let read_back = read_raw_records(&path).unwrap();
        assert_eq!(read_back.len(), 1);
        assert_eq!(
            read_back[0].day,
            NaiveDate::from_ymd_opt(2024, 5, 5).unwrap()
        );
    }

    #[test]
    fn payloads_with_commas_and_quotes_survive_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hrv_dump.csv");

        let mut record = sample_record("2023-01-01");
        record.stress = r#"{"avgStressLevel": 30, "note": "rest, \"easy\" day"}"#.to_string();
        write_raw_records(&path, std::slice::from_ref(&record)).unwrap();

        let read_back = read_raw_records(&path).unwrap();
        assert_eq!(read_back[0].stress, record.stress);
    }
}

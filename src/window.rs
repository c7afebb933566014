use chrono::{Days, NaiveDate};

const WINDOW_DAYS: u64 = 730;

/// All calendar dates from `end - 730 days` through `end`, inclusive.
pub fn date_window(end: NaiveDate) -> Vec<NaiveDate> {
    let start = end
        .checked_sub_days(Days::new(WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);
    let mut dates = Vec::with_capacity(WINDOW_DAYS as usize + 1);
    let mut current = start;
    loop {
        dates.push(current);
        if current >= end {
            break;
        }
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    dates
}

/// Rolling two-year window ending today (UTC).
pub fn date_window_ending_today() -> Vec<NaiveDate> {
    date_window(chrono::Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_spans_two_years_inclusive() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let window = date_window(end);
        assert_eq!(window.len(), 731);
        assert_eq!(window[0], NaiveDate::from_ymd_opt(2022, 6, 15).unwrap());
        assert_eq!(*window.last().unwrap(), end);
    }

    #[test]
    fn window_is_strictly_increasing_by_one_day() {
        let end = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let window = date_window(end);
        for pair in window.windows(2) {
            assert_eq!(pair[1], pair[0].succ_opt().unwrap());
        }
    }

    #[test]
    fn window_crossing_a_leap_day_keeps_its_length() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let window = date_window(end);
        assert_eq!(window.len(), 731);
        assert!(window.contains(&NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    }
}

//! Pure aggregation over stored survey rows.
//!
//! The range select stays in SQL; grouping and the composite averages
//! happen here so they are unit-testable without a database.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use std::collections::BTreeMap;

use crate::models::{DailyEmotion, SurveyRow};

/// Resolve the optional query dates into an inclusive UTC instant range.
///
/// A provided end date means the end of that calendar day (23:59:59
/// UTC); absent, the current instant. A provided start date means
/// midnight UTC of that day; absent, 30 days before the resolved end.
pub fn resolve_range(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).expect("valid constant time");

    let end = match end_date {
        Some(date) => Utc.from_utc_datetime(&date.and_time(end_of_day)),
        None => now,
    };

    let start = match start_date {
        Some(date) => Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
        None => end - Duration::days(30),
    };

    (start, end)
}

/// Group rows by UTC calendar day and compute the four composite
/// averages per day.
///
/// Output is sorted ascending by date and sparse: days with no rows
/// produce no entry. For a fixed input the result is always the same.
pub fn aggregate_daily(rows: &[SurveyRow]) -> Vec<DailyEmotion> {
    let mut groups: BTreeMap<NaiveDate, Vec<&SurveyRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.created_at.date_naive()).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|(date, day_rows)| DailyEmotion {
            date: date.to_string(),
            positive_avg: round2(mean(day_rows.iter().map(|r| composite(r.q1, r.q2)))),
            negative_avg: round2(mean(day_rows.iter().map(|r| composite(r.q3, r.q4)))),
            social_avg: round2(mean(day_rows.iter().map(|r| composite(r.q5, r.q6)))),
            // q8 is negatively phrased, so it is inverted before averaging.
            self_esteem_avg: round2(mean(day_rows.iter().map(|r| composite(r.q7, 6 - r.q8)))),
        })
        .collect()
}

fn composite(a: i32, b: i32) -> f64 {
    f64::from(a + b) / 2.0
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(created_at: DateTime<Utc>, answers: [i32; 8]) -> SurveyRow {
        SurveyRow {
            id: 1,
            full_name: "Anonymous".to_string(),
            is_anonymous: true,
            class_name: "10A1".to_string(),
            gender: "female".to_string(),
            q1: answers[0],
            q2: answers[1],
            q3: answers[2],
            q4: answers[3],
            q5: answers[4],
            q6: answers[5],
            q7: answers[6],
            q8: answers[7],
            open_ended: None,
            created_at,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_resolve_range_defaults() {
        let now = at(2025, 6, 15, 12);
        let (start, end) = resolve_range(None, None, now);
        assert_eq!(end, now);
        assert_eq!(start, now - Duration::days(30));
    }

    #[test]
    fn test_resolve_range_explicit_dates() {
        let now = at(2025, 6, 15, 12);
        let start_date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end_date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

        let (start, end) = resolve_range(Some(start_date), Some(end_date), now);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 6, 10, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_resolve_range_start_defaults_to_30_days_before_end() {
        let now = at(2025, 6, 15, 12);
        let end_date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

        let (start, end) = resolve_range(None, Some(end_date), now);
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 6, 10, 23, 59, 59).unwrap());
        assert_eq!(start, end - Duration::days(30));
    }

    #[test]
    fn test_end_of_day_boundary_is_inclusive() {
        let end_date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let (_, end) = resolve_range(None, Some(end_date), at(2025, 6, 15, 12));

        let boundary = Utc.with_ymd_and_hms(2025, 6, 10, 23, 59, 59).unwrap();
        assert!(boundary <= end);
        assert!(boundary + Duration::seconds(1) > end);
    }

    #[test]
    fn test_manual_average_example() {
        // Two records on the same day: q1=3,q2=5 and q1=1,q2=3 give
        // positive_avg mean(4, 2) = 3.00.
        let day = at(2025, 6, 3, 9);
        let rows = vec![
            row(day, [3, 5, 2, 2, 3, 3, 4, 2]),
            row(day + Duration::hours(4), [1, 3, 4, 4, 3, 3, 2, 4]),
        ];

        let result = aggregate_daily(&rows);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, "2025-06-03");
        assert_eq!(result[0].positive_avg, 3.0);
        assert_eq!(result[0].negative_avg, 3.0);
        assert_eq!(result[0].social_avg, 3.0);
        // self-esteem: mean((4 + (6-2))/2, (2 + (6-4))/2) = mean(4, 2) = 3
        assert_eq!(result[0].self_esteem_avg, 3.0);
    }

    #[test]
    fn test_q8_inversion() {
        let rows = vec![row(at(2025, 6, 3, 9), [3, 3, 3, 3, 3, 3, 5, 1])];
        let result = aggregate_daily(&rows);
        // (5 + (6-1)) / 2 = 5.0
        assert_eq!(result[0].self_esteem_avg, 5.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let rows = vec![
            row(at(2025, 6, 3, 9), [1, 2, 3, 3, 3, 3, 3, 3]),
            row(at(2025, 6, 3, 10), [1, 2, 3, 3, 3, 3, 3, 3]),
            row(at(2025, 6, 3, 11), [2, 2, 3, 3, 3, 3, 3, 3]),
        ];

        let result = aggregate_daily(&rows);
        // mean(1.5, 1.5, 2.0) = 1.666.. -> 1.67
        assert_eq!(result[0].positive_avg, 1.67);
    }

    #[test]
    fn test_days_are_sparse_and_ascending() {
        let rows = vec![
            row(at(2025, 6, 7, 9), [3, 3, 3, 3, 3, 3, 3, 3]),
            row(at(2025, 6, 3, 9), [3, 3, 3, 3, 3, 3, 3, 3]),
        ];

        let result = aggregate_daily(&rows);
        let dates: Vec<&str> = result.iter().map(|d| d.date.as_str()).collect();
        // No zero-filled entries for the days in between.
        assert_eq!(dates, vec!["2025-06-03", "2025-06-07"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(aggregate_daily(&[]).is_empty());
    }

    #[test]
    fn test_idempotent_for_fixed_snapshot() {
        let rows = vec![
            row(at(2025, 6, 3, 9), [1, 2, 3, 4, 5, 1, 2, 3]),
            row(at(2025, 6, 4, 9), [5, 4, 3, 2, 1, 5, 4, 3]),
        ];

        assert_eq!(aggregate_daily(&rows), aggregate_daily(&rows));
    }
}

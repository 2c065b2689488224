//! End-to-end tests: JSON payload in, dashboard outputs out.

use aqi_analytics::prelude::*;
use aqi_analytics::RecordField;
use approx::assert_relative_eq;

const TOLERANCE: f64 = 1e-10;

/// Build the service payload for `(date, aqi, pm25)` rows.
fn payload(rows: &[(&str, f64, f64)]) -> String {
    let items: Vec<String> = rows
        .iter()
        .map(|(date, aqi, pm25)| {
            format!(
                r#"{{"date": "{}", "aqi": {}, "pm25": {}}}"#,
                date, aqi, pm25
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

#[test]
fn three_years_rising_by_ten() {
    let json = payload(&[
        ("2019-03-01", 45.0, 10.0),
        ("2019-09-01", 55.0, 14.0),
        ("2020-03-01", 60.0, 18.0),
        ("2021-03-01", 70.0, 22.0),
    ]);
    let records = RecordSet::from_json(&json).unwrap();
    let report = analyze(&records);

    let yearly: Vec<(i32, f64)> = report
        .yearly
        .points()
        .iter()
        .map(|p| (p.key, p.mean_aqi))
        .collect();
    assert_eq!(yearly, vec![(2019, 50.0), (2020, 60.0), (2021, 70.0)]);

    assert_relative_eq!(report.trend.slope, 10.0, epsilon = TOLERANCE);
    assert_relative_eq!(report.trend.predicted_next, 80.0, epsilon = TOLERANCE);
    assert_eq!(report.trend.slope_display(), "10.00");
    assert_eq!(report.trend.predicted_next_display(), "80.0");
}

#[test]
fn empty_payload_produces_zero_report() {
    let records = RecordSet::from_json("[]").unwrap();
    let report = analyze(&records);

    assert_eq!(report.summary.mean_aqi, 0.0);
    assert_eq!(report.summary.max_pm25, 0.0);
    assert!(report.yearly.is_empty());
    assert_eq!(report.seasonal.values(), vec![0.0; 12]);
    assert_eq!(report.trend.slope, 0.0);
    assert_eq!(report.trend.predicted_next, 0.0);
    assert!(report.daily.is_empty());
}

#[test]
fn seasonal_profile_uses_month_labels() {
    let json = payload(&[
        ("2020-01-10", 120.0, 80.0),
        ("2021-01-10", 100.0, 70.0),
        ("2020-07-10", 40.0, 15.0),
    ]);
    let report = analyze(&RecordSet::from_json(&json).unwrap());

    assert_eq!(
        report.seasonal.labels(),
        vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
    );
    assert_relative_eq!(report.seasonal.get(0).unwrap(), 110.0, epsilon = TOLERANCE);
    assert_relative_eq!(report.seasonal.get(6).unwrap(), 40.0, epsilon = TOLERANCE);
    assert_eq!(report.seasonal.get(3), Some(0.0));
}

#[test]
fn summary_matches_dashboard_cards() {
    let json = payload(&[
        ("2022-05-01", 51.0, 12.0),
        ("2022-05-02", 52.0, 88.5),
        ("2022-05-03", 53.5, 40.0),
    ]);
    let summary = summarize(&RecordSet::from_json(&json).unwrap());

    assert_eq!(summary.mean_aqi_display(), "52.2");
    assert_eq!(summary.max_pm25, 88.5);
}

#[test]
fn malformed_record_fails_the_whole_payload() {
    let json = r#"[
        {"date": "2022-05-01", "aqi": 51, "pm25": 12},
        {"date": "2022-05-02", "aqi": 52, "pm25": 13},
        {"date": "05-03-2022?", "aqi": 53, "pm25": 14}
    ]"#;

    match RecordSet::from_json(json) {
        Err(AnalyticsError::MalformedRecord { index, field, .. }) => {
            assert_eq!(index, 2);
            assert_eq!(field, RecordField::Date);
        }
        other => panic!("expected malformed record, got {:?}", other),
    }
}

#[test]
fn custom_date_format_is_honoured() {
    let json = payload(&[("15.01.2020", 30.0, 5.0), ("15.01.2021", 50.0, 6.0)]);

    assert!(RecordSet::from_json(&json).is_err());

    let config = IngestConfig::default().with_date_format("%d.%m.%Y");
    let records = RecordSet::from_json_with(&json, &config).unwrap();
    let trend = estimate_trend(&aggregate_by_year(&records));
    assert_relative_eq!(trend.slope, 20.0, epsilon = TOLERANCE);
    assert_relative_eq!(trend.predicted_next, 70.0, epsilon = TOLERANCE);
}

#[test]
fn records_built_in_memory_match_json_ingestion() {
    let from_raw = RecordSet::from_raw(vec![
        RawRecord::new("2020-02-01", 35.0, 9.0),
        RawRecord::new("2020-03-01", 45.0, 11.0),
    ])
    .unwrap();
    let from_json = RecordSet::from_json(&payload(&[
        ("2020-02-01", 35.0, 9.0),
        ("2020-03-01", 45.0, 11.0),
    ]))
    .unwrap();

    assert_eq!(from_raw, from_json);
    assert_eq!(analyze(&from_raw), analyze(&from_json));
}

//! Quickstart example demonstrating basic usage of aqi-analytics.
//!
//! Run with: cargo run --example quickstart

use aqi_analytics::prelude::*;

const PAYLOAD: &str = r#"[
    {"date": "2019-01-12", "aqi": 182, "pm25": 96.4},
    {"date": "2019-07-03", "aqi": 64,  "pm25": 18.2},
    {"date": "2019-11-21", "aqi": 201, "pm25": 121.0},
    {"date": "2020-01-08", "aqi": 168, "pm25": 88.9},
    {"date": "2020-06-17", "aqi": 58,  "pm25": 15.1},
    {"date": "2020-12-02", "aqi": 190, "pm25": 104.6},
    {"date": "2021-02-14", "aqi": 150, "pm25": 72.3},
    {"date": "2021-08-30", "aqi": 49,  "pm25": 11.7},
    {"date": "2021-11-05", "aqi": 176, "pm25": 93.8}
]"#;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== aqi-analytics Quickstart ===\n");

    let records = match RecordSet::from_json(PAYLOAD) {
        Ok(records) => records,
        Err(err) => {
            log::error!("could not ingest payload: {}", err);
            std::process::exit(1);
        }
    };
    log::info!("loaded {} measurement records", records.len());

    let report = analyze(&records);

    println!("--- Cards ---");
    println!("  Average AQI:             {}", report.summary.mean_aqi_display());
    println!("  Max PM2.5:               {}", report.summary.max_pm25);
    println!("  Trend Slope:             {}", report.trend.slope_display());
    println!(
        "  Predicted Next Year AQI: {}",
        report.trend.predicted_next_display()
    );

    println!("\n--- Pollution Trend ---");
    for (label, value) in report.yearly.labels().iter().zip(report.yearly.values()) {
        println!("  {}: {:.1}", label, value);
    }

    println!("\n--- Seasonal Variation ---");
    for (label, value) in report.seasonal.labels().iter().zip(report.seasonal.values()) {
        println!("  {}: {:.1}", label, value);
    }

    match report.to_json() {
        Ok(json) => println!("\n--- JSON ---\n{}", json),
        Err(err) => log::error!("could not serialize report: {}", err),
    }
}

use chrono::Utc;
use chrono_tz::Asia::Shanghai;

use golden_hour::crossing::{solve_altitude_crossing, status};
use golden_hour::schedule::upcoming_events;
use golden_hour::types::{Direction, ScheduleConfig, Threshold, Timestamp};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = ScheduleConfig::default();
    let coord = config.coordinate;

    println!("=== Golden Hour: Shanghai, 2026-02-19 morning ===");
    println!("Location: {:.4}°N, {:.4}°E", coord.latitude, coord.longitude);

    let day_start = match Timestamp::utc_midnight(2026, 2, 19) {
        Ok(ts) => ts,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    for (label, threshold) in [
        ("Blue hour start", Threshold::BlueHour),
        ("Golden hour start", Threshold::GoldenHour),
    ] {
        let result =
            solve_altitude_crossing(day_start, coord, threshold.altitude(), Direction::Rising);
        println!();
        println!("{} ({}°):", label, threshold.altitude());
        match result.map(|ts| (ts, ts.to_datetime())) {
            Ok((ts, Ok(dt))) => {
                println!("  Time: {}", dt.with_timezone(&Shanghai).format("%H:%M:%S"));
                println!("  Timestamp: {}", ts.seconds());
            }
            Ok((ts, Err(err))) => println!("  Timestamp: {} ({err})", ts.seconds()),
            Err(_) => println!("  Failed: {}", status(&result)),
        }
    }

    println!();
    println!("=== Countdown ===");
    let now = Utc::now().with_timezone(&Shanghai);
    println!("Now: {}", now.format("%Y-%m-%d %H:%M:%S"));
    match upcoming_events(&config, &now) {
        Ok(events) => {
            for event in events {
                let day = if event.day_index == 0 { "Today" } else { "Tomorrow" };
                let name = match event.threshold {
                    Threshold::BlueHour => "blue hour",
                    Threshold::GoldenHour => "golden hour",
                    Threshold::Custom(_) => "custom",
                };
                let at = event
                    .at
                    .to_datetime()
                    .map(|dt| dt.with_timezone(&Shanghai).format("%H:%M").to_string())
                    .unwrap_or_else(|_| event.at.to_string());
                println!("{day} {name}: {at} (in {})", event.countdown);
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}

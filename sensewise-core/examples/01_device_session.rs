//! Device Session Example
//!
//! Replays one hour of attribute reports from a multi-sensor (lux,
//! temperature, humidity, battery) through the estimators, the way a device
//! driver would call them as reports arrive.
//!
//! ## What You'll Learn
//!
//! - Owning one estimator per capability
//! - Forwarding diagnostic lines to the device log
//! - Reading the advisory signals (confidence, health, correlation)
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_device_session
//! ```

use sensewise_core::{
    time::MockTimeSource, BatteryInference, ClimateInference, MotionLuxInference, SensorInference,
};

/// One attribute report: seconds since start, attribute, value
type Report = (u64, &'static str, f32);

const REPORTS: &[Report] = &[
    (0, "battery", 87.0),
    (0, "lux", 320.0),
    (0, "temperature", 21.4),
    (0, "humidity", 48.0),
    (60, "lux", 322.0),
    (120, "lux", 371.0), // someone opens the blinds
    (180, "temperature", 655.35), // 0xFFFF / 100 glitch
    (240, "humidity", 49.5),
    (300, "temperature", 21.6),
    (600, "battery", 99.0), // reset artefact
    (900, "lux", 368.0),
    (1800, "temperature", 21.9),
    (3600, "battery", 86.0),
];

fn main() {
    let clock = MockTimeSource::new(0);

    let mut motion = MotionLuxInference::new(&clock);
    let mut climate = ClimateInference::new(&clock);
    let mut battery = BatteryInference::new(&clock);

    motion.set_log_hook(Box::new(|line: &str| println!("  log: {}", line)));
    climate.set_log_hook(Box::new(|line: &str| println!("  log: {}", line)));
    battery.set_log_hook(Box::new(|line: &str| println!("  log: {}", line)));

    for &(second, attribute, raw) in REPORTS {
        clock.set(second * 1000);

        let published = match attribute {
            "lux" => format!("motion={:?}", motion.update_lux(raw)),
            "temperature" => format!("temperature={:?}", climate.validate_temperature(raw)),
            "humidity" => format!("humidity={:?}", climate.validate_humidity(raw)),
            "battery" => format!("battery={:?}", battery.validate_battery(raw)),
            _ => continue,
        };

        println!("t={:>4}s {:<12} raw={:<7} -> {}", second, attribute, raw, published);
    }

    println!();
    println!("motion:  {:?} (confidence {})", motion.state(), motion.confidence());
    println!("climate: {:?}, plausible={}", climate.sensor_health(), climate.check_correlation());
    println!(
        "battery: {} ({:?} days left)",
        battery.status().as_str(),
        battery.predict_days_remaining()
    );
}

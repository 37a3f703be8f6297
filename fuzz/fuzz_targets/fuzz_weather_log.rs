#![no_main]

use hydroscope::{WeatherObservation, WeatherSummary};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(log) = serde_json::from_slice::<Vec<WeatherObservation>>(data) {
        let _ = WeatherSummary::from_observations(&log);
    }
});

#![no_main]

use hydroscope::Crop;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = s.parse::<Crop>();
        let _ = serde_json::from_str::<Crop>(s);
    }
});

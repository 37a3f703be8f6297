#![no_main]

use hydroscope::{estimate, CalculationInputs, Crop};
use libfuzzer_sys::fuzz_target;

fn take_f64(data: &[u8], index: usize) -> f64 {
    let mut bytes = [0u8; 8];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = data.get(index * 8 + i).copied().unwrap_or(0);
    }
    f64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let crop = Crop::ALL[usize::from(selector) % Crop::ALL.len()];
    let inputs = CalculationInputs::new(crop, take_f64(rest, 0), take_f64(rest, 1), take_f64(rest, 2))
        .with_effective_rain(take_f64(rest, 3));

    // Any input either estimates to a finite, non-negative result or fails cleanly
    if let Ok(result) = estimate(&inputs) {
        assert!(result.total_gross_irrigation_mm.is_finite());
        assert!(result.total_gross_irrigation_mm >= 0.0);
        assert!(result.total_water_liters.is_finite());
        assert!(result.total_water_liters >= 0.0);
    }
});

//! Property tests for the stage-based water estimator.

use proptest::prelude::*;

use hydroscope::{estimate, CalculationInputs, CalculationResult, Crop, HydroError};

fn supported_crop() -> impl Strategy<Value = Crop> {
    prop_oneof![Just(Crop::Maize), Just(Crop::Beans), Just(Crop::Tomatoes)]
}

prop_compose! {
    fn valid_inputs()(
        crop in supported_crop(),
        acres in 0.01f64..10_000.0,
        eto in 0.0f64..20.0,
        rain in 0.0f64..200.0,
        efficiency in 1.0f64..=100.0,
    ) -> CalculationInputs {
        CalculationInputs::new(crop, acres, eto, efficiency).with_effective_rain(rain)
    }
}

/// Depth and volume are finite and never negative
fn is_physical(result: &CalculationResult) -> bool {
    result.total_gross_irrigation_mm.is_finite()
        && result.total_gross_irrigation_mm >= 0.0
        && result.total_water_liters.is_finite()
        && result.total_water_liters >= 0.0
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Valid inputs never produce negative depth or volume.
    #[test]
    fn property_results_are_non_negative(inputs in valid_inputs()) {
        let result = estimate(&inputs).unwrap();
        prop_assert!(is_physical(&result));
    }

    /// PROPERTY: Across the whole accepted domain, including values large enough
    /// to overflow once multiplied out, a result is always finite and non-negative.
    #[test]
    fn property_extreme_valid_inputs_stay_physical(
        crop in supported_crop(),
        acres in f64::MIN_POSITIVE..f64::MAX,
        eto in 0.0f64..f64::MAX,
        rain in 0.0f64..f64::MAX,
        efficiency in 0.0f64..=100.0,
    ) {
        let inputs = CalculationInputs::new(crop, acres, eto, efficiency).with_effective_rain(rain);
        match estimate(&inputs) {
            Ok(result) => prop_assert!(is_physical(&result), "{:?} -> {:?}", inputs, result),
            Err(err) => prop_assert!(
                matches!(err, HydroError::InvalidInput { .. }),
                "{:?} -> {:?}", inputs, err
            ),
        }
    }

    /// PROPERTY: Doubling the area doubles the volume and leaves the depth unchanged.
    #[test]
    fn property_volume_scales_with_area(inputs in valid_inputs()) {
        let single = estimate(&inputs).unwrap();
        let mut doubled_inputs = inputs;
        doubled_inputs.area_acres *= 2.0;
        let doubled = estimate(&doubled_inputs).unwrap();

        prop_assert_eq!(doubled.total_gross_irrigation_mm, single.total_gross_irrigation_mm);
        prop_assert!(close(doubled.total_water_liters, 2.0 * single.total_water_liters));
    }

    /// PROPERTY: No evapotranspiration means no irrigation, whatever else is set.
    #[test]
    fn property_zero_eto_needs_nothing(mut inputs in valid_inputs()) {
        inputs.avg_daily_eto_mm = 0.0;
        let result = estimate(&inputs).unwrap();
        prop_assert_eq!(result.total_gross_irrigation_mm, 0.0);
        prop_assert_eq!(result.total_water_liters, 0.0);
    }

    /// PROPERTY: More effective rain never increases the requirement.
    #[test]
    fn property_rain_is_monotone(inputs in valid_inputs(), extra in 0.0f64..100.0) {
        let base = estimate(&inputs).unwrap();
        let wetter_inputs = inputs.with_effective_rain(inputs.effective_rain_weekly_mm + extra);
        let wetter = estimate(&wetter_inputs).unwrap();
        prop_assert!(wetter.total_gross_irrigation_mm <= base.total_gross_irrigation_mm);
        prop_assert!(wetter.total_gross_irrigation_mm >= 0.0);
    }

    /// PROPERTY: Lower efficiency never lowers the gross requirement.
    #[test]
    fn property_efficiency_is_antitone(inputs in valid_inputs(), factor in 0.01f64..1.0) {
        let base = estimate(&inputs).unwrap();
        let mut worse_inputs = inputs;
        worse_inputs.irrigation_efficiency_percent *= factor;
        let worse = estimate(&worse_inputs).unwrap();
        prop_assert!(worse.total_gross_irrigation_mm >= base.total_gross_irrigation_mm);
    }

    /// PROPERTY: Estimation is deterministic.
    #[test]
    fn property_estimate_is_deterministic(inputs in valid_inputs()) {
        prop_assert_eq!(estimate(&inputs).unwrap(), estimate(&inputs).unwrap());
    }

    /// PROPERTY: The custom crop is rejected for any numeric input, never estimated.
    #[test]
    fn property_custom_crop_always_unsupported(
        acres in proptest::num::f64::ANY,
        eto in proptest::num::f64::ANY,
        efficiency in proptest::num::f64::ANY,
    ) {
        let inputs = CalculationInputs::new(Crop::Custom, acres, eto, efficiency);
        let is_unsupported = matches!(estimate(&inputs), Err(HydroError::UnsupportedCrop { .. }));
        prop_assert!(is_unsupported);
    }

    /// PROPERTY: Arbitrary floats never panic; they either estimate or fail as input errors.
    #[test]
    fn property_arbitrary_inputs_never_panic(
        crop in supported_crop(),
        acres in proptest::num::f64::ANY,
        eto in proptest::num::f64::ANY,
        rain in proptest::num::f64::ANY,
        efficiency in proptest::num::f64::ANY,
    ) {
        let inputs = CalculationInputs::new(crop, acres, eto, efficiency).with_effective_rain(rain);
        match estimate(&inputs) {
            Ok(result) => prop_assert!(is_physical(&result)),
            Err(err) => prop_assert!(err.is_input_error()),
        }
    }
}

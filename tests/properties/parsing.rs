//! Property tests for config and crop-name parsing.

use proptest::prelude::*;

use hydroscope::{Config, Crop};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Config parsing never panics on arbitrary input.
    #[test]
    fn property_config_parse_never_panics(s in "(?s).{0,256}") {
        let _ = toml::from_str::<Config>(&s);
    }

    /// PROPERTY: Crop parsing is case-insensitive for every table name.
    #[test]
    fn property_crop_names_parse_in_any_case(
        index in 0usize..4,
        upper in proptest::collection::vec(any::<bool>(), 32),
    ) {
        let crop = Crop::ALL[index];
        let mixed: String = crop
            .display_name()
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        prop_assert_eq!(mixed.parse::<Crop>().unwrap(), crop);
    }

    /// PROPERTY: Crop parsing never panics on arbitrary strings.
    #[test]
    fn property_crop_parse_never_panics(s in ".{0,64}") {
        let _ = s.parse::<Crop>();
    }
}

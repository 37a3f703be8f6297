//! Shared test content

/// Three days of weather: mean ETo 5.0 mm/day, 21 mm of rain
pub const WEATHER_LOG: &str = r#"[
  {"date": "2024-06-03", "temperature_c": 27.0, "rainfall_mm": 0.0, "eto_mm_per_day": 6.0},
  {"date": "2024-06-01", "temperature_c": 23.0, "rainfall_mm": 15.0, "eto_mm_per_day": 4.0},
  {"date": "2024-06-02", "temperature_c": 25.0, "rainfall_mm": 6.0, "eto_mm_per_day": 5.0}
]"#;

/// Project config that switches the default crop to beans on 2 acres
pub const BEANS_CONFIG: &str = r#"
[defaults]
crop = "beans"
area_acres = 2.0

[supply]
pump_capacity_lph = 2000
days = 10
"#;

/// Maize reference scenario totals (1 acre, ETo 5, no rain, 80%)
pub const MAIZE_GROSS_MM: f64 = 693.4375;
pub const MAIZE_LITERS: f64 = 693.4375 * 4046.86;

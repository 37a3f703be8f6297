//! Crop reference table - growth stages, durations and crop coefficients

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HydroError, HydroResult};

/// FAO growth stage, in seasonal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Initial,
    Development,
    Mid,
    Late,
}

impl GrowthStage {
    /// Every stage in seasonal order
    pub const ALL: [GrowthStage; 4] = [
        GrowthStage::Initial,
        GrowthStage::Development,
        GrowthStage::Mid,
        GrowthStage::Late,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            GrowthStage::Initial => "Initial",
            GrowthStage::Development => "Development",
            GrowthStage::Mid => "Mid",
            GrowthStage::Late => "Late",
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Length of each growth stage in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDurations {
    pub initial: u32,
    pub development: u32,
    pub mid: u32,
    pub late: u32,
}

impl StageDurations {
    pub fn days(&self, stage: GrowthStage) -> u32 {
        match stage {
            GrowthStage::Initial => self.initial,
            GrowthStage::Development => self.development,
            GrowthStage::Mid => self.mid,
            GrowthStage::Late => self.late,
        }
    }

    /// Season length in days
    pub fn total_days(&self) -> u32 {
        GrowthStage::ALL.iter().map(|s| self.days(*s)).sum()
    }
}

/// Crop coefficient (Kc) at the initial, mid-season and end points of the cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageCoefficients {
    pub initial: f64,
    pub mid: f64,
    pub end: f64,
}

impl StageCoefficients {
    /// Representative Kc for a whole stage.
    ///
    /// Transitional stages (development, late) take the mean of the points
    /// they connect.
    pub fn representative(&self, stage: GrowthStage) -> f64 {
        match stage {
            GrowthStage::Initial => self.initial,
            GrowthStage::Development => (self.initial + self.mid) / 2.0,
            GrowthStage::Mid => self.mid,
            GrowthStage::Late => (self.mid + self.end) / 2.0,
        }
    }
}

/// Reference data for one crop.
///
/// Either both stage fields are present, or neither is and the profile only
/// marks a crop that stage-based estimation cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropProfile {
    pub name: &'static str,
    pub stage_durations: Option<StageDurations>,
    pub stage_coefficients: Option<StageCoefficients>,
}

impl CropProfile {
    pub fn is_supported(&self) -> bool {
        self.stage_durations.is_some() && self.stage_coefficients.is_some()
    }

    /// Stage data needed for estimation, or `UnsupportedCrop`.
    pub fn stage_data(&self) -> HydroResult<(StageDurations, StageCoefficients)> {
        match (self.stage_durations, self.stage_coefficients) {
            (Some(durations), Some(coefficients)) => Ok((durations, coefficients)),
            _ => Err(HydroError::UnsupportedCrop {
                crop: self.name.to_string(),
            }),
        }
    }
}

static MAIZE: CropProfile = CropProfile {
    name: "Maize",
    stage_durations: Some(StageDurations {
        initial: 20,
        development: 35,
        mid: 45,
        late: 26,
    }),
    stage_coefficients: Some(StageCoefficients {
        initial: 0.3,
        mid: 1.2,
        end: 0.7,
    }),
};

static BEANS: CropProfile = CropProfile {
    name: "Beans",
    stage_durations: Some(StageDurations {
        initial: 15,
        development: 25,
        mid: 30,
        late: 10,
    }),
    stage_coefficients: Some(StageCoefficients {
        initial: 0.4,
        mid: 1.1,
        end: 0.4,
    }),
};

static TOMATOES: CropProfile = CropProfile {
    name: "Tomatoes",
    stage_durations: Some(StageDurations {
        initial: 30,
        development: 40,
        mid: 60,
        late: 20,
    }),
    stage_coefficients: Some(StageCoefficients {
        initial: 0.4,
        mid: 1.1,
        end: 0.7,
    }),
};

static CUSTOM: CropProfile = CropProfile {
    name: "Other / Custom Crop",
    stage_durations: None,
    stage_coefficients: None,
};

/// Crops known to the reference table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Crop {
    #[default]
    Maize,
    Beans,
    Tomatoes,
    /// Crop without published stage data
    #[serde(alias = "other")]
    #[value(alias = "other")]
    Custom,
}

impl Crop {
    /// Every crop in table order
    pub const ALL: [Crop; 4] = [Crop::Maize, Crop::Beans, Crop::Tomatoes, Crop::Custom];

    pub fn profile(&self) -> &'static CropProfile {
        match self {
            Crop::Maize => &MAIZE,
            Crop::Beans => &BEANS,
            Crop::Tomatoes => &TOMATOES,
            Crop::Custom => &CUSTOM,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.profile().name
    }

    /// Kebab-case identifier used on the command line and in config
    pub fn id(&self) -> &'static str {
        match self {
            Crop::Maize => "maize",
            Crop::Beans => "beans",
            Crop::Tomatoes => "tomatoes",
            Crop::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Crop {
    type Err = String;

    /// Accepts the identifier or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        match needle.as_str() {
            "other" => return Ok(Crop::Custom),
            "tomato" => return Ok(Crop::Tomatoes),
            _ => {}
        }
        Crop::ALL
            .into_iter()
            .find(|c| c.id() == needle || c.display_name().to_lowercase() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Crop::ALL.iter().map(|c| c.id()).collect();
                format!("unknown crop '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_is_seasonal() {
        assert_eq!(
            GrowthStage::ALL,
            [
                GrowthStage::Initial,
                GrowthStage::Development,
                GrowthStage::Mid,
                GrowthStage::Late
            ]
        );
    }

    #[test]
    fn maize_representative_coefficients() {
        let (_, kc) = Crop::Maize.profile().stage_data().unwrap();
        let expected = [0.3, 0.75, 1.2, 0.95];
        for (stage, want) in GrowthStage::ALL.iter().zip(expected) {
            assert!((kc.representative(*stage) - want).abs() < 1e-12, "{stage}");
        }
    }

    #[test]
    fn season_lengths() {
        let days = |c: Crop| c.profile().stage_durations.unwrap().total_days();
        assert_eq!(days(Crop::Maize), 126);
        assert_eq!(days(Crop::Beans), 80);
        assert_eq!(days(Crop::Tomatoes), 150);
    }

    #[test]
    fn every_table_crop_but_custom_is_supported() {
        for crop in Crop::ALL {
            assert_eq!(crop.profile().is_supported(), crop != Crop::Custom);
        }
    }

    #[test]
    fn custom_crop_stage_data_is_unsupported() {
        let err = Crop::Custom.profile().stage_data().unwrap_err();
        assert!(matches!(err, HydroError::UnsupportedCrop { ref crop } if crop == "Other / Custom Crop"));
    }

    #[test]
    fn half_populated_profile_is_unsupported() {
        let profile = CropProfile {
            name: "Half",
            stage_durations: MAIZE.stage_durations,
            stage_coefficients: None,
        };
        assert!(!profile.is_supported());
        assert!(profile.stage_data().is_err());
    }

    #[test]
    fn crop_from_str_accepts_ids_and_display_names() {
        assert_eq!("maize".parse::<Crop>().unwrap(), Crop::Maize);
        assert_eq!("Tomatoes".parse::<Crop>().unwrap(), Crop::Tomatoes);
        assert_eq!("tomato".parse::<Crop>().unwrap(), Crop::Tomatoes);
        assert_eq!("Other / Custom Crop".parse::<Crop>().unwrap(), Crop::Custom);
        assert_eq!(" other ".parse::<Crop>().unwrap(), Crop::Custom);
    }

    #[test]
    fn crop_from_str_rejects_unknown() {
        let err = "rice".parse::<Crop>().unwrap_err();
        assert!(err.contains("unknown crop 'rice'"));
        assert!(err.contains("maize, beans, tomatoes, custom"));
    }

    #[test]
    fn crop_serde_kebab_case() {
        let crop: Crop = serde_json::from_str("\"beans\"").unwrap();
        assert_eq!(crop, Crop::Beans);
        let crop: Crop = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(crop, Crop::Custom);
        assert_eq!(serde_json::to_string(&Crop::Tomatoes).unwrap(), "\"tomatoes\"");
    }
}

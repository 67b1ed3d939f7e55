use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Storm forecast plus household attributes for one evaluation.
///
/// The two trailing flags default to `false`; build with [`AssessmentInput::new`] and opt
/// in through [`with_elderly_or_disabled`](AssessmentInput::with_elderly_or_disabled) and
/// [`with_pets`](AssessmentInput::with_pets).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Sustained wind speed in mph.
    pub wind_speed: f64,
    pub hours_to_landfall: f64,
    pub family_size: u32,
    pub has_car: bool,
    #[serde(default)]
    pub has_elderly_or_disabled: bool,
    #[serde(default)]
    pub has_pets: bool,
}

impl AssessmentInput {
    /// Signed zeros are folded to `+0.0` so `-0` never reaches the narrative.
    pub fn new(wind_speed: f64, hours_to_landfall: f64, family_size: u32, has_car: bool) -> Self {
        Self {
            wind_speed: wind_speed + 0.0,
            hours_to_landfall: hours_to_landfall + 0.0,
            family_size,
            has_car,
            has_elderly_or_disabled: false,
            has_pets: false,
        }
    }

    pub fn with_elderly_or_disabled(mut self, yes: bool) -> Self {
        self.has_elderly_or_disabled = yes;
        self
    }

    pub fn with_pets(mut self, yes: bool) -> Self {
        self.has_pets = yes;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Household factor that raised the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    LargeHousehold,
    NoCar,
    ElderlyOrDisabled,
    Pets,
}

impl Reason {
    pub fn phrase(&self) -> &'static str {
        match self {
            Reason::LargeHousehold => "a large family",
            Reason::NoCar => "no car",
            Reason::ElderlyOrDisabled => "an elderly or disabled member",
            Reason::Pets => "pets",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub risk: RiskCategory,
    pub score: f64,
    pub recommendation: String,
    pub reasons: Vec<Reason>,
    pub summary: String,
    pub packing_list: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RiskReport {
    pub risk: RiskCategory,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct LeaveTimeReport {
    pub risk: RiskCategory,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

/// One named household in a scenario file. Unknown keys are rejected so a misspelled
/// flag cannot silently fall back to `false`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub wind_speed: f64,
    pub hours_to_landfall: f64,
    pub family_size: u32,
    pub has_car: bool,
    #[serde(default)]
    pub has_elderly_or_disabled: bool,
    #[serde(default)]
    pub has_pets: bool,
}

impl Scenario {
    pub fn input(&self) -> AssessmentInput {
        AssessmentInput::new(
            self.wind_speed,
            self.hours_to_landfall,
            self.family_size,
            self.has_car,
        )
        .with_elderly_or_disabled(self.has_elderly_or_disabled)
        .with_pets(self.has_pets)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<Scenario>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub input: AssessmentInput,
    pub result: AssessmentResult,
}

#[derive(Debug, Serialize)]
pub struct AssessReport {
    pub input: AssessmentInput,
    pub result: AssessmentResult,
    pub resources: Vec<Resource>,
}

/// Sustained wind at or above this speed (mph) is hurricane force.
pub const HURRICANE_FORCE_MPH: f64 = 74.0;
/// Sustained wind at or above this speed (mph) counts as a strong storm.
pub const STRONG_STORM_MPH: f64 = 40.0;

/// Landfall within this many hours is imminent.
pub const IMMINENT_LANDFALL_HOURS: f64 = 24.0;
/// Landfall within this many hours is near.
pub const NEAR_LANDFALL_HOURS: f64 = 48.0;

/// Households with more members than this count as large.
pub const LARGE_HOUSEHOLD_SIZE: u32 = 4;

pub const HURRICANE_FORCE_POINTS: f64 = 2.0;
pub const STRONG_STORM_POINTS: f64 = 1.0;
pub const IMMINENT_LANDFALL_POINTS: f64 = 2.0;
pub const NEAR_LANDFALL_POINTS: f64 = 1.0;
pub const LARGE_HOUSEHOLD_POINTS: f64 = 1.0;
pub const NO_CAR_POINTS: f64 = 1.0;
pub const ELDERLY_OR_DISABLED_POINTS: f64 = 1.0;
// Fractional: the score must stay f64.
pub const PETS_POINTS: f64 = 0.5;

/// Minimum score classified as High.
pub const HIGH_RISK_SCORE: f64 = 5.0;
/// Minimum score classified as Medium.
pub const MEDIUM_RISK_SCORE: f64 = 3.0;

pub const LEAVE_HIGH: &str = "Leave within the next 6 hours.";
pub const LEAVE_MEDIUM: &str = "Prepare to leave within 12–18 hours.";
pub const LEAVE_LOW: &str = "Monitor local alerts, but evacuation isn’t urgent yet.";

pub const DISCLAIMER: &str =
    "Always follow instructions from local officials and the National Hurricane Center.";

pub const MIN_WATER_GALLONS: u32 = 1;
pub const WATER_GALLONS_PER_PERSON: u32 = 2;
pub const MIN_MEALS: u32 = 6;
pub const MEALS_PER_PERSON: u32 = 3;

pub const FLASHLIGHT_ITEM: &str = "Flashlight + batteries";
pub const FIRST_AID_ITEM: &str = "Basic first-aid kit";
pub const DOCUMENTS_ITEM: &str = "Important documents (IDs, insurance, meds list)";
pub const PET_SUPPLIES_ITEM: &str = "Pet food + leash/carrier";

pub const OFFICIAL_RESOURCES: &[(&str, &str)] = &[
    ("National Hurricane Center", "https://www.nhc.noaa.gov/"),
    (
        "FEMA Disaster Recovery Center Locator",
        "https://egateway.fema.gov/ESF6/DRCLocator",
    ),
];

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stormsense::RiskCategory;

#[derive(Parser, Debug)]
#[command(name = "stormsense", version, about = "Storm evacuation risk assistant")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (default: ~/.config/stormsense/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Risk, leave-time advice, summary and packing list for one household.
    Assess {
        #[command(flatten)]
        household: HouseholdArgs,
    },
    /// Risk category and score only.
    Risk {
        #[command(flatten)]
        household: HouseholdArgs,
    },
    /// Leave-time advice for a risk category.
    LeaveTime {
        #[arg(long, value_enum)]
        risk: RiskCategory,
    },
    /// Packing checklist for a household.
    Pack {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        family_size: Option<u32>,
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        pets: Option<bool>,
    },
    /// Assess every [[scenario]] in a TOML file.
    Scenarios { file: PathBuf },
    /// Official emergency resources.
    Resources,
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
    Path,
}

// Form inputs; anything omitted falls back to `[form]` in the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct HouseholdArgs {
    #[arg(long, allow_negative_numbers = true, help = "Sustained wind speed (mph)")]
    pub wind_speed: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub hours_to_landfall: Option<f64>,
    #[arg(long, help = "Household size (people)")]
    pub family_size: Option<u32>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub has_car: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub elderly_or_disabled: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub pets: Option<bool>,
}

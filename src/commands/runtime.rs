use crate::cli::{Cli, Commands, HouseholdArgs};
use stormsense::domain::models::{AssessReport, AssessmentInput, LeaveTimeReport, RiskReport};
use stormsense::services::advice::recommend_leave_time;
use stormsense::services::config::{AppConfig, FormDefaults};
use stormsense::services::output::{
    print_one, print_out, render_assessment, render_resources,
};
use stormsense::services::packing::generate_packing_list;
use stormsense::services::resources::official_resources;
use stormsense::services::risk::{categorize, risk_score};
use stormsense::services::scenarios::{assess_scenarios, load_scenarios};
use stormsense::services::summary::generate_summary;
use stormsense::services::validation::{validate_family_size, validate_input};

/// Fill omitted form fields from the configured defaults.
pub fn resolve_input(args: &HouseholdArgs, form: &FormDefaults) -> AssessmentInput {
    AssessmentInput::new(
        args.wind_speed.unwrap_or(form.wind_speed),
        args.hours_to_landfall.unwrap_or(form.hours_to_landfall),
        args.family_size.unwrap_or(form.family_size),
        args.has_car.unwrap_or(form.has_car),
    )
    .with_elderly_or_disabled(
        args.elderly_or_disabled
            .unwrap_or(form.has_elderly_or_disabled),
    )
    .with_pets(args.pets.unwrap_or(form.has_pets))
}

fn checked_input(args: &HouseholdArgs, form: &FormDefaults) -> anyhow::Result<AssessmentInput> {
    let input = resolve_input(args, form);
    validate_input(&input)?;
    Ok(input)
}

pub fn handle_runtime_commands(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Assess { household } => {
            let input = checked_input(household, &config.form)?;
            let result = generate_summary(&input);
            tracing::info!(risk = %result.risk, score = result.score, "assessed household");
            let report = AssessReport {
                input,
                result,
                resources: official_resources(),
            };
            print_one(cli.json, report, |r| {
                format!(
                    "{}\n\n{}",
                    render_assessment(&r.result),
                    render_resources(&r.resources)
                )
            })?;
        }
        Commands::Risk { household } => {
            let input = checked_input(household, &config.form)?;
            let score = risk_score(&input);
            let report = RiskReport {
                risk: categorize(score),
                score,
            };
            print_one(cli.json, report, |r| format!("{}\t{}", r.risk, r.score))?;
        }
        Commands::LeaveTime { risk } => {
            let report = LeaveTimeReport {
                risk: *risk,
                recommendation: recommend_leave_time(*risk).to_string(),
            };
            print_one(cli.json, report, |r| r.recommendation.clone())?;
        }
        Commands::Pack { family_size, pets } => {
            let family_size = family_size.unwrap_or(config.form.family_size);
            validate_family_size(family_size)?;
            let items = generate_packing_list(family_size, pets.unwrap_or(config.form.has_pets));
            print_out(cli.json, &items, |i| format!("- {}", i))?;
        }
        Commands::Scenarios { file } => {
            let scenarios = load_scenarios(file)?;
            let outcomes = assess_scenarios(&scenarios)?;
            tracing::info!(count = outcomes.len(), "assessed scenarios");
            print_out(cli.json, &outcomes, |o| {
                format!("{}\t{}\t{}", o.name, o.result.risk, o.result.score)
            })?;
        }
        Commands::Resources => {
            print_out(cli.json, &official_resources(), |r| {
                format!("{}\t{}", r.name, r.url)
            })?;
        }
        Commands::Config { .. } => unreachable!("handled before runtime dispatch"),
    }
    Ok(())
}

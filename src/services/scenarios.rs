use crate::domain::models::{ScenarioFile, ScenarioOutcome};
use crate::services::summary::generate_summary;
use crate::services::validation::validate_input;
use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("scenario file has no [[scenario]] entries")]
    Empty,
    #[error("duplicate scenario name: {0}")]
    DuplicateName(String),
}

pub fn parse_scenarios(raw: &str) -> anyhow::Result<ScenarioFile> {
    let file: ScenarioFile = toml::from_str(raw)?;
    if file.scenarios.is_empty() {
        return Err(ScenarioError::Empty.into());
    }
    let mut seen = HashSet::new();
    for s in &file.scenarios {
        if !seen.insert(s.name.as_str()) {
            return Err(ScenarioError::DuplicateName(s.name.clone()).into());
        }
    }
    Ok(file)
}

pub fn load_scenarios(path: &Path) -> anyhow::Result<ScenarioFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenarios {}", path.display()))?;
    parse_scenarios(&raw).with_context(|| format!("parsing scenarios {}", path.display()))
}

/// Assess every scenario in file order. Stops at the first invalid one.
pub fn assess_scenarios(file: &ScenarioFile) -> anyhow::Result<Vec<ScenarioOutcome>> {
    let mut out = Vec::with_capacity(file.scenarios.len());
    for s in &file.scenarios {
        let input = s.input();
        validate_input(&input).with_context(|| format!("scenario {}", s.name))?;
        out.push(ScenarioOutcome {
            name: s.name.clone(),
            input,
            result: generate_summary(&input),
        });
    }
    Ok(out)
}

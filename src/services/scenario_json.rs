use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::scenario::ScenarioRunResult;

#[derive(Error, Debug)]
pub enum ScenarioJsonError {
    #[error("failed to read scenario runs: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario runs json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scenario run at position {0} has no scenario id")]
    MissingScenarioId(usize),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioRunRecord {
    scenario_id: String,
    scenario_name: Option<String>,
    method1_met: bool,
    method2_met: bool,
    method3_met: bool,
    corpus_profile: String,
    #[serde(default)]
    sip_profile: String,
    #[serde(default)]
    sip_is_zero: bool,
}

pub fn load_scenario_runs_from_json_file(
    path: &str,
) -> Result<Vec<ScenarioRunResult>, ScenarioJsonError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_scenario_runs_from_json_str(&contents)
}

pub fn deserialize_scenario_runs_from_json_str(
    input: &str,
) -> Result<Vec<ScenarioRunResult>, ScenarioJsonError> {
    let records: Vec<ScenarioRunRecord> = serde_json::from_str(input)?;
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| run_from_record(position, record))
        .collect()
}

fn run_from_record(
    position: usize,
    record: ScenarioRunRecord,
) -> Result<ScenarioRunResult, ScenarioJsonError> {
    if record.scenario_id.trim().is_empty() {
        return Err(ScenarioJsonError::MissingScenarioId(position));
    }
    let scenario_name = match record.scenario_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => record.scenario_id.clone(),
    };

    let mut run = ScenarioRunResult::new(&record.scenario_id, &scenario_name);
    run.method1_met = record.method1_met;
    run.method2_met = record.method2_met;
    run.method3_met = record.method3_met;
    run.corpus_profile = record.corpus_profile;
    run.sip_profile = record.sip_profile;
    run.sip_is_zero = record.sip_is_zero;
    Ok(run)
}

use crate::domain::projection::{
    GoalStatus, MonthlyValue, NetworthProjectionData, ProjectionGoal, ProjectionMetadata,
};
use crate::domain::scenario::ScenarioRunResult;

/// A run with a non-zero SIP and the given per-method outcomes.
pub fn build_run(id: &str, corpus_profile: &str, methods_met: [bool; 3]) -> ScenarioRunResult {
    let mut run = ScenarioRunResult::new(id, &format!("Scenario {id}"));
    run.corpus_profile = corpus_profile.to_string();
    run.sip_profile = "steady".to_string();
    run.method1_met = methods_met[0];
    run.method2_met = methods_met[1];
    run.method3_met = methods_met[2];
    run
}

/// Six runs in bucket display order: 7, 4, 5, 3, 6, 1/2.
pub fn one_run_per_bucket() -> Vec<ScenarioRunResult> {
    let mut sip_not_needed = build_run("S7", "skewed", [true, false, false]);
    sip_not_needed.sip_is_zero = true;
    vec![
        sip_not_needed,
        build_run("S4", "skewed", [false, true, false]),
        build_run("S5", "skewed", [false, false, true]),
        build_run("S3", "skewed", [false, false, false]),
        build_run("S6", "balanced", [false, false, false]),
        build_run("S12", "low", [false, false, false]),
    ]
}

pub fn build_goal(
    name: &str,
    horizon_months: i64,
    confidence_percent: Option<f64>,
    status: Option<GoalStatus>,
) -> ProjectionGoal {
    ProjectionGoal {
        goal_name: name.to_string(),
        horizon_months,
        confidence_percent,
        status,
    }
}

/// A trajectory of `months` entries growing by 10,000 a month, with a step-up
/// event every twelfth month.
pub fn build_projection(months: usize, goals: Vec<ProjectionGoal>) -> NetworthProjectionData {
    let monthly_values = (0..months)
        .map(|month| MonthlyValue {
            month,
            total_networth: 100_000.0 + 10_000.0 * month as f64,
            sip_contributions: 10_000.0 * month as f64,
            events: (month > 0 && month % 12 == 0).then(|| vec!["step_up_annual".to_string()]),
        })
        .collect();
    NetworthProjectionData {
        monthly_values,
        max_month: months.saturating_sub(1),
        method: "method1".to_string(),
        metadata: ProjectionMetadata {
            initial_total_corpus: 100_000.0,
            total_monthly_sip: 10_000.0,
            step_up_percent: 10.0,
            goals,
        },
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    CanBeMet,
    AtRisk,
    CannotBeMet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyValue {
    pub month: usize,
    pub total_networth: f64,
    pub sip_contributions: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
}

impl MonthlyValue {
    pub fn has_event_prefix(&self, prefix: &str) -> bool {
        self.events
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|tag| tag.starts_with(prefix))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionGoal {
    pub goal_name: String,
    pub horizon_months: i64,
    #[serde(default)]
    pub confidence_percent: Option<f64>,
    #[serde(default)]
    pub status: Option<GoalStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionMetadata {
    pub initial_total_corpus: f64,
    #[serde(rename = "totalMonthlySIP")]
    pub total_monthly_sip: f64,
    pub step_up_percent: f64,
    #[serde(default)]
    pub goals: Vec<ProjectionGoal>,
}

/// Month-by-month net worth trajectory of one scenario under one method.
/// `monthly_values[i].month == i` once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworthProjectionData {
    pub monthly_values: Vec<MonthlyValue>,
    pub max_month: usize,
    pub method: String,
    pub metadata: ProjectionMetadata,
}

impl NetworthProjectionData {
    pub fn value_at(&self, month: i64) -> Option<&MonthlyValue> {
        usize::try_from(month)
            .ok()
            .and_then(|index| self.monthly_values.get(index))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalDueDateAnnotation {
    pub month: i64,
    pub goal_name: String,
    pub confidence_percent: Option<f64>,
    pub status: Option<GoalStatus>,
}

impl From<&ProjectionGoal> for GoalDueDateAnnotation {
    fn from(goal: &ProjectionGoal) -> Self {
        Self {
            month: goal.horizon_months,
            goal_name: goal.goal_name.clone(),
            confidence_percent: goal.confidence_percent,
            status: goal.status,
        }
    }
}

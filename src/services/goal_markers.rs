use tracing::debug;

use crate::domain::projection::{GoalDueDateAnnotation, GoalStatus, NetworthProjectionData};

pub const STEP_UP_EVENT_PREFIX: &str = "step_up";

const CONFIDENT_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTier {
    CanBeMet,
    AtRisk,
    CannotBeMet,
}

impl GoalTier {
    /// Status and confidence are both consulted; either one can lift a goal
    /// into a better tier.
    pub fn for_goal(status: Option<GoalStatus>, confidence_percent: Option<f64>) -> Self {
        let confidence = confidence_percent.unwrap_or(0.0);
        if status == Some(GoalStatus::CanBeMet) || confidence >= CONFIDENT_PERCENT {
            GoalTier::CanBeMet
        } else if status == Some(GoalStatus::AtRisk)
            || (confidence > 0.0 && confidence < CONFIDENT_PERCENT)
        {
            GoalTier::AtRisk
        } else {
            GoalTier::CannotBeMet
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GoalTier::CanBeMet => "can be met",
            GoalTier::AtRisk => "at risk",
            GoalTier::CannotBeMet => "cannot be met",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            GoalTier::CanBeMet => (22, 163, 74),
            GoalTier::AtRisk => (234, 179, 8),
            GoalTier::CannotBeMet => (220, 38, 38),
        }
    }

    pub fn hex_color(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalMarker {
    pub month: usize,
    pub networth: f64,
    pub goal_name: String,
    pub confidence_percent: Option<f64>,
    pub tier: GoalTier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyEvent {
    GoalDue(GoalMarker),
    StepUp { month: usize },
}

impl KeyEvent {
    pub fn month(&self) -> usize {
        match self {
            KeyEvent::GoalDue(marker) => marker.month,
            KeyEvent::StepUp { month } => *month,
        }
    }
}

pub fn goal_due_date_annotations(projection: &NetworthProjectionData) -> Vec<GoalDueDateAnnotation> {
    projection
        .metadata
        .goals
        .iter()
        .map(GoalDueDateAnnotation::from)
        .collect()
}

/// One marker per goal whose due month lies on the trajectory. Goals due
/// outside it are skipped.
pub fn goal_markers(projection: &NetworthProjectionData) -> Vec<GoalMarker> {
    goal_due_date_annotations(projection)
        .into_iter()
        .filter_map(|annotation| {
            let Some(value) = projection.value_at(annotation.month) else {
                debug!(
                    goal = %annotation.goal_name,
                    month = annotation.month,
                    months = projection.monthly_values.len(),
                    "goal due date outside trajectory, marker omitted"
                );
                return None;
            };
            Some(GoalMarker {
                month: value.month,
                networth: value.total_networth,
                tier: GoalTier::for_goal(annotation.status, annotation.confidence_percent),
                confidence_percent: annotation.confidence_percent,
                goal_name: annotation.goal_name,
            })
        })
        .collect()
}

pub fn step_up_months(projection: &NetworthProjectionData) -> Vec<usize> {
    projection
        .monthly_values
        .iter()
        .filter(|value| value.has_event_prefix(STEP_UP_EVENT_PREFIX))
        .map(|value| value.month)
        .collect()
}

/// Goal due dates and step-ups ordered by month; a goal due in a step-up
/// month is listed first.
pub fn key_events(projection: &NetworthProjectionData, markers: &[GoalMarker]) -> Vec<KeyEvent> {
    let mut events: Vec<KeyEvent> = markers.iter().cloned().map(KeyEvent::GoalDue).collect();
    events.extend(
        step_up_months(projection)
            .into_iter()
            .map(|month| KeyEvent::StepUp { month }),
    );
    events.sort_by_key(KeyEvent::month);
    events
}

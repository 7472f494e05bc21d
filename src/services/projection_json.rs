use std::io;

use thiserror::Error;

use crate::domain::projection::NetworthProjectionData;

#[derive(Error, Debug)]
pub enum ProjectionJsonError {
    #[error("failed to read projection: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse projection json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("projection has no monthly values")]
    EmptyTrajectory,
    #[error("monthly value at position {position} has month {month}")]
    NonDenseMonth { position: usize, month: usize },
    #[error("maxMonth {max_month} does not match last month {last_month}")]
    MaxMonthMismatch { max_month: usize, last_month: usize },
}

pub fn load_projection_from_json_file(
    path: &str,
) -> Result<NetworthProjectionData, ProjectionJsonError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_projection_from_json_str(&contents)
}

pub fn deserialize_projection_from_json_str(
    input: &str,
) -> Result<NetworthProjectionData, ProjectionJsonError> {
    let projection: NetworthProjectionData = serde_json::from_str(input)?;
    validate_projection(&projection)?;
    Ok(projection)
}

/// Month indices must be 0-based and dense, and `maxMonth` must name the
/// last of them.
pub fn validate_projection(projection: &NetworthProjectionData) -> Result<(), ProjectionJsonError> {
    if projection.monthly_values.is_empty() {
        return Err(ProjectionJsonError::EmptyTrajectory);
    }
    for (position, value) in projection.monthly_values.iter().enumerate() {
        if value.month != position {
            return Err(ProjectionJsonError::NonDenseMonth {
                position,
                month: value.month,
            });
        }
    }
    let last_month = projection.monthly_values.len() - 1;
    if projection.max_month != last_month {
        return Err(ProjectionJsonError::MaxMonthMismatch {
            max_month: projection.max_month,
            last_month,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::projection::GoalStatus;

    const PROJECTION_JSON: &str = r#"{
  "monthlyValues": [
    {"month": 0, "totalNetworth": 500000, "sipContributions": 0},
    {"month": 1, "totalNetworth": 515000.5, "sipContributions": 10000, "events": []},
    {"month": 2, "totalNetworth": 531000, "sipContributions": 20000, "events": ["step_up_10pct"]}
  ],
  "maxMonth": 2,
  "method": "method2",
  "metadata": {
    "initialTotalCorpus": 500000,
    "totalMonthlySIP": 10000,
    "stepUpPercent": 10,
    "goals": [
      {"goalName": "Car", "horizonMonths": 2, "confidencePercent": 72.5, "status": "at_risk"},
      {"goalName": "House", "horizonMonths": 36}
    ]
  }
}"#;

    #[test]
    fn deserialize_projection_reads_trajectory_and_goals() {
        let projection = deserialize_projection_from_json_str(PROJECTION_JSON).unwrap();

        assert_eq!(projection.monthly_values.len(), 3);
        assert_eq!(projection.monthly_values[1].total_networth, 515000.5);
        assert_eq!(projection.monthly_values[0].events, None);
        assert!(projection.monthly_values[2].has_event_prefix("step_up"));
        assert_eq!(projection.max_month, 2);
        assert_eq!(projection.method, "method2");
        assert_eq!(projection.metadata.total_monthly_sip, 10000.0);

        let goals = &projection.metadata.goals;
        assert_eq!(goals[0].status, Some(GoalStatus::AtRisk));
        assert_eq!(goals[0].confidence_percent, Some(72.5));
        assert_eq!(goals[1].status, None);
        assert_eq!(goals[1].confidence_percent, None);
    }

    #[test]
    fn gap_in_months_is_rejected() {
        let input = PROJECTION_JSON.replace(r#""month": 1,"#, r#""month": 3,"#);

        let error = deserialize_projection_from_json_str(&input).expect_err("expected error");
        assert!(matches!(
            error,
            ProjectionJsonError::NonDenseMonth { position: 1, month: 3 }
        ));
    }

    #[test]
    fn max_month_beyond_trajectory_is_rejected() {
        let input = PROJECTION_JSON.replace(r#""maxMonth": 2"#, r#""maxMonth": 360"#);

        let error = deserialize_projection_from_json_str(&input).expect_err("expected error");
        assert!(matches!(
            error,
            ProjectionJsonError::MaxMonthMismatch { max_month: 360, last_month: 2 }
        ));
    }

    #[test]
    fn empty_trajectory_is_rejected() {
        let input = r#"{"monthlyValues": [], "maxMonth": 0, "method": "m1",
            "metadata": {"initialTotalCorpus": 0, "totalMonthlySIP": 0, "stepUpPercent": 0}}"#;

        let error = deserialize_projection_from_json_str(input).expect_err("expected error");
        assert!(matches!(error, ProjectionJsonError::EmptyTrajectory));
    }

    #[test]
    fn unknown_goal_status_is_a_parse_error() {
        let input = PROJECTION_JSON.replace("at_risk", "maybe");

        let error = deserialize_projection_from_json_str(&input).expect_err("expected error");
        assert!(matches!(error, ProjectionJsonError::Parse(_)));
    }
}

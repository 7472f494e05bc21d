use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::services::bucket_markdown::DEFAULT_REPORT_TITLE;
use crate::services::classifier::ClassifierSettings;
use crate::services::projection_graph::{GraphOptions, DEFAULT_CHART_TITLE, DEFAULT_CURRENCY_SYMBOL};

#[derive(Error, Debug)]
pub enum ReportConfigError {
    #[error("failed to read report config: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse report config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub report_title: String,
    pub negligible_sip_profiles: Vec<String>,
    pub chart_title: String,
    pub currency_symbol: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report_title: DEFAULT_REPORT_TITLE.to_string(),
            negligible_sip_profiles: ClassifierSettings::default().negligible_sip_profiles,
            chart_title: DEFAULT_CHART_TITLE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, ReportConfigError> {
        let contents = std::fs::read_to_string(filepath)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ReportConfigError> {
        // An empty document deserializes to unit, not a mapping.
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }

    /// Defaults when no config file is given.
    pub fn load(filepath: Option<&str>) -> Result<Self, ReportConfigError> {
        match filepath {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn classifier_settings(&self) -> ClassifierSettings {
        ClassifierSettings {
            negligible_sip_profiles: self.negligible_sip_profiles.clone(),
        }
    }

    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            title: self.chart_title.clone(),
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ReportConfig::from_yaml_str("report_title: Household plans\n").unwrap();

        assert_eq!(config.report_title, "Household plans");
        assert_eq!(config.negligible_sip_profiles, vec!["zero", "negligible"]);
        assert_eq!(config.chart_title, DEFAULT_CHART_TITLE);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn full_config_maps_to_settings() {
        let yaml = "report_title: Plans\nnegligible_sip_profiles: [none]\nchart_title: Growth\ncurrency_symbol: \"$\"\n";
        let config = ReportConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.classifier_settings().negligible_sip_profiles, vec!["none"]);
        let options = config.graph_options();
        assert_eq!(options.title, "Growth");
        assert_eq!(options.currency_symbol, "$");
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ReportConfig::from_yaml_str("").unwrap(), ReportConfig::default());
        assert_eq!(ReportConfig::load(None).unwrap(), ReportConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let error = ReportConfig::from_yaml_str("report_tittle: typo\n").expect_err("expected error");
        assert!(matches!(error, ReportConfigError::Parse(_)));
    }
}

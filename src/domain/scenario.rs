/// Outcome of one scenario across the three computation methods, as produced
/// by the projection engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioRunResult {
    pub scenario_id: String,
    pub scenario_name: String,
    pub method1_met: bool,
    pub method2_met: bool,
    pub method3_met: bool,
    pub corpus_profile: String,
    pub sip_profile: String,
    pub sip_is_zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusDistribution {
    Skewed,
    Balanced,
    Unspecified,
}

impl ScenarioRunResult {
    pub fn new(scenario_id: &str, scenario_name: &str) -> Self {
        Self {
            scenario_id: scenario_id.to_string(),
            scenario_name: scenario_name.to_string(),
            ..Self::default()
        }
    }

    /// Profile labels are computed upstream; only `skewed` and `balanced`
    /// are recognised here.
    pub fn corpus_distribution(&self) -> CorpusDistribution {
        let profile = self.corpus_profile.trim();
        if profile.eq_ignore_ascii_case("skewed") {
            CorpusDistribution::Skewed
        } else if profile.eq_ignore_ascii_case("balanced") {
            CorpusDistribution::Balanced
        } else {
            CorpusDistribution::Unspecified
        }
    }

    pub fn any_method_met(&self) -> bool {
        self.method1_met || self.method2_met || self.method3_met
    }
}

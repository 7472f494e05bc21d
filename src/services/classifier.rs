use tracing::debug;

use crate::domain::bucket::BucketKey;
use crate::domain::classification::{Classification, ClassificationDebug};
use crate::domain::scenario::{CorpusDistribution, ScenarioRunResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierSettings {
    /// SIP profile labels treated the same as a zero SIP.
    pub negligible_sip_profiles: Vec<String>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            negligible_sip_profiles: vec!["zero".to_string(), "negligible".to_string()],
        }
    }
}

/// The subset of a run the bucket rules look at.
struct ScenarioFacts {
    sip_negligible: bool,
    any_met: bool,
    distribution: CorpusDistribution,
    method1_met: bool,
    method2_met: bool,
    method3_met: bool,
}

impl ScenarioFacts {
    fn from_run(run: &ScenarioRunResult, settings: &ClassifierSettings) -> Self {
        let sip_profile = run.sip_profile.trim();
        let sip_negligible = run.sip_is_zero
            || settings
                .negligible_sip_profiles
                .iter()
                .any(|label| label.eq_ignore_ascii_case(sip_profile));
        Self {
            sip_negligible,
            any_met: run.any_method_met(),
            distribution: run.corpus_distribution(),
            method1_met: run.method1_met,
            method2_met: run.method2_met,
            method3_met: run.method3_met,
        }
    }

    fn skewed(&self) -> bool {
        self.distribution == CorpusDistribution::Skewed
    }

    fn balanced(&self) -> bool {
        self.distribution == CorpusDistribution::Balanced
    }
}

struct BucketRule {
    name: &'static str,
    bucket: BucketKey,
    applies: fn(&ScenarioFacts) -> bool,
}

/// Evaluated top-down; the first rule that applies decides the bucket.
static BUCKET_RULES: [BucketRule; 6] = [
    BucketRule {
        name: "sip-not-needed",
        bucket: BucketKey::SipNotNeeded,
        applies: |facts| facts.sip_negligible && facts.any_met,
    },
    BucketRule {
        name: "skewed-meets-via-method-1-or-2",
        bucket: BucketKey::SkewedMeetsViaMethod12,
        applies: |facts| facts.skewed() && (facts.method1_met || facts.method2_met),
    },
    BucketRule {
        name: "skewed-meets-only-via-rebalancing",
        bucket: BucketKey::SkewedMeetsOnlyViaRebalancing,
        applies: |facts| {
            facts.skewed() && facts.method3_met && !facts.method1_met && !facts.method2_met
        },
    },
    BucketRule {
        name: "skewed-cannot-meet",
        bucket: BucketKey::SkewedCannotMeet,
        applies: |facts| facts.skewed() && !facts.any_met,
    },
    BucketRule {
        name: "balanced-cannot-meet",
        bucket: BucketKey::BalancedCannotMeet,
        applies: |facts| facts.balanced() && !facts.any_met,
    },
    BucketRule {
        name: "corpus-or-sip-too-low",
        bucket: BucketKey::CorpusOrSipTooLow,
        applies: |facts| !facts.any_met,
    },
];

/// Unmatched runs always succeeded under some method, since the last rule
/// catches every run where nothing succeeded.
const FALLBACK_BUCKET: BucketKey = BucketKey::SipNotNeeded;

pub fn classify(run: &ScenarioRunResult, settings: &ClassifierSettings) -> Classification {
    let facts = ScenarioFacts::from_run(run, settings);
    let (bucket, needs_review) = match BUCKET_RULES.iter().find(|rule| (rule.applies)(&facts)) {
        Some(rule) => {
            debug!(scenario = %run.scenario_id, rule = rule.name, bucket = %rule.bucket, "scenario classified");
            (rule.bucket, false)
        }
        None => {
            debug!(scenario = %run.scenario_id, bucket = %FALLBACK_BUCKET, "no bucket rule matched, flagged for review");
            (FALLBACK_BUCKET, true)
        }
    };

    Classification {
        bucket,
        needs_review,
        debug: ClassificationDebug {
            corpus_profile: run.corpus_profile.clone(),
            sip_profile: run.sip_profile.clone(),
            sip_is_zero: run.sip_is_zero,
            method1_met: run.method1_met,
            method2_met: run.method2_met,
            method3_met: run.method3_met,
        },
    }
}

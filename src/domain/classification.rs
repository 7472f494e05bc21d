use serde::{Deserialize, Serialize};

use crate::domain::bucket::BucketKey;

/// Raw inputs behind a bucket decision, kept so a reviewer can audit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationDebug {
    pub corpus_profile: String,
    pub sip_profile: String,
    pub sip_is_zero: bool,
    pub method1_met: bool,
    pub method2_met: bool,
    pub method3_met: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub bucket: BucketKey,
    pub needs_review: bool,
    pub debug: ClassificationDebug,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioBucketSummary {
    pub scenario_id: String,
    pub scenario_name: String,
    #[serde(flatten)]
    pub classification: Classification,
    pub summary: String,
}

impl ScenarioBucketSummary {
    pub fn bucket(&self) -> BucketKey {
        self.classification.bucket
    }

    pub fn needs_review(&self) -> bool {
        self.classification.needs_review
    }
}

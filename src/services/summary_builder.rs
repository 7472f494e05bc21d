use tracing::info;

use crate::domain::bucket::BucketCounts;
use crate::domain::classification::ScenarioBucketSummary;
use crate::domain::scenario::ScenarioRunResult;
use crate::services::classifier::{classify, ClassifierSettings};

#[derive(Debug, Clone, PartialEq)]
pub struct BucketSummaryBatch {
    pub summaries: Vec<ScenarioBucketSummary>,
    pub counts: BucketCounts,
}

impl BucketSummaryBatch {
    pub fn needs_review(&self) -> impl Iterator<Item = &ScenarioBucketSummary> {
        self.summaries.iter().filter(|summary| summary.needs_review())
    }
}

pub fn build_summaries(
    runs: &[ScenarioRunResult],
    settings: &ClassifierSettings,
) -> BucketSummaryBatch {
    let summaries: Vec<ScenarioBucketSummary> = runs
        .iter()
        .map(|run| {
            let classification = classify(run, settings);
            ScenarioBucketSummary {
                scenario_id: run.scenario_id.clone(),
                scenario_name: run.scenario_name.clone(),
                summary: classification.bucket.summary_sentence().to_string(),
                classification,
            }
        })
        .collect();
    let counts = BucketCounts::tally(summaries.iter().map(|summary| summary.bucket()));

    let batch = BucketSummaryBatch { summaries, counts };
    info!(
        scenarios = batch.summaries.len(),
        needs_review = batch.needs_review().count(),
        "built bucket summaries"
    );
    batch
}

use crate::domain::bucket::BucketCounts;
use crate::services::summary_builder::BucketSummaryBatch;

pub fn format_bucket_report(batch: &BucketSummaryBatch) -> String {
    let mut lines = Vec::new();
    lines.push("Bucket Report".to_string());
    lines.push(format!("Scenarios: {}", batch.summaries.len()));
    lines.push(format!("Needs review: {}", batch.needs_review().count()));
    lines.push(String::new());
    lines.extend(format_count_table(&batch.counts));

    lines.join("\n")
}

fn format_count_table(counts: &BucketCounts) -> Vec<String> {
    let mut lines = vec![
        "Bucket | Count | Title".to_string(),
        "-------|-------|------".to_string(),
    ];
    lines.extend(
        counts
            .iter()
            .map(|(key, count)| format!("{} | {count} | {}", key.label(), key.title())),
    );
    lines
}

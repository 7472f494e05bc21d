use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::bucket::{BucketCounts, BucketKey};
use crate::domain::classification::ScenarioBucketSummary;

#[derive(Error, Debug)]
pub enum BucketReportError {
    #[error("bucket report i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid bucket report json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bucket report has no count for bucket {0}")]
    MissingBucketCount(BucketKey),
    #[error("bucket {bucket} declares {declared} scenarios but lists {listed}")]
    CountMismatch {
        bucket: BucketKey,
        declared: usize,
        listed: usize,
    },
}

/// Machine-readable bucket report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BucketReportDocument {
    pub generated_at: String,
    pub counts_by_bucket: BucketCounts,
    pub summaries: Vec<ScenarioBucketSummary>,
}

pub fn to_json_document(
    summaries: &[ScenarioBucketSummary],
    counts: &BucketCounts,
    generated_at: DateTime<Utc>,
) -> BucketReportDocument {
    BucketReportDocument {
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        counts_by_bucket: counts.clone(),
        summaries: summaries.to_vec(),
    }
}

pub fn serialize_report_to_json<W: Write>(
    writer: &mut W,
    document: &BucketReportDocument,
) -> Result<(), BucketReportError> {
    serde_json::to_writer_pretty(&mut *writer, document)?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub fn load_report_from_json_file(path: &str) -> Result<BucketReportDocument, BucketReportError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_report_from_json_str(&contents)
}

/// Bucket labels are validated while parsing; counts must cover every bucket
/// and agree with the listed summaries.
pub fn deserialize_report_from_json_str(
    input: &str,
) -> Result<BucketReportDocument, BucketReportError> {
    let document: BucketReportDocument = serde_json::from_str(input)?;
    if let Some(bucket) = document.counts_by_bucket.missing_bucket() {
        return Err(BucketReportError::MissingBucketCount(bucket));
    }

    let listed = BucketCounts::tally(document.summaries.iter().map(|summary| summary.bucket()));
    for (bucket, declared) in document.counts_by_bucket.iter() {
        let listed = listed.get(bucket);
        if listed != declared {
            return Err(BucketReportError::CountMismatch {
                bucket,
                declared,
                listed,
            });
        }
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::classifier::ClassifierSettings;
    use crate::services::summary_builder::build_summaries;
    use crate::test_support::{build_run, one_run_per_bucket};
    use chrono::TimeZone;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
    }

    fn document_json(runs: &[crate::domain::scenario::ScenarioRunResult]) -> String {
        let batch = build_summaries(runs, &ClassifierSettings::default());
        let document = to_json_document(&batch.summaries, &batch.counts, generated_at());
        let mut buffer = Vec::new();
        serialize_report_to_json(&mut buffer, &document).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn document_has_timestamp_counts_and_summaries() {
        let json = document_json(&[build_run("S4", "skewed", [true, false, false])]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generatedAt"], "2026-10-19T08:30:00Z");
        assert_eq!(value["countsByBucket"]["4"], 1);
        assert_eq!(value["countsByBucket"]["1/2"], 0);
        let summary = &value["summaries"][0];
        assert_eq!(summary["scenarioId"], "S4");
        assert_eq!(summary["scenarioName"], "Scenario S4");
        assert_eq!(summary["bucket"], "4");
        assert_eq!(summary["needsReview"], false);
        assert_eq!(summary["debug"]["corpusProfile"], "skewed");
        assert_eq!(summary["debug"]["method1Met"], true);
        assert!(summary["summary"].as_str().unwrap().contains("method 1 or method 2"));
    }

    #[test]
    fn counts_keep_display_order_in_output() {
        let json = document_json(&one_run_per_bucket());
        let positions: Vec<usize> = [r#""7": 1"#, r#""4": 1"#, r#""5": 1"#, r#""3": 1"#, r#""6": 1"#, r#""1/2": 1"#]
            .iter()
            .map(|entry| json.find(entry).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn serialization_is_stable_for_identical_input() {
        assert_eq!(document_json(&one_run_per_bucket()), document_json(&one_run_per_bucket()));
    }

    #[test]
    fn written_document_reads_back() {
        let json = document_json(&one_run_per_bucket());
        let document = deserialize_report_from_json_str(&json).unwrap();

        assert_eq!(document.summaries.len(), 6);
        assert_eq!(document.counts_by_bucket.total(), 6);
        assert_eq!(document.summaries[5].bucket(), BucketKey::CorpusOrSipTooLow);
    }

    #[test]
    fn unknown_bucket_label_fails_loudly() {
        let json = document_json(&[build_run("S4", "skewed", [true, false, false])])
            .replace(r#""bucket": "4""#, r#""bucket": "8""#);

        let error = deserialize_report_from_json_str(&json).expect_err("expected parse error");
        assert!(matches!(error, BucketReportError::Json(_)));
        assert!(error.to_string().contains("unknown bucket label: 8"));
    }

    #[test]
    fn missing_bucket_count_is_rejected() {
        let json = document_json(&[]).replace(r#""6": 0,"#, "");

        let error = deserialize_report_from_json_str(&json).expect_err("expected missing count");
        assert!(matches!(
            error,
            BucketReportError::MissingBucketCount(BucketKey::BalancedCannotMeet)
        ));
    }

    #[test]
    fn mismatched_count_is_rejected() {
        let json = document_json(&[build_run("S4", "skewed", [true, false, false])])
            .replace(r#""4": 1"#, r#""4": 3"#);

        let error = deserialize_report_from_json_str(&json).expect_err("expected mismatch");
        assert!(matches!(
            error,
            BucketReportError::CountMismatch {
                bucket: BucketKey::SkewedMeetsViaMethod12,
                declared: 3,
                listed: 1,
            }
        ));
    }
}

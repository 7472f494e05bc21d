use crate::domain::bucket::{BucketCounts, BucketKey};
use crate::domain::classification::{ClassificationDebug, ScenarioBucketSummary};

pub const DEFAULT_REPORT_TITLE: &str = "Scenario Bucket Summary";

const NEEDS_REVIEW_NOTE: &str = "These scenarios meet all basic goals under at least one method \
but do not match a specific bucket rule. They are listed under bucket 7 until reviewed.";

/// Renders the bucket summary grouped by bucket in display order, followed by
/// the needs-review section.
pub fn render_markdown(
    title: &str,
    summaries: &[ScenarioBucketSummary],
    counts: &BucketCounts,
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# {title}"));
    lines.push(String::new());
    lines.push(format!("Total scenarios: {}", counts.total()));

    for key in BucketKey::ALL {
        lines.push(String::new());
        lines.extend(render_bucket_section(key, summaries, counts.get(key)));
    }

    lines.push(String::new());
    lines.extend(render_needs_review_section(summaries));

    let mut markdown = lines.join("\n");
    markdown.push('\n');
    markdown
}

fn render_bucket_section(
    key: BucketKey,
    summaries: &[ScenarioBucketSummary],
    count: usize,
) -> Vec<String> {
    let mut lines = vec![
        format!("## Bucket {}: {}", key.label(), key.title()),
        String::new(),
        format!("Count: {count}"),
        String::new(),
    ];

    let mut members = summaries.iter().filter(|summary| summary.bucket() == key).peekable();
    if members.peek().is_none() {
        lines.push("_No scenarios._".to_string());
        return lines;
    }
    for summary in members {
        lines.push(format_scenario_bullet(summary));
        lines.push(format!("  {}", summary.summary));
    }
    lines
}

fn render_needs_review_section(summaries: &[ScenarioBucketSummary]) -> Vec<String> {
    let mut lines = vec![
        "## Needs review".to_string(),
        String::new(),
        NEEDS_REVIEW_NOTE.to_string(),
        String::new(),
    ];

    let flagged: Vec<String> = summaries
        .iter()
        .filter(|summary| summary.needs_review())
        .map(|summary| {
            format!(
                "- {} {}",
                inline_code(&summary.scenario_id),
                inline_text(&summary.scenario_name)
            )
        })
        .collect();
    if flagged.is_empty() {
        lines.push("_None._".to_string());
    } else {
        lines.extend(flagged);
    }
    lines
}

fn format_scenario_bullet(summary: &ScenarioBucketSummary) -> String {
    let review_tag = if summary.needs_review() {
        " [needs-review]"
    } else {
        ""
    };
    format!(
        "- {} {}{review_tag} ({})",
        inline_code(&summary.scenario_id),
        inline_text(&summary.scenario_name),
        format_debug(&summary.classification.debug)
    )
}

/// Collapses line breaks so user text stays inside its bullet.
fn inline_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn inline_code(text: &str) -> String {
    format!("`{}`", inline_text(text).replace('`', "'"))
}

fn format_debug(debug: &ClassificationDebug) -> String {
    format!(
        "corpusProfile={}, sipProfile={}, sipIsZero={}, method1Met={}, method2Met={}, method3Met={}",
        inline_text(&debug.corpus_profile),
        inline_text(&debug.sip_profile),
        debug.sip_is_zero,
        debug.method1_met,
        debug.method2_met,
        debug.method3_met
    )
}

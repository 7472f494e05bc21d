use serde_json::{json, Value};

use crate::domain::projection::NetworthProjectionData;
use crate::services::currency_format::format_currency;
use crate::services::goal_markers::{goal_markers, key_events, GoalMarker, KeyEvent};
use crate::services::time_axis::{month_label, month_labels};

pub const DEFAULT_CHART_TITLE: &str = "Net worth projection";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

const NETWORTH_LINE_COLOR: &str = "#2563eb";
const NETWORTH_FILL_COLOR: &str = "rgba(37, 99, 235, 0.15)";
const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOptions {
    pub title: String,
    pub currency_symbol: String,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<script src="__CHART_JS_URL__"></script>
<style>
body { font-family: sans-serif; margin: 2rem; color: #1f2937; }
.metadata dl { display: grid; grid-template-columns: max-content auto; gap: 0.25rem 1rem; }
.metadata dt { font-weight: bold; }
.chart { position: relative; height: 480px; }
</style>
</head>
<body>
<h1>__TITLE__</h1>
__METADATA__
<div class="chart"><canvas id="networth-chart"></canvas></div>
__EVENTS__
<script>
const monthLabels = __MONTH_LABELS__;
const currencySymbol = __CURRENCY_SYMBOL__;
const groupedDigits = new Intl.NumberFormat('en-IN', { maximumFractionDigits: 0 });
const formatCurrency = (value) => (value < 0 ? '-' : '') + currencySymbol + groupedDigits.format(Math.abs(value));
const config = __CHART_CONFIG__;
config.options.scales.x.ticks.callback = (value) => monthLabels[value] ?? value;
config.options.scales.y.ticks.callback = (value) => formatCurrency(value);
config.options.plugins.tooltip.callbacks = {
  title: (items) => items.length ? (monthLabels[items[0].parsed.x] ?? '') : '',
  label: (item) => item.dataset.label + ': ' + formatCurrency(item.parsed.y),
};
new Chart(document.getElementById('networth-chart'), config);
</script>
</body>
</html>
"#;

/// Builds a standalone HTML page: metadata panel, Chart.js chart of the net
/// worth trajectory with goal markers, and the key-events list.
pub fn build_graph_document(projection: &NetworthProjectionData, options: &GraphOptions) -> String {
    let markers = goal_markers(projection);
    let events = key_events(projection, &markers);
    let labels = month_labels(projection.monthly_values.len());

    let slots = [
        ("__TITLE__", escape_html(&options.title)),
        ("__CHART_JS_URL__", CHART_JS_URL.to_string()),
        ("__METADATA__", render_metadata_panel(projection, &options.currency_symbol)),
        ("__EVENTS__", render_key_events(&events, &options.currency_symbol)),
        ("__MONTH_LABELS__", script_json(&json!(labels))),
        ("__CURRENCY_SYMBOL__", script_json(&json!(options.currency_symbol))),
        ("__CHART_CONFIG__", script_json(&chart_config(projection, &markers, &options.title))),
    ];
    fill_template(DOCUMENT_TEMPLATE, &slots)
}

/// Substitutes placeholders in one left-to-right pass. Inserted content is
/// never scanned for further placeholders.
fn fill_template(template: &str, slots: &[(&str, String)]) -> String {
    let mut document = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let next = slots
            .iter()
            .filter_map(|(marker, content)| rest.find(marker).map(|at| (at, *marker, content)))
            .min_by_key(|(at, _, _)| *at);
        match next {
            Some((at, marker, content)) => {
                document.push_str(&rest[..at]);
                document.push_str(content);
                rest = &rest[at + marker.len()..];
            }
            None => {
                document.push_str(rest);
                return document;
            }
        }
    }
}

pub fn chart_config(projection: &NetworthProjectionData, markers: &[GoalMarker], title: &str) -> Value {
    let trajectory: Vec<Value> = projection
        .monthly_values
        .iter()
        .map(|value| json!({ "x": value.month, "y": value.total_networth }))
        .collect();

    let mut datasets = vec![json!({
        "label": "Net worth",
        "type": "line",
        "data": trajectory,
        "borderColor": NETWORTH_LINE_COLOR,
        "backgroundColor": NETWORTH_FILL_COLOR,
        "fill": true,
        "pointRadius": 0,
        "tension": 0.2,
    })];
    datasets.extend(markers.iter().map(|marker| {
        let color = marker.tier.hex_color();
        json!({
            "label": format!("{} ({})", marker.goal_name, marker.tier.description()),
            "type": "scatter",
            "data": [{ "x": marker.month, "y": marker.networth }],
            "showLine": false,
            "pointRadius": 7,
            "pointHoverRadius": 9,
            "borderColor": color,
            "backgroundColor": color,
        })
    }));

    let last_month = projection.monthly_values.len().saturating_sub(1);
    json!({
        "type": "line",
        "data": { "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "interaction": { "mode": "nearest", "intersect": false },
            "plugins": {
                "title": { "display": true, "text": title },
                "legend": { "position": "bottom" },
                "tooltip": {},
            },
            "scales": {
                "x": {
                    "type": "linear",
                    "min": 0,
                    "max": last_month,
                    "title": { "display": true, "text": "Time" },
                    "ticks": { "stepSize": 12 },
                },
                "y": {
                    "title": { "display": true, "text": "Net worth" },
                    "ticks": {},
                },
            },
        },
    })
}

fn render_metadata_panel(projection: &NetworthProjectionData, currency_symbol: &str) -> String {
    let metadata = &projection.metadata;
    let rows = [
        ("Initial corpus", format_currency(currency_symbol, metadata.initial_total_corpus)),
        ("Monthly SIP", format_currency(currency_symbol, metadata.total_monthly_sip)),
        ("Annual SIP step-up", format!("{}%", metadata.step_up_percent)),
        (
            "Horizon",
            format!("{} ({} months)", month_label(projection.max_month), projection.max_month),
        ),
        ("Method", projection.method.clone()),
        ("Goals", metadata.goals.len().to_string()),
    ];

    let mut lines = vec![
        "<section class=\"metadata\">".to_string(),
        "<h2>Planning parameters</h2>".to_string(),
        "<dl>".to_string(),
    ];
    lines.extend(rows.iter().map(|(term, detail)| {
        format!("<dt>{}</dt><dd>{}</dd>", escape_html(term), escape_html(detail))
    }));
    lines.push("</dl>".to_string());
    lines.push("</section>".to_string());
    lines.join("\n")
}

fn render_key_events(events: &[KeyEvent], currency_symbol: &str) -> String {
    let mut lines = vec![
        "<section class=\"events\">".to_string(),
        "<h2>Key events</h2>".to_string(),
    ];
    if events.is_empty() {
        lines.push("<p>No key events.</p>".to_string());
    } else {
        lines.push("<ul>".to_string());
        lines.extend(events.iter().map(|event| {
            format!(
                "<li>{}: {}</li>",
                escape_html(&month_label(event.month())),
                escape_html(&describe_event(event, currency_symbol))
            )
        }));
        lines.push("</ul>".to_string());
    }
    lines.push("</section>".to_string());
    lines.join("\n")
}

fn describe_event(event: &KeyEvent, currency_symbol: &str) -> String {
    match event {
        KeyEvent::GoalDue(marker) => {
            let confidence = marker
                .confidence_percent
                .map(|percent| format!(", confidence {percent}%"))
                .unwrap_or_default();
            format!(
                "Goal \"{}\" due, {}{confidence}, projected net worth {}",
                marker.goal_name,
                marker.tier.description(),
                format_currency(currency_symbol, marker.networth)
            )
        }
        KeyEvent::StepUp { .. } => "SIP step-up".to_string(),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// JSON safe to inline in a `<script>` element.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Tick label for a 0-based month index: `Month 7` in the first year, then
/// `2Y 3M`.
pub fn month_label(month: usize) -> String {
    if month < 12 {
        format!("Month {}", month % 12)
    } else {
        format!("{}Y {}M", month / 12, month % 12)
    }
}

pub fn month_labels(count: usize) -> Vec<String> {
    (0..count).map(month_label).collect()
}

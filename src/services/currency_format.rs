/// Rounds to whole units and groups digits the Indian way: the last three
/// digits, then pairs (`12,34,567`).
pub fn group_digits(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return value.to_string();
    }
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let split = digits.len().saturating_sub(3);
    let (head, tail) = digits.split_at(split);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.push(tail);

    let grouped = groups.join(",");
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_currency(symbol: &str, value: f64) -> String {
    let grouped = group_digits(value);
    match grouped.strip_prefix('-') {
        Some(magnitude) => format!("-{symbol}{magnitude}"),
        None => format!("{symbol}{grouped}"),
    }
}

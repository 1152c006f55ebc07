/// 千分位格式化，例如 `12345` -> `12,345`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Listing score, always one decimal place.
pub fn format_score(value: f64) -> String {
    format!("{:.1}", value)
}

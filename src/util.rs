/// Round-half-up integer percentage of `part` over `total`; 0 when `total`
/// is 0.
pub fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as u8
    }
}

/// Format a second count as `m:ss` for the event list and seek banner.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

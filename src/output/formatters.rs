//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, Utc};

/// Salary with thousands separators, e.g. `$90,000`
pub fn format_salary(salary: u64) -> String {
    let digits = salary.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

/// Creation date in local time, or `--` when the server sent none
pub fn format_posted(created_at: Option<&DateTime<Utc>>) -> String {
    match created_at {
        Some(ts) => ts.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => "--".to_string(),
    }
}

/// Truncate to `max_chars` characters, ending in `...` when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

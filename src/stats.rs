use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::format::Format;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display metadata for a previewed file.
///
/// Everything is derived from the file handle, its raw content, and the
/// current time. `last_opened` is the only field that changes after
/// extraction: it is refreshed on every display, including history replays.
/// Field names in the serialized form match the original history records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub format: Format,
    pub last_modified: String,
    pub last_opened: String,
    pub lines: usize,
    pub characters: String,
}

impl FileStats {
    /// Derive stats from a file's name, content, byte size, and mtime.
    pub fn extract(
        name: &str,
        content: &str,
        size_bytes: u64,
        modified: Option<SystemTime>,
    ) -> Self {
        let now = Local::now();
        let last_modified = modified
            .map(|t| format_timestamp(t.into()))
            .unwrap_or_else(|| format_timestamp(now));

        Self {
            name: name.to_owned(),
            size: format_size(size_bytes),
            format: Format::for_name(name),
            last_modified,
            last_opened: format_timestamp(now),
            // A trailing newline yields one extra empty segment, on purpose.
            lines: content.split('\n').count(),
            characters: group_digits(content.chars().count()),
        }
    }

    /// Refresh `last_opened` to the current moment.
    pub fn refresh_opened(&mut self) {
        self.last_opened = format_timestamp(Local::now());
    }
}

fn format_timestamp(t: DateTime<Local>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Current time as epoch milliseconds, the unit history timestamps use.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a byte count with 1024-based units, two decimals at most,
/// trailing zeros trimmed.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut s = format!("{value:.2}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    format!("{s} {}", UNITS[unit])
}

/// Insert comma grouping separators into a count.
pub fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Coarse relative-time label for history rows.
pub fn format_time_ago(timestamp_millis: i64, now_millis: i64) -> String {
    let diff = now_millis.saturating_sub(timestamp_millis);

    let minutes = diff / 60_000;
    let hours = diff / 3_600_000;
    let days = diff / 86_400_000;

    if minutes < 1 {
        "Just now".to_owned()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{days}d ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_formatting_matches_the_contract() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
    }

    #[test]
    fn size_uses_the_largest_unit_at_least_one() {
        assert_eq!(format_size(500), "500 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
        // Beyond GB the scale stops; the value just grows.
        assert_eq!(format_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn size_keeps_two_decimals_at_most() {
        // 1100 / 1024 = 1.07421875
        assert_eq!(format_size(1100), "1.07 KB");
    }

    #[test]
    fn line_count_is_newlines_plus_one() {
        let stats = FileStats::extract("a.txt", "one\ntwo\nthree", 13, None);
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn trailing_newline_adds_an_empty_segment() {
        let stats = FileStats::extract("a.txt", "one\ntwo\n", 8, None);
        assert_eq!(stats.lines, 3);
        let empty = FileStats::extract("a.txt", "", 0, None);
        assert_eq!(empty.lines, 1);
    }

    #[test]
    fn characters_are_grouped() {
        let content = "x".repeat(1_234_567);
        let stats = FileStats::extract("a.txt", &content, 0, None);
        assert_eq!(stats.characters, "1,234,567");
    }

    #[test]
    fn digit_grouping_edges() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(1_000_000), "1,000,000");
    }

    #[test]
    fn format_resolves_from_the_name() {
        let stats = FileStats::extract("app.js", "", 0, None);
        assert_eq!(stats.format, Format::JavaScript);
        assert_eq!(stats.format.label(), "JavaScript");
    }

    #[test]
    fn time_ago_buckets() {
        let now = 1_700_000_000_000_i64;
        assert_eq!(format_time_ago(now - 30_000, now), "Just now");
        assert_eq!(format_time_ago(now - 5 * 60_000, now), "5m ago");
        assert_eq!(format_time_ago(now - 3 * 3_600_000, now), "3h ago");
        assert_eq!(format_time_ago(now - 2 * 86_400_000, now), "2d ago");
        // A timestamp from the future never underflows.
        assert_eq!(format_time_ago(now + 60_000, now), "Just now");
    }

    #[test]
    fn stats_serialize_with_original_field_names() {
        let stats = FileStats::extract("a.js", "let x;\n", 7, None);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["type"], "JavaScript");
        assert!(json.get("lastOpened").is_some());
        assert!(json.get("lastModified").is_some());
    }
}

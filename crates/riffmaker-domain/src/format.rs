//! Display formatting helpers for the list and recorder screens.

use chrono::DateTime;

/// Format a duration in seconds as `mm:ss` (recording timer).
pub fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Human-friendly relative date, matching the app's pt-BR copy.
///
/// Falls back to `dd/mm/yyyy` once the timestamp is more than a week old.
pub fn format_relative_date(timestamp_ms: i64, now_ms: i64) -> String {
    let diff_ms = (now_ms - timestamp_ms).max(0);
    let minutes = diff_ms / 60_000;
    let hours = diff_ms / 3_600_000;

    if hours < 1 {
        if minutes == 0 {
            return "agora".into();
        }
        return format!("há {minutes}m");
    }
    if hours < 24 {
        return format!("há {hours}h");
    }
    if hours < 48 {
        return "ontem".into();
    }
    if hours < 168 {
        return format!("há {}d", hours / 24);
    }

    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => String::new(),
    }
}

/// Truncate to `max_len` characters, replacing the tail with an ellipsis.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: i64 = 3_600_000;

    #[test]
    fn time_is_zero_padded() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn relative_date_buckets() {
        let now = 1_700_000_000_000;
        assert_eq!(format_relative_date(now, now), "agora");
        assert_eq!(format_relative_date(now - 5 * 60_000, now), "há 5m");
        assert_eq!(format_relative_date(now - 3 * HOUR_MS, now), "há 3h");
        assert_eq!(format_relative_date(now - 30 * HOUR_MS, now), "ontem");
        assert_eq!(format_relative_date(now - 3 * 24 * HOUR_MS, now), "há 3d");
    }

    #[test]
    fn old_dates_fall_back_to_calendar() {
        // 2021-01-01 00:00:00 UTC
        let ts = 1_609_459_200_000;
        let now = ts + 400 * 24 * HOUR_MS;
        assert_eq!(format_relative_date(ts, now), "01/01/2021");
    }

    #[test]
    fn truncation_keeps_short_text_intact() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer sentence", 10), "a longe...");
    }
}

//! Progress and duration formatting.

use std::time::Duration;

/// Spinner text for a progress update, e.g. `[ 23%] Checking App...`.
pub fn format_progress(percent: u8, message: &str) -> String {
    format!("[{:>3}%] {}", percent.min(100), message)
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_right_aligned() {
        assert_eq!(format_progress(0, "Checking A..."), "[  0%] Checking A...");
        assert_eq!(format_progress(46, "Checking B..."), "[ 46%] Checking B...");
        assert_eq!(format_progress(100, "Check complete"), "[100%] Check complete");
    }

    #[test]
    fn duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
    }

    #[test]
    fn duration_seconds() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
    }

    #[test]
    fn duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }
}

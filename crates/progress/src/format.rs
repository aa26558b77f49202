//! Human-readable duration formatting for the dashboard.

/// Format a second count the way the dashboard displays it.
///
/// Below a minute the raw seconds are shown, below an hour whole
/// minutes, above that hours and leftover minutes.
pub fn format_time_spent(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{}s", seconds);
    }
    if seconds < 3600 {
        return format!("{}m", seconds / 60);
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_below_a_minute() {
        assert_eq!(format_time_spent(0), "0s");
        assert_eq!(format_time_spent(59), "59s");
    }

    #[test]
    fn whole_minutes_below_an_hour() {
        assert_eq!(format_time_spent(60), "1m");
        assert_eq!(format_time_spent(119), "1m");
        assert_eq!(format_time_spent(3599), "59m");
    }

    #[test]
    fn hours_with_leftover_minutes() {
        assert_eq!(format_time_spent(3600), "1h 0m");
        assert_eq!(format_time_spent(3661), "1h 1m");
        assert_eq!(format_time_spent(7325), "2h 2m");
    }
}

/// Reminder countdown state and label
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Below this much time left a reminder is urgent
pub const URGENT_WINDOW_MS: i64 = 48 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Expired,
    Urgent,
    Normal,
}

impl CountdownState {
    pub fn css_class(&self) -> &'static str {
        match self {
            CountdownState::Expired => "countdown-expired",
            CountdownState::Urgent => "countdown-urgent",
            CountdownState::Normal => "countdown-normal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pub state: CountdownState,
    pub label: String,
}

pub fn countdown_state(deadline_ms: i64, now_ms: i64) -> CountdownState {
    let diff = deadline_ms - now_ms;
    if diff <= 0 {
        CountdownState::Expired
    } else if diff < URGENT_WINDOW_MS {
        CountdownState::Urgent
    } else {
        CountdownState::Normal
    }
}

/// Parse a stored deadline into epoch milliseconds.
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00Z`) and the zone-less values a
/// `datetime-local` input produces (`2024-01-01T09:30`), read as local time.
pub fn parse_deadline(deadline: &str) -> Option<i64> {
    let deadline = deadline.trim();
    if deadline.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(deadline) {
        return Some(parsed.timestamp_millis());
    }

    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(deadline, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.timestamp_millis())
}

/// "2d 3h 4m 5s", days omitted when zero
pub fn format_remaining(diff_ms: i64) -> String {
    if diff_ms <= 0 {
        return "Expired".to_string();
    }

    let total_seconds = diff_ms / 1000;
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else {
        format!("{}h {}m {}s", hours, minutes, seconds)
    }
}

/// Countdown for a stored deadline; `None` when the deadline is unparsable
pub fn countdown(deadline: &str, now_ms: i64) -> Option<Countdown> {
    let deadline_ms = parse_deadline(deadline)?;
    Some(Countdown {
        state: countdown_state(deadline_ms, now_ms),
        label: format_remaining(deadline_ms - now_ms),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEADLINE: i64 = 1_704_067_200_000; // 2024-01-01T00:00:00Z

    #[test]
    fn test_expired_at_and_after_deadline() {
        assert_eq!(countdown_state(DEADLINE, DEADLINE), CountdownState::Expired);
        assert_eq!(countdown_state(DEADLINE, DEADLINE + 1), CountdownState::Expired);
    }

    #[test]
    fn test_urgent_inside_window() {
        assert_eq!(countdown_state(DEADLINE, DEADLINE - 1), CountdownState::Urgent);
        assert_eq!(
            countdown_state(DEADLINE, DEADLINE - URGENT_WINDOW_MS + 1),
            CountdownState::Urgent
        );
    }

    #[test]
    fn test_window_boundary_is_normal() {
        assert_eq!(URGENT_WINDOW_MS, 172_800_000);
        assert_eq!(
            countdown_state(DEADLINE, DEADLINE - URGENT_WINDOW_MS),
            CountdownState::Normal
        );
        assert_eq!(
            countdown_state(DEADLINE, DEADLINE - 10 * URGENT_WINDOW_MS),
            CountdownState::Normal
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(parse_deadline("2024-01-01T00:00:00Z"), Some(DEADLINE));
        assert_eq!(parse_deadline("2024-01-01T02:00:00+02:00"), Some(DEADLINE));
        assert_eq!(parse_deadline("2024-01-01T00:00:00.000Z"), Some(DEADLINE));
    }

    #[test]
    fn test_parse_datetime_local() {
        let minutes = parse_deadline("2024-01-01T09:30").unwrap();
        let seconds = parse_deadline("2024-01-01T09:30:00").unwrap();
        assert_eq!(minutes, seconds);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_deadline(""), None);
        assert_eq!(parse_deadline("   "), None);
        assert_eq!(parse_deadline("next tuesday"), None);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(0), "Expired");
        assert_eq!(format_remaining(-5_000), "Expired");
        assert_eq!(format_remaining(61_000), "0h 1m 1s");
        assert_eq!(format_remaining(URGENT_WINDOW_MS + 3_723_000), "2d 1h 2m 3s");
    }

    #[test]
    fn test_countdown() {
        let urgent = countdown("2024-01-01T00:00:00Z", DEADLINE - 3_600_000).unwrap();
        assert_eq!(urgent.state, CountdownState::Urgent);
        assert_eq!(urgent.label, "1h 0m 0s");

        assert!(countdown("soon", DEADLINE).is_none());
    }
}

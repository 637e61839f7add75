use chrono::{DateTime, Utc};

use crate::level::{Level, COLOR_RESET};

// Формат asctime(3): "Wed Oct 19 12:05:09 2016"
const TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format(TIME_FORMAT).to_string()
}

pub fn render_prefix(level: Level, identifier: &str, colored: bool, at: DateTime<Utc>) -> String {
    let (color, reset) = if colored {
        (level.color(), COLOR_RESET)
    } else {
        ("", "")
    };
    format!(
        "{}{:<7} [{} UTC]{} -- ({}): ",
        color,
        level.as_str(),
        timestamp(at),
        reset,
        identifier
    )
}

/// Полная строка лога, всегда заканчивается `\n`.
pub fn render_line(
    level: Level,
    identifier: &str,
    colored: bool,
    at: DateTime<Utc>,
    message: &str,
) -> String {
    let mut line = render_prefix(level, identifier, colored, at);
    line.push_str(message);
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 10, 5, 12, 5, 9).unwrap()
    }

    #[test]
    fn timestamp_matches_asctime_layout() {
        assert_eq!(timestamp(at()), "Wed Oct  5 12:05:09 2016");
    }

    #[test]
    fn plain_prefix_pads_label() {
        let prefix = render_prefix(Level::Info, "app", false, at());
        assert_eq!(prefix, "INFO    [Wed Oct  5 12:05:09 2016 UTC] -- (app): ");
    }

    #[test]
    fn colored_prefix_wraps_label_and_time() {
        let prefix = render_prefix(Level::Error, "app", true, at());
        assert_eq!(
            prefix,
            "\x1B[31mERROR   [Wed Oct  5 12:05:09 2016 UTC]\x1B[00m -- (app): "
        );
    }

    #[test]
    fn line_is_newline_terminated() {
        let line = render_line(Level::Warning, "svc", false, at(), "disk almost full");
        assert!(line.starts_with("WARNING [Wed Oct  5"));
        assert!(line.ends_with("-- (svc): disk almost full\n"));
        assert_eq!(line.matches('\n').count(), 1);
    }
}

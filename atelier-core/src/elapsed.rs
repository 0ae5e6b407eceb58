//! Rounded elapsed-time rendering for conflict messages.

/// Format a millisecond duration as its largest whole unit: days, then
/// hours, minutes, seconds. The unit is pluralised only when the value
/// is greater than 1.
///
/// The days branch renders with no space (`"1day"`, `"3days"`) — a
/// long-standing quirk of the conflict message that downstream text
/// matching relies on.
pub fn rounded(elapsed_ms: i64) -> String {
    let ms = elapsed_ms.max(0) as u64;

    let days = ms / (1000 * 3600 * 24);
    if days >= 1 {
        return format!("{days}{}", pluralize("day", days));
    }
    let hours = ms / (1000 * 3600);
    if hours >= 1 {
        return format!("{hours} {}", pluralize("hour", hours));
    }
    let minutes = ms / (1000 * 60);
    if minutes >= 1 {
        return format!("{minutes} {}", pluralize("minute", minutes));
    }
    let seconds = ms / 1000;
    format!("{seconds} {}", pluralize("second", seconds))
}

fn pluralize(unit: &str, count: u64) -> String {
    if count > 1 {
        format!("{unit}s")
    } else {
        unit.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0 second")]
    #[case(1_000, "1 second")]
    #[case(45_000, "45 seconds")]
    #[case(90_000, "1 minute")]
    #[case(150_000, "2 minutes")]
    #[case(3_700_000, "1 hour")]
    #[case(7_300_000, "2 hours")]
    #[case(90_000_000, "1day")]
    #[case(200_000_000, "2days")]
    fn rounds_to_largest_whole_unit(#[case] ms: i64, #[case] expected: &str) {
        assert_eq!(rounded(ms), expected);
    }

    #[test]
    fn negative_elapsed_clamps_to_zero() {
        assert_eq!(rounded(-5_000), "0 second");
    }
}

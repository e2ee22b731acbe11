//! Journey duration formatting.

/// Format a raw `HH:MM` duration as localized hour/minute text.
///
/// A zero hour component is dropped and the minutes are kept as given, except
/// that all-zero minutes collapse to `0`. Otherwise a single leading zero of
/// the hours is removed and the minutes are kept as given.
///
/// Input that is not `HH:MM` (such as the placeholder) is returned unchanged.
///
/// # Examples
///
/// ```
/// use train_tickets::domain::format_duration;
///
/// assert_eq!(format_duration("00:35"), "35分");
/// assert_eq!(format_duration("00:05"), "05分");
/// assert_eq!(format_duration("01:05"), "1小时05分");
/// assert_eq!(format_duration("12:30"), "12小时30分");
/// assert_eq!(format_duration("--"), "--");
/// ```
pub fn format_duration(raw: &str) -> String {
    let Some((hours, minutes)) = raw.split_once(':') else {
        return raw.to_string();
    };

    if hours.is_empty() || minutes.is_empty() {
        return raw.to_string();
    }

    if hours.chars().all(|c| c == '0') {
        if minutes.chars().all(|c| c == '0') {
            return "0分".to_string();
        }
        return format!("{minutes}分");
    }

    let hours = hours.strip_prefix('0').unwrap_or(hours);
    format!("{hours}小时{minutes}分")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_only() {
        assert_eq!(format_duration("00:00"), "0分");
        assert_eq!(format_duration("00:35"), "35分");
        assert_eq!(format_duration("00:05"), "05分");
        assert_eq!(format_duration("00:09"), "09分");
    }

    #[test]
    fn single_digit_hours_lose_leading_zero() {
        assert_eq!(format_duration("01:05"), "1小时05分");
        assert_eq!(format_duration("04:28"), "4小时28分");
        assert_eq!(format_duration("09:00"), "9小时00分");
    }

    #[test]
    fn double_digit_hours_kept() {
        assert_eq!(format_duration("10:00"), "10小时00分");
        assert_eq!(format_duration("12:30"), "12小时30分");
        assert_eq!(format_duration("30:05"), "30小时05分");
    }

    #[test]
    fn non_duration_passes_through() {
        assert_eq!(format_duration("--"), "--");
        assert_eq!(format_duration(""), "");
        assert_eq!(format_duration(":30"), ":30");
        assert_eq!(format_duration("12:"), "12:");
    }
}

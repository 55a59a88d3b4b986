use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SharedError};

/// Formats accepted from a `datetime-local` widget, most common first.
const LOCAL_INPUT_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// `toISOString` output for years outside 0..=9999, e.g. `+010000-01-01T04:59:00.000Z`.
const EXTENDED_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Wall-clock format written to the widget's `min` attribute.
const MIN_BOUND_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Date part of a localized display, en-US patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Full,
    Long,
    Medium,
    Short,
}

/// Time part of a localized display, en-US patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    Full,
    Long,
    Medium,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStyle {
    pub date: DateStyle,
    pub time: TimeStyle,
}

impl DisplayStyle {
    /// "Tuesday, January 1, 2030 at 10:00:00 AM EST"
    pub const FULL_LONG: DisplayStyle = DisplayStyle {
        date: DateStyle::Full,
        time: TimeStyle::Long,
    };

    pub const MEDIUM_SHORT: DisplayStyle = DisplayStyle {
        date: DateStyle::Medium,
        time: TimeStyle::Short,
    };

    fn date_pattern(&self) -> &'static str {
        match self.date {
            DateStyle::Full => "%A, %B %-d, %Y",
            DateStyle::Long => "%B %-d, %Y",
            DateStyle::Medium => "%b %-d, %Y",
            DateStyle::Short => "%-m/%-d/%y",
        }
    }

    fn separator(&self) -> &'static str {
        match self.date {
            DateStyle::Full | DateStyle::Long => " at ",
            DateStyle::Medium | DateStyle::Short => ", ",
        }
    }
}

pub fn parse_timezone(timezone_name: &str) -> Result<Tz> {
    timezone_name
        .parse::<Tz>()
        .map_err(|_| SharedError::InvalidTimezone(timezone_name.to_string()))
}

fn parse_local(local: &str) -> Result<NaiveDateTime> {
    // Years past 9999 need an explicit sign for chrono's `%Y`.
    let signed;
    let candidate = match local.find('-') {
        Some(idx) if idx > 4 && local.starts_with(|c: char| c.is_ascii_digit()) => {
            signed = format!("+{}", local);
            signed.as_str()
        }
        _ => local,
    };
    LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(candidate, format).ok())
        .ok_or_else(|| SharedError::InvalidDateTime(local.to_string()))
}

/// Resolves a wall-clock time in `zone` to UTC, `None` when the result falls
/// outside the representable range.
///
/// Repeated wall-clock times take the earlier instant. Times skipped by a
/// forward transition are read with the offset in force before it.
fn resolve_local(naive: NaiveDateTime, zone: &Tz) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, later) => Some(earlier.min(later).with_timezone(&Utc)),
        LocalResult::None => {
            let day_before = naive.checked_sub_signed(Duration::hours(24))?;
            let before = zone.offset_from_utc_datetime(&day_before).fix().local_minus_utc();
            let utc = naive.checked_sub_signed(Duration::seconds(i64::from(before)))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

/// Serializes an instant the way a browser's `Date.prototype.toISOString` does.
///
/// Years outside 0..=9999 use the six-digit signed form, e.g. `+010000-01-01T...`.
pub fn to_iso_instant(instant: DateTime<Utc>) -> String {
    let year = instant.year();
    if (0..=9999).contains(&year) {
        return instant.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{}{:06}{}",
        sign,
        year.unsigned_abs(),
        instant.format("-%m-%dT%H:%M:%S%.3fZ")
    )
}

/// Interprets a `datetime-local` value in `zone` and returns the absolute
/// instant, e.g. `"2030-01-01T10:00"` in New York gives `"2030-01-01T15:00:00.000Z"`.
pub fn to_absolute_instant(local: &str, zone: &Tz) -> Result<String> {
    let trimmed = local.trim();
    let naive = parse_local(trimmed)?;
    let instant = resolve_local(naive, zone)
        .ok_or_else(|| SharedError::InvalidDateTime(trimmed.to_string()))?;
    Ok(to_iso_instant(instant))
}

/// Parses an ISO instant echoed by the server. Values without an offset are
/// read as wall-clock time in `zone`.
pub fn parse_instant(instant: &str, zone: &Tz) -> Result<DateTime<Utc>> {
    let trimmed = instant.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, EXTENDED_UTC_FORMAT) {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    parse_local(trimmed)
        .ok()
        .and_then(|naive| resolve_local(naive, zone))
        .ok_or_else(|| SharedError::InvalidDateTime(instant.to_string()))
}

/// Renders an instant as local time in `zone`.
pub fn format_instant(instant: DateTime<Utc>, zone: &Tz, style: DisplayStyle) -> String {
    let local = instant.with_timezone(zone);
    let date = local.format(style.date_pattern()).to_string();
    let time = match style.time {
        TimeStyle::Full => format!("{} {}", local.format("%-I:%M:%S %p"), zone.name()),
        TimeStyle::Long => local.format("%-I:%M:%S %p %Z").to_string(),
        TimeStyle::Medium => local.format("%-I:%M:%S %p").to_string(),
        TimeStyle::Short => local.format("%-I:%M %p").to_string(),
    };
    format!("{}{}{}", date, style.separator(), time)
}

/// Parses `instant` and renders it in `zone`.
pub fn format_in_local_zone(instant: &str, zone: &Tz, style: DisplayStyle) -> Result<String> {
    let parsed = parse_instant(instant, zone)?;
    Ok(format_instant(parsed, zone, style))
}

/// Offset of `zone` at `instant` as "UTC+2", "UTC-5" or "UTC+5.5".
pub fn utc_offset_label(instant: DateTime<Utc>, zone: &Tz) -> String {
    let seconds = zone
        .offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc();
    let hours = f64::from(seconds) / 3600.0;
    if seconds >= 0 {
        format!("UTC+{}", hours)
    } else {
        format!("UTC{}", hours)
    }
}

/// "Europe/Berlin (UTC+1)"
pub fn timezone_display(instant: DateTime<Utc>, zone: &Tz) -> String {
    format!("{} ({})", zone.name(), utc_offset_label(instant, zone))
}

/// Earliest value the `datetime-local` widget should accept: `now` as local
/// wall clock, minute precision.
pub fn min_datetime_bound(now: DateTime<Utc>, zone: &Tz) -> String {
    now.with_timezone(zone).format(MIN_BOUND_FORMAT).to_string()
}

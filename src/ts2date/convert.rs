//! Legacy `/Date(<epoch-millis>)/` detection and conversion.
//!
//! The scan for the timestamp is deliberately loose: once a value contains the
//! `/Date(` marker, the candidate timestamp is whatever sits between the *first*
//! `(` and the *first* `)` anywhere in the value. Values with stray parentheses,
//! such as `/Date(1644(3648))/`, therefore yield a non-numeric candidate and are
//! left alone. Existing data depends on this, so the scan must not be narrowed to
//! the marker itself.

use chrono::{DateTime, Local, NaiveDate, Offset, TimeZone, Utc};

/// Substring that marks a value as a legacy serialized date.
pub const LEGACY_DATE_MARKER: &str = "/Date(";

/// Output format for converted values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of converting a single attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The value held a legacy date; this is its replacement.
    Converted(String),
    /// The value is to be left exactly as it was.
    Unchanged,
}

impl ConversionOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted(_))
    }

    /// Get the replacement value if this is `Converted`.
    pub fn converted(&self) -> Option<&str> {
        match self {
            ConversionOutcome::Converted(v) => Some(v),
            ConversionOutcome::Unchanged => None,
        }
    }
}

/// Converts legacy date values into calendar dates in a fixed zone.
///
/// Production code uses [`DateConverter::local`], which renders dates in the
/// zone of the running process. Other zones exist so the arithmetic can be
/// pinned down in tests.
#[derive(Debug, Clone)]
pub struct DateConverter<Tz: TimeZone> {
    zone: Tz,
}

impl DateConverter<Local> {
    pub fn local() -> Self {
        Self::with_zone(Local)
    }
}

impl Default for DateConverter<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl DateConverter<Utc> {
    pub fn utc() -> Self {
        Self::with_zone(Utc)
    }
}

impl<Tz: TimeZone> DateConverter<Tz> {
    pub fn with_zone(zone: Tz) -> Self {
        Self { zone }
    }

    /// Convert one attribute value.
    ///
    /// Never fails: anything that is not a parseable legacy date comes back as
    /// [`ConversionOutcome::Unchanged`].
    pub fn convert(&self, value: &str) -> ConversionOutcome {
        match extract_millis(value) {
            Some(millis) => ConversionOutcome::Converted(self.date_for_millis(millis)),
            None => ConversionOutcome::Unchanged,
        }
    }

    /// Format the calendar date of an epoch-millisecond instant in this zone.
    ///
    /// Every `i64` has a date. Instants past the end of chrono's calendar use the
    /// zone offset of its nearest representable instant.
    pub fn date_for_millis(&self, millis: i64) -> String {
        let instant = DateTime::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });
        let offset = self
            .zone
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc();

        let local_millis = i128::from(millis) + i128::from(offset) * 1000;
        // |i64| / MILLIS_PER_DAY is far inside i64.
        let days = local_millis.div_euclid(MILLIS_PER_DAY) as i64;
        format_epoch_days(days)
    }
}

const MILLIS_PER_DAY: i128 = 86_400_000;

/// `num_days_from_ce` of 1970-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Format a day count since 1970-01-01 like `%Y-%m-%d`.
///
/// Years beyond chrono's range get the same shape `%Y` gives any year past
/// 9999: an explicit sign and at least four digits.
fn format_epoch_days(days: i64) -> String {
    let date = days
        .checked_add(EPOCH_DAYS_FROM_CE)
        .and_then(|d| i32::try_from(d).ok())
        .and_then(NaiveDate::from_num_days_from_ce_opt);

    match date {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => {
            let (year, month, day) = civil_from_epoch_days(days);
            let sign = if year < 0 { '-' } else { '+' };
            format!("{sign}{:04}-{month:02}-{day:02}", year.unsigned_abs())
        }
    }
}

/// Proleptic Gregorian (year, month, day) of a day count since 1970-01-01.
fn civil_from_epoch_days(days: i64) -> (i64, u32, u32) {
    // Shift to 0000-03-01 so leap days fall at the end of each 400-year era.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = era * 400 + yoe + i64::from(month <= 2);
    (year, month as u32, day as u32)
}

/// Extract the candidate timestamp text from a value.
///
/// Returns the text strictly between the first `(` and the first `)` of a value
/// containing [`LEGACY_DATE_MARKER`], or `None` if there is no such span.
pub fn extract_timestamp(value: &str) -> Option<&str> {
    if value.is_empty() || !value.contains(LEGACY_DATE_MARKER) {
        return None;
    }

    let open = value.find('(')?;
    let close = value.find(')')?;
    if close <= open {
        return None;
    }

    Some(&value[open + 1..close])
}

/// Extract and parse the epoch milliseconds of a legacy date value.
///
/// Malformed text, empty text and `i64` overflow all give `None`.
pub fn extract_millis(value: &str) -> Option<i64> {
    extract_timestamp(value)?.parse().ok()
}

//! Random points in time between two bounds, with second granularity.
//!
//! Bounds are normalised to Unix seconds and drawn with the generator's
//! `int(min, max)`, so a seeded generator yields the same instants every run.
//! Calendar conversion is proleptic Gregorian, UTC only.

use lorem_core::{Error, TextGenerator};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A bound that can be expressed in whole Unix seconds.
pub trait UnixSeconds {
    fn unix_seconds(&self) -> i64;
}

impl UnixSeconds for i64 {
    fn unix_seconds(&self) -> i64 {
        *self
    }
}

impl UnixSeconds for SystemTime {
    fn unix_seconds(&self) -> i64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_secs() as i64,
            // Round towards the past so a bound is never moved forward
            Err(before) => {
                let before = before.duration();
                let secs = before.as_secs() as i64;
                if before.subsec_nanos() > 0 {
                    -secs - 1
                } else {
                    -secs
                }
            }
        }
    }
}

/// Random instant in `[min, max]` (inclusive).
pub fn datetime(
    gen: &mut TextGenerator,
    min: impl UnixSeconds,
    max: impl UnixSeconds,
) -> Result<SystemTime, Error> {
    let secs = gen.int(min.unix_seconds(), max.unix_seconds())?;
    Ok(from_unix_seconds(secs))
}

fn from_unix_seconds(secs: i64) -> SystemTime {
    if secs >= 0 {
        UNIX_EPOCH + Duration::from_secs(secs as u64)
    } else {
        UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs())
    }
}

/// Days since 1970-01-01 for a civil date.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year.rem_euclid(400);
    let mp = i64::from((month + 9) % 12);
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        _ => 31,
    }
}

/// Format as `YYYY-MM-DDTHH:MM:SS+00:00`.
pub fn format_rfc3339(time: SystemTime) -> String {
    let secs = time.unix_seconds();
    let (year, month, day) = civil_from_days(secs.div_euclid(86_400));
    let rem = secs.rem_euclid(86_400);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}+00:00",
        year,
        month,
        day,
        rem / 3600,
        rem % 3600 / 60,
        rem % 60
    )
}

const MAX_YEAR: i64 = 9999;

/// 0000-01-01T00:00:00 and 9999-12-31T23:59:59
const SECONDS_RANGE: std::ops::RangeInclusive<i64> = -62_167_219_200..=253_402_300_799;

/// Parse a UTC date (`YYYY-MM-DD`), date-time (`YYYY-MM-DDTHH:MM:SS`, with
/// an optional `Z` or `+00:00` suffix) or Unix seconds prefixed with `@`.
///
/// Years are limited to `0000..=9999`.
pub fn parse_utc(s: &str) -> Result<i64, String> {
    let s = s.trim();
    let invalid = || {
        format!(
            "Invalid date: '{}'. Expected YYYY-MM-DD[THH:MM:SS] or @<unix seconds>",
            s
        )
    };

    if let Some(secs) = s.strip_prefix('@') {
        return secs
            .parse::<i64>()
            .ok()
            .filter(|secs| SECONDS_RANGE.contains(secs))
            .ok_or_else(invalid);
    }

    let s = s
        .strip_suffix('Z')
        .or_else(|| s.strip_suffix("+00:00"))
        .unwrap_or(s);

    let (date, time) = match s.split_once(['T', ' ']) {
        Some((date, time)) => (date, Some(time)),
        None => (s, None),
    };

    let mut parts = date.splitn(3, '-');
    let year: i64 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    if !(0..=MAX_YEAR).contains(&year)
        || !(1..=12).contains(&month)
        || day == 0
        || day > days_in_month(year, month)
    {
        return Err(invalid());
    }

    let mut secs = days_from_civil(year, month, day) * 86_400;
    if let Some(time) = time {
        let fields: Vec<&str> = time.split(':').collect();
        if fields.len() != 3 {
            return Err(invalid());
        }
        let hour: i64 = fields[0].parse().map_err(|_| invalid())?;
        let minute: i64 = fields[1].parse().map_err(|_| invalid())?;
        let second: i64 = fields[2].parse().map_err(|_| invalid())?;
        if !(0..24).contains(&hour) || !(0..60).contains(&minute) || !(0..60).contains(&second) {
            return Err(invalid());
        }
        secs += hour * 3600 + minute * 60 + second;
    }

    Ok(secs)
}

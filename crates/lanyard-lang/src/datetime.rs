// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Date/time helpers on top of chrono: tolerance-aware comparison, offset
// conversion, epoch conversion, and validated strftime patterns.
//
// Comparisons always work on the instant, so two `DateTime`s in different
// zones compare by when they happened, not by their wall-clock reading.

use std::cmp::Ordering;
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
    Utc,
};
use lanyard_core::config::LangConfig;
use lanyard_core::error::{LanyardError, Result};
use tracing::debug;

// ---------------------------------------------------------------------------
// Tolerance
// ---------------------------------------------------------------------------

/// A non-negative tolerance for date comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Epsilon(TimeDelta);

impl Epsilon {
    /// Wrap `delta`, rejecting negative values.
    pub fn new(delta: TimeDelta) -> Result<Self> {
        if delta < TimeDelta::zero() {
            debug!(?delta, "negative epsilon rejected");
            return Err(LanyardError::invalid(format!(
                "epsilon must not be negative, got {delta}"
            )));
        }
        Ok(Self(delta))
    }

    pub fn zero() -> Self {
        Self(TimeDelta::zero())
    }

    pub fn from_millis(ms: u64) -> Result<Self> {
        i64::try_from(ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .map(Self)
            .ok_or_else(|| LanyardError::invalid(format!("epsilon of {ms} ms is too large")))
    }

    /// Tolerance configured by `date_epsilon_ms`.
    pub fn from_config(config: &LangConfig) -> Result<Self> {
        Self::from_millis(config.date_epsilon_ms)
    }

    pub fn as_delta(&self) -> TimeDelta {
        self.0
    }
}

/// Signed distance `a - b` between two instants.
fn distance<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> TimeDelta {
    a.with_timezone(&Utc) - b.with_timezone(&Utc)
}

/// True when `a` and `b` are no more than `eps` apart.
pub fn is_equal_within<A: TimeZone, B: TimeZone>(
    a: &DateTime<A>,
    b: &DateTime<B>,
    eps: Epsilon,
) -> bool {
    distance(a, b).abs() <= eps.0
}

/// True when `a` is earlier than `b` by more than `eps`.
pub fn is_before_within<A: TimeZone, B: TimeZone>(
    a: &DateTime<A>,
    b: &DateTime<B>,
    eps: Epsilon,
) -> bool {
    distance(b, a) > eps.0
}

/// True when `a` is later than `b` by more than `eps`.
pub fn is_after_within<A: TimeZone, B: TimeZone>(
    a: &DateTime<A>,
    b: &DateTime<B>,
    eps: Epsilon,
) -> bool {
    distance(a, b) > eps.0
}

/// Order two instants, treating anything within `eps` as equal.
pub fn compare_within<A: TimeZone, B: TimeZone>(
    a: &DateTime<A>,
    b: &DateTime<B>,
    eps: Epsilon,
) -> Ordering {
    let d = distance(a, b);
    if d.abs() <= eps.0 {
        Ordering::Equal
    } else {
        d.cmp(&TimeDelta::zero())
    }
}

// ---------------------------------------------------------------------------
// Offsets and zones
// ---------------------------------------------------------------------------

/// Parse a UTC offset: `Z`, `UTC`, `GMT`, `+05:30`, `-0800`, or `+02`.
pub fn parse_offset(s: &str) -> Result<FixedOffset> {
    let trimmed = s.trim();
    if ["z", "utc", "gmt"]
        .iter()
        .any(|name| trimmed.eq_ignore_ascii_case(name))
    {
        return Ok(Utc.fix());
    }

    let bad = || {
        debug!(input = s, "unparseable offset");
        LanyardError::InvalidOffset(s.to_owned())
    };

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(bad()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) || !matches!(digits.len(), 2 | 4) {
        return Err(bad());
    }
    if rest.contains(':') && (rest.len() != 5 || rest.as_bytes()[2] != b':') {
        return Err(bad());
    }

    let hours: i32 = digits[..2].parse().map_err(|_| bad())?;
    let minutes: i32 = if digits.len() == 4 {
        digits[2..].parse().map_err(|_| bad())?
    } else {
        0
    };
    if minutes >= 60 {
        return Err(bad());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(bad)
}

/// The same instant seen from `offset`.
pub fn to_offset<Tz: TimeZone>(dt: &DateTime<Tz>, offset: FixedOffset) -> DateTime<FixedOffset> {
    dt.with_timezone(&offset)
}

pub fn to_utc<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Utc> {
    dt.with_timezone(&Utc)
}

pub fn to_local<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Local> {
    dt.with_timezone(&Local)
}

/// The same instant seen from the offset written in `offset`.
pub fn same_instant_in<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    offset: &str,
) -> Result<DateTime<FixedOffset>> {
    Ok(to_offset(dt, parse_offset(offset)?))
}

/// Interpret a wall-clock reading as local time at `offset`.
pub fn assume_offset(naive: NaiveDateTime, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| LanyardError::invalid(format!("{naive} is not representable at {offset}")))
}

// ---------------------------------------------------------------------------
// Epoch
// ---------------------------------------------------------------------------

/// Instant `ms` milliseconds after the Unix epoch.
pub fn from_epoch_millis(ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| {
        debug!(ms, "epoch millis outside representable range");
        LanyardError::invalid(format!("epoch millis {ms} outside representable range"))
    })
}

pub fn to_epoch_millis<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    dt.timestamp_millis()
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// Reject empty patterns and malformed strftime specifiers.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(LanyardError::InvalidPattern {
            pattern: String::new(),
            reason: "pattern is empty".into(),
        });
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        debug!(pattern, "malformed format pattern");
        return Err(LanyardError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: "unrecognised or incomplete specifier".into(),
        });
    }
    Ok(())
}

/// Format `dt` with a strftime pattern.
pub fn format<Tz>(dt: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    validate_pattern(pattern)?;
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).map_err(|_| LanyardError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: "pattern needs fields the value does not carry".into(),
    })?;
    Ok(out)
}

/// Format `dt` with the configured default pattern.
pub fn format_default<Tz>(dt: &DateTime<Tz>, config: &LangConfig) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format(dt, &config.date_pattern)
}

/// Parse a wall-clock date-time with a strftime pattern.
pub fn parse_naive(s: &str, pattern: &str) -> Result<NaiveDateTime> {
    validate_pattern(pattern)?;
    NaiveDateTime::parse_from_str(s, pattern)
        .map_err(|e| LanyardError::Parse(format!("{s:?} does not match {pattern:?}: {e}")))
}

/// Parse a calendar date with a strftime pattern.
pub fn parse_date(s: &str, pattern: &str) -> Result<NaiveDate> {
    validate_pattern(pattern)?;
    NaiveDate::parse_from_str(s, pattern)
        .map_err(|e| LanyardError::Parse(format!("{s:?} does not match {pattern:?}: {e}")))
}

// ---------------------------------------------------------------------------
// Calendar days
// ---------------------------------------------------------------------------

/// Midnight at the start of `dt`'s day, in `dt`'s own zone.
///
/// Fails only when midnight does not exist in that zone (a DST gap).
pub fn start_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let midnight = dt.date_naive().and_time(NaiveTime::MIN);
    dt.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| LanyardError::invalid(format!("midnight of {midnight} does not exist")))
}

/// True when both instants fall on the same calendar day in `a`'s zone.
pub fn is_same_day<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.date_naive() == b.with_timezone(&a.timezone()).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn epsilon_rejects_negative() {
        assert!(Epsilon::new(TimeDelta::milliseconds(-1)).is_err());
        assert_eq!(Epsilon::new(TimeDelta::zero()).unwrap(), Epsilon::zero());
        assert!(Epsilon::from_millis(u64::MAX).is_err());
        let from_config = Epsilon::from_config(&LangConfig::default()).unwrap();
        assert_eq!(from_config.as_delta(), TimeDelta::milliseconds(1));
    }

    #[test]
    fn equal_within_tolerance() {
        let a = utc(2024, 1, 1, 12, 0, 0);
        let b = a + TimeDelta::milliseconds(400);
        let eps = Epsilon::from_millis(500).unwrap();
        assert!(is_equal_within(&a, &b, eps));
        assert!(!is_before_within(&a, &b, eps));
        assert!(!is_after_within(&b, &a, eps));
        assert_eq!(compare_within(&a, &b, eps), Ordering::Equal);

        let tight = Epsilon::from_millis(100).unwrap();
        assert!(!is_equal_within(&a, &b, tight));
        assert!(is_before_within(&a, &b, tight));
        assert!(is_after_within(&b, &a, tight));
        assert_eq!(compare_within(&a, &b, tight), Ordering::Less);
        assert_eq!(compare_within(&b, &a, tight), Ordering::Greater);
    }

    #[test]
    fn boundary_is_inclusive() {
        let a = utc(2024, 1, 1, 0, 0, 0);
        let b = a + TimeDelta::seconds(1);
        let eps = Epsilon::from_millis(1000).unwrap();
        assert!(is_equal_within(&a, &b, eps));
        assert!(!is_before_within(&a, &b, eps));
        assert!(!is_after_within(&b, &a, eps));

        let c = b + TimeDelta::milliseconds(1);
        assert!(!is_equal_within(&a, &c, eps));
        assert!(is_before_within(&a, &c, eps));
        assert!(is_after_within(&c, &a, eps));
    }

    #[test]
    fn comparison_across_zones_uses_the_instant() {
        let a = utc(2024, 6, 1, 10, 0, 0);
        let plus_two = parse_offset("+02:00").unwrap();
        let b = plus_two.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert!(is_equal_within(&a, &b, Epsilon::zero()));
    }

    #[test]
    fn offsets_parse() {
        assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("utc").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("+05:30").unwrap().local_minus_utc(), 19_800);
        assert_eq!(parse_offset("-0800").unwrap().local_minus_utc(), -28_800);
        assert_eq!(parse_offset("+02").unwrap().local_minus_utc(), 7_200);
    }

    #[test]
    fn bad_offsets_fail() {
        for input in ["", "05:00", "+5", "+05:60", "+25:00", "+0a:00", "+05:3"] {
            assert!(
                matches!(parse_offset(input), Err(LanyardError::InvalidOffset(_))),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn zone_conversion_keeps_instant() {
        let a = utc(2024, 3, 10, 23, 30, 0);
        let tokyo = same_instant_in(&a, "+09:00").unwrap();
        assert_eq!(tokyo.format("%Y-%m-%d %H:%M").to_string(), "2024-03-11 08:30");
        assert_eq!(to_utc(&tokyo), a);
        let local = to_local(&a);
        assert_eq!(local, a);
        assert_eq!(*local.offset(), Local.offset_from_utc_datetime(&a.naive_utc()));
    }

    #[test]
    fn assume_offset_reads_wall_clock() {
        let naive = parse_naive("2024-01-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let at = assume_offset(naive, parse_offset("-05:00").unwrap()).unwrap();
        assert_eq!(to_utc(&at), utc(2024, 1, 1, 14, 0, 0));
    }

    #[test]
    fn epoch_round_trip() {
        let dt = from_epoch_millis(1_700_000_000_123).unwrap();
        assert_eq!(to_epoch_millis(&dt), 1_700_000_000_123);
        assert!(from_epoch_millis(i64::MAX).is_err());
    }

    #[test]
    fn patterns_validate() {
        assert!(validate_pattern("%Y-%m-%d").is_ok());
        assert!(matches!(
            validate_pattern(""),
            Err(LanyardError::InvalidPattern { .. })
        ));
        assert!(matches!(
            validate_pattern("%Y-%"),
            Err(LanyardError::InvalidPattern { .. })
        ));
        assert!(format(&utc(2024, 1, 1, 0, 0, 0), "%Q").is_err());
    }

    #[test]
    fn format_and_parse() {
        let dt = utc(2024, 2, 29, 13, 5, 9);
        assert_eq!(format(&dt, "%d/%m/%Y %H:%M:%S").unwrap(), "29/02/2024 13:05:09");
        assert_eq!(
            format_default(&dt, &LangConfig::default()).unwrap(),
            "2024-02-29 13:05:09"
        );
        assert_eq!(
            parse_date("2024-02-29", "%Y-%m-%d").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(
            parse_date("2023-02-29", "%Y-%m-%d"),
            Err(LanyardError::Parse(_))
        ));
    }

    #[test]
    fn day_helpers() {
        let dt = utc(2024, 5, 5, 17, 45, 12);
        assert_eq!(start_of_day(&dt).unwrap(), utc(2024, 5, 5, 0, 0, 0));

        let late = utc(2024, 5, 5, 23, 0, 0);
        assert!(is_same_day(&dt, &late));
        let morning = utc(2024, 5, 5, 1, 0, 0);
        let in_tokyo = to_offset(&late, parse_offset("+09:00").unwrap());
        assert!(is_same_day(&late, &morning));
        assert!(!is_same_day(&in_tokyo, &morning));
    }

    proptest! {
        #[test]
        fn compare_equal_iff_within(a in 0i64..4_000_000_000_000, delta in -5_000i64..5_000, eps in 0u64..3_000) {
            let x = from_epoch_millis(a).unwrap();
            let y = from_epoch_millis(a + delta).unwrap();
            let eps = Epsilon::from_millis(eps).unwrap();
            prop_assert_eq!(
                compare_within(&x, &y, eps) == Ordering::Equal,
                is_equal_within(&x, &y, eps)
            );
            prop_assert_eq!(compare_within(&x, &y, eps), compare_within(&y, &x, eps).reverse());
        }
    }
}

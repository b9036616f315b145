//! SAME header decoding
//!
//! Parses the `-`-delimited header grammar, resolves every code
//! against the injected [`CodeBook`], reconstructs the validity
//! window from the Julian-day issue time, and renders the alert
//! description:
//!
//! ```txt
//! ZCZC-ORG-EVT-PSSCCC-PSSCCC+HHMM-DDDHHMM-SENDER-
//! ```

use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Utc};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::codebook::CodeBook;
use crate::error::SameErr;
use crate::fips::translate_fips;

/// Start and end of the alert validity window, as presentation text
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AlertTiming {
    /// Issue time, like `"5:07 PM on December 9"`
    pub start: String,
    /// Purge time: issue time plus the purge offset
    pub end: String,
}

/// A SAME header resolved against the code dictionaries
///
/// All fields are presentation strings. `formatted` is the complete
/// alert sentence; the other fields are its constituents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecodedAlert {
    /// Organization phrase, like `"The Civil Authorities have issued "`
    pub organization: String,
    /// Event name, like `"Tornado Warning"`
    pub event: String,
    /// Affected locations, joined with `"; "`, in header order
    pub locations: String,
    /// Validity window
    pub timing: AlertTiming,
    /// Sending station identifier
    pub sender: String,
    /// Complete human-readable alert description
    pub formatted: String,
}

/// Decode a SAME header against the current calendar year
///
/// SAME issue times carry no year; the decoder assumes the process's
/// current year. See [`decode_same_in_year`] for an injectable year.
///
/// ```no_run
/// use samewave::{decode_same, CodeBook};
///
/// let book = CodeBook::builtin();
/// let alert = decode_same(&book, "ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-").unwrap();
/// assert_eq!(alert.event, "Administrative Message");
/// assert_eq!(alert.locations, "Sedgwick, KS");
/// ```
pub fn decode_same(book: &CodeBook, header: &str) -> Result<DecodedAlert, SameErr> {
    decode_same_in_year(book, header, Local::now().year())
}

/// Decode a SAME header, resolving the Julian day against `year`
pub fn decode_same_in_year(
    book: &CodeBook,
    header: &str,
    year: i32,
) -> Result<DecodedAlert, SameErr> {
    lazy_static! {
        static ref OFFSET_RE: Regex = Regex::new(r"^[0-9]{4}$").expect("bad offset regexp");
        static ref ISSUE_RE: Regex = Regex::new(r"^[0-9]{7}$").expect("bad issue regexp");
    }

    if header.is_empty() {
        return Err(SameErr::NoData);
    }

    let stripped = header.strip_suffix('-').unwrap_or(header);
    let segments: Vec<&str> = stripped.split('-').collect();
    if segments.len() < 5 {
        return Err(SameErr::InvalidSameHeader);
    }
    if segments[0] != "ZCZC" {
        return Err(SameErr::ZczcNotFound);
    }

    let organization = book
        .organization(segments[1])
        .ok_or_else(|| SameErr::OrgCodeInvalid(segments[1].to_owned()))?;
    let event = book
        .event(segments[2])
        .ok_or_else(|| SameErr::EventCodeInvalid(segments[2].to_owned()))?;

    // the `+` splits the final location from the purge offset and
    // terminates the location list
    let mut codes = Vec::new();
    let mut offset = None;
    let mut time_index = segments.len();
    for (index, segment) in segments.iter().enumerate().skip(3) {
        match segment.split_once('+') {
            Some((code, purge)) => {
                codes.push(code);
                offset = Some(purge);
                time_index = index + 1;
                break;
            }
            None => codes.push(*segment),
        }
    }
    let offset = offset.ok_or(SameErr::ExpireTimeInvalid)?;
    if !OFFSET_RE.is_match(offset) {
        return Err(SameErr::ExpireTimeInvalid);
    }

    let issue = segments.get(time_index).copied().unwrap_or("");
    if !ISSUE_RE.is_match(issue) {
        return Err(SameErr::DateTimeInvalid);
    }

    let julian_day: i64 = issue[0..3].parse().expect("checked issue digits");
    let hour: u32 = issue[3..5].parse().expect("checked issue digits");
    let minute: u32 = issue[5..7].parse().expect("checked issue digits");
    let start = issue_datetime(year, julian_day, hour, minute)?;

    let offset_hours: i64 = offset[0..2].parse().expect("checked offset digits");
    let offset_minutes: i64 = offset[2..4].parse().expect("checked offset digits");
    let end = start + Duration::minutes(offset_hours * 60 + offset_minutes);

    let mut locations = Vec::with_capacity(codes.len());
    for code in &codes {
        let record = translate_fips(book, code)?;
        if code[1..].ends_with("000") {
            locations.push(record.formatted);
        } else {
            locations.push(format!("{}, {}", record.county, record.region));
        }
    }
    let locations = locations.join("; ");

    // the sender is the tail from the issue time onward, minus its
    // first dash-delimited fragment (the issue time itself)
    let tail = segments[time_index..].join("-");
    let sender = tail.splitn(2, '-').nth(1).unwrap_or("").to_owned();

    debug!(
        "decoded SAME header: {} {} for {} locations",
        segments[1],
        segments[2],
        codes.len()
    );

    let timing = AlertTiming {
        start: format_wallclock(start),
        end: format_wallclock(end),
    };
    let formatted = format!(
        "{}a {} for {}; beginning at {} and ending at {}. Message from {}",
        organization, event, locations, timing.start, timing.end, sender
    );

    Ok(DecodedAlert {
        organization: organization.to_owned(),
        event: event.to_owned(),
        locations,
        timing,
        sender,
        formatted,
    })
}

// Reconstruct the UTC issue instant: December 31 of the prior year
// advanced by the Julian day, with HH:MM applied as UTC wall time.
fn issue_datetime(
    year: i32,
    julian_day: i64,
    hour: u32,
    minute: u32,
) -> Result<DateTime<Utc>, SameErr> {
    let max_day = if is_leap_year(year) { 366 } else { 365 };
    if julian_day < 1 || julian_day > max_day {
        return Err(SameErr::DateTimeInvalid);
    }

    let base = Utc
        .with_ymd_and_hms(year - 1, 12, 31, hour, minute, 0)
        .single()
        .ok_or(SameErr::DateTimeInvalid)?;
    Ok(base + Duration::days(julian_day))
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

// Presentation format for the validity window. The instant is UTC
// wall time rendered through the process-local timezone; the
// calendar day can drift when the process is not running in UTC.
fn format_wallclock(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%-l:%M %p on %B %-d")
        .to_string()
}

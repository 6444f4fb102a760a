//! Field parsers and validators

use std::collections::HashSet;
use std::hash::Hash;

use addressbook_domain::{
    Address, Appointment, Email, FinancialPlan, Name, Phone, Remark, Tag, YearMonth,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use shared::{Index, ParseError};

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_DATE_FORMAT: &str = "Dates should be in the format dd-MM-yyyy";
pub const MESSAGE_INVALID_DATE_TIME_FORMAT: &str =
    "Appointment dates should be in the format dd-MM-yyyy HH:mm";
pub const MESSAGE_INVALID_MONTH: &str = "Month should be between 01 and 12";
pub const MESSAGE_INVALID_DAY: &str = "The day does not exist in the given month";
pub const MESSAGE_INVALID_TIME: &str = "Time should be between 00:00 and 23:59";

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<day>[0-9]{2})-(?P<month>[0-9]{2})-(?P<year>[0-9]{4})$")
        .expect("date pattern is a valid regex")
});

static DATE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<day>[0-9]{2})-(?P<month>[0-9]{2})-(?P<year>[0-9]{4})",
        r" (?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})$",
    ))
    .expect("date-time pattern is a valid regex")
});

// ============== Index ==============

/// Parse a one-based index. Leading and trailing whitespace is ignored.
pub fn parse_index(one_based_index: &str) -> Result<Index, ParseError> {
    let trimmed = one_based_index.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::new(MESSAGE_INVALID_INDEX));
    }

    // Positions beyond i32::MAX are treated as malformed, not as huge lists
    let value: i32 = trimmed
        .parse()
        .map_err(|_| ParseError::new(MESSAGE_INVALID_INDEX))?;
    usize::try_from(value)
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::new(MESSAGE_INVALID_INDEX))
}

// ============== Contact fields ==============

pub fn parse_name(name: &str) -> Result<Name, ParseError> {
    Name::parse(name.trim())
}

pub fn parse_phone(phone: &str) -> Result<Phone, ParseError> {
    Phone::parse(phone.trim())
}

pub fn parse_address(address: &str) -> Result<Address, ParseError> {
    Address::parse(address.trim())
}

pub fn parse_email(email: &str) -> Result<Email, ParseError> {
    Email::parse(email.trim())
}

/// Remarks have no format; the text is only trimmed
pub fn parse_remark(remark: &str) -> Remark {
    Remark::new(remark.trim())
}

pub fn parse_tag(tag: &str) -> Result<Tag, ParseError> {
    Tag::parse(tag.trim())
}

/// Parse every tag; the first invalid one fails the whole set
pub fn parse_tags<I, S>(tags: I) -> Result<HashSet<Tag>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_all(tags, parse_tag)
}

pub fn parse_financial_plan(financial_plan: &str) -> Result<FinancialPlan, ParseError> {
    FinancialPlan::parse(financial_plan.trim())
}

pub fn parse_financial_plans<I, S>(financial_plans: I) -> Result<HashSet<FinancialPlan>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_all(financial_plans, parse_financial_plan)
}

fn parse_all<I, S, T, F>(values: I, parse_one: F) -> Result<HashSet<T>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    T: Eq + Hash,
    F: Fn(&str) -> Result<T, ParseError>,
{
    values
        .into_iter()
        .map(|value| parse_one(value.as_ref()))
        .collect()
}

// ============== Validation only ==============

pub fn validate_name(name: &str) -> Result<(), ParseError> {
    parse_name(name).map(|_| ())
}

pub fn validate_tag(tag: &str) -> Result<(), ParseError> {
    parse_tag(tag).map(|_| ())
}

pub fn validate_financial_plan(financial_plan: &str) -> Result<(), ParseError> {
    parse_financial_plan(financial_plan).map(|_| ())
}

// ============== Dates & appointments ==============

/// True if the day number at the start of `date` (`dd-...`) exists in
/// `year_month`. Malformed day numbers are never valid.
pub fn is_valid_day(year_month: YearMonth, date: &str) -> bool {
    date.trim()
        .split('-')
        .next()
        .and_then(|day| day.parse::<u32>().ok())
        .is_some_and(|day| year_month.is_valid_day(day))
}

/// Parse a `dd-MM-yyyy` date, rejecting days that do not exist in that month
pub fn parse_date(date: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = date.trim();
    let captures = DATE_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ParseError::new(MESSAGE_INVALID_DATE_FORMAT))?;

    calendar_date(
        trimmed,
        &captures["day"],
        &captures["month"],
        &captures["year"],
    )
}

/// Parse a `dd-MM-yyyy HH:mm` appointment date-time
pub fn parse_appointment_date(date_time: &str) -> Result<NaiveDateTime, ParseError> {
    let trimmed = date_time.trim();
    let captures = DATE_TIME_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ParseError::new(MESSAGE_INVALID_DATE_TIME_FORMAT))?;

    let date = calendar_date(
        trimmed,
        &captures["day"],
        &captures["month"],
        &captures["year"],
    )?;

    let hour = parse_digits(&captures["hour"], MESSAGE_INVALID_TIME)?;
    let minute = parse_digits(&captures["minute"], MESSAGE_INVALID_TIME)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ParseError::new(MESSAGE_INVALID_TIME))?;

    Ok(date.and_time(time))
}

/// Parse an appointment. The description is checked before the date.
pub fn parse_appointment(description: &str, date_time: &str) -> Result<Appointment, ParseError> {
    let description = description.trim();
    if !Appointment::is_valid_description(description) {
        return Err(ParseError::new(Appointment::MESSAGE_CONSTRAINTS));
    }
    let date_time = parse_appointment_date(date_time)?;
    Appointment::new(description, date_time)
}

/// Month range first, then day-of-month against that month's length
fn calendar_date(raw: &str, day: &str, month: &str, year: &str) -> Result<NaiveDate, ParseError> {
    let year: i32 = year
        .parse()
        .map_err(|_| ParseError::new(MESSAGE_INVALID_DATE_FORMAT))?;
    let month = parse_digits(month, MESSAGE_INVALID_MONTH)?;
    let year_month =
        YearMonth::new(year, month).ok_or_else(|| ParseError::new(MESSAGE_INVALID_MONTH))?;

    if !is_valid_day(year_month, raw) {
        return Err(ParseError::new(MESSAGE_INVALID_DAY));
    }

    let day = parse_digits(day, MESSAGE_INVALID_DAY)?;
    year_month
        .at_day(day)
        .ok_or_else(|| ParseError::new(MESSAGE_INVALID_DAY))
}

fn parse_digits(digits: &str, message: &str) -> Result<u32, ParseError> {
    digits.parse().map_err(|_| ParseError::new(message))
}

//! Directive renderers. Each one extracts a single field from a [`Zoned`]
//! value and formats it, consulting the [`Locale`] for names and ordinal
//! suffixes.

use std::fmt::Display;

use jiff::Zoned;
use jiff::civil::ISOWeekDate;

use crate::Locale;
use crate::Rendered;
use crate::locale::NameField;

fn zero_pad(value: impl Display, width: usize) -> String {
	format!("{value:0>width$}")
}

/// Zero-pad the magnitude and keep a leading `-` for negative years.
fn signed_padded(value: i64, width: usize) -> String {
	let sign = if value < 0 { "-" } else { "" };
	format!("{sign}{}", zero_pad(value.unsigned_abs(), width))
}

/// The last two digits of the magnitude, keeping the sign.
fn signed_two_digits(value: i64) -> String {
	let sign = if value < 0 { "-" } else { "" };
	format!("{sign}{:02}", value.unsigned_abs() % 100)
}

fn iso_week(date: &Zoned) -> ISOWeekDate {
	date.date().iso_week_date()
}

fn hour12(date: &Zoned) -> i64 {
	match i64::from(date.hour()) % 12 {
		0 => 12,
		hour => hour,
	}
}

fn hour24(date: &Zoned) -> i64 {
	match i64::from(date.hour()) {
		0 => 24,
		hour => hour,
	}
}

fn format_offset(date: &Zoned, separator: &str) -> String {
	let seconds = date.offset().seconds();
	let sign = if seconds < 0 { '-' } else { '+' };
	let seconds = seconds.unsigned_abs();

	format!(
		"{sign}{:02}{separator}{:02}",
		seconds / 3600,
		(seconds % 3600) / 60
	)
}

// Month

/// `1 2 ... 11 12`
pub fn month_number(date: &Zoned, _locale: &Locale) -> Rendered {
	i64::from(date.month()).into()
}

/// `1st 2nd ... 11th 12th`
pub fn month_ordinal(date: &Zoned, locale: &Locale) -> Rendered {
	locale.ordinal(i64::from(date.month())).into()
}

/// `01 02 ... 11 12`
pub fn month_padded(date: &Zoned, _locale: &Locale) -> Rendered {
	zero_pad(date.month(), 2).into()
}

/// `Jan Feb ... Nov Dec`
pub fn month_short(date: &Zoned, locale: &Locale) -> Rendered {
	locale.name(NameField::MonthShort, date).into()
}

/// `January February ... November December`
pub fn month_long(date: &Zoned, locale: &Locale) -> Rendered {
	locale.name(NameField::MonthLong, date).into()
}

// Quarter

/// `1 2 3 4`
pub fn quarter_number(date: &Zoned, _locale: &Locale) -> Rendered {
	(i64::from(date.month() - 1) / 3 + 1).into()
}

/// `1st 2nd 3rd 4th`
pub fn quarter_ordinal(date: &Zoned, locale: &Locale) -> Rendered {
	locale.ordinal(i64::from(date.month() - 1) / 3 + 1).into()
}

// Day of month

/// `1 2 ... 30 31`
pub fn day_of_month_number(date: &Zoned, _locale: &Locale) -> Rendered {
	i64::from(date.day()).into()
}

/// `1st 2nd ... 30th 31st`
pub fn day_of_month_ordinal(date: &Zoned, locale: &Locale) -> Rendered {
	locale.ordinal(i64::from(date.day())).into()
}

/// `01 02 ... 30 31`
pub fn day_of_month_padded(date: &Zoned, _locale: &Locale) -> Rendered {
	zero_pad(date.day(), 2).into()
}

// Day of year

/// `1 2 ... 365 366`
pub fn day_of_year_number(date: &Zoned, _locale: &Locale) -> Rendered {
	i64::from(date.day_of_year()).into()
}

/// `1st 2nd ... 365th 366th`
pub fn day_of_year_ordinal(date: &Zoned, locale: &Locale) -> Rendered {
	locale.ordinal(i64::from(date.day_of_year())).into()
}

/// `001 002 ... 365 366`
pub fn day_of_year_padded(date: &Zoned, _locale: &Locale) -> Rendered {
	zero_pad(date.day_of_year(), 3).into()
}

// Day of week

/// `0 1 ... 5 6`, Sunday is `0`.
pub fn day_of_week_number(date: &Zoned, _locale: &Locale) -> Rendered {
	i64::from(date.weekday().to_sunday_zero_offset()).into()
}

/// `0th 1st ... 5th 6th`
pub fn day_of_week_ordinal(date: &Zoned, locale: &Locale) -> Rendered {
	locale
		.ordinal(i64::from(date.weekday().to_sunday_zero_offset()))
		.into()
}

/// `Su Mo ... Fr Sa`: the first two letters of the long name.
pub fn day_of_week_narrow(date: &Zoned, locale: &Locale) -> Rendered {
	locale
		.name(NameField::WeekdayLong, date)
		.chars()
		.take(2)
		.collect::<String>()
		.into()
}

/// `Sun Mon ... Fri Sat`
pub fn day_of_week_short(date: &Zoned, locale: &Locale) -> Rendered {
	locale.name(NameField::WeekdayShort, date).into()
}

/// `Sunday Monday ... Friday Saturday`
pub fn day_of_week_long(date: &Zoned, locale: &Locale) -> Rendered {
	locale.name(NameField::WeekdayLong, date).into()
}

/// `1 2 ... 6 7`, Monday is `1`.
pub fn day_of_week_iso(date: &Zoned, _locale: &Locale) -> Rendered {
	i64::from(date.weekday().to_monday_one_offset()).into()
}

// Week of year

/// `1 2 ... 52 53`
pub fn week_of_year_number(date: &Zoned, _locale: &Locale) -> Rendered {
	i64::from(iso_week(date).week()).into()
}

/// `1st 2nd ... 52nd 53rd`
pub fn week_of_year_ordinal(date: &Zoned, locale: &Locale) -> Rendered {
	locale.ordinal(i64::from(iso_week(date).week())).into()
}

/// `01 02 ... 52 53`
pub fn week_of_year_padded(date: &Zoned, _locale: &Locale) -> Rendered {
	zero_pad(iso_week(date).week(), 2).into()
}

// Year

/// `0150 ... 2030`, `-0150` before year zero.
pub fn year_full(date: &Zoned, _locale: &Locale) -> Rendered {
	signed_padded(i64::from(date.year()), 4).into()
}

/// `70 71 ... 29 30`, `-50` for year `-150`.
pub fn year_short(date: &Zoned, _locale: &Locale) -> Rendered {
	signed_two_digits(i64::from(date.year())).into()
}

/// Year within the era: `2024` for 2024 AD, `201` for year `-200` (201 BC).
pub fn era_year(date: &Zoned, _locale: &Locale) -> Rendered {
	let year = i64::from(date.year());
	let era_year = if year <= 0 { 1 - year } else { year };
	era_year.into()
}

// Era

/// `BC AD`
pub fn era_short(date: &Zoned, locale: &Locale) -> Rendered {
	locale.name(NameField::EraShort, date).into()
}

/// `Before Christ, Anno Domini`
pub fn era_long(date: &Zoned, locale: &Locale) -> Rendered {
	locale.name(NameField::EraLong, date).into()
}

// Week year

/// `2024`, `-0150`: the ISO 8601 week-numbering year.
pub fn week_year_full(date: &Zoned, _locale: &Locale) -> Rendered {
	signed_padded(i64::from(iso_week(date).year()), 4).into()
}

/// `24`, `-50`
pub fn week_year_short(date: &Zoned, _locale: &Locale) -> Rendered {
	signed_two_digits(i64::from(iso_week(date).year())).into()
}

// AM/PM

/// `AM PM`
pub fn am_pm_upper(date: &Zoned, locale: &Locale) -> Rendered {
	locale
		.name(NameField::DayPeriod, date)
		.to_uppercase()
		.into()
}

/// `am pm`
pub fn am_pm_lower(date: &Zoned, locale: &Locale) -> Rendered {
	locale
		.name(NameField::DayPeriod, date)
		.to_lowercase()
		.into()
}

// Hour

/// `0 1 ... 22 23`
pub fn hour_number(date: &Zoned, _locale: &Locale) -> Rendered {
	i64::from(date.hour()).into()
}

/// `00 01 ... 22 23`
pub fn hour_padded(date: &Zoned, _locale: &Locale) -> Rendered {
	zero_pad(date.hour(), 2).into()
}

/// `1 2 ... 11 12`
pub fn hour12_number(date: &Zoned, _locale: &Locale) -> Rendered {
	hour12(date).into()
}

/// `01 02 ... 11 12`
pub fn hour12_padded(date: &Zoned, _locale: &Locale) -> Rendered {
	zero_pad(hour12(date), 2).into()
}

/// `1 2 ... 23 24`
pub fn hour24_number(date: &Zoned, _locale: &Locale) -> Rendered {
	hour24(date).into()
}

/// `01 02 ... 23 24`
pub fn hour24_padded(date: &Zoned, _locale: &Locale) -> Rendered {
	zero_pad(hour24(date), 2).into()
}

// Minute

/// `0 1 ... 58 59`
pub fn minute_number(date: &Zoned, _locale: &Locale) -> Rendered {
	i64::from(date.minute()).into()
}

/// `00 01 ... 58 59`
pub fn minute_padded(date: &Zoned, _locale: &Locale) -> Rendered {
	zero_pad(date.minute(), 2).into()
}

// Second

/// `0 1 ... 58 59`
pub fn second_number(date: &Zoned, _locale: &Locale) -> Rendered {
	i64::from(date.second()).into()
}

/// `00 01 ... 58 59`
pub fn second_padded(date: &Zoned, _locale: &Locale) -> Rendered {
	zero_pad(date.second(), 2).into()
}

/// The first `DIGITS` digits of the nanosecond fraction, truncated.
pub fn fraction<const DIGITS: usize>(date: &Zoned, _locale: &Locale) -> Rendered {
	let nanos = zero_pad(date.subsec_nanosecond(), 9);
	nanos[..DIGITS.min(9)].into()
}

// Offset

/// `-07:00 -06:00 ... +06:00 +07:00`
pub fn offset_colon(date: &Zoned, _locale: &Locale) -> Rendered {
	format_offset(date, ":").into()
}

/// `-0700 -0600 ... +0600 +0700`
pub fn offset_compact(date: &Zoned, _locale: &Locale) -> Rendered {
	format_offset(date, "").into()
}

// Unix timestamp

/// `1360013296`
pub fn timestamp_seconds(date: &Zoned, _locale: &Locale) -> Rendered {
	date.timestamp().as_second().into()
}

/// `1360013296123`
pub fn timestamp_milliseconds(date: &Zoned, _locale: &Locale) -> Rendered {
	date.timestamp().as_millisecond().into()
}

/// Stand-in for directives the vocabulary recognizes but cannot render yet.
pub fn unsupported(_date: &Zoned, _locale: &Locale) -> Rendered {
	Rendered::Unsupported
}

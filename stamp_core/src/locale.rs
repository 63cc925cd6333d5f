//! Locale-sensitive pieces used by the renderers: month, weekday, era and
//! meridiem names plus ordinal suffixes.
//!
//! Everything locale-specific comes from ICU4X compiled CLDR data. Names are
//! formatted with `icu_datetime` from single-field patterns (`LLLL`, `ccc`,
//! `G`, ...) and ordinal categories (`one`, `two`, `few`, ...) come from
//! `icu_plurals`. Both are loaded once per [`Locale`] on first use.

use std::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::OnceLock;

use icu_calendar::Date;
use icu_calendar::Gregorian;
use icu_calendar::Iso;
use icu_datetime::input::DateTime;
use icu_datetime::input::Time;
use icu_datetime::pattern::DateTimePattern;
use icu_datetime::pattern::FixedCalendarDateTimeNames;
use icu_locale_core::locale;
use icu_plurals::PluralCategory;
use icu_plurals::PluralRules;
use jiff::Zoned;
use jiff_icu::ConvertFrom as _;
use writeable::TryWriteable as _;

use crate::StampError;
use crate::StampResult;

/// Environment variables consulted by [`Locale::from_env`], highest
/// precedence first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// A calendar name a renderer can ask the locale for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
	MonthShort,
	MonthLong,
	WeekdayShort,
	WeekdayLong,
	EraShort,
	EraLong,
	/// `AM` / `PM` in the locale's own spelling.
	DayPeriod,
}

impl NameField {
	const COUNT: usize = 7;

	/// The CLDR pattern that renders only this field. Months and weekdays use
	/// the stand-alone forms.
	fn pattern(self) -> &'static str {
		match self {
			Self::MonthShort => "LLL",
			Self::MonthLong => "LLLL",
			Self::WeekdayShort => "ccc",
			Self::WeekdayLong => "cccc",
			Self::EraShort => "G",
			Self::EraLong => "GGGG",
			Self::DayPeriod => "a",
		}
	}

	fn index(self) -> usize {
		self as usize
	}
}

/// Ordinal suffix for each CLDR plural category.
#[derive(Debug)]
struct OrdinalSuffixes {
	one: &'static str,
	two: &'static str,
	few: &'static str,
	other: &'static str,
}

impl OrdinalSuffixes {
	const fn uniform(suffix: &'static str) -> Self {
		Self {
			one: suffix,
			two: suffix,
			few: suffix,
			other: suffix,
		}
	}

	fn for_category(&self, category: PluralCategory) -> &'static str {
		match category {
			PluralCategory::One => self.one,
			PluralCategory::Two => self.two,
			PluralCategory::Few => self.few,
			_ => self.other,
		}
	}
}

const ENGLISH_SUFFIXES: OrdinalSuffixes = OrdinalSuffixes {
	one: "st",
	two: "nd",
	few: "rd",
	other: "th",
};

/// CLDR has categories but no suffix text. Languages missing here use the
/// English suffixes.
static ORDINAL_SUFFIXES: [(&str, OrdinalSuffixes); 3] = [
	("de", OrdinalSuffixes::uniform(".")),
	(
		"fr",
		OrdinalSuffixes {
			one: "er",
			two: "e",
			few: "e",
			other: "e",
		},
	),
	("es", OrdinalSuffixes::uniform("º")),
];

fn ordinal_suffixes(language: &str) -> &'static OrdinalSuffixes {
	ORDINAL_SUFFIXES
		.iter()
		.find(|(code, _)| *code == language)
		.map_or(&ENGLISH_SUFFIXES, |(_, suffixes)| suffixes)
}

/// Names for one [`NameField`], loaded for the pattern that prints it.
struct FieldNames {
	pattern: DateTimePattern,
	names: FixedCalendarDateTimeNames<Gregorian>,
}

impl FieldNames {
	fn load(id: &icu_locale_core::Locale, field: NameField) -> Result<Self, String> {
		let pattern: DateTimePattern = field
			.pattern()
			.parse()
			.map_err(|e| format!("invalid pattern `{}`: {e:?}", field.pattern()))?;
		let mut names = FixedCalendarDateTimeNames::<Gregorian>::try_new(id.clone().into())
			.map_err(|e| e.to_string())?;
		names
			.include_for_pattern(&pattern)
			.map_err(|e| format!("{e:?}"))?;

		Ok(Self { pattern, names })
	}

	fn format(&self, date: &Zoned) -> String {
		let day = Date::<Iso>::convert_from(date.date()).to_calendar(Gregorian);
		let hour = u8::try_from(date.hour()).unwrap_or_default();
		let Ok(time) = Time::try_new(hour, 0, 0, 0) else {
			return String::new();
		};
		let datetime = DateTime { date: day, time };

		match self
			.names
			.with_pattern_unchecked(&self.pattern)
			.format(&datetime)
			.try_write_to_string()
		{
			Ok(text) => text.into_owned(),
			Err((error, text)) => {
				tracing::warn!(?error, "incomplete calendar name");
				text.into_owned()
			}
		}
	}
}

/// Data loaded lazily and shared between clones of a [`Locale`].
#[derive(Default)]
struct LocaleData {
	ordinals: OnceLock<Option<PluralRules>>,
	names: [OnceLock<Option<FieldNames>>; NameField::COUNT],
}

/// A validated locale: a BCP-47 identifier with ordinal plural rules
/// available. Calendar names are loaded from CLDR data the first time a
/// renderer asks for them.
#[derive(Clone)]
pub struct Locale {
	id: icu_locale_core::Locale,
	data: Arc<LocaleData>,
}

impl Locale {
	/// Parse and validate a BCP-47 tag such as `en-GB`, `fr` or `ja`.
	pub fn new(tag: &str) -> StampResult<Self> {
		let id: icu_locale_core::Locale =
			tag.parse().map_err(|e| StampError::UnknownLocale {
				locale: tag.to_string(),
				reason: format!("{e}"),
			})?;

		let rules = PluralRules::try_new_ordinal(id.clone().into()).map_err(|e| {
			StampError::UnknownLocale {
				locale: tag.to_string(),
				reason: format!("no ordinal plural rules: {e}"),
			}
		})?;

		tracing::debug!(locale = %id, "resolved locale");

		let data = LocaleData {
			ordinals: OnceLock::from(Some(rules)),
			..LocaleData::default()
		};

		Ok(Self {
			id,
			data: Arc::new(data),
		})
	}

	/// Accept POSIX locale names (`en_US.UTF-8`, `de_DE@euro`) as well as
	/// BCP-47 tags.
	pub fn from_posix(value: &str) -> StampResult<Self> {
		let tag = value
			.split(['.', '@'])
			.next()
			.unwrap_or_default()
			.replace('_', "-");

		Self::new(&tag)
	}

	/// Resolve the user's locale from [`LOCALE_ENV_VARS`]. Unset, `C`, `POSIX`
	/// or unparseable values fall back to [`Locale::default`].
	pub fn from_env() -> Self {
		let value = LOCALE_ENV_VARS
			.iter()
			.filter_map(|name| std::env::var(name).ok())
			.find(|value| !value.is_empty());

		match value.as_deref() {
			None | Some("C" | "POSIX") => Self::default(),
			Some(value) => {
				Self::from_posix(value).unwrap_or_else(|error| {
					tracing::warn!(%error, "falling back to the default locale");
					Self::default()
				})
			}
		}
	}

	pub fn tag(&self) -> String {
		self.id.to_string()
	}

	pub fn language(&self) -> &str {
		self.id.id.language.as_str()
	}

	/// The locale's name for `field` on `date`, e.g. `März` for
	/// [`NameField::MonthLong`] in German.
	pub fn name(&self, field: NameField, date: &Zoned) -> String {
		let names = self.data.names[field.index()].get_or_init(|| {
			FieldNames::load(&self.id, field)
				.inspect_err(|error| {
					tracing::warn!(locale = %self.id, ?field, %error, "no calendar names");
				})
				.ok()
		});

		names
			.as_ref()
			.map_or_else(String::new, |names| names.format(date))
	}

	/// `number` followed by the ordinal suffix the locale's plural rules pick
	/// for it, e.g. `2nd` in English.
	pub fn ordinal(&self, number: i64) -> String {
		let rules = self.data.ordinals.get_or_init(|| {
			PluralRules::try_new_ordinal(self.id.clone().into())
				.inspect_err(|error| {
					tracing::warn!(locale = %self.id, %error, "no ordinal plural rules");
				})
				.ok()
		});
		let category = rules.as_ref().map_or(PluralCategory::Other, |rules| {
			rules.category_for(number.unsigned_abs())
		});

		format!(
			"{number}{}",
			ordinal_suffixes(self.language()).for_category(category)
		)
	}
}

#[cfg(test)]
impl Locale {
	pub(crate) fn ordinal_rules_loaded(&self) -> bool {
		self.data.ordinals.get().is_some_and(Option::is_some)
	}

	pub(crate) fn names_loaded(&self, field: NameField) -> bool {
		self.data.names[field.index()]
			.get()
			.is_some_and(Option::is_some)
	}

	pub(crate) fn shares_data_with(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.data, &other.data)
	}
}

impl Default for Locale {
	fn default() -> Self {
		Self {
			id: locale!("en-US"),
			data: Arc::default(),
		}
	}
}

impl Debug for Locale {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Locale").field("id", &self.id).finish()
	}
}

impl FromStr for Locale {
	type Err = StampError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::from_posix(value)
	}
}

impl Display for Locale {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.id)
	}
}

impl PartialEq for Locale {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Locale {}

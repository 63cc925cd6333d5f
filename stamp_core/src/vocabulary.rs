use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::LazyLock;

use crate::BracketEscape;
use crate::NoEscape;
use crate::Registry;
use crate::RenderFn;
use crate::StampError;
use crate::StampResult;
use crate::renderers::*;

/// Name of the moment.js-style vocabulary.
pub const MOMENT: &str = "moment";
/// Name of the date-fns-style vocabulary.
pub const DATE_FNS: &str = "date_fns";
/// The vocabulary used when nothing else is configured.
pub const DEFAULT_VOCABULARY: &str = MOMENT;

pub(crate) const MOMENT_DIRECTIVES: &[(&str, RenderFn)] = &[
	// Month
	("M", month_number),
	("Mo", month_ordinal),
	("MM", month_padded),
	("MMM", month_short),
	("MMMM", month_long),
	// Quarter
	("Q", quarter_number),
	("Qo", quarter_ordinal),
	// Day of month
	("D", day_of_month_number),
	("Do", day_of_month_ordinal),
	("DD", day_of_month_padded),
	// Day of year
	("DDD", day_of_year_number),
	("DDDo", day_of_year_ordinal),
	("DDDD", day_of_year_padded),
	// Day of week
	("d", day_of_week_number),
	("do", day_of_week_ordinal),
	("dd", day_of_week_narrow),
	("ddd", day_of_week_short),
	("dddd", day_of_week_long),
	// Day of week (locale)
	("e", day_of_week_number),
	// Day of week (ISO)
	("E", day_of_week_iso),
	// Week of year
	("w", week_of_year_number),
	("wo", week_of_year_ordinal),
	("ww", week_of_year_padded),
	// Week of year (ISO)
	("W", week_of_year_number),
	("Wo", week_of_year_ordinal),
	("WW", week_of_year_padded),
	// Year
	("YY", year_short),
	("YYYY", year_full),
	("YYYYYY", unsupported),
	("Y", unsupported),
	// Era year
	("y", era_year),
	// Era
	("N", era_short),
	("NN", era_short),
	("NNN", era_short),
	("NNNN", era_long),
	("NNNNN", era_short),
	// Week year
	("gg", week_year_short),
	("gggg", week_year_full),
	// Week year (ISO)
	("GG", week_year_short),
	("GGGG", week_year_full),
	// AM/PM
	("A", am_pm_upper),
	("a", am_pm_lower),
	// Hour
	("H", hour_number),
	("HH", hour_padded),
	("h", hour12_number),
	("hh", hour12_padded),
	("k", hour24_number),
	("kk", hour24_padded),
	// Minute
	("m", minute_number),
	("mm", minute_padded),
	// Second
	("s", second_number),
	("ss", second_padded),
	// Fractional second
	("S", fraction::<1>),
	("SS", fraction::<2>),
	("SSS", fraction::<3>),
	("SSSS", fraction::<4>),
	("SSSSS", fraction::<5>),
	("SSSSSS", fraction::<6>),
	("SSSSSSS", fraction::<7>),
	("SSSSSSSS", fraction::<8>),
	("SSSSSSSSS", fraction::<9>),
	// Time zone
	("z", unsupported),
	("zz", unsupported),
	("Z", offset_colon),
	("ZZ", offset_compact),
	// Unix timestamp
	("X", timestamp_seconds),
	// Unix millisecond timestamp
	("x", timestamp_milliseconds),
];

static MOMENT_REGISTRY: LazyLock<Arc<Registry>> = LazyLock::new(|| {
	Arc::new(Registry::from_table(
		MOMENT,
		MOMENT_DIRECTIVES,
		BracketEscape::new('[', ']'),
	))
});

static DATE_FNS_REGISTRY: LazyLock<Arc<Registry>> =
	LazyLock::new(|| Arc::new(Registry::from_table(DATE_FNS, &[], NoEscape)));

/// The moment.js-style vocabulary with `[...]` escapes.
pub fn moment() -> Arc<Registry> {
	Arc::clone(&MOMENT_REGISTRY)
}

/// The date-fns-style vocabulary. It defines no directives yet, so every
/// pattern formats to itself.
pub fn date_fns() -> Arc<Registry> {
	Arc::clone(&DATE_FNS_REGISTRY)
}

/// A set of registries addressable by name.
#[derive(Debug, Clone)]
pub struct Vocabularies {
	registries: BTreeMap<String, Arc<Registry>>,
	aliases: BTreeMap<String, String>,
}

impl Vocabularies {
	/// An empty set with no vocabularies registered.
	pub fn empty() -> Self {
		Self {
			registries: BTreeMap::new(),
			aliases: BTreeMap::new(),
		}
	}

	/// The built-in `moment` and `date_fns` vocabularies. `date-fns` is
	/// accepted as an alias.
	pub fn builtin() -> Self {
		let mut vocabularies = Self::empty();
		vocabularies
			.registries
			.insert(MOMENT.to_string(), moment());
		vocabularies
			.registries
			.insert(DATE_FNS.to_string(), date_fns());
		vocabularies
			.aliases
			.insert("date-fns".to_string(), DATE_FNS.to_string());
		vocabularies
	}

	/// Add a registry under its own name.
	pub fn register(&mut self, registry: impl Into<Arc<Registry>>) -> StampResult<()> {
		let registry = registry.into();
		let name = registry.name().to_string();

		if self.contains(&name) {
			return Err(StampError::DuplicateVocabulary(name));
		}

		tracing::debug!(vocabulary = %name, "registered vocabulary");
		self.registries.insert(name, registry);

		Ok(())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.registries.contains_key(name) || self.aliases.contains_key(name)
	}

	/// Look up a vocabulary by name or alias.
	pub fn get(&self, name: &str) -> StampResult<Arc<Registry>> {
		let name = self.aliases.get(name).map_or(name, String::as_str);

		self.registries
			.get(name)
			.cloned()
			.ok_or_else(|| StampError::UnknownVocabulary(name.to_string()))
	}

	/// Registered vocabulary names in sorted order, aliases excluded.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.registries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Arc<Registry>> {
		self.registries.values()
	}
}

impl Default for Vocabularies {
	fn default() -> Self {
		Self::builtin()
	}
}

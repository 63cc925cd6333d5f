use std::sync::Arc;

use jiff::Timestamp;
use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::DEFAULT_VOCABULARY;
use crate::Locale;
use crate::Registry;
use crate::StampConfig;
use crate::StampError;
use crate::StampResult;
use crate::Vocabularies;
use crate::engine::format;

/// Look up an IANA time zone name such as `Europe/Berlin` or `UTC`.
///
/// `UTC` resolves without consulting the time zone database.
pub fn time_zone(name: &str) -> StampResult<TimeZone> {
	if name.eq_ignore_ascii_case("UTC") {
		return Ok(TimeZone::UTC);
	}

	TimeZone::get(name).map_err(|e| StampError::TimeZone {
		name: name.to_string(),
		reason: e.to_string(),
	})
}

/// Per-call overrides for a [`FormatContext`]. Unset fields use the
/// context's defaults.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
	pub vocabulary: Option<String>,
	pub locale: Option<Locale>,
	pub time_zone: Option<TimeZone>,
}

impl FormatOptions {
	#[must_use]
	pub fn with_vocabulary(mut self, vocabulary: impl Into<String>) -> Self {
		self.vocabulary = Some(vocabulary.into());
		self
	}

	#[must_use]
	pub fn with_locale(mut self, locale: Locale) -> Self {
		self.locale = Some(locale);
		self
	}

	#[must_use]
	pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
		self.time_zone = Some(time_zone);
		self
	}
}

/// The current formatting configuration: registered vocabularies plus the
/// default vocabulary, locale and time zone.
///
/// Nothing here is global. Build one context (usually from
/// [`StampConfig`]), adjust it with the `set_*` methods, and pass it to
/// whatever formats dates. Vocabulary and locale names are validated when
/// they are set or resolved, before any pattern is tokenized.
#[derive(Debug, Clone)]
pub struct FormatContext {
	vocabularies: Vocabularies,
	vocabulary: String,
	locale: Locale,
	time_zone: TimeZone,
}

impl Default for FormatContext {
	/// Built-in vocabularies, `moment`, `en-US`, and UTC.
	fn default() -> Self {
		Self {
			vocabularies: Vocabularies::builtin(),
			vocabulary: DEFAULT_VOCABULARY.to_string(),
			locale: Locale::default(),
			time_zone: TimeZone::UTC,
		}
	}
}

impl FormatContext {
	/// Defaults taken from the process environment: the locale from
	/// `LC_ALL`/`LC_TIME`/`LANG` and the system time zone.
	pub fn from_env() -> Self {
		Self {
			locale: Locale::from_env(),
			time_zone: TimeZone::system(),
			..Self::default()
		}
	}

	/// Apply a loaded config on top of [`FormatContext::from_env`].
	pub fn from_config(config: &StampConfig) -> StampResult<Self> {
		let mut context = Self::from_env();

		if let Some(vocabulary) = &config.vocabulary {
			context.set_vocabulary(vocabulary)?;
		}

		if let Some(locale) = &config.locale {
			context.set_locale(locale.parse()?);
		}

		if let Some(name) = &config.time_zone {
			context.set_time_zone(time_zone(name)?);
		}

		Ok(context)
	}

	pub fn vocabularies(&self) -> &Vocabularies {
		&self.vocabularies
	}

	/// Make a custom registry available by name.
	pub fn register(&mut self, registry: impl Into<Arc<Registry>>) -> StampResult<()> {
		self.vocabularies.register(registry)
	}

	/// Name of the default vocabulary.
	pub fn vocabulary(&self) -> &str {
		&self.vocabulary
	}

	/// Change the default vocabulary. Fails with
	/// [`StampError::UnknownVocabulary`] when the name is not registered.
	pub fn set_vocabulary(&mut self, name: &str) -> StampResult<()> {
		if !self.vocabularies.contains(name) {
			return Err(StampError::UnknownVocabulary(name.to_string()));
		}

		self.vocabulary = name.to_string();
		Ok(())
	}

	pub fn locale(&self) -> &Locale {
		&self.locale
	}

	pub fn set_locale(&mut self, locale: Locale) {
		self.locale = locale;
	}

	pub fn time_zone(&self) -> &TimeZone {
		&self.time_zone
	}

	pub fn set_time_zone(&mut self, time_zone: TimeZone) {
		self.time_zone = time_zone;
	}

	/// The registry selected by `options`, falling back to the default.
	pub fn registry(&self, options: &FormatOptions) -> StampResult<Arc<Registry>> {
		let name = options.vocabulary.as_deref().unwrap_or(&self.vocabulary);
		let registry = self.vocabularies.get(name)?;
		tracing::debug!(vocabulary = registry.name(), "selected vocabulary");

		Ok(registry)
	}

	/// Format a zoned datetime. The date's own time zone is kept.
	pub fn format_zoned(
		&self,
		date: &Zoned,
		pattern: &str,
		options: &FormatOptions,
	) -> StampResult<String> {
		let registry = self.registry(options)?;
		let locale = options.locale.as_ref().unwrap_or(&self.locale);

		format(date, pattern, &registry, locale)
	}

	/// Format an instant after converting it into the time zone from
	/// `options`, or the context's default time zone.
	pub fn format_timestamp(
		&self,
		timestamp: Timestamp,
		pattern: &str,
		options: &FormatOptions,
	) -> StampResult<String> {
		let time_zone = options.time_zone.as_ref().unwrap_or(&self.time_zone);
		let date = timestamp.to_zoned(time_zone.clone());

		self.format_zoned(&date, pattern, options)
	}
}

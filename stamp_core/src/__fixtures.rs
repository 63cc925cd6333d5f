use jiff::Zoned;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

use crate::BracketEscape;
use crate::Registry;
use crate::Segments;
use crate::renderers;

pub fn utc(datetime: DateTime) -> Zoned {
	datetime
		.to_zoned(TimeZone::UTC)
		.unwrap_or_else(|e| panic!("zoned: {e}"))
}

pub fn with_offset(datetime: DateTime, hours: i8) -> Zoned {
	datetime
		.to_zoned(TimeZone::fixed(jiff::tz::offset(hours)))
		.unwrap_or_else(|e| panic!("zoned: {e}"))
}

/// A small vocabulary with overlapping month and day directives.
pub fn month_registry() -> Registry {
	Registry::builder("months")
		.directive("M", renderers::month_number)
		.directive("MM", renderers::month_padded)
		.directive("MMM", renderers::month_short)
		.directive("D", renderers::day_of_month_number)
		.directive("Do", renderers::day_of_month_ordinal)
		.escape(BracketEscape::default())
		.build()
		.unwrap_or_else(|e| panic!("registry: {e}"))
}

/// Only the single-character `M` directive, no escapes.
pub fn single_month_registry() -> Registry {
	Registry::builder("single")
		.directive("M", renderers::month_number)
		.build()
		.unwrap_or_else(|e| panic!("registry: {e}"))
}

/// Segments as `(directive, start, end)` triples, with `None` for literals.
pub fn describe(segments: &Segments<'_>) -> Vec<(Option<String>, usize, usize)> {
	segments
		.iter()
		.map(|segment| {
			let span = segment.span();
			(segment.directive().map(str::to_string), span.start, span.end)
		})
		.collect()
}

/// Assert the spans tile `0..len` with no gaps or overlaps and that no two
/// literals are adjacent.
pub fn assert_well_formed(pattern: &str, segments: &Segments<'_>) {
	let mut cursor = 0;

	for segment in segments {
		assert_eq!(segment.span().start, cursor, "gap before {segment}");
		assert!(segment.span().end > cursor, "empty span at {segment}");
		cursor = segment.span().end;
	}

	assert_eq!(cursor, pattern.len(), "spans do not cover `{pattern}`");

	for pair in segments.windows(2) {
		assert!(
			!(pair[0].is_literal() && pair[1].is_literal()),
			"adjacent literals: {} and {}",
			pair[0],
			pair[1]
		);
	}
}

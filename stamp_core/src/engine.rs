use jiff::Zoned;

use crate::Locale;
use crate::Registry;
use crate::Rendered;
use crate::Segment;
use crate::StampError;
use crate::StampResult;
use crate::lexer::tokenize;

/// Concatenate literal text and rendered directive values in order.
///
/// A directive whose renderer returns [`Rendered::Unsupported`] fails the
/// whole render with [`StampError::UnsupportedDirective`].
pub fn render<'a, 'r: 'a>(
	segments: impl IntoIterator<Item = &'a Segment<'r>>,
	date: &Zoned,
	locale: &Locale,
) -> StampResult<String> {
	let mut output = String::new();

	for segment in segments {
		match segment {
			Segment::Literal { text, .. } => output.push_str(text),
			Segment::Directive { directive, span } => {
				match directive.render(date, locale) {
					Rendered::Unsupported => {
						return Err(StampError::UnsupportedDirective {
							directive: directive.token().to_string(),
							offset: span.start,
						});
					}
					rendered => output.push_str(&rendered.to_string()),
				}
			}
		}
	}

	Ok(output)
}

/// Tokenize `pattern` with `registry` and render it against `date`.
pub fn format(
	date: &Zoned,
	pattern: &str,
	registry: &Registry,
	locale: &Locale,
) -> StampResult<String> {
	let segments = tokenize(pattern, registry)?;
	render(&segments, date, locale)
}

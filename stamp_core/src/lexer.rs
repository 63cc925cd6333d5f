use crate::Registry;
use crate::Segments;
use crate::Span;
use crate::StampResult;

/// Walks a pattern left to right, classifying every character as part of an
/// escape span, a directive, or plain literal text.
struct PatternWalker<'p, 'r> {
	/// The pattern being tokenized.
	pattern: &'p str,
	/// The vocabulary supplying directives and the escape convention.
	registry: &'r Registry,
	/// Byte offset of the next unclassified character.
	cursor: usize,
	/// Collected segments.
	segments: Segments<'r>,
}

impl<'p, 'r> PatternWalker<'p, 'r> {
	fn new(pattern: &'p str, registry: &'r Registry) -> Self {
		Self {
			pattern,
			registry,
			cursor: 0,
			segments: Segments::new(),
		}
	}

	/// Emit the character under the cursor as literal text.
	fn push_char(&mut self, ch: char) {
		let end = self.cursor + ch.len_utf8();
		let span = Span::new(self.cursor, end);
		self.segments.push_literal(span.slice(self.pattern), span);
		self.cursor = end;
	}

	/// Try every directive at the cursor, longest first. Returns `true` when a
	/// directive segment was emitted.
	fn push_directive(&mut self) -> bool {
		let pattern = self.pattern;
		let registry = self.registry;
		let rest = &pattern[self.cursor..];

		let Some(directive) = registry
			.directives_by_length()
			.find(|directive| rest.starts_with(directive.token()))
		else {
			return false;
		};

		let span = Span::new(self.cursor, self.cursor + directive.token().len());
		tracing::trace!(directive = directive.token(), %span, "matched directive");
		self.segments.push_directive(directive, span);
		self.cursor = span.end;

		true
	}

	fn process(mut self) -> StampResult<Segments<'r>> {
		while let Some(ch) = self.pattern[self.cursor..].chars().next() {
			if let Some(escape) = self.registry.escape_span(self.pattern, self.cursor)? {
				self.segments.push_literal(escape.text, escape.span);
				self.cursor = escape.span.end;
				continue;
			}

			if !self.registry.is_token_char(ch) {
				self.push_char(ch);
				continue;
			}

			if !self.push_directive() {
				self.push_char(ch);
			}
		}

		Ok(self.segments)
	}
}

/// Split `pattern` into literal and directive segments using `registry`.
///
/// The only failure is a malformed escape reported by the registry's escape
/// recognizer.
pub fn tokenize<'r>(pattern: &str, registry: &'r Registry) -> StampResult<Segments<'r>> {
	PatternWalker::new(pattern, registry).process()
}

use std::fmt::Display;
use std::ops::Range;

use derive_more::Deref;

use crate::registry::Directive;

/// A half-open `[start, end)` byte range into the source pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
	pub start: usize,
	pub end: usize,
}

impl Span {
	pub const fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	pub fn range(&self) -> Range<usize> {
		self.start..self.end
	}

	/// Borrow the text this span covers in `source`.
	pub fn slice<'s>(&self, source: &'s str) -> &'s str {
		&source[self.range()]
	}
}

impl Display for Span {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}..{}", self.start, self.end)
	}
}

/// One classified unit of a tokenized pattern.
#[derive(Debug, Clone)]
pub enum Segment<'r> {
	/// Text emitted verbatim. For escaped regions `text` excludes the
	/// delimiters while `span` still covers them.
	Literal { text: String, span: Span },
	/// A recognized directive bound to its rendering function.
	Directive {
		directive: &'r Directive,
		span: Span,
	},
}

impl Eq for Segment<'_> {}
impl PartialEq for Segment<'_> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(
				Segment::Literal { text, span },
				Segment::Literal {
					text: other_text,
					span: other_span,
				},
			) => text == other_text && span == other_span,
			(
				Segment::Directive { directive, span },
				Segment::Directive {
					directive: other_directive,
					span: other_span,
				},
			) => directive.token() == other_directive.token() && span == other_span,
			_ => false,
		}
	}
}

impl Segment<'_> {
	pub fn span(&self) -> Span {
		match self {
			Segment::Literal { span, .. } | Segment::Directive { span, .. } => *span,
		}
	}

	pub fn is_literal(&self) -> bool {
		matches!(self, Segment::Literal { .. })
	}

	/// The literal text, or `None` for directive segments.
	pub fn text(&self) -> Option<&str> {
		match self {
			Segment::Literal { text, .. } => Some(text),
			Segment::Directive { .. } => None,
		}
	}

	/// The matched directive string, or `None` for literal segments.
	pub fn directive(&self) -> Option<&str> {
		match self {
			Segment::Literal { .. } => None,
			Segment::Directive { directive, .. } => Some(directive.token()),
		}
	}
}

impl Display for Segment<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Segment::Literal { text, span } => write!(f, "literal {text:?} @ {span}"),
			Segment::Directive { directive, span } => {
				write!(f, "directive {} @ {span}", directive.token())
			}
		}
	}
}

/// The ordered output of a single tokenize call.
///
/// Adjacent literal segments are always merged, so two literals never sit
/// next to each other in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Segments<'r>(Vec<Segment<'r>>);

impl<'r> Segments<'r> {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Append a literal, merging it into the previous segment when that one is
	/// also a literal.
	pub(crate) fn push_literal(&mut self, value: &str, span: Span) {
		if let Some(Segment::Literal {
			text,
			span: previous,
		}) = self.0.last_mut()
		{
			text.push_str(value);
			previous.end = span.end;
			return;
		}

		self.0.push(Segment::Literal {
			text: value.to_string(),
			span,
		});
	}

	pub(crate) fn push_directive(&mut self, directive: &'r Directive, span: Span) {
		self.0.push(Segment::Directive { directive, span });
	}

	/// Concatenate the text of every literal segment, skipping directives.
	pub fn literal_text(&self) -> String {
		self.0.iter().filter_map(Segment::text).collect()
	}
}

impl<'r> IntoIterator for Segments<'r> {
	type IntoIter = std::vec::IntoIter<Segment<'r>>;
	type Item = Segment<'r>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a, 'r> IntoIterator for &'a Segments<'r> {
	type IntoIter = std::slice::Iter<'a, Segment<'r>>;
	type Item = &'a Segment<'r>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

use std::collections::HashSet;
use std::fmt::Display;
use std::sync::OnceLock;

use jiff::Zoned;

use crate::Locale;
use crate::Span;
use crate::StampError;
use crate::StampResult;

/// The signature every directive renderer shares.
pub type RenderFn = fn(&Zoned, &Locale) -> Rendered;

/// The value a renderer produces for one directive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rendered {
	Text(String),
	Number(i64),
	/// The directive is recognized by its vocabulary but has no renderer yet.
	Unsupported,
}

impl From<String> for Rendered {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for Rendered {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<i64> for Rendered {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}

impl Display for Rendered {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Text(text) => write!(f, "{text}"),
			Self::Number(number) => write!(f, "{number}"),
			Self::Unsupported => Ok(()),
		}
	}
}

/// A directive string bound to the function that renders it.
#[derive(Clone)]
pub struct Directive {
	token: String,
	render: RenderFn,
}

impl Directive {
	pub fn new(token: impl Into<String>, render: RenderFn) -> Self {
		Self {
			token: token.into(),
			render,
		}
	}

	pub fn token(&self) -> &str {
		&self.token
	}

	pub fn render(&self, date: &Zoned, locale: &Locale) -> Rendered {
		(self.render)(date, locale)
	}
}

impl std::fmt::Debug for Directive {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Directive")
			.field("token", &self.token)
			.finish_non_exhaustive()
	}
}

/// A region of the pattern that must be emitted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeSpan<'p> {
	/// Covers the delimiters as well as the escaped text.
	pub span: Span,
	/// The escaped text without its delimiters.
	pub text: &'p str,
}

/// Decides whether a literal-escape region starts at a given offset.
pub trait EscapeRecognizer: Send + Sync {
	/// Returns `Ok(None)` when `offset` does not start an escape, and
	/// [`StampError::MalformedEscape`] when it starts one that never closes.
	fn escape_span<'p>(&self, pattern: &'p str, offset: usize)
	-> StampResult<Option<EscapeSpan<'p>>>;

	/// Characters that can begin an escape. Informational only.
	fn delimiters(&self) -> Option<(char, char)> {
		None
	}
}

/// For vocabularies without an escape convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEscape;

impl EscapeRecognizer for NoEscape {
	fn escape_span<'p>(
		&self,
		_pattern: &'p str,
		_offset: usize,
	) -> StampResult<Option<EscapeSpan<'p>>> {
		Ok(None)
	}
}

/// Literal text wrapped in a pair of delimiters, e.g. `[at]`.
#[derive(Debug, Clone, Copy)]
pub struct BracketEscape {
	open: char,
	close: char,
}

impl BracketEscape {
	pub const fn new(open: char, close: char) -> Self {
		Self { open, close }
	}
}

impl Default for BracketEscape {
	fn default() -> Self {
		Self::new('[', ']')
	}
}

impl EscapeRecognizer for BracketEscape {
	fn escape_span<'p>(
		&self,
		pattern: &'p str,
		offset: usize,
	) -> StampResult<Option<EscapeSpan<'p>>> {
		let rest = &pattern[offset..];
		if !rest.starts_with(self.open) {
			return Ok(None);
		}

		let inner_start = offset + self.open.len_utf8();
		let Some(close_at) = pattern[inner_start..].find(self.close) else {
			return Err(StampError::MalformedEscape {
				offset,
				open: self.open,
				close: self.close,
			});
		};

		let inner_end = inner_start + close_at;
		Ok(Some(EscapeSpan {
			span: Span::new(offset, inner_end + self.close.len_utf8()),
			text: &pattern[inner_start..inner_end],
		}))
	}

	fn delimiters(&self) -> Option<(char, char)> {
		Some((self.open, self.close))
	}
}

/// Lookup data derived from a registry's directive set.
#[derive(Debug)]
pub(crate) struct DirectiveIndex {
	/// Every character that appears in any directive.
	pub chars: HashSet<char>,
	/// Indices into the directive list, longest first. Equal lengths keep
	/// declaration order.
	pub by_length: Vec<usize>,
}

impl DirectiveIndex {
	fn build(directives: &[Directive]) -> Self {
		let chars = directives
			.iter()
			.flat_map(|directive| directive.token.chars())
			.collect();

		let mut by_length: Vec<usize> = (0..directives.len()).collect();
		by_length.sort_by_key(|&index| std::cmp::Reverse(directives[index].token.len()));

		Self { chars, by_length }
	}
}

/// A named vocabulary: directives plus an escape convention.
///
/// Registries are immutable once built, so the derived [`DirectiveIndex`] is
/// computed on first use and never invalidated.
pub struct Registry {
	name: String,
	directives: Vec<Directive>,
	escape: Box<dyn EscapeRecognizer>,
	index: OnceLock<DirectiveIndex>,
}

impl Registry {
	pub fn builder(name: impl Into<String>) -> RegistryBuilder {
		RegistryBuilder {
			name: name.into(),
			directives: Vec::new(),
			escape: Box::new(NoEscape),
		}
	}

	/// Build a registry from a static table. The table must already satisfy
	/// the uniqueness and non-empty invariants.
	pub(crate) fn from_table(
		name: &str,
		table: &[(&'static str, RenderFn)],
		escape: impl EscapeRecognizer + 'static,
	) -> Self {
		Self {
			name: name.to_string(),
			directives: table
				.iter()
				.map(|(token, render)| Directive::new(*token, *render))
				.collect(),
			escape: Box::new(escape),
			index: OnceLock::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Directives in declaration order.
	pub fn directives(&self) -> &[Directive] {
		&self.directives
	}

	pub fn get(&self, token: &str) -> Option<&Directive> {
		self.directives
			.iter()
			.find(|directive| directive.token == token)
	}

	pub fn escape_span<'p>(
		&self,
		pattern: &'p str,
		offset: usize,
	) -> StampResult<Option<EscapeSpan<'p>>> {
		self.escape.escape_span(pattern, offset)
	}

	pub fn escape_delimiters(&self) -> Option<(char, char)> {
		self.escape.delimiters()
	}

	/// Whether the derived lookup data has been computed yet.
	pub fn is_indexed(&self) -> bool {
		self.index.get().is_some()
	}

	pub(crate) fn index(&self) -> &DirectiveIndex {
		self.index.get_or_init(|| {
			tracing::debug!(
				vocabulary = %self.name,
				directives = self.directives.len(),
				"building directive index"
			);
			DirectiveIndex::build(&self.directives)
		})
	}

	/// Whether `ch` appears anywhere in any directive.
	pub fn is_token_char(&self, ch: char) -> bool {
		self.index().chars.contains(&ch)
	}

	/// Directives ordered for longest-match scanning.
	pub fn directives_by_length(&self) -> impl Iterator<Item = &Directive> {
		self.index()
			.by_length
			.iter()
			.map(|&index| &self.directives[index])
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("name", &self.name)
			.field("directives", &self.directives)
			.field("escape", &self.escape.delimiters())
			.finish_non_exhaustive()
	}
}

/// Collects directives for a [`Registry`] and validates them on
/// [`RegistryBuilder::build`].
pub struct RegistryBuilder {
	name: String,
	directives: Vec<Directive>,
	escape: Box<dyn EscapeRecognizer>,
}

impl RegistryBuilder {
	#[must_use]
	pub fn directive(mut self, token: impl Into<String>, render: RenderFn) -> Self {
		self.directives.push(Directive::new(token, render));
		self
	}

	#[must_use]
	pub fn escape(mut self, escape: impl EscapeRecognizer + 'static) -> Self {
		self.escape = Box::new(escape);
		self
	}

	pub fn build(self) -> StampResult<Registry> {
		let mut seen = HashSet::new();

		for directive in &self.directives {
			if directive.token.is_empty() {
				return Err(StampError::EmptyDirective {
					vocabulary: self.name,
				});
			}

			if !seen.insert(directive.token.as_str()) {
				return Err(StampError::DuplicateDirective {
					vocabulary: self.name.clone(),
					directive: directive.token.clone(),
				});
			}
		}

		Ok(Registry {
			name: self.name,
			directives: self.directives,
			escape: self.escape,
			index: OnceLock::new(),
		})
	}
}

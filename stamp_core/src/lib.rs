//! `stamp_core` is the core library for the stamp date formatter. It turns a
//! human-authored pattern such as `YYYY-MM-DD` into text by splitting the
//! pattern into literal and directive segments, then rendering each
//! directive against a [`jiff::Zoned`] value and a [`Locale`].
//!
//! ## Processing Pipeline
//!
//! ```text
//! Pattern string
//!   → Registry (directives + escape convention for one vocabulary)
//!   → Tokenizer (escape spans, longest-match directives, merged literals)
//!   → Segments (literal text or directive bound to a renderer, with offsets)
//!   → Driver (renders each directive with the date and locale, concatenates)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `stamp.toml`.
//! - [`locale`]: CLDR month, weekday and era names plus ordinal suffixes.
//! - [`renderers`]: One rendering function per directive.
//! - [`vocabulary`]: The built-in `moment` and `date_fns` vocabularies.
//!
//! ## Key Types
//!
//! - [`Registry`]: A named vocabulary: directives plus an escape recognizer.
//! - [`Segment`]: One literal or directive unit of a tokenized pattern.
//! - [`FormatContext`]: Default vocabulary, locale and time zone, passed
//!   explicitly instead of living in process-wide state.
//! - [`StampError`]: Every failure the library reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use jiff::tz::TimeZone;
//! use stamp_core::{Locale, format, vocabulary};
//!
//! let date = date(2024, 3, 5).at(9, 30, 0, 0).to_zoned(TimeZone::UTC)?;
//! let moment = vocabulary::moment();
//!
//! let text = format(&date, "dddd, MMMM Do YYYY [at] HH:mm", &moment, &Locale::default())?;
//! assert_eq!(text, "Tuesday, March 5th 2024 at 09:30");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use config::*;
pub use context::*;
pub use engine::*;
pub use error::*;
pub use lexer::tokenize;
pub use locale::Locale;
pub use registry::*;
pub use tokens::*;
pub use vocabulary::DATE_FNS;
pub use vocabulary::DEFAULT_VOCABULARY;
pub use vocabulary::MOMENT;
pub use vocabulary::Vocabularies;

pub mod config;
mod context;
mod engine;
#[allow(unused_assignments)]
mod error;
pub(crate) mod lexer;
pub mod locale;
mod registry;
pub mod renderers;
mod tokens;
pub mod vocabulary;

#[cfg(test)]
mod __fixtures;

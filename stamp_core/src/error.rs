use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum StampError {
	#[error(transparent)]
	#[diagnostic(code(stamp::io_error))]
	Io(#[from] std::io::Error),

	#[error("escape starting with `{open}` at offset {offset} has no closing `{close}`")]
	#[diagnostic(
		code(stamp::malformed_escape),
		help("close the literal with `{close}` or remove the stray `{open}`")
	)]
	MalformedEscape {
		offset: usize,
		open: char,
		close: char,
	},

	#[error("directive `{directive}` at offset {offset} is recognized but not supported yet")]
	#[diagnostic(
		code(stamp::unsupported_directive),
		help("wrap the directive in the vocabulary's escape delimiters to print it literally")
	)]
	UnsupportedDirective { directive: String, offset: usize },

	#[error("unknown vocabulary: `{0}`")]
	#[diagnostic(
		code(stamp::unknown_vocabulary),
		help("run `stamp vocabularies` to list the registered vocabularies")
	)]
	UnknownVocabulary(String),

	#[error("unknown locale `{locale}`: {reason}")]
	#[diagnostic(
		code(stamp::unknown_locale),
		help("use a BCP-47 tag such as `en-GB` or a POSIX name such as `de_DE.UTF-8`")
	)]
	UnknownLocale { locale: String, reason: String },

	#[error("vocabulary `{vocabulary}` defines directive `{directive}` more than once")]
	#[diagnostic(code(stamp::duplicate_directive))]
	DuplicateDirective {
		vocabulary: String,
		directive: String,
	},

	#[error("vocabulary `{vocabulary}` defines an empty directive")]
	#[diagnostic(code(stamp::empty_directive))]
	EmptyDirective { vocabulary: String },

	#[error("vocabulary `{0}` is already registered")]
	#[diagnostic(
		code(stamp::duplicate_vocabulary),
		help("each vocabulary name must be unique")
	)]
	DuplicateVocabulary(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(stamp::config_parse),
		help("check that stamp.toml is valid TOML with optional `vocabulary`, `locale` and `time_zone` keys")
	)]
	ConfigParse(String),

	#[error("unknown time zone `{name}`: {reason}")]
	#[diagnostic(code(stamp::time_zone))]
	TimeZone { name: String, reason: String },

	#[error("invalid date: {0}")]
	#[diagnostic(
		code(stamp::invalid_date),
		help("use an RFC 3339 / RFC 9557 timestamp such as `2024-03-05T10:00:00Z` or unix seconds")
	)]
	InvalidDate(String),
}

pub type StampResult<T> = Result<T, StampError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Format dates with moment-style patterns.",
	long_about = "stamp formats dates and times using human-authored patterns such as \
	              `YYYY-MM-DD` or `dddd, MMMM Do [at] HH:mm`.\n\nText inside `[...]` is \
	              printed as-is, everything else is matched against the directives of the \
	              selected vocabulary.\n\nQuick start:\n  stamp format YYYY-MM-DD        \
	              Format the current date\n  stamp tokens \"MMM Do\"          Show how a \
	              pattern is split\n  stamp vocabularies             List vocabularies and \
	              directives"
)]
pub struct StampCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory searched for `stamp.toml`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,

	/// Vocabulary used to interpret the pattern, e.g. `moment` or `date_fns`.
	#[arg(long, global = true)]
	pub vocabulary: Option<String>,

	/// Locale for month, weekday and era names, e.g. `en-GB` or `fr_FR.UTF-8`.
	#[arg(long, global = true)]
	pub locale: Option<String>,

	/// IANA time zone the date is converted into, e.g. `Europe/Berlin`.
	#[arg(long, global = true)]
	pub tz: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Format a date with a pattern.
	///
	/// Prints the rendered pattern followed by a newline. Without `--date` the
	/// current time is used. Fails when the pattern contains an unclosed
	/// escape or a directive the vocabulary cannot render yet.
	Format {
		/// The pattern to render, e.g. `YYYY-MM-DD`.
		pattern: String,

		/// The date to format. Accepts an RFC 9557 zoned datetime
		/// (`2024-03-05T10:00:00+01:00[Europe/Paris]`), an RFC 3339 timestamp
		/// (`2024-03-05T09:00:00Z`), a civil datetime or date interpreted in the
		/// selected time zone, or unix seconds.
		#[arg(long, short, allow_hyphen_values = true)]
		date: Option<String>,
	},
	/// Show how a pattern is split into literal and directive segments.
	///
	/// Each segment is printed with its byte range in the pattern. Useful for
	/// checking which directive a run of letters resolves to.
	Tokens {
		/// The pattern to tokenize.
		pattern: String,

		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List the registered vocabularies and their directives.
	Vocabularies,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}

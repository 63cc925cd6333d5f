use std::path::PathBuf;
use std::process;

use clap::Parser;
use jiff::Timestamp;
use jiff::Zoned;
use jiff::civil;
use jiff::tz::TimeZone;
use owo_colors::OwoColorize;
use stamp_cli::Commands;
use stamp_cli::OutputFormat;
use stamp_cli::StampCli;
use stamp_core::Directive;
use stamp_core::FormatContext;
use stamp_core::FormatOptions;
use stamp_core::Segment;
use stamp_core::StampConfig;
use stamp_core::StampError;
use stamp_core::tokenize;
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Environment variable holding the log filter, e.g. `STAMP_LOG=debug`.
const LOG_ENV_VAR: &str = "STAMP_LOG";

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = StampCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Format { pattern, date }) => run_format(&args, pattern, date.as_deref()),
		Some(Commands::Tokens { pattern, format }) => run_tokens(&args, pattern, *format),
		Some(Commands::Vocabularies) => run_vocabularies(&args),
		None => {
			eprintln!("No subcommand specified. Run `stamp --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Render library errors through miette for help text and error codes.
		match e.downcast::<StampError>() {
			Ok(stamp_err) => {
				let report: miette::Report = (*stamp_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `--verbose` forces `debug`, otherwise `STAMP_LOG` is used
/// and falls back to `warn`.
fn init_tracing(verbose: bool, use_color: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.init();
}

fn resolve_root(args: &StampCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Build the context from `stamp.toml` (when present) and apply the global
/// flags on top.
fn load_context(args: &StampCli) -> Result<FormatContext, StampError> {
	let root = resolve_root(args);
	let mut context = match StampConfig::load(&root)? {
		Some(config) => FormatContext::from_config(&config)?,
		None => {
			tracing::debug!(root = %root.display(), "no config file found");
			FormatContext::from_env()
		}
	};

	if let Some(vocabulary) = &args.vocabulary {
		context.set_vocabulary(vocabulary)?;
	}

	if let Some(locale) = &args.locale {
		context.set_locale(locale.parse()?);
	}

	if let Some(name) = &args.tz {
		context.set_time_zone(stamp_core::time_zone(name)?);
	}

	Ok(context)
}

/// Interpret `--date`. Zoned values keep their own time zone unless `--tz`
/// was passed; everything else is placed in `time_zone`.
fn resolve_date(
	value: Option<&str>,
	time_zone: &TimeZone,
	convert: bool,
) -> Result<Zoned, StampError> {
	let invalid = |reason: &dyn std::fmt::Display| {
		StampError::InvalidDate(format!("`{}`: {reason}", value.unwrap_or_default()))
	};

	let Some(value) = value.map(str::trim) else {
		return Ok(Timestamp::now().to_zoned(time_zone.clone()));
	};

	if let Ok(seconds) = value.parse::<i64>() {
		return Timestamp::from_second(seconds)
			.map(|timestamp| timestamp.to_zoned(time_zone.clone()))
			.map_err(|e| invalid(&e));
	}

	if let Ok(zoned) = value.parse::<Zoned>() {
		return Ok(if convert {
			zoned.with_time_zone(time_zone.clone())
		} else {
			zoned
		});
	}

	if let Ok(timestamp) = value.parse::<Timestamp>() {
		return Ok(timestamp.to_zoned(time_zone.clone()));
	}

	if let Ok(datetime) = value.parse::<civil::DateTime>() {
		return datetime.to_zoned(time_zone.clone()).map_err(|e| invalid(&e));
	}

	match value.parse::<civil::Date>() {
		Ok(date) => date.to_zoned(time_zone.clone()).map_err(|e| invalid(&e)),
		Err(e) => Err(invalid(&e)),
	}
}

fn run_format(args: &StampCli, pattern: &str, date: Option<&str>) -> CliResult {
	let context = load_context(args)?;
	let date = resolve_date(date, context.time_zone(), args.tz.is_some())?;
	tracing::debug!(%date, pattern, "formatting");

	let text = context.format_zoned(&date, pattern, &FormatOptions::default())?;
	println!("{text}");

	Ok(())
}

fn run_tokens(args: &StampCli, pattern: &str, format: OutputFormat) -> CliResult {
	let context = load_context(args)?;
	let registry = context.registry(&FormatOptions::default())?;
	let segments = tokenize(pattern, &registry)?;

	match format {
		OutputFormat::Json => {
			let entries: Vec<serde_json::Value> = segments
				.iter()
				.map(|segment| {
					let span = segment.span();
					match segment {
						Segment::Literal { text, .. } => {
							serde_json::json!({
								"kind": "literal",
								"text": text,
								"start": span.start,
								"end": span.end,
							})
						}
						Segment::Directive { directive, .. } => {
							serde_json::json!({
								"kind": "directive",
								"directive": directive.token(),
								"start": span.start,
								"end": span.end,
							})
						}
					}
				})
				.collect();
			let output = serde_json::json!({
				"vocabulary": registry.name(),
				"pattern": pattern,
				"segments": entries,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			for segment in &segments {
				let span = segment.span().to_string();
				match segment {
					Segment::Literal { text, .. } => {
						println!("{span:<9} {:<10} {text:?}", "literal");
					}
					Segment::Directive { directive, .. } => {
						let kind = format!("{:<10}", "directive");
						println!("{span:<9} {} {}", colored!(kind, green), directive.token());
					}
				}
			}
		}
	}

	Ok(())
}

fn run_vocabularies(args: &StampCli) -> CliResult {
	let context = load_context(args)?;
	let default = context.registry(&FormatOptions::default())?;

	for registry in context.vocabularies().iter() {
		let marker = if registry.name() == default.name() {
			" (default)"
		} else {
			""
		};
		println!("{}{marker}", colored!(registry.name(), bold));

		if let Some((open, close)) = registry.escape_delimiters() {
			println!("  escape: {open}...{close}");
		}

		if registry.directives().is_empty() {
			println!("  no directives");
		} else {
			let tokens: Vec<&str> = registry.directives().iter().map(Directive::token).collect();
			println!("  {}", tokens.join(" "));
		}
	}

	Ok(())
}

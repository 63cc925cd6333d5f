mod common;

use rstest::rstest;
use stamp_core::AnyEmptyResult;

#[rstest]
#[case::iso_date("YYYY-MM-DD", "2024-03-05T10:00:00Z", "2024-03-05\n")]
#[case::escaped_label("[Year:] YYYY", "2024-03-05T10:00:00Z", "Year: 2024\n")]
#[case::long_form("dddd, MMMM Do YYYY", "2024-03-05T10:00:00Z", "Tuesday, March 5th 2024\n")]
#[case::civil_date("YYYY-MM-DD HH:mm", "2024-03-05", "2024-03-05 00:00\n")]
#[case::unix_seconds("X YYYY", "0", "0 1970\n")]
#[case::negative_unix_seconds("YYYY-MM-DD", "-86400", "1969-12-31\n")]
fn format_prints_rendered_pattern(
	#[case] pattern: &str,
	#[case] date: &str,
	#[case] expected: &str,
) -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("format")
		.arg(pattern)
		.arg(format!("--date={date}"))
		.arg("--tz")
		.arg("UTC")
		.assert()
		.success()
		.stdout(expected.to_string());

	Ok(())
}

#[test]
fn format_keeps_zone_of_zoned_dates() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("format")
		.arg("HH:mm Z")
		.arg("--date")
		.arg("2024-03-05T10:00:00+01:00[+01:00]")
		.assert()
		.success()
		.stdout("10:00 +01:00\n");

	Ok(())
}

#[test]
fn format_converts_zoned_dates_with_tz_flag() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("format")
		.arg("HH:mm Z")
		.arg("--date")
		.arg("2024-03-05T10:00:00+01:00[+01:00]")
		.arg("--tz")
		.arg("UTC")
		.assert()
		.success()
		.stdout("09:00 +00:00\n");

	Ok(())
}

#[test]
fn format_uses_locale_flag() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("--locale")
		.arg("fr_FR.UTF-8")
		.arg("format")
		.arg("dddd D MMMM YYYY")
		.arg("--date")
		.arg("2024-03-05T10:00:00Z")
		.arg("--tz")
		.arg("UTC")
		.assert()
		.success()
		.stdout("mardi 5 mars 2024\n");

	Ok(())
}

#[test]
fn format_accepts_any_cldr_locale() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("--locale")
		.arg("ja_JP.UTF-8")
		.arg("format")
		.arg("MMMM dddd")
		.arg("--date")
		.arg("2024-03-05T10:00:00Z")
		.arg("--tz")
		.arg("UTC")
		.assert()
		.success()
		.stdout("3月 火曜日\n");

	Ok(())
}

#[test]
fn format_with_date_fns_prints_pattern_verbatim() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("format")
		.arg("YYYY-MM-DD [x]")
		.arg("--vocabulary")
		.arg("date-fns")
		.arg("--date")
		.arg("0")
		.assert()
		.success()
		.stdout("YYYY-MM-DD [x]\n");

	Ok(())
}

#[test]
fn format_defaults_to_now() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("format")
		.arg("YYYY")
		.assert()
		.success()
		.stdout(predicates::str::is_match(r"^\d{4}\n$")?);

	Ok(())
}

#[test]
fn unsupported_directive_fails() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("format")
		.arg("[Year] Y")
		.arg("--date")
		.arg("0")
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("stamp::unsupported_directive"))
		.stderr(predicates::str::contains("offset 7"));

	Ok(())
}

#[test]
fn malformed_escape_fails() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("format")
		.arg("YYYY [oops")
		.arg("--date")
		.arg("0")
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("stamp::malformed_escape"))
		.stderr(predicates::str::contains("offset 5"));

	Ok(())
}

#[test]
fn invalid_date_fails() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("format")
		.arg("YYYY")
		.arg("--date")
		.arg("next tuesday")
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("invalid date"));

	Ok(())
}

#[rstest]
#[case::vocabulary("--vocabulary", "strftime", "unknown vocabulary")]
#[case::locale("--locale", "12345", "unknown locale")]
#[case::time_zone("--tz", "Not/AZone", "unknown time zone")]
fn unknown_names_fail(
	#[case] flag: &str,
	#[case] value: &str,
	#[case] expected: &str,
) -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("format")
		.arg("YYYY")
		.arg(flag)
		.arg(value)
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains(expected));

	Ok(())
}

#[test]
fn missing_subcommand_exits_with_usage_hint() -> AnyEmptyResult {
	common::stamp_cmd()
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains("stamp --help"));

	Ok(())
}

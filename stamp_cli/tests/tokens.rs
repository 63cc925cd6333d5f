mod common;

use stamp_core::AnyEmptyResult;

#[test]
fn tokens_text_lists_segments_with_spans() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("tokens")
		.arg("YYYY-MM [at] HH")
		.assert()
		.success()
		.stdout(predicates::str::contains("0..4      directive  YYYY"))
		.stdout(predicates::str::contains("4..5      literal    \"-\""))
		.stdout(predicates::str::contains("7..13     literal    \" at \""))
		.stdout(predicates::str::contains("13..15    directive  HH"));

	Ok(())
}

#[test]
fn tokens_json_is_machine_readable() -> AnyEmptyResult {
	let output = common::stamp_cmd()
		.arg("tokens")
		.arg("Do [of] MMMM")
		.arg("--format")
		.arg("json")
		.output()?;

	assert!(output.status.success());

	let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
	let expected = serde_json::json!({
		"vocabulary": "moment",
		"pattern": "Do [of] MMMM",
		"segments": [
			{ "kind": "directive", "directive": "Do", "start": 0, "end": 2 },
			{ "kind": "literal", "text": " of ", "start": 2, "end": 8 },
			{ "kind": "directive", "directive": "MMMM", "start": 8, "end": 12 },
		],
	});
	assert_eq!(value, expected);

	Ok(())
}

#[test]
fn tokens_accepts_unsupported_directives() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("tokens")
		.arg("zz")
		.assert()
		.success()
		.stdout(predicates::str::contains("directive  zz"));

	Ok(())
}

#[test]
fn tokens_reports_malformed_escape() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("tokens")
		.arg("[open")
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("no closing `]`"));

	Ok(())
}

#[test]
fn vocabularies_lists_builtins() -> AnyEmptyResult {
	common::stamp_cmd()
		.arg("vocabularies")
		.assert()
		.success()
		.stdout(predicates::str::contains("moment (default)"))
		.stdout(predicates::str::contains("escape: [...]"))
		.stdout(predicates::str::contains("M Mo MM MMM MMMM"))
		.stdout(predicates::str::contains("date_fns\n  no directives"));

	Ok(())
}

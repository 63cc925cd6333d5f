mod common;

use stamp_core::AnyEmptyResult;

fn format_epoch(root: &std::path::Path, pattern: &str) -> assert_cmd::assert::Assert {
	common::stamp_cmd()
		.arg("format")
		.arg(pattern)
		.arg("--date")
		.arg("1709632800")
		.arg("--path")
		.arg(root)
		.assert()
}

#[test]
fn resolves_stamp_toml() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("stamp.toml"),
		"vocabulary = \"date_fns\"\ntime_zone = \"UTC\"\n",
	)?;

	format_epoch(tmp.path(), "YYYY").success().stdout("YYYY\n");

	Ok(())
}

#[test]
fn resolves_dot_config_stamp_toml() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join(".config"))?;
	std::fs::write(
		tmp.path().join(".config/stamp.toml"),
		"locale = \"de\"\ntime_zone = \"UTC\"\n",
	)?;

	format_epoch(tmp.path(), "Do MMMM YYYY")
		.success()
		.stdout("5. März 2024\n");

	Ok(())
}

#[test]
fn prefers_stamp_toml_over_other_candidates() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join(".config"))?;
	std::fs::write(tmp.path().join("stamp.toml"), "locale = \"fr\"\ntime_zone = \"UTC\"\n")?;
	std::fs::write(tmp.path().join(".stamp.toml"), "locale = \"de\"\ntime_zone = \"UTC\"\n")?;
	std::fs::write(
		tmp.path().join(".config/stamp.toml"),
		"locale = \"es\"\ntime_zone = \"UTC\"\n",
	)?;

	format_epoch(tmp.path(), "MMMM").success().stdout("mars\n");

	Ok(())
}

#[test]
fn flags_override_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("stamp.toml"),
		"vocabulary = \"date_fns\"\nlocale = \"de\"\ntime_zone = \"UTC\"\n",
	)?;

	common::stamp_cmd()
		.arg("format")
		.arg("MMMM YYYY")
		.arg("--date")
		.arg("1709632800")
		.arg("--path")
		.arg(tmp.path())
		.arg("--vocabulary")
		.arg("moment")
		.arg("--locale")
		.arg("en-GB")
		.assert()
		.success()
		.stdout("March 2024\n");

	Ok(())
}

#[test]
fn invalid_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("stamp.toml"), "pattern = \"YYYY\"\n")?;

	format_epoch(tmp.path(), "YYYY")
		.failure()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn stamp_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("stamp"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("STAMP_LOG");
	cmd.env("LANG", "en_US.UTF-8");
	cmd.env_remove("LC_ALL");
	cmd.env_remove("LC_TIME");
	cmd
}

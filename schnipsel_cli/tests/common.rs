use assert_cmd::Command;
use assert_cmd::cargo::CargoError;

pub fn schnipsel_cmd() -> Result<Command, CargoError> {
	let mut cmd = Command::cargo_bin("schnipsel")?;
	cmd.env("NO_COLOR", "1").env_remove("SCHNIPSEL_LOG");
	Ok(cmd)
}

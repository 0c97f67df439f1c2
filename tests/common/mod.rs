use assert_cmd::Command;

pub fn quoth_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quoth").unwrap();
    cmd.env_remove("QUOTH_ROOT");
    cmd
}

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_snapdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("snapdiff").expect("Failed to find snapdiff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("CLICOLOR_FORCE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run snapdiff");
    String::from_utf8(output.stdout).expect("snapdiff printed invalid UTF-8")
}

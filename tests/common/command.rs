use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub fn run_sfscan_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sfscan").expect("Failed to find sfscan binary");
    cmd.current_dir(dir);
    cmd.args(args);

    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    cmd.args(args);

    cmd
}

#[fixture]
pub fn scan_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn git_scan_dir(scan_dir: TempDir) -> TempDir {
    run_git_command(scan_dir.path(), &["init", "--quiet"])
        .assert()
        .success();
    run_git_command(
        scan_dir.path(),
        &["config", "user.email", "sfscan-tests@example.com"],
    )
    .assert()
    .success();
    run_git_command(scan_dir.path(), &["config", "user.name", "sfscan tests"])
        .assert()
        .success();

    scan_dir
}

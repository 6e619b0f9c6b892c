#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Write a sequence fixture to a temp file, one sequence per line.
pub fn write_sequences(sequences: &[&str]) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), sequences.join("\n")).unwrap();
    file
}

/// Build a graft command pointed at the given input file.
pub fn graft_cmd(input: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("graft").unwrap();
    cmd.arg("-i").arg(input.path());
    cmd
}

/// Run graft and return (exit success, stdout, stderr).
pub fn run_graft(cmd: &mut Command) -> (bool, String, String) {
    let output = cmd.output().unwrap();
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, InputArgs, Report, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn input(path: PathBuf) -> InputArgs {
    InputArgs { path, name: None }
}

pub(super) fn run(command: Command) -> Result<Report, CliError> {
    run_cli(Cli { command })
}

pub(super) fn run_expecting_error(command: Command, panic_msg: &str) -> CliError {
    match run(command) {
        Ok(report) => panic!("{panic_msg}: {report:?}"),
        Err(err) => err,
    }
}

pub(super) fn listing(report: Report) -> String {
    match report {
        Report::Listing(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => panic!("listing is not UTF-8: {err}"),
        },
        other => panic!("expected a listing, got {other:?}"),
    }
}

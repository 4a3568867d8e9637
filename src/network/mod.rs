mod linux;
mod macos;
mod windows;

pub use linux::*;
pub use macos::*;
pub use windows::*;

use crate::{
    command::CommandRunner,
    error::ExtractionError,
    outcome::Outcome,
};
use regex::Regex;

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Strategy {
    Windows(NetshStrategy),
    MacOS(AirportStrategy),
    Linux(LinuxStrategy),
}

/// One way of asking the operating system which network it's on.
#[enum_dispatch(Strategy)]
pub trait SsidStrategy {
    fn name(&self) -> &'static str;
    fn lookup(&self, runner: &dyn CommandRunner) -> Outcome;
}

/// Runs a command that must exit cleanly and returns its stdout.
fn checked_output(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
) -> Result<String, ExtractionError> {
    let output = runner.run(program, args, None)?;
    if !output.success() {
        return Err(ExtractionError::Exit {
            program: program.to_owned(),
            code: output.code,
            stderr: output.stderr.trim().to_owned(),
        });
    }
    Ok(output.stdout)
}

/// The first capture group of `pattern` in `text`, as an outcome.
fn capture_ssid(pattern: &Regex, text: &str) -> Outcome {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| Outcome::from_ssid(m.as_str()))
        .unwrap_or(Outcome::NotFound)
}

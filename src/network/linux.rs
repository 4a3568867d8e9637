use super::{checked_output, SsidStrategy};
use crate::{
    command::{CommandRunner, RunError},
    error::ExtractionError,
    outcome::Outcome,
};
use std::time::Duration;

/// Termux:API connection info, only present inside Termux on Android.
pub const TERMUX_CONNECTION_INFO: &str = "termux-wifi-connectioninfo";
pub const IWGETID: &str = "iwgetid";

/// termux-api round-trips through an Android service and can hang when the
/// companion app isn't installed.
pub const CONNECTION_INFO_TIMEOUT: Duration = Duration::from_secs(10);

/// What Android reports instead of a name when it won't reveal the SSID.
const UNKNOWN_SSID: &str = "<unknown ssid>";

#[derive(Debug, Deserialize)]
struct ConnectionInfo {
    ssid: Option<String>,
    supplicant_state: Option<String>,
}

/// Result of the preferred path: either final, or "try iwgetid instead".
#[derive(Debug)]
enum Preferred {
    Done(Outcome),
    FallBack,
}

/// Asks Termux:API first and falls back to `iwgetid -r`.
#[derive(Debug, Clone)]
pub struct LinuxStrategy {
    pub timeout: Duration,
}

impl Default for LinuxStrategy {
    fn default() -> Self {
        Self {
            timeout: CONNECTION_INFO_TIMEOUT,
        }
    }
}

impl SsidStrategy for LinuxStrategy {
    fn name(&self) -> &'static str {
        TERMUX_CONNECTION_INFO
    }

    fn lookup(&self, runner: &dyn CommandRunner) -> Outcome {
        match self.connection_info(runner) {
            Preferred::Done(outcome) => outcome,
            Preferred::FallBack => {
                debug!("Falling back to {}", IWGETID);
                iwgetid(runner)
            }
        }
    }
}

impl LinuxStrategy {
    fn connection_info(&self, runner: &dyn CommandRunner) -> Preferred {
        let output = match runner.run(TERMUX_CONNECTION_INFO, &[], Some(self.timeout)) {
            Ok(output) => output,
            Err(e @ RunError::NotFound { .. }) => {
                warn!("{}, is termux-api installed?", e);
                return Preferred::FallBack;
            }
            Err(e) => {
                warn!("{}", e);
                return Preferred::FallBack;
            }
        };

        if !output.success() {
            debug!(
                "{} exited with {:?}: {}",
                TERMUX_CONNECTION_INFO,
                output.code,
                output.stderr.trim()
            );
            return Preferred::FallBack;
        }

        if output.stdout.trim().is_empty() {
            // usually the location permission hasn't been granted to Termux:API
            debug!(
                "{} printed nothing, check Termux:API permissions",
                TERMUX_CONNECTION_INFO
            );
            return Preferred::FallBack;
        }

        Preferred::Done(parse_connection_info(&output.stdout))
    }
}

/// Parses `termux-wifi-connectioninfo` JSON. Malformed output is a hard
/// failure rather than a reason to try another tool.
pub fn parse_connection_info(stdout: &str) -> Outcome {
    let info: ConnectionInfo = match serde_json::from_str(stdout) {
        Ok(info) => info,
        Err(source) => {
            debug!("Raw {} output:\n{}", TERMUX_CONNECTION_INFO, stdout);
            return ExtractionError::MalformedJson {
                program: TERMUX_CONNECTION_INFO.to_owned(),
                raw: stdout.to_owned(),
                source,
            }
            .into();
        }
    };

    match info.ssid.as_deref().map(str::trim) {
        None | Some(UNKNOWN_SSID) => {
            debug!("No SSID reported, supplicant state {:?}", info.supplicant_state);
            Outcome::NotFound
        }
        Some(ssid) => Outcome::from_ssid(ssid),
    }
}

fn iwgetid(runner: &dyn CommandRunner) -> Outcome {
    match checked_output(runner, IWGETID, &["-r"]) {
        Ok(stdout) => Outcome::from_ssid(&stdout),
        Err(e) => e.into(),
    }
}

use super::{capture_ssid, checked_output, SsidStrategy};
use crate::{command::CommandRunner, outcome::Outcome};
use regex::Regex;

pub const NETSH: &str = "netsh";

lazy_static! {
    // anchored so the "BSSID" line never matches
    static ref SSID_MATCH: Regex = Regex::new(r"(?m)^[ \t]*SSID[ \t]*:[ \t]*(.*?)\r?$").unwrap();
}

/// `netsh wlan show interfaces`
#[derive(Debug, Clone, Copy, Default)]
pub struct NetshStrategy;

impl SsidStrategy for NetshStrategy {
    fn name(&self) -> &'static str {
        NETSH
    }

    fn lookup(&self, runner: &dyn CommandRunner) -> Outcome {
        match checked_output(runner, NETSH, &["wlan", "show", "interfaces"]) {
            Ok(output) => parse_netsh(&output),
            Err(e) => e.into(),
        }
    }
}

pub fn parse_netsh(output: &str) -> Outcome {
    capture_ssid(&SSID_MATCH, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        command::{
            testing::{Reply, ScriptedRunner},
            RunError,
        },
        error::ExtractionError,
    };

    const CONNECTED: &str = "\r\n\
There is 1 interface on the system: \r\n\
\r\n\
    Name                   : Wi-Fi\r\n\
    Description            : Intel(R) Wi-Fi 6 AX201 160MHz\r\n\
    GUID                   : 5c1e2a9f-31b8-4e0e-9a5c-2f0f6d2f1a11\r\n\
    Physical address       : a4:b1:c1:00:11:22\r\n\
    State                  : connected\r\n\
    SSID                   : Office Guest  \r\n\
    BSSID                  : 00:11:22:33:44:55\r\n\
    Network type           : Infrastructure\r\n\
    Radio type             : 802.11ax\r\n\
    Authentication         : WPA2-Personal\r\n\
    Signal                 : 92%\r\n\
\r\n\
    Hosted network status  : Not available\r\n";

    const DISCONNECTED: &str = "\r\n\
There is 1 interface on the system: \r\n\
\r\n\
    Name                   : Wi-Fi\r\n\
    Description            : Intel(R) Wi-Fi 6 AX201 160MHz\r\n\
    State                  : disconnected\r\n\
    Radio status           : Hardware On\r\n\
                             Software On\r\n";

    #[test]
    fn extracts_trimmed_ssid() {
        assert_eq!(parse_netsh(CONNECTED).ssid(), Some("Office Guest"));
    }

    #[test]
    fn bssid_line_alone_is_not_an_ssid() {
        let output = "    BSSID                  : 00:11:22:33:44:55\r\n";
        assert!(matches!(parse_netsh(output), Outcome::NotFound));
    }

    #[test]
    fn disconnected_is_not_found() {
        assert!(matches!(parse_netsh(DISCONNECTED), Outcome::NotFound));
        assert!(matches!(parse_netsh(""), Outcome::NotFound));
    }

    #[test]
    fn lookup_runs_netsh() {
        let runner = ScriptedRunner::new().reply(NETSH, Reply::ok(CONNECTED));
        let outcome = NetshStrategy.lookup(&runner);
        assert_eq!(outcome.ssid(), Some("Office Guest"));
        assert_eq!(runner.calls(), [NETSH]);
    }

    #[test]
    fn nonzero_exit_fails() {
        let runner = ScriptedRunner::new().reply(
            NETSH,
            Reply::fail(1, "The Wireless AutoConfig Service (wlansvc) is not running."),
        );
        match NetshStrategy.lookup(&runner) {
            Outcome::Failed(ExtractionError::Exit { code, stderr, .. }) => {
                assert_eq!(code, Some(1));
                assert!(stderr.contains("wlansvc"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_netsh_fails() {
        let runner = ScriptedRunner::new();
        assert!(matches!(
            NetshStrategy.lookup(&runner),
            Outcome::Failed(ExtractionError::Run(RunError::NotFound { .. }))
        ));
    }
}

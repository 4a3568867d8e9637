use super::{capture_ssid, checked_output, SsidStrategy};
use crate::{command::CommandRunner, outcome::Outcome};
use regex::Regex;

pub const AIRPORT: &str =
    "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport";

lazy_static! {
    static ref SSID_MATCH: Regex = Regex::new(r"(?m)^[ \t]*SSID:[ \t]*(.*?)\r?$").unwrap();
}

/// `airport -I`
#[derive(Debug, Clone, Copy, Default)]
pub struct AirportStrategy;

impl SsidStrategy for AirportStrategy {
    fn name(&self) -> &'static str {
        "airport"
    }

    fn lookup(&self, runner: &dyn CommandRunner) -> Outcome {
        match checked_output(runner, AIRPORT, &["-I"]) {
            Ok(output) => parse_airport(&output),
            Err(e) => e.into(),
        }
    }
}

pub fn parse_airport(output: &str) -> Outcome {
    capture_ssid(&SSID_MATCH, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        command::testing::{Reply, ScriptedRunner},
        error::ExtractionError,
    };

    // BSSID comes before SSID in real airport output
    const CONNECTED: &str = "     agrCtlRSSI: -52
     agrExtRSSI: 0
    agrCtlNoise: -93
    agrExtNoise: 0
          state: running
        op mode: station
     lastTxRate: 867
        maxRate: 867
lastAssocStatus: 0
    802.11 auth: open
      link auth: wpa2-psk
          BSSID: a0:b1:c2:d3:e4:f5
           SSID:  Blue Bottle Coffee
            MCS: 9
  guardInterval: 800
            NSS: 2
        channel: 149,80
";

    const DISCONNECTED: &str = "AirPort: Off\n";

    #[test]
    fn extracts_trimmed_ssid() {
        assert_eq!(parse_airport(CONNECTED).ssid(), Some("Blue Bottle Coffee"));
    }

    #[test]
    fn missing_ssid_line_is_not_found() {
        assert!(matches!(parse_airport(DISCONNECTED), Outcome::NotFound));
    }

    #[test]
    fn lookup_uses_absolute_path() {
        let runner = ScriptedRunner::new().reply(AIRPORT, Reply::ok(CONNECTED));
        assert_eq!(
            AirportStrategy.lookup(&runner).ssid(),
            Some("Blue Bottle Coffee")
        );
        assert_eq!(runner.calls(), [AIRPORT]);
    }

    #[test]
    fn missing_airport_fails() {
        // removed in macOS 14.4
        let runner = ScriptedRunner::new();
        assert!(matches!(
            AirportStrategy.lookup(&runner),
            Outcome::Failed(ExtractionError::Run(_))
        ));
    }

    #[test]
    fn nonzero_exit_fails() {
        let runner = ScriptedRunner::new().reply(AIRPORT, Reply::fail(1, ""));
        assert!(matches!(
            AirportStrategy.lookup(&runner),
            Outcome::Failed(ExtractionError::Exit { .. })
        ));
    }
}

use crate::{
    command::{CommandRunner, SystemRunner},
    error::SsidError,
    logging::CRITICAL,
    network::SsidStrategy,
    outcome::Outcome,
    platform::Platform,
};

/// Picks the strategy for a platform and turns whatever it reports into a
/// plain `Option`.
pub struct Resolver<R = SystemRunner> {
    platform: Platform,
    runner: R,
}

impl Resolver<SystemRunner> {
    pub fn detect() -> Self {
        Self::new(Platform::detect(), SystemRunner)
    }
}

impl<R: CommandRunner> Resolver<R> {
    pub fn new(platform: Platform, runner: R) -> Self {
        Resolver { platform, runner }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Runs one lookup. Only an unsupported platform is an `Err` here,
    /// extraction failures come back as `Outcome::Failed`.
    pub fn resolve(&self) -> Result<Outcome, SsidError> {
        let strategy = self.platform.strategy()?;
        debug!("Looking up SSID via {}", strategy.name());
        Ok(strategy.lookup(&self.runner))
    }

    /// Logs the result of a lookup and returns the SSID, if any.
    pub fn current_ssid(&self) -> Option<String> {
        match self.resolve().and_then(Outcome::into_ssid) {
            Ok(Some(ssid)) => {
                info!("Connected SSID: {}", ssid);
                Some(ssid)
            }
            Ok(None) => {
                warn!("No SSID found or not connected to a Wi-Fi network.");
                None
            }
            Err(e @ SsidError::UnsupportedPlatform(_)) => {
                error!(target: CRITICAL, "{}", e);
                None
            }
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }
}

/// SSID of the Wi-Fi network this host is connected to.
pub fn get_current_ssid() -> Option<String> {
    Resolver::detect().current_ssid()
}

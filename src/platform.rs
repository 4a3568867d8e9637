use crate::{
    error::SsidError,
    network::{AirportStrategy, LinuxStrategy, NetshStrategy, Strategy},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOS,
    Unsupported(String),
}

impl Platform {
    /// Identifies the host this binary runs on.
    pub fn detect() -> Self {
        debug!("Host: {}", os_info::get());
        Self::from_os_name(std::env::consts::OS)
    }

    /// Accepts both Rust's `std::env::consts::OS` names and the capitalized
    /// names most other runtimes report (`Darwin`, `Windows`, `Linux`).
    pub fn from_os_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "windows" => Platform::Windows,
            // termux reports android
            "linux" | "android" => Platform::Linux,
            "macos" | "darwin" => Platform::MacOS,
            _ => Platform::Unsupported(name.to_owned()),
        }
    }

    pub fn strategy(&self) -> Result<Strategy, SsidError> {
        match self {
            Platform::Windows => Ok(NetshStrategy.into()),
            Platform::Linux => Ok(LinuxStrategy::default().into()),
            Platform::MacOS => Ok(AirportStrategy.into()),
            Platform::Unsupported(name) => Err(SsidError::UnsupportedPlatform(name.clone())),
        }
    }
}

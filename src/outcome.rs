use crate::error::{ExtractionError, SsidError};

/// Result of a single SSID lookup.
#[derive(Debug)]
pub enum Outcome {
    Found(String),
    /// The lookup worked but the host isn't associated with any network.
    NotFound,
    Failed(ExtractionError),
}

impl Outcome {
    /// Wraps a raw SSID, treating a blank name as "not connected".
    pub fn from_ssid(ssid: &str) -> Self {
        match ssid.trim() {
            "" => Outcome::NotFound,
            ssid => Outcome::Found(ssid.to_owned()),
        }
    }

    pub fn ssid(&self) -> Option<&str> {
        match self {
            Outcome::Found(ssid) => Some(ssid),
            _ => None,
        }
    }

    pub fn into_ssid(self) -> Result<Option<String>, SsidError> {
        match self {
            Outcome::Found(ssid) => Ok(Some(ssid)),
            Outcome::NotFound => Ok(None),
            Outcome::Failed(e) => Err(e.into()),
        }
    }
}

impl From<ExtractionError> for Outcome {
    fn from(e: ExtractionError) -> Self {
        Outcome::Failed(e)
    }
}

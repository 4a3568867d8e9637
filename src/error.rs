use crate::command::RunError;

/// Why a platform strategy couldn't tell which network we're on.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("command '{program}' exited with {}: {stderr}", describe_code(.code))]
    Exit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("couldn't parse output of '{program}' as JSON: {source}")]
    MalformedJson {
        program: String,
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SsidError {
    #[error("Operating system '{0}' is not supported.")]
    UnsupportedPlatform(String),
    #[error("Failed to extract SSID: {0}")]
    Extraction(#[from] ExtractionError),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (killed by signal)".to_owned(),
    }
}

#![warn(clippy::print_stdout)]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate log;
#[macro_use]
extern crate enum_dispatch;
#[macro_use]
extern crate lazy_static;

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod outcome;
pub mod platform;
pub mod resolver;

pub use error::{ExtractionError, SsidError};
pub use outcome::Outcome;
pub use platform::Platform;
pub use resolver::{get_current_ssid, Resolver};

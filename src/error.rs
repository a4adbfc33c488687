// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub use crate::domain::error::{ConfigError, MountError};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Config(ConfigError),
    Mount(MountError),
    Io(String),
    Settings(String),
    Image(String),
    Cli(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Mount(e) => write!(f, "Mount Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Settings(e) => write!(f, "Settings Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Cli(e) => write!(f, "Usage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<MountError> for Error {
    fn from(err: MountError) -> Self {
        Error::Mount(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Settings(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Settings(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Cli(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

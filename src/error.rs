// SPDX-License-Identifier: MPL-2.0
use crate::domain::curtain::GeometryError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Curtain layout inputs that leave the opened state unreachable.
    Geometry(GeometryError),
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-io-error",
            Error::Config(_) => "notification-config-load-error",
            Error::Geometry(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Geometry(e) => write!(f, "Geometry Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<GeometryError> for Error {
    fn from(err: GeometryError) -> Self {
        Error::Geometry(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Unified error types for the Catpoint core.
//!
//! The alarm decision operations themselves are infallible: every input is a
//! closed enum and the repository is assumed reliable.  Errors only arise at
//! the edges: building sensors from untrusted names, loading configuration,
//! and id-addressed commands that name a sensor the repository never saw.

use core::fmt;

use crate::sensors::SensorId;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sensor could not be constructed.
    Sensor(SensorError),
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
    /// A command referenced a sensor id the repository does not hold.
    UnknownSensor(SensorId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::UnknownSensor(id) => write!(f, "unknown sensor {id}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The display name does not fit the fixed-capacity name buffer.
    NameTooLong { len: usize, max: usize },
    /// The display name is empty or whitespace only.
    EmptyName,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooLong { len, max } => {
                write!(f, "name is {len} bytes, limit is {max}")
            }
            Self::EmptyName => write!(f, "name is empty"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating [`SecurityConfig`](crate::config::SecurityConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    /// Carries the parser message.
    Malformed(String),
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed: {}", msg),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

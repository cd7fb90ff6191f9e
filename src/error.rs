//! Error types for SandhiIO

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// SandhiIO error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection refused while accepting the sender
    #[error("Connection refused at accept")]
    ConnectionRefused,

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Bind address is not a usable IPv4 socket address
    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),
}

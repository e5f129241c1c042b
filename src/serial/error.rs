//! Serial Link Error Types

use thiserror::Error;

/// Result type for serial operations
pub type Result<T> = std::result::Result<T, SerialError>;

/// Serial link error types
#[derive(Error, Debug)]
pub enum SerialError {
    /// Port enumeration failed
    #[error("Port enumeration failed: {0}")]
    Enumeration(#[source] serialport::Error),

    /// Opening a port failed
    #[error("Failed to open {port}: {source}")]
    Open {
        /// Port that failed to open
        port: String,
        /// Underlying driver error
        #[source]
        source: serialport::Error,
    },

    /// No ports are present on the system
    #[error("No serial ports found")]
    NoPortsFound,

    /// The user declined to pick a port
    #[error("No port selected")]
    NoPortSelected,

    /// A probed port produced no data before the timeout
    #[error("No data received from {0} during probe")]
    ProbeSilent(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

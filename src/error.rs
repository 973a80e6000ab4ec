use std::fmt;

use thiserror::Error;

/// Field of a ship request that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipField {
    Name,
    ServiceDuration,
    Containers,
}

impl fmt::Display for ShipField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShipField::Name => "name",
            ShipField::ServiceDuration => "serviceDuration",
            ShipField::Containers => "containers",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse scenario JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write schedule CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid berth count {berth_count}: at least one berth is required")]
    ConfigurationError { berth_count: i64 },

    #[error("Invalid ship request at position {position} ('{ship}'): field '{field}' {reason}")]
    ValidationError { position: usize, ship: String, field: ShipField, reason: String },

    #[error("Service end of ship '{ship}' is outside the representable time range")]
    TimeOverflow { ship: String },

    #[error("Failed to convert configuration value: {0}")]
    ConversionError(#[from] ConversionError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown berth selection strategy: '{0}'")]
    UnknownSelectionStrategy(String),

    #[error("Unknown sentinel policy: '{0}'")]
    UnknownSentinelPolicy(String),

    #[error("Sentinel policy '{0}' requires a timestamp")]
    MissingSentinelTime(String),
}

pub type Result<T> = std::result::Result<T, Error>;

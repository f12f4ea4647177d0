//! Error types for STAT table building.

use sofia_font_ops::NameIdOverflow;

/// Result type for STAT table building operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a STAT table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The axis definitions are inconsistent.
    #[error("Invalid axis definitions: {0}")]
    InvalidAxes(String),

    /// Font is missing a table required to build STAT.
    #[error("Font is missing required table '{table}'")]
    MissingTable { table: &'static str },

    /// No name ID left for a new axis or value name.
    #[error(transparent)]
    NameIdOverflow(#[from] NameIdOverflow),

    /// Font builder error.
    #[error("Font builder error: {0}")]
    FontBuilder(#[from] write_fonts::BuilderError),

    /// Read error.
    #[error("Font read error: {0}")]
    ReadError(#[from] read_fonts::ReadError),
}

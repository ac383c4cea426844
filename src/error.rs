//! Error types for the Labor Compliance & Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Compliance findings are never errors: validators report violations as
//! ordinary data, and an empty list means "compliant." The variants here
//! cover malformed input and configuration problems only.

use thiserror::Error;

/// The main error type for the Labor Compliance & Cost Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use compliance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was outside its legal range.
    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift, or "unsaved" for new shifts.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A reporting or validation period was empty or inverted.
    #[error("Invalid period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// The organization was not found in the directory collaborator.
    #[error("Organization not found: {org_id}")]
    UnknownOrganization {
        /// The organization identifier that was not found.
        org_id: String,
    },

    /// The employee was not found in the directory collaborator.
    #[error("Employee not found: {user_id}")]
    UnknownEmployee {
        /// The employee identifier that was not found.
        user_id: String,
    },

    /// A report could not be rendered to its export format.
    #[error("Report export failed: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

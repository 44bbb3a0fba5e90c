//! Error types for action-docs.
//!
//! Every failure surfaced to the user is one of the variants below. None of them
//! is retried internally: each one terminates the current operation and bubbles
//! up to the command boundary, which decides how to report it.
//!
//! # Examples
//!
//! ```
//! use action_docs_core::{Error, Result};
//!
//! fn require_license(license: &str) -> Result<()> {
//!     if license.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "license cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_license("").unwrap_err();
//! assert!(err.is_config_error());
//! assert_eq!(err.code(), "CONFIG_ERROR");
//! ```

use thiserror::Error;

/// Main error type for action-docs.
///
/// All crates in the workspace return this type so the CLI can map failures
/// to exit codes in one place.
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced file does not exist.
    #[error("File not found: {resource}")]
    ResourceNotFound {
        /// Path (or description) of the missing resource
        resource: String,
    },

    /// Structured text (YAML) could not be parsed.
    #[error("Failed to parse YAML in {source_name}: {message}")]
    ParseError {
        /// File or input the text came from
        source_name: String,
        /// Parser diagnostic
        message: String,
    },

    /// Well-formed data that breaks a schema rule.
    ///
    /// `field` is the dotted path of the offending value (`root` for the
    /// document itself) and `reason` is either a short friendly message or
    /// the full `path: message` issue listing.
    #[error("Validation failed for '{field}': {reason}")]
    ValidationError {
        /// Dotted path of the field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// The README template could not be compiled or rendered.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
    },

    /// Generator configuration is invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// A path resolved outside the permitted base directory.
    #[error("Path traversal detected: {path}")]
    PathTraversal {
        /// The user-supplied path
        path: String,
    },

    /// Filesystem operation failed for a reason other than a missing file.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being accessed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A remote API call failed (network, auth, or decoding).
    #[error("Remote request failed: {endpoint}")]
    RemoteRequestFailed {
        /// Endpoint that was being called
        endpoint: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Returns a stable machine-readable code for this error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_core::Error;
    ///
    /// let err = Error::PathTraversal { path: "../etc".to_string() };
    /// assert_eq!(err.code(), "PATH_TRAVERSAL");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => "FILE_NOT_FOUND",
            Self::ParseError { .. } => "YAML_PARSE_ERROR",
            Self::ValidationError { .. } => "VALIDATION_ERROR",
            Self::TemplateError { .. } => "TEMPLATE_ERROR",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::PathTraversal { .. } => "PATH_TRAVERSAL",
            Self::Io { .. } => "IO_ERROR",
            Self::RemoteRequestFailed { .. } => "REMOTE_ERROR",
        }
    }

    /// Returns `true` if this is a resource not found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_core::Error;
    ///
    /// let err = Error::ResourceNotFound {
    ///     resource: "action.yaml".to_string(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    /// Returns `true` if this is a parse error.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "name".to_string(),
    ///     reason: "name is required and must be a non-empty string".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "header-level must be 1, 2, or 3".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a path traversal error.
    #[must_use]
    pub const fn is_path_traversal(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Returns `true` if this error came from a remote API call.
    #[must_use]
    pub const fn is_remote_error(&self) -> bool {
        matches!(self, Self::RemoteRequestFailed { .. })
    }

    /// Returns `true` if the error was caused by bad user input
    /// (malformed or invalid documents and configuration).
    #[must_use]
    pub const fn is_user_input_error(&self) -> bool {
        matches!(
            self,
            Self::ParseError { .. } | Self::ValidationError { .. } | Self::ConfigError { .. }
        )
    }
}

/// Result type alias for action-docs operations.
///
/// # Examples
///
/// ```
/// use action_docs_core::{Result, Error};
///
/// fn header_level(value: u8) -> Result<u8> {
///     if !(1..=3).contains(&value) {
///         return Err(Error::ConfigError {
///             message: "header-level must be 1, 2, or 3".to_string(),
///         });
///     }
///     Ok(value)
/// }
///
/// assert!(header_level(2).is_ok());
/// assert!(header_level(4).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

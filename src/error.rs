//! # Error Types
//!
//! Failure taxonomy for handler resolution. Every variant is a synchronous
//! failure returned from [`HandlerResolver::resolve`](crate::HandlerResolver::resolve);
//! nothing is retried internally, since resolution is deterministic over
//! its inputs.

use thiserror::Error;

/// Errors produced while resolving a subscriber type to its handler index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    /// The subscriber type and its entire ancestry declare no usable
    /// handler methods; subscription must not proceed.
    #[error("subscriber {subscriber} and its super types declare no public handler methods")]
    NoHandlersDeclared { subscriber: String },

    /// A marked method does not take exactly one event parameter. Raised
    /// only under strict verification; otherwise the declaration is
    /// skipped.
    #[error("handler method {method} must have exactly 1 parameter but has {param_count}")]
    InvalidHandlerSignature { method: String, param_count: usize },

    /// A marked method is not public, or is static or abstract. Raised
    /// only under strict verification; otherwise the declaration is
    /// skipped.
    #[error("{method} is not a valid handler method: must be public, non-static, and non-abstract")]
    IllegalHandlerDeclaration { method: String },

    /// The inspector could not enumerate a type's methods at all; fatal
    /// for the resolution call.
    #[error("could not inspect handler methods of {subscriber}: {reason}. {remediation}")]
    MethodInspectionFailed {
        subscriber: String,
        reason: String,
        remediation: String,
    },

    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, ResolutionError>;

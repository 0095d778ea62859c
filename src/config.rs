//! # Resolver Configuration
//!
//! Small, serializable configuration for the resolution pass. Registries
//! and the method inspector are constructor parameters on
//! [`HandlerResolver`](crate::HandlerResolver), not configuration, since
//! they are live collaborators rather than settings.

use crate::error::{ResolutionError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Skip precomputed registries entirely and inspect every level.
    pub introspection_only: bool,
    /// Fail resolution on marked methods with bad signatures or
    /// modifiers instead of skipping them.
    pub strict_verification: bool,
    /// Namespace prefixes at which the hierarchy walk stops; parents in
    /// these namespaces are never inspected.
    pub system_namespaces: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            introspection_only: false,
            strict_verification: false,
            system_namespaces: vec![
                "std::".to_string(),
                "core::".to_string(),
                "alloc::".to_string(),
            ],
        }
    }
}

impl ResolverConfig {
    /// Configuration from `HERALD_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(introspection_only) = std::env::var("HERALD_INTROSPECTION_ONLY") {
            config.introspection_only = introspection_only.parse().map_err(|e| {
                ResolutionError::Configuration(format!("Invalid introspection_only: {e}"))
            })?;
        }

        if let Ok(strict) = std::env::var("HERALD_STRICT_VERIFICATION") {
            config.strict_verification = strict.parse().map_err(|e| {
                ResolutionError::Configuration(format!("Invalid strict_verification: {e}"))
            })?;
        }

        if let Ok(namespaces) = std::env::var("HERALD_SYSTEM_NAMESPACES") {
            config.system_namespaces = namespaces
                .split(',')
                .map(str::trim)
                .filter(|prefix| !prefix.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(config)
    }
}

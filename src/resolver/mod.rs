//! # Handler Resolution
//!
//! The resolution pass that turns a subscriber type into its ordered,
//! deduplicated handler index.
//!
//! ## Overview
//!
//! [`HandlerResolver::resolve`] checks the method index cache first; on a
//! miss it checks an [`IndexBuilder`] out of the reuse pool and walks the
//! subscriber's hierarchy from the type itself upward. Each level is
//! served from a precomputed registry entry when one is configured
//! (preferring the previous entry's parent back-reference over a registry
//! scan) and from method inspection otherwise. Accepted declarations pass
//! two-level duplicate detection, so a subclass's handler shadows a
//! superclass's redeclaration while genuinely distinct handlers for the
//! same event type all survive. The finished index is immutable, cached,
//! and shared.
//!
//! Resolution is synchronous and in-memory: no I/O, no suspension points,
//! bounded by the hierarchy depth and the configured system-namespace
//! cutoff.

mod cache;
mod index_builder;
mod pool;

pub use cache::CacheStatsSnapshot;

use crate::config::ResolverConfig;
use crate::declaration::MethodFlags;
use crate::descriptor::HandlerDescriptor;
use crate::error::{ResolutionError, Result};
use crate::inspect::{MethodInspector, MethodListing};
use crate::registry::{RegistryEntry, ResolutionRegistry};
use crate::types::SubscriberType;
use cache::MethodIndexCache;
use index_builder::IndexBuilder;
use pool::BuilderPool;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Point-in-time view of resolver state for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverStats {
    pub cache: CacheStatsSnapshot,
    pub registries: usize,
    pub introspection_only: bool,
    pub strict_verification: bool,
}

/// Resolves subscriber types to their handler indexes.
///
/// One resolver is shared per bus instance; concurrent `resolve` calls are
/// safe. Results are cached per subscriber type until
/// [`clear_caches`](HandlerResolver::clear_caches).
pub struct HandlerResolver {
    config: ResolverConfig,
    registries: Vec<Arc<dyn ResolutionRegistry>>,
    inspector: Arc<dyn MethodInspector>,
    cache: MethodIndexCache,
    pool: BuilderPool,
}

impl HandlerResolver {
    /// Resolver with default configuration and no precomputed registries.
    pub fn new(inspector: Arc<dyn MethodInspector>) -> Self {
        Self::with_config(ResolverConfig::default(), inspector)
    }

    pub fn with_config(config: ResolverConfig, inspector: Arc<dyn MethodInspector>) -> Self {
        Self {
            config,
            registries: Vec::new(),
            inspector,
            cache: MethodIndexCache::new(),
            pool: BuilderPool::new(),
        }
    }

    /// Append a precomputed registry; registries are consulted in the
    /// order they were added.
    pub fn with_registry(mut self, registry: Arc<dyn ResolutionRegistry>) -> Self {
        self.registries.push(registry);
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `subscriber` to its ordered handler index.
    ///
    /// The index lists descriptors in discovery order, subscriber's own
    /// declarations before inherited ones. Fails with
    /// [`ResolutionError::NoHandlersDeclared`] when the whole hierarchy
    /// yields nothing; strict verification failures and inspection
    /// failures propagate per the error taxonomy.
    pub fn resolve(&self, subscriber: SubscriberType) -> Result<Arc<[HandlerDescriptor]>> {
        if let Some(handlers) = self.cache.lookup(subscriber) {
            debug!(
                subscriber = subscriber.name(),
                handlers = handlers.len(),
                "handler index cache hit"
            );
            return Ok(handlers);
        }

        let mut builder = self.pool.acquire();
        builder.init_for(subscriber);
        let walk = if self.config.introspection_only {
            self.walk_with_introspection(&mut builder)
        } else {
            self.walk_with_registries(&mut builder)
        };
        if let Err(error) = walk {
            self.pool.release(builder);
            return Err(error);
        }
        if builder.accumulated.is_empty() {
            self.pool.release(builder);
            return Err(ResolutionError::NoHandlersDeclared {
                subscriber: subscriber.name().to_string(),
            });
        }

        let handlers: Arc<[HandlerDescriptor]> = Arc::from(builder.accumulated.as_slice());
        self.pool.release(builder);
        self.cache.store(subscriber, Arc::clone(&handlers));
        debug!(
            subscriber = subscriber.name(),
            handlers = handlers.len(),
            "resolved handler index"
        );
        Ok(handlers)
    }

    /// Drop every cached handler index; subsequent resolves recompute.
    pub fn clear_caches(&self) {
        self.cache.clear();
        info!("handler index cache cleared");
    }

    pub fn cache_stats(&self) -> CacheStatsSnapshot {
        self.cache.stats()
    }

    pub fn stats(&self) -> ResolverStats {
        ResolverStats {
            cache: self.cache.stats(),
            registries: self.registries.len(),
            introspection_only: self.config.introspection_only,
            strict_verification: self.config.strict_verification,
        }
    }

    fn walk_with_registries(&self, builder: &mut IndexBuilder) -> Result<()> {
        while let Some(current) = builder.current {
            builder.registry_entry = self.registry_entry_for(builder, current);
            if let Some(entry) = builder.registry_entry.clone() {
                debug!(
                    subscriber = current.name(),
                    handlers = entry.handlers.len(),
                    "registry entry served hierarchy level"
                );
                for descriptor in &entry.handlers {
                    if builder.check_add(
                        descriptor.method_name,
                        descriptor.event_type,
                        descriptor.declaring_type,
                    ) {
                        builder.accumulated.push(*descriptor);
                    }
                }
            } else {
                self.inspect_level(builder, current)?;
            }
            builder.advance_to_parent(&self.config.system_namespaces);
        }
        Ok(())
    }

    fn walk_with_introspection(&self, builder: &mut IndexBuilder) -> Result<()> {
        while let Some(current) = builder.current {
            self.inspect_level(builder, current)?;
            builder.advance_to_parent(&self.config.system_namespaces);
        }
        Ok(())
    }

    /// Registry entry for the level `current`, preferring the held entry's
    /// parent back-reference over a scan of the configured registries.
    fn registry_entry_for(
        &self,
        builder: &IndexBuilder,
        current: SubscriberType,
    ) -> Option<Arc<RegistryEntry>> {
        if let Some(held) = &builder.registry_entry {
            if let Some(parent) = &held.parent_entry {
                if parent.subscriber_type == current {
                    return Some(Arc::clone(parent));
                }
            }
        }
        self.registries
            .iter()
            .find_map(|registry| registry.entry(current))
    }

    /// Collect the marked methods `current` declares itself, applying the
    /// verification rules and duplicate detection.
    fn inspect_level(&self, builder: &mut IndexBuilder, current: SubscriberType) -> Result<()> {
        let listing = self.inspector.inspect(current).map_err(|error| {
            let remediation = if self.config.introspection_only {
                "Consider supplying a precomputed resolution registry to avoid runtime inspection."
            } else {
                "Make this type visible to the registry producer so resolution can avoid runtime inspection."
            };
            ResolutionError::MethodInspectionFailed {
                subscriber: current.name().to_string(),
                reason: error.to_string(),
                remediation: remediation.to_string(),
            }
        })?;

        let declarations = match listing {
            MethodListing::Declared(declarations) => declarations,
            MethodListing::FullSurface(declarations) => {
                debug!(
                    subscriber = current.name(),
                    "flattened method surface supplied, truncating hierarchy walk"
                );
                builder.skip_remaining_hierarchy = true;
                declarations
            }
        };

        for declaration in declarations {
            if declaration.flags.qualifies() {
                if declaration.param_count == 1 {
                    if builder.check_add(
                        declaration.method_name,
                        declaration.event_type,
                        declaration.declared_by,
                    ) {
                        builder.accumulated.push(HandlerDescriptor::from(declaration));
                    }
                } else if self.config.strict_verification {
                    return Err(ResolutionError::InvalidHandlerSignature {
                        method: declaration.qualified_name(),
                        param_count: declaration.param_count,
                    });
                } else {
                    warn!(
                        method = %declaration.qualified_name(),
                        param_count = declaration.param_count,
                        "skipping handler declaration with wrong parameter count"
                    );
                }
            } else if !declaration.flags.intersects(MethodFlags::COMPILER_GENERATED) {
                if self.config.strict_verification {
                    return Err(ResolutionError::IllegalHandlerDeclaration {
                        method: declaration.qualified_name(),
                    });
                }
                warn!(
                    method = %declaration.qualified_name(),
                    "skipping handler declaration with disqualifying modifiers"
                );
            }
        }
        Ok(())
    }
}

//! # Method Inspection
//!
//! The capability seam between the resolver and whatever produces raw
//! handler declarations for a type. Two implementations ship with the
//! crate: [`StaticMethodTable`] for build-time generated metadata and
//! [`RuntimeInspector`] for hosts that produce method surfaces at runtime.

use crate::declaration::HandlerDeclaration;
use crate::types::SubscriberType;
use dashmap::DashMap;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Enumerates the marked handler methods of one subscriber type.
///
/// Implementations report only methods that carry the handler marker;
/// verification of modifiers and signatures stays with the resolver. A
/// type the inspector knows nothing about is an empty
/// [`MethodListing::Declared`], not an error; `Err` means the type's
/// methods could not be enumerated at all.
pub trait MethodInspector: Send + Sync {
    fn inspect(&self, subscriber: SubscriberType) -> Result<MethodListing, InspectionError>;
}

/// The scope of one inspection result.
#[derive(Debug, Clone)]
pub enum MethodListing {
    /// Methods the inspected type declares itself.
    Declared(Vec<HandlerDeclaration>),

    /// The full inherited method surface in one step, produced when the
    /// per-level surface is unavailable. Resolving through one of these
    /// truncates the remainder of the hierarchy walk, since ancestors are
    /// already covered.
    FullSurface(Vec<HandlerDeclaration>),
}

/// Inspection failure reported by a [`MethodInspector`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct InspectionError {
    pub reason: String,
}

impl InspectionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Frozen type-to-methods table, the build-time inspection path.
///
/// Populated once during startup, typically from generated registration
/// code, then shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct StaticMethodTable {
    methods: HashMap<SubscriberType, Vec<HandlerDeclaration>>,
}

impl StaticMethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the methods `subscriber` declares itself, replacing any
    /// previous entry for that type.
    pub fn register(&mut self, subscriber: SubscriberType, methods: Vec<HandlerDeclaration>) {
        self.methods.insert(subscriber, methods);
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl MethodInspector for StaticMethodTable {
    fn inspect(&self, subscriber: SubscriberType) -> Result<MethodListing, InspectionError> {
        Ok(MethodListing::Declared(
            self.methods.get(&subscriber).cloned().unwrap_or_default(),
        ))
    }
}

/// Concurrently registrable surface store, the runtime inspection path.
///
/// Hosts register each type's declared methods as the types become known.
/// When a type's own declarations cannot be produced level by level (the
/// metadata for some ancestor is unloadable), hosts register the flattened
/// inherited surface instead.
#[derive(Debug, Default)]
pub struct RuntimeInspector {
    surfaces: DashMap<SubscriberType, TypeSurface>,
}

#[derive(Debug, Clone)]
enum TypeSurface {
    Declared(Vec<HandlerDeclaration>),
    Flattened(Vec<HandlerDeclaration>),
}

impl RuntimeInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the methods `subscriber` declares itself.
    pub fn register_declared(&self, subscriber: SubscriberType, methods: Vec<HandlerDeclaration>) {
        debug!(
            subscriber = subscriber.name(),
            methods = methods.len(),
            "registered declared method surface"
        );
        self.surfaces
            .insert(subscriber, TypeSurface::Declared(methods));
    }

    /// Register the full inherited method surface of `subscriber` in one
    /// step; resolving through it skips the rest of the hierarchy.
    pub fn register_flattened(&self, subscriber: SubscriberType, methods: Vec<HandlerDeclaration>) {
        debug!(
            subscriber = subscriber.name(),
            methods = methods.len(),
            "registered flattened method surface"
        );
        self.surfaces
            .insert(subscriber, TypeSurface::Flattened(methods));
    }

    /// Drop every registered surface.
    pub fn clear(&self) {
        self.surfaces.clear();
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl MethodInspector for RuntimeInspector {
    fn inspect(&self, subscriber: SubscriberType) -> Result<MethodListing, InspectionError> {
        let surface = self
            .surfaces
            .get(&subscriber)
            .map(|entry| entry.value().clone());
        match surface {
            Some(TypeSurface::Declared(methods)) => Ok(MethodListing::Declared(methods)),
            Some(TypeSurface::Flattened(methods)) => Ok(MethodListing::FullSurface(methods)),
            None => Ok(MethodListing::Declared(Vec::new())),
        }
    }
}

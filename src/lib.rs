#![allow(clippy::doc_markdown)] // Allow technical terms in docs without backticks
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Herald Core
//!
//! Handler discovery and dispatch routing core for the Herald in-process
//! event bus.
//!
//! ## Overview
//!
//! Given a subscriber type, `herald-core` resolves the ordered,
//! deduplicated list of handler descriptors declared across the type's
//! hierarchy, caches the result, and attaches the execution mode the
//! dispatcher must honor when delivering events. Discovery runs against
//! precomputed resolution registries (build-time metadata) where
//! available and falls back to method inspection per hierarchy level.
//!
//! The bus façade, the per-mode delivery queues and the sticky-event
//! store are external collaborators: this crate hands them descriptors
//! and a mode contract, it never invokes handlers itself.
//!
//! ## Key Features
//!
//! - **Hierarchy-aware resolution**: subclass declarations shadow
//!   superclass redeclarations; distinct handlers for one event type all
//!   survive
//! - **Two discovery paths**: precomputed registries with parent
//!   back-references, or runtime method inspection with a flattened-surface
//!   fallback
//! - **Concurrent caching**: lock-free readers over immutable handler
//!   indexes, with hit/miss accounting
//! - **Bounded working state**: resolution passes reuse pooled builders
//!   instead of reallocating
//! - **Five execution modes**: the dispatcher contract from synchronous
//!   delivery to unordered pool handoff
//!
//! ## Module Organization
//!
//! - [`types`] - Subscriber and event type identities
//! - [`mode`] - Execution-mode contract for dispatchers
//! - [`declaration`] - Raw marked-method records and modifier flags
//! - [`descriptor`] - Immutable resolved handler descriptors
//! - [`inspect`] - Method inspection seam and shipped inspectors
//! - [`registry`] - Precomputed resolution registries
//! - [`resolver`] - The resolution pass, cache and builder pool
//! - [`config`] - Resolver configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Console logging bootstrap
//!
//! ## Quick Start
//!
//! ```rust
//! use std::any::Any;
//! use std::sync::Arc;
//! use herald_core::{
//!     EventType, EventTypeNode, ExecutionMode, HandlerDeclaration, HandlerResolver,
//!     RuntimeInspector, SubscriberType, TypeNode,
//! };
//!
//! static ORDER_PLACED: EventTypeNode = EventTypeNode::new("shop::OrderPlaced");
//! static ORDER_LISTENER: TypeNode = TypeNode::root("shop::OrderListener");
//!
//! fn on_order_placed(_subscriber: &dyn Any, _event: &dyn Any) {}
//!
//! # fn main() -> Result<(), herald_core::ResolutionError> {
//! let listener = SubscriberType::of(&ORDER_LISTENER);
//! let inspector = Arc::new(RuntimeInspector::new());
//! inspector.register_declared(
//!     listener,
//!     vec![HandlerDeclaration::new(
//!         listener,
//!         "on_order_placed",
//!         EventType::of(&ORDER_PLACED),
//!         on_order_placed,
//!     )],
//! );
//!
//! let resolver = HandlerResolver::new(inspector);
//! let handlers = resolver.resolve(listener)?;
//! assert_eq!(handlers.len(), 1);
//! assert_eq!(handlers[0].method_name, "on_order_placed");
//! assert_eq!(handlers[0].mode, ExecutionMode::Direct);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod declaration;
pub mod descriptor;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod mode;
pub mod registry;
pub mod resolver;
pub mod types;

pub use config::ResolverConfig;
pub use declaration::{HandlerDeclaration, HandlerFn, MethodFlags};
pub use descriptor::HandlerDescriptor;
pub use error::{ResolutionError, Result};
pub use inspect::{
    InspectionError, MethodInspector, MethodListing, RuntimeInspector, StaticMethodTable,
};
pub use mode::ExecutionMode;
pub use registry::{RegistryEntry, ResolutionRegistry, StaticRegistry};
pub use resolver::{CacheStatsSnapshot, HandlerResolver, ResolverStats};
pub use types::{EventType, EventTypeNode, SubscriberType, TypeNode};

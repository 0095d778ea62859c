use herald_core::{
    EventType, EventTypeNode, ExecutionMode, HandlerDeclaration, SubscriberType, TypeNode,
};
use proptest::prelude::*;
use std::any::Any;
use std::collections::HashSet;

/// Event nodes shared by every generated hierarchy.
pub static EVENT_POOL: [EventTypeNode; 4] = [
    EventTypeNode::new("events::Alpha"),
    EventTypeNode::new("events::Beta"),
    EventTypeNode::new("events::Gamma"),
    EventTypeNode::new("events::Delta"),
];

/// Method names shared by every generated hierarchy. Reusing a small pool
/// across levels is what produces override collisions worth testing.
pub const METHOD_POOL: [&str; 4] = ["on_alpha", "on_beta", "on_gamma", "on_delta"];

fn noop(_subscriber: &dyn Any, _event: &dyn Any) {}

/// One generated handler declaration, as pool indices plus dispatch attributes.
#[derive(Debug, Clone)]
pub struct DeclarationSpec {
    pub method: usize,
    pub event: usize,
    pub mode: ExecutionMode,
    pub priority: i32,
}

/// Strategy for generating execution modes
pub fn mode_strategy() -> impl Strategy<Value = ExecutionMode> {
    prop_oneof![
        Just(ExecutionMode::Direct),
        Just(ExecutionMode::PrimaryImmediate),
        Just(ExecutionMode::PrimaryOrdered),
        Just(ExecutionMode::BackgroundSequential),
        Just(ExecutionMode::AsyncPool),
    ]
}

/// Strategy for generating a single handler declaration spec
pub fn declaration_spec_strategy() -> impl Strategy<Value = DeclarationSpec> {
    (
        0..METHOD_POOL.len(),
        0..EVENT_POOL.len(),
        mode_strategy(),
        -10i32..10,
    )
        .prop_map(|(method, event, mode, priority)| DeclarationSpec {
            method,
            event,
            mode,
            priority,
        })
}

/// Strategy for the declarations of one type, with unique (method, event)
/// pairs. A single type cannot declare the same method twice, so duplicates
/// within a level would not be well-formed input.
pub fn level_strategy() -> impl Strategy<Value = Vec<DeclarationSpec>> {
    prop::collection::vec(declaration_spec_strategy(), 0..5).prop_map(dedup_level)
}

/// Strategy for a whole hierarchy: root level first, leaf level last.
pub fn hierarchy_strategy() -> impl Strategy<Value = Vec<Vec<DeclarationSpec>>> {
    prop::collection::vec(level_strategy(), 1..4)
}

/// Strategy for a non-empty single-level declaration set
pub fn single_level_strategy() -> impl Strategy<Value = Vec<DeclarationSpec>> {
    prop::collection::vec(declaration_spec_strategy(), 1..8).prop_map(dedup_level)
}

pub fn dedup_level(mut specs: Vec<DeclarationSpec>) -> Vec<DeclarationSpec> {
    let mut seen = HashSet::new();
    specs.retain(|spec| seen.insert((spec.method, spec.event)));
    specs
}

/// Materialize a leaked type chain of the given depth, root first. Nodes are
/// leaked so the resulting handles carry the 'static lifetime the resolver
/// expects; the per-case allocation is a few dozen bytes.
pub fn materialize_chain(levels: usize) -> Vec<SubscriberType> {
    let mut parent: Option<&'static TypeNode> = None;
    let mut chain = Vec::with_capacity(levels);
    for depth in 0..levels {
        let name: &'static str = Box::leak(format!("generated::Level{depth}").into_boxed_str());
        let node: &'static TypeNode = match parent {
            None => Box::leak(Box::new(TypeNode::root(name))),
            Some(parent) => Box::leak(Box::new(TypeNode::child(name, parent))),
        };
        parent = Some(node);
        chain.push(SubscriberType::of(node));
    }
    chain
}

/// Turn a generated spec into a concrete declaration on the given type.
pub fn declaration_for(spec: &DeclarationSpec, declared_by: SubscriberType) -> HandlerDeclaration {
    HandlerDeclaration::new(
        declared_by,
        METHOD_POOL[spec.method],
        EventType::of(&EVENT_POOL[spec.event]),
        noop,
    )
    .with_mode(spec.mode)
    .with_priority(spec.priority)
}

/// Map a resolved descriptor's event back to its pool index.
pub fn event_index(event_type: EventType) -> usize {
    (0..EVENT_POOL.len())
        .find(|index| EventType::of(&EVENT_POOL[*index]) == event_type)
        .expect("event outside the generated pool")
}

/// Map a resolved descriptor's method name back to its pool index.
pub fn method_index(method_name: &str) -> usize {
    METHOD_POOL
        .iter()
        .position(|name| *name == method_name)
        .expect("method outside the generated pool")
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_level_strategy_keeps_pairs_unique(level in level_strategy()) {
            let mut seen = HashSet::new();
            for spec in &level {
                prop_assert!(seen.insert((spec.method, spec.event)));
            }
        }

        #[test]
        fn test_hierarchy_strategy_bounds(levels in hierarchy_strategy()) {
            prop_assert!(!levels.is_empty());
            prop_assert!(levels.len() <= 3);
            for level in &levels {
                prop_assert!(level.len() <= 4);
            }
        }
    }

    #[test]
    fn test_materialized_chain_links_parents() {
        let chain = materialize_chain(3);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].parent(), None);
        assert_eq!(chain[1].parent(), Some(chain[0]));
        assert_eq!(chain[2].parent(), Some(chain[1]));
        assert!(chain[0].is_assignable_from(chain[2]));
        assert!(!chain[2].is_assignable_from(chain[0]));
    }
}

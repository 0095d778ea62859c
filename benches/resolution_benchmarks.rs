use criterion::{black_box, criterion_group, criterion_main, Criterion};
use herald_core::{
    EventType, EventTypeNode, HandlerDeclaration, HandlerDescriptor, HandlerResolver,
    RegistryEntry, RuntimeInspector, StaticRegistry, SubscriberType, TypeNode,
};
use std::any::Any;
use std::sync::Arc;

static PING: EventTypeNode = EventTypeNode::new("bench::Ping");
static PONG: EventTypeNode = EventTypeNode::new("bench::Pong");
static BASE: TypeNode = TypeNode::root("bench::Base");
static LEAF: TypeNode = TypeNode::child("bench::Leaf", &BASE);

fn noop(_subscriber: &dyn Any, _event: &dyn Any) {}

fn inspector() -> Arc<RuntimeInspector> {
    let inspector = Arc::new(RuntimeInspector::new());
    let base = SubscriberType::of(&BASE);
    let leaf = SubscriberType::of(&LEAF);
    inspector.register_declared(
        base,
        vec![HandlerDeclaration::new(
            base,
            "on_ping",
            EventType::of(&PING),
            noop,
        )],
    );
    inspector.register_declared(
        leaf,
        vec![
            HandlerDeclaration::new(leaf, "on_ping", EventType::of(&PING), noop),
            HandlerDeclaration::new(leaf, "on_pong", EventType::of(&PONG), noop),
        ],
    );
    inspector
}

fn benchmark_cached_resolution(c: &mut Criterion) {
    let resolver = HandlerResolver::new(inspector());
    let leaf = SubscriberType::of(&LEAF);
    resolver.resolve(leaf).unwrap();

    c.bench_function("cached_resolution", |b| {
        b.iter(|| resolver.resolve(black_box(leaf)).unwrap())
    });
}

fn benchmark_cold_resolution(c: &mut Criterion) {
    let resolver = HandlerResolver::new(inspector());
    let leaf = SubscriberType::of(&LEAF);

    c.bench_function("cold_resolution", |b| {
        b.iter(|| {
            resolver.clear_caches();
            resolver.resolve(black_box(leaf)).unwrap()
        })
    });
}

fn benchmark_registry_resolution(c: &mut Criterion) {
    let base = SubscriberType::of(&BASE);
    let leaf = SubscriberType::of(&LEAF);
    let registry = StaticRegistry::new();
    let base_entry = registry.insert(RegistryEntry::new(
        base,
        vec![HandlerDescriptor::new(
            base,
            "on_ping",
            EventType::of(&PING),
            noop,
        )],
    ));
    registry.insert(
        RegistryEntry::new(
            leaf,
            vec![HandlerDescriptor::new(
                leaf,
                "on_pong",
                EventType::of(&PONG),
                noop,
            )],
        )
        .with_parent(base_entry),
    );

    let resolver =
        HandlerResolver::new(Arc::new(RuntimeInspector::new())).with_registry(Arc::new(registry));

    c.bench_function("registry_resolution", |b| {
        b.iter(|| {
            resolver.clear_caches();
            resolver.resolve(black_box(leaf)).unwrap()
        })
    });
}

fn benchmark_deep_hierarchy_resolution(c: &mut Criterion) {
    let inspector = Arc::new(RuntimeInspector::new());
    let mut parent: Option<&'static TypeNode> = None;
    let mut subscriber = None;
    for depth in 0..8 {
        let name: &'static str = Box::leak(format!("bench::Depth{depth}").into_boxed_str());
        let node: &'static TypeNode = match parent {
            None => Box::leak(Box::new(TypeNode::root(name))),
            Some(parent) => Box::leak(Box::new(TypeNode::child(name, parent))),
        };
        parent = Some(node);
        let level = SubscriberType::of(node);
        let method: &'static str = Box::leak(format!("on_depth{depth}").into_boxed_str());
        inspector.register_declared(
            level,
            vec![HandlerDeclaration::new(
                level,
                method,
                EventType::of(&PING),
                noop,
            )],
        );
        subscriber = Some(level);
    }
    let subscriber = subscriber.unwrap();
    let resolver = HandlerResolver::new(inspector);

    c.bench_function("deep_hierarchy_resolution", |b| {
        b.iter(|| {
            resolver.clear_caches();
            resolver.resolve(black_box(subscriber)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_cached_resolution,
    benchmark_cold_resolution,
    benchmark_registry_resolution,
    benchmark_deep_hierarchy_resolution
);
criterion_main!(benches);

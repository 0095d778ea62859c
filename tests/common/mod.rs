//! Shared fixtures for resolution integration tests.
#![allow(dead_code)]

pub mod strategies;

use herald_core::{
    EventType, EventTypeNode, HandlerDeclaration, HandlerDescriptor, SubscriberType, TypeNode,
};
use std::any::Any;

pub static PING: EventTypeNode = EventTypeNode::new("events::Ping");
pub static PONG: EventTypeNode = EventTypeNode::new("events::Pong");

pub static BASE: TypeNode = TypeNode::root("listeners::Base");
pub static LEAF: TypeNode = TypeNode::child("listeners::Leaf", &BASE);

pub fn ping() -> EventType {
    EventType::of(&PING)
}

pub fn pong() -> EventType {
    EventType::of(&PONG)
}

pub fn base() -> SubscriberType {
    SubscriberType::of(&BASE)
}

pub fn leaf() -> SubscriberType {
    SubscriberType::of(&LEAF)
}

pub fn noop(_subscriber: &dyn Any, _event: &dyn Any) {}

pub fn declaration(
    declared_by: SubscriberType,
    method_name: &'static str,
    event_type: EventType,
) -> HandlerDeclaration {
    HandlerDeclaration::new(declared_by, method_name, event_type, noop)
}

pub fn descriptor(
    declaring_type: SubscriberType,
    method_name: &'static str,
    event_type: EventType,
) -> HandlerDescriptor {
    HandlerDescriptor::new(declaring_type, method_name, event_type, noop)
}

//! Immutable construct-name to schema lookup table.

use crate::schema::Schema;
use std::collections::BTreeMap;

/// Whether a construct is a custom tag or a built-in node override.
///
/// Tags and nodes live in separate namespaces: `heading` the node override
/// and a hypothetical `heading` tag would not collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    /// A custom tag written with tag syntax in the document.
    Tag,
    /// A built-in markdown construct whose rendering is overridden.
    Node,
}

/// Read-only registry mapping construct names to their schemas.
///
/// Built once at startup and never mutated afterwards; lookups are the only
/// operations exposed. Because the registry is immutable, transform
/// invocations are safe to run concurrently across documents.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tags: BTreeMap<String, Schema>,
    nodes: BTreeMap<String, Schema>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom tag schema. Names must be unique per kind.
    pub fn with_tag(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        debug_assert!(!self.tags.contains_key(&name), "duplicate tag `{}`", name);
        self.tags.insert(name, schema);
        self
    }

    /// Registers a built-in node override. Names must be unique per kind.
    pub fn with_node(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        debug_assert!(!self.nodes.contains_key(&name), "duplicate node `{}`", name);
        self.nodes.insert(name, schema);
        self
    }

    /// Looks up a custom tag schema.
    pub fn tag(&self, name: &str) -> Option<&Schema> {
        self.tags.get(name)
    }

    /// Looks up a node override schema.
    pub fn node(&self, name: &str) -> Option<&Schema> {
        self.nodes.get(name)
    }

    /// Looks up a schema by construct kind and name.
    pub fn schema_of(&self, kind: ConstructKind, name: &str) -> Option<&Schema> {
        match kind {
            ConstructKind::Tag => self.tag(name),
            ConstructKind::Node => self.node(name),
        }
    }

    /// Registered tag names, in name order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(|k| k.as_str())
    }

    /// Registered node override names, in name order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|k| k.as_str())
    }
}

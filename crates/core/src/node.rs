//! Parsed node representation and the consumed parser interface.

use crate::error::{NodeLocation, TransformError};
use crate::instruction::RenderChild;
use crate::registry::{ConstructKind, Registry};
use crate::transform::{resolve_attributes, transform_node};
use crate::value::AttributeValue;
use std::collections::BTreeMap;

/// Interface the external parser's nodes expose to transforms.
///
/// A transform only ever reads its own node's data through this trait and
/// returns a new render instruction, so invocations hold no shared state.
pub trait Transformable {
    /// Name of the construct this node was parsed as (e.g., "fence").
    fn schema_name(&self) -> &str;

    /// Whether the node is a custom tag or a built-in node override.
    fn kind(&self) -> ConstructKind;

    /// Resolves the node's attributes through the default resolution rules:
    /// declared defaults applied, `render: false` attributes dropped.
    fn transform_attributes(&self, registry: &Registry) -> BTreeMap<String, AttributeValue>;

    /// Resolves the node's children into render children, transforming any
    /// nested constructs through the registry.
    fn transform_children(&self, registry: &Registry) -> Result<Vec<RenderChild>, TransformError>;

    /// Source location metadata for diagnostics, when available.
    fn location(&self) -> Option<&NodeLocation>;
}

/// A child of a parsed node - literal text or a nested parsed node.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedChild {
    /// Literal text content.
    Text(String),
    /// A nested parsed construct.
    Node(ParsedNode),
}

/// Concrete parsed node produced by the parse adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNode {
    /// Construct name the node was parsed as.
    pub name: String,
    /// Tag or node-override namespace the name lives in.
    pub kind: ConstructKind,
    /// Attributes as supplied in the document, before resolution.
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Body children, in document order.
    pub children: Vec<ParsedChild>,
    /// Source location, when the parser captured one.
    pub location: Option<NodeLocation>,
}

impl ParsedNode {
    /// Creates a custom tag node with no attributes or children.
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ConstructKind::Tag,
            attributes: BTreeMap::new(),
            children: Vec::new(),
            location: None,
        }
    }

    /// Creates a built-in node override with no attributes or children.
    pub fn node(name: impl Into<String>) -> Self {
        Self {
            kind: ConstructKind::Node,
            ..Self::tag(name)
        }
    }

    /// Supplies an attribute value.
    pub fn attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Appends a text child.
    pub fn child_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(ParsedChild::Text(text.into()));
        self
    }

    /// Appends a nested node child.
    pub fn child_node(mut self, node: ParsedNode) -> Self {
        self.children.push(ParsedChild::Node(node));
        self
    }

    /// Attaches source location metadata.
    pub fn at(mut self, location: NodeLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns true if the node has any body children.
    pub fn has_body(&self) -> bool {
        !self.children.is_empty()
    }
}

impl Transformable for ParsedNode {
    fn schema_name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ConstructKind {
        self.kind
    }

    fn transform_attributes(&self, registry: &Registry) -> BTreeMap<String, AttributeValue> {
        match registry.schema_of(self.kind, &self.name) {
            Some(schema) => resolve_attributes(schema, &self.attributes),
            // No schema to resolve against: pass supplied values through.
            None => self.attributes.clone(),
        }
    }

    fn transform_children(&self, registry: &Registry) -> Result<Vec<RenderChild>, TransformError> {
        self.children
            .iter()
            .map(|child| match child {
                ParsedChild::Text(text) => Ok(RenderChild::text(text.clone())),
                ParsedChild::Node(node) => {
                    transform_node(node, registry).map(RenderChild::Instruction)
                }
            })
            .collect()
    }

    fn location(&self) -> Option<&NodeLocation> {
        self.location.as_ref()
    }
}

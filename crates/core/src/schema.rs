//! Schema records describing tags and node overrides.

use crate::error::TransformError;
use crate::instruction::RenderInstruction;
use crate::node::Transformable;
use crate::registry::Registry;
use crate::value::{AttributeType, AttributeValue};
use std::collections::BTreeMap;

/// Signature of a custom transform attached to a schema.
///
/// Takes the parsed node, the active registry, and the schema the transform
/// belongs to (for its render target), and produces a render instruction.
pub type TransformFn =
    fn(&dyn Transformable, &Registry, &Schema) -> Result<RenderInstruction, TransformError>;

/// How a construct is turned into a render instruction.
///
/// Most constructs use the default resolution rules; node overrides like
/// `heading` and `fence` attach a custom function.
#[derive(Debug, Clone, Copy, Default)]
pub enum Transform {
    /// Default resolution: resolved attributes and children, render target
    /// taken from the schema.
    #[default]
    Default,
    /// A custom transform function.
    Custom(TransformFn),
}

/// Declaration of a single schema attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDef {
    /// Expected value type.
    pub ty: AttributeType,
    /// Whether every use of the construct must supply this attribute.
    pub required: bool,
    /// Value used when the attribute is not supplied.
    pub default: Option<AttributeValue>,
    /// Whether the attribute appears in the produced render instruction.
    /// `false` means the value is consumed internally only.
    pub render: bool,
}

impl AttributeDef {
    /// Creates an optional, rendered attribute of the given type.
    pub fn of(ty: AttributeType) -> Self {
        Self {
            ty,
            required: false,
            default: None,
            render: true,
        }
    }

    /// Marks the attribute as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the default value applied when the attribute is missing.
    pub fn default_value(mut self, value: AttributeValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Hides the attribute from the produced render instruction.
    pub fn hidden(mut self) -> Self {
        self.render = false;
        self
    }
}

/// Schema for a custom tag or a built-in node override.
///
/// Declares the render target, the attribute contract the validation
/// boundary enforces, the allowed child node types, self-closing behavior,
/// and the transform used to produce a render instruction. Any node name
/// can carry a custom transform; `heading` and `fence` are the two the
/// blog configuration overrides.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Render target name handed to the component-rendering layer.
    pub render: String,
    /// Declared attributes keyed by name.
    pub attributes: BTreeMap<String, AttributeDef>,
    /// Allowed child node types (empty means no body content expected).
    pub children: Vec<String>,
    /// Whether the construct may omit a body entirely.
    pub self_closing: bool,
    /// Transform used to produce the render instruction.
    pub transform: Transform,
}

impl Schema {
    /// Creates a schema with the given render target and no attributes.
    pub fn new(render: impl Into<String>) -> Self {
        Self {
            render: render.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            self_closing: false,
            transform: Transform::Default,
        }
    }

    /// Declares an attribute.
    pub fn attribute(mut self, name: impl Into<String>, def: AttributeDef) -> Self {
        self.attributes.insert(name.into(), def);
        self
    }

    /// Sets the allowed child node types.
    pub fn children(mut self, children: Vec<String>) -> Self {
        self.children = children;
        self
    }

    /// Marks the construct as self-closing.
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    /// Attaches a custom transform.
    pub fn transform(mut self, transform: TransformFn) -> Self {
        self.transform = Transform::Custom(transform);
        self
    }

    /// Looks up a declared attribute by name.
    pub fn attr(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.get(name)
    }

    /// Names of all `required` attributes, in name order.
    pub fn required_attributes(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|(_, def)| def.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Returns true if this schema attaches a custom transform.
    pub fn has_custom_transform(&self) -> bool {
        matches!(self.transform, Transform::Custom(_))
    }
}

/// Allowed children of the document root, mirroring the framework's
/// built-in `document` node. Container tags like `details` inherit this.
pub fn document_children() -> Vec<String> {
    [
        "heading",
        "paragraph",
        "image",
        "table",
        "tag",
        "fence",
        "blockquote",
        "list",
        "hr",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Allowed children of inline formatting nodes, mirroring the framework's
/// built-in `strong` node. Inline wrapper tags like `sup` inherit this.
pub fn inline_children() -> Vec<String> {
    ["strong", "em", "s", "link", "code", "text", "tag"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

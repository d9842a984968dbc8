//! Render instruction output model.

use crate::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A child of a render instruction - literal text or a nested instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderChild {
    /// Literal text content.
    Text {
        /// The text content.
        value: String,
    },
    /// A nested render instruction.
    Instruction(RenderInstruction),
}

impl RenderChild {
    /// Creates a text child.
    pub fn text(value: impl Into<String>) -> Self {
        RenderChild::Text {
            value: value.into(),
        }
    }

    /// Returns true if this child is literal text.
    pub fn is_text(&self) -> bool {
        matches!(self, RenderChild::Text { .. })
    }

    /// Returns the text content, if this child is literal text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderChild::Text { value } => Some(value),
            RenderChild::Instruction(_) => None,
        }
    }
}

/// A renderable instruction handed to the component-rendering layer.
///
/// Each instruction names a render target (an HTML element or an Astro
/// component), carries a resolved attribute map, and an ordered list of
/// children. The template layer maps the render target names one-to-one
/// onto concrete components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInstruction {
    /// Render target name (e.g., "CodeBlock", "details").
    pub render: String,
    /// Resolved attribute values keyed by attribute name.
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Ordered children for the target's default slot.
    pub children: Vec<RenderChild>,
}

impl RenderInstruction {
    /// Creates an instruction with no attributes and no children.
    pub fn new(render: impl Into<String>) -> Self {
        Self {
            render: render.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Looks up a resolved attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

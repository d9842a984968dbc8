#![deny(missing_docs)]
//! marktag core: schema registry, attribute resolution, and node transforms.

/// Location-carrying error and diagnostic types.
pub mod error;
/// Render instruction output model.
pub mod instruction;
/// Parsed node representation and the parser-facing trait.
pub mod node;
/// Parse adapter over markdown-rs.
pub mod parse;
/// Construct-name to schema lookup table.
pub mod registry;
/// Schema records for tags and node overrides.
pub mod schema;
/// Transform dispatch and default resolution rules.
pub mod transform;
/// Schema-driven validation boundary.
pub mod validate;
/// Attribute value and type definitions.
pub mod value;

pub use error::{NodeLocation, TransformError, ValidationError};
pub use instruction::{RenderChild, RenderInstruction};
pub use node::{ParsedChild, ParsedNode, Transformable};
pub use parse::{ParseError, parse_overrides};
pub use registry::{ConstructKind, Registry};
pub use schema::{
    AttributeDef, Schema, Transform, TransformFn, document_children, inline_children,
};
pub use transform::{default_transform, resolve_attributes, transform_node};
pub use validate::{validate_attributes, validate_body, validate_node};
pub use value::{AttributeType, AttributeValue};

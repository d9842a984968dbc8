//! Transform dispatch and default resolution rules.

use crate::error::TransformError;
use crate::instruction::RenderInstruction;
use crate::node::Transformable;
use crate::registry::Registry;
use crate::schema::{Schema, Transform};
use crate::value::AttributeValue;
use std::collections::BTreeMap;

/// Transforms a parsed node into a render instruction.
///
/// Looks up the node's schema and dispatches to its custom transform when
/// one is attached, otherwise applies [`default_transform`]. A node with no
/// registered schema passes through with its own name as the render target,
/// matching the framework's behavior for unconfigured built-ins.
pub fn transform_node(
    node: &dyn Transformable,
    registry: &Registry,
) -> Result<RenderInstruction, TransformError> {
    match registry.schema_of(node.kind(), node.schema_name()) {
        Some(schema) => match schema.transform {
            Transform::Custom(transform) => {
                log::debug!("custom transform for `{}`", node.schema_name());
                transform(node, registry, schema)
            }
            Transform::Default => default_transform(node, registry, schema),
        },
        None => {
            log::warn!(
                "no schema registered for `{}`, passing through",
                node.schema_name()
            );
            Ok(RenderInstruction {
                render: node.schema_name().to_string(),
                attributes: node.transform_attributes(registry),
                children: node.transform_children(registry)?,
            })
        }
    }
}

/// Default resolution: resolved attributes, resolved children, render target
/// from the schema. Pure and idempotent.
pub fn default_transform(
    node: &dyn Transformable,
    registry: &Registry,
    schema: &Schema,
) -> Result<RenderInstruction, TransformError> {
    Ok(RenderInstruction {
        render: schema.render.clone(),
        attributes: node.transform_attributes(registry),
        children: node.transform_children(registry)?,
    })
}

/// Resolves supplied attributes against a schema's declarations.
///
/// Declared attributes take the supplied value or fall back to the declared
/// default; `render: false` attributes are dropped from the result. Supplied
/// attributes the schema does not declare are dropped too - the validation
/// boundary rejects those before transforms run.
pub fn resolve_attributes(
    schema: &Schema,
    supplied: &BTreeMap<String, AttributeValue>,
) -> BTreeMap<String, AttributeValue> {
    let mut resolved = BTreeMap::new();
    for (name, def) in &schema.attributes {
        if !def.render {
            continue;
        }
        if let Some(value) = supplied.get(name).cloned().or_else(|| def.default.clone()) {
            resolved.insert(name.clone(), value);
        }
    }
    resolved
}

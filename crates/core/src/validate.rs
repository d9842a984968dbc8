//! Schema-driven validation of parsed nodes.
//!
//! These are the checks the framework runs against the registry's
//! declarations before any transform is invoked: required attributes,
//! attribute types, unknown attributes, and bodies on self-closing tags.

use crate::error::ValidationError;
use crate::node::{ParsedChild, ParsedNode};
use crate::registry::Registry;
use crate::schema::Schema;
use crate::value::AttributeValue;
use std::collections::BTreeMap;

/// Validates supplied attributes against a schema's declarations.
///
/// A `required` attribute must be supplied unless a default exists; every
/// supplied value must match its declared type; attributes the schema does
/// not declare are rejected.
pub fn validate_attributes(
    schema: &Schema,
    construct: &str,
    supplied: &BTreeMap<String, AttributeValue>,
) -> Result<(), ValidationError> {
    for (name, def) in &schema.attributes {
        match supplied.get(name) {
            Some(value) => {
                if value.type_of() != def.ty {
                    return Err(ValidationError::TypeMismatch {
                        construct: construct.to_string(),
                        name: name.clone(),
                        expected: def.ty,
                        actual: value.type_of(),
                    });
                }
            }
            None => {
                if def.required && def.default.is_none() {
                    return Err(ValidationError::MissingRequired {
                        construct: construct.to_string(),
                        name: name.clone(),
                    });
                }
            }
        }
    }

    for name in supplied.keys() {
        if !schema.attributes.contains_key(name) {
            return Err(ValidationError::UnknownAttribute {
                construct: construct.to_string(),
                name: name.clone(),
            });
        }
    }

    Ok(())
}

/// Rejects body content on self-closing constructs.
pub fn validate_body(
    schema: &Schema,
    construct: &str,
    has_body: bool,
) -> Result<(), ValidationError> {
    if schema.self_closing && has_body {
        return Err(ValidationError::UnexpectedBody {
            construct: construct.to_string(),
        });
    }
    Ok(())
}

/// Validates a parsed node and its nested children against the registry.
///
/// Text children are always valid; nested nodes are validated recursively.
/// The first violation is returned.
pub fn validate_node(node: &ParsedNode, registry: &Registry) -> Result<(), ValidationError> {
    let schema = registry.schema_of(node.kind, &node.name).ok_or_else(|| {
        ValidationError::UnknownConstruct {
            construct: node.name.clone(),
        }
    })?;

    validate_attributes(schema, &node.name, &node.attributes)?;
    validate_body(schema, &node.name, node.has_body())?;

    for child in &node.children {
        if let ParsedChild::Node(nested) = child {
            validate_node(nested, registry)?;
        }
    }

    Ok(())
}

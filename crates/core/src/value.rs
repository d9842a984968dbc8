//! Attribute value and type definitions.

use serde::{Deserialize, Serialize};

/// Declared type of a schema attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    /// String-valued attribute.
    String,
    /// Numeric attribute.
    Number,
    /// Boolean attribute.
    Boolean,
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Boolean => "boolean",
        };
        write!(f, "{}", name)
    }
}

/// An attribute value - a string, number, or boolean literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AttributeValue {
    /// A string literal (from key="value").
    String {
        /// The string content.
        value: String,
    },
    /// A numeric literal (from key=3).
    Number {
        /// The numeric content.
        value: f64,
    },
    /// A boolean literal (from key=true).
    Boolean {
        /// The boolean content.
        value: bool,
    },
}

impl AttributeValue {
    /// Creates a string attribute value.
    pub fn string(value: impl Into<String>) -> Self {
        AttributeValue::String {
            value: value.into(),
        }
    }

    /// Creates a numeric attribute value.
    pub fn number(value: f64) -> Self {
        AttributeValue::Number { value }
    }

    /// Creates a boolean attribute value.
    pub fn boolean(value: bool) -> Self {
        AttributeValue::Boolean { value }
    }

    /// Returns the type of this value.
    pub fn type_of(&self) -> AttributeType {
        match self {
            AttributeValue::String { .. } => AttributeType::String,
            AttributeValue::Number { .. } => AttributeType::Number,
            AttributeValue::Boolean { .. } => AttributeType::Boolean,
        }
    }

    /// Returns the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number { value } => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean { value } => Some(*value),
            _ => None,
        }
    }
}

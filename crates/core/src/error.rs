use crate::value::AttributeType;
use thiserror::Error;

/// Source location metadata carried by parsed nodes for diagnostics.
///
/// Both parts are optional: the external parser may not know the file it is
/// processing, and synthetic nodes carry no position at all. `Display` falls
/// back to literal placeholder strings so error messages stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeLocation {
    /// Source file path, when known.
    pub file: Option<String>,
    /// Line number (1-indexed), when known.
    pub line: Option<usize>,
}

impl NodeLocation {
    /// Create a location with a line but no file.
    pub fn at_line(line: usize) -> Self {
        Self {
            file: None,
            line: Some(line),
        }
    }

    /// Create a location with file and line.
    pub fn with_file(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line),
        }
    }
}

impl std::fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:", file)?,
            None => write!(f, "(unknown file):")?,
        }
        match self.line {
            Some(line) => write!(f, "{}", line),
            None => write!(f, "(unknown line)"),
        }
    }
}

/// Errors raised while transforming a parsed node into a render instruction.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A fenced code block resolved a child that is not plain text.
    ///
    /// Code-block content must stay a flat run of text; a nested render
    /// instruction means the parser processed constructs inside the fence.
    /// Fatal for the document being built.
    #[error("unexpected non-string child of code block from {location}")]
    InvalidCodeBlockContent {
        /// Location of the offending fence node.
        location: NodeLocation,
    },
}

impl TransformError {
    /// Create an invalid-content error from an optional node location.
    pub fn invalid_code_block_content(location: Option<&NodeLocation>) -> Self {
        Self::InvalidCodeBlockContent {
            location: location.cloned().unwrap_or_default(),
        }
    }
}

/// Errors raised by the schema-driven validation boundary.
///
/// These carry the checks the framework performs against the registry's
/// declarations before any transform runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No schema exists for the construct name.
    #[error("unknown construct `{construct}`")]
    UnknownConstruct {
        /// Construct name as written in the document.
        construct: String,
    },
    /// A `required` attribute was not supplied and has no default.
    #[error("missing required attribute `{name}` on `{construct}`")]
    MissingRequired {
        /// Construct the schema belongs to.
        construct: String,
        /// Attribute name.
        name: String,
    },
    /// A supplied attribute value does not match the declared type.
    #[error("attribute `{name}` on `{construct}` expects {expected}, got {actual}")]
    TypeMismatch {
        /// Construct the schema belongs to.
        construct: String,
        /// Attribute name.
        name: String,
        /// Declared attribute type.
        expected: AttributeType,
        /// Type of the supplied value.
        actual: AttributeType,
    },
    /// An attribute was supplied that the schema does not declare.
    #[error("unknown attribute `{name}` on `{construct}`")]
    UnknownAttribute {
        /// Construct the schema belongs to.
        construct: String,
        /// Attribute name.
        name: String,
    },
    /// A self-closing tag was given body children.
    #[error("tag `{construct}` is self-closing and cannot have a body")]
    UnexpectedBody {
        /// Construct the schema belongs to.
        construct: String,
    },
}

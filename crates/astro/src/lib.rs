#![deny(missing_docs)]
//! marktag Astro configuration: the blog's tag/node schema registry and the
//! custom transforms for its `heading` and `fence` overrides.

/// The blog's tag/node registry and render-target contract.
pub mod config;
/// Custom transforms for the node overrides.
pub mod transforms;

pub use config::{RENDER_TARGETS, blog_registry, registry};
pub use transforms::{fence_transform, heading_transform};

#[cfg(test)]
mod tests {
    use super::*;
    use marktag_core::{AttributeValue, parse_overrides, transform_node, validate_node};

    #[test]
    fn document_transforms_end_to_end() {
        let input = "# Hello\n\nProse in between.\n\n```rust\nfn main() {}\n```\n";
        let nodes = parse_overrides(input, Some("posts/hello.md")).unwrap();
        assert_eq!(nodes.len(), 2);

        let instructions: Vec<_> = nodes
            .iter()
            .map(|node| transform_node(node, registry()).unwrap())
            .collect();

        assert_eq!(instructions[0].render, "Heading");
        assert_eq!(
            instructions[0].attribute("level"),
            Some(&AttributeValue::number(1.0))
        );
        assert_eq!(instructions[0].children[0].as_text(), Some("Hello"));

        assert_eq!(instructions[1].render, "CodeBlock");
        assert_eq!(
            instructions[1].attribute("content"),
            Some(&AttributeValue::string("fn main() {}"))
        );
        assert_eq!(
            instructions[1].attribute("language"),
            Some(&AttributeValue::string("rust"))
        );
        assert!(instructions[1].children.is_empty());
    }

    #[test]
    fn fence_without_info_string_falls_back_to_typescript() {
        let nodes = parse_overrides("```\nlet x = 1;\n```\n", None).unwrap();
        let instruction = transform_node(&nodes[0], registry()).unwrap();
        assert_eq!(
            instruction.attribute("language"),
            Some(&AttributeValue::string("typescript"))
        );
    }

    #[test]
    fn parsed_overrides_validate_against_the_registry() {
        let nodes = parse_overrides("## Title\n\n```\ncode\n```\n", None).unwrap();
        for node in &nodes {
            validate_node(node, registry()).unwrap();
        }
    }

    #[test]
    fn serialized_instruction_shape_is_stable() {
        let nodes = parse_overrides("```\nlet x = 1;\n```\n", None).unwrap();
        let instruction = transform_node(&nodes[0], registry()).unwrap();
        let json = serde_json::to_string_pretty(&instruction).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "render": "CodeBlock",
          "attributes": {
            "content": {
              "type": "string",
              "value": "let x = 1;"
            },
            "language": {
              "type": "string",
              "value": "typescript"
            }
          },
          "children": []
        }
        "#);
    }
}

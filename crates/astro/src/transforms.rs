//! Custom transforms for the blog's node overrides.

use marktag_core::{
    AttributeValue, Registry, RenderChild, RenderInstruction, Schema, Transformable,
    TransformError,
};

/// Transform for the `heading` node override.
///
/// Default resolution with the schema's render target: the resolved `level`
/// attribute and children pass through unchanged. Pure and idempotent.
pub fn heading_transform(
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

/// Transform for the `fence` (code block) node override.
///
/// Resolves attributes and children, then requires every child to be plain
/// text: a nested instruction means the parser processed constructs inside
/// the fence, which must fail loudly rather than drop or coerce content.
/// On success the text children are joined, in order, into the `content`
/// attribute and the child list is emptied - fence content is an attribute,
/// not renderable children, so it is never parsed again downstream.
pub fn fence_transform(
    node: &dyn Transformable,
    registry: &Registry,
    schema: &Schema,
) -> Result<RenderInstruction, TransformError> {
    let mut attributes = node.transform_attributes(registry);
    let children = node.transform_children(registry)?;

    let mut content = String::new();
    for child in &children {
        match child {
            RenderChild::Text { value } => content.push_str(value),
            RenderChild::Instruction(_) => {
                log::debug!("code block at {:?} produced a nested instruction", node.location());
                return Err(TransformError::invalid_code_block_content(node.location()));
            }
        }
    }

    attributes.insert("content".to_string(), AttributeValue::string(content));
    Ok(RenderInstruction {
        render: schema.render.clone(),
        attributes,
        children: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::blog_registry;
    use marktag_core::{NodeLocation, ParsedNode, transform_node};

    fn fence_node() -> ParsedNode {
        ParsedNode::node("fence")
            .attribute("content", AttributeValue::string(""))
            .child_text("const x = 1;")
            .child_text("\n")
            .child_text("console.log(x);")
    }

    #[test]
    fn fence_joins_text_children_into_content() {
        let registry = blog_registry();
        let instruction = transform_node(&fence_node(), &registry).unwrap();

        assert_eq!(instruction.render, "CodeBlock");
        assert_eq!(
            instruction.attribute("content"),
            Some(&AttributeValue::string("const x = 1;\nconsole.log(x);"))
        );
        assert!(instruction.children.is_empty());
    }

    #[test]
    fn fence_defaults_language_to_typescript() {
        let registry = blog_registry();
        let instruction = transform_node(&fence_node(), &registry).unwrap();
        assert_eq!(
            instruction.attribute("language"),
            Some(&AttributeValue::string("typescript"))
        );
    }

    #[test]
    fn fence_keeps_explicit_language() {
        let registry = blog_registry();
        let node = fence_node().attribute("language", AttributeValue::string("rust"));
        let instruction = transform_node(&node, &registry).unwrap();
        assert_eq!(
            instruction.attribute("language"),
            Some(&AttributeValue::string("rust"))
        );
    }

    #[test]
    fn fence_hides_content_source_and_process_flags() {
        let registry = blog_registry();
        let instruction = transform_node(&fence_node(), &registry).unwrap();
        // content comes back as the joined text, process never renders
        assert!(!instruction.attributes.contains_key("process"));
        assert_eq!(
            instruction.attributes.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            vec!["content", "language"]
        );
    }

    #[test]
    fn fence_rejects_non_text_child_with_location() {
        let registry = blog_registry();
        let node = ParsedNode::node("fence")
            .attribute("content", AttributeValue::string(""))
            .child_text("const x = 1;")
            .child_node(
                ParsedNode::tag("tweet")
                    .attribute("url", AttributeValue::string("https://example.com/s")),
            )
            .at(NodeLocation::with_file("posts/hello.md", 42));

        let err = transform_node(&node, &registry).unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"unexpected non-string child of code block from posts/hello.md:42"
        );
    }

    #[test]
    fn fence_rejects_non_text_child_without_location() {
        let registry = blog_registry();
        let node = ParsedNode::node("fence")
            .attribute("content", AttributeValue::string(""))
            .child_node(ParsedNode::tag("mark").child_text("nested"));

        let err = transform_node(&node, &registry).unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"unexpected non-string child of code block from (unknown file):(unknown line)"
        );
    }

    #[test]
    fn heading_passes_level_and_children_through() {
        let registry = blog_registry();
        let node = ParsedNode::node("heading")
            .attribute("level", AttributeValue::number(2.0))
            .child_text("Getting started");

        let instruction = transform_node(&node, &registry).unwrap();
        assert_eq!(instruction.render, "Heading");
        assert_eq!(
            instruction.attribute("level"),
            Some(&AttributeValue::number(2.0))
        );
        assert_eq!(instruction.children[0].as_text(), Some("Getting started"));
    }

    #[test]
    fn heading_transform_is_idempotent() {
        let registry = blog_registry();
        let node = ParsedNode::node("heading")
            .attribute("level", AttributeValue::number(3.0))
            .child_text("Reference");

        let first = transform_node(&node, &registry).unwrap();
        let second = transform_node(&node, &registry).unwrap();
        assert_eq!(first, second);
    }
}

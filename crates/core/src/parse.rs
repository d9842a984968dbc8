//! Parse adapter mapping markdown-rs output onto registry constructs.
//!
//! The markdown grammar itself belongs to markdown-rs; this adapter only
//! walks the produced mdast and yields [`ParsedNode`]s for the constructs a
//! registry can override (`heading` and `fence`), with source locations
//! captured for diagnostics. Everything else flows through the consuming
//! renderer's default rules and is none of this crate's business.

use crate::error::NodeLocation;
use crate::node::ParsedNode;
use crate::value::AttributeValue;
use markdown::mdast::Node;
use markdown::message::{Message, Place};
use markdown::unist::Position;
use thiserror::Error;

/// Error surfaced when markdown-rs rejects a document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// markdown-rs parser error surfaced through the adapter.
    #[error("markdown parse error at {location}: {message}")]
    Markdown {
        /// Error message from markdown-rs.
        message: String,
        /// Source location of the failure.
        location: NodeLocation,
    },
}

/// Parses a document and yields the overridable constructs it contains.
///
/// `file` is attached to every captured location so transform errors can
/// name the offending document.
pub fn parse_overrides(input: &str, file: Option<&str>) -> Result<Vec<ParsedNode>, ParseError> {
    let root = markdown::to_mdast(input, &markdown::ParseOptions::gfm()).map_err(|err| {
        ParseError::Markdown {
            message: err.to_string(),
            location: message_location(&err, file),
        }
    })?;

    let children = match root {
        Node::Root(root) => root.children,
        other => vec![other],
    };

    let mut nodes = Vec::new();
    for child in &children {
        match child {
            Node::Heading(heading) => {
                let mut node = ParsedNode::node("heading")
                    .attribute("level", AttributeValue::number(f64::from(heading.depth)));
                for fragment in inline_text_fragments(&heading.children) {
                    node = node.child_text(fragment);
                }
                if let Some(location) = node_location(heading.position.as_ref(), file) {
                    node = node.at(location);
                }
                nodes.push(node);
            }
            Node::Code(code) => {
                let mut node = ParsedNode::node("fence")
                    .attribute("content", AttributeValue::string(code.value.clone()))
                    .child_text(code.value.clone());
                if let Some(lang) = &code.lang {
                    node = node.attribute("language", AttributeValue::string(lang.clone()));
                }
                if let Some(location) = node_location(code.position.as_ref(), file) {
                    node = node.at(location);
                }
                nodes.push(node);
            }
            other => {
                log::debug!("skipping non-overridable node: {:?}", node_kind(other));
            }
        }
    }

    Ok(nodes)
}

/// Collects the plain-text fragments of inline content, in order.
///
/// Formatting wrappers are traversed; anything without text content is
/// ignored, matching how heading text is gathered for rendering.
fn inline_text_fragments(children: &[Node]) -> Vec<String> {
    let mut fragments = Vec::new();
    collect_inline_text(children, &mut fragments);
    fragments
}

fn collect_inline_text(children: &[Node], fragments: &mut Vec<String>) {
    for child in children {
        match child {
            Node::Text(text) => fragments.push(text.value.clone()),
            Node::InlineCode(code) => fragments.push(code.value.clone()),
            Node::Strong(strong) => collect_inline_text(&strong.children, fragments),
            Node::Emphasis(emphasis) => collect_inline_text(&emphasis.children, fragments),
            Node::Link(link) => collect_inline_text(&link.children, fragments),
            Node::Delete(delete) => collect_inline_text(&delete.children, fragments),
            _ => {}
        }
    }
}

fn node_location(position: Option<&Position>, file: Option<&str>) -> Option<NodeLocation> {
    let line = position.map(|p| p.start.line);
    if file.is_none() && line.is_none() {
        return None;
    }
    Some(NodeLocation {
        file: file.map(str::to_string),
        line,
    })
}

fn message_location(message: &Message, file: Option<&str>) -> NodeLocation {
    let line = match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => Some(point.line),
            Place::Position(position) => Some(position.start.line),
        },
        None => None,
    };
    NodeLocation {
        file: file.map(str::to_string),
        line,
    }
}

fn node_kind(node: &Node) -> &'static str {
    match node {
        Node::Paragraph(_) => "paragraph",
        Node::List(_) => "list",
        Node::Blockquote(_) => "blockquote",
        Node::Table(_) => "table",
        Node::ThematicBreak(_) => "thematicBreak",
        Node::Html(_) => "html",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ParsedChild;
    use crate::registry::ConstructKind;

    #[test]
    fn parses_heading_with_level_and_text() {
        let nodes = parse_overrides("## Getting *started*", None).unwrap();
        assert_eq!(nodes.len(), 1);

        let heading = &nodes[0];
        assert_eq!(heading.name, "heading");
        assert_eq!(heading.kind, ConstructKind::Node);
        assert_eq!(
            heading.attributes.get("level"),
            Some(&AttributeValue::number(2.0))
        );
        let texts: Vec<_> = heading
            .children
            .iter()
            .map(|c| match c {
                ParsedChild::Text(t) => t.as_str(),
                ParsedChild::Node(_) => panic!("heading children should be text"),
            })
            .collect();
        assert_eq!(texts, vec!["Getting ", "started"]);
    }

    #[test]
    fn parses_fence_with_language_and_content() {
        let input = "```rust\nfn main() {}\n```\n";
        let nodes = parse_overrides(input, Some("posts/demo.md")).unwrap();
        assert_eq!(nodes.len(), 1);

        let fence = &nodes[0];
        assert_eq!(fence.name, "fence");
        assert_eq!(
            fence.attributes.get("language"),
            Some(&AttributeValue::string("rust"))
        );
        assert_eq!(
            fence.attributes.get("content"),
            Some(&AttributeValue::string("fn main() {}"))
        );
        assert_eq!(
            fence.children,
            vec![ParsedChild::Text("fn main() {}".to_string())]
        );

        let location = fence.location.as_ref().unwrap();
        assert_eq!(location.file.as_deref(), Some("posts/demo.md"));
        assert_eq!(location.line, Some(1));
    }

    #[test]
    fn fence_without_info_string_has_no_language_attribute() {
        let nodes = parse_overrides("```\nplain\n```\n", None).unwrap();
        assert!(!nodes[0].attributes.contains_key("language"));
    }

    #[test]
    fn skips_paragraphs_and_keeps_document_order() {
        let input = "# Title\n\nSome prose.\n\n```\ncode\n```\n";
        let nodes = parse_overrides(input, None).unwrap();
        let names: Vec<_> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["heading", "fence"]);
    }

    #[test]
    fn captures_line_numbers_per_construct() {
        let input = "# One\n\n## Two\n";
        let nodes = parse_overrides(input, None).unwrap();
        assert_eq!(nodes[0].location.as_ref().unwrap().line, Some(1));
        assert_eq!(nodes[1].location.as_ref().unwrap().line, Some(3));
    }
}

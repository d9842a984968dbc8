//! The blog's tag/node registry.
//!
//! This is the declarative configuration the markdown framework consumes:
//! which custom tags exist, how their attributes are typed and validated,
//! and which node overrides carry custom transforms. Once a construct is
//! registered here, the template layer implements its render target as a
//! concrete component (see [`RENDER_TARGETS`]).

use crate::transforms::{fence_transform, heading_transform};
use marktag_core::{
    AttributeDef, AttributeType, AttributeValue, Registry, Schema, document_children,
    inline_children,
};
use once_cell::sync::Lazy;

/// Render target names the template layer must implement one-to-one.
///
/// Literal element names render as plain HTML elements; capitalized names
/// map onto Astro components.
pub const RENDER_TARGETS: &[&str] = &[
    "details",
    "summary",
    "sup",
    "sub",
    "abbr",
    "kbd",
    "mark",
    "YouTubeEmbed",
    "TweetEmbed",
    "CodePenEmbed",
    "GitHubGistEmbed",
    "Heading",
    "CodeBlock",
];

/// Builds the blog registry.
///
/// Container tags inherit the document's allowed children; inline wrappers
/// inherit the inline set. Embed tags are self-closing and require the
/// attributes their components need to render without a body.
pub fn blog_registry() -> Registry {
    Registry::new()
        .with_tag(
            "details",
            Schema::new("details").children(document_children()),
        )
        .with_tag(
            "summary",
            Schema::new("summary").children(document_children()),
        )
        .with_tag("sup", Schema::new("sup").children(inline_children()))
        .with_tag("sub", Schema::new("sub").children(inline_children()))
        .with_tag(
            "abbr",
            Schema::new("abbr")
                .attribute("title", AttributeDef::of(AttributeType::String).required())
                .children(inline_children()),
        )
        .with_tag("kbd", Schema::new("kbd").children(inline_children()))
        .with_tag("mark", Schema::new("mark").children(inline_children()))
        .with_tag(
            "youtube",
            Schema::new("YouTubeEmbed")
                .attribute("url", AttributeDef::of(AttributeType::String).required())
                .attribute("label", AttributeDef::of(AttributeType::String).required())
                .self_closing(),
        )
        .with_tag(
            "tweet",
            Schema::new("TweetEmbed")
                .attribute("url", AttributeDef::of(AttributeType::String).required())
                .self_closing(),
        )
        .with_tag(
            "codepen",
            Schema::new("CodePenEmbed")
                .attribute("url", AttributeDef::of(AttributeType::String).required())
                .attribute("title", AttributeDef::of(AttributeType::String).required())
                .self_closing(),
        )
        .with_tag(
            "githubgist",
            Schema::new("GitHubGistEmbed")
                .attribute("id", AttributeDef::of(AttributeType::String).required())
                .self_closing(),
        )
        .with_node(
            "heading",
            Schema::new("Heading")
                .attribute("level", AttributeDef::of(AttributeType::Number).required())
                .transform(heading_transform),
        )
        .with_node(
            "fence",
            Schema::new("CodeBlock")
                .attribute(
                    "content",
                    AttributeDef::of(AttributeType::String).required().hidden(),
                )
                .attribute(
                    "language",
                    AttributeDef::of(AttributeType::String)
                        .default_value(AttributeValue::string("typescript")),
                )
                // whether the framework processes tags inside the content
                .attribute(
                    "process",
                    AttributeDef::of(AttributeType::Boolean)
                        .default_value(AttributeValue::boolean(false))
                        .hidden(),
                )
                .transform(fence_transform),
        )
}

/// Process-wide registry, built once on first use and read-only afterwards.
pub fn registry() -> &'static Registry {
    static REGISTRY: Lazy<Registry> = Lazy::new(blog_registry);
    &REGISTRY
}

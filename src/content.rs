use comrak::{ComrakOptions, ComrakRenderOptions, ListStyleType};
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::Metadata;

// A frontmatter block opens at the very first byte with a `---` line and
// closes with another; the closing delimiter's trailing newline belongs to
// the block. An unterminated or offset block is not a block at all.
static FRONTMATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^---\r?\n(.*?)\r?\n---\r?\n?").expect("frontmatter regex"));

/// Splits a document into its frontmatter metadata and remaining body.
///
/// Each line inside the block is split at its first colon; key and value are
/// trimmed. Lines without a colon, or with a colon in the first column, are
/// skipped silently. When no well-formed block is present the whole input is
/// returned unchanged with an empty mapping.
pub fn parse_frontmatter(text: &str) -> (Metadata, &str) {
    let mut metadata = Metadata::new();
    let Some(captures) = FRONTMATTER_RE.captures(text) else {
        return (metadata, text);
    };

    for line in captures[1].lines() {
        if let Some(idx) = line.find(':') {
            if idx > 0 {
                let key = line[..idx].trim().to_string();
                let value = line[idx + 1..].trim().to_string();
                metadata.insert(key, value);
            }
        }
    }

    // The regex is anchored, so the match length is the block length.
    (metadata, &text[captures[0].len()..])
}

pub fn make_comrak_options() -> ComrakOptions {
    let mut comrak_options = ComrakOptions::default();
    comrak_options.extension.table = true;
    comrak_options.extension.autolink = true;
    comrak_options.extension.tagfilter = true;
    comrak_options.extension.strikethrough = true;
    comrak_options.extension.tasklist = true;
    comrak_options.parse.smart = true;
    let mut render_options = ComrakRenderOptions::default();
    // Mirror content is trusted repository material.
    render_options.unsafe_ = true;
    render_options.list_style = ListStyleType::Plus;
    comrak_options.render = render_options;
    comrak_options
}

pub fn render_markdown(body: &str, comrak_options: &ComrakOptions) -> String {
    comrak::markdown_to_html(body, comrak_options)
}

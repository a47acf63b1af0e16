use super::mapping::node_text;
use tree_sitter::Node;

const COMMENT_OPENERS: [&str; 8] = ["/**<", "/**", "/*!", "/*", "///<", "///", "//!", "//"];

/// Return the comments directly preceding a declaration, joined by newlines.
///
/// A comment belongs to the declaration when nothing but whitespace separates them and it ends
/// on the same line or the line before.
pub(super) fn extract_raw_comment(node: Node, source_code: &str) -> Option<String> {
    let anchor = match node.parent() {
        Some(parent) if parent.kind() == "template_declaration" => parent,
        _ => node,
    };

    let mut items = Vec::new();
    let mut next_row = anchor.start_position().row;
    let mut current = anchor.prev_sibling();

    while let Some(sibling) = current {
        if sibling.kind() != "comment" || sibling.end_position().row + 1 < next_row {
            break;
        }
        items.push(node_text(sibling, source_code));
        next_row = sibling.start_position().row;
        current = sibling.prev_sibling();
    }

    if items.is_empty() {
        return None;
    }
    items.reverse();
    Some(items.join("\n"))
}

/// Reduce a raw comment to its first paragraph, without comment markers.
pub(super) fn brief_from_raw(raw_comment: &str) -> Option<String> {
    let mut paragraph: Vec<&str> = Vec::new();

    for line in raw_comment.lines() {
        let line = strip_markers(line);
        if line.is_empty() {
            if paragraph.is_empty() {
                continue;
            }
            break;
        }
        paragraph.push(line);
    }

    if paragraph.is_empty() {
        None
    } else {
        Some(paragraph.join(" "))
    }
}

fn strip_markers(line: &str) -> &str {
    let mut line = line.trim();
    line = line.strip_suffix("*/").unwrap_or(line);
    if let Some(opener) = COMMENT_OPENERS.iter().find(|o| line.starts_with(**o)) {
        line = &line[opener.len()..];
    }
    line.trim_start_matches('*').trim()
}

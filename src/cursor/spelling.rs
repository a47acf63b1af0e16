use super::kind::CursorKind;
use super::mapping::{declared_name, is_name_kind, node_text};
use tree_sitter::Node;

/// Compute the spelling of a non-root cursor.
pub(super) fn spell(node: Node, kind: CursorKind, source_code: &str) -> String {
    match kind {
        CursorKind::ObjCInstanceMethodDecl | CursorKind::ObjCClassMethodDecl => {
            selector(node, source_code)
        }
        CursorKind::CXXAccessSpecifier => String::new(),
        kind if kind.is_declaration() => declared_name(node)
            .map(|name| spell_name(name, source_code))
            .unwrap_or_default(),

        CursorKind::TypeRef => match node.kind() {
            "struct_specifier" | "union_specifier" | "enum_specifier" | "class_specifier" => {
                let keyword = node.kind().trim_end_matches("_specifier");
                match declared_name(node) {
                    Some(name) => format!("{} {}", keyword, spell_name(name, source_code)),
                    None => keyword.to_string(),
                }
            }
            _ => compact(node_text(node, source_code)),
        },
        CursorKind::NamespaceRef | CursorKind::DeclRefExpr => declared_name(node)
            .map(|name| spell_name(name, source_code))
            .unwrap_or_default(),
        CursorKind::MemberRefExpr => node
            .child_by_field_name("field")
            .or(Some(node).filter(|n| n.kind() == "field_identifier"))
            .map(|field| node_text(field, source_code).to_string())
            .unwrap_or_default(),
        CursorKind::CallExpr => node
            .child_by_field_name("function")
            .and_then(callee_name)
            .map(|name| spell_name(name, source_code))
            .unwrap_or_default(),
        CursorKind::ObjCSuperClassRef | CursorKind::ObjCClassRef | CursorKind::ObjCProtocolRef => {
            node_text(node, source_code).to_string()
        }
        CursorKind::ObjCMessageExpr => message_selector(node, source_code),
        CursorKind::ObjCSelectorExpr => compact(
            node_text(node, source_code)
                .trim_start_matches("@selector")
                .trim()
                .trim_matches(['(', ')']),
        ),

        kind if kind.is_literal() => node_text(node, source_code).to_string(),
        CursorKind::MacroDefinition => node
            .child_by_field_name("name")
            .map(|name| node_text(name, source_code).to_string())
            .unwrap_or_default(),
        CursorKind::InclusionDirective => node
            .child_by_field_name("path")
            .map(|path| {
                node_text(path, source_code)
                    .trim_matches(['"', '<', '>'])
                    .to_string()
            })
            .unwrap_or_default(),

        _ => String::new(),
    }
}

fn callee_name(function: Node) -> Option<Node> {
    match function.kind() {
        "field_expression" => function.child_by_field_name("field"),
        kind if is_name_kind(kind) => declared_name(function),
        _ => None,
    }
}

/// Spell a name node the way a compiler would print it.
fn spell_name(name: Node, source_code: &str) -> String {
    let text = node_text(name, source_code);
    match name.kind() {
        "operator_name" => {
            let operator = text.trim_start_matches("operator").trim();
            if operator.starts_with(|c: char| c.is_alphabetic()) {
                format!("operator {}", compact_words(operator))
            } else {
                format!("operator{}", compact(operator))
            }
        }
        "destructor_name" => compact(text),
        _ => text.to_string(),
    }
}

/// Remove all whitespace, e.g. `operator ( )` becomes `operator()`.
fn compact(text: &str) -> String {
    text.split_whitespace().collect()
}

/// Collapse runs of whitespace, e.g. `new  []` becomes `new []`.
fn compact_words(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The selector of an Objective-C method declaration, e.g. `setObject:forKey:`.
fn selector(node: Node, source_code: &str) -> String {
    let mut pending = None;
    let mut keywords = Vec::new();
    let mut cursor = node.walk();

    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => pending = Some(node_text(child, source_code)),
            "method_parameter" | "keyword_declarator" => {
                let keyword = match (child.child(0), child.child(1)) {
                    (Some(keyword), Some(colon))
                        if keyword.kind() == "identifier" && colon.kind() == ":" =>
                    {
                        node_text(keyword, source_code)
                    }
                    _ => pending.take().unwrap_or_default(),
                };
                keywords.push(format!("{}:", keyword));
            }
            _ => {}
        }
    }

    if keywords.is_empty() {
        pending.unwrap_or_default().to_string()
    } else {
        keywords.concat()
    }
}

/// The selector sent by an Objective-C message expression, e.g. `retain` or `retain:`.
fn message_selector(node: Node, source_code: &str) -> String {
    let mut selector = String::new();
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return selector;
    }

    loop {
        let child = cursor.node();
        if cursor.field_name() == Some("method") {
            selector.push_str(node_text(child, source_code));
        } else if child.kind() == ":" {
            selector.push(':');
        }
        if !cursor.goto_next_sibling() {
            break;
        }
    }
    selector
}

//! Mapping of tree-sitter nodes onto cursors.
//!
//! Each named node is either exposed as a cursor of some [`CursorKind`], flattened so that its
//! children take its place, or hidden together with its subtree.

use super::kind::CursorKind;
use crate::options::CreationOptions;
use tree_sitter::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mapping {
    Cursor(CursorKind),
    Transparent,
    Hidden,
}

/// Node kinds that can carry the name of a declaration or a reference.
const NAME_KINDS: [&str; 10] = [
    "identifier",
    "field_identifier",
    "type_identifier",
    "namespace_identifier",
    "qualified_identifier",
    "operator_name",
    "destructor_name",
    "template_function",
    "template_method",
    "template_type",
];

/// Node kinds that introduce a declaration.
const DECLARATION_KINDS: [&str; 23] = [
    "function_definition",
    "declaration",
    "field_declaration",
    "parameter_declaration",
    "optional_parameter_declaration",
    "struct_specifier",
    "union_specifier",
    "enum_specifier",
    "class_specifier",
    "enumerator",
    "type_definition",
    "namespace_definition",
    "alias_declaration",
    "type_parameter_declaration",
    "init_declarator",
    "class_interface",
    "protocol_declaration",
    "class_implementation",
    "method_declaration",
    "method_definition",
    "method_parameter",
    "property_declaration",
    "property_implementation",
];

const PREPROCESSOR_DIRECTIVES: [&str; 3] =
    ["preproc_include", "preproc_def", "preproc_function_def"];

pub(super) fn node_text<'a>(node: Node, source_code: &'a str) -> &'a str {
    source_code
        .get(node.start_byte()..node.end_byte())
        .unwrap_or_default()
}

pub(super) fn is_name_kind(kind: &str) -> bool {
    NAME_KINDS.contains(&kind)
}

/// Decide how `node`, reached from `parent` through `field`, appears in the cursor tree.
pub(super) fn map_node(
    node: Node,
    field: Option<&str>,
    parent: Node,
    options: CreationOptions,
    source_code: &str,
) -> Mapping {
    if !node.is_named() || node.is_missing() {
        return Mapping::Hidden;
    }

    let kind = node.kind();
    if kind == "comment" || PREPROCESSOR_DIRECTIVES.contains(&parent.kind()) {
        return Mapping::Hidden;
    }

    if options.contains(CreationOptions::SKIP_FUNCTION_BODIES)
        && matches!(parent.kind(), "function_definition" | "method_definition")
        && kind == "compound_statement"
    {
        return Mapping::Hidden;
    }

    if parent.kind().starts_with("preproc_") && field == Some("condition") {
        return Mapping::Hidden;
    }

    if field == Some("declarator") && declarator_count(parent) > 1 {
        return match parent.kind() {
            "declaration" if has_function_declarator(node) => {
                Mapping::Cursor(CursorKind::FunctionDecl)
            }
            "declaration" => Mapping::Cursor(CursorKind::VarDecl),
            "field_declaration" if has_function_declarator(node) => {
                Mapping::Cursor(CursorKind::CXXMethod)
            }
            "field_declaration" => Mapping::Cursor(CursorKind::FieldDecl),
            _ => Mapping::Transparent,
        };
    }

    if is_name_kind(kind) && names_child(parent, node, field) {
        return Mapping::Hidden;
    }

    map_kind(node, field, parent, options, source_code)
}

fn map_kind(
    node: Node,
    field: Option<&str>,
    parent: Node,
    options: CreationOptions,
    source_code: &str,
) -> Mapping {
    let kind = match node.kind() {
        "translation_unit" => CursorKind::TranslationUnit,

        "function_definition" => function_kind(node, parent),
        "declaration" => match declarator_count(node) {
            1 if has_function_declarator(node) => function_kind(node, parent),
            1 => CursorKind::VarDecl,
            _ => return Mapping::Transparent,
        },
        "field_declaration" => match declarator_count(node) {
            1 if has_function_declarator(node) => CursorKind::CXXMethod,
            1 => CursorKind::FieldDecl,
            _ => return Mapping::Transparent,
        },
        "parameter_declaration" | "optional_parameter_declaration" => CursorKind::ParmDecl,
        "struct_specifier" | "union_specifier" | "enum_specifier" | "class_specifier"
            if node.child_by_field_name("body").is_none() =>
        {
            CursorKind::TypeRef
        }
        "struct_specifier" => CursorKind::StructDecl,
        "union_specifier" => CursorKind::UnionDecl,
        "enum_specifier" => CursorKind::EnumDecl,
        "class_specifier" => CursorKind::ClassDecl,
        "enumerator" => CursorKind::EnumConstantDecl,
        "type_definition" => CursorKind::TypedefDecl,
        "namespace_definition" => CursorKind::Namespace,
        "alias_declaration" => CursorKind::TypeAliasDecl,
        "using_declaration" => CursorKind::UsingDeclaration,
        "access_specifier" => CursorKind::CXXAccessSpecifier,
        "type_parameter_declaration" => CursorKind::TemplateTypeParameter,

        "class_interface" if is_category(node) => CursorKind::ObjCCategoryDecl,
        "class_interface" => CursorKind::ObjCInterfaceDecl,
        "protocol_declaration" => CursorKind::ObjCProtocolDecl,
        "class_implementation" if is_category(node) => CursorKind::ObjCCategoryImplDecl,
        "class_implementation" => CursorKind::ObjCImplementationDecl,
        "struct_declaration" if parent.kind() == "instance_variable" => CursorKind::ObjCIvarDecl,
        "method_parameter" => CursorKind::ParmDecl,
        "method_declaration" | "method_definition" => {
            if node.child(0).is_some_and(|scope| scope.kind() == "+") {
                CursorKind::ObjCClassMethodDecl
            } else {
                CursorKind::ObjCInstanceMethodDecl
            }
        }
        "property_declaration" => CursorKind::ObjCPropertyDecl,
        "property_attributes_declaration" => return Mapping::Hidden,
        "property_implementation" => {
            if node.child(0).is_some_and(|keyword| keyword.kind() == "@synthesize") {
                CursorKind::ObjCSynthesizeDecl
            } else {
                CursorKind::ObjCDynamicDecl
            }
        }

        "type_identifier" | "template_type" => CursorKind::TypeRef,
        "namespace_identifier" => CursorKind::NamespaceRef,
        "qualified_identifier" => match declared_name(node).map(|name| name.kind()) {
            Some("type_identifier" | "template_type") => CursorKind::TypeRef,
            _ => CursorKind::DeclRefExpr,
        },
        "identifier" => identifier_kind(parent, field),
        "template_function" => CursorKind::DeclRefExpr,
        "field_identifier" | "field_expression" => CursorKind::MemberRefExpr,

        "call_expression" => CursorKind::CallExpr,
        "message_expression" => CursorKind::ObjCMessageExpr,
        "selector_expression" => CursorKind::ObjCSelectorExpr,
        "number_literal" => number_kind(node_text(node, source_code)),
        "string_literal" if parent.kind() == "at_expression" => return Mapping::Hidden,
        "string_literal" if node.child(0).is_some_and(|at| at.kind() == "@") => {
            CursorKind::ObjCStringLiteral
        }
        "at_expression" if named_child_of_kind(node, &["string_literal"]).is_some() => {
            CursorKind::ObjCStringLiteral
        }
        "string_literal" | "concatenated_string" | "raw_string_literal" => {
            CursorKind::StringLiteral
        }
        "char_literal" => CursorKind::CharacterLiteral,
        "true" | "false" => CursorKind::CXXBoolLiteralExpr,
        "null" | "nullptr" => CursorKind::CXXNullPtrLiteralExpr,
        "this" => CursorKind::CXXThisExpr,
        "new_expression" => CursorKind::CXXNewExpr,
        "delete_expression" => CursorKind::CXXDeleteExpr,
        "lambda_expression" => CursorKind::LambdaExpr,
        "parenthesized_expression" => CursorKind::ParenExpr,
        "unary_expression" | "update_expression" | "pointer_expression" => {
            CursorKind::UnaryOperator
        }
        "binary_expression" => CursorKind::BinaryOperator,
        "assignment_expression" => assignment_kind(node),
        "conditional_expression" => CursorKind::ConditionalOperator,
        "subscript_expression" => CursorKind::ArraySubscriptExpr,
        "cast_expression" => CursorKind::CStyleCastExpr,
        "initializer_list" => CursorKind::InitListExpr,
        "sizeof_expression" | "alignof_expression" => CursorKind::UnaryExpr,

        "compound_statement" => CursorKind::CompoundStmt,
        "if_statement" => CursorKind::IfStmt,
        "switch_statement" => CursorKind::SwitchStmt,
        "case_statement" => {
            if node.child(0).is_some_and(|keyword| keyword.kind() == "default") {
                CursorKind::DefaultStmt
            } else {
                CursorKind::CaseStmt
            }
        }
        "while_statement" => CursorKind::WhileStmt,
        "do_statement" => CursorKind::DoStmt,
        "for_statement" | "for_range_loop" => CursorKind::ForStmt,
        "goto_statement" => CursorKind::GotoStmt,
        "labeled_statement" => CursorKind::LabelStmt,
        "continue_statement" => CursorKind::ContinueStmt,
        "break_statement" => CursorKind::BreakStmt,
        "return_statement" => CursorKind::ReturnStmt,

        "preproc_include" | "preproc_def" | "preproc_function_def"
            if !options.contains(CreationOptions::DETAILED_PREPROCESSING_RECORD) =>
        {
            return Mapping::Hidden
        }
        "preproc_include" => CursorKind::InclusionDirective,
        "preproc_def" | "preproc_function_def" => CursorKind::MacroDefinition,
        "preproc_call" => return Mapping::Hidden,

        _ => return Mapping::Transparent,
    };

    Mapping::Cursor(kind)
}

/// Whether `child` is the name that `parent` spells itself with.
fn names_child(parent: Node, child: Node, field: Option<&str>) -> bool {
    match parent.kind() {
        "field_expression" => field == Some("field"),
        "preproc_ifdef" | "preproc_elifdef" => field == Some("name"),
        "method_declaration" | "method_definition" | "keyword_declarator" | "selector_expression"
        | "method_identifier" => child.kind() == "identifier",
        "message_expression" => field == Some("method"),
        kind if kind.ends_with("_declarator")
            || is_name_kind(kind)
            || DECLARATION_KINDS.contains(&kind)
            || PREPROCESSOR_DIRECTIVES.contains(&kind) =>
        {
            declared_name(parent) == Some(child)
        }
        _ => false,
    }
}

/// Find the node holding the name introduced by a declaration (or named by a reference).
pub(super) fn declared_name(node: Node) -> Option<Node> {
    match node.kind() {
        "identifier" | "field_identifier" | "type_identifier" | "namespace_identifier"
        | "operator_name" | "destructor_name" => Some(node),
        "qualified_identifier" | "template_function" | "template_method" | "template_type" => {
            node.child_by_field_name("name").and_then(declared_name)
        }
        "class_interface" | "class_implementation" if is_category(node) => {
            node.child_by_field_name("category")
        }
        "property_declaration" => {
            named_child_of_kind(node, &["struct_declaration", "atomic_declaration"])
                .and_then(declared_name)
        }
        "struct_declaration" => {
            named_child_of_kind(node, &["struct_declarator"]).and_then(declared_name)
        }
        "atomic_declaration" => named_child_of_kind(node, &["field_identifier"]),
        _ => match node
            .child_by_field_name("declarator")
            .or_else(|| node.child_by_field_name("name"))
        {
            Some(child) => declared_name(child),
            None => first_declared_name(node),
        },
    }
}

fn first_declared_name(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return None;
    }

    loop {
        let child = cursor.node();
        let candidate = child.is_named()
            && cursor.field_name() != Some("type")
            && (is_name_kind(child.kind()) || child.kind().ends_with("_declarator"));
        if candidate {
            if let Some(name) = declared_name(child) {
                return Some(name);
            }
        }
        if !cursor.goto_next_sibling() {
            return None;
        }
    }
}

fn named_child_of_kind<'tree>(node: Node<'tree>, kinds: &[&str]) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()));
    found
}

/// Whether an Objective-C interface or implementation is for a category or class extension.
fn is_category(node: Node) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == "(");
    found
}

fn identifier_kind(parent: Node, field: Option<&str>) -> CursorKind {
    match parent.kind() {
        "class_interface" | "class_implementation" if field == Some("superclass") => {
            CursorKind::ObjCSuperClassRef
        }
        "class_interface" | "class_implementation" | "class_declaration" => {
            CursorKind::ObjCClassRef
        }
        "protocol_reference_list" | "protocol_forward_declaration" => CursorKind::ObjCProtocolRef,
        _ => CursorKind::DeclRefExpr,
    }
}

fn declarator_count(node: Node) -> usize {
    let mut cursor = node.walk();
    node.children_by_field_name("declarator", &mut cursor).count()
}

fn has_function_declarator(node: Node) -> bool {
    let mut current = Some(node);
    while let Some(candidate) = current {
        if candidate.kind() == "function_declarator" {
            return true;
        }
        current = candidate.child_by_field_name("declarator");
    }
    false
}

fn function_kind(node: Node, parent: Node) -> CursorKind {
    if declared_name(node).is_some_and(|name| name.kind() == "destructor_name") {
        return CursorKind::Destructor;
    }

    let in_class_body = match parent.kind() {
        "field_declaration_list" => true,
        "template_declaration" => parent
            .parent()
            .is_some_and(|grandparent| grandparent.kind() == "field_declaration_list"),
        _ => false,
    };
    if in_class_body {
        CursorKind::CXXMethod
    } else {
        CursorKind::FunctionDecl
    }
}

fn number_kind(text: &str) -> CursorKind {
    let is_hex = text.starts_with("0x") || text.starts_with("0X");
    let is_floating = if is_hex {
        text.contains(['.', 'p', 'P'])
    } else {
        text.contains(['.', 'e', 'E'])
    };
    if is_floating {
        CursorKind::FloatingLiteral
    } else {
        CursorKind::IntegerLiteral
    }
}

fn assignment_kind(node: Node) -> CursorKind {
    match node.child_by_field_name("operator").map(|op| op.kind()) {
        Some("=") | None => CursorKind::BinaryOperator,
        Some(_) => CursorKind::CompoundAssignOperator,
    }
}

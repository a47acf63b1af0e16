mod comments;
mod kind;
mod mapping;
mod spelling;

use crate::diagnostics::{SourceLocation, SourceRange};
use crate::options::CreationOptions;
use crate::translation_unit::TranslationUnit;
use std::fmt;
use tree_sitter::Node;

use comments::{brief_from_raw, extract_raw_comment};
use mapping::{map_node, Mapping};
use spelling::spell;

pub use kind::CursorKind;

/// What [`Cursor::visit_children`] does after visiting a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildVisitResult {
    /// Stop the whole visit
    Break,
    /// Move on to the next sibling without visiting this cursor's children
    Continue,
    /// Visit this cursor's children before its next sibling
    Recurse,
}

/// A read-only view of a node in a translation unit's cursor tree.
#[derive(Clone, Copy)]
pub struct Cursor<'tu> {
    translation_unit: &'tu TranslationUnit,
    node: Node<'tu>,
    kind: CursorKind,
}

impl<'tu> Cursor<'tu> {
    pub(crate) fn root(translation_unit: &'tu TranslationUnit, node: Node<'tu>) -> Self {
        Self {
            translation_unit,
            node,
            kind: CursorKind::TranslationUnit,
        }
    }

    pub fn kind(&self) -> CursorKind {
        self.kind
    }

    /// The name the cursor introduces or refers to, or the text of a literal.
    ///
    /// Cursors without a name, such as statements, have an empty spelling.
    pub fn spelling(&self) -> String {
        match self.kind {
            CursorKind::TranslationUnit => self.translation_unit.spelling(),
            kind => spell(self.node, kind, self.translation_unit.source_code()),
        }
    }

    pub fn translation_unit(&self) -> &'tu TranslationUnit {
        self.translation_unit
    }

    pub fn is_declaration(&self) -> bool {
        self.kind.is_declaration()
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::start_of(&self.node)
    }

    pub fn extent(&self) -> SourceRange {
        SourceRange::of(&self.node)
    }

    /// The comments immediately preceding this declaration.
    ///
    /// Only available when the translation unit was created with
    /// [`CreationOptions::INCLUDE_BRIEF_COMMENTS`].
    pub fn raw_comment(&self) -> Option<String> {
        let options = self.translation_unit.options();
        if !options.contains(CreationOptions::INCLUDE_BRIEF_COMMENTS) || !self.is_declaration() {
            return None;
        }
        extract_raw_comment(self.node, self.translation_unit.source_code())
    }

    /// The first paragraph of [`Cursor::raw_comment`], without comment markers.
    pub fn brief_comment(&self) -> Option<String> {
        self.raw_comment().and_then(|raw| brief_from_raw(&raw))
    }

    /// Direct children, in source order.
    pub fn children(&self) -> Vec<Cursor<'tu>> {
        let mut children = Vec::new();
        self.collect_children(self.node, &mut children);
        children
    }

    fn collect_children(&self, node: Node<'tu>, children: &mut Vec<Cursor<'tu>>) {
        let options = self.translation_unit.options();
        let source_code = self.translation_unit.source_code();
        let mut walker = node.walk();
        if !walker.goto_first_child() {
            return;
        }

        loop {
            let child = walker.node();
            match map_node(child, walker.field_name(), node, options, source_code) {
                Mapping::Cursor(kind) => children.push(Cursor {
                    translation_unit: self.translation_unit,
                    node: child,
                    kind,
                }),
                Mapping::Transparent => self.collect_children(child, children),
                Mapping::Hidden => {}
            }
            if !walker.goto_next_sibling() {
                break;
            }
        }
    }

    /// Visit descendants depth-first, each parent before its children.
    ///
    /// The visitor receives each cursor along with its parent. Returns `true` if the visit was
    /// stopped with [`ChildVisitResult::Break`].
    pub fn visit_children<F>(&self, mut visitor: F) -> bool
    where
        F: FnMut(Cursor<'tu>, Cursor<'tu>) -> ChildVisitResult,
    {
        self.visit_children_with(&mut visitor)
    }

    fn visit_children_with<F>(&self, visitor: &mut F) -> bool
    where
        F: FnMut(Cursor<'tu>, Cursor<'tu>) -> ChildVisitResult,
    {
        for child in self.children() {
            match visitor(child, *self) {
                ChildVisitResult::Break => return true,
                ChildVisitResult::Continue => {}
                ChildVisitResult::Recurse => {
                    if child.visit_children_with(visitor) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.translation_unit, other.translation_unit)
            && self.node == other.node
            && self.kind == other.kind
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} at {}",
            self.kind,
            self.spelling(),
            self.location()
        )
    }
}

use crate::cursor::Cursor;
use crate::diagnostics::{collect_diagnostics, Diagnostic, Severity};
use crate::dialect::Dialect;
use crate::options::CreationOptions;
use std::fmt;
use std::path::{Path, PathBuf};
use tree_sitter::Tree;

/// The parsed form of one compilation input.
///
/// A translation unit never changes once built; every [`Cursor`] borrows from it.
pub struct TranslationUnit {
    path: PathBuf,
    dialect: Dialect,
    source_code: String,
    tree: Tree,
    options: CreationOptions,
    diagnostics: Vec<Diagnostic>,
}

impl TranslationUnit {
    pub(crate) fn new(
        path: PathBuf,
        dialect: Dialect,
        source_code: String,
        tree: Tree,
        options: CreationOptions,
    ) -> Self {
        let diagnostics = collect_diagnostics(tree.root_node(), &source_code);
        Self {
            path,
            dialect,
            source_code,
            tree,
            options,
            diagnostics,
        }
    }

    /// The (possibly virtual) path the source was bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The spelling of the root cursor.
    pub fn spelling(&self) -> String {
        self.path.display().to_string()
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn options(&self) -> CreationOptions {
        self.options
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }

    pub fn root_cursor(&self) -> Cursor<'_> {
        Cursor::root(self, self.tree.root_node())
    }
}

impl fmt::Debug for TranslationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationUnit")
            .field("path", &self.path)
            .field("dialect", &self.dialect)
            .field("options", &self.options)
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

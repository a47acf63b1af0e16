mod config;
mod cursor;
mod diagnostics;
mod dialect;
mod error;
mod options;
mod session;
#[cfg(test)]
mod test_helpers;
mod translation_unit;

pub use config::IndexConfig;
pub use cursor::{ChildVisitResult, Cursor, CursorKind};
pub use diagnostics::{Diagnostic, Severity, SourceLocation, SourceRange};
pub use dialect::Dialect;
pub use error::{ConfigError, ParseSetupError};
pub use options::CreationOptions;
pub use session::{SourceIndex, UnsavedFile};
pub use translation_unit::TranslationUnit;

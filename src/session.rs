use crate::config::IndexConfig;
use crate::dialect::Dialect;
use crate::error::ParseSetupError;
use crate::options::CreationOptions;
use crate::translation_unit::TranslationUnit;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};
use tree_sitter::Parser;

/// Source text held in memory and bound to a path that need not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsavedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl UnsavedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// A parsing session: the parsers and configuration shared by the translation units it builds.
pub struct SourceIndex {
    config: IndexConfig,
    language_override: Option<Dialect>,
    parsers: HashMap<Dialect, Parser>,
}

impl SourceIndex {
    pub fn new() -> Self {
        Self {
            config: IndexConfig::default(),
            language_override: None,
            parsers: HashMap::new(),
        }
    }

    pub fn with_config(config: IndexConfig) -> Result<Self, ParseSetupError> {
        let language_override = config.language_override()?;
        Ok(Self {
            config,
            language_override,
            parsers: HashMap::new(),
        })
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Parse an unsaved file into a translation unit.
    ///
    /// Syntax errors in the source do not fail the parse; they are reported as diagnostics on
    /// the resulting translation unit.
    #[tracing::instrument(skip_all, fields(path = %file.path.display()))]
    pub fn parse(
        &mut self,
        file: UnsavedFile,
        options: CreationOptions,
    ) -> Result<TranslationUnit, ParseSetupError> {
        if !options.is_valid() {
            return Err(ParseSetupError::InvalidOptions(options.bits()));
        }

        let dialect = match self.language_override {
            Some(dialect) => dialect,
            None => Dialect::from_path(&file.path)?,
        };

        let parser = self.parser_for(dialect)?;
        let Some(tree) = parser.parse(&file.contents, None) else {
            parser.reset();
            return Err(ParseSetupError::Aborted(file.path.display().to_string()));
        };

        let translation_unit =
            TranslationUnit::new(file.path, dialect, file.contents, tree, options);
        debug!(
            language = dialect.language_name(),
            diagnostics = translation_unit.diagnostics().len(),
            "Parsed translation unit"
        );

        if self.config.display_diagnostics {
            for diagnostic in translation_unit.diagnostics() {
                warn!("{}: {}", translation_unit.spelling(), diagnostic);
            }
        }

        Ok(translation_unit)
    }

    fn parser_for(&mut self, dialect: Dialect) -> Result<&mut Parser, ParseSetupError> {
        match self.parsers.entry(dialect) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut parser = Parser::new();
                parser.set_language(&dialect.grammar()).map_err(|e| {
                    ParseSetupError::Language(format!(
                        "Error setting language for {}: {}",
                        dialect.language_name(),
                        e
                    ))
                })?;
                if let Some(timeout) = self.config.timeout_micros {
                    parser.set_timeout_micros(timeout);
                }
                debug!(language = dialect.language_name(), "Created parser");
                Ok(entry.insert(parser))
            }
        }
    }
}

impl Default for SourceIndex {
    fn default() -> Self {
        Self::new()
    }
}

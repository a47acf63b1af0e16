use crate::dialect::Dialect;
use crate::error::{ConfigError, ParseSetupError};
use serde::{Deserialize, Serialize};

/// Argument prefixes that are accepted but have no effect without a preprocessor.
const IGNORED_ARGUMENT_PREFIXES: [&str; 5] = ["-D", "-I", "-W", "-f", "-std="];

/// Configuration shared by every parse of a [`SourceIndex`](crate::SourceIndex).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Compiler-style arguments, e.g. `["-x", "objective-c"]`
    pub arguments: Vec<String>,

    /// Log every diagnostic as a warning once a translation unit is built
    pub display_diagnostics: bool,

    /// Abort parses that take longer than this
    pub timeout_micros: Option<u64>,
}

impl IndexConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Malformed(format!("{}", e)))
    }

    /// Validate the arguments and return the language they force, if any.
    pub fn language_override(&self) -> Result<Option<Dialect>, ParseSetupError> {
        let mut language = None;
        let mut arguments = self.arguments.iter();

        while let Some(argument) = arguments.next() {
            if argument == "-x" {
                let name = arguments
                    .next()
                    .ok_or_else(|| ParseSetupError::InvalidArgument(argument.clone()))?;
                language = Some(Dialect::from_language_name(name)?);
            } else if let Some(name) = argument.strip_prefix("-x") {
                language = Some(Dialect::from_language_name(name)?);
            } else if !IGNORED_ARGUMENT_PREFIXES
                .iter()
                .any(|prefix| argument.starts_with(prefix))
            {
                return Err(ParseSetupError::InvalidArgument(argument.clone()));
            }
        }

        Ok(language)
    }
}

use thiserror::Error;

/// Error whilst setting up a parse, before any translation unit exists
#[derive(Error, Debug)]
pub enum ParseSetupError {
    #[error("Cannot determine the language of '{0}'")]
    UnsupportedLanguage(String),
    #[error("Invalid creation options: {0:#x}")]
    InvalidOptions(u32),
    #[error("Unsupported compiler argument '{0}'")]
    InvalidArgument(String),
    #[error("Failed to load grammar: {0}")]
    Language(String),
    #[error("Parsing of '{0}' was aborted")]
    Aborted(String),
}

/// Error whilst reading an index configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Malformed(String),
}

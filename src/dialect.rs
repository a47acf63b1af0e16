use crate::error::ParseSetupError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tree_sitter::Language;

/// Source language of a translation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Dialect {
    #[serde(rename = "c")]
    C,
    #[serde(rename = "c++")]
    Cpp,
    #[serde(rename = "objective-c")]
    ObjC,
    #[serde(rename = "objective-c++")]
    ObjCpp,
}

type ExtensionMapping = (&'static str, Dialect);

const EXTENSIONS: [ExtensionMapping; 12] = [
    ("c", Dialect::C),
    ("h", Dialect::C),
    ("cc", Dialect::Cpp),
    ("cp", Dialect::Cpp),
    ("cpp", Dialect::Cpp),
    ("cxx", Dialect::Cpp),
    ("c++", Dialect::Cpp),
    ("hh", Dialect::Cpp),
    ("hpp", Dialect::Cpp),
    ("hxx", Dialect::Cpp),
    ("m", Dialect::ObjC),
    ("mm", Dialect::ObjCpp),
];

impl Dialect {
    /// Infer the dialect from a (possibly virtual) file path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ParseSetupError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        EXTENSIONS
            .iter()
            .find(|(name, _)| *name == extension)
            .map(|(_, dialect)| *dialect)
            .ok_or_else(|| ParseSetupError::UnsupportedLanguage(path.display().to_string()))
    }

    /// Resolve a compiler `-x` language name.
    pub fn from_language_name(name: &str) -> Result<Self, ParseSetupError> {
        match name {
            "c" | "c-header" => Ok(Self::C),
            "c++" | "c++-header" => Ok(Self::Cpp),
            "objective-c" | "objective-c-header" => Ok(Self::ObjC),
            "objective-c++" | "objective-c++-header" => Ok(Self::ObjCpp),
            _ => Err(ParseSetupError::UnsupportedLanguage(name.to_string())),
        }
    }

    pub fn language_name(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "c++",
            Self::ObjC => "objective-c",
            Self::ObjCpp => "objective-c++",
        }
    }

    /// The grammar used to parse this dialect.
    ///
    /// There is no Objective-C++ grammar, so Objective-C++ is parsed as Objective-C.
    pub fn grammar(self) -> Language {
        match self {
            Self::C => tree_sitter_c::LANGUAGE.into(),
            Self::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            Self::ObjC | Self::ObjCpp => tree_sitter_objc::LANGUAGE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod from_path {
        use super::*;

        #[test]
        fn c_sources_and_headers() {
            assert_eq!(Dialect::from_path(Path::new("test.c")).unwrap(), Dialect::C);
            assert_eq!(Dialect::from_path(Path::new("test.h")).unwrap(), Dialect::C);
        }

        #[test]
        fn cpp_sources() {
            for path in ["a.cc", "a.cpp", "a.cxx", "a.hpp", "dir/a.hh"] {
                assert_eq!(Dialect::from_path(Path::new(path)).unwrap(), Dialect::Cpp);
            }
        }

        #[test]
        fn objc_sources() {
            assert_eq!(Dialect::from_path(Path::new("test.m")).unwrap(), Dialect::ObjC);
            assert_eq!(
                Dialect::from_path(Path::new("test.mm")).unwrap(),
                Dialect::ObjCpp
            );
        }

        #[test]
        fn extension_is_case_sensitive() {
            let result = Dialect::from_path(Path::new("test.M"));

            assert!(matches!(result, Err(ParseSetupError::UnsupportedLanguage(_))));
        }

        #[test]
        fn unknown_extension() {
            let result = Dialect::from_path(Path::new("notes.txt"));

            assert!(matches!(
                result,
                Err(ParseSetupError::UnsupportedLanguage(path)) if path == "notes.txt"
            ));
        }

        #[test]
        fn missing_extension() {
            let result = Dialect::from_path(Path::new("Makefile"));

            assert!(matches!(result, Err(ParseSetupError::UnsupportedLanguage(_))));
        }
    }

    mod from_language_name {
        use super::*;

        #[test]
        fn round_trips_language_names() {
            for dialect in [Dialect::C, Dialect::Cpp, Dialect::ObjC, Dialect::ObjCpp] {
                assert_eq!(
                    Dialect::from_language_name(dialect.language_name()).unwrap(),
                    dialect
                );
            }
        }

        #[test]
        fn header_variants() {
            assert_eq!(
                Dialect::from_language_name("objective-c-header").unwrap(),
                Dialect::ObjC
            );
        }

        #[test]
        fn unknown_language() {
            let result = Dialect::from_language_name("fortran");

            assert!(matches!(result, Err(ParseSetupError::UnsupportedLanguage(_))));
        }
    }

    #[test]
    fn objcpp_shares_objc_grammar() {
        assert_eq!(
            format!("{:?}", Dialect::ObjCpp.grammar()),
            format!("{:?}", Dialect::ObjC.grammar())
        );
    }
}

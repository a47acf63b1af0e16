#![cfg(test)]

use crate::cursor::{ChildVisitResult, Cursor};
use crate::error::ParseSetupError;
use crate::options::CreationOptions;
use crate::session::{SourceIndex, UnsavedFile};
use crate::translation_unit::TranslationUnit;
use tracing_subscriber::EnvFilter;

/// The path snippets are bound to when the test does not name one.
pub const DEFAULT_PATH: &str = "test.m";

/// A parsing session owned by a single test.
pub struct TestIndex {
    index: SourceIndex,
}

impl TestIndex {
    pub fn new() -> Self {
        Self::with_index(SourceIndex::new())
    }

    pub fn with_index(index: SourceIndex) -> Self {
        init_tracing();
        Self { index }
    }

    pub fn create_translation_unit(
        &mut self,
        source: &str,
    ) -> Result<TranslationUnit, ParseSetupError> {
        self.create_translation_unit_with_path(source, DEFAULT_PATH)
    }

    pub fn create_translation_unit_with_path(
        &mut self,
        source: &str,
        path: &str,
    ) -> Result<TranslationUnit, ParseSetupError> {
        self.create_translation_unit_with_options(source, path, CreationOptions::NONE)
    }

    pub fn create_translation_unit_with_options(
        &mut self,
        source: &str,
        path: &str,
        options: CreationOptions,
    ) -> Result<TranslationUnit, ParseSetupError> {
        self.index.parse(UnsavedFile::new(path, source), options)
    }
}

fn init_tracing() {
    // Another test may have installed the subscriber already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn setup_index() -> TestIndex {
    TestIndex::new()
}

/// Find the first cursor below the root, in depth-first source order, spelled exactly `spelling`.
pub fn find_cursor<'tu>(tu: &'tu TranslationUnit, spelling: &str) -> Option<Cursor<'tu>> {
    let mut found = None;
    tu.root_cursor().visit_children(|cursor, _parent| {
        if cursor.spelling() == spelling {
            found = Some(cursor);
            ChildVisitResult::Break
        } else {
            ChildVisitResult::Recurse
        }
    });
    found
}

pub trait CursorLookup {
    fn cursor_with_spelling(&self, spelling: &str) -> Option<Cursor<'_>>;
}

impl CursorLookup for TranslationUnit {
    fn cursor_with_spelling(&self, spelling: &str) -> Option<Cursor<'_>> {
        find_cursor(self, spelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;
    use crate::cursor::CursorKind;
    use crate::dialect::Dialect;
    use assertables::{assert_err, assert_none, assert_ok, assert_some};
    use std::path::Path;

    mod create_translation_unit {
        use super::*;

        #[test]
        fn explicit_path_is_kept() {
            let mut index = setup_index();

            let tu = index
                .create_translation_unit_with_options("int x;", "a.c", CreationOptions::NONE)
                .unwrap();

            assert_eq!(tu.path(), Path::new("a.c"));
            assert_eq!(tu.dialect(), Dialect::C);
        }

        #[test]
        fn default_path() {
            let mut index = setup_index();

            let tu = index.create_translation_unit("int x;").unwrap();

            assert_eq!(tu.path(), Path::new(DEFAULT_PATH));
            assert_eq!(tu.options(), CreationOptions::NONE);
        }

        #[test]
        fn shorter_forms_are_equivalent() {
            let mut index = setup_index();
            let source = "int alpha = 1; int beta = alpha;";

            let short = index.create_translation_unit(source).unwrap();
            let with_path = index
                .create_translation_unit_with_path(source, DEFAULT_PATH)
                .unwrap();
            let explicit = index
                .create_translation_unit_with_options(source, DEFAULT_PATH, CreationOptions::NONE)
                .unwrap();

            for tu in [&short, &with_path, &explicit] {
                assert_eq!(tu.path(), Path::new(DEFAULT_PATH));
                assert_eq!(tu.options(), CreationOptions::NONE);
                assert_eq!(tu.diagnostics(), short.diagnostics());
            }
            assert_eq!(
                format!("{:?}", short.root_cursor().children()),
                format!("{:?}", explicit.root_cursor().children())
            );
            assert_eq!(
                format!("{:?}", with_path.root_cursor().children()),
                format!("{:?}", explicit.root_cursor().children())
            );
        }

        #[test]
        fn options_are_applied() {
            let mut index = setup_index();

            let tu = index
                .create_translation_unit_with_options(
                    "int f(void) { int local = 0; return local; }",
                    "a.c",
                    CreationOptions::SKIP_FUNCTION_BODIES,
                )
                .unwrap();

            assert_some!(find_cursor(&tu, "f"));
            assert_none!(find_cursor(&tu, "local"));
        }

        #[test]
        fn empty_source() {
            let mut index = setup_index();

            let result = index.create_translation_unit("");

            assert_ok!(&result);
            assert!(result.unwrap().diagnostics().is_empty());
        }

        #[test]
        fn invalid_source_still_yields_translation_unit() {
            let mut index = setup_index();

            let result = index.create_translation_unit("int x = ;");

            assert_ok!(&result);
            assert!(result.unwrap().has_errors());
        }

        #[test]
        fn unsupported_path() {
            let mut index = setup_index();

            let result = index.create_translation_unit_with_path("int x;", "notes.txt");

            assert_err!(&result);
            assert!(matches!(
                result,
                Err(ParseSetupError::UnsupportedLanguage(_))
            ));
        }

        #[test]
        fn invalid_options() {
            let mut index = setup_index();

            let result = index.create_translation_unit_with_options(
                "int x;",
                "a.c",
                CreationOptions::from_bits_retain(0x8000),
            );

            assert!(matches!(result, Err(ParseSetupError::InvalidOptions(0x8000))));
        }

        #[test]
        fn configured_index() {
            let config = IndexConfig::from_toml_str(r#"arguments = ["-x", "c++"]"#).unwrap();
            let mut index = TestIndex::with_index(SourceIndex::with_config(config).unwrap());

            let tu = index.create_translation_unit("class Widget {};").unwrap();

            assert_eq!(tu.dialect(), Dialect::Cpp);
            assert_eq!(tu.path(), Path::new(DEFAULT_PATH));
        }
    }

    mod find_cursor {
        use super::*;

        #[test]
        fn single_match() {
            let mut index = setup_index();
            let tu = index.create_translation_unit("int foo;").unwrap();

            let cursor = find_cursor(&tu, "foo").unwrap();

            assert_eq!(cursor.spelling(), "foo");
            assert_eq!(cursor.kind(), CursorKind::VarDecl);
        }

        #[test]
        fn no_match() {
            let mut index = setup_index();
            let tu = index.create_translation_unit("int foo;").unwrap();

            assert_none!(find_cursor(&tu, "doesNotExist"));
        }

        #[test]
        fn first_match_in_source_order() {
            let mut index = setup_index();
            let tu = index
                .create_translation_unit_with_path("int dup;\nvoid f(void) { int dup; }", "a.c")
                .unwrap();

            let first = find_cursor(&tu, "dup").unwrap();
            let again = find_cursor(&tu, "dup").unwrap();

            assert_eq!(first.location().line, 1);
            assert_eq!(first, again);
        }

        #[test]
        fn parent_before_children() {
            let mut index = setup_index();
            let tu = index
                .create_translation_unit_with_path("struct S { int S; };", "a.c")
                .unwrap();

            let cursor = find_cursor(&tu, "S").unwrap();

            assert_eq!(cursor.kind(), CursorKind::StructDecl);
        }

        #[test]
        fn nested_scope() {
            let mut index = setup_index();
            let tu = index
                .create_translation_unit_with_path(
                    "namespace outer { struct Inner { void deep(); }; }",
                    "a.cpp",
                )
                .unwrap();

            let cursor = find_cursor(&tu, "deep").unwrap();

            assert_eq!(cursor.kind(), CursorKind::CXXMethod);
        }

        #[test]
        fn case_sensitive() {
            let mut index = setup_index();
            let tu = index.create_translation_unit("int foo;").unwrap();

            assert_none!(find_cursor(&tu, "Foo"));
            assert_none!(find_cursor(&tu, "FOO"));
            assert_some!(find_cursor(&tu, "foo"));
        }

        #[test]
        fn exact_match_only() {
            let mut index = setup_index();
            let tu = index.create_translation_unit("int foobar;").unwrap();

            assert_none!(find_cursor(&tu, "foo"));
            assert_none!(find_cursor(&tu, "bar"));
        }

        #[test]
        fn empty_translation_unit() {
            let mut index = setup_index();
            let tu = index.create_translation_unit("").unwrap();

            assert_none!(find_cursor(&tu, "foo"));
            assert_none!(find_cursor(&tu, DEFAULT_PATH));
            assert_none!(find_cursor(&tu, ""));
        }

        #[test]
        fn root_is_not_a_candidate() {
            let mut index = setup_index();
            let tu = index.create_translation_unit("int foo;").unwrap();

            assert_none!(find_cursor(&tu, DEFAULT_PATH));
        }

        #[test]
        fn invalid_source_does_not_fail() {
            let mut index = setup_index();
            let tu = index.create_translation_unit("int x = ;").unwrap();

            assert_none!(find_cursor(&tu, "doesNotExist"));
        }

        #[test]
        fn cursor_belongs_to_translation_unit() {
            let mut index = setup_index();
            let first = index.create_translation_unit("int foo;").unwrap();
            let second = index.create_translation_unit("int foo;").unwrap();

            let cursor = find_cursor(&second, "foo").unwrap();

            assert!(std::ptr::eq(cursor.translation_unit(), &second));
            assert!(!std::ptr::eq(cursor.translation_unit(), &first));
        }

        #[test]
        fn does_not_mutate() {
            let mut index = setup_index();
            let tu = index.create_translation_unit("int a; int b;").unwrap();
            let before = format!("{:?}", tu.root_cursor().children());

            find_cursor(&tu, "b");

            assert_eq!(format!("{:?}", tu.root_cursor().children()), before);
        }
    }

    #[test]
    fn cursor_lookup() {
        let mut index = setup_index();
        let tu = index.create_translation_unit("int foo;").unwrap();

        assert_eq!(tu.cursor_with_spelling("foo"), find_cursor(&tu, "foo"));
        assert_none!(tu.cursor_with_spelling("bar"));
    }
}

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Flags controlling how a translation unit is built.
///
/// The bit values match libclang's `CXTranslationUnit_Flags` so option sets can be
/// shared with code written against the C API.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CreationOptions(u32);

impl CreationOptions {
    /// A standard parse.
    pub const NONE: Self = Self(0);

    /// Expose `#include` and `#define` as cursors.
    pub const DETAILED_PREPROCESSING_RECORD: Self = Self(0x01);

    /// Omit the bodies of function and method definitions.
    pub const SKIP_FUNCTION_BODIES: Self = Self(0x40);

    /// Attach the comment preceding a declaration to its cursor.
    pub const INCLUDE_BRIEF_COMMENTS: Self = Self(0x80);

    const ALL: u32 = Self::DETAILED_PREPROCESSING_RECORD.0
        | Self::SKIP_FUNCTION_BODIES.0
        | Self::INCLUDE_BRIEF_COMMENTS.0;

    /// Build an option set from raw bits, rejecting unknown flags.
    pub fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::ALL == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Build an option set from raw bits, keeping unknown flags.
    ///
    /// Unknown flags are reported when the options reach a parse.
    pub fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_valid(self) -> bool {
        self.0 & !Self::ALL == 0
    }
}

impl BitOr for CreationOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CreationOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for CreationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(CreationOptions, &str); 3] = [
            (
                CreationOptions::DETAILED_PREPROCESSING_RECORD,
                "DETAILED_PREPROCESSING_RECORD",
            ),
            (CreationOptions::SKIP_FUNCTION_BODIES, "SKIP_FUNCTION_BODIES"),
            (
                CreationOptions::INCLUDE_BRIEF_COMMENTS,
                "INCLUDE_BRIEF_COMMENTS",
            ),
        ];

        let mut names: Vec<String> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| name.to_string())
            .collect();
        let unknown = self.0 & !Self::ALL;
        if unknown != 0 {
            names.push(format!("{:#x}", unknown));
        }
        if names.is_empty() {
            names.push("NONE".to_string());
        }
        write!(f, "CreationOptions({})", names.join(" | "))
    }
}

//! Indentation configuration for rendered scripts.

/// Indentation unit applied once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Fixed number of spaces; widths above 8 are clamped.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation used by Gradle build scripts.
    pub const GRADLE: Self = Self::Spaces(4);

    /// One indent level as text.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "        ";
        match *self {
            Self::Spaces(width) => &SPACES[..usize::from(width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// Prefix for the given nesting level.
    pub fn repeat(&self, level: usize) -> String {
        self.as_str().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GRADLE
    }
}

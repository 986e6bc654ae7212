//! Prettifier configuration

/// How values are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrettifierConfig {
    /// Nesting levels rendered structurally before falling back to the shallow form
    pub max_depth: usize,
    /// Maximum elements shown per collection; the rest collapse into `...`
    pub size_limit: Option<usize>,
    /// Wrap strings in double quotes and chars in single quotes
    pub quote_strings: bool,
}

impl Default for PrettifierConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            size_limit: None,
            quote_strings: true,
        }
    }
}

impl PrettifierConfig {
    /// Strings and chars rendered bare.
    pub fn basic() -> Self {
        Self {
            quote_strings: false,
            ..Default::default()
        }
    }

    /// Collections cut off after `limit` elements.
    pub fn truncated(limit: usize) -> Self {
        Self {
            size_limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(PrettifierConfig::default().quote_strings);
        assert!(!PrettifierConfig::basic().quote_strings);
        assert_eq!(PrettifierConfig::truncated(3).size_limit, Some(3));
        assert_eq!(PrettifierConfig::basic().with_max_depth(2).max_depth, 2);
    }
}

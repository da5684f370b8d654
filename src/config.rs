//! Configuration for statistics and rendering.

/// Default number of entries in the font statistics report.
pub const DEFAULT_TOP_FONTS: usize = 5;

/// Rendering and reporting configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of font sizes listed by the statistics report.
    pub top_fonts: usize,

    /// Emit a `*** Page N ***` comment before each page.
    pub page_comments: bool,

    /// Emit the doctype and embedded style rules before the title.
    pub stylesheet: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            top_fonts: DEFAULT_TOP_FONTS,
            page_comments: true,
            stylesheet: true,
        }
    }

    /// Set the number of font sizes to report.
    pub fn with_top_fonts(mut self, n: usize) -> Self {
        self.top_fonts = n;
        self
    }

    /// Enable page separator comments.
    pub fn with_page_comments(mut self, enable: bool) -> Self {
        self.page_comments = enable;
        self
    }

    /// Enable the embedded stylesheet.
    pub fn with_stylesheet(mut self, enable: bool) -> Self {
        self.stylesheet = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.top_fonts, 5);
        assert!(config.page_comments);
        assert!(config.stylesheet);
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::new()
            .with_top_fonts(10)
            .with_page_comments(false)
            .with_stylesheet(false);
        assert_eq!(config.top_fonts, 10);
        assert!(!config.page_comments);
        assert!(!config.stylesheet);
    }
}

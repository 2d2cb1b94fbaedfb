/// Build configuration for widget-tree materialization.
///
/// Carried by the construction context and consulted while a node applies
/// its queued styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub style_diagnostics: StyleDiagnostics,
}

impl Config {
    /// Configuration that reports every skipped style.
    pub fn diagnostic() -> Self {
        Self {
            style_diagnostics: StyleDiagnostics::Warn,
        }
    }

    pub fn with_style_diagnostics(mut self, diagnostics: StyleDiagnostics) -> Self {
        self.style_diagnostics = diagnostics;
        self
    }
}

/// What to do when a style does not fit the resolved layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleDiagnostics {
    /// Skip the style without any signal.
    #[default]
    Silent,
    /// Skip the style and emit a `tracing` warning naming the style family
    /// and the layout parameters it was offered.
    Warn,
}

impl StyleDiagnostics {
    pub fn is_enabled(self) -> bool {
        matches!(self, StyleDiagnostics::Warn)
    }
}

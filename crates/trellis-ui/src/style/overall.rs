//! The overall style: generic sizing plus optional family sub-styles.

use super::{
    FrameStyle, LinearStyle, MarginStyle, PaddingStyle, RelativeStyle, RowStyle, StyleOutcome,
    TextStyle,
};
use crate::toolkit::{LayoutParams, View};

/// Width/height override, minimum size, and lazily created family styles.
///
/// Generic fields are applied first, then each present family style in a
/// fixed order: frame, linear, margin, padding, relative, row, text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverallStyle {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,
    frame: Option<FrameStyle>,
    linear: Option<LinearStyle>,
    margin: Option<MarginStyle>,
    padding: Option<PaddingStyle>,
    relative: Option<RelativeStyle>,
    row: Option<RowStyle>,
    text: Option<TextStyle>,
}

impl OverallStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn min_width(mut self, width: i32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn min_height(mut self, height: i32) -> Self {
        self.min_height = Some(height);
        self
    }

    pub fn frame(mut self, f: impl FnOnce(FrameStyle) -> FrameStyle) -> Self {
        self.frame = Some(f(self.frame.take().unwrap_or_default()));
        self
    }

    pub fn linear(mut self, f: impl FnOnce(LinearStyle) -> LinearStyle) -> Self {
        self.linear = Some(f(self.linear.take().unwrap_or_default()));
        self
    }

    pub fn margin(mut self, f: impl FnOnce(MarginStyle) -> MarginStyle) -> Self {
        self.margin = Some(f(self.margin.take().unwrap_or_default()));
        self
    }

    pub fn padding(mut self, f: impl FnOnce(PaddingStyle) -> PaddingStyle) -> Self {
        self.padding = Some(f(self.padding.take().unwrap_or_default()));
        self
    }

    pub fn relative(mut self, f: impl FnOnce(RelativeStyle) -> RelativeStyle) -> Self {
        self.relative = Some(f(self.relative.take().unwrap_or_default()));
        self
    }

    pub fn row(mut self, f: impl FnOnce(RowStyle) -> RowStyle) -> Self {
        self.row = Some(f(self.row.take().unwrap_or_default()));
        self
    }

    pub fn text(mut self, f: impl FnOnce(TextStyle) -> TextStyle) -> Self {
        self.text = Some(f(self.text.take().unwrap_or_default()));
        self
    }

    /// Frame sub-style, created on first access.
    pub fn frame_mut(&mut self) -> &mut FrameStyle {
        self.frame.get_or_insert_with(FrameStyle::default)
    }

    pub fn linear_mut(&mut self) -> &mut LinearStyle {
        self.linear.get_or_insert_with(LinearStyle::default)
    }

    pub fn margin_mut(&mut self) -> &mut MarginStyle {
        self.margin.get_or_insert_with(MarginStyle::default)
    }

    pub fn padding_mut(&mut self) -> &mut PaddingStyle {
        self.padding.get_or_insert_with(PaddingStyle::default)
    }

    pub fn relative_mut(&mut self) -> &mut RelativeStyle {
        self.relative.get_or_insert_with(RelativeStyle::default)
    }

    pub fn row_mut(&mut self) -> &mut RowStyle {
        self.row.get_or_insert_with(RowStyle::default)
    }

    pub fn text_mut(&mut self) -> &mut TextStyle {
        self.text.get_or_insert_with(TextStyle::default)
    }

    fn has_generic_fields(&self) -> bool {
        self.width.is_some()
            || self.height.is_some()
            || self.min_width.is_some()
            || self.min_height.is_some()
    }

    fn has_family_styles(&self) -> bool {
        self.frame.is_some()
            || self.linear.is_some()
            || self.margin.is_some()
            || self.padding.is_some()
            || self.relative.is_some()
            || self.row.is_some()
            || self.text.is_some()
    }

    /// Skipped only when every present family style was skipped and no
    /// generic field is set.
    pub fn apply(&self, view: &mut dyn View, params: &mut dyn LayoutParams) -> StyleOutcome {
        if let Some(width) = self.width {
            params.set_width(width);
        }
        if let Some(height) = self.height {
            params.set_height(height);
        }
        if let Some(width) = self.min_width {
            view.set_minimum_width(width);
        }
        if let Some(height) = self.min_height {
            view.set_minimum_height(height);
        }

        let mut outcome = if self.has_generic_fields() || !self.has_family_styles() {
            StyleOutcome::Applied
        } else {
            StyleOutcome::Skipped
        };
        if let Some(frame) = &self.frame {
            outcome = outcome.or(frame.apply(view, params));
        }
        if let Some(linear) = &self.linear {
            outcome = outcome.or(linear.apply(view, params));
        }
        if let Some(margin) = &self.margin {
            outcome = outcome.or(margin.apply(view, params));
        }
        if let Some(padding) = &self.padding {
            outcome = outcome.or(padding.apply(view, params));
        }
        if let Some(relative) = &self.relative {
            outcome = outcome.or(relative.apply(view, params));
        }
        if let Some(row) = &self.row {
            outcome = outcome.or(row.apply(view, params));
        }
        if let Some(text) = &self.text {
            outcome = outcome.or(text.apply(view, params));
        }
        outcome
    }
}

//! Family styles.
//!
//! Each family style targets one kind of layout parameters (or, for padding
//! and text, a capability of the view). Applying a style to parameters of an
//! unrelated family changes nothing and reports [`StyleOutcome::Skipped`].

use super::StyleOutcome;
use crate::toolkit::{
    Color, FrameLayoutParams, Gravity, LayoutParams, RelativeRule, TableRowLayoutParams,
    TextAppearance, View, RULE_TRUE,
};
use indexmap::IndexMap;

/// Gravity for children of a frame layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStyle {
    pub gravity: Option<Gravity>,
}

impl FrameStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn apply(&self, _view: &mut dyn View, params: &mut dyn LayoutParams) -> StyleOutcome {
        let Some(frame) = params.as_any_mut().downcast_mut::<FrameLayoutParams>() else {
            return StyleOutcome::Skipped;
        };
        if let Some(gravity) = self.gravity {
            frame.gravity = Some(gravity);
        }
        StyleOutcome::Applied
    }
}

/// Gravity and weight for children of linear layouts, including table rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearStyle {
    pub gravity: Option<Gravity>,
    pub weight: Option<f32>,
}

impl LinearStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn apply(&self, _view: &mut dyn View, params: &mut dyn LayoutParams) -> StyleOutcome {
        let Some(linear) = params.as_linear_mut() else {
            return StyleOutcome::Skipped;
        };
        if let Some(gravity) = self.gravity {
            linear.gravity = Some(gravity);
        }
        if let Some(weight) = self.weight {
            linear.weight = weight;
        }
        StyleOutcome::Applied
    }
}

/// Margins for any parameters that carry them.
///
/// `all` is applied first, so a specific side always wins over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarginStyle {
    pub all: Option<i32>,
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
}

impl MarginStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(mut self, margin: i32) -> Self {
        self.all = Some(margin);
        self
    }

    pub fn left(mut self, margin: i32) -> Self {
        self.left = Some(margin);
        self
    }

    pub fn top(mut self, margin: i32) -> Self {
        self.top = Some(margin);
        self
    }

    pub fn right(mut self, margin: i32) -> Self {
        self.right = Some(margin);
        self
    }

    pub fn bottom(mut self, margin: i32) -> Self {
        self.bottom = Some(margin);
        self
    }

    pub fn apply(&self, _view: &mut dyn View, params: &mut dyn LayoutParams) -> StyleOutcome {
        let Some(margins) = params.margins_mut() else {
            return StyleOutcome::Skipped;
        };
        if let Some(all) = self.all {
            margins.left = all;
            margins.top = all;
            margins.right = all;
            margins.bottom = all;
        }
        if let Some(left) = self.left {
            margins.left = left;
        }
        if let Some(top) = self.top {
            margins.top = top;
        }
        if let Some(right) = self.right {
            margins.right = right;
        }
        if let Some(bottom) = self.bottom {
            margins.bottom = bottom;
        }
        StyleOutcome::Applied
    }
}

/// Padding of the view itself. Compatible with every parameter family.
///
/// Each side resolves to its own value, else `all`, else the current
/// padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaddingStyle {
    pub all: Option<i32>,
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
}

impl PaddingStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(mut self, padding: i32) -> Self {
        self.all = Some(padding);
        self
    }

    pub fn left(mut self, padding: i32) -> Self {
        self.left = Some(padding);
        self
    }

    pub fn top(mut self, padding: i32) -> Self {
        self.top = Some(padding);
        self
    }

    pub fn right(mut self, padding: i32) -> Self {
        self.right = Some(padding);
        self
    }

    pub fn bottom(mut self, padding: i32) -> Self {
        self.bottom = Some(padding);
        self
    }

    pub fn apply(&self, view: &mut dyn View, _params: &mut dyn LayoutParams) -> StyleOutcome {
        let current = view.padding();
        let side = |value: Option<i32>, fallback: i32| value.or(self.all).unwrap_or(fallback);
        view.set_padding(
            side(self.left, current.left),
            side(self.top, current.top),
            side(self.right, current.right),
            side(self.bottom, current.bottom),
        );
        StyleOutcome::Applied
    }
}

/// Positioning rules for children of a relative layout.
///
/// Rules are copied onto the parameters in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelativeStyle {
    pub rules: IndexMap<RelativeRule, i32>,
}

impl RelativeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position relative to the sibling with id `anchor`.
    pub fn anchor(mut self, rule: RelativeRule, anchor: i32) -> Self {
        self.rules.insert(rule, anchor);
        self
    }

    /// Set a boolean parent/centering rule.
    pub fn rule(mut self, rule: RelativeRule) -> Self {
        self.rules.insert(rule, RULE_TRUE);
        self
    }

    pub fn above(self, anchor: i32) -> Self {
        self.anchor(RelativeRule::Above, anchor)
    }

    pub fn below(self, anchor: i32) -> Self {
        self.anchor(RelativeRule::Below, anchor)
    }

    pub fn left_of(self, anchor: i32) -> Self {
        self.anchor(RelativeRule::LeftOf, anchor)
    }

    pub fn right_of(self, anchor: i32) -> Self {
        self.anchor(RelativeRule::RightOf, anchor)
    }

    pub fn center_in_parent(self) -> Self {
        self.rule(RelativeRule::CenterInParent)
    }

    pub fn apply(&self, _view: &mut dyn View, params: &mut dyn LayoutParams) -> StyleOutcome {
        let Some(relative) = params
            .as_any_mut()
            .downcast_mut::<crate::toolkit::RelativeLayoutParams>()
        else {
            return StyleOutcome::Skipped;
        };
        for (&rule, &value) in &self.rules {
            relative.add_rule_anchor(rule, value);
        }
        StyleOutcome::Applied
    }
}

/// Column placement for cells of a table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowStyle {
    pub column: Option<i32>,
    pub span: Option<i32>,
}

impl RowStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, column: i32) -> Self {
        self.column = Some(column);
        self
    }

    pub fn span(mut self, span: i32) -> Self {
        self.span = Some(span);
        self
    }

    pub fn apply(&self, _view: &mut dyn View, params: &mut dyn LayoutParams) -> StyleOutcome {
        let Some(row) = params.as_any_mut().downcast_mut::<TableRowLayoutParams>() else {
            return StyleOutcome::Skipped;
        };
        if let Some(column) = self.column {
            row.column = column;
        }
        if let Some(span) = self.span {
            row.span = span;
        }
        StyleOutcome::Applied
    }
}

/// Text appearance and color. Requires a text-bearing view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub appearance: Option<TextAppearance>,
    pub color: Option<Color>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appearance(mut self, appearance: TextAppearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn apply(&self, view: &mut dyn View, _params: &mut dyn LayoutParams) -> StyleOutcome {
        let Some(text) = view.as_text_mut() else {
            return StyleOutcome::Skipped;
        };
        if let Some(appearance) = self.appearance {
            text.set_text_appearance(appearance);
        }
        if let Some(color) = self.color {
            text.set_text_color(color);
        }
        StyleOutcome::Applied
    }
}

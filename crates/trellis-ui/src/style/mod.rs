//! Composable style engine.
//!
//! A [`Style`] is a value describing a mutation of a widget and its layout
//! parameters. Styles are queued on a node and applied at materialization,
//! after the layout parameters are resolved and before they are assigned to
//! the widget. Applying a style never fails: a style whose family does not
//! match the parameters reports [`StyleOutcome::Skipped`] and changes
//! nothing.
//!
//! # Example
//!
//! ```ignore
//! let card = element::<TextView>(FILL_PARENT, WRAP_CONTENT)
//!     .style(MarginStyle::new().all(8))
//!     .style(
//!         OverallStyle::new()
//!             .min_height(48)
//!             .linear(|l| l.weight(1.0))
//!             .text(|t| t.appearance(TextAppearance::Medium)),
//!     );
//! ```

mod families;
mod overall;

pub use families::*;
pub use overall::*;

use crate::toolkit::{downcast_family_mut, short_type_name, LayoutParams, View};
use std::fmt;
use std::rc::Rc;

/// Result of applying a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOutcome {
    Applied,
    Skipped,
}

impl StyleOutcome {
    pub fn is_applied(self) -> bool {
        self == StyleOutcome::Applied
    }

    /// `Applied` if either side is.
    pub fn or(self, other: StyleOutcome) -> StyleOutcome {
        if self.is_applied() || other.is_applied() {
            StyleOutcome::Applied
        } else {
            StyleOutcome::Skipped
        }
    }
}

type CustomApply = Rc<dyn Fn(&mut dyn View, &mut dyn LayoutParams) -> StyleOutcome>;

/// Caller-supplied mutation typed to one layout-parameter family.
///
/// Fires when the parameters are that type or extend it, so a style for
/// [`MarginLayoutParams`](crate::toolkit::MarginLayoutParams) reaches the
/// margins of linear, frame, relative and table-row parameters.
#[derive(Clone)]
pub struct CustomStyle {
    target: &'static str,
    apply: CustomApply,
}

impl CustomStyle {
    pub fn for_params<T: LayoutParams>(f: impl Fn(&mut dyn View, &mut T) + 'static) -> Self {
        Self {
            target: short_type_name::<T>(),
            apply: Rc::new(move |view: &mut dyn View, params: &mut dyn LayoutParams| {
                match downcast_family_mut::<T>(params) {
                    Some(params) => {
                        f(view, params);
                        StyleOutcome::Applied
                    }
                    None => StyleOutcome::Skipped,
                }
            }),
        }
    }

    /// Name of the parameter type this style targets.
    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn apply(&self, view: &mut dyn View, params: &mut dyn LayoutParams) -> StyleOutcome {
        (self.apply)(view, params)
    }
}

impl fmt::Debug for CustomStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomStyle")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// A style of any family.
#[derive(Debug, Clone)]
pub enum Style {
    Overall(OverallStyle),
    Frame(FrameStyle),
    Linear(LinearStyle),
    Margin(MarginStyle),
    Padding(PaddingStyle),
    Relative(RelativeStyle),
    Row(RowStyle),
    Text(TextStyle),
    Custom(CustomStyle),
}

impl Style {
    /// Custom style for parameters of type `T`.
    pub fn for_params<T: LayoutParams>(f: impl Fn(&mut dyn View, &mut T) + 'static) -> Self {
        Style::Custom(CustomStyle::for_params(f))
    }

    /// Family name for diagnostics.
    pub fn family(&self) -> &'static str {
        match self {
            Style::Overall(_) => "overall",
            Style::Frame(_) => "frame",
            Style::Linear(_) => "linear",
            Style::Margin(_) => "margin",
            Style::Padding(_) => "padding",
            Style::Relative(_) => "relative",
            Style::Row(_) => "row",
            Style::Text(_) => "text",
            Style::Custom(custom) => custom.target(),
        }
    }

    pub fn apply(&self, view: &mut dyn View, params: &mut dyn LayoutParams) -> StyleOutcome {
        match self {
            Style::Overall(style) => style.apply(view, params),
            Style::Frame(style) => style.apply(view, params),
            Style::Linear(style) => style.apply(view, params),
            Style::Margin(style) => style.apply(view, params),
            Style::Padding(style) => style.apply(view, params),
            Style::Relative(style) => style.apply(view, params),
            Style::Row(style) => style.apply(view, params),
            Style::Text(style) => style.apply(view, params),
            Style::Custom(style) => style.apply(view, params),
        }
    }
}

macro_rules! impl_from_family {
    ($($family:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$family> for Style {
                fn from(style: $family) -> Self {
                    Style::$variant(style)
                }
            }
        )+
    };
}

impl_from_family!(
    OverallStyle => Overall,
    FrameStyle => Frame,
    LinearStyle => Linear,
    MarginStyle => Margin,
    PaddingStyle => Padding,
    RelativeStyle => Relative,
    RowStyle => Row,
    TextStyle => Text,
    CustomStyle => Custom,
);

//! Leaf widgets of the reference toolkit.

use super::{CheckState, Context, TextState, TextWidget, View, ViewCore};
use crate::view_boilerplate;

// ---------------------------------------------------------------------------
// Typed capabilities
// ---------------------------------------------------------------------------

/// Widgets with a text label. Enables the text setters on nodes.
pub trait HasText: View {
    fn text_state(&self) -> &TextState;

    fn text_state_mut(&mut self) -> &mut TextState;
}

/// Compound buttons with a checked state.
pub trait HasCheckState: View {
    fn check_state(&self) -> &CheckState;

    fn check_state_mut(&mut self) -> &mut CheckState;
}

/// Widgets showing an image resource.
pub trait HasImage: View {
    fn image_resource(&self) -> Option<i32>;

    fn set_image_resource(&mut self, resource: i32);
}

/// Widgets showing a progress value.
pub trait HasProgress: View {
    fn progress(&self) -> i32;

    fn set_progress(&mut self, progress: i32);
}

macro_rules! text_capability {
    () => {
        fn as_text(&self) -> Option<&dyn TextWidget> {
            Some(&self.text)
        }

        fn as_text_mut(&mut self) -> Option<&mut dyn TextWidget> {
            Some(&mut self.text)
        }
    };
}

macro_rules! impl_has_text {
    ($($ty:ty),+) => {
        $(
            impl HasText for $ty {
                fn text_state(&self) -> &TextState {
                    &self.text
                }

                fn text_state_mut(&mut self) -> &mut TextState {
                    &mut self.text
                }
            }
        )+
    };
}

macro_rules! impl_has_check_state {
    ($($ty:ty),+) => {
        $(
            impl HasCheckState for $ty {
                fn check_state(&self) -> &CheckState {
                    &self.check
                }

                fn check_state_mut(&mut self) -> &mut CheckState {
                    &mut self.check
                }
            }
        )+
    };
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

/// A bare view with no content.
#[derive(Debug, Default)]
pub struct PlainView {
    pub core: ViewCore,
}

impl View for PlainView {
    view_boilerplate!();

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }
}

/// Read-only text label.
#[derive(Debug, Default)]
pub struct TextView {
    pub core: ViewCore,
    pub text: TextState,
}

impl View for TextView {
    view_boilerplate!();
    text_capability!();

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }
}

#[derive(Debug, Default)]
pub struct Button {
    pub core: ViewCore,
    pub text: TextState,
}

impl View for Button {
    view_boilerplate!();
    text_capability!();

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }
}

/// Editable text field.
#[derive(Debug, Default)]
pub struct EditText {
    pub core: ViewCore,
    pub text: TextState,
}

impl View for EditText {
    view_boilerplate!();
    text_capability!();

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }
}

#[derive(Debug, Default)]
pub struct CheckBox {
    pub core: ViewCore,
    pub text: TextState,
    pub check: CheckState,
}

impl View for CheckBox {
    view_boilerplate!();
    text_capability!();

    fn as_checkable_mut(&mut self) -> Option<&mut CheckState> {
        Some(&mut self.check)
    }

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }
}

/// A check button that belongs to a radio group.
#[derive(Debug, Default)]
pub struct RadioButton {
    pub core: ViewCore,
    pub text: TextState,
    pub check: CheckState,
}

impl View for RadioButton {
    view_boilerplate!();
    text_capability!();

    fn as_checkable_mut(&mut self) -> Option<&mut CheckState> {
        Some(&mut self.check)
    }

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }
}

#[derive(Debug, Default)]
pub struct ImageView {
    pub core: ViewCore,
    pub resource: Option<i32>,
}

impl View for ImageView {
    view_boilerplate!();

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }
}

impl HasImage for ImageView {
    fn image_resource(&self) -> Option<i32> {
        self.resource
    }

    fn set_image_resource(&mut self, resource: i32) {
        self.resource = Some(resource);
    }
}

/// Determinate progress indicator. Progress is clamped to `0..=max`.
#[derive(Debug)]
pub struct ProgressBar {
    pub core: ViewCore,
    progress: i32,
    max: i32,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            core: ViewCore::default(),
            progress: 0,
            max: 100,
        }
    }
}

impl ProgressBar {
    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(0);
        self.progress = self.progress.min(self.max);
    }
}

impl View for ProgressBar {
    view_boilerplate!();

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }
}

impl HasProgress for ProgressBar {
    fn progress(&self) -> i32 {
        self.progress
    }

    fn set_progress(&mut self, progress: i32) {
        self.progress = progress.clamp(0, self.max);
    }
}

impl_has_text!(TextView, Button, EditText, CheckBox, RadioButton);
impl_has_check_state!(CheckBox, RadioButton);

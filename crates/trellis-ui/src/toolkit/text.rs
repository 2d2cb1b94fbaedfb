//! Text and checked-state capabilities.

use std::fmt;
use std::rc::Rc;

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let value = u32::from_str_radix(digits, 16).ok()?;
        let channel = |shift: u32| ((value >> shift) & 0xff) as u8;
        match digits.len() {
            6 => Some(Self::rgb(channel(16), channel(8), channel(0))),
            8 => Some(Self::rgba(channel(16), channel(8), channel(0), channel(24))),
            _ => None,
        }
    }
}

/// Predefined text appearances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAppearance {
    Small,
    Medium,
    Large,
    SmallInverse,
    MediumInverse,
    LargeInverse,
}

impl TextAppearance {
    /// Nominal text size in scaled pixels.
    pub fn size(self) -> f32 {
        match self {
            TextAppearance::Small | TextAppearance::SmallInverse => 14.0,
            TextAppearance::Medium | TextAppearance::MediumInverse => 18.0,
            TextAppearance::Large | TextAppearance::LargeInverse => 22.0,
        }
    }

    pub fn is_inverse(self) -> bool {
        matches!(
            self,
            TextAppearance::SmallInverse | TextAppearance::MediumInverse | TextAppearance::LargeInverse
        )
    }
}

/// Capability: a widget that displays text.
pub trait TextWidget {
    fn text(&self) -> &str;

    fn set_text(&mut self, text: String);

    fn text_color(&self) -> Option<Color>;

    fn set_text_color(&mut self, color: Color);

    fn text_appearance(&self) -> Option<TextAppearance>;

    fn set_text_appearance(&mut self, appearance: TextAppearance);

    fn hint(&self) -> Option<&str>;

    fn set_hint(&mut self, hint: String);
}

/// Text state shared by every text-bearing widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextState {
    pub text: String,
    pub color: Option<Color>,
    pub appearance: Option<TextAppearance>,
    pub hint: Option<String>,
}

impl TextWidget for TextState {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn text_color(&self) -> Option<Color> {
        self.color
    }

    fn set_text_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    fn text_appearance(&self) -> Option<TextAppearance> {
        self.appearance
    }

    fn set_text_appearance(&mut self, appearance: TextAppearance) {
        self.appearance = Some(appearance);
    }

    fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    fn set_hint(&mut self, hint: String) {
        self.hint = Some(hint);
    }
}

/// Callback fired with the new checked value.
pub type CheckedChangeListener = Rc<dyn Fn(bool)>;

/// Checked state of compound buttons.
#[derive(Default)]
pub struct CheckState {
    checked: bool,
    listener: Option<CheckedChangeListener>,
}

impl CheckState {
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Update the state, notifying the listener only on change.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked == checked {
            return;
        }
        self.checked = checked;
        if let Some(listener) = self.listener.clone() {
            listener(checked);
        }
    }

    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    pub fn set_on_checked_change_listener(&mut self, listener: CheckedChangeListener) {
        self.listener = Some(listener);
    }
}

impl fmt::Debug for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckState")
            .field("checked", &self.checked)
            .field("listener", &self.listener.as_ref().map(|_| "..."))
            .finish()
    }
}

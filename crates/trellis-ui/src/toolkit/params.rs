//! Layout-parameter families.
//!
//! Each container type dictates the concrete parameter type its children
//! carry. Families share a small trait so the style engine can ask for the
//! pieces it knows how to mutate (margins, linear weight) without knowing the
//! concrete type.

use bitflags::bitflags;
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;

/// Per-side spacing, used for both margins and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}

bitflags! {
    /// Placement of a child within the space its parent gives it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Gravity: u32 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
        const CENTER_HORIZONTAL = 1 << 4;
        const CENTER_VERTICAL = 1 << 5;
        const FILL_HORIZONTAL = 1 << 6;
        const FILL_VERTICAL = 1 << 7;
        const START = 1 << 8;
        const END = 1 << 9;
        const CENTER = Self::CENTER_HORIZONTAL.bits() | Self::CENTER_VERTICAL.bits();
        const FILL = Self::FILL_HORIZONTAL.bits() | Self::FILL_VERTICAL.bits();
    }
}

/// Common surface of every layout-parameter type.
pub trait LayoutParams: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn base(&self) -> &BaseLayoutParams;

    fn base_mut(&mut self) -> &mut BaseLayoutParams;

    /// Family name for diagnostics.
    fn family(&self) -> &'static str;

    fn width(&self) -> i32 {
        self.base().width
    }

    fn height(&self) -> i32 {
        self.base().height
    }

    fn set_width(&mut self, width: i32) {
        self.base_mut().width = width;
    }

    fn set_height(&mut self, height: i32) {
        self.base_mut().height = height;
    }

    /// Margins, for families that support them.
    fn margins(&self) -> Option<&Insets> {
        None
    }

    fn margins_mut(&mut self) -> Option<&mut Insets> {
        None
    }

    /// Linear-layout parameters, for the linear family and its subtypes.
    fn as_linear(&self) -> Option<&LinearLayoutParams> {
        None
    }

    fn as_linear_mut(&mut self) -> Option<&mut LinearLayoutParams> {
        None
    }

    /// The embedded parameters of the family this one extends.
    fn super_params(&self) -> Option<&dyn LayoutParams> {
        None
    }

    fn super_params_mut(&mut self) -> Option<&mut dyn LayoutParams> {
        None
    }
}

/// `params` as family `T`: the value itself if it is a `T`, else the
/// embedded `T` it extends.
pub fn downcast_family<T: LayoutParams>(params: &dyn LayoutParams) -> Option<&T> {
    if let Some(params) = params.as_any().downcast_ref::<T>() {
        return Some(params);
    }
    downcast_family::<T>(params.super_params()?)
}

/// Mutable form of [`downcast_family`].
pub fn downcast_family_mut<T: LayoutParams>(params: &mut dyn LayoutParams) -> Option<&mut T> {
    if params.as_any().is::<T>() {
        return params.as_any_mut().downcast_mut::<T>();
    }
    downcast_family_mut::<T>(params.super_params_mut()?)
}

macro_rules! params_plumbing {
    ($family:literal, $($base:ident).+) => {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn base(&self) -> &BaseLayoutParams {
            &self.$($base).+
        }

        fn base_mut(&mut self) -> &mut BaseLayoutParams {
            &mut self.$($base).+
        }

        fn family(&self) -> &'static str {
            $family
        }
    };
}

macro_rules! params_super {
    ($($parent:ident).+) => {
        fn super_params(&self) -> Option<&dyn LayoutParams> {
            Some(&self.$($parent).+)
        }

        fn super_params_mut(&mut self) -> Option<&mut dyn LayoutParams> {
            Some(&mut self.$($parent).+)
        }
    };
}

macro_rules! params_margins {
    ($($margins:ident).+) => {
        fn margins(&self) -> Option<&Insets> {
            Some(&self.$($margins).+)
        }

        fn margins_mut(&mut self) -> Option<&mut Insets> {
            Some(&mut self.$($margins).+)
        }
    };
}

/// Width and height only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseLayoutParams {
    pub width: i32,
    pub height: i32,
}

impl BaseLayoutParams {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl LayoutParams for BaseLayoutParams {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn base(&self) -> &BaseLayoutParams {
        self
    }

    fn base_mut(&mut self) -> &mut BaseLayoutParams {
        self
    }

    fn family(&self) -> &'static str {
        "base"
    }
}

/// Size plus margins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginLayoutParams {
    pub base: BaseLayoutParams,
    pub margins: Insets,
}

impl MarginLayoutParams {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            base: BaseLayoutParams::new(width, height),
            margins: Insets::default(),
        }
    }
}

impl LayoutParams for MarginLayoutParams {
    params_plumbing!("margin", base);
    params_margins!(margins);
    params_super!(base);
}

/// Parameters for children of a linear layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearLayoutParams {
    pub margin: MarginLayoutParams,
    pub gravity: Option<Gravity>,
    pub weight: f32,
}

impl LinearLayoutParams {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            margin: MarginLayoutParams::new(width, height),
            gravity: None,
            weight: 0.0,
        }
    }
}

impl LayoutParams for LinearLayoutParams {
    params_plumbing!("linear", margin.base);
    params_margins!(margin.margins);
    params_super!(margin);

    fn as_linear(&self) -> Option<&LinearLayoutParams> {
        Some(self)
    }

    fn as_linear_mut(&mut self) -> Option<&mut LinearLayoutParams> {
        Some(self)
    }
}

/// Parameters for children of a frame layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLayoutParams {
    pub margin: MarginLayoutParams,
    pub gravity: Option<Gravity>,
}

impl FrameLayoutParams {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            margin: MarginLayoutParams::new(width, height),
            gravity: None,
        }
    }
}

impl LayoutParams for FrameLayoutParams {
    params_plumbing!("frame", margin.base);
    params_margins!(margin.margins);
    params_super!(margin);
}

/// Value stored for boolean relative rules.
pub const RULE_TRUE: i32 = -1;

/// Positioning rules understood by a relative layout.
///
/// Anchor rules take the id of a sibling; parent rules take [`RULE_TRUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeRule {
    LeftOf,
    RightOf,
    Above,
    Below,
    AlignBaseline,
    AlignLeft,
    AlignTop,
    AlignRight,
    AlignBottom,
    AlignParentLeft,
    AlignParentTop,
    AlignParentRight,
    AlignParentBottom,
    CenterInParent,
    CenterHorizontal,
    CenterVertical,
}

/// Parameters for children of a relative layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeLayoutParams {
    pub margin: MarginLayoutParams,
    rules: IndexMap<RelativeRule, i32>,
}

impl RelativeLayoutParams {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            margin: MarginLayoutParams::new(width, height),
            rules: IndexMap::new(),
        }
    }

    /// Set a boolean rule.
    pub fn add_rule(&mut self, rule: RelativeRule) {
        self.rules.insert(rule, RULE_TRUE);
    }

    /// Set an anchor rule relative to the sibling with id `anchor`.
    pub fn add_rule_anchor(&mut self, rule: RelativeRule, anchor: i32) {
        self.rules.insert(rule, anchor);
    }

    pub fn rule(&self, rule: RelativeRule) -> Option<i32> {
        self.rules.get(&rule).copied()
    }

    /// Rules in the order they were first set.
    pub fn rules(&self) -> impl Iterator<Item = (RelativeRule, i32)> + '_ {
        self.rules.iter().map(|(rule, value)| (*rule, *value))
    }
}

impl LayoutParams for RelativeLayoutParams {
    params_plumbing!("relative", margin.base);
    params_margins!(margin.margins);
    params_super!(margin);
}

/// Parameters for cells of a table row. Extends the linear family.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowLayoutParams {
    pub linear: LinearLayoutParams,
    /// Column index, `-1` when unassigned.
    pub column: i32,
    pub span: i32,
}

impl TableRowLayoutParams {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            linear: LinearLayoutParams::new(width, height),
            column: -1,
            span: 1,
        }
    }
}

impl LayoutParams for TableRowLayoutParams {
    params_plumbing!("table-row", linear.margin.base);
    params_margins!(linear.margin.margins);
    params_super!(linear);

    fn as_linear(&self) -> Option<&LinearLayoutParams> {
        Some(&self.linear)
    }

    fn as_linear_mut(&mut self) -> Option<&mut LinearLayoutParams> {
        Some(&mut self.linear)
    }
}

/// Parameters for items of list and grid views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayoutParams {
    pub base: BaseLayoutParams,
    /// Adapter view type of the item, `-1` when unknown.
    pub view_type: i32,
}

impl ListLayoutParams {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            base: BaseLayoutParams::new(width, height),
            view_type: -1,
        }
    }
}

impl LayoutParams for ListLayoutParams {
    params_plumbing!("list", base);
    params_super!(base);
}

/// Parameters for children of an absolute layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteLayoutParams {
    pub base: BaseLayoutParams,
    pub x: i32,
    pub y: i32,
}

impl AbsoluteLayoutParams {
    pub fn new(width: i32, height: i32, x: i32, y: i32) -> Self {
        Self {
            base: BaseLayoutParams::new(width, height),
            x,
            y,
        }
    }
}

impl LayoutParams for AbsoluteLayoutParams {
    params_plumbing!("absolute", base);
    params_super!(base);
}

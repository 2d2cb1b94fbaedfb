//! Headless widget toolkit.
//!
//! The materialization engine talks to widgets only through the traits in
//! this module. The concrete widgets in [`widgets`] and [`containers`] form a
//! small in-memory toolkit that implements them: they hold state but never
//! measure or draw. A host binding implements the same traits for its own
//! widget types and registers factories for them.
//!
//! # Capability queries
//!
//! Instead of downcasting to concrete widget types, the style engine asks a
//! `dyn View` for capabilities:
//! - [`View::as_view_group`] - widgets that own children
//! - [`View::as_text_mut`] - widgets that display text
//! - [`View::as_checkable_mut`] - widgets with a checked state

pub mod containers;
pub mod params;
pub mod text;
pub mod widgets;

pub use containers::*;
pub use params::*;
pub use text::*;
pub use widgets::*;

use crate::registry::NestedLayoutParams;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use trellis_core::Config;

/// Shared handle to a type-erased live widget.
pub type ViewRef = Rc<RefCell<dyn View>>;

/// Shared handle to a live widget of a known type.
pub type WidgetHandle<W> = Rc<RefCell<W>>;

/// Click callback, receives the clicked view.
pub type ClickListener = Rc<dyn Fn(&dyn View)>;

/// Long-click callback. Returns `true` when the event was consumed.
pub type LongClickListener = Rc<dyn Fn(&dyn View) -> bool>;

/// Sentinel id for views that were never given one.
pub const NO_ID: i32 = -1;

/// Opaque construction handle passed to every widget factory.
///
/// The engine never looks inside the host data; it only forwards the
/// context and reads the build [`Config`].
#[derive(Clone, Default)]
pub struct Context {
    host: Option<Rc<dyn Any>>,
    config: Config,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach host-specific data that factories may read back.
    pub fn with_host<T: Any>(mut self, data: T) -> Self {
        self.host = Some(Rc::new(data));
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Host data, if present and of type `T`.
    pub fn host<T: Any>(&self) -> Option<&T> {
        self.host.as_deref().and_then(|host| host.downcast_ref::<T>())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("host", &self.host.as_ref().map(|_| "..."))
            .field("config", &self.config)
            .finish()
    }
}

/// Visibility of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Invisible,
    Gone,
}

/// State every view carries, regardless of its type.
pub struct ViewCore {
    pub id: i32,
    pub tag: Option<String>,
    pub padding: Insets,
    pub min_width: i32,
    pub min_height: i32,
    pub visibility: Visibility,
    pub enabled: bool,
    pub layout_params: Option<Box<dyn LayoutParams>>,
    pub on_click: Option<ClickListener>,
    pub on_long_click: Option<LongClickListener>,
}

impl Default for ViewCore {
    fn default() -> Self {
        Self {
            id: NO_ID,
            tag: None,
            padding: Insets::default(),
            min_width: 0,
            min_height: 0,
            visibility: Visibility::Visible,
            enabled: true,
            layout_params: None,
            on_click: None,
            on_long_click: None,
        }
    }
}

impl fmt::Debug for ViewCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewCore")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("padding", &self.padding)
            .field("min_width", &self.min_width)
            .field("min_height", &self.min_height)
            .field("visibility", &self.visibility)
            .field("enabled", &self.enabled)
            .field("layout_params", &self.layout_params)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("on_long_click", &self.on_long_click.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Base trait for all widgets.
///
/// Required methods are plumbing, usually supplied by
/// [`view_boilerplate!`](crate::view_boilerplate). Everything else has a
/// default built on [`ViewCore`].
pub trait View: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn as_view(&self) -> &dyn View;

    fn core(&self) -> &ViewCore;

    fn core_mut(&mut self) -> &mut ViewCore;

    /// Short type name for diagnostics.
    fn debug_name(&self) -> &'static str {
        short_type_name::<Self>()
    }

    /// Discovery hook: a constructor taking only the construction context.
    ///
    /// The registry falls back to this when no factory is registered for the
    /// type, and memoizes the result.
    fn context_constructor() -> Option<fn(&Context) -> Self>
    where
        Self: Sized,
    {
        None
    }

    /// Discovery hook: the layout-parameter type children of this widget
    /// must carry. Only meaningful for containers.
    fn nested_layout_params(&self) -> Option<NestedLayoutParams> {
        None
    }

    fn as_view_group(&self) -> Option<&dyn ViewGroup> {
        None
    }

    fn as_view_group_mut(&mut self) -> Option<&mut dyn ViewGroup> {
        None
    }

    fn as_text(&self) -> Option<&dyn TextWidget> {
        None
    }

    fn as_text_mut(&mut self) -> Option<&mut dyn TextWidget> {
        None
    }

    fn as_checkable_mut(&mut self) -> Option<&mut CheckState> {
        None
    }

    fn id(&self) -> i32 {
        self.core().id
    }

    fn set_id(&mut self, id: i32) {
        self.core_mut().id = id;
    }

    fn padding(&self) -> Insets {
        self.core().padding
    }

    fn set_padding(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.core_mut().padding = Insets::new(left, top, right, bottom);
    }

    fn min_width(&self) -> i32 {
        self.core().min_width
    }

    fn min_height(&self) -> i32 {
        self.core().min_height
    }

    fn set_minimum_width(&mut self, width: i32) {
        self.core_mut().min_width = width;
    }

    fn set_minimum_height(&mut self, height: i32) {
        self.core_mut().min_height = height;
    }

    fn visibility(&self) -> Visibility {
        self.core().visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.core_mut().visibility = visibility;
    }

    fn is_enabled(&self) -> bool {
        self.core().enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.core_mut().enabled = enabled;
    }

    fn layout_params(&self) -> Option<&dyn LayoutParams> {
        self.core().layout_params.as_deref()
    }

    fn set_layout_params(&mut self, params: Box<dyn LayoutParams>) {
        self.core_mut().layout_params = Some(params);
    }

    fn set_on_click_listener(&mut self, listener: ClickListener) {
        self.core_mut().on_click = Some(listener);
    }

    fn set_on_long_click_listener(&mut self, listener: LongClickListener) {
        self.core_mut().on_long_click = Some(listener);
    }

    /// Invoke the click listener. Returns `false` if none is set.
    fn perform_click(&self) -> bool {
        match self.core().on_click.clone() {
            Some(listener) => {
                listener(self.as_view());
                true
            }
            None => false,
        }
    }

    /// Invoke the long-click listener. Returns whether it consumed the event.
    fn perform_long_click(&self) -> bool {
        match self.core().on_long_click.clone() {
            Some(listener) => listener(self.as_view()),
            None => false,
        }
    }
}

/// Children of a container view.
#[derive(Default)]
pub struct GroupCore {
    pub children: Vec<ViewRef>,
}

/// Capability: a view that owns an ordered list of child views.
pub trait ViewGroup: View {
    fn group(&self) -> &GroupCore;

    fn group_mut(&mut self) -> &mut GroupCore;

    fn children(&self) -> &[ViewRef] {
        &self.group().children
    }

    fn child_count(&self) -> usize {
        self.group().children.len()
    }

    fn child_at(&self, index: usize) -> Option<ViewRef> {
        self.group().children.get(index).cloned()
    }

    /// Append a child. Insertion order is rendering order.
    fn add_view(&mut self, child: ViewRef) {
        self.group_mut().children.push(child);
    }

    /// Depth-first search of the subtree below this group.
    fn find_view_by_id(&self, id: i32) -> Option<ViewRef> {
        for child in self.children() {
            let view = child.borrow();
            if view.id() == id {
                return Some(child.clone());
            }
            if let Some(found) = view.as_view_group().and_then(|g| g.find_view_by_id(id)) {
                return Some(found);
            }
        }
        None
    }
}

/// Last path segment of a type name, for log and error messages.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Implements the plumbing methods of [`View`] for a struct with a
/// `core: ViewCore` field.
#[macro_export]
macro_rules! view_boilerplate {
    () => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }

        fn as_view(&self) -> &dyn $crate::toolkit::View {
            self
        }

        fn core(&self) -> &$crate::toolkit::ViewCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut $crate::toolkit::ViewCore {
            &mut self.core
        }
    };
}

/// Implements the view-group capability queries of [`View`] for a struct
/// that also implements [`ViewGroup`].
#[macro_export]
macro_rules! view_group_capability {
    () => {
        fn as_view_group(&self) -> Option<&dyn $crate::toolkit::ViewGroup> {
            Some(self)
        }

        fn as_view_group_mut(&mut self) -> Option<&mut dyn $crate::toolkit::ViewGroup> {
            Some(self)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<TextView>(), "TextView");
        assert_eq!(short_type_name::<LinearLayout>(), "LinearLayout");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
    }

    #[test]
    fn test_context_host_data() {
        let ctx = Context::new().with_host(String::from("activity"));
        assert_eq!(ctx.host::<String>().map(String::as_str), Some("activity"));
        assert!(ctx.host::<u32>().is_none());
        assert!(Context::new().host::<String>().is_none());
    }

    #[test]
    fn test_view_core_defaults() {
        let view = PlainView::default();
        assert_eq!(view.id(), NO_ID);
        assert!(view.is_enabled());
        assert_eq!(view.visibility(), Visibility::Visible);
        assert!(view.layout_params().is_none());
        assert!(!view.perform_click());
        assert!(!view.perform_long_click());
    }

    #[test]
    fn test_perform_click_passes_view() {
        let seen = Rc::new(RefCell::new(None));
        let mut button = Button::default();
        button.set_id(7);
        let seen_clone = seen.clone();
        button.set_on_click_listener(Rc::new(move |v: &dyn View| {
            *seen_clone.borrow_mut() = Some(v.id());
        }));
        assert!(button.perform_click());
        assert_eq!(*seen.borrow(), Some(7));
    }

    #[test]
    fn test_find_view_by_id_depth_first() {
        let mut inner = FrameLayout::default();
        let mut label = TextView::default();
        label.set_id(42);
        inner.add_view(Rc::new(RefCell::new(label)));

        let mut outer = LinearLayout::default();
        outer.add_view(Rc::new(RefCell::new(PlainView::default())));
        outer.add_view(Rc::new(RefCell::new(inner)));

        let found = outer.find_view_by_id(42).expect("nested view");
        assert_eq!(found.borrow().debug_name(), "TextView");
        assert!(outer.find_view_by_id(43).is_none());
    }
}

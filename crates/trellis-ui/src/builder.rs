//! Fluent construction of node trees.
//!
//! Every setter here is sugar over the initializer queue: it records a
//! closure that runs against the widget at materialization, or immediately
//! if the node was already materialized. Setters that only make sense for
//! some widgets are bounded on the capability traits of
//! [`crate::toolkit`], so `.text(..)` on an image node does not compile.
//!
//! # Example
//!
//! ```ignore
//! let form = container::<LinearLayout, _>(FILL_PARENT, FILL_PARENT, [
//!     element::<TextView>(FILL_PARENT, WRAP_CONTENT).text("Name").boxed(),
//!     element::<EditText>(FILL_PARENT, WRAP_CONTENT).hint("Jane Doe").boxed(),
//!     element::<Button>(WRAP_CONTENT, WRAP_CONTENT)
//!         .text("Save")
//!         .on_click(|_| save())
//!         .boxed(),
//! ])
//! .orientation(Orientation::Vertical);
//! ```

use crate::container::Container;
use crate::node::{Element, Node};
use crate::size::Dimensions;
use crate::style::Style;
use crate::toolkit::{
    Color, HasAdapter, HasCheckState, HasImage, HasOrientation, HasProgress, HasText, Orientation,
    SharedAdapter, TextWidget, View, ViewGroup, Visibility,
};
use std::rc::Rc;

/// Create a leaf node.
pub fn element<W: View>(width: i32, height: i32) -> Node<W> {
    Node::new(width, height)
}

/// Create a leaf node from a dimensions preset.
pub fn element_sized<W: View>(dimensions: Dimensions) -> Node<W> {
    Node::with_dimensions(dimensions)
}

/// Create a container node with children. `None` children are dropped.
pub fn container<W, I>(width: i32, height: i32, children: I) -> Container<W>
where
    W: View + ViewGroup,
    I: IntoIterator,
    I::Item: Into<Option<Box<dyn Element>>>,
{
    let mut container = Container::new(width, height);
    for child in children {
        container.add_child(child);
    }
    container
}

/// Chainable configuration shared by nodes and containers.
pub trait ElementBuilder<W: View>: Sized {
    fn node_mut(&mut self) -> &mut Node<W>;

    /// Queue a style.
    ///
    /// A materialized node rejects the style and the rejection is logged;
    /// use [`Node::add_style`] to observe it as an error instead.
    fn style(mut self, style: impl Into<Style>) -> Self {
        if let Err(err) = self.node_mut().add_style(style.into()) {
            tracing::error!("{}", err);
        }
        self
    }

    /// Queue several styles in order, skipping `None` entries.
    fn styles<I>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = Option<Style>>,
    {
        for style in styles {
            if let Err(err) = self.node_mut().add_style(style) {
                tracing::error!("{}", err);
                break;
            }
        }
        self
    }

    /// Queue an initializer.
    fn init(mut self, init: impl FnOnce(&mut W) + 'static) -> Self {
        self.node_mut().ensure_initialized(init);
        self
    }

    fn boxed(self) -> Box<dyn Element>
    where
        Self: Element + 'static,
    {
        Box::new(self)
    }

    fn id(self, id: i32) -> Self {
        self.init(move |w| w.set_id(id))
    }

    fn visibility(self, visibility: Visibility) -> Self {
        self.init(move |w| w.set_visibility(visibility))
    }

    fn enabled(self, enabled: bool) -> Self {
        self.init(move |w| w.set_enabled(enabled))
    }

    fn on_click(self, listener: impl Fn(&dyn View) + 'static) -> Self {
        let listener = Rc::new(listener);
        self.init(move |w| w.set_on_click_listener(listener))
    }

    /// Long-click listener that reports whether it consumed the event.
    fn on_long_click(self, listener: impl Fn(&dyn View) -> bool + 'static) -> Self {
        let listener = Rc::new(listener);
        self.init(move |w| w.set_on_long_click_listener(listener))
    }

    /// Long-click listener that always consumes the event.
    fn on_long_click_action(self, action: impl Fn(&dyn View) + 'static) -> Self {
        self.on_long_click(move |view| {
            action(view);
            true
        })
    }

    fn text(self, text: impl Into<String>) -> Self
    where
        W: HasText,
    {
        let text = text.into();
        self.init(move |w| w.text_state_mut().set_text(text))
    }

    fn text_color(self, color: Color) -> Self
    where
        W: HasText,
    {
        self.init(move |w| w.text_state_mut().set_text_color(color))
    }

    fn hint(self, hint: impl Into<String>) -> Self
    where
        W: HasText,
    {
        let hint = hint.into();
        self.init(move |w| w.text_state_mut().set_hint(hint))
    }

    fn checked(self, checked: bool) -> Self
    where
        W: HasCheckState,
    {
        self.init(move |w| w.check_state_mut().set_checked(checked))
    }

    fn on_checked_changed(self, listener: impl Fn(bool) + 'static) -> Self
    where
        W: HasCheckState,
    {
        let listener = Rc::new(listener);
        self.init(move |w| w.check_state_mut().set_on_checked_change_listener(listener))
    }

    fn orientation(self, orientation: Orientation) -> Self
    where
        W: HasOrientation,
    {
        self.init(move |w| w.set_orientation(orientation))
    }

    fn image_resource(self, resource: i32) -> Self
    where
        W: HasImage,
    {
        self.init(move |w| w.set_image_resource(resource))
    }

    fn progress(self, progress: i32) -> Self
    where
        W: HasProgress,
    {
        self.init(move |w| w.set_progress(progress))
    }

    fn adapter(self, adapter: SharedAdapter) -> Self
    where
        W: HasAdapter,
    {
        self.init(move |w| w.set_adapter(Some(adapter)))
    }
}

impl<W: View> ElementBuilder<W> for Node<W> {
    fn node_mut(&mut self) -> &mut Node<W> {
        self
    }
}

impl<W: View + ViewGroup> ElementBuilder<W> for Container<W> {
    fn node_mut(&mut self) -> &mut Node<W> {
        Container::node_mut(self)
    }
}

impl<W: View + ViewGroup> Container<W> {
    /// Append a child.
    pub fn child(mut self, child: impl Element + 'static) -> Self {
        self.add_child(Box::new(child) as Box<dyn Element>);
        self
    }

    /// Append children in order, dropping `None` entries.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Box<dyn Element>>>,
    {
        for child in children {
            self.add_child(child);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::size::{FILL_PARENT, WRAP_CONTENT};
    use crate::style::MarginStyle;
    use crate::toolkit::{
        Button, CheckBox, Context, EditText, GridView, ImageView, LinearLayout, ListView,
        ProgressBar, TextView,
    };
    use crate::adapter::ListElementAdapter;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_setters_apply_at_materialization() {
        let registry = Registry::with_standard_catalogue();
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut node = element::<Button>(WRAP_CONTENT, WRAP_CONTENT)
            .id(3)
            .text("OK")
            .text_color(Color::GREEN)
            .enabled(false)
            .on_click(move |_| counter.set(counter.get() + 1));
        assert_eq!(node.pending_init_count(), 5);

        let widget = node
            .materialize(&registry, &Context::new(), Some(&LinearLayout::default()))
            .unwrap();
        let button = widget.borrow();
        assert_eq!(button.id(), 3);
        assert_eq!(button.text.text, "OK");
        assert_eq!(button.text.color, Some(Color::GREEN));
        assert!(!button.is_enabled());
        assert!(button.perform_click());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_long_click_forms() {
        let registry = Registry::with_standard_catalogue();
        let parent = LinearLayout::default();
        let mut consuming = element::<TextView>(1, 1).on_long_click_action(|_| {});
        let mut passing = element::<TextView>(1, 1).on_long_click(|_| false);

        let ctx = Context::new();
        let a = consuming.materialize(&registry, &ctx, Some(&parent)).unwrap();
        let b = passing.materialize(&registry, &ctx, Some(&parent)).unwrap();
        assert!(a.borrow().perform_long_click());
        assert!(!b.borrow().perform_long_click());
    }

    #[test]
    fn test_capability_setters() {
        let registry = Registry::with_standard_catalogue();
        let parent = LinearLayout::default();
        let ctx = Context::new();
        let changes = Rc::new(Cell::new(0));
        let sink = changes.clone();

        let check = element::<CheckBox>(1, 1)
            .on_checked_changed(move |_| sink.set(sink.get() + 1))
            .checked(true)
            .materialize(&registry, &ctx, Some(&parent))
            .unwrap();
        assert!(check.borrow().check.is_checked());
        assert_eq!(changes.get(), 1);

        let edit = element::<EditText>(1, 1)
            .hint("email")
            .materialize(&registry, &ctx, Some(&parent))
            .unwrap();
        assert_eq!(edit.borrow().text.hint.as_deref(), Some("email"));

        let image = element::<ImageView>(1, 1)
            .image_resource(17)
            .materialize(&registry, &ctx, Some(&parent))
            .unwrap();
        assert_eq!(image.borrow().resource, Some(17));

        let bar = element::<ProgressBar>(1, 1)
            .progress(40)
            .materialize(&registry, &ctx, Some(&parent))
            .unwrap();
        assert_eq!(bar.borrow().progress(), 40);
    }

    #[test]
    fn test_container_builder() {
        let registry = Registry::with_standard_catalogue();
        let mut root = container::<LinearLayout, _>(
            FILL_PARENT,
            FILL_PARENT,
            [
                Some(element::<TextView>(FILL_PARENT, WRAP_CONTENT).text("a").boxed()),
                None,
            ],
        )
        .orientation(Orientation::Vertical)
        .child(element::<Button>(WRAP_CONTENT, WRAP_CONTENT).style(MarginStyle::new().all(2)))
        .children([element::<TextView>(1, 1).boxed()]);
        assert_eq!(root.child_elements().len(), 3);

        let widget = root.materialize(&registry, &Context::new(), None).unwrap();
        let layout = widget.borrow();
        assert_eq!(layout.orientation, Orientation::Vertical);
        assert_eq!(layout.child_count(), 3);
        let button = layout.child_at(1).unwrap();
        let margins = button.borrow().layout_params().and_then(|p| p.margins().copied());
        assert_eq!(margins.map(|m| m.top), Some(2));
    }

    #[test]
    fn test_styles_skip_none() {
        let node = element_sized::<TextView>(Dimensions::WRAP_WRAP).styles([
            Some(Style::from(MarginStyle::new())),
            None,
            Some(Style::from(MarginStyle::new().left(1))),
        ]);
        assert_eq!(node.pending_style_count(), 2);
    }

    #[test]
    fn test_adapter_setter_attaches_shared_adapter() {
        let registry = Registry::with_standard_catalogue();
        let adapter = Rc::new(RefCell::new(ListElementAdapter::default()));

        let no_children: Vec<Box<dyn Element>> = Vec::new();
        let list = container::<ListView, _>(FILL_PARENT, FILL_PARENT, no_children)
            .adapter(adapter.clone())
            .materialize(&registry, &Context::new(), None)
            .unwrap();
        let grid = element::<GridView>(FILL_PARENT, FILL_PARENT)
            .adapter(adapter.clone())
            .materialize(&registry, &Context::new(), Some(&*list.borrow()))
            .unwrap();

        assert!(Rc::ptr_eq(list.borrow().adapter.as_ref().unwrap(), &adapter));
        assert!(Rc::ptr_eq(grid.borrow().adapter.as_ref().unwrap(), &adapter));
        assert_eq!(Rc::strong_count(&adapter), 3);
    }
}

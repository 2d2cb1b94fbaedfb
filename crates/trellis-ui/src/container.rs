//! Composite nodes: a container widget plus its ordered children.

use crate::error::TrellisResult;
use crate::node::{Element, Node};
use crate::registry::Registry;
use crate::size::{Dimensions, FILL_PARENT};
use crate::style::Style;
use crate::toolkit::{Context, View, ViewGroup, ViewRef, WidgetHandle};
use std::fmt;
use trellis_core::profiling::profile_scope;

/// A node whose widget owns child widgets.
///
/// Materializing a container first materializes the container itself, then
/// each child in insertion order with the container widget as parent, and
/// attaches every child widget. A failing child fails the whole call: the
/// container and every child are aborted, so no partially built tree is
/// ever reachable through [`Container::widget`].
pub struct Container<W: View + ViewGroup> {
    node: Node<W>,
    children: Vec<Box<dyn Element>>,
}

impl<W: View + ViewGroup> Container<W> {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            node: Node::new(width, height),
            children: Vec::new(),
        }
    }

    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self::new(dimensions.width, dimensions.height)
    }

    pub fn node(&self) -> &Node<W> {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut Node<W> {
        &mut self.node
    }

    /// Child descriptions, in insertion order.
    pub fn child_elements(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    pub fn is_materialized(&self) -> bool {
        self.node.is_materialized()
    }

    pub fn widget(&self) -> Option<&WidgetHandle<W>> {
        self.node.widget()
    }

    pub fn add_style(&mut self, style: impl Into<Option<Style>>) -> TrellisResult<()> {
        self.node.add_style(style)
    }

    pub fn ensure_initialized(&mut self, init: impl FnOnce(&mut W) + 'static) {
        self.node.ensure_initialized(init);
    }

    /// Append a child. `None` is ignored.
    pub fn add_child(&mut self, child: impl Into<Option<Box<dyn Element>>>) {
        if let Some(child) = child.into() {
            self.children.push(child);
        }
    }

    /// Append children in order, ignoring `None` entries.
    pub fn add_children<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = Option<Box<dyn Element>>>,
    {
        self.children.extend(children.into_iter().flatten());
    }

    /// Discard the container widget and every child.
    pub fn abort(&mut self) {
        self.node.abort();
        for child in &mut self.children {
            child.abort();
        }
    }

    /// Build the container widget, then every child under it.
    pub fn materialize(
        &mut self,
        registry: &Registry,
        context: &Context,
        parent: Option<&dyn View>,
    ) -> TrellisResult<WidgetHandle<W>> {
        let widget = self.node.materialize(registry, context, parent)?;
        profile_scope!("materialize_children");
        for index in 0..self.children.len() {
            let result = {
                let parent = widget.borrow();
                self.children[index].materialize_view(registry, context, Some(&*parent))
            };
            match result {
                Ok(view) => widget.borrow_mut().add_view(view),
                Err(err) => {
                    tracing::debug!(child = index, "child failed, aborting container");
                    self.abort();
                    return Err(err);
                }
            }
        }
        tracing::debug!(
            children = self.children.len(),
            "attached container children"
        );
        Ok(widget)
    }
}

impl<W: View + ViewGroup> Default for Container<W> {
    /// Fills the parent in both directions.
    fn default() -> Self {
        Self::new(FILL_PARENT, FILL_PARENT)
    }
}

impl<W: View + ViewGroup> fmt::Debug for Container<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("node", &self.node)
            .field("children", &self.children.len())
            .finish()
    }
}

impl<W: View + ViewGroup> Element for Container<W> {
    fn width(&self) -> i32 {
        self.node.width()
    }

    fn height(&self) -> i32 {
        self.node.height()
    }

    fn is_materialized(&self) -> bool {
        self.node.is_materialized()
    }

    fn materialize_view(
        &mut self,
        registry: &Registry,
        context: &Context,
        parent: Option<&dyn View>,
    ) -> TrellisResult<ViewRef> {
        let widget: ViewRef = self.materialize(registry, context, parent)?;
        Ok(widget)
    }

    fn abort(&mut self) {
        Container::abort(self);
    }
}

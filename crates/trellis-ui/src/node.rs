//! Leaf nodes and the one-shot materialization protocol.
//!
//! A [`Node`] describes a widget that does not exist yet: its declared size,
//! the styles to apply and the initializers to run once it is built. Calling
//! [`Node::materialize`] builds it exactly once:
//!
//! 1. resolve the widget through the [`Registry`];
//! 2. resolve layout parameters against the parent container (or, for a
//!    container root, against the widget itself);
//! 3. apply the queued styles in insertion order;
//! 4. assign the parameters to the widget;
//! 5. run the queued initializers in insertion order;
//! 6. seal the node.
//!
//! A failure in steps 1 or 2 leaves the node configuring, so it can be
//! retried after registering the missing factory. A node whose enclosing
//! container fails later is aborted: its widget is discarded and it can
//! never be materialized again.

use crate::error::{LayoutParamsFailure, TrellisError, TrellisResult};
use crate::registry::Registry;
use crate::size::{Dimensions, FILL_PARENT, WRAP_CONTENT};
use crate::style::Style;
use crate::toolkit::{short_type_name, Context, View, ViewRef, WidgetHandle};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use trellis_core::profiling::profile_function;

/// Deferred post-construction step for a widget of type `W`.
pub type Initializer<W> = Box<dyn FnOnce(&mut W)>;

/// Type-erased node, as stored in a container's children.
pub trait Element {
    /// Declared width, in pixels or a sizing sentinel.
    fn width(&self) -> i32;

    /// Declared height, in pixels or a sizing sentinel.
    fn height(&self) -> i32;

    fn is_materialized(&self) -> bool;

    /// Materialize and return the widget as a type-erased view.
    fn materialize_view(
        &mut self,
        registry: &Registry,
        context: &Context,
        parent: Option<&dyn View>,
    ) -> TrellisResult<ViewRef>;

    /// Drop the widget and any queued work after a failure elsewhere in the
    /// tree. The node can no longer be materialized.
    fn abort(&mut self);
}

enum NodeState<W> {
    Configuring {
        styles: Vec<Style>,
        pending_init: Vec<Initializer<W>>,
    },
    Materialized(WidgetHandle<W>),
    Aborted,
}

/// Description of a single widget of type `W`.
pub struct Node<W: View> {
    width: i32,
    height: i32,
    state: NodeState<W>,
}

impl<W: View> Node<W> {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            state: NodeState::Configuring {
                styles: Vec::new(),
                pending_init: Vec::new(),
            },
        }
    }

    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self::new(dimensions.width, dimensions.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self.state, NodeState::Materialized(_))
    }

    /// Whether a failed materialization discarded this node.
    pub fn is_aborted(&self) -> bool {
        matches!(self.state, NodeState::Aborted)
    }

    /// The live widget, once materialized.
    pub fn widget(&self) -> Option<&WidgetHandle<W>> {
        match &self.state {
            NodeState::Materialized(widget) => Some(widget),
            NodeState::Configuring { .. } | NodeState::Aborted => None,
        }
    }

    /// Number of styles waiting for materialization.
    pub fn pending_style_count(&self) -> usize {
        match &self.state {
            NodeState::Configuring { styles, .. } => styles.len(),
            NodeState::Materialized(_) | NodeState::Aborted => 0,
        }
    }

    /// Number of initializers waiting for materialization.
    pub fn pending_init_count(&self) -> usize {
        match &self.state {
            NodeState::Configuring { pending_init, .. } => pending_init.len(),
            NodeState::Materialized(_) | NodeState::Aborted => 0,
        }
    }

    /// Queue a style for materialization. `None` is ignored.
    ///
    /// Fails once the node is materialized, even for `None`.
    pub fn add_style(&mut self, style: impl Into<Option<Style>>) -> TrellisResult<()> {
        let NodeState::Configuring { styles, .. } = &mut self.state else {
            return Err(TrellisError::StyleAfterMaterialization {
                widget: short_type_name::<W>(),
            });
        };
        if let Some(style) = style.into() {
            styles.push(style);
        }
        Ok(())
    }

    /// Run `init` against the widget: queued until materialization, or
    /// immediately if the widget already exists.
    pub fn ensure_initialized(&mut self, init: impl FnOnce(&mut W) + 'static) {
        match &mut self.state {
            NodeState::Configuring { pending_init, .. } => pending_init.push(Box::new(init)),
            NodeState::Materialized(widget) => init(&mut *widget.borrow_mut()),
            NodeState::Aborted => {
                tracing::warn!(
                    widget = short_type_name::<W>(),
                    "initializer dropped: node was aborted"
                );
            }
        }
    }

    /// Discard the widget, or the queues if never built.
    pub fn abort(&mut self) {
        if !self.is_aborted() {
            tracing::debug!(widget = short_type_name::<W>(), "aborted node");
        }
        self.state = NodeState::Aborted;
    }

    /// Build the widget. See the module docs for the exact order.
    pub fn materialize(
        &mut self,
        registry: &Registry,
        context: &Context,
        parent: Option<&dyn View>,
    ) -> TrellisResult<WidgetHandle<W>> {
        profile_function!();
        let name = short_type_name::<W>();
        let (styles, pending_init) = match &mut self.state {
            NodeState::Configuring {
                styles,
                pending_init,
            } => (styles, pending_init),
            NodeState::Materialized(_) => {
                return Err(TrellisError::AlreadyMaterialized { widget: name });
            }
            NodeState::Aborted => {
                return Err(TrellisError::MaterializationAborted { widget: name });
            }
        };

        let mut widget = registry.resolve_widget::<W>(context)?;
        let mut params = match parent {
            Some(parent) => registry.resolve_layout_params(parent, self.width, self.height)?,
            None if widget.as_view_group().is_some() => {
                registry.resolve_layout_params(&widget, self.width, self.height)?
            }
            None => {
                return Err(TrellisError::UnresolvableLayoutParamsType {
                    container: name,
                    reason: LayoutParamsFailure::NoParentContainer,
                });
            }
        };

        let styles = std::mem::take(styles);
        let pending_init = std::mem::take(pending_init);
        let diagnostics = context.config().style_diagnostics;
        for style in &styles {
            let outcome = style.apply(&mut widget, params.as_mut());
            if !outcome.is_applied() && diagnostics.is_enabled() {
                tracing::warn!(
                    widget = name,
                    style = style.family(),
                    params = params.family(),
                    "style skipped: layout parameters do not match"
                );
            }
        }
        widget.set_layout_params(params);
        for init in pending_init {
            init(&mut widget);
        }

        let widget = Rc::new(RefCell::new(widget));
        self.state = NodeState::Materialized(widget.clone());
        tracing::debug!(
            widget = name,
            width = self.width,
            height = self.height,
            styles = styles.len(),
            "materialized node"
        );
        Ok(widget)
    }
}

impl<W: View> Default for Node<W> {
    /// Fills the parent horizontally and wraps its content vertically.
    fn default() -> Self {
        Self::new(FILL_PARENT, WRAP_CONTENT)
    }
}

impl<W: View> fmt::Debug for Node<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("widget", &short_type_name::<W>())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("materialized", &self.is_materialized())
            .field("aborted", &self.is_aborted())
            .finish()
    }
}

impl<W: View> Element for Node<W> {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_materialized(&self) -> bool {
        Node::is_materialized(self)
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
        Node::abort(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{FrameStyle, MarginStyle};
    use crate::toolkit::{
        Button, FrameLayout, Gravity, Insets, LinearLayout, LinearLayoutParams, TextView,
    };

    fn parent() -> LinearLayout {
        LinearLayout::default()
    }

    #[test]
    fn test_defaults() {
        let node = Node::<TextView>::default();
        assert_eq!(node.dimensions(), Dimensions::FILL_WRAP);
        assert!(!node.is_materialized());
        assert!(node.widget().is_none());
    }

    #[test]
    fn test_materialize_assigns_sized_params() {
        let registry = Registry::with_standard_catalogue();
        let mut node = Node::<Button>::new(100, WRAP_CONTENT);
        let widget = node
            .materialize(&registry, &Context::new(), Some(&parent()))
            .unwrap();

        let button = widget.borrow();
        let params = button.layout_params().expect("params assigned");
        assert_eq!((params.width(), params.height()), (100, WRAP_CONTENT));
        assert!(params.as_any().is::<LinearLayoutParams>());
        assert!(node.is_materialized());
    }

    #[test]
    fn test_styles_then_params_then_initializers() {
        let registry = Registry::with_standard_catalogue();
        let mut node = Node::<TextView>::default();
        node.add_style(Style::from(MarginStyle::new().all(3))).unwrap();
        node.ensure_initialized(|label| {
            // Parameters are already assigned and styled when initializers run.
            let margins = label.layout_params().and_then(|p| p.margins().copied());
            label.text.text = format!("{:?}", margins.map(|m| m.left));
        });

        let widget = node
            .materialize(&registry, &Context::new(), Some(&parent()))
            .unwrap();
        assert_eq!(widget.borrow().text.text, "Some(3)");
        assert_eq!(node.pending_style_count(), 0);
        assert_eq!(node.pending_init_count(), 0);
    }

    #[test]
    fn test_second_materialize_fails() {
        let registry = Registry::with_standard_catalogue();
        let mut node = Node::<Button>::default();
        let first = node
            .materialize(&registry, &Context::new(), Some(&parent()))
            .unwrap();
        let err = node
            .materialize(&registry, &Context::new(), Some(&parent()))
            .err();
        assert_eq!(err, Some(TrellisError::AlreadyMaterialized { widget: "Button" }));
        assert!(Rc::ptr_eq(node.widget().unwrap(), &first));
    }

    #[test]
    fn test_style_after_materialization_fails() {
        let registry = Registry::with_standard_catalogue();
        let mut node = Node::<Button>::default();
        node.add_style(None::<Style>).unwrap();
        node.materialize(&registry, &Context::new(), Some(&parent()))
            .unwrap();

        let expected = Err(TrellisError::StyleAfterMaterialization { widget: "Button" });
        assert_eq!(node.add_style(Style::from(FrameStyle::new())), expected);
        assert_eq!(node.add_style(None::<Style>), expected);
    }

    #[test]
    fn test_initializer_after_materialization_runs_now() {
        let registry = Registry::with_standard_catalogue();
        let mut node = Node::<Button>::default();
        let widget = node
            .materialize(&registry, &Context::new(), Some(&parent()))
            .unwrap();
        node.ensure_initialized(|button| button.set_id(5));
        assert_eq!(widget.borrow().id(), 5);
    }

    #[test]
    fn test_leaf_root_without_parent_fails() {
        let registry = Registry::with_standard_catalogue();
        let mut node = Node::<Button>::default();
        let err = node.materialize(&registry, &Context::new(), None).err();
        assert_eq!(
            err,
            Some(TrellisError::UnresolvableLayoutParamsType {
                container: "Button",
                reason: LayoutParamsFailure::NoParentContainer,
            })
        );
        assert!(!node.is_materialized());
    }

    #[test]
    fn test_container_root_uses_own_params() {
        let registry = Registry::with_standard_catalogue();
        let mut node = Node::<FrameLayout>::new(FILL_PARENT, FILL_PARENT);
        node.add_style(Style::from(FrameStyle::new().gravity(Gravity::CENTER)))
            .unwrap();
        let widget = node.materialize(&registry, &Context::new(), None).unwrap();
        let frame = widget.borrow();
        let params = frame.layout_params().unwrap();
        assert_eq!(params.family(), "frame");
        assert_eq!(params.margins().copied(), Some(Insets::default()));
    }

    #[test]
    fn test_aborted_node_exposes_nothing() {
        let registry = Registry::with_standard_catalogue();
        let mut node = Node::<Button>::default();
        node.materialize(&registry, &Context::new(), Some(&parent()))
            .unwrap();
        node.abort();

        assert!(node.is_aborted());
        assert!(!node.is_materialized());
        assert!(node.widget().is_none());
        assert_eq!(
            node.materialize(&registry, &Context::new(), Some(&parent()))
                .err(),
            Some(TrellisError::MaterializationAborted { widget: "Button" })
        );
        assert_eq!(
            node.add_style(None::<Style>),
            Err(TrellisError::StyleAfterMaterialization { widget: "Button" })
        );
    }
}

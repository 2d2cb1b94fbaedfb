//! Container widgets of the reference toolkit.
//!
//! Every container declares the layout-parameter family its children carry
//! through [`View::nested_layout_params`]. The standard catalogue registers
//! explicit factories for all of them, so the descriptors only matter for
//! registries built without it.

use super::{
    Context, FrameLayoutParams, GroupCore, LayoutParams, LinearLayoutParams, ListLayoutParams,
    RelativeLayoutParams, TableRowLayoutParams, View, ViewCore, ViewGroup,
};
use crate::adapter::ListElementAdapter;
use crate::error::TrellisResult;
use crate::registry::{NestedLayoutParams, Registry};
use crate::{view_boilerplate, view_group_capability};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Stacking direction of linear containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Linear-derived containers. Enables the orientation setter on nodes.
pub trait HasOrientation: ViewGroup {
    fn orientation(&self) -> Orientation;

    fn set_orientation(&mut self, orientation: Orientation);
}

/// Adapter shared between a list container and the code feeding it.
pub type SharedAdapter = Rc<RefCell<ListElementAdapter>>;

/// Containers whose children come from a [`ListElementAdapter`]. Enables
/// the adapter setter on nodes.
pub trait HasAdapter: ViewGroup {
    fn adapter(&self) -> Option<&SharedAdapter>;

    fn set_adapter(&mut self, adapter: Option<SharedAdapter>);

    /// Replace the children with one item view per adapter position.
    ///
    /// Current children are offered for recycling by position. Returns the
    /// number of items; `0` without an adapter.
    fn populate(&mut self, registry: &Registry, context: &Context) -> TrellisResult<usize>
    where
        Self: Sized,
    {
        let Some(adapter) = self.adapter().cloned() else {
            return Ok(0);
        };
        let adapter = adapter.borrow();
        let mut recycled = std::mem::take(&mut self.group_mut().children).into_iter();
        let mut views = Vec::with_capacity(adapter.count());
        for position in 0..adapter.count() {
            views.push(adapter.get_view(position, recycled.next(), registry, context, &*self)?);
        }
        self.group_mut().children = views;
        tracing::debug!(items = adapter.count(), "populated list container");
        Ok(adapter.count())
    }
}

impl fmt::Debug for GroupCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupCore")
            .field("children", &self.children.len())
            .finish()
    }
}

fn linear_params(width: i32, height: i32) -> Box<dyn LayoutParams> {
    Box::new(LinearLayoutParams::new(width, height))
}

fn frame_params(width: i32, height: i32) -> Box<dyn LayoutParams> {
    Box::new(FrameLayoutParams::new(width, height))
}

fn relative_params(width: i32, height: i32) -> Box<dyn LayoutParams> {
    Box::new(RelativeLayoutParams::new(width, height))
}

fn table_row_params(width: i32, height: i32) -> Box<dyn LayoutParams> {
    Box::new(TableRowLayoutParams::new(width, height))
}

fn list_params(width: i32, height: i32) -> Box<dyn LayoutParams> {
    Box::new(ListLayoutParams::new(width, height))
}

/// Declares a container widget with `core`/`group` fields.
///
/// The optional `orientation` arm adds a stacking direction with the given
/// default. The `nested` expression is the discovery descriptor, if any.
macro_rules! container_widget {
    (
        $(#[$meta:meta])*
        $name:ident,
        nested: $nested:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            pub core: ViewCore,
            pub group: GroupCore,
        }

        container_widget!(@impls $name, $nested);
    };
    (
        $(#[$meta:meta])*
        $name:ident,
        orientation: $orientation:expr,
        nested: $nested:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            pub core: ViewCore,
            pub group: GroupCore,
            pub orientation: Orientation,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    core: ViewCore::default(),
                    group: GroupCore::default(),
                    orientation: $orientation,
                }
            }
        }

        impl HasOrientation for $name {
            fn orientation(&self) -> Orientation {
                self.orientation
            }

            fn set_orientation(&mut self, orientation: Orientation) {
                self.orientation = orientation;
            }
        }

        container_widget!(@impls $name, $nested);
    };
    (
        $(#[$meta:meta])*
        $name:ident,
        adapter,
        nested: $nested:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            pub core: ViewCore,
            pub group: GroupCore,
            pub adapter: Option<SharedAdapter>,
        }

        impl HasAdapter for $name {
            fn adapter(&self) -> Option<&SharedAdapter> {
                self.adapter.as_ref()
            }

            fn set_adapter(&mut self, adapter: Option<SharedAdapter>) {
                self.adapter = adapter;
            }
        }

        container_widget!(@impls $name, $nested);
    };
    (@impls $name:ident, $nested:expr) => {
        impl View for $name {
            view_boilerplate!();
            view_group_capability!();

            fn context_constructor() -> Option<fn(&super::Context) -> Self> {
                Some(|_: &super::Context| Self::default())
            }

            fn nested_layout_params(&self) -> Option<NestedLayoutParams> {
                $nested
            }
        }

        impl ViewGroup for $name {
            fn group(&self) -> &GroupCore {
                &self.group
            }

            fn group_mut(&mut self) -> &mut GroupCore {
                &mut self.group
            }
        }
    };
}

container_widget!(
    /// Stacks children in a single row or column.
    LinearLayout,
    orientation: Orientation::Horizontal,
    nested: Some(NestedLayoutParams::new("LinearLayoutParams").with_sized(linear_params))
);

container_widget!(
    /// Layers children on top of each other.
    FrameLayout,
    nested: Some(NestedLayoutParams::new("FrameLayoutParams").with_sized(frame_params))
);

container_widget!(
    /// Positions children relative to the parent and to each other.
    RelativeLayout,
    nested: Some(NestedLayoutParams::new("RelativeLayoutParams").with_sized(relative_params))
);

container_widget!(
    /// Vertical stack of table rows.
    TableLayout,
    orientation: Orientation::Vertical,
    nested: Some(NestedLayoutParams::new("LinearLayoutParams").with_sized(linear_params))
);

container_widget!(
    /// One row of cells inside a table layout.
    TableRow,
    orientation: Orientation::Horizontal,
    nested: Some(NestedLayoutParams::new("TableRowLayoutParams").with_sized(table_row_params))
);

container_widget!(
    /// Vertically scrolling frame. Declares no nested parameter type of its
    /// own; only the catalogue maps it to the frame family.
    ScrollView,
    nested: None
);

container_widget!(
    /// Horizontally scrolling frame.
    HorizontalScrollView,
    nested: None
);

container_widget!(
    /// Vertical list of adapter-provided items.
    ListView,
    adapter,
    nested: Some(NestedLayoutParams::new("ListLayoutParams").with_sized(list_params))
);

container_widget!(
    /// Grid of adapter-provided items.
    GridView,
    adapter,
    nested: Some(NestedLayoutParams::new("ListLayoutParams").with_sized(list_params))
);

container_widget!(
    /// Places children at explicit coordinates. Its parameter type has only
    /// a positional constructor, so discovery cannot build it.
    AbsoluteLayout,
    nested: Some(NestedLayoutParams::new("AbsoluteLayoutParams"))
);

container_widget!(
    /// Linear container whose radio buttons are mutually exclusive.
    RadioGroup,
    orientation: Orientation::Vertical,
    nested: Some(NestedLayoutParams::new("LinearLayoutParams").with_sized(linear_params))
);

impl RadioGroup {
    /// Check the radio button with `id` and uncheck its siblings.
    ///
    /// Returns `false` if no direct child has that id.
    pub fn check(&mut self, id: i32) -> bool {
        let found = self
            .group
            .children
            .iter()
            .any(|child| child.borrow().id() == id);
        if !found {
            return false;
        }
        for child in &self.group.children {
            let mut view = child.borrow_mut();
            let checked = view.id() == id;
            if let Some(state) = view.as_checkable_mut() {
                state.set_checked(checked);
            }
        }
        true
    }

    /// Id of the checked direct child, if any.
    pub fn checked_id(&self) -> Option<i32> {
        self.group.children.iter().find_map(|child| {
            let mut view = child.borrow_mut();
            let id = view.id();
            view.as_checkable_mut()
                .filter(|state| state.is_checked())
                .map(|_| id)
        })
    }
}

//! Trellis UI - declarative widget trees, materialized on demand
//!
//! This crate turns a tree of lightweight node descriptions into a tree of
//! live widgets:
//! - Nodes that describe a widget type, its size, styles and initializers
//! - A registry resolving widget and layout-parameter factories by type,
//!   with discovery and memoization for unregistered types
//! - A style engine applied to widgets and their layout parameters
//! - A list adapter that recycles item views by type tag
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis_ui::prelude::*;
//!
//! let registry = Registry::with_standard_catalogue();
//! let context = Context::new();
//!
//! let mut root = container::<LinearLayout, _>(FILL_PARENT, FILL_PARENT, [
//!     element::<TextView>(FILL_PARENT, WRAP_CONTENT)
//!         .text("Hello")
//!         .style(MarginStyle::new().all(8))
//!         .boxed(),
//!     element::<Button>(WRAP_CONTENT, WRAP_CONTENT).text("OK").boxed(),
//! ])
//! .orientation(Orientation::Vertical);
//!
//! let layout = root.materialize(&registry, &context, None).unwrap();
//! assert_eq!(layout.borrow().child_count(), 2);
//! ```

pub mod adapter;
pub mod builder;
pub mod catalogue;
pub mod container;
pub mod error;
pub mod node;
pub mod registry;
pub mod size;
pub mod style;
pub mod toolkit;

pub use adapter::{AdapterObserver, ListDataBinding, ListElement, ListElementAdapter, ListRow, RowTemplate};
pub use builder::{ElementBuilder, container, element, element_sized};
pub use container::Container;
pub use error::{LayoutParamsFailure, TrellisError, TrellisResult};
pub use node::{Element, Initializer, Node};
pub use registry::{FactoryOrigin, NestedLayoutParams, Registry};
pub use size::{Dimensions, FILL_PARENT, MATCH_PARENT, WRAP_CONTENT};
pub use style::{CustomStyle, Style, StyleOutcome};
pub use toolkit::{Context, View, ViewGroup, ViewRef, WidgetHandle};

// Recycled views travel as `Option<ViewRef>`; keep it pointer-sized.
static_assertions::assert_eq_size!(ViewRef, Option<ViewRef>);
static_assertions::assert_eq_size!(WidgetHandle<toolkit::PlainView>, Option<WidgetHandle<toolkit::PlainView>>);

/// Everything needed to describe and materialize a tree.
pub mod prelude {
    pub use crate::adapter::{ListDataBinding, ListElement, ListElementAdapter, ListRow, RowTemplate};
    pub use crate::builder::{ElementBuilder, container, element, element_sized};
    pub use crate::container::Container;
    pub use crate::error::{TrellisError, TrellisResult};
    pub use crate::node::{Element, Node};
    pub use crate::registry::Registry;
    pub use crate::size::{Dimensions, FILL_PARENT, MATCH_PARENT, WRAP_CONTENT};
    pub use crate::style::*;
    pub use crate::toolkit::*;
}

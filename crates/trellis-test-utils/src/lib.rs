//! Test utilities for Trellis.
//!
//! This crate provides test widgets and a call log for exercising the
//! materialization engine without a real toolkit.
//!
//! # Overview
//!
//! - [`CallLog`] - records engine-visible events in order
//! - [`LoggedView`] - leaf widget with no discovery hook; it must be
//!   registered, typically through [`register_test_widgets`]
//! - [`DefaultOnlyGroup`] - container whose nested parameters only have a
//!   zero-argument constructor
//! - [`OpaqueGroup`] - container with no nested parameter type at all
//! - [`ConstructorlessGroup`] - container that names a nested parameter
//!   type but offers no way to build it
//!
//! # Example
//!
//! ```rust
//! use trellis_test_utils::{CallLog, LoggedView, UiCall, register_test_widgets};
//! use trellis_ui::prelude::*;
//!
//! let log = CallLog::new();
//! let mut registry = Registry::with_standard_catalogue();
//! register_test_widgets(&mut registry, &log);
//!
//! let mut node = element::<LoggedView>(10, 20);
//! node.materialize(&registry, &Context::new(), Some(&FrameLayout::default()))
//!     .unwrap();
//! assert_eq!(log.calls(), vec![UiCall::Constructed { widget: "LoggedView" }]);
//! ```
//!
//! # Interior Mutability
//!
//! The log keeps its entries behind an `Arc<parking_lot::Mutex<..>>`.
//! Clones share one list and record through `&self`.

use parking_lot::Mutex;
use std::sync::Arc;
use trellis_ui::registry::NestedLayoutParams;
use trellis_ui::toolkit::{
    Context, GroupCore, LayoutParams, MarginLayoutParams, View, ViewCore, ViewGroup,
};
use trellis_ui::{Registry, Style, view_boilerplate, view_group_capability};

/// An engine-visible event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCall {
    Constructed { widget: &'static str },
    ParamsCreated { width: i32, height: i32 },
    StyleApplied { label: &'static str },
    Initialized { label: &'static str },
}

/// Shared, ordered record of [`UiCall`]s.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<UiCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: UiCall) {
        self.calls.lock().push(call);
    }

    /// Snapshot of everything recorded so far.
    pub fn calls(&self) -> Vec<UiCall> {
        self.calls.lock().clone()
    }

    pub fn count(&self, predicate: impl Fn(&UiCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    /// A style that records each application.
    ///
    /// Applies to parameters of type `T` or parameters embedding it, like
    /// any custom style.
    pub fn style<T: LayoutParams>(&self, label: &'static str) -> Style {
        let log = self.clone();
        Style::for_params::<T>(move |_, _| log.record(UiCall::StyleApplied { label }))
    }

    /// An initializer that records its own execution.
    pub fn initializer<W: View>(&self, label: &'static str) -> impl FnOnce(&mut W) + 'static {
        let log = self.clone();
        move |_| log.record(UiCall::Initialized { label })
    }
}

// ----------------------------------------------------------------------------
// test widgets
// ----------------------------------------------------------------------------

/// Leaf widget that remembers the host data it was built with.
#[derive(Debug, Default)]
pub struct LoggedView {
    core: ViewCore,
    pub host_label: Option<String>,
}

impl View for LoggedView {
    view_boilerplate!();
}

/// Container whose child parameters are built without a size, then sized.
#[derive(Debug, Default)]
pub struct DefaultOnlyGroup {
    core: ViewCore,
    group: GroupCore,
}

impl View for DefaultOnlyGroup {
    view_boilerplate!();
    view_group_capability!();

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }

    fn nested_layout_params(&self) -> Option<NestedLayoutParams> {
        Some(
            NestedLayoutParams::new("MarginLayoutParams")
                .with_default(|| {
                    Box::new(MarginLayoutParams::new(0, 0)) as Box<dyn LayoutParams>
                }),
        )
    }
}

impl ViewGroup for DefaultOnlyGroup {
    fn group(&self) -> &GroupCore {
        &self.group
    }

    fn group_mut(&mut self) -> &mut GroupCore {
        &mut self.group
    }
}

/// Container that declares no nested parameter type.
#[derive(Debug, Default)]
pub struct OpaqueGroup {
    core: ViewCore,
    group: GroupCore,
}

impl View for OpaqueGroup {
    view_boilerplate!();
    view_group_capability!();

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }
}

impl ViewGroup for OpaqueGroup {
    fn group(&self) -> &GroupCore {
        &self.group
    }

    fn group_mut(&mut self) -> &mut GroupCore {
        &mut self.group
    }
}

/// Container whose nested parameter descriptor has no constructor.
#[derive(Debug, Default)]
pub struct ConstructorlessGroup {
    core: ViewCore,
    group: GroupCore,
}

impl View for ConstructorlessGroup {
    view_boilerplate!();
    view_group_capability!();

    fn context_constructor() -> Option<fn(&Context) -> Self> {
        Some(|_: &Context| Self::default())
    }

    fn nested_layout_params(&self) -> Option<NestedLayoutParams> {
        Some(NestedLayoutParams::new("ConstructorlessParams"))
    }
}

impl ViewGroup for ConstructorlessGroup {
    fn group(&self) -> &GroupCore {
        &self.group
    }

    fn group_mut(&mut self) -> &mut GroupCore {
        &mut self.group
    }
}

/// Register a logging factory for [`LoggedView`], and logging child
/// parameters for [`OpaqueGroup`].
///
/// The view picks up a `String` from the context's host data, if any.
pub fn register_test_widgets(registry: &mut Registry, log: &CallLog) {
    let widget_log = log.clone();
    registry.register_widget::<LoggedView>(move |context| {
        widget_log.record(UiCall::Constructed {
            widget: "LoggedView",
        });
        LoggedView {
            host_label: context.host::<String>().cloned(),
            ..LoggedView::default()
        }
    });
    let params_log = log.clone();
    registry.register_layout_params::<OpaqueGroup>(move |width, height| {
        params_log.record(UiCall::ParamsCreated { width, height });
        Box::new(MarginLayoutParams::new(width, height)) as Box<dyn LayoutParams>
    });
}

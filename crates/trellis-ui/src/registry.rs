//! Type-driven factory registry.
//!
//! Maps a widget type to the factory that builds it, and a container type to
//! the factory that builds the layout parameters its children carry. Both
//! maps are keyed by `TypeId`. When a type has no registered factory the
//! registry falls back to discovery through the hooks on [`View`]
//! ([`View::context_constructor`] and [`View::nested_layout_params`]) and
//! memoizes what it finds, so discovery runs at most once per type.
//!
//! Lookups take `&Registry`; the caches live behind `RefCell` so a shared
//! registry can keep learning while a tree is being built.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = Registry::with_standard_catalogue();
//! registry.register_widget::<Gauge>(|ctx| Gauge::themed(ctx));
//!
//! let gauge: Gauge = registry.resolve_widget(&ctx)?;
//! let params = registry.resolve_layout_params(&frame, FILL_PARENT, WRAP_CONTENT)?;
//! ```

use crate::error::{LayoutParamsFailure, TrellisError, TrellisResult};
use crate::toolkit::{short_type_name, Context, LayoutParams, View};
use std::any::{Any, TypeId};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use trellis_core::alloc::HashMap;

/// Factory producing a widget of type `W`.
pub type WidgetFactory<W> = Rc<dyn Fn(&Context) -> W>;

/// Factory producing layout parameters of the given width and height.
pub type LayoutParamsFactory = Rc<dyn Fn(i32, i32) -> Box<dyn LayoutParams>>;

/// Discovery descriptor for a container's nested layout-parameter type.
///
/// The sized constructor is preferred. A zero-argument constructor is used
/// only when no sized one exists, followed by explicit width/height
/// assignment.
#[derive(Debug, Clone, Copy)]
pub struct NestedLayoutParams {
    /// Type name for diagnostics.
    pub name: &'static str,
    pub sized: Option<fn(i32, i32) -> Box<dyn LayoutParams>>,
    pub default: Option<fn() -> Box<dyn LayoutParams>>,
}

impl NestedLayoutParams {
    /// Descriptor with no constructors.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            sized: None,
            default: None,
        }
    }

    /// Set the `(width, height)` constructor.
    pub const fn with_sized(mut self, ctor: fn(i32, i32) -> Box<dyn LayoutParams>) -> Self {
        self.sized = Some(ctor);
        self
    }

    /// Set the zero-argument constructor.
    pub const fn with_default(mut self, ctor: fn() -> Box<dyn LayoutParams>) -> Self {
        self.default = Some(ctor);
        self
    }

    /// Turn the descriptor into a factory, if it has a usable constructor.
    fn into_factory(self) -> Option<LayoutParamsFactory> {
        if let Some(ctor) = self.sized {
            return Some(Rc::new(ctor));
        }
        let ctor = self.default?;
        Some(Rc::new(move |width, height| {
            let mut params = ctor();
            params.set_width(width);
            params.set_height(height);
            params
        }))
    }
}

/// How a registry entry came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryOrigin {
    Registered,
    Discovered,
}

struct WidgetEntry {
    name: &'static str,
    origin: FactoryOrigin,
    /// Always a `WidgetFactory<W>` for the keyed `W`.
    factory: Box<dyn Any>,
}

struct LayoutParamsEntry {
    container: &'static str,
    origin: FactoryOrigin,
    factory: LayoutParamsFactory,
}

/// Registry of widget and layout-parameter factories.
pub struct Registry {
    widgets: RefCell<HashMap<TypeId, WidgetEntry>>,
    layout_params: RefCell<HashMap<TypeId, LayoutParamsEntry>>,
    discoveries: Cell<usize>,
}

impl Registry {
    /// An empty registry. Every type goes through discovery.
    pub fn new() -> Self {
        Self {
            widgets: RefCell::new(HashMap::new()),
            layout_params: RefCell::new(HashMap::new()),
            discoveries: Cell::new(0),
        }
    }

    /// A registry pre-populated with the reference toolkit's widgets and
    /// containers.
    pub fn with_standard_catalogue() -> Self {
        let mut registry = Self::new();
        crate::catalogue::register_standard_catalogue(&mut registry);
        registry
    }

    /// Register the factory for widget type `W`, replacing any previous one.
    pub fn register_widget<W: View>(&mut self, factory: impl Fn(&Context) -> W + 'static) {
        let factory: WidgetFactory<W> = Rc::new(factory);
        self.widgets.get_mut().insert(
            TypeId::of::<W>(),
            WidgetEntry {
                name: short_type_name::<W>(),
                origin: FactoryOrigin::Registered,
                factory: Box::new(factory),
            },
        );
    }

    /// Register the layout-parameter factory for children of container type
    /// `C`, replacing any previous one.
    pub fn register_layout_params<C: View>(
        &mut self,
        factory: impl Fn(i32, i32) -> Box<dyn LayoutParams> + 'static,
    ) {
        self.layout_params.get_mut().insert(
            TypeId::of::<C>(),
            LayoutParamsEntry {
                container: short_type_name::<C>(),
                origin: FactoryOrigin::Registered,
                factory: Rc::new(factory),
            },
        );
    }

    /// Build a widget of type `W`.
    pub fn resolve_widget<W: View>(&self, context: &Context) -> TrellisResult<W> {
        let factory = self.widget_factory::<W>()?;
        Ok(factory(context))
    }

    /// Build layout parameters for a child of `container`.
    ///
    /// The lookup uses the container's runtime type.
    pub fn resolve_layout_params(
        &self,
        container: &dyn View,
        width: i32,
        height: i32,
    ) -> TrellisResult<Box<dyn LayoutParams>> {
        let factory = self.layout_params_factory(container)?;
        Ok(factory(width, height))
    }

    fn widget_factory<W: View>(&self) -> TrellisResult<WidgetFactory<W>> {
        let type_id = TypeId::of::<W>();
        let name = short_type_name::<W>();
        let cached = self
            .widgets
            .borrow()
            .get(&type_id)
            .and_then(|entry| entry.factory.downcast_ref::<WidgetFactory<W>>())
            .cloned();
        if let Some(factory) = cached {
            tracing::trace!(widget = name, "widget factory hit");
            return Ok(factory);
        }

        let ctor = W::context_constructor()
            .ok_or(TrellisError::UnresolvableWidgetType { widget: name })?;
        let factory: WidgetFactory<W> = Rc::new(ctor);
        self.widgets.borrow_mut().insert(
            type_id,
            WidgetEntry {
                name,
                origin: FactoryOrigin::Discovered,
                factory: Box::new(factory.clone()),
            },
        );
        self.discoveries.set(self.discoveries.get() + 1);
        tracing::debug!(widget = name, "discovered widget constructor");
        Ok(factory)
    }

    fn layout_params_factory(&self, container: &dyn View) -> TrellisResult<LayoutParamsFactory> {
        let type_id = container.as_any().type_id();
        let cached = self
            .layout_params
            .borrow()
            .get(&type_id)
            .map(|entry| entry.factory.clone());
        if let Some(factory) = cached {
            tracing::trace!(container = container.debug_name(), "layout params factory hit");
            return Ok(factory);
        }

        let name = container.debug_name();
        let unresolvable = |reason| TrellisError::UnresolvableLayoutParamsType {
            container: name,
            reason,
        };
        let nested = container
            .nested_layout_params()
            .ok_or_else(|| unresolvable(LayoutParamsFailure::NoNestedType))?;
        let factory = nested
            .into_factory()
            .ok_or_else(|| unresolvable(LayoutParamsFailure::NoSuitableConstructor))?;
        self.layout_params.borrow_mut().insert(
            type_id,
            LayoutParamsEntry {
                container: name,
                origin: FactoryOrigin::Discovered,
                factory: factory.clone(),
            },
        );
        self.discoveries.set(self.discoveries.get() + 1);
        tracing::debug!(
            container = name,
            params = nested.name,
            "discovered nested layout parameters"
        );
        Ok(factory)
    }

    /// Whether a factory for `W` is known, registered or discovered.
    pub fn contains_widget<W: View>(&self) -> bool {
        self.widgets.borrow().contains_key(&TypeId::of::<W>())
    }

    /// Whether a layout-parameter factory for container type `C` is known.
    pub fn contains_layout_params<C: View>(&self) -> bool {
        self.layout_params.borrow().contains_key(&TypeId::of::<C>())
    }

    pub fn widget_origin<W: View>(&self) -> Option<FactoryOrigin> {
        self.widgets
            .borrow()
            .get(&TypeId::of::<W>())
            .map(|entry| entry.origin)
    }

    pub fn layout_params_origin<C: View>(&self) -> Option<FactoryOrigin> {
        self.layout_params
            .borrow()
            .get(&TypeId::of::<C>())
            .map(|entry| entry.origin)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.borrow().len()
    }

    pub fn layout_params_count(&self) -> usize {
        self.layout_params.borrow().len()
    }

    /// Number of successful discoveries since construction.
    pub fn discovery_count(&self) -> usize {
        self.discoveries.get()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widgets: Vec<_> = self.widgets.borrow().values().map(|e| e.name).collect();
        let mut containers: Vec<_> = self
            .layout_params
            .borrow()
            .values()
            .map(|e| e.container)
            .collect();
        widgets.sort_unstable();
        containers.sort_unstable();
        f.debug_struct("Registry")
            .field("widgets", &widgets)
            .field("layout_params", &containers)
            .field("discoveries", &self.discoveries.get())
            .finish()
    }
}

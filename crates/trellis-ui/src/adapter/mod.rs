//! List projection: elements that produce recyclable item views.
//!
//! A [`ListElementAdapter`] owns an ordered list of [`ListElement`]s and
//! hands out item views for positions, reusing a previously created view
//! when the element allows it and the view was created for the same type
//! tag. Views are tagged with their element's type tag on creation.

mod binding;
mod row;

pub use binding::*;
pub use row::*;

use crate::error::{TrellisError, TrellisResult};
use crate::registry::Registry;
use crate::toolkit::{Context, ListLayoutParams, View, ViewRef};
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// An item of a list.
pub trait ListElement: Any {
    fn as_any(&self) -> &dyn Any;

    /// Views are only recycled between elements with equal tags.
    fn type_tag(&self) -> &str;

    fn is_reusable(&self) -> bool {
        true
    }

    fn is_enabled(&self) -> bool {
        true
    }

    /// Materialize a fresh item view under `parent`.
    fn create_view(
        &self,
        registry: &Registry,
        context: &Context,
        parent: &dyn View,
    ) -> TrellisResult<ViewRef>;

    /// Bind this element's data to an existing view of the same tag.
    fn update_view(&self, view: &mut dyn View);
}

/// Change observer, called after every invalidation.
pub type AdapterObserver = Rc<dyn Fn()>;

/// Adapter over an ordered list of elements.
#[derive(Default)]
pub struct ListElementAdapter {
    elements: Vec<Rc<dyn ListElement>>,
    /// Distinct type tags in order of first appearance.
    view_types: Vec<String>,
    observers: Vec<AdapterObserver>,
}

impl ListElementAdapter {
    pub fn new(elements: impl IntoIterator<Item = Rc<dyn ListElement>>) -> Self {
        let mut adapter = Self {
            elements: elements.into_iter().collect(),
            ..Self::default()
        };
        adapter.rebuild_view_types();
        adapter
    }

    pub fn elements(&self) -> &[Rc<dyn ListElement>] {
        &self.elements
    }

    /// Replace all elements and invalidate.
    pub fn set_elements(&mut self, elements: Vec<Rc<dyn ListElement>>) {
        self.elements = elements;
        self.invalidate();
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn item(&self, position: usize) -> Option<&Rc<dyn ListElement>> {
        self.elements.get(position)
    }

    /// Number of distinct view types. Never zero.
    pub fn view_type_count(&self) -> usize {
        self.view_types.len().max(1)
    }

    /// Index of the element's type tag among all distinct tags.
    pub fn item_view_type(&self, position: usize) -> Option<usize> {
        let tag = self.elements.get(position)?.type_tag();
        self.view_types.iter().position(|known| known == tag)
    }

    pub fn are_all_items_enabled(&self) -> bool {
        self.elements.iter().all(|element| element.is_enabled())
    }

    /// Whether the item at `position` is enabled. `false` out of range.
    pub fn is_enabled(&self, position: usize) -> bool {
        self.elements
            .get(position)
            .is_some_and(|element| element.is_enabled())
    }

    /// The item view for `position`.
    ///
    /// `convert_view` is reused when the element is reusable and the view
    /// carries the element's tag; the element then rebinds it. Otherwise a
    /// new view is materialized under `parent`, tagged, and bound.
    pub fn get_view(
        &self,
        position: usize,
        convert_view: Option<ViewRef>,
        registry: &Registry,
        context: &Context,
        parent: &dyn View,
    ) -> TrellisResult<ViewRef> {
        let element = self
            .elements
            .get(position)
            .ok_or(TrellisError::PositionOutOfRange {
                position,
                count: self.elements.len(),
            })?;
        let tag = element.type_tag();

        if let Some(view) = convert_view.filter(|_| element.is_reusable()) {
            let same_tag = view.borrow().core().tag.as_deref() == Some(tag);
            if same_tag {
                tracing::trace!(position, tag, "recycled item view");
                element.update_view(&mut *view.borrow_mut());
                return Ok(view);
            }
        }

        let view = element.create_view(registry, context, parent)?;
        {
            let mut item = view.borrow_mut();
            let view_type = self.item_view_type(position);
            let core = item.core_mut();
            core.tag = Some(tag.to_owned());
            if let (Some(view_type), Some(params)) = (
                view_type,
                core.layout_params
                    .as_mut()
                    .and_then(|params| params.as_any_mut().downcast_mut::<ListLayoutParams>()),
            ) {
                params.view_type = view_type as i32;
            }
            element.update_view(&mut *item);
        }
        tracing::trace!(position, tag, "created item view");
        Ok(view)
    }

    /// Register a change observer.
    ///
    /// Observers run while the adapter is mutably borrowed and must not
    /// access it.
    pub fn add_observer(&mut self, observer: impl Fn() + 'static) {
        self.observers.push(Rc::new(observer));
    }

    /// Recompute view types and notify every observer.
    pub fn invalidate(&mut self) {
        self.rebuild_view_types();
        tracing::debug!(
            count = self.elements.len(),
            view_types = self.view_types.len(),
            "list adapter invalidated"
        );
        for observer in &self.observers {
            observer();
        }
    }

    fn rebuild_view_types(&mut self) {
        self.view_types.clear();
        for element in &self.elements {
            let tag = element.type_tag();
            if !self.view_types.iter().any(|known| known == tag) {
                self.view_types.push(tag.to_owned());
            }
        }
    }
}

impl fmt::Debug for ListElementAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListElementAdapter")
            .field("count", &self.elements.len())
            .field("view_types", &self.view_types)
            .field("observers", &self.observers.len())
            .finish()
    }
}

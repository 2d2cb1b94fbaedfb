//! A ready-made list element over a single record.

use super::ListElement;
use crate::error::TrellisResult;
use crate::node::Element;
use crate::registry::Registry;
use crate::toolkit::{Context, View, ViewRef};
use std::any::Any;
use std::fmt;
use std::rc::Rc;

type RowBuilder<T> = Rc<dyn Fn(&T) -> Box<dyn Element>>;
type RowUpdater<T> = Rc<dyn Fn(&T, &mut dyn View)>;

/// Shared row description: a tag, a node builder and an optional updater.
///
/// Cloning a template is cheap; every row created from it shares the
/// closures.
pub struct RowTemplate<T> {
    tag: String,
    build: RowBuilder<T>,
    update: Option<RowUpdater<T>>,
}

impl<T: 'static> RowTemplate<T> {
    pub fn new(tag: impl Into<String>, build: impl Fn(&T) -> Box<dyn Element> + 'static) -> Self {
        Self {
            tag: tag.into(),
            build: Rc::new(build),
            update: None,
        }
    }

    pub fn with_update(mut self, update: impl Fn(&T, &mut dyn View) + 'static) -> Self {
        self.update = Some(Rc::new(update));
        self
    }

    /// A row for `record` using this template.
    pub fn row(&self, record: T) -> ListRow<T> {
        ListRow {
            record,
            tag: self.tag.clone(),
            reusable: true,
            enabled: true,
            build: self.build.clone(),
            update: self.update.clone(),
        }
    }
}

impl<T> Clone for RowTemplate<T> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            build: self.build.clone(),
            update: self.update.clone(),
        }
    }
}

/// List element wrapping a record of type `T`.
///
/// Each call to [`ListElement::create_view`] builds a fresh node from the
/// record and materializes it; [`ListElement::update_view`] rebinds an
/// existing view through the updater, if any.
pub struct ListRow<T> {
    record: T,
    tag: String,
    reusable: bool,
    enabled: bool,
    build: RowBuilder<T>,
    update: Option<RowUpdater<T>>,
}

impl<T: 'static> ListRow<T> {
    pub fn new(
        record: T,
        tag: impl Into<String>,
        build: impl Fn(&T) -> Box<dyn Element> + 'static,
    ) -> Self {
        RowTemplate::new(tag, build).row(record)
    }

    pub fn with_update(mut self, update: impl Fn(&T, &mut dyn View) + 'static) -> Self {
        self.update = Some(Rc::new(update));
        self
    }

    pub fn reusable(mut self, reusable: bool) -> Self {
        self.reusable = reusable;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn record(&self) -> &T {
        &self.record
    }
}

impl<T: 'static> ListElement for ListRow<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_tag(&self) -> &str {
        &self.tag
    }

    fn is_reusable(&self) -> bool {
        self.reusable
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn create_view(
        &self,
        registry: &Registry,
        context: &Context,
        parent: &dyn View,
    ) -> TrellisResult<ViewRef> {
        let mut node = (self.build)(&self.record);
        node.materialize_view(registry, context, Some(parent))
    }

    fn update_view(&self, view: &mut dyn View) {
        if let Some(update) = &self.update {
            update(&self.record, view);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListRow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRow")
            .field("record", &self.record)
            .field("tag", &self.tag)
            .field("reusable", &self.reusable)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

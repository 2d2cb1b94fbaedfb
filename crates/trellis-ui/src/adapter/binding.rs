//! Two-way projection between records and adapter elements.

use super::{ListElement, ListElementAdapter};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type GetData<T> = Box<dyn Fn(&dyn ListElement) -> T>;
type CreateElement<T> = Box<dyn Fn(T) -> Rc<dyn ListElement>>;

/// Binds a list of records of type `T` to a [`ListElementAdapter`].
///
/// Reading projects every element back to a record; writing replaces the
/// adapter's elements (and so invalidates it).
pub struct ListDataBinding<T> {
    adapter: Rc<RefCell<ListElementAdapter>>,
    get_data: GetData<T>,
    create_element: CreateElement<T>,
}

impl<T> ListDataBinding<T> {
    pub fn new(
        adapter: Rc<RefCell<ListElementAdapter>>,
        get_data: impl Fn(&dyn ListElement) -> T + 'static,
        create_element: impl Fn(T) -> Rc<dyn ListElement> + 'static,
    ) -> Self {
        Self {
            adapter,
            get_data: Box::new(get_data),
            create_element: Box::new(create_element),
        }
    }

    pub fn adapter(&self) -> &Rc<RefCell<ListElementAdapter>> {
        &self.adapter
    }

    /// Current records, in element order.
    pub fn data(&self) -> Vec<T> {
        self.adapter
            .borrow()
            .elements()
            .iter()
            .map(|element| (self.get_data)(element.as_ref()))
            .collect()
    }

    /// Replace the records. `None` clears the adapter.
    pub fn set_data(&self, data: Option<Vec<T>>) {
        let elements = data
            .unwrap_or_default()
            .into_iter()
            .map(|record| (self.create_element)(record))
            .collect();
        self.adapter.borrow_mut().set_elements(elements);
    }
}

impl<T> fmt::Debug for ListDataBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListDataBinding")
            .field("adapter", &self.adapter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{ListRow, RowTemplate};
    use crate::builder::{element, ElementBuilder};
    use crate::toolkit::TextView;
    use std::cell::Cell;

    fn binding() -> ListDataBinding<String> {
        let template = RowTemplate::new("name", |name: &String| {
            element::<TextView>(-1, -2).text(name.clone()).boxed()
        });
        ListDataBinding::new(
            Rc::new(RefCell::new(ListElementAdapter::default())),
            |element| {
                element
                    .as_any()
                    .downcast_ref::<ListRow<String>>()
                    .map(|row| row.record().clone())
                    .unwrap_or_default()
            },
            move |name| Rc::new(template.row(name)) as Rc<dyn ListElement>,
        )
    }

    #[test]
    fn test_round_trip_through_adapter() {
        let binding = binding();
        binding.set_data(Some(vec!["ada".to_owned(), "grace".to_owned()]));
        assert_eq!(binding.adapter().borrow().count(), 2);
        assert_eq!(binding.data(), vec!["ada".to_owned(), "grace".to_owned()]);
    }

    #[test]
    fn test_none_clears_and_invalidates() {
        let binding = binding();
        let invalidations = Rc::new(Cell::new(0));
        let sink = invalidations.clone();
        binding
            .adapter()
            .borrow_mut()
            .add_observer(move || sink.set(sink.get() + 1));

        binding.set_data(Some(vec!["x".to_owned()]));
        binding.set_data(None);
        assert!(binding.data().is_empty());
        assert!(binding.adapter().borrow().is_empty());
        assert_eq!(invalidations.get(), 2);
    }
}

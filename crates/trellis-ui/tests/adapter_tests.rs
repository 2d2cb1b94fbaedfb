//! List adapter and data binding tests.

use std::cell::RefCell;
use std::rc::Rc;
use trellis_ui::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Contact {
    name: String,
    favourite: bool,
}

fn contact(name: &str, favourite: bool) -> Contact {
    Contact {
        name: name.to_owned(),
        favourite,
    }
}

fn contact_row(contact: Contact) -> Rc<dyn ListElement> {
    let tag = if contact.favourite { "favourite" } else { "contact" };
    Rc::new(
        ListRow::new(contact, tag, |c: &Contact| {
            element::<CheckBox>(FILL_PARENT, WRAP_CONTENT)
                .checked(c.favourite)
                .boxed()
        })
        .with_update(|c: &Contact, view: &mut dyn View| {
            if let Some(text) = view.as_text_mut() {
                text.set_text(c.name.clone());
            }
        }),
    )
}

fn binding() -> ListDataBinding<Contact> {
    ListDataBinding::new(
        Rc::new(RefCell::new(ListElementAdapter::default())),
        |element| {
            element
                .as_any()
                .downcast_ref::<ListRow<Contact>>()
                .map(|row| row.record().clone())
                .unwrap_or_else(|| contact("?", false))
        },
        contact_row,
    )
}

#[test]
fn test_recycles_only_matching_tags() {
    let registry = Registry::with_standard_catalogue();
    let context = Context::new();
    let list = ListView::default();
    let binding = binding();
    binding.set_data(Some(vec![
        contact("Ada", false),
        contact("Grace", false),
        contact("Edsger", true),
    ]));
    let adapter = binding.adapter().borrow();
    assert_eq!(adapter.view_type_count(), 2);

    let first = adapter.get_view(0, None, &registry, &context, &list).unwrap();
    let second = adapter
        .get_view(1, Some(first.clone()), &registry, &context, &list)
        .unwrap();
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(second.borrow().as_text().unwrap().text(), "Grace");

    let third = adapter
        .get_view(2, Some(second.clone()), &registry, &context, &list)
        .unwrap();
    assert!(!Rc::ptr_eq(&second, &third));
    let third = third.borrow();
    assert_eq!(third.core().tag.as_deref(), Some("favourite"));
    let check = third.as_any().downcast_ref::<CheckBox>().unwrap();
    assert!(check.check.is_checked());
}

#[test]
fn test_item_params_carry_view_type() {
    let registry = Registry::with_standard_catalogue();
    let binding = binding();
    binding.set_data(Some(vec![contact("Ada", true), contact("Alan", false)]));
    let adapter = binding.adapter().borrow();

    let view = adapter
        .get_view(1, None, &registry, &Context::new(), &GridView::default())
        .unwrap();
    let view = view.borrow();
    let params = view
        .layout_params()
        .unwrap()
        .as_any()
        .downcast_ref::<ListLayoutParams>()
        .unwrap();
    assert_eq!(params.view_type, 1);
}

#[test]
fn test_binding_round_trip_and_clear() {
    let binding = binding();
    let data = vec![contact("Barbara", false), contact("Donald", true)];
    binding.set_data(Some(data.clone()));
    assert_eq!(binding.data(), data);

    binding.set_data(None);
    assert!(binding.data().is_empty());
    assert_eq!(binding.adapter().borrow().view_type_count(), 1);
}

#[test]
fn test_list_view_populates_from_its_adapter() {
    let registry = Registry::with_standard_catalogue();
    let context = Context::new();
    let binding = binding();
    binding.set_data(Some(vec![contact("Ada", false), contact("Edsger", true)]));

    let list = element::<ListView>(FILL_PARENT, FILL_PARENT)
        .adapter(binding.adapter().clone())
        .materialize(&registry, &context, None)
        .unwrap();
    assert_eq!(list.borrow_mut().populate(&registry, &context).unwrap(), 2);
    let ada = list.borrow().child_at(0).unwrap();

    binding.set_data(Some(vec![contact("Grace", false)]));
    assert_eq!(list.borrow_mut().populate(&registry, &context).unwrap(), 1);

    let list = list.borrow();
    let grace = list.child_at(0).unwrap();
    assert!(Rc::ptr_eq(&ada, &grace));
    assert_eq!(grace.borrow().as_text().unwrap().text(), "Grace");
}

//! Builds a small form and a list, then prints the materialized tree.
//!
//! Run with `RUST_LOG=trellis_ui=trace` to see every factory lookup.

use std::rc::Rc;
use trellis_core::{Config, StyleDiagnostics};
use trellis_ui::prelude::*;

fn print_tree(view: &dyn View, depth: usize) {
    let label = view.as_text().map(|t| t.text().to_owned()).unwrap_or_default();
    let params = view.layout_params().map(|p| p.family()).unwrap_or("-");
    println!(
        "{:indent$}{} [{}] {}",
        "",
        view.debug_name(),
        params,
        label,
        indent = depth * 2
    );
    if let Some(group) = view.as_view_group() {
        for child in group.children() {
            print_tree(&*child.borrow(), depth + 1);
        }
    }
}

fn main() -> Result<(), TrellisError> {
    trellis_core::logging::init();

    let registry = Registry::with_standard_catalogue();
    let context = Context::new()
        .with_config(Config::default().with_style_diagnostics(StyleDiagnostics::Warn));

    let mut form = container::<LinearLayout, _>(FILL_PARENT, FILL_PARENT, [
        element::<TextView>(FILL_PARENT, WRAP_CONTENT)
            .text("New contact")
            .style(TextStyle::new().appearance(TextAppearance::Large))
            .boxed(),
        container::<TableLayout, _>(FILL_PARENT, WRAP_CONTENT, [
            container::<TableRow, _>(FILL_PARENT, WRAP_CONTENT, [
                element::<TextView>(WRAP_CONTENT, WRAP_CONTENT).text("Name").boxed(),
                element::<EditText>(FILL_PARENT, WRAP_CONTENT)
                    .hint("Ada Lovelace")
                    .style(RowStyle::new().column(1))
                    .boxed(),
            ])
            .boxed(),
        ])
        .boxed(),
        element::<CheckBox>(WRAP_CONTENT, WRAP_CONTENT)
            .text("Favourite")
            .on_checked_changed(|checked| tracing::info!(checked, "favourite toggled"))
            .boxed(),
        element::<Button>(WRAP_CONTENT, WRAP_CONTENT)
            .id(1)
            .text("Save")
            // Skipped with a warning: buttons here carry linear parameters.
            .style(FrameStyle::new().gravity(Gravity::RIGHT))
            .style(LinearStyle::new().gravity(Gravity::END))
            .on_click(|view| tracing::info!(widget = view.debug_name(), "save clicked"))
            .boxed(),
    ])
    .orientation(Orientation::Vertical)
    .style(PaddingStyle::new().all(16));

    let root = form.materialize(&registry, &context, None)?;
    print_tree(&*root.borrow(), 0);

    if let Some(save) = root.borrow().find_view_by_id(1) {
        save.borrow().perform_click();
    }

    let names = ["Ada", "Grace", "Barbara"];
    let template = RowTemplate::new("name", |name: &&str| {
        element::<TextView>(FILL_PARENT, WRAP_CONTENT).text(*name).boxed()
    })
    .with_update(|name: &&str, view: &mut dyn View| {
        if let Some(text) = view.as_text_mut() {
            text.set_text((*name).to_owned());
        }
    });
    let adapter = ListElementAdapter::new(
        names
            .into_iter()
            .map(|name| Rc::new(template.row(name)) as Rc<dyn ListElement>),
    );
    let list = ListView::default();
    let mut convert = None;
    for position in 0..adapter.count() {
        let item = adapter.get_view(position, convert.take(), &registry, &context, &list)?;
        print_tree(&*item.borrow(), 1);
        convert = Some(item);
    }

    Ok(())
}

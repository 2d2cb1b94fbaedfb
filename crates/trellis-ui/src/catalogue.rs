//! The reference toolkit's standard catalogue.
//!
//! Registers a widget factory for every widget and container in
//! [`crate::toolkit`], and a layout-parameter factory for every container.
//! Scroll views use frame parameters, list and grid views use list
//! parameters, radio groups and table layouts use linear parameters, and
//! absolute layouts place children at the origin.

use crate::registry::Registry;
use crate::toolkit::*;

/// Register the standard catalogue into `registry`.
///
/// Existing entries for the same types are overwritten.
pub fn register_standard_catalogue(registry: &mut Registry) {
    register_widgets(registry);
    register_layout_params(registry);
    tracing::debug!(
        widgets = registry.widget_count(),
        layout_params = registry.layout_params_count(),
        "registered standard catalogue"
    );
}

fn register_widgets(registry: &mut Registry) {
    registry.register_widget::<PlainView>(|_| PlainView::default());
    registry.register_widget::<TextView>(|_| TextView::default());
    registry.register_widget::<Button>(|_| Button::default());
    registry.register_widget::<EditText>(|_| EditText::default());
    registry.register_widget::<CheckBox>(|_| CheckBox::default());
    registry.register_widget::<RadioButton>(|_| RadioButton::default());
    registry.register_widget::<ImageView>(|_| ImageView::default());
    registry.register_widget::<ProgressBar>(|_| ProgressBar::default());

    registry.register_widget::<LinearLayout>(|_| LinearLayout::default());
    registry.register_widget::<FrameLayout>(|_| FrameLayout::default());
    registry.register_widget::<RelativeLayout>(|_| RelativeLayout::default());
    registry.register_widget::<TableLayout>(|_| TableLayout::default());
    registry.register_widget::<TableRow>(|_| TableRow::default());
    registry.register_widget::<ScrollView>(|_| ScrollView::default());
    registry.register_widget::<HorizontalScrollView>(|_| HorizontalScrollView::default());
    registry.register_widget::<ListView>(|_| ListView::default());
    registry.register_widget::<GridView>(|_| GridView::default());
    registry.register_widget::<AbsoluteLayout>(|_| AbsoluteLayout::default());
    registry.register_widget::<RadioGroup>(|_| RadioGroup::default());
}

fn register_layout_params(registry: &mut Registry) {
    registry.register_layout_params::<LinearLayout>(|w, h| Box::new(LinearLayoutParams::new(w, h)));
    registry.register_layout_params::<FrameLayout>(|w, h| Box::new(FrameLayoutParams::new(w, h)));
    registry
        .register_layout_params::<RelativeLayout>(|w, h| Box::new(RelativeLayoutParams::new(w, h)));
    registry.register_layout_params::<TableLayout>(|w, h| Box::new(LinearLayoutParams::new(w, h)));
    registry
        .register_layout_params::<TableRow>(|w, h| Box::new(TableRowLayoutParams::new(w, h)));
    registry.register_layout_params::<ScrollView>(|w, h| Box::new(FrameLayoutParams::new(w, h)));
    registry.register_layout_params::<HorizontalScrollView>(|w, h| {
        Box::new(FrameLayoutParams::new(w, h))
    });
    registry.register_layout_params::<ListView>(|w, h| Box::new(ListLayoutParams::new(w, h)));
    registry.register_layout_params::<GridView>(|w, h| Box::new(ListLayoutParams::new(w, h)));
    registry.register_layout_params::<AbsoluteLayout>(|w, h| {
        Box::new(AbsoluteLayoutParams::new(w, h, 0, 0))
    });
    registry.register_layout_params::<RadioGroup>(|w, h| Box::new(LinearLayoutParams::new(w, h)));
}

//! Materialization protocol tests (no toolkit required).
//!
//! These tests drive nodes and containers through test widgets and check
//! the observable order of construction, styling and initialization.

use trellis_core::{Config, StyleDiagnostics};
use trellis_test_utils::{
    CallLog, DefaultOnlyGroup, OpaqueGroup, LoggedView, UiCall, register_test_widgets,
};
use trellis_ui::prelude::*;
use trellis_ui::LayoutParamsFailure;

fn logging_registry(log: &CallLog) -> Registry {
    let mut registry = Registry::with_standard_catalogue();
    register_test_widgets(&mut registry, log);
    registry
}

#[test]
fn test_materialization_order() {
    let log = CallLog::new();
    let registry = logging_registry(&log);
    let mut node = element::<LoggedView>(40, WRAP_CONTENT)
        .style(log.style::<MarginLayoutParams>("first"))
        .init(log.initializer::<LoggedView>("a"))
        .style(log.style::<MarginLayoutParams>("second"))
        .init(log.initializer::<LoggedView>("b"));

    node.materialize(&registry, &Context::new(), Some(&OpaqueGroup::default()))
        .unwrap();

    assert_eq!(
        log.calls(),
        vec![
            UiCall::Constructed { widget: "LoggedView" },
            UiCall::ParamsCreated {
                width: 40,
                height: WRAP_CONTENT
            },
            UiCall::StyleApplied { label: "first" },
            UiCall::StyleApplied { label: "second" },
            UiCall::Initialized { label: "a" },
            UiCall::Initialized { label: "b" },
        ]
    );
}

#[test]
fn test_initializers_see_assigned_params() {
    let log = CallLog::new();
    let registry = logging_registry(&log);
    let mut node = element::<LoggedView>(5, 6).init(|view| {
        let params = view.layout_params().expect("params assigned before init");
        let size = format!("{}x{}", params.width(), params.height());
        view.host_label = Some(size);
    });
    let widget = node
        .materialize(&registry, &Context::new(), Some(&FrameLayout::default()))
        .unwrap();
    assert_eq!(widget.borrow().host_label.as_deref(), Some("5x6"));
}

#[test]
fn test_materialize_is_one_shot() {
    let log = CallLog::new();
    let registry = logging_registry(&log);
    let parent = FrameLayout::default();
    let mut node = element::<LoggedView>(1, 1);

    node.materialize(&registry, &Context::new(), Some(&parent)).unwrap();
    let err = node.materialize(&registry, &Context::new(), Some(&parent)).err();

    assert_eq!(
        err,
        Some(TrellisError::AlreadyMaterialized {
            widget: "LoggedView"
        })
    );
    assert_eq!(
        log.count(|call| matches!(call, UiCall::Constructed { .. })),
        1
    );
}

#[test]
fn test_sealed_node_rejects_styles_but_runs_initializers() {
    let log = CallLog::new();
    let registry = logging_registry(&log);
    let mut node = element::<LoggedView>(1, 1);
    node.materialize(&registry, &Context::new(), Some(&FrameLayout::default()))
        .unwrap();
    log.clear();

    assert_eq!(
        node.add_style(Style::from(MarginStyle::new().all(1))),
        Err(TrellisError::StyleAfterMaterialization {
            widget: "LoggedView"
        })
    );
    node.ensure_initialized(log.initializer::<LoggedView>("late"));
    assert_eq!(log.calls(), vec![UiCall::Initialized { label: "late" }]);

    // The fluent form logs the rejection and keeps the node usable.
    let node = node.style(MarginStyle::new().all(2)).id(9);
    assert_eq!(node.widget().unwrap().borrow().id(), 9);
}

#[test]
fn test_context_reaches_factories() {
    let log = CallLog::new();
    let registry = logging_registry(&log);
    let context = Context::new().with_host(String::from("main-screen"));
    let widget = element::<LoggedView>(1, 1)
        .materialize(&registry, &context, Some(&FrameLayout::default()))
        .unwrap();
    assert_eq!(widget.borrow().host_label.as_deref(), Some("main-screen"));
}

#[test]
fn test_default_only_params_are_sized_after_construction() {
    let registry = Registry::with_standard_catalogue();
    let mut root = container::<DefaultOnlyGroup, _>(
        FILL_PARENT,
        FILL_PARENT,
        [element::<TextView>(120, 48).boxed()],
    );
    let widget = root.materialize(&registry, &Context::new(), None).unwrap();
    let group = widget.borrow();
    let child = group.child_at(0).unwrap();
    let child = child.borrow();
    let params = child.layout_params().unwrap();
    assert_eq!(params.family(), "margin");
    assert_eq!((params.width(), params.height()), (120, 48));
}

#[test]
fn test_unresolvable_params_leave_node_configuring() {
    let log = CallLog::new();
    let mut registry = Registry::with_standard_catalogue();
    let mut node = element::<TextView>(1, 1).text("kept");

    let err = node
        .materialize(&registry, &Context::new(), Some(&OpaqueGroup::default()))
        .err();
    assert_eq!(
        err,
        Some(TrellisError::UnresolvableLayoutParamsType {
            container: "OpaqueGroup",
            reason: LayoutParamsFailure::NoNestedType,
        })
    );
    assert!(!node.is_materialized());
    assert_eq!(node.pending_init_count(), 1);

    register_test_widgets(&mut registry, &log);
    let widget = node
        .materialize(&registry, &Context::new(), Some(&OpaqueGroup::default()))
        .unwrap();
    assert_eq!(widget.borrow().text.text, "kept");
}

#[test]
fn test_unregistered_widget_without_constructor_fails() {
    let registry = Registry::with_standard_catalogue();
    let err = element::<LoggedView>(1, 1)
        .materialize(&registry, &Context::new(), Some(&FrameLayout::default()))
        .err();
    assert_eq!(
        err,
        Some(TrellisError::UnresolvableWidgetType {
            widget: "LoggedView"
        })
    );
}

#[test]
fn test_leaf_root_has_no_parent_container() {
    let registry = Registry::with_standard_catalogue();
    let err = element::<Button>(1, 1)
        .materialize(&registry, &Context::new(), None)
        .err();
    assert!(matches!(
        err,
        Some(TrellisError::UnresolvableLayoutParamsType {
            reason: LayoutParamsFailure::NoParentContainer,
            ..
        })
    ));
}

#[test]
fn test_nested_containers_use_their_own_params() {
    let registry = Registry::with_standard_catalogue();
    let mut root = container::<FrameLayout, _>(
        FILL_PARENT,
        FILL_PARENT,
        [container::<LinearLayout, _>(
            FILL_PARENT,
            WRAP_CONTENT,
            [
                element::<TextView>(WRAP_CONTENT, WRAP_CONTENT)
                    .id(1)
                    .style(LinearStyle::new().weight(2.0))
                    .boxed(),
                container::<RelativeLayout, _>(FILL_PARENT, FILL_PARENT, [
                    element::<Button>(WRAP_CONTENT, WRAP_CONTENT)
                        .id(2)
                        .style(RelativeStyle::new().center_in_parent())
                        .boxed(),
                ])
                .boxed(),
            ],
        )
        .style(FrameStyle::new().gravity(Gravity::CENTER))
        .boxed()],
    );

    let frame = root.materialize(&registry, &Context::new(), None).unwrap();
    let frame = frame.borrow();

    let linear = frame.child_at(0).unwrap();
    assert_eq!(linear.borrow().layout_params().unwrap().family(), "frame");

    let label = frame.find_view_by_id(1).unwrap();
    let label = label.borrow();
    let params = label.layout_params().unwrap().as_linear().unwrap();
    assert_eq!(params.weight, 2.0);

    let button = frame.find_view_by_id(2).unwrap();
    let button = button.borrow();
    let params = button
        .layout_params()
        .unwrap()
        .as_any()
        .downcast_ref::<RelativeLayoutParams>()
        .unwrap();
    assert_eq!(params.rule(RelativeRule::CenterInParent), Some(RULE_TRUE));
}

#[test]
fn test_diagnostics_do_not_change_outcomes() {
    let registry = Registry::with_standard_catalogue();
    let build = || {
        element::<TextView>(FILL_PARENT, WRAP_CONTENT)
            .style(FrameStyle::new().gravity(Gravity::RIGHT))
            .style(MarginStyle::new().top(4))
    };

    let silent = build()
        .materialize(&registry, &Context::new(), Some(&LinearLayout::default()))
        .unwrap();
    let config = Config::default().with_style_diagnostics(StyleDiagnostics::Warn);
    let warned = build()
        .materialize(
            &registry,
            &Context::new().with_config(config),
            Some(&LinearLayout::default()),
        )
        .unwrap();

    for widget in [silent, warned] {
        let label = widget.borrow();
        let params = label.layout_params().unwrap();
        assert_eq!(params.family(), "linear");
        assert_eq!(params.margins().map(|m| m.top), Some(4));
        assert_eq!(params.as_linear().unwrap().gravity, None);
    }
}

#[test]
fn test_none_children_and_styles_are_dropped() {
    let registry = Registry::with_standard_catalogue();
    let maybe_footer: Option<Box<dyn Element>> = None;
    let mut root = container::<LinearLayout, _>(
        FILL_PARENT,
        FILL_PARENT,
        [Some(element::<TextView>(1, 1).boxed()), maybe_footer],
    )
    .styles([None, Some(Style::from(PaddingStyle::new().all(2)))]);

    let widget = root.materialize(&registry, &Context::new(), None).unwrap();
    let layout = widget.borrow();
    assert_eq!(layout.child_count(), 1);
    assert_eq!(layout.padding(), Insets::all(2));
}

#[test]
fn test_end_to_end_fill_wrap_tree() {
    let registry = Registry::with_standard_catalogue();
    let mut root = Container::<LinearLayout>::with_dimensions(Dimensions::FILL_WRAP)
        .child(element_sized::<TextView>(Dimensions::WRAP_WRAP).text("left"))
        .child(element_sized::<Button>(Dimensions::WRAP_WRAP).text("right"));

    let widget = root.materialize(&registry, &Context::new(), None).unwrap();
    let layout = widget.borrow();
    let params = layout.layout_params().unwrap();
    assert_eq!((params.width(), params.height()), (FILL_PARENT, WRAP_CONTENT));
    assert_eq!(layout.child_count(), 2);

    let texts: Vec<String> = layout
        .children()
        .iter()
        .map(|child| {
            let child = child.borrow();
            assert!(child.as_view_group().is_none());
            let params = child.layout_params().unwrap();
            assert_eq!((params.width(), params.height()), (WRAP_CONTENT, WRAP_CONTENT));
            child.as_text().unwrap().text().to_owned()
        })
        .collect();
    assert_eq!(texts, vec!["left", "right"]);
}

#[test]
fn test_mismatched_family_is_a_no_op() {
    let registry = Registry::with_standard_catalogue();
    let styled = element::<TextView>(WRAP_CONTENT, WRAP_CONTENT)
        .style(LinearStyle::new().weight(3.0).gravity(Gravity::CENTER))
        .style(RowStyle::new().column(2))
        .materialize(&registry, &Context::new(), Some(&RelativeLayout::default()))
        .unwrap();
    let plain = element::<TextView>(WRAP_CONTENT, WRAP_CONTENT)
        .materialize(&registry, &Context::new(), Some(&RelativeLayout::default()))
        .unwrap();

    let styled = styled.borrow();
    let plain = plain.borrow();
    let styled = styled
        .layout_params()
        .unwrap()
        .as_any()
        .downcast_ref::<RelativeLayoutParams>()
        .unwrap();
    let plain = plain
        .layout_params()
        .unwrap()
        .as_any()
        .downcast_ref::<RelativeLayoutParams>()
        .unwrap();
    assert_eq!(styled, plain);
}

#[test]
fn test_failing_child_discards_container_widget() {
    let log = CallLog::new();
    let registry = Registry::with_standard_catalogue();
    let mut root = container::<LinearLayout, _>(
        FILL_PARENT,
        FILL_PARENT,
        [
            element::<TextView>(WRAP_CONTENT, WRAP_CONTENT)
                .init(log.initializer::<TextView>("first"))
                .boxed(),
            // LoggedView is not registered here and has no constructor hook.
            element::<LoggedView>(WRAP_CONTENT, WRAP_CONTENT).boxed(),
        ],
    );

    let err = root
        .materialize(&registry, &Context::new(), None)
        .unwrap_err();
    assert_eq!(
        err,
        TrellisError::UnresolvableWidgetType {
            widget: "LoggedView"
        }
    );
    assert_eq!(log.calls(), vec![UiCall::Initialized { label: "first" }]);
    assert!(root.widget().is_none());
    assert!(root.node().is_aborted());

    let retry = root.materialize(&registry, &Context::new(), None).err();
    assert_eq!(
        retry,
        Some(TrellisError::MaterializationAborted {
            widget: "LinearLayout"
        })
    );
}

#[test]
fn test_margin_custom_style_reaches_linear_children() {
    let registry = Registry::with_standard_catalogue();
    let margins = Style::for_params::<MarginLayoutParams>(|_, params| {
        params.margins = Insets::all(7);
    });
    let mut root = Container::<LinearLayout>::with_dimensions(Dimensions::FILL_WRAP)
        .child(element_sized::<Button>(Dimensions::WRAP_WRAP).style(margins));

    let widget = root.materialize(&registry, &Context::new(), None).unwrap();
    let button = widget.borrow().child_at(0).unwrap();
    let button = button.borrow();
    let params = button.layout_params().unwrap();
    assert!(params.as_any().is::<LinearLayoutParams>());
    assert_eq!(params.margins(), Some(&Insets::all(7)));
}

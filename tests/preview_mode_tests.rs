use chart_viewport::core::{ChartComputator, ComputatorMode, Viewport};
use chart_viewport::interaction::ChartScroller;

fn build_preview_computator() -> ChartComputator {
    let mut computator = ChartComputator::preview();
    computator.set_content_rect(1000, 1000, 0, 0, 0, 0);
    computator.set_maximum_viewport_edges(0.0, 100.0, 100.0, 0.0);
    computator.set_current_viewport(Viewport::new(0.0, 100.0, 50.0, 50.0));
    computator
}

#[test]
fn preview_mode_is_reported_by_the_constructor() {
    assert_eq!(ChartComputator::new().mode(), ComputatorMode::Normal);
    assert_eq!(ChartComputator::preview().mode(), ComputatorMode::Preview);
    assert_eq!(
        ChartComputator::with_mode(ComputatorMode::Preview).mode(),
        ComputatorMode::Preview
    );
}

#[test]
fn preview_draws_from_the_maximum_viewport() {
    let computator = build_preview_computator();
    // The current viewport covers only the top-left quarter, yet values map
    // across the full data extent.
    assert!((computator.compute_raw_x(50.0) - 500.0).abs() <= 1e-3);
    assert!((computator.compute_raw_x(100.0) - 1000.0).abs() <= 1e-3);
    assert!((computator.compute_raw_y(0.0) - 1000.0).abs() <= 1e-3);
}

#[test]
fn preview_visible_viewport_is_the_maximum_viewport() {
    let computator = build_preview_computator();
    assert_eq!(
        computator.visible_viewport(),
        Viewport::new(0.0, 100.0, 100.0, 0.0)
    );
    assert_eq!(
        computator.current_viewport(),
        Viewport::new(0.0, 100.0, 50.0, 50.0)
    );
}

#[test]
fn preview_set_visible_viewport_updates_the_maximum() {
    let mut computator = build_preview_computator();
    computator.set_visible_viewport(Viewport::new(0.0, 200.0, 200.0, 0.0));
    assert_eq!(
        computator.maximum_viewport(),
        Viewport::new(0.0, 200.0, 200.0, 0.0)
    );

    let mut normal = ChartComputator::new();
    normal.set_content_rect(1000, 1000, 0, 0, 0, 0);
    normal.set_maximum_viewport_edges(0.0, 100.0, 100.0, 0.0);
    normal.set_visible_viewport(Viewport::new(10.0, 90.0, 60.0, 40.0));
    assert_eq!(normal.maximum_viewport(), Viewport::new(0.0, 100.0, 100.0, 0.0));
    assert_eq!(normal.current_viewport(), Viewport::new(10.0, 90.0, 60.0, 40.0));
}

#[test]
fn preview_drag_moves_the_selection_window_in_max_viewport_units() {
    let mut computator = build_preview_computator();
    let mut scroller = ChartScroller::new();
    scroller.start_scroll(&computator);

    // In preview the drag converts through the maximum viewport: 100 px over
    // 1000 px showing 100 units moves the window by 10 units.
    let result = scroller.scroll(&mut computator, 100.0, 0.0);
    assert!(result.can_scroll_x);
    let committed = computator.current_viewport();
    assert!((committed.left - 10.0).abs() <= 1e-3);
    assert!((committed.right - 60.0).abs() <= 1e-3);
}

#[test]
fn preview_constraint_rules_match_normal_mode() {
    let mut computator = build_preview_computator();
    computator.set_current_viewport_edges(-20.0, 150.0, 130.0, -10.0);
    assert_eq!(
        computator.current_viewport(),
        Viewport::new(0.0, 100.0, 100.0, 0.0)
    );
}

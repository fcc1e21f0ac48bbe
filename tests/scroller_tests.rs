use chart_viewport::core::{ChartComputator, Viewport};
use chart_viewport::interaction::{ChartScroller, FlingConfig};

fn build_computator() -> ChartComputator {
    let mut computator = ChartComputator::new();
    computator.set_content_rect(1000, 1000, 0, 0, 0, 0);
    computator.set_maximum_viewport_edges(0.0, 100.0, 100.0, 0.0);
    // Zoomed to the top-left quarter so there is room to scroll right/down.
    computator.set_current_viewport(Viewport::new(0.0, 100.0, 50.0, 50.0));
    computator
}

fn viewport_approx_eq(a: Viewport, b: Viewport, tolerance: f32) -> bool {
    (a.left - b.left).abs() <= tolerance
        && (a.top - b.top).abs() <= tolerance
        && (a.right - b.right).abs() <= tolerance
        && (a.bottom - b.bottom).abs() <= tolerance
}

#[test]
fn drag_converts_pixel_distance_through_visible_viewport() {
    let mut computator = build_computator();
    let mut scroller = ChartScroller::new();
    assert!(scroller.start_scroll(&computator));

    // 100 px over a 1000 px content rect showing 50 units: 5 viewport units.
    let result = scroller.scroll(&mut computator, 100.0, 0.0);
    assert!(result.can_scroll_x);
    assert!(viewport_approx_eq(
        computator.current_viewport(),
        Viewport::new(5.0, 100.0, 55.0, 50.0),
        1e-4,
    ));
}

#[test]
fn drag_against_an_edge_reports_blocked_axis() {
    let mut computator = build_computator();
    let mut scroller = ChartScroller::new();
    scroller.start_scroll(&computator);

    // Already at the left edge, so a leftward drag cannot consume X.
    let result = scroller.scroll(&mut computator, -10.0, 0.0);
    assert!(!result.can_scroll_x);
    assert!(result.can_scroll_y);
    assert!(viewport_approx_eq(
        computator.current_viewport(),
        Viewport::new(0.0, 100.0, 50.0, 50.0),
        1e-4,
    ));
}

#[test]
fn fully_zoomed_out_chart_cannot_scroll_at_all() {
    let mut computator = build_computator();
    computator.set_current_viewport(Viewport::new(0.0, 100.0, 100.0, 0.0));
    let mut scroller = ChartScroller::new();
    scroller.start_scroll(&computator);

    let result = scroller.scroll(&mut computator, 50.0, 50.0);
    assert!(!result.any());
    assert_eq!(
        computator.current_viewport(),
        Viewport::new(0.0, 100.0, 100.0, 0.0)
    );
}

#[test]
fn vertical_drag_moves_viewport_down_in_value_space() {
    let mut computator = build_computator();
    let mut scroller = ChartScroller::new();
    scroller.start_scroll(&computator);

    // Dragging down by 100 px shows lower values: top drops by 5 units.
    let result = scroller.scroll(&mut computator, 0.0, 100.0);
    assert!(result.can_scroll_y);
    assert!(viewport_approx_eq(
        computator.current_viewport(),
        Viewport::new(0.0, 95.0, 50.0, 45.0),
        1e-4,
    ));
}

#[test]
fn fling_steps_decay_and_clamp_at_the_surface_edge() {
    let mut computator = build_computator();
    let mut scroller = ChartScroller::new();
    scroller
        .set_fling_config(FlingConfig {
            decay_per_second: 0.5,
            stop_velocity_abs: 10.0,
        })
        .unwrap();

    assert!(scroller.fling(1000.0, 0.0, &computator));
    assert!(scroller.is_fling_active());

    // Frame 1: travels 1000 surface px, i.e. half the 2000 px surface.
    assert!(scroller.compute_scroll_offset(&mut computator, 1.0));
    assert!(viewport_approx_eq(
        computator.current_viewport(),
        Viewport::new(50.0, 100.0, 100.0, 50.0),
        1e-3,
    ));
    assert!(scroller.is_fling_active());

    // Frame 2: hits the surface edge, zeroes velocity and finishes.
    assert!(scroller.compute_scroll_offset(&mut computator, 1.0));
    assert!(!scroller.is_fling_active());
    assert!(viewport_approx_eq(
        computator.current_viewport(),
        Viewport::new(50.0, 100.0, 100.0, 50.0),
        1e-3,
    ));

    // Frame 3: nothing left to animate.
    assert!(!scroller.compute_scroll_offset(&mut computator, 1.0));
}

#[test]
fn fling_below_stop_velocity_finishes_on_first_frame() {
    let mut computator = build_computator();
    let mut scroller = ChartScroller::new();
    scroller
        .set_fling_config(FlingConfig {
            decay_per_second: 0.5,
            stop_velocity_abs: 10.0,
        })
        .unwrap();

    scroller.fling(12.0, 0.0, &computator);
    // After one frame the decayed velocity (6) is below the threshold.
    assert!(scroller.compute_scroll_offset(&mut computator, 1.0));
    assert!(!scroller.is_fling_active());
}

#[test]
fn start_scroll_aborts_an_in_flight_fling() {
    let mut computator = build_computator();
    let mut scroller = ChartScroller::new();
    scroller.fling(1000.0, 0.0, &computator);
    assert!(scroller.is_fling_active());

    scroller.start_scroll(&computator);
    assert!(!scroller.is_fling_active());
    assert!(!scroller.compute_scroll_offset(&mut computator, 1.0));
}

#[test]
fn zero_or_negative_frame_delta_does_not_advance_fling() {
    let mut computator = build_computator();
    let mut scroller = ChartScroller::new();
    scroller.fling(1000.0, 0.0, &computator);

    let before = computator.current_viewport();
    assert!(scroller.compute_scroll_offset(&mut computator, 0.0));
    assert!(scroller.compute_scroll_offset(&mut computator, -1.0));
    assert_eq!(computator.current_viewport(), before);
    assert!(scroller.is_fling_active());
}

#[test]
fn invalid_fling_config_is_rejected() {
    let mut scroller = ChartScroller::new();
    assert!(
        scroller
            .set_fling_config(FlingConfig {
                decay_per_second: 1.5,
                stop_velocity_abs: 10.0,
            })
            .is_err()
    );
    assert!(
        scroller
            .set_fling_config(FlingConfig {
                decay_per_second: 0.5,
                stop_velocity_abs: 0.0,
            })
            .is_err()
    );
    // The previous (default) config survives rejected updates.
    assert_eq!(scroller.fling_config(), FlingConfig::default());
}

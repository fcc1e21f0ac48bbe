use chart_viewport::core::{ChartComputator, Viewport};
use proptest::prelude::*;

fn build_computator() -> ChartComputator {
    let mut computator = ChartComputator::new();
    computator.set_content_rect(1000, 1000, 0, 0, 0, 0);
    computator.set_maximum_viewport_edges(0.0, 100.0, 100.0, 0.0);
    computator
}

proptest! {
    #[test]
    fn committed_viewport_stays_inside_maximum_property(
        left in -500.0f32..500.0,
        top in -500.0f32..500.0,
        width in -100.0f32..700.0,
        height in -100.0f32..700.0
    ) {
        let mut computator = build_computator();
        computator.set_current_viewport_edges(left, top, left + width, top - height);

        let committed = computator.current_viewport();
        let max = computator.maximum_viewport();
        prop_assert!(committed.left >= max.left);
        prop_assert!(committed.right <= max.right);
        prop_assert!(committed.top <= max.top);
        prop_assert!(committed.bottom >= max.bottom);
    }

    #[test]
    fn committed_viewport_respects_minimum_size_property(
        left in -200.0f32..300.0,
        top in -200.0f32..300.0,
        width in 0.0f32..150.0,
        height in 0.0f32..150.0
    ) {
        let mut computator = build_computator();
        computator.set_current_viewport_edges(left, top, left + width, top - height);

        let committed = computator.current_viewport();
        prop_assert!(committed.width() >= computator.minimum_viewport_width() - 1e-3);
        prop_assert!(committed.height() >= computator.minimum_viewport_height() - 1e-3);
    }

    #[test]
    fn constrain_viewport_is_approximately_idempotent_property(
        left in -200.0f32..200.0,
        top in -200.0f32..200.0,
        width in 0.0f32..400.0,
        height in 0.0f32..400.0
    ) {
        let mut computator = build_computator();
        computator.set_current_viewport_edges(left, top, left + width, top - height);
        let first = computator.current_viewport();

        computator.set_current_viewport(first);
        let second = computator.current_viewport();
        prop_assert!((second.left - first.left).abs() <= 1e-3);
        prop_assert!((second.top - first.top).abs() <= 1e-3);
        prop_assert!((second.right - first.right).abs() <= 1e-3);
        prop_assert!((second.bottom - first.bottom).abs() <= 1e-3);
    }

    #[test]
    fn pixel_transform_round_trip_property(
        x_factor in 0.0f32..0.99,
        y_factor in 0.01f32..0.99
    ) {
        let computator = {
            let mut computator = build_computator();
            computator.set_current_viewport(Viewport::new(0.0, 100.0, 100.0, 0.0));
            computator
        };
        let data_x = 100.0 * x_factor;
        let data_y = 100.0 * y_factor;

        let px = computator.compute_raw_x(data_x);
        let py = computator.compute_raw_y(data_y);
        let recovered = computator
            .raw_pixels_to_data_point(px, py)
            .expect("pixel inside content rect");
        prop_assert!((recovered.x - data_x).abs() <= 0.2);
        prop_assert!((recovered.y - data_y).abs() <= 0.2);
    }

    #[test]
    fn set_viewport_top_left_preserves_size_property(
        start_left in 0.0f32..50.0,
        start_top in 50.0f32..100.0,
        new_left in -200.0f32..200.0,
        new_top in -200.0f32..200.0
    ) {
        let mut computator = build_computator();
        computator.set_current_viewport_edges(start_left, start_top, start_left + 40.0, start_top - 40.0);
        let before = computator.current_viewport();

        computator.set_viewport_top_left(new_left, new_top);
        let after = computator.current_viewport();
        prop_assert!((after.width() - before.width()).abs() <= 1e-3);
        prop_assert!((after.height() - before.height()).abs() <= 1e-3);
    }
}

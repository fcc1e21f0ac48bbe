pub mod axis_values;
pub mod computator;
pub mod rect;
pub mod selected_value;
pub mod viewport;

pub use axis_values::{
    AxisAutoValues, almost_equal, compute_auto_generated_axis_values, next_down_f32, next_down_f64,
    next_up_f32, next_up_f64, round_to_one_significant_figure,
};
pub use computator::{
    ChartComputator, ComputatorMode, DEFAULT_MAXIMUM_ZOOM, ViewportChangeListener,
};
pub use rect::{DataPoint, Point, Rect};
pub use selected_value::{SelectedValue, SelectedValueType};
pub use viewport::Viewport;

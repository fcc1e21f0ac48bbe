pub mod rotation_handler;
pub mod scroller;
pub mod touch_handler;
pub mod zoomer;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub use rotation_handler::{FLING_VELOCITY_DOWNSCALE, RadialChart, RotationHandler};
pub use scroller::{ChartScroller, ScrollResult};
pub use touch_handler::{
    ChartRenderer, ChartTouchHandler, ScrollContainer, SelectionTracker, ValueTouchListener,
};
pub use zoomer::{ChartZoomer, ZOOM_AMOUNT, ZoomAnimationConfig};

/// Restricts which viewport axes a zoom gesture may affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomType {
    #[default]
    HorizontalAndVertical,
    Horizontal,
    Vertical,
}

/// Scroll orientation of an enclosing container the chart lives in, e.g. a
/// horizontal pager. Drives when the container may take over touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerScrollType {
    Horizontal,
    Vertical,
}

/// Semantic gesture vocabulary consumed by the touch handlers. Decoding raw
/// pointer streams into these events is the host platform's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Cancel,
    /// Drag by `(distance_x, distance_y)` pixels with the pointer currently
    /// at `(x, y)`.
    Scroll { x: f32, y: f32, distance_x: f32, distance_y: f32 },
    /// Fast drag release with pixel velocity `(velocity_x, velocity_y)` and
    /// the pointer last seen at `(x, y)`.
    Fling { x: f32, y: f32, velocity_x: f32, velocity_y: f32 },
    DoubleTap { x: f32, y: f32 },
    ScaleBegin,
    /// Pinch update around the pixel focus with the detector's scale factor.
    Scale { focus_x: f32, focus_y: f32, factor: f32 },
    ScaleEnd,
}

/// Tuning for deterministic fling stepping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlingConfig {
    /// Multiplicative velocity decay per second.
    pub decay_per_second: f32,
    /// The fling stops when `abs(velocity)` drops below this threshold on
    /// both axes.
    pub stop_velocity_abs: f32,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            decay_per_second: 0.05,
            stop_velocity_abs: 50.0,
        }
    }
}

impl FlingConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.decay_per_second.is_finite()
            || self.decay_per_second <= 0.0
            || self.decay_per_second >= 1.0
        {
            return Err(ChartError::InvalidConfig(
                "fling decay must be finite and within (0, 1)".to_owned(),
            ));
        }
        if !self.stop_velocity_abs.is_finite() || self.stop_velocity_abs <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "fling stop velocity must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

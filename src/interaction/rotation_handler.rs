use tracing::trace;

use crate::core::SelectedValue;
use crate::error::ChartResult;
use crate::interaction::touch_handler::{ChartRenderer, SelectionTracker, ValueTouchListener};
use crate::interaction::{FlingConfig, GestureEvent};

/// The initial fling velocity is divided by this amount.
pub const FLING_VELOCITY_DOWNSCALE: f32 = 4.0;

/// Rotation capability of a radial chart, e.g. a pie chart.
pub trait RadialChart {
    /// Current rotation in degrees.
    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, degrees: f32);
    /// Pixel center of the chart circle.
    fn circle_center(&self) -> (f32, f32);
}

#[derive(Debug, Clone, Copy, Default)]
struct RotationFling {
    active: bool,
    rotation: f32,
    velocity: f32,
}

/// Touch handler for radial charts. Drags and flings rotate the chart
/// instead of scrolling the viewport; zoom is not supported.
pub struct RotationHandler {
    pub is_rotation_enabled: bool,
    pub is_value_touch_enabled: bool,
    pub is_value_selection_enabled: bool,
    selection: SelectionTracker,
    fling: RotationFling,
    config: FlingConfig,
}

impl Default for RotationHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationHandler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_rotation_enabled: true,
            is_value_touch_enabled: true,
            is_value_selection_enabled: false,
            selection: SelectionTracker::default(),
            fling: RotationFling::default(),
            config: FlingConfig::default(),
        }
    }

    #[must_use]
    pub fn fling_config(&self) -> FlingConfig {
        self.config
    }

    pub fn set_fling_config(&mut self, config: FlingConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn selected_value(&self) -> SelectedValue {
        self.selection.selected_value()
    }

    pub fn set_value_touch_listener(&mut self, listener: Option<Box<dyn ValueTouchListener>>) {
        self.selection.set_listener(listener);
    }

    /// Advances an angular fling by one frame. Returns true while the fling
    /// is active and the chart needs another frame.
    pub fn compute_scroll(&mut self, chart: &mut dyn RadialChart, delta_seconds: f32) -> bool {
        if !self.is_rotation_enabled || !self.fling.active || !(delta_seconds > 0.0) {
            return self.is_rotation_enabled && self.fling.active;
        }
        self.fling.rotation += self.fling.velocity * delta_seconds;
        let decay = self.config.decay_per_second.powf(delta_seconds);
        self.fling.velocity *= decay;
        if self.fling.velocity.abs() < self.config.stop_velocity_abs {
            self.fling.active = false;
        }
        chart.set_rotation(self.fling.rotation);
        true
    }

    /// Handles one semantic gesture. Returns true when chart state changed
    /// and a redraw is needed.
    pub fn handle_event(
        &mut self,
        event: GestureEvent,
        chart: &mut dyn RadialChart,
        renderer: &mut dyn ChartRenderer,
    ) -> bool {
        match event {
            GestureEvent::Down { x, y } => {
                let mut need_invalidate = false;
                if self.is_rotation_enabled {
                    self.fling.active = false;
                    need_invalidate = true;
                }
                if self.is_value_touch_enabled {
                    need_invalidate |=
                        self.selection
                            .on_down(renderer, x, y, self.is_value_selection_enabled);
                }
                need_invalidate
            }
            GestureEvent::Move { x, y } => {
                self.is_value_touch_enabled && self.selection.on_move(renderer, x, y)
            }
            GestureEvent::Up { x, y } => {
                self.is_value_touch_enabled
                    && self
                        .selection
                        .on_up(renderer, x, y, self.is_value_selection_enabled)
            }
            GestureEvent::Cancel => self.is_value_touch_enabled && self.selection.on_cancel(renderer),
            GestureEvent::Scroll {
                x,
                y,
                distance_x,
                distance_y,
            } => {
                if self.is_rotation_enabled {
                    let (center_x, center_y) = chart.circle_center();
                    let scroll_theta =
                        vector_to_scalar_scroll(distance_x, distance_y, x - center_x, y - center_y);
                    chart.set_rotation(chart.rotation() - scroll_theta / FLING_VELOCITY_DOWNSCALE);
                    true
                } else {
                    false
                }
            }
            GestureEvent::Fling {
                x,
                y,
                velocity_x,
                velocity_y,
            } => {
                if self.is_rotation_enabled {
                    let (center_x, center_y) = chart.circle_center();
                    let scroll_theta =
                        vector_to_scalar_scroll(velocity_x, velocity_y, x - center_x, y - center_y);
                    self.fling = RotationFling {
                        active: true,
                        rotation: chart.rotation(),
                        velocity: scroll_theta / FLING_VELOCITY_DOWNSCALE,
                    };
                    trace!(velocity = self.fling.velocity, "rotation fling started");
                    true
                } else {
                    false
                }
            }
            // No zoom for radial charts.
            GestureEvent::DoubleTap { .. }
            | GestureEvent::ScaleBegin
            | GestureEvent::Scale { .. }
            | GestureEvent::ScaleEnd => false,
        }
    }
}

/// Translates an `(dx, dy)` scroll vector into a scalar rotation delta. The
/// sign comes from the dot product with the vector perpendicular to the
/// touch position relative to the circle center, giving clockwise vs
/// counterclockwise.
fn vector_to_scalar_scroll(dx: f32, dy: f32, x: f32, y: f32) -> f32 {
    let length = (dx * dx + dy * dy).sqrt();
    let cross_x = -y;
    let dot = cross_x * dx + x * dy;
    let sign = if dot > 0.0 {
        1.0
    } else if dot < 0.0 {
        -1.0
    } else {
        0.0
    };
    length * sign
}

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ChartComputator, DataPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ZoomType;

/// Relative size reduction applied by a double-tap zoom: the viewport shrinks
/// by 25% around the focal point.
pub const ZOOM_AMOUNT: f32 = 0.25;

/// Tuning for the deterministic double-tap zoom animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomAnimationConfig {
    pub duration_seconds: f32,
    pub zoom_amount: f32,
}

impl Default for ZoomAnimationConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 0.2,
            zoom_amount: ZOOM_AMOUNT,
        }
    }
}

impl ZoomAnimationConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "zoom animation duration must be finite and > 0".to_owned(),
            ));
        }
        if !self.zoom_amount.is_finite() || self.zoom_amount <= 0.0 || self.zoom_amount >= 1.0 {
            return Err(ChartError::InvalidConfig(
                "zoom amount must be finite and within (0, 1)".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ZoomAnimation {
    active: bool,
    elapsed: f32,
}

impl ZoomAnimation {
    /// Advances the animation and returns the current zoom fraction, `None`
    /// once finished. The completing step applies the exact end value.
    fn step(&mut self, config: ZoomAnimationConfig, delta_seconds: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.elapsed += delta_seconds.max(0.0);
        let t = self.elapsed / config.duration_seconds;
        if t >= 1.0 {
            self.active = false;
            return Some(config.zoom_amount);
        }
        // Decelerate interpolation.
        Some(config.zoom_amount * (1.0 - (1.0 - t) * (1.0 - t)))
    }
}

/// Translates pinch-scale and double-tap gestures into viewport resizing
/// around a focal point.
#[derive(Debug, Default)]
pub struct ChartZoomer {
    zoom_type: ZoomType,
    config: ZoomAnimationConfig,
    animation: ZoomAnimation,
    zoom_focal_point: DataPoint, // Used for double tap zoom.
    scroller_start_viewport: Viewport,
}

impl ChartZoomer {
    #[must_use]
    pub fn new(zoom_type: ZoomType) -> Self {
        Self {
            zoom_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn zoom_type(&self) -> ZoomType {
        self.zoom_type
    }

    pub fn set_zoom_type(&mut self, zoom_type: ZoomType) {
        self.zoom_type = zoom_type;
    }

    #[must_use]
    pub fn animation_config(&self) -> ZoomAnimationConfig {
        self.config
    }

    pub fn set_animation_config(&mut self, config: ZoomAnimationConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    /// Starts a double-tap zoom toward the data point under `(x, y)`.
    /// Returns false without effect when the touch lies outside the content
    /// area.
    pub fn start_zoom(&mut self, x: f32, y: f32, computator: &ChartComputator) -> bool {
        self.animation.active = false;
        self.scroller_start_viewport = computator.current_viewport();
        let Some(focus) = computator.raw_pixels_to_data_point(x, y) else {
            // Focus point is not within content area.
            return false;
        };
        self.zoom_focal_point = focus;
        self.animation = ZoomAnimation {
            active: true,
            elapsed: 0.0,
        };
        trace!(x, y, "double-tap zoom started");
        true
    }

    /// Advances the double-tap zoom by one frame of `delta_seconds`. The new
    /// viewport keeps the focal point at a fixed relative position so it
    /// stays under the same pixel throughout. Returns true while the
    /// animation is active.
    pub fn compute_zoom(&mut self, computator: &mut ChartComputator, delta_seconds: f32) -> bool {
        let Some(zoom) = self.animation.step(self.config, delta_seconds) else {
            return false;
        };
        let start = self.scroller_start_viewport;
        let new_width = (1.0 - zoom) * start.width();
        let new_height = (1.0 - zoom) * start.height();
        let focus = self.zoom_focal_point;
        let point_within_viewport_x = (focus.x - start.left) / start.width();
        let point_within_viewport_y = (focus.y - start.bottom) / start.height();
        let left = focus.x - new_width * point_within_viewport_x;
        let top = focus.y + new_height * (1.0 - point_within_viewport_y);
        let right = focus.x + new_width * (1.0 - point_within_viewport_x);
        let bottom = focus.y - new_height * point_within_viewport_y;
        self.set_current_viewport(computator, left, top, right, bottom);
        true
    }

    /// Continuous pinch zoom around the pixel focus. A scale below 1 zooms
    /// in, above 1 zooms out. Returns false without effect when the focus is
    /// outside the content area.
    pub fn scale(
        &mut self,
        computator: &mut ChartComputator,
        focus_x: f32,
        focus_y: f32,
        scale: f32,
    ) -> bool {
        // Smaller viewport means bigger zoom.
        let current = computator.current_viewport();
        let new_width = scale * current.width();
        let new_height = scale * current.height();
        let Some(focus) = computator.raw_pixels_to_data_point(focus_x, focus_y) else {
            // Focus point is not within content area.
            return false;
        };
        let rect = computator.content_rect_minus_all_margins();
        let content_margin_left = focus_x - rect.left as f32;
        let content_margin_top = focus_y - rect.top as f32;
        let width_per_pixel = new_width / rect.width() as f32;
        let height_per_pixel = new_height / rect.height() as f32;
        let left = focus.x - content_margin_left * width_per_pixel;
        let top = focus.y + content_margin_top * height_per_pixel;
        let right = left + new_width;
        let bottom = top - new_height;
        self.set_current_viewport(computator, left, top, right, bottom);
        true
    }

    /// True while a double-tap zoom animation is in flight.
    #[must_use]
    pub fn is_zoom_active(&self) -> bool {
        self.animation.active
    }

    /// Applies the candidate rectangle through the configured axis
    /// restriction; the untouched axis keeps its current extent.
    fn set_current_viewport(
        &self,
        computator: &mut ChartComputator,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) {
        if !(left.is_finite() && top.is_finite() && right.is_finite() && bottom.is_finite()) {
            // Degenerate start viewport; keep the committed viewport as is.
            return;
        }
        let current = computator.current_viewport();
        match self.zoom_type {
            ZoomType::HorizontalAndVertical => {
                computator.set_current_viewport_edges(left, top, right, bottom);
            }
            ZoomType::Horizontal => {
                computator.set_current_viewport_edges(left, current.top, right, current.bottom);
            }
            ZoomType::Vertical => {
                computator.set_current_viewport_edges(current.left, top, current.right, bottom);
            }
        }
    }
}

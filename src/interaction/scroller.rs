use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ChartComputator, Viewport};
use crate::error::ChartResult;
use crate::interaction::FlingConfig;

/// Per-axis scrollability computed by [`ChartScroller::scroll`]. Reported
/// even when no movement occurred, so a host can decide whether to hand the
/// gesture back to an enclosing scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollResult {
    pub can_scroll_x: bool,
    pub can_scroll_y: bool,
}

impl ScrollResult {
    /// True iff either axis could scroll.
    #[must_use]
    pub fn any(self) -> bool {
        self.can_scroll_x || self.can_scroll_y
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct FlingState {
    active: bool,
    x: f32,
    y: f32,
    velocity_x: f32,
    velocity_y: f32,
    max_x: f32,
    max_y: f32,
}

/// Translates drag and fling gestures into viewport offsets.
///
/// Drags move the viewport directly. Flings run a deterministic
/// decaying-velocity simulation over the virtual scroll surface, advanced one
/// frame at a time by an external frame clock.
#[derive(Debug, Default)]
pub struct ChartScroller {
    scroller_start_viewport: Viewport, // Used only for zooms and flings.
    fling: FlingState,
    config: FlingConfig,
}

impl ChartScroller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fling_config(&self) -> FlingConfig {
        self.config
    }

    pub fn set_fling_config(&mut self, config: FlingConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    /// Accepts a drag gesture: aborts any in-flight fling and snapshots the
    /// current viewport.
    pub fn start_scroll(&mut self, computator: &ChartComputator) -> bool {
        self.fling.active = false;
        self.scroller_start_viewport = computator.current_viewport();
        true
    }

    /// Applies a pixel drag delta to the viewport.
    ///
    /// Scrolling is possible on an axis when the current viewport has room to
    /// move against the maximum viewport in the dragged direction. The pixel
    /// delta is converted into viewport space through the visible viewport
    /// before repositioning.
    pub fn scroll(
        &mut self,
        computator: &mut ChartComputator,
        distance_x: f32,
        distance_y: f32,
    ) -> ScrollResult {
        let max_viewport = computator.maximum_viewport();
        let visible_viewport = computator.visible_viewport();
        let current_viewport = computator.current_viewport();
        let content_rect = computator.content_rect_minus_all_margins();

        let can_scroll_left = current_viewport.left > max_viewport.left;
        let can_scroll_right = current_viewport.right < max_viewport.right;
        let can_scroll_top = current_viewport.top < max_viewport.top;
        let can_scroll_bottom = current_viewport.bottom > max_viewport.bottom;

        let mut result = ScrollResult::default();
        if (can_scroll_left && distance_x <= 0.0) || (can_scroll_right && distance_x >= 0.0) {
            result.can_scroll_x = true;
        }
        if (can_scroll_top && distance_y <= 0.0) || (can_scroll_bottom && distance_y >= 0.0) {
            result.can_scroll_y = true;
        }

        if result.any() {
            let viewport_offset_x =
                distance_x * visible_viewport.width() / content_rect.width() as f32;
            let viewport_offset_y =
                -distance_y * visible_viewport.height() / content_rect.height() as f32;
            computator.set_viewport_top_left(
                current_viewport.left + viewport_offset_x,
                current_viewport.top + viewport_offset_y,
            );
        }
        result
    }

    /// Starts a fling seeded with pixel velocities. The simulated position is
    /// the viewport origin projected onto the scroll surface and is bounded
    /// to `[0, surface - content + 1]` per axis.
    pub fn fling(&mut self, velocity_x: f32, velocity_y: f32, computator: &ChartComputator) -> bool {
        let surface = computator.compute_scroll_surface_size();
        self.scroller_start_viewport = computator.current_viewport();
        let max_viewport = computator.maximum_viewport();
        let content_rect = computator.content_rect_minus_all_margins();

        let start_x = surface.x as f32 * (self.scroller_start_viewport.left - max_viewport.left)
            / max_viewport.width();
        let start_y = surface.y as f32 * (max_viewport.top - self.scroller_start_viewport.top)
            / max_viewport.height();

        self.fling = FlingState {
            active: true,
            x: if start_x.is_finite() { start_x } else { 0.0 },
            y: if start_y.is_finite() { start_y } else { 0.0 },
            velocity_x,
            velocity_y,
            max_x: (surface.x - content_rect.width() + 1) as f32,
            max_y: (surface.y - content_rect.height() + 1) as f32,
        };
        trace!(velocity_x, velocity_y, "fling started");
        true
    }

    /// Advances the fling by one frame of `delta_seconds` and repositions the
    /// viewport. Returns true while the fling is active, i.e. another frame
    /// should be requested.
    pub fn compute_scroll_offset(
        &mut self,
        computator: &mut ChartComputator,
        delta_seconds: f32,
    ) -> bool {
        if !self.fling.active || !(delta_seconds > 0.0) {
            return self.fling.active;
        }

        self.fling.x += self.fling.velocity_x * delta_seconds;
        self.fling.y += self.fling.velocity_y * delta_seconds;
        if self.fling.x <= 0.0 {
            self.fling.x = 0.0;
            self.fling.velocity_x = 0.0;
        } else if self.fling.x >= self.fling.max_x {
            self.fling.x = self.fling.max_x.max(0.0);
            self.fling.velocity_x = 0.0;
        }
        if self.fling.y <= 0.0 {
            self.fling.y = 0.0;
            self.fling.velocity_y = 0.0;
        } else if self.fling.y >= self.fling.max_y {
            self.fling.y = self.fling.max_y.max(0.0);
            self.fling.velocity_y = 0.0;
        }

        let decay = self.config.decay_per_second.powf(delta_seconds);
        self.fling.velocity_x *= decay;
        self.fling.velocity_y *= decay;
        if self.fling.velocity_x.abs() < self.config.stop_velocity_abs
            && self.fling.velocity_y.abs() < self.config.stop_velocity_abs
        {
            self.fling.active = false;
        }

        let max_viewport = computator.maximum_viewport();
        let surface = computator.compute_scroll_surface_size();
        let mut left = self.scroller_start_viewport.left;
        let mut top = self.scroller_start_viewport.top;
        if surface.x > 0 {
            left = max_viewport.left + max_viewport.width() * self.fling.x / surface.x as f32;
        }
        if surface.y > 0 {
            top = max_viewport.top - max_viewport.height() * self.fling.y / surface.y as f32;
        }
        computator.set_viewport_top_left(left, top);
        true
    }

    /// True while a fling is in flight.
    #[must_use]
    pub fn is_fling_active(&self) -> bool {
        self.fling.active
    }

    /// Aborts any in-flight fling without moving the viewport.
    pub fn abort_fling(&mut self) {
        self.fling.active = false;
    }
}

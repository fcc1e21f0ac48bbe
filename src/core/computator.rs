use tracing::debug;

use crate::core::rect::{DataPoint, Point, Rect};
use crate::core::viewport::Viewport;

/// Maximum chart zoom applied when none is configured.
pub const DEFAULT_MAXIMUM_ZOOM: f32 = 20.0;

/// Receives the committed viewport after every constrained assignment.
///
/// Registering a listener adds a call per viewport commit, which happens once
/// per animation tick while a fling or zoom is running. Overview charts are
/// the expected consumer.
pub trait ViewportChangeListener {
    fn on_viewport_changed(&mut self, viewport: Viewport);
}

/// Selects which viewport the pixel transforms draw from.
///
/// In an overview chart the data is always drawn across the full maximum
/// viewport while the current viewport acts as the selection window overlay,
/// so the roles of the two fields swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputatorMode {
    #[default]
    Normal,
    Preview,
}

/// Computes raw pixel coordinates, holds content area dimensions and the
/// chart viewport.
///
/// All geometric operations are fail-soft: degenerate numeric input is
/// absorbed by clamping or boundary fallbacks, never by panicking.
pub struct ChartComputator {
    mode: ComputatorMode,
    max_zoom: f32,
    chart_width: i32,
    chart_height: i32,
    // content_rect_minus_all_margins <= content_rect_minus_axes_margins <= max_content_rect
    max_content_rect: Rect,
    content_rect_minus_axes_margins: Rect,
    content_rect_minus_all_margins: Rect,
    current_viewport: Viewport,
    max_viewport: Viewport,
    min_viewport_width: f32,
    min_viewport_height: f32,
    viewport_change_listener: Option<Box<dyn ViewportChangeListener>>,
}

impl Default for ChartComputator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartComputator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ComputatorMode::Normal)
    }

    #[must_use]
    pub fn preview() -> Self {
        Self::with_mode(ComputatorMode::Preview)
    }

    #[must_use]
    pub fn with_mode(mode: ComputatorMode) -> Self {
        Self {
            mode,
            max_zoom: DEFAULT_MAXIMUM_ZOOM,
            chart_width: 0,
            chart_height: 0,
            max_content_rect: Rect::default(),
            content_rect_minus_axes_margins: Rect::default(),
            content_rect_minus_all_margins: Rect::default(),
            current_viewport: Viewport::default(),
            max_viewport: Viewport::default(),
            min_viewport_width: 0.0,
            min_viewport_height: 0.0,
            viewport_change_listener: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ComputatorMode {
        self.mode
    }

    #[must_use]
    pub fn chart_width(&self) -> i32 {
        self.chart_width
    }

    #[must_use]
    pub fn chart_height(&self) -> i32 {
        self.chart_height
    }

    /// Recomputes the nested content rectangles from view dimensions and
    /// padding. Call whenever the hosting surface is resized. Resets both
    /// margin rectangles to the maximum content rect.
    pub fn set_content_rect(
        &mut self,
        width: i32,
        height: i32,
        padding_left: i32,
        padding_top: i32,
        padding_right: i32,
        padding_bottom: i32,
    ) {
        self.chart_width = width;
        self.chart_height = height;
        self.max_content_rect.set(
            padding_left,
            padding_top,
            width - padding_right,
            height - padding_bottom,
        );
        self.reset_content_rect();
    }

    pub fn reset_content_rect(&mut self) {
        self.content_rect_minus_axes_margins = self.max_content_rect;
        self.content_rect_minus_all_margins = self.max_content_rect;
    }

    /// Reserves space on both margin-aware rectangles, e.g. for axis labels.
    pub fn inset_content_rect(
        &mut self,
        delta_left: i32,
        delta_top: i32,
        delta_right: i32,
        delta_bottom: i32,
    ) {
        self.content_rect_minus_axes_margins.left += delta_left;
        self.content_rect_minus_axes_margins.top += delta_top;
        self.content_rect_minus_axes_margins.right -= delta_right;
        self.content_rect_minus_axes_margins.bottom -= delta_bottom;
        self.inset_content_rect_by_internal_margins(delta_left, delta_top, delta_right, delta_bottom);
    }

    /// Reserves space on the innermost rectangle only, e.g. for point radius.
    pub fn inset_content_rect_by_internal_margins(
        &mut self,
        delta_left: i32,
        delta_top: i32,
        delta_right: i32,
        delta_bottom: i32,
    ) {
        self.content_rect_minus_all_margins.left += delta_left;
        self.content_rect_minus_all_margins.top += delta_top;
        self.content_rect_minus_all_margins.right -= delta_right;
        self.content_rect_minus_all_margins.bottom -= delta_bottom;
    }

    /// Commits a candidate viewport, keeping it inside the maximum viewport
    /// and above the minimum width/height derived from the zoom limit.
    ///
    /// Candidate edges are first pulled into the maximum viewport band, so a
    /// candidate lying entirely beyond an edge collapses onto it before the
    /// minimum-size pass runs. Undersized candidates are then expanded from
    /// their left (resp. top) edge and shifted back inside the bounds, so the
    /// minimum size survives the clamp. Idempotent: re-applying the committed
    /// value is a no-op.
    pub fn constrain_viewport(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        let mut left = left.max(self.max_viewport.left).min(self.max_viewport.right);
        let mut right = right.max(self.max_viewport.left).min(self.max_viewport.right);
        let mut top = top.min(self.max_viewport.top).max(self.max_viewport.bottom);
        let mut bottom = bottom.min(self.max_viewport.top).max(self.max_viewport.bottom);

        if right - left < self.min_viewport_width {
            // Minimum width - constrain horizontal zoom.
            right = left + self.min_viewport_width;
            if left < self.max_viewport.left {
                left = self.max_viewport.left;
                right = left + self.min_viewport_width;
            } else if right > self.max_viewport.right {
                right = self.max_viewport.right;
                left = right - self.min_viewport_width;
            }
        }

        if top - bottom < self.min_viewport_height {
            // Minimum height - constrain vertical zoom.
            bottom = top - self.min_viewport_height;
            if top > self.max_viewport.top {
                top = self.max_viewport.top;
                bottom = top - self.min_viewport_height;
            } else if bottom < self.max_viewport.bottom {
                bottom = self.max_viewport.bottom;
                top = bottom + self.min_viewport_height;
            }
        }

        self.current_viewport.left = self.max_viewport.left.max(left);
        self.current_viewport.top = self.max_viewport.top.min(top);
        self.current_viewport.right = self.max_viewport.right.min(right);
        self.current_viewport.bottom = self.max_viewport.bottom.max(bottom);

        if let Some(listener) = self.viewport_change_listener.as_mut() {
            listener.on_viewport_changed(self.current_viewport);
        }
    }

    /// Repositions the current viewport's origin, holding width and height
    /// fixed and clamping so the viewport never exits the maximum viewport.
    pub fn set_viewport_top_left(&mut self, left: f32, top: f32) {
        // The scroll range is the viewport extremes minus the viewport size:
        // extremes 0..10 with size 2 give a scroll range of 0..8.
        let cur_width = self.current_viewport.width();
        let cur_height = self.current_viewport.height();
        let left = self
            .max_viewport
            .left
            .max(left.min(self.max_viewport.right - cur_width));
        let top = (self.max_viewport.bottom + cur_height).max(top.min(self.max_viewport.top));
        self.constrain_viewport(left, top, left + cur_width, top - cur_height);
    }

    fn drawing_viewport(&self) -> Viewport {
        match self.mode {
            ComputatorMode::Normal => self.current_viewport,
            ComputatorMode::Preview => self.max_viewport,
        }
    }

    /// Translates a chart value into an absolute pixel X coordinate.
    #[must_use]
    pub fn compute_raw_x(&self, value_x: f32) -> f32 {
        let viewport = self.drawing_viewport();
        let rect = self.content_rect_minus_all_margins;
        let pixel_offset = (value_x - viewport.left) * (rect.width() as f32 / viewport.width());
        if pixel_offset.is_finite() {
            rect.left as f32 + pixel_offset
        } else {
            // Zero-width viewport: collapse onto the left content edge.
            rect.left as f32
        }
    }

    /// Translates a chart value into an absolute pixel Y coordinate. Pixel Y
    /// grows downward while value Y grows upward.
    #[must_use]
    pub fn compute_raw_y(&self, value_y: f32) -> f32 {
        let viewport = self.drawing_viewport();
        let rect = self.content_rect_minus_all_margins;
        let pixel_offset = (value_y - viewport.bottom) * (rect.height() as f32 / viewport.height());
        if pixel_offset.is_finite() {
            rect.bottom as f32 - pixel_offset
        } else {
            // Zero-height viewport, e.g. a flat line: collapse onto the
            // bottom content edge.
            rect.bottom as f32
        }
    }

    /// Scales a viewport-space distance into a pixel distance along X.
    #[must_use]
    pub fn compute_raw_distance_x(&self, distance: f32) -> f32 {
        distance * (self.content_rect_minus_all_margins.width() as f32 / self.current_viewport.width())
    }

    /// Scales a viewport-space distance into a pixel distance along Y.
    #[must_use]
    pub fn compute_raw_distance_y(&self, distance: f32) -> f32 {
        distance
            * (self.content_rect_minus_all_margins.height() as f32 / self.current_viewport.height())
    }

    /// Inverse transform: the data point under the given pixel, or `None`
    /// when the pixel lies outside the innermost content rectangle.
    #[must_use]
    pub fn raw_pixels_to_data_point(&self, x: f32, y: f32) -> Option<DataPoint> {
        let rect = self.content_rect_minus_all_margins;
        if !rect.contains(x as i32, y as i32) {
            return None;
        }
        let viewport = self.current_viewport;
        let data_x = viewport.left + (x - rect.left as f32) * viewport.width() / rect.width() as f32;
        let data_y =
            viewport.bottom + (y - rect.bottom as f32) * viewport.height() / -(rect.height() as f32);
        Some(DataPoint::new(data_x, data_y))
    }

    /// Size in pixels of the virtual scrollable surface: how much room the
    /// full data extent would occupy at the current zoom. Equals the content
    /// rect when fully zoomed out, twice it at 200% zoom.
    #[must_use]
    pub fn compute_scroll_surface_size(&self) -> Point {
        let rect = self.content_rect_minus_all_margins;
        // `as` casts saturate, so a degenerate current viewport yields a
        // boundary value instead of propagating infinity.
        Point::new(
            (self.max_viewport.width() * rect.width() as f32 / self.current_viewport.width()) as i32,
            (self.max_viewport.height() * rect.height() as f32 / self.current_viewport.height())
                as i32,
        )
    }

    /// Inclusive containment test against the innermost content rectangle
    /// with a pixel tolerance, used for touch hit-testing.
    #[must_use]
    pub fn is_within_content_rect(&self, x: f32, y: f32, precision: f32) -> bool {
        let rect = self.content_rect_minus_all_margins;
        x >= rect.left as f32 - precision
            && x <= rect.right as f32 + precision
            && y <= rect.bottom as f32 + precision
            && y >= rect.top as f32 - precision
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.current_viewport
    }

    /// Commits a new current viewport through the constraint pass, so the
    /// stored value is always equal to or smaller than the maximum viewport.
    pub fn set_current_viewport(&mut self, viewport: Viewport) {
        self.constrain_viewport(viewport.left, viewport.top, viewport.right, viewport.bottom);
    }

    pub fn set_current_viewport_edges(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.constrain_viewport(left, top, right, bottom);
    }

    #[must_use]
    pub fn maximum_viewport(&self) -> Viewport {
        self.max_viewport
    }

    /// Sets the full data extent and recomputes the derived minimum viewport
    /// size.
    pub fn set_maximum_viewport(&mut self, viewport: Viewport) {
        self.set_maximum_viewport_edges(viewport.left, viewport.top, viewport.right, viewport.bottom);
    }

    pub fn set_maximum_viewport_edges(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.max_viewport.set(left, top, right, bottom);
        self.compute_minimum_width_and_height();
        debug!(?left, ?top, ?right, ?bottom, "maximum viewport changed");
    }

    /// The viewport renderers draw from: the current viewport normally, the
    /// maximum viewport for an overview chart.
    #[must_use]
    pub fn visible_viewport(&self) -> Viewport {
        self.drawing_viewport()
    }

    pub fn set_visible_viewport(&mut self, viewport: Viewport) {
        match self.mode {
            ComputatorMode::Normal => self.set_current_viewport(viewport),
            ComputatorMode::Preview => self.set_maximum_viewport(viewport),
        }
    }

    pub fn set_viewport_change_listener(
        &mut self,
        listener: Option<Box<dyn ViewportChangeListener>>,
    ) {
        self.viewport_change_listener = listener;
    }

    #[must_use]
    pub fn maximum_zoom(&self) -> f32 {
        self.max_zoom
    }

    /// Sets the maximum zoom level. Values below 1 are clamped to 1. The
    /// current viewport is re-constrained against the new minimum size.
    pub fn set_maximum_zoom(&mut self, max_zoom: f32) {
        self.max_zoom = if max_zoom < 1.0 { 1.0 } else { max_zoom };
        self.compute_minimum_width_and_height();
        let current = self.current_viewport;
        self.constrain_viewport(current.left, current.top, current.right, current.bottom);
    }

    #[must_use]
    pub fn content_rect_minus_all_margins(&self) -> Rect {
        self.content_rect_minus_all_margins
    }

    #[must_use]
    pub fn content_rect_minus_axes_margins(&self) -> Rect {
        self.content_rect_minus_axes_margins
    }

    #[must_use]
    pub fn max_content_rect(&self) -> Rect {
        self.max_content_rect
    }

    #[must_use]
    pub fn minimum_viewport_width(&self) -> f32 {
        self.min_viewport_width
    }

    #[must_use]
    pub fn minimum_viewport_height(&self) -> f32 {
        self.min_viewport_height
    }

    fn compute_minimum_width_and_height(&mut self) {
        self.min_viewport_width = self.max_viewport.width() / self.max_zoom;
        self.min_viewport_height = self.max_viewport.height() / self.max_zoom;
    }
}

use crate::core::{ChartComputator, SelectedValue};
use crate::interaction::scroller::{ChartScroller, ScrollResult};
use crate::interaction::zoomer::ChartZoomer;
use crate::interaction::{ContainerScrollType, GestureEvent, ZoomType};

/// Hit-testing and selection capability of an external renderer. The touch
/// handler never draws; it only asks the renderer what lies under a pixel.
pub trait ChartRenderer {
    /// Hit-tests the pixel and records the touched value internally.
    fn check_touch(&mut self, x: f32, y: f32) -> bool;
    fn selected_value(&self) -> SelectedValue;
    fn clear_touch(&mut self);
    fn is_touched(&self) -> bool;
}

/// Notified when the touched value changes. In selection mode the selected
/// callback fires once per distinct value, not on every tap.
pub trait ValueTouchListener {
    fn on_value_selected(&mut self, value: SelectedValue);
    fn on_value_deselected(&mut self) {}
}

/// Enclosing scroll container the chart may live in, e.g. a pager. The chart
/// disallows interception while it can still consume the gesture itself.
pub trait ScrollContainer {
    fn request_disallow_intercept(&mut self, disallow: bool);
}

/// Touched-value state machine shared by the default and radial touch
/// handlers.
#[derive(Default)]
pub struct SelectionTracker {
    /// Used only for selection mode to avoid notifying multiple times for
    /// the same selection.
    selection_mode_old_value: SelectedValue,
    selected_value: SelectedValue,
    old_selected_value: SelectedValue,
    listener: Option<Box<dyn ValueTouchListener>>,
}

impl SelectionTracker {
    #[must_use]
    pub fn selected_value(&self) -> SelectedValue {
        self.selected_value
    }

    pub fn set_listener(&mut self, listener: Option<Box<dyn ValueTouchListener>>) {
        self.listener = listener;
    }

    pub fn on_down(&mut self, renderer: &mut dyn ChartRenderer, x: f32, y: f32, selection_mode: bool) -> bool {
        let was_touched = renderer.is_touched();
        let is_touched = self.check_touch(renderer, x, y);
        if was_touched == is_touched {
            return false;
        }
        if selection_mode {
            self.selection_mode_old_value.clear();
            if was_touched && !renderer.is_touched() {
                self.notify_listener(renderer);
            }
        }
        true
    }

    pub fn on_up(&mut self, renderer: &mut dyn ChartRenderer, x: f32, y: f32, selection_mode: bool) -> bool {
        if !renderer.is_touched() {
            return false;
        }
        if self.check_touch(renderer, x, y) {
            if selection_mode {
                // Notify only when the selected value changed, i.e. on the
                // first (selection) tap on a given value.
                if self.selection_mode_old_value != self.selected_value {
                    self.selection_mode_old_value = self.selected_value;
                    self.notify_listener(renderer);
                }
            } else {
                self.notify_listener(renderer);
                renderer.clear_touch();
            }
        } else {
            renderer.clear_touch();
        }
        true
    }

    /// Clears the touch when the finger moves off the touched value.
    pub fn on_move(&mut self, renderer: &mut dyn ChartRenderer, x: f32, y: f32) -> bool {
        if renderer.is_touched() && !self.check_touch(renderer, x, y) {
            renderer.clear_touch();
            return true;
        }
        false
    }

    pub fn on_cancel(&mut self, renderer: &mut dyn ChartRenderer) -> bool {
        if renderer.is_touched() {
            renderer.clear_touch();
            return true;
        }
        false
    }

    fn check_touch(&mut self, renderer: &mut dyn ChartRenderer, x: f32, y: f32) -> bool {
        self.old_selected_value = self.selected_value;
        self.selected_value.clear();
        if renderer.check_touch(x, y) {
            self.selected_value = renderer.selected_value();
        }
        // A touch that lands on a different value than before is not treated
        // as a continuation of the old selection.
        if self.old_selected_value.is_set()
            && self.selected_value.is_set()
            && self.old_selected_value != self.selected_value
        {
            false
        } else {
            renderer.is_touched()
        }
    }

    fn notify_listener(&mut self, renderer: &dyn ChartRenderer) {
        if let Some(listener) = self.listener.as_mut() {
            if renderer.is_touched() {
                listener.on_value_selected(renderer.selected_value());
            } else {
                listener.on_value_deselected();
            }
        }
    }
}

/// Default touch handler for most charts: routes semantic gestures to the
/// scroller and zoomer and tracks value touches.
pub struct ChartTouchHandler {
    scroller: ChartScroller,
    zoomer: ChartZoomer,
    pub is_zoom_enabled: bool,
    pub is_scroll_enabled: bool,
    pub is_value_touch_enabled: bool,
    pub is_value_selection_enabled: bool,
    selection: SelectionTracker,
    scale_in_progress: bool,
    container_scroll_type: Option<ContainerScrollType>,
}

impl Default for ChartTouchHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartTouchHandler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroller: ChartScroller::new(),
            zoomer: ChartZoomer::new(ZoomType::HorizontalAndVertical),
            is_zoom_enabled: true,
            is_scroll_enabled: true,
            is_value_touch_enabled: true,
            is_value_selection_enabled: false,
            selection: SelectionTracker::default(),
            scale_in_progress: false,
            container_scroll_type: None,
        }
    }

    #[must_use]
    pub fn zoom_type(&self) -> ZoomType {
        self.zoomer.zoom_type()
    }

    pub fn set_zoom_type(&mut self, zoom_type: ZoomType) {
        self.zoomer.set_zoom_type(zoom_type);
    }

    #[must_use]
    pub fn scroller(&mut self) -> &mut ChartScroller {
        &mut self.scroller
    }

    #[must_use]
    pub fn zoomer(&mut self) -> &mut ChartZoomer {
        &mut self.zoomer
    }

    #[must_use]
    pub fn selected_value(&self) -> SelectedValue {
        self.selection.selected_value()
    }

    pub fn set_value_touch_listener(&mut self, listener: Option<Box<dyn ValueTouchListener>>) {
        self.selection.set_listener(listener);
    }

    /// Declares the scroll orientation of the container the chart lives in.
    /// `None` disables all interception cooperation.
    pub fn set_container_scroll_type(&mut self, scroll_type: Option<ContainerScrollType>) {
        self.container_scroll_type = scroll_type;
    }

    /// Advances scroll and zoom animations by one frame. Returns true when
    /// the viewport changed and the chart needs to be redrawn.
    pub fn compute_scroll(&mut self, computator: &mut ChartComputator, delta_seconds: f32) -> bool {
        let mut need_invalidate = self.is_scroll_enabled
            && self.scroller.compute_scroll_offset(computator, delta_seconds);
        if self.is_zoom_enabled && self.zoomer.compute_zoom(computator, delta_seconds) {
            need_invalidate = true;
        }
        need_invalidate
    }

    /// Handles one semantic gesture. Returns true when the gesture changed
    /// chart state and a redraw is needed. `container`, when given, receives
    /// touch-interception requests per the configured container scroll type.
    pub fn handle_event(
        &mut self,
        event: GestureEvent,
        computator: &mut ChartComputator,
        renderer: &mut dyn ChartRenderer,
        mut container: Option<&mut dyn ScrollContainer>,
    ) -> bool {
        match event {
            GestureEvent::Down { x, y } => {
                let mut need_invalidate = false;
                if self.is_scroll_enabled {
                    disallow_intercept(container.as_deref_mut());
                    need_invalidate = self.scroller.start_scroll(computator);
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
                distance_x,
                distance_y,
                ..
            } => {
                if self.is_scroll_enabled {
                    let result = self.scroller.scroll(computator, distance_x, distance_y);
                    self.allow_intercept_if_exhausted(result, container);
                    result.any()
                } else {
                    false
                }
            }
            GestureEvent::Fling {
                velocity_x,
                velocity_y,
                ..
            } => {
                self.is_scroll_enabled && self.scroller.fling(-velocity_x, -velocity_y, computator)
            }
            GestureEvent::DoubleTap { x, y } => {
                self.is_zoom_enabled && self.zoomer.start_zoom(x, y, computator)
            }
            GestureEvent::ScaleBegin => {
                self.scale_in_progress = true;
                if self.is_zoom_enabled {
                    disallow_intercept(container);
                }
                false
            }
            GestureEvent::Scale {
                focus_x,
                focus_y,
                factor,
            } => {
                if self.is_zoom_enabled {
                    // A detector factor above 1 spreads fingers apart; the
                    // viewport scale is its mirror around 1.
                    let mut scale = 2.0 - factor;
                    if !scale.is_finite() {
                        scale = 1.0;
                    }
                    disallow_intercept(container);
                    self.zoomer.scale(computator, focus_x, focus_y, scale)
                } else {
                    false
                }
            }
            GestureEvent::ScaleEnd => {
                self.scale_in_progress = false;
                false
            }
        }
    }

    /// Hands the gesture back to the container once this chart can no longer
    /// scroll on the container's axis.
    fn allow_intercept_if_exhausted(
        &self,
        result: ScrollResult,
        container: Option<&mut dyn ScrollContainer>,
    ) {
        let Some(container) = container else {
            return;
        };
        match self.container_scroll_type {
            Some(ContainerScrollType::Horizontal)
                if !result.can_scroll_x && !self.scale_in_progress =>
            {
                container.request_disallow_intercept(false);
            }
            Some(ContainerScrollType::Vertical)
                if !result.can_scroll_y && !self.scale_in_progress =>
            {
                container.request_disallow_intercept(false);
            }
            _ => {}
        }
    }
}

fn disallow_intercept(container: Option<&mut (dyn ScrollContainer + '_)>) {
    if let Some(container) = container {
        container.request_disallow_intercept(true);
    }
}

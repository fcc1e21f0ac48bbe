use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Logical data-space rectangle mapped onto the drawable pixel area.
///
/// Unlike a screen rectangle, `top` is numerically greater than `bottom`:
/// visible Y values run from `bottom` up to `top`. A viewport is empty when
/// `left >= right || bottom >= top`. Most operations do not check that the
/// coordinates are sorted correctly, matching plain-rect semantics.
///
/// Equality and hashing compare exact float bit patterns, so two viewports
/// that differ only in the sign of zero (or carry NaN) are distinguishable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the viewport. May be negative for an unsorted viewport.
    #[must_use]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    /// Height of the viewport. May be negative for an unsorted viewport.
    #[must_use]
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }

    #[must_use]
    pub fn center_x(self) -> f32 {
        (self.left + self.right) * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.left >= self.right || self.bottom >= self.top
    }

    pub fn set_empty(&mut self) {
        *self = Self::default();
    }

    pub fn set(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
    }

    /// Translates the viewport by `(dx, dy)`.
    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.left += dx;
        self.top += dy;
        self.right += dx;
        self.bottom += dy;
    }

    /// Moves the viewport so its origin lands on `(new_left, new_top)`,
    /// keeping width and height unchanged.
    pub fn offset_to(&mut self, new_left: f32, new_top: f32) {
        self.right += new_left - self.left;
        self.bottom += new_top - self.top;
        self.left = new_left;
        self.top = new_top;
    }

    /// Insets the viewport by `(dx, dy)`. Positive values shrink it, negative
    /// values grow it.
    pub fn inset(&mut self, dx: f32, dy: f32) {
        self.left += dx;
        self.top -= dy;
        self.right -= dx;
        self.bottom += dy;
    }

    /// Half-open containment: `left <= x < right && bottom <= y < top`.
    /// An empty viewport contains no point.
    #[must_use]
    pub fn contains(self, x: f32, y: f32) -> bool {
        self.left < self.right
            && self.bottom < self.top
            && x >= self.left
            && x < self.right
            && y >= self.bottom
            && y < self.top
    }

    /// Returns true iff the given edges describe a viewport fully inside this
    /// one. An empty viewport never contains another viewport.
    #[must_use]
    pub fn contains_edges(self, left: f32, top: f32, right: f32, bottom: f32) -> bool {
        self.left < self.right
            && self.bottom < self.top
            && self.left <= left
            && self.top >= top
            && self.right >= right
            && self.bottom <= bottom
    }

    #[must_use]
    pub fn contains_viewport(self, v: Viewport) -> bool {
        self.contains_edges(v.left, v.top, v.right, v.bottom)
    }

    /// Grows this viewport to enclose the given edges. An empty argument is
    /// ignored; an empty receiver is replaced by the argument.
    pub fn union_edges(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        if left < right && bottom < top {
            if self.left < self.right && self.bottom < self.top {
                if self.left > left {
                    self.left = left;
                }
                if self.top < top {
                    self.top = top;
                }
                if self.right < right {
                    self.right = right;
                }
                if self.bottom > bottom {
                    self.bottom = bottom;
                }
            } else {
                self.set(left, top, right, bottom);
            }
        }
    }

    pub fn union(&mut self, v: Viewport) {
        self.union_edges(v.left, v.top, v.right, v.bottom);
    }

    /// Shrinks this viewport to the intersection with the given edges and
    /// returns true, or returns false leaving it unchanged when they do not
    /// intersect. Emptiness of either operand is not checked.
    pub fn intersect_edges(&mut self, left: f32, top: f32, right: f32, bottom: f32) -> bool {
        if self.left < right && left < self.right && self.bottom < top && bottom < self.top {
            if self.left < left {
                self.left = left;
            }
            if self.top > top {
                self.top = top;
            }
            if self.right > right {
                self.right = right;
            }
            if self.bottom < bottom {
                self.bottom = bottom;
            }
            return true;
        }
        false
    }

    pub fn intersect(&mut self, v: Viewport) -> bool {
        self.intersect_edges(v.left, v.top, v.right, v.bottom)
    }
}

impl PartialEq for Viewport {
    fn eq(&self, other: &Self) -> bool {
        self.left.to_bits() == other.left.to_bits()
            && self.top.to_bits() == other.top.to_bits()
            && self.right.to_bits() == other.right.to_bits()
            && self.bottom.to_bits() == other.bottom.to_bits()
    }
}

impl Eq for Viewport {}

impl Hash for Viewport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.left.to_bits().hash(state);
        self.top.to_bits().hash(state);
        self.right.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
    }
}

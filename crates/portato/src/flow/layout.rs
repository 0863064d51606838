use super::{
    GRID_COLUMN_BREAKPOINT, GRID_MAX, GRID_MIN, GRID_WIDTH_RATIO, HARD_MAX, HARD_MIN,
    MIN_VIEWPORT_H, MIN_VIEWPORT_W, RADIAL_SCALE, RADIAL_VH, RADIAL_VW,
};

/// Viewport in device-independent pixels, clamped at construction so sizing
/// math never sees zero, negative or NaN values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sane(width, MIN_VIEWPORT_W),
            height: sane(height, MIN_VIEWPORT_H),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

fn sane(value: f64, floor: f64) -> f64 {
    if value.is_finite() { value.max(floor) } else { floor }
}

/// A derived control footprint. Recomputed on demand, never stored across a
/// resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub width: f64,
    pub height: f64,
}

/// Wheel diameter for the current viewport: the smaller of the width and
/// height shares, capped, down-scaled, then floored.
pub fn radial_size(viewport: Viewport, safe_top: f64, footer_height: f64) -> f64 {
    let avail_h = (viewport.height() - safe_top - footer_height).max(0.0);

    let by_w = (viewport.width() * RADIAL_VW).floor();
    let by_h = (avail_h * RADIAL_VH).floor();

    let raw = HARD_MAX.min(by_w).min(by_h);
    (raw * RADIAL_SCALE).floor().max(HARD_MIN)
}

/// Grid footprint is width-driven; rows wrap as needed.
pub fn grid_width(viewport: Viewport) -> f64 {
    (viewport.width() * GRID_WIDTH_RATIO)
        .floor()
        .clamp(GRID_MIN, GRID_MAX)
}

/// Column count switches at its own breakpoint, independent of the panel
/// layout breakpoint.
pub fn grid_columns(viewport: Viewport) -> usize {
    if viewport.width() <= GRID_COLUMN_BREAKPOINT {
        2
    } else {
        3
    }
}

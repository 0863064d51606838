use super::geometry::{Point, Side};
use super::layout::{LayoutBox, Viewport};
use super::{
    PANEL_BELOW_GAP, PANEL_GAP, PANEL_MAX_WIDTH, PANEL_SIDE_MARGIN, PANEL_TOP_MARGIN,
    WIDE_BREAKPOINT,
};

/// The active control's footprint as the positioner sees it: centre point
/// plus half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlBounds {
    pub center: Point,
    pub half_width: f64,
}

/// Where the single visible panel goes. `width` is only forced in the
/// narrow layout; wide panels keep their natural width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub side: Side,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
}

/// Positions the addressed panel against the control. Wide viewports anchor
/// it beside the control at the control's vertical midpoint; narrow ones
/// centre it underneath. Recomputed on every hover, never cached, since the
/// control's footprint shifts between steps and after a resize.
pub fn place_panel(
    side: Side,
    control: ControlBounds,
    panel: LayoutBox,
    viewport: Viewport,
) -> PanelPlacement {
    if viewport.width() > WIDE_BREAKPOINT {
        let y = (control.center.y - panel.height / 2.0).max(PANEL_TOP_MARGIN);
        let x = match side {
            Side::Left => control.center.x - control.half_width - PANEL_GAP - panel.width,
            Side::Right => control.center.x + control.half_width + PANEL_GAP,
        };
        PanelPlacement {
            side,
            x,
            y,
            width: None,
        }
    } else {
        let width = PANEL_MAX_WIDTH.min(viewport.width() - PANEL_SIDE_MARGIN);
        PanelPlacement {
            side,
            x: control.center.x - width / 2.0,
            y: control.center.y + control.half_width + PANEL_BELOW_GAP,
            width: Some(width),
        }
    }
}

use super::geometry::{self, GeometryError, Point, Side, WedgeLayout};
use super::view::{WedgeScene, WheelScene};
use super::{LABEL_FONT_MIN, LABEL_FONT_RATIO, LABEL_RADIUS_RATIO};
use crate::config::OptionConfig;
use encore::color::HexColor;

/// One selectable option on the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialOption {
    pub value: String,
    pub label: String,
    pub color: HexColor,
    pub desc: String,
}

impl From<OptionConfig> for RadialOption {
    fn from(cfg: OptionConfig) -> Self {
        Self {
            value: cfg.value,
            label: cfg.label,
            color: cfg.color,
            desc: cfg.desc,
        }
    }
}

/// What a hovered wedge asks the panel layer to show.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTip {
    pub side: Side,
    pub title: String,
    pub desc: String,
    pub swatch: HexColor,
}

/// Single-selection state for the active radial step.
#[derive(Debug, Clone)]
pub struct RadialSelector {
    options: Vec<RadialOption>,
    layout: WedgeLayout,
    selected: Option<String>,
    hovered: Option<usize>,
}

impl RadialSelector {
    /// Fails fast on an empty option list.
    pub fn new(
        options: Vec<RadialOption>,
        selected: Option<String>,
    ) -> Result<Self, GeometryError> {
        let layout = WedgeLayout::new(options.len())?;
        Ok(Self {
            options,
            layout,
            selected,
            hovered: None,
        })
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Pointer entering a wedge; yields the contextual panel request for
    /// that option, addressed to the side its bisector points at.
    pub fn pointer_enter(&mut self, index: usize) -> Option<HoverTip> {
        let option = self.options.get(index)?;
        self.hovered = Some(index);
        Some(HoverTip {
            side: geometry::side_of(self.layout.mid_angle(index)),
            title: option.label.clone(),
            desc: option.desc.clone(),
            swatch: option.color,
        })
    }

    /// Pointer leaving the control; the panel layer hides everything.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// A click on a wedge. Exactly one selection event per call, even when
    /// the value is already the selected one.
    pub fn activate(&mut self, index: usize) -> Option<String> {
        let option = self.options.get(index)?;
        self.selected = Some(option.value.clone());
        Some(option.value.clone())
    }

    /// Builds the wheel's visual tree at `size`, marking the selected wedge.
    pub fn scene(&self, size: f64) -> WheelScene {
        let radius = size / 2.0;
        let center = Point::new(radius, radius);
        let font_size = LABEL_FONT_MIN.max(radius * LABEL_FONT_RATIO);

        let separators = (0..self.layout.sectors())
            .map(|i| {
                let (a0, _) = self.layout.boundary(i);
                (center, geometry::rim_point(center, radius, a0))
            })
            .collect();

        let wedges = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let (a0, a1) = self.layout.boundary(i);
                WedgeScene {
                    value: option.value.clone(),
                    label: option.label.clone(),
                    path: geometry::wedge_path(center, radius, a0, a1),
                    label_at: geometry::label_anchor(
                        center,
                        radius,
                        self.layout.mid_angle(i),
                        LABEL_RADIUS_RATIO,
                    ),
                    font_size,
                    color: option.color,
                    selected: self.selected.as_deref() == Some(option.value.as_str()),
                    hovered: self.hovered == Some(i),
                }
            })
            .collect();

        WheelScene {
            size,
            separators,
            wedges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<RadialOption> {
        ["field", "forest", "lake", "sea"]
            .into_iter()
            .map(|value| RadialOption {
                value: value.to_string(),
                label: value.to_uppercase(),
                color: HexColor::from_rgb(0xCD, 0xE2, 0xA5),
                desc: format!("about {value}"),
            })
            .collect()
    }

    #[test]
    fn test_empty_options_fail_fast() {
        assert!(RadialSelector::new(Vec::new(), None).is_err());
    }

    #[test]
    fn test_activate_emits_once_per_call_and_is_idempotent() {
        let mut selector = RadialSelector::new(options(), None).unwrap();
        assert_eq!(selector.activate(1), Some("forest".to_string()));
        assert_eq!(selector.selected(), Some("forest"));

        // re-activating the same wedge is one more event, same state
        assert_eq!(selector.activate(1), Some("forest".to_string()));
        assert_eq!(selector.selected(), Some("forest"));

        assert_eq!(selector.activate(9), None);
        assert_eq!(selector.selected(), Some("forest"));
    }

    #[test]
    fn test_hover_addresses_the_correct_side() {
        let mut selector = RadialSelector::new(options(), None).unwrap();

        // wedge 1 of 4 bisects at 3π/4: left half-plane
        let tip = selector.pointer_enter(1).unwrap();
        assert_eq!(tip.side, Side::Left);
        assert_eq!(tip.title, "FOREST");

        // wedge 3 bisects at 7π/4: right half-plane
        assert_eq!(selector.pointer_enter(3).unwrap().side, Side::Right);

        assert!(selector.pointer_enter(17).is_none());
    }

    #[test]
    fn test_scene_restores_previous_selection() {
        let selector = RadialSelector::new(options(), Some("lake".to_string())).unwrap();
        let scene = selector.scene(400.0);
        assert_eq!(scene.wedges.len(), 4);
        assert_eq!(scene.separators.len(), 4);

        let flags: Vec<bool> = scene.wedges.iter().map(|w| w.selected).collect();
        assert_eq!(flags, vec![false, false, true, false]);
    }

    #[test]
    fn test_scene_label_font_has_a_floor() {
        let selector = RadialSelector::new(options(), None).unwrap();
        let small = selector.scene(220.0);
        assert_eq!(small.wedges[0].font_size, LABEL_FONT_MIN);

        let large = selector.scene(640.0);
        assert_eq!(large.wedges[0].font_size, 320.0 * LABEL_FONT_RATIO);
    }
}

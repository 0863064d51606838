use std::f64::consts::{PI, TAU};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("a wheel needs at least one sector")]
    NoSectors,
}

/// Which contextual panel a wedge addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Equal division of the full turn into `n` sectors, sector 0 starting on
/// the positive x-axis and winding clockwise in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WedgeLayout {
    sectors: usize,
}

impl WedgeLayout {
    pub fn new(sectors: usize) -> Result<Self, GeometryError> {
        if sectors == 0 {
            return Err(GeometryError::NoSectors);
        }
        Ok(Self { sectors })
    }

    pub fn sectors(&self) -> usize {
        self.sectors
    }

    pub fn boundary(&self, index: usize) -> (f64, f64) {
        let n = self.sectors as f64;
        (
            (index as f64 / n) * TAU,
            ((index as f64 + 1.0) / n) * TAU,
        )
    }

    pub fn mid_angle(&self, index: usize) -> f64 {
        let (a0, a1) = self.boundary(index);
        (a0 + a1) / 2.0
    }
}

pub fn rim_point(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Closed wedge outline: both radii plus the connecting arc. The large-arc
/// flag covers spans past a half turn, so a single-sector wheel still gets
/// a well-formed path.
pub fn wedge_path(center: Point, radius: f64, a0: f64, a1: f64) -> String {
    let start = rim_point(center, radius, a0);
    let end = rim_point(center, radius, a1);
    let large = if (a1 - a0) > PI { 1 } else { 0 };
    format!(
        "M {} {} L {} {} A {radius} {radius} 0 {large} 1 {} {} Z",
        center.x, center.y, start.x, start.y, end.x, end.y
    )
}

/// Label point at `ratio` of the radius along the sector bisector.
pub fn label_anchor(center: Point, radius: f64, mid_angle: f64, ratio: f64) -> Point {
    rim_point(center, radius * ratio, mid_angle)
}

/// A bisector pointing into the negative x half-plane reads as left.
pub fn side_of(mid_angle: f64) -> Side {
    if mid_angle.cos() < 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_cover_the_full_turn() {
        for n in [1usize, 2, 3, 4, 5, 9] {
            let layout = WedgeLayout::new(n).unwrap();
            let mut total = 0.0;
            for i in 0..n {
                let (a0, a1) = layout.boundary(i);
                let span = a1 - a0;
                assert!((span - TAU / n as f64).abs() < 1e-9, "n={n} i={i}");
                total += span;
            }
            assert!((total - TAU).abs() < 1e-9, "n={n}");
        }
    }

    #[test]
    fn test_sectors_start_on_positive_x_axis() {
        let layout = WedgeLayout::new(4).unwrap();
        assert_eq!(layout.boundary(0).0, 0.0);
        assert!((layout.mid_angle(0) - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_sectors_is_rejected() {
        assert_eq!(WedgeLayout::new(0), Err(GeometryError::NoSectors));
    }

    #[test]
    fn test_large_arc_flag() {
        let center = Point::new(100.0, 100.0);
        let full = WedgeLayout::new(1).unwrap().boundary(0);
        assert!(wedge_path(center, 100.0, full.0, full.1).contains(" 0 1 1 "));

        let quarter = WedgeLayout::new(4).unwrap().boundary(0);
        assert!(wedge_path(center, 100.0, quarter.0, quarter.1).contains(" 0 0 1 "));
    }

    #[test]
    fn test_wedge_path_is_closed() {
        let path = wedge_path(Point::new(50.0, 50.0), 50.0, 0.0, PI / 2.0);
        assert!(path.starts_with("M 50 50 L "));
        assert!(path.ends_with("Z"));
    }

    #[test]
    fn test_label_anchor_sits_on_the_bisector() {
        let anchor = label_anchor(Point::new(100.0, 100.0), 100.0, 0.0, 0.6);
        assert!((anchor.x - 160.0).abs() < 1e-9);
        assert!((anchor.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_side_of_bisector() {
        let cases = vec![
            (0.0, Side::Right),
            (PI / 4.0, Side::Right),
            (3.0 * PI / 4.0, Side::Left),
            (PI, Side::Left),
            (5.0 * PI / 4.0, Side::Left),
            (7.0 * PI / 4.0, Side::Right),
        ];

        for (angle, expected) in cases {
            assert_eq!(side_of(angle), expected, "angle={angle}");
        }
    }
}

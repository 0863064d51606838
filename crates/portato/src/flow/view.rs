use super::GRID_CELL_HEIGHT;
use super::geometry::Point;
use encore::color::HexColor;
use encore::poster::svg_escape_into;
use std::fmt::Write;

/// One wedge of the wheel, ready to draw or hit-test.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeScene {
    pub value: String,
    pub label: String,
    pub path: String,
    pub label_at: Point,
    pub font_size: f64,
    pub color: HexColor,
    pub selected: bool,
    pub hovered: bool,
}

/// The radial control's full visual tree for one step.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelScene {
    pub size: f64,
    pub separators: Vec<(Point, Point)>,
    pub wedges: Vec<WedgeScene>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellScene {
    pub name: String,
    pub accent: Option<HexColor>,
    pub selected: bool,
    pub hovered: bool,
}

/// The instrument grid's visual tree: a wrapping grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct GridScene {
    pub width: f64,
    pub columns: usize,
    pub cells: Vec<CellScene>,
}

pub fn wheel_svg(scene: &WheelScene) -> String {
    let size = scene.size;
    let mut out = String::with_capacity(scene.wedges.len() * 256);
    write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\" \
         width=\"{size}\" height=\"{size}\">"
    )
    .unwrap();

    for wedge in &scene.wedges {
        let opacity = if wedge.selected {
            1.0
        } else if wedge.hovered {
            0.92
        } else {
            0.85
        };
        let stroke_width = if wedge.selected { 2 } else { 1 };
        write!(
            out,
            "<g><path d=\"{}\" fill=\"{}\" fill-opacity=\"{opacity}\" \
             stroke=\"#FFFFFF\" stroke-width=\"{stroke_width}\"/>",
            wedge.path, wedge.color
        )
        .unwrap();
        write!(
            out,
            "<text x=\"{}\" y=\"{}\" fill=\"#FFFFFF\" font-size=\"{}\" \
             text-anchor=\"middle\" dominant-baseline=\"middle\">",
            wedge.label_at.x, wedge.label_at.y, wedge.font_size
        )
        .unwrap();
        svg_escape_into(&mut out, &wedge.label);
        out.push_str("</text></g>");
    }

    out.push_str("<g stroke=\"#FFFFFF\" stroke-width=\"1\" opacity=\"0.5\">");
    for (from, to) in &scene.separators {
        write!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            from.x, from.y, to.x, to.y
        )
        .unwrap();
    }
    out.push_str("</g></svg>");
    out
}

pub fn grid_svg(scene: &GridScene) -> String {
    let columns = scene.columns.max(1);
    let cell_w = scene.width / columns as f64;
    let rows = scene.cells.len().div_ceil(columns);
    let height = rows as f64 * GRID_CELL_HEIGHT;

    let mut out = String::with_capacity(scene.cells.len() * 192);
    write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {height}\" \
         width=\"{}\" height=\"{height}\">",
        scene.width, scene.width
    )
    .unwrap();

    for (i, cell) in scene.cells.iter().enumerate() {
        let x = (i % columns) as f64 * cell_w;
        let y = (i / columns) as f64 * GRID_CELL_HEIGHT;
        let fill = if cell.selected {
            "#2A2A2A"
        } else if cell.hovered {
            "#F4F4F4"
        } else {
            "#FFFFFF"
        };
        write!(
            out,
            "<g><rect x=\"{x}\" y=\"{y}\" width=\"{cell_w}\" \
             height=\"{GRID_CELL_HEIGHT}\" fill=\"{fill}\" stroke=\"#E5E5E5\"/>"
        )
        .unwrap();

        let (accent, accent_opacity) = match cell.accent {
            Some(color) => (color.to_string(), 1.0),
            None => ("#FFFFFF".to_string(), 0.22),
        };
        write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"4\" rx=\"2\" \
             fill=\"{accent}\" fill-opacity=\"{accent_opacity}\"/>",
            x + 10.0,
            y + GRID_CELL_HEIGHT - 10.0,
            cell_w - 20.0
        )
        .unwrap();

        let ink = if cell.selected { "#FFFFFF" } else { "#1E1E1E" };
        write!(
            out,
            "<text x=\"{}\" y=\"{}\" fill=\"{ink}\" font-size=\"14\" \
             text-anchor=\"middle\" dominant-baseline=\"middle\">",
            x + cell_w / 2.0,
            y + GRID_CELL_HEIGHT / 2.0 - 2.0
        )
        .unwrap();
        svg_escape_into(&mut out, &cell.name);
        out.push_str("</text></g>");
    }

    out.push_str("</svg>");
    out
}

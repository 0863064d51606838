pub mod app;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod panel;
pub mod radial;
pub mod session;
pub mod view;

pub use session::WizardSession;

// Radial footprint
pub const HARD_MAX: f64 = 640.0; // wheel ceiling
pub const HARD_MIN: f64 = 220.0; // wheel floor
pub const RADIAL_VW: f64 = 0.70; // share of viewport width
pub const RADIAL_VH: f64 = 0.78; // share of the height left over
pub const RADIAL_SCALE: f64 = 0.92; // final correction

// Region reserved by the page around the control
pub const SAFE_TOP: f64 = 140.0;
pub const FOOTER_H: f64 = 64.0;

// Grid footprint, independent of the wheel's
pub const GRID_WIDTH_RATIO: f64 = 0.9;
pub const GRID_MIN: f64 = 380.0;
pub const GRID_MAX: f64 = 620.0;
pub const GRID_COLUMN_BREAKPOINT: f64 = 640.0;
pub const GRID_CELL_HEIGHT: f64 = 56.0;

// Viewport guards (0/NaN protection)
pub const MIN_VIEWPORT_W: f64 = 320.0;
pub const MIN_VIEWPORT_H: f64 = 480.0;

// Wedge labels
pub const LABEL_RADIUS_RATIO: f64 = 0.6;
pub const LABEL_FONT_MIN: f64 = 12.0;
pub const LABEL_FONT_RATIO: f64 = 0.065;

// Contextual panels
pub const WIDE_BREAKPOINT: f64 = 880.0;
pub const PANEL_GAP: f64 = 24.0;
pub const PANEL_TOP_MARGIN: f64 = 16.0;
pub const PANEL_BELOW_GAP: f64 = 16.0;
pub const PANEL_MAX_WIDTH: f64 = 560.0;
pub const PANEL_SIDE_MARGIN: f64 = 32.0;
pub const PANEL_NATURAL_WIDTH: f64 = 260.0;
pub const PANEL_NATURAL_HEIGHT: f64 = 120.0;

// Layout and styling constants shared by the scene composer and the web
// frontend. Styling is cosmetic; the geometry constants define the view.

// Drawing surface layout (square canvas, uniform margin)
pub const VIEW_SIZE: f64 = 500.0;
pub const VIEW_MARGIN: f64 = 40.0;

// Wireframe grid
pub const GRATICULE_STEP_DEG: f64 = 15.0;
// Sampling step along each grid line; fine enough that chords read as arcs
pub const GRATICULE_SAMPLE_DEG: f64 = 2.5;

// Formatting boundary: magnitudes below this render as a clean "0.000"
pub const ZERO_SNAP_EPS: f64 = 1e-10;

// Palette (slate/amber scheme)
pub const SPHERE_FILL: &str = "rgba(30, 41, 59, 0.5)";
pub const SPHERE_STROKE: &str = "#475569";
pub const GRATICULE_COLOR: &str = "#334155";
pub const EQUATOR_COLOR: &str = "#475569";
pub const AXIS_COLOR: &str = "#64748b";
pub const LABEL_COLOR: &str = "#94a3b8";
pub const VECTOR_COLOR: &str = "#f59e0b";

// Stroke widths (canvas pixels)
pub const SPHERE_STROKE_WIDTH: f64 = 1.5;
pub const GRATICULE_WIDTH: f64 = 0.5;
pub const EQUATOR_WIDTH: f64 = 1.0;
pub const AXIS_WIDTH: f64 = 1.0;
pub const VECTOR_WIDTH: f64 = 2.5;

// Label typography (canvas pixels)
pub const LABEL_FONT_PX: f64 = 14.0;
pub const TICK_FONT_PX: f64 = 10.0;

// Arrowhead at the state-vector tip
pub const ARROWHEAD_LEN: f64 = 10.0;
pub const ARROWHEAD_HALF_WIDTH: f64 = 5.0;

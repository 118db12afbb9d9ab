// Page wiring for the web frontend

// Element ids expected in index.html
pub const CANVAS_ID: &str = "c";
pub const PERMISSION_BUTTON_ID: &str = "btn";
pub const DEBUG_READOUT_ID: &str = "debug";

// Canvas 2D styles
pub const BACKGROUND_FILL: &str = "rgba(11,16,32,1)";
pub const PETAL_INNER_FILL: &str = "rgba(255, 210, 230, 0.95)";
pub const PETAL_OUTER_FILL: &str = "rgba(255, 150, 190, 0.85)";
pub const PETAL_RIB_STROKE: &str = "rgba(255,255,255,0.35)";
pub const PETAL_RIB_WIDTH: f64 = 1.0;

// Teardrop bezier control points, in multiples of petal size
pub const PETAL_CP1: (f64, f64) = (0.9, -0.9);
pub const PETAL_CP2: (f64, f64) = (1.2, 0.2);

// Seed used when the host cannot provide entropy
pub const FALLBACK_SEED: u64 = 0x5EED_F00D;

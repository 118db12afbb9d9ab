use std::f32::consts::TAU;

// Shared simulation tuning constants used by both web and native frontends.

// Field
pub const PETAL_COUNT: usize = 90;

// Sensor normalization
pub const STANDARD_GRAVITY: f32 = 9.8; // m/s², maps raw acceleration to unit tilt
pub const TILT_SMOOTHING_GAIN: f32 = 0.12; // EMA gain per accepted motion sample

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.05; // caps simulation jumps after pauses / background tabs

// Tilt -> forces
pub const WIND_PX_PER_SEC: f32 = 90.0; // horizontal force at full sideways tilt
pub const GRAVITY_BOOST_PX_PER_SEC: f32 = -20.0; // fall speed change at full forward tilt

// Boundary policy (px beyond the viewport before a petal is recycled)
pub const EXIT_MARGIN_BOTTOM: f32 = 30.0;
pub const EXIT_MARGIN_SIDE: f32 = 60.0;

// Windward re-seed: empirically tuned, kept as-is
pub const WINDWARD_THRESHOLD: f32 = 30.0;
pub const WINDWARD_LEFT_MIN: f32 = -30.0; // px
pub const WINDWARD_LEFT_MAX_FRAC: f32 = 0.2; // of viewport width
pub const WINDWARD_RIGHT_MIN_FRAC: f32 = 0.8; // of viewport width
pub const WINDWARD_RIGHT_OVERHANG: f32 = 30.0; // px past the right edge

// Spawn ranges
pub const TOP_SPAWN_BAND_FRAC: f32 = 0.2; // petals enter from up to 20% above the top edge
pub const SIZE_RANGE: (f32, f32) = (6.0, 14.0);
pub const FALL_SPEED_RANGE: (f32, f32) = (40.0, 90.0);
pub const DRIFT_SPEED_RANGE: (f32, f32) = (-15.0, 15.0);
pub const ROTATION_RANGE: (f32, f32) = (0.0, TAU);
pub const ROTATION_SPEED_RANGE: (f32, f32) = (-2.2, 2.2);
pub const WOBBLE_PHASE_RANGE: (f32, f32) = (0.0, TAU);
pub const WOBBLE_AMPLITUDE_RANGE: (f32, f32) = (4.0, 16.0);
pub const WOBBLE_SPEED_RANGE: (f32, f32) = (0.6, 1.6);
pub const ALPHA_RANGE: (f32, f32) = (0.6, 0.95);

// Palette (straight RGBA, 0..1)
pub const BACKGROUND_RGBA: [f32; 4] = [11.0 / 255.0, 16.0 / 255.0, 32.0 / 255.0, 1.0];
pub const PETAL_INNER_RGBA: [f32; 4] = [1.0, 210.0 / 255.0, 230.0 / 255.0, 0.95];
pub const PETAL_OUTER_RGBA: [f32; 4] = [1.0, 150.0 / 255.0, 190.0 / 255.0, 0.85];
pub const PETAL_RIB_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 0.35];

// Petal silhouette, in multiples of petal size
pub const PETAL_GRADIENT_CENTER: f32 = -0.2; // both axes
pub const PETAL_GRADIENT_RADIUS: f32 = 1.4;
pub const PETAL_RIB_EXTENT: f32 = 0.9;

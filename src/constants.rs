//! Crate-wide constants.
//!
//! Centralizes the interaction thresholds and default styling so the
//! settings defaults and the tests read from one place.

// ============================================================================
// Interaction
// ============================================================================

/// Per-axis distance under which the pointer counts as being on a corner
pub const PROXIMITY_THRESHOLD: f32 = 10.0;

/// Minimum width and height of a drawn rectangle for it to be committed
pub const MIN_RECTANGLE_SIZE: f32 = 30.0;

// ============================================================================
// Rectangle Style
// ============================================================================

/// Rectangle outline color (RGBA)
pub const RECT_STROKE_COLOR: [u8; 4] = [37, 80, 0, 255];

/// Rectangle fill color (RGBA, 60% alpha)
pub const RECT_FILL_COLOR: [u8; 4] = [227, 237, 112, 153];

/// Rectangle outline width in pixels
pub const RECT_STROKE_WIDTH: f32 = 1.0;

// ============================================================================
// Corner Marker Style
// ============================================================================

/// Radius of the hovered-corner marker in pixels
pub const MARKER_RADIUS: f32 = 5.0;

/// Marker outline color (RGBA)
pub const MARKER_STROKE_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Marker fill color (RGBA, 50% alpha)
pub const MARKER_FILL_COLOR: [u8; 4] = [225, 225, 225, 128];

/// Marker outline width in pixels
pub const MARKER_STROKE_WIDTH: f32 = 2.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "annoboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

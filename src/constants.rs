//! Sizing and styling constants for the field and its picker.

/// Picker area width, matching the popover content width.
pub const PICKER_WIDTH: f32 = 260.0;

/// Saturation/brightness area height
pub const AREA_HEIGHT: f32 = 100.0;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 14.0;

/// Gradient stop bar height
pub const STOP_BAR_HEIGHT: f32 = 18.0;

/// Cursor circle radius on the 2D area
pub const CURSOR_RADIUS: f64 = 7.0;

/// Thumb radius on 1D sliders and stop handles
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for tracks and swatches
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding inside the popover
pub const PADDING: f32 = 16.0;

/// Popover minimum heights per value kind
pub const POPOVER_MIN_HEIGHT_SOLID: f32 = 290.0;
pub const POPOVER_MIN_HEIGHT_GRADIENT: f32 = 360.0;

/// Preview swatch on the toggle button
pub const SWATCH_WIDTH: f32 = 50.0;
pub const SWATCH_HEIGHT: f32 = 30.0;

/// Manual value input width
pub const VALUE_INPUT_WIDTH: f32 = 200.0;

/// Angle input width
pub const ANGLE_INPUT_WIDTH: f32 = 36.0;

pub const INPUT_FONT: f32 = 12.0;
pub const LABEL_FONT: f32 = 12.0;
pub const HINT_FONT: f32 = 11.0;

/// Checkerboard cell size behind translucent colors
pub const CHECKER_CELL: f64 = 5.0;

/// Hue track raster width; scaled to the widget
pub const HUE_RASTER_WIDTH: u32 = 360;

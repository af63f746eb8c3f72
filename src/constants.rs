//! Sizing, color, and styling constants shared by the widgets.

use floem::peniko::Color;

/// Swatch edge length
pub const SWATCH_SIZE: f32 = 20.0;

/// Corner radius on swatches
pub const SWATCH_RADIUS: f32 = 4.0;

/// Columns in the swatch book grid
pub const GRID_COLUMNS: usize = 8;

/// Gap between swatch book cells
pub const GRID_GAP: f32 = 4.0;

/// Overall slider view height (hit target, not the track)
pub const SLIDER_HEIGHT: f32 = 24.0;

/// Slider track height
pub const TRACK_HEIGHT: f64 = 5.0;

/// Corner radius on the slider track
pub const TRACK_RADIUS: f64 = 100.0;

/// Thumb radius on the slider
pub const THUMB_RADIUS: f64 = 8.0;

/// Unfilled slider track
pub const TRACK_COLOR: Color = Color::rgb8(232, 235, 237);

/// Filled slider track, thumb, and selection ring
pub const ACCENT_COLOR: Color = Color::rgb8(8, 117, 225);

/// Hairline border drawn around swatches and the track
pub const HAIRLINE: Color = Color::rgba8(0, 0, 0, 40);

/// Interval and reset label text
pub const LABEL_COLOR: Color = Color::rgb8(86, 96, 110);

/// Value box width
pub const VALUE_BOX_WIDTH: f32 = 48.0;

/// Label font size
pub const LABEL_FONT: f32 = 12.0;

/// Value box font size
pub const INPUT_FONT: f32 = 12.0;

/// Gap between a slider track and its interval labels
pub const ROW_GAP: f32 = 8.0;

/// Hover background on the reset row
pub const HOVER_BG: Color = Color::rgb8(230, 230, 230);

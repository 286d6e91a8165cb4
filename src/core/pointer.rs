//! Pointer position published as CSS custom properties
//!
//! The hero's ambient gradient follows the pointer. The stylesheet reads the
//! position from these variables on the root element:
//! - `--pointer-x` / `--pointer-y` in pixels
//! - `--pointer-x-pct` / `--pointer-y-pct` in percent of the viewport

pub const POINTER_X_VAR: &str = "--pointer-x";
pub const POINTER_Y_VAR: &str = "--pointer-y";
pub const POINTER_X_PCT_VAR: &str = "--pointer-x-pct";
pub const POINTER_Y_PCT_VAR: &str = "--pointer-y-pct";

/// Pointer position relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
    pub x_pct: f64,
    pub y_pct: f64,
}

impl Default for PointerPosition {
    /// Centre of the viewport, used before the first pointer event
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            x_pct: 50.0,
            y_pct: 50.0,
        }
    }
}

impl PointerPosition {
    pub fn from_client(x: f64, y: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            x,
            y,
            x_pct: percent_of(x, viewport_width),
            y_pct: percent_of(y, viewport_height),
        }
    }

    /// Custom property name/value pairs to set on the root element
    pub fn css_properties(&self) -> [(&'static str, String); 4] {
        [
            (POINTER_X_VAR, format!("{:.0}px", self.x)),
            (POINTER_Y_VAR, format!("{:.0}px", self.y)),
            (POINTER_X_PCT_VAR, format!("{:.2}%", self.x_pct)),
            (POINTER_Y_PCT_VAR, format!("{:.2}%", self.y_pct)),
        ]
    }
}

fn percent_of(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !value.is_finite() {
        return 50.0;
    }
    (value / extent * 100.0).clamp(0.0, 100.0)
}

//! Grid snapping for proposed coordinates.

use folio_document::Point;
use serde::{Deserialize, Serialize};

/// Default grid pitch in virtual units.
pub const GRID_PITCH: f64 = 20.0;

/// Optional snapping grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_pitch")]
    pub pitch: f64,
}

fn default_pitch() -> f64 {
    GRID_PITCH
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            enabled: false,
            pitch: GRID_PITCH,
        }
    }
}

impl Grid {
    pub fn enabled(pitch: f64) -> Self {
        Self {
            enabled: true,
            pitch,
        }
    }

    pub fn snap(&self, value: f64) -> f64 {
        if self.enabled {
            snap_to(value, self.pitch)
        } else {
            value
        }
    }

    pub fn snap_point(&self, point: Point) -> Point {
        Point::new(self.snap(point.x), self.snap(point.y))
    }
}

/// Nearest multiple of `pitch`; halves round towards positive infinity.
/// A non-positive pitch leaves the value untouched.
pub fn snap_to(value: f64, pitch: f64) -> f64 {
    if pitch <= 0.0 {
        return value;
    }
    (value / pitch + 0.5).floor() * pitch
}

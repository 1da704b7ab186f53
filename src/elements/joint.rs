//! Joint - a pin connection point in the truss

use serde::{Deserialize, Serialize};

/// A pin-jointed connection point in the plane
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Joint {
    /// X coordinate (m)
    pub x: f64,
    /// Y coordinate (m)
    pub y: f64,
    /// Whether this joint sits at a prescribed support location
    pub is_fixed: bool,
}

impl Joint {
    /// Create a new free joint at the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            is_fixed: false,
        }
    }

    /// Create a joint at a prescribed support location
    pub fn fixed(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            is_fixed: true,
        }
    }

    /// Distance to another joint
    pub fn distance_to(&self, other: &Joint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

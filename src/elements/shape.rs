//! Cross-section shapes for truss members

use serde::{Deserialize, Serialize};

/// Cross-section family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Solid square bar
    Bar,
    /// Hollow square tube
    Tube,
}

/// Cross-section properties for a truss member
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shape {
    /// Section family
    pub kind: ShapeKind,
    /// Outside width of the section in m
    pub width: f64,
    /// Wall thickness in m (equals half the width for solid bars)
    pub thickness: f64,
    /// Cross-sectional area in m²
    pub area: f64,
    /// Moment of inertia in m⁴
    pub moment: f64,
}

impl Shape {
    /// Create a solid square bar section
    pub fn bar(width: f64) -> Self {
        Self {
            kind: ShapeKind::Bar,
            width,
            thickness: width / 2.0,
            area: width * width,
            moment: width.powi(4) / 12.0,
        }
    }

    /// Create a hollow square tube section
    pub fn tube(width: f64, thickness: f64) -> Self {
        let inner = width - 2.0 * thickness;
        Self {
            kind: ShapeKind::Tube,
            width,
            thickness,
            area: width * width - inner * inner,
            moment: (width.powi(4) - inner.powi(4)) / 12.0,
        }
    }

    /// Radius of gyration (both axes, square sections)
    pub fn radius_of_gyration(&self) -> f64 {
        (self.moment / self.area).sqrt()
    }
}

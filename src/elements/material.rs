//! Material properties

use serde::{Deserialize, Serialize};

/// Material properties for truss members
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity in MPa
    pub e: f64,
    /// Yield strength in MPa
    pub fy: f64,
    /// Density in kg/m³
    pub density: f64,
}

impl Material {
    /// Create a material with given properties
    pub fn new(e: f64, fy: f64, density: f64) -> Self {
        Self { e, fy, density }
    }

    /// Carbon structural steel (A36 class)
    pub fn carbon_steel() -> Self {
        Self::new(200_000.0, 250.0, 7850.0)
    }

    /// High-strength low-alloy steel
    pub fn high_strength_steel() -> Self {
        Self::new(200_000.0, 345.0, 7850.0)
    }

    /// Quenched and tempered steel
    pub fn quenched_tempered_steel() -> Self {
        Self::new(200_000.0, 485.0, 7850.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::carbon_steel()
    }
}

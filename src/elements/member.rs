//! Member - a two-force axial element between two joints

use serde::{Deserialize, Serialize};

use crate::results::MemberEnvelope;

/// A pin-ended axial member connecting two joints.
///
/// Joint order matters: positive axial force means tension, and the
/// direction cosines run from joint `a` toward joint `b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Index of the start joint
    pub a: usize,
    /// Index of the end joint
    pub b: usize,
    /// Index of the material in the model catalog
    pub material: usize,
    /// Index of the cross-section shape in the model catalog
    pub shape: usize,

    /// Force/strength envelope written back by populate-mode analysis
    #[serde(skip)]
    pub(crate) envelope: Option<MemberEnvelope>,
}

impl Member {
    /// Create a new member between two joints
    pub fn new(a: usize, b: usize, material: usize, shape: usize) -> Self {
        Self {
            a,
            b,
            material,
            shape,
            envelope: None,
        }
    }

    /// Force/strength envelope from the last populate-mode analysis.
    ///
    /// Fields are NaN when the last analysis found the bridge unstable.
    pub fn envelope(&self) -> Option<&MemberEnvelope> {
        self.envelope.as_ref()
    }
}

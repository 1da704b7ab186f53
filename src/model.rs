//! Bridge model - joints, members and part catalogs

use serde::{Deserialize, Serialize};

use crate::analysis::{self, AnalysisOptions};
use crate::conditions::DesignConditions;
use crate::elements::{Joint, Material, Member, Shape};
use crate::error::{TrussError, TrussResult};
use crate::inventory::Inventory;
use crate::results::{AnalysisResult, MemberEnvelope};

/// Per-member geometry derived from the joint coordinates
#[derive(Debug, Clone, Copy)]
pub(crate) struct MemberGeometry {
    /// Member length in m
    pub length: f64,
    /// X direction cosine from joint `a` to joint `b`
    pub cos_x: f64,
    /// Y direction cosine from joint `a` to joint `b`
    pub cos_y: f64,
    /// Axial stiffness A·E/L in kN/m
    pub stiffness: f64,
}

/// The 2D pin-jointed bridge model.
///
/// Joints and members are identified by their index in insertion order;
/// the first `loaded_joint_count` joints (per the design conditions) must
/// be the deck-level joints from left to right.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeModel {
    /// Joints in the model
    pub joints: Vec<Joint>,
    /// Members in the model
    pub members: Vec<Member>,
    /// Material catalog
    pub materials: Vec<Material>,
    /// Cross-section shape catalog
    pub shapes: Vec<Shape>,
}

impl BridgeModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a joint, returning its index
    pub fn add_joint(&mut self, joint: Joint) -> usize {
        self.joints.push(joint);
        self.joints.len() - 1
    }

    /// Add a material to the catalog, returning its index
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Add a shape to the catalog, returning its index
    pub fn add_shape(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Add a member, returning its index.
    ///
    /// Validates the joint, material and shape references and rejects
    /// zero-length members outright; the editing layer should never produce
    /// one, but a degenerate member would divide by zero deep inside the
    /// solver, so the contract is enforced here as well.
    pub fn add_member(&mut self, member: Member) -> TrussResult<usize> {
        let a = self
            .joints
            .get(member.a)
            .ok_or(TrussError::JointNotFound(member.a))?;
        let b = self
            .joints
            .get(member.b)
            .ok_or(TrussError::JointNotFound(member.b))?;
        if member.material >= self.materials.len() {
            return Err(TrussError::MaterialNotFound(member.material));
        }
        if member.shape >= self.shapes.len() {
            return Err(TrussError::ShapeNotFound(member.shape));
        }
        if a.distance_to(b) < 1e-10 {
            return Err(TrussError::InvalidGeometry(format!(
                "member has zero length: a={}, b={}",
                member.a, member.b
            )));
        }

        self.members.push(member);
        Ok(self.members.len() - 1)
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Run the load-test analysis and return an immutable result.
    ///
    /// A structurally unstable bridge is reported through
    /// [`AnalysisStatus::Unstable`](crate::analysis::AnalysisStatus), not an
    /// error; errors are reserved for degenerate input.
    pub fn analyze(
        &self,
        conditions: &DesignConditions,
        inventory: &dyn Inventory,
    ) -> TrussResult<AnalysisResult> {
        analysis::run(self, conditions, inventory)
    }

    /// Run the load-test analysis with explicit [`AnalysisOptions`].
    ///
    /// With `populate` set, each member's force/strength envelope is written
    /// back onto the member records for display; when the bridge is unstable
    /// the envelopes are reset to NaN rather than left holding values from an
    /// earlier analysis. Without it the model is untouched.
    pub fn analyze_with(
        &mut self,
        conditions: &DesignConditions,
        inventory: &dyn Inventory,
        options: &AnalysisOptions,
    ) -> TrussResult<AnalysisResult> {
        let result = analysis::run(self, conditions, inventory)?;

        if options.populate {
            for (index, member) in self.members.iter_mut().enumerate() {
                member.envelope = Some(
                    result
                        .envelope(index)
                        .copied()
                        .unwrap_or_else(MemberEnvelope::invalid),
                );
            }
        }

        Ok(result)
    }

    /// Shorthand for [`analyze_with`](Self::analyze_with) with `populate` set
    pub fn analyze_populate(
        &mut self,
        conditions: &DesignConditions,
        inventory: &dyn Inventory,
    ) -> TrussResult<AnalysisResult> {
        self.analyze_with(conditions, inventory, &AnalysisOptions::new().with_populate(true))
    }

    // ========================
    // Serialization
    // ========================

    /// Serialize the model to JSON (session persistence)
    pub fn to_json(&self) -> TrussResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load a model from JSON
    pub fn from_json(json: &str) -> TrussResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every member against the allowable slenderness ratio
    pub fn slenderness_ok(&self, conditions: &DesignConditions) -> TrussResult<bool> {
        let geometry = self.member_geometry()?;
        for (member, geom) in self.members.iter().zip(&geometry) {
            let shape = &self.shapes[member.shape];
            if geom.length / shape.radius_of_gyration() > conditions.allowable_slenderness {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Per-member length, direction cosines and axial stiffness.
    ///
    /// Re-validates every member's joint, material and shape references:
    /// `add_member` already checks them, but deserialized sessions and
    /// direct pushes into the public vectors bypass it, and a dangling
    /// index must surface as an error rather than a panic.
    pub(crate) fn member_geometry(&self) -> TrussResult<Vec<MemberGeometry>> {
        let mut geometry = Vec::with_capacity(self.members.len());
        for (index, member) in self.members.iter().enumerate() {
            let a = self
                .joints
                .get(member.a)
                .ok_or(TrussError::JointNotFound(member.a))?;
            let b = self
                .joints
                .get(member.b)
                .ok_or(TrussError::JointNotFound(member.b))?;
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            let length = dx.hypot(dy);
            if length < 1e-10 {
                return Err(TrussError::InvalidGeometry(format!(
                    "member {} has zero length",
                    index
                )));
            }
            let material = self
                .materials
                .get(member.material)
                .ok_or(TrussError::MaterialNotFound(member.material))?;
            let shape = self
                .shapes
                .get(member.shape)
                .ok_or(TrussError::ShapeNotFound(member.shape))?;
            geometry.push(MemberGeometry {
                length,
                cos_x: dx / length,
                cos_y: dy / length,
                // e is MPa; kN force units want kN/m² (×1000)
                stiffness: shape.area * material.e * 1000.0 / length,
            });
        }
        Ok(geometry)
    }
}

//! The load-test analysis pipeline.
//!
//! One `run` is a single synchronous pass: geometry, load assembly,
//! restraints, direct-stiffness assembly, Gauss-Jordan inversion, then
//! force recovery and strength evaluation. The inverse of the restrained
//! stiffness matrix is computed once and reused for every load case, which
//! is why a full dense inverse is preferred over per-case elimination at
//! these problem sizes.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::conditions::DesignConditions;
use crate::error::{TrussError, TrussResult};
use crate::inventory::Inventory;
use crate::loads;
use crate::math::{self, Mat, Vec as ColVec};
use crate::model::{BridgeModel, MemberGeometry};
use crate::results::{AnalysisResult, MemberEnvelope};

/// Pivot magnitude below which the restrained stiffness matrix is treated
/// as singular. Stiffness terms in kN/m are orders of magnitude above one
/// and restrained diagonals are exactly one, so a pivot this small only
/// appears when the structure is a mechanism or close to one.
const PIVOT_TOLERANCE: f64 = 0.99;

/// Overall verdict of a load-test analysis.
///
/// The variant order is a fixed taxonomy, not a severity scale:
/// `None < FailsSlenderness < Unstable < FailsLoadTest < Passes`.
/// Downstream code compares against `Unstable` to decide whether detailed
/// force and displacement data exist, which is the only ordering relation
/// that carries meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnalysisStatus {
    /// No analysis has been run
    None,
    /// Load test passed but a member exceeds the allowable slenderness
    FailsSlenderness,
    /// The stiffness matrix is singular or ill-conditioned
    Unstable,
    /// Some member's force exceeds its strength
    FailsLoadTest,
    /// The bridge carries every load case
    Passes,
}

impl AnalysisStatus {
    /// Whether displacement and force data exist for this status
    pub fn is_solved(self) -> bool {
        self > AnalysisStatus::Unstable
    }
}

/// Options controlling what an analysis writes back to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Write each member's force/strength envelope back onto the member
    /// records after the run (for display); defaults to off
    pub populate: bool,
}

impl AnalysisOptions {
    /// Options with every flag off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether member envelopes are written back to the model
    pub fn with_populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }
}

/// Run the full pipeline for one bridge snapshot
pub(crate) fn run(
    model: &BridgeModel,
    conditions: &DesignConditions,
    inventory: &dyn Inventory,
) -> TrussResult<AnalysisResult> {
    if model.joints.is_empty() || model.members.is_empty() {
        return Err(TrussError::EmptyModel);
    }
    let n_joints = model.joints.len();
    let n_members = model.members.len();
    conditions.validate(n_joints)?;

    let geometry = model.member_geometry()?;
    let mut load_vectors = loads::build_load_vectors(model, conditions, &geometry);
    let restrained = conditions.restrained_dofs(n_joints);

    let mut stiffness = assemble_stiffness(model, &geometry, 2 * n_joints);
    apply_restraints(&mut stiffness, &mut load_vectors, &restrained);

    debug!(
        "analyzing {} joints, {} members, {} load cases, {} restrained DOFs",
        n_joints,
        n_members,
        load_vectors.len(),
        restrained.iter().filter(|&&r| r).count()
    );

    if !math::gauss_jordan_invert(&mut stiffness, PIVOT_TOLERANCE) {
        warn!("stiffness matrix pivot below {PIVOT_TOLERANCE}; bridge is unstable");
        return Ok(AnalysisResult::unstable(load_vectors.len(), n_members));
    }

    // The matrix now holds the inverse; one multiply per load case.
    let displacements: Vec<ColVec> = load_vectors.iter().map(|p| &stiffness * p).collect();

    let member_forces: Vec<Vec<f64>> = displacements
        .iter()
        .map(|d| {
            model
                .members
                .iter()
                .zip(&geometry)
                .map(|(member, geom)| member_force(member.a, member.b, geom, d))
                .collect()
        })
        .collect();

    let (envelopes, fails) = evaluate_strength(model, inventory, &geometry, &member_forces);

    let any_overstressed = envelopes
        .iter()
        .any(|e| e.max_compression > e.compressive_strength || e.max_tension > e.tensile_strength);

    let status = if any_overstressed {
        AnalysisStatus::FailsLoadTest
    } else if !slenderness_ok(model, conditions, &geometry) {
        AnalysisStatus::FailsSlenderness
    } else {
        AnalysisStatus::Passes
    };

    debug!("analysis complete: {:?}", status);
    Ok(AnalysisResult::new(
        status,
        displacements,
        member_forces,
        envelopes,
        fails,
    ))
}

/// Direct-stiffness assembly of the global matrix.
///
/// Each member contributes the symmetric 2x2-block pattern of an axial
/// element at the four DOF combinations of its two joints: own-joint terms
/// positive, cross-joint terms negative.
fn assemble_stiffness(model: &BridgeModel, geometry: &[MemberGeometry], n_dofs: usize) -> Mat {
    let mut k = Mat::zeros(n_dofs, n_dofs);

    for (member, geom) in model.members.iter().zip(geometry) {
        let xx = geom.stiffness * geom.cos_x * geom.cos_x;
        let yy = geom.stiffness * geom.cos_y * geom.cos_y;
        let xy = geom.stiffness * geom.cos_x * geom.cos_y;

        let ax = 2 * member.a;
        let ay = ax + 1;
        let bx = 2 * member.b;
        let by = bx + 1;

        k[(ax, ax)] += xx;
        k[(ay, ay)] += yy;
        k[(ax, ay)] += xy;
        k[(ay, ax)] += xy;

        k[(bx, bx)] += xx;
        k[(by, by)] += yy;
        k[(bx, by)] += xy;
        k[(by, bx)] += xy;

        k[(ax, bx)] -= xx;
        k[(bx, ax)] -= xx;
        k[(ay, by)] -= yy;
        k[(by, ay)] -= yy;
        k[(ax, by)] -= xy;
        k[(by, ax)] -= xy;
        k[(ay, bx)] -= xy;
        k[(bx, ay)] -= xy;
    }

    k
}

/// Row/column elimination for the restrained DOFs: zero the row and column,
/// put one on the diagonal, and zero the matching load entry in every case
fn apply_restraints(k: &mut Mat, load_vectors: &mut [ColVec], restrained: &[bool]) {
    let n = restrained.len();
    for (dof, _) in restrained.iter().enumerate().filter(|(_, &r)| r) {
        for j in 0..n {
            k[(dof, j)] = 0.0;
            k[(j, dof)] = 0.0;
        }
        k[(dof, dof)] = 1.0;
        for load in load_vectors.iter_mut() {
            load[dof] = 0.0;
        }
    }
}

/// Axial force from the endpoint displacement difference projected onto the
/// member direction; positive is tension
fn member_force(a: usize, b: usize, geom: &MemberGeometry, d: &ColVec) -> f64 {
    geom.stiffness
        * (geom.cos_x * (d[2 * b] - d[2 * a]) + geom.cos_y * (d[2 * b + 1] - d[2 * a + 1]))
}

/// Per-member force envelopes and strengths, plus per-case fail flags
fn evaluate_strength(
    model: &BridgeModel,
    inventory: &dyn Inventory,
    geometry: &[MemberGeometry],
    member_forces: &[Vec<f64>],
) -> (Vec<MemberEnvelope>, Vec<Vec<bool>>) {
    let n_members = model.members.len();

    let envelopes: Vec<MemberEnvelope> = model
        .members
        .iter()
        .zip(geometry)
        .enumerate()
        .map(|(index, (member, geom))| {
            let material = &model.materials[member.material];
            let shape = &model.shapes[member.shape];

            let mut max_compression = 0.0_f64;
            let mut max_tension = 0.0_f64;
            for case_forces in member_forces {
                let force = case_forces[index];
                max_compression = max_compression.max(-force);
                max_tension = max_tension.max(force);
            }

            MemberEnvelope {
                max_compression,
                max_tension,
                compressive_strength: inventory.compressive_strength(material, shape, geom.length),
                tensile_strength: inventory.tensile_strength(material, shape),
            }
        })
        .collect();

    let fails: Vec<Vec<bool>> = member_forces
        .iter()
        .map(|case_forces| {
            (0..n_members)
                .map(|m| {
                    let force = case_forces[m];
                    -force > envelopes[m].compressive_strength
                        || force > envelopes[m].tensile_strength
                })
                .collect()
        })
        .collect();

    (envelopes, fails)
}

fn slenderness_ok(
    model: &BridgeModel,
    conditions: &DesignConditions,
    geometry: &[MemberGeometry],
) -> bool {
    model.members.iter().zip(geometry).all(|(member, geom)| {
        let shape = &model.shapes[member.shape];
        geom.length / shape.radius_of_gyration() <= conditions.allowable_slenderness
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Joint, Material, Member, Shape};
    use approx::assert_relative_eq;

    fn solve_with_load(
        model: &BridgeModel,
        conditions: &DesignConditions,
        load: ColVec,
    ) -> Vec<f64> {
        let geometry = model.member_geometry().unwrap();
        let restrained = conditions.restrained_dofs(model.joints.len());
        let mut loads = [load];
        let mut k = assemble_stiffness(model, &geometry, 2 * model.joints.len());
        apply_restraints(&mut k, &mut loads, &restrained);
        assert!(math::gauss_jordan_invert(&mut k, PIVOT_TOLERANCE));
        let d = &k * &loads[0];
        model
            .members
            .iter()
            .zip(&geometry)
            .map(|(member, geom)| member_force(member.a, member.b, geom, &d))
            .collect()
    }

    #[test]
    fn test_status_taxonomy_order() {
        assert!(AnalysisStatus::None < AnalysisStatus::FailsSlenderness);
        assert!(AnalysisStatus::FailsSlenderness < AnalysisStatus::Unstable);
        assert!(AnalysisStatus::Unstable < AnalysisStatus::FailsLoadTest);
        assert!(AnalysisStatus::FailsLoadTest < AnalysisStatus::Passes);

        assert!(!AnalysisStatus::FailsSlenderness.is_solved());
        assert!(!AnalysisStatus::Unstable.is_solved());
        assert!(AnalysisStatus::FailsLoadTest.is_solved());
        assert!(AnalysisStatus::Passes.is_solved());
    }

    #[test]
    fn test_single_member_axial_equilibrium() {
        // One horizontal member, pin at joint 0, roller at joint 1. An
        // axial pull at the roller end must come back as pure tension.
        let mut model = BridgeModel::new();
        model.add_material(Material::carbon_steel());
        model.add_shape(Shape::bar(0.05));
        model.add_joint(Joint::fixed(0.0, 0.0));
        model.add_joint(Joint::fixed(4.0, 0.0));
        model.add_member(Member::new(0, 1, 0, 0)).unwrap();

        let conditions = DesignConditions::simple_span(2);
        let mut load = ColVec::zeros(4);
        load[2] = 10.0; // +x at joint 1
        let forces = solve_with_load(&model, &conditions, load);
        assert_relative_eq!(forces[0], 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_triangle_matches_closed_form() {
        // Pin at joint 0, roller at joint 1, apex at 45 degrees. Under a
        // downward load W at the apex each inclined member carries
        // W / (2 sin θ) in compression and the bottom chord W / (2 tan θ)
        // in tension.
        let mut model = BridgeModel::new();
        model.add_material(Material::carbon_steel());
        model.add_shape(Shape::bar(0.05));
        model.add_joint(Joint::fixed(0.0, 0.0));
        model.add_joint(Joint::fixed(4.0, 0.0));
        model.add_joint(Joint::new(2.0, 2.0));
        model.add_member(Member::new(0, 2, 0, 0)).unwrap();
        model.add_member(Member::new(1, 2, 0, 0)).unwrap();
        model.add_member(Member::new(0, 1, 0, 0)).unwrap();

        let w = 1.0;
        let conditions = DesignConditions::simple_span(2);
        let mut load = ColVec::zeros(6);
        load[5] = -w;
        let forces = solve_with_load(&model, &conditions, load);

        let sin_theta = std::f64::consts::FRAC_1_SQRT_2;
        let expected = -w / (2.0 * sin_theta);
        assert_relative_eq!(forces[0], expected, max_relative = 1e-9);
        assert_relative_eq!(forces[1], expected, max_relative = 1e-9);
        assert_relative_eq!(forces[2], w / 2.0, max_relative = 1e-9);
    }

    #[test]
    fn test_stiffness_matrix_is_symmetric() {
        let mut model = BridgeModel::new();
        model.add_material(Material::carbon_steel());
        model.add_shape(Shape::bar(0.05));
        model.add_joint(Joint::new(0.0, 0.0));
        model.add_joint(Joint::new(4.0, 0.0));
        model.add_joint(Joint::new(2.0, 3.0));
        model.add_member(Member::new(0, 1, 0, 0)).unwrap();
        model.add_member(Member::new(0, 2, 0, 0)).unwrap();
        model.add_member(Member::new(1, 2, 0, 0)).unwrap();

        let geometry = model.member_geometry().unwrap();
        let k = assemble_stiffness(&model, &geometry, 6);
        for i in 0..6 {
            for j in 0..6 {
                assert_relative_eq!(k[(i, j)], k[(j, i)]);
            }
        }
        // Row sums vanish before restraints: rigid translation costs nothing
        for i in 0..6 {
            let x_sum: f64 = (0..3).map(|j| k[(i, 2 * j)]).sum();
            let y_sum: f64 = (0..3).map(|j| k[(i, 2 * j + 1)]).sum();
            assert_relative_eq!(x_sum, 0.0, epsilon = 1e-6);
            assert_relative_eq!(y_sum, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_restraints_zero_rows_and_loads() {
        let restrained = vec![true, false, false, true];
        let mut k = Mat::from_element(4, 4, 5.0);
        let mut loads = [ColVec::from_element(4, 7.0)];
        apply_restraints(&mut k, &mut loads, &restrained);

        assert_eq!(k[(0, 0)], 1.0);
        assert_eq!(k[(0, 2)], 0.0);
        assert_eq!(k[(2, 0)], 0.0);
        assert_eq!(k[(1, 2)], 5.0);
        assert_eq!(loads[0][0], 0.0);
        assert_eq!(loads[0][3], 0.0);
        assert_eq!(loads[0][1], 7.0);
    }
}

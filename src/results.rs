//! Result types for the load-test analysis

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisStatus;
use crate::math::Vec as ColVec;

/// Force and strength envelope for one member, maxima taken over all load
/// cases. Forces and strengths are kN, magnitudes (sign removed).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemberEnvelope {
    /// Largest compressive force over all load cases
    pub max_compression: f64,
    /// Largest tensile force over all load cases
    pub max_tension: f64,
    /// Compressive strength at the member's length
    pub compressive_strength: f64,
    /// Tensile strength
    pub tensile_strength: f64,
}

impl MemberEnvelope {
    /// Sentinel envelope written back after an unstable analysis
    pub fn invalid() -> Self {
        Self {
            max_compression: f64::NAN,
            max_tension: f64::NAN,
            compressive_strength: f64::NAN,
            tensile_strength: f64::NAN,
        }
    }

    /// Whether the envelope holds usable values
    pub fn is_valid(&self) -> bool {
        !self.max_compression.is_nan()
    }

    /// Demand over capacity in compression; > 1 means failure
    pub fn compression_ratio(&self) -> f64 {
        self.max_compression / self.compressive_strength
    }

    /// Demand over capacity in tension; > 1 means failure
    pub fn tension_ratio(&self) -> f64 {
        self.max_tension / self.tensile_strength
    }
}

/// Immutable outcome of one `analyze()` call.
///
/// Valid until the underlying bridge geometry changes; every call fully
/// recomputes all arrays. When the status is
/// [`AnalysisStatus::Unstable`] the detail accessors return `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    status: AnalysisStatus,
    n_load_cases: usize,
    n_members: usize,
    /// Joint displacements per load case, `2 * n_joints` entries each
    displacements: Vec<ColVec>,
    /// Member axial force per load case, positive tension
    member_forces: Vec<Vec<f64>>,
    /// Per-member force/strength envelopes
    envelopes: Vec<MemberEnvelope>,
    /// Per load case and member: force exceeded strength
    fails: Vec<Vec<bool>>,
}

impl AnalysisResult {
    pub(crate) fn new(
        status: AnalysisStatus,
        displacements: Vec<ColVec>,
        member_forces: Vec<Vec<f64>>,
        envelopes: Vec<MemberEnvelope>,
        fails: Vec<Vec<bool>>,
    ) -> Self {
        Self {
            status,
            n_load_cases: displacements.len(),
            n_members: envelopes.len(),
            displacements,
            member_forces,
            envelopes,
            fails,
        }
    }

    /// Result for a bridge whose stiffness matrix could not be inverted
    pub(crate) fn unstable(n_load_cases: usize, n_members: usize) -> Self {
        Self {
            status: AnalysisStatus::Unstable,
            n_load_cases,
            n_members,
            displacements: Vec::new(),
            member_forces: Vec::new(),
            envelopes: Vec::new(),
            fails: Vec::new(),
        }
    }

    /// Overall load-test verdict
    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    /// Number of load cases analyzed
    pub fn n_load_cases(&self) -> usize {
        self.n_load_cases
    }

    /// Number of members analyzed
    pub fn n_members(&self) -> usize {
        self.n_members
    }

    /// Full displacement vector for a load case
    pub fn displacement(&self, load_case: usize) -> Option<&ColVec> {
        self.displacements.get(load_case)
    }

    /// (dx, dy) of one joint for a load case, in m
    pub fn joint_displacement(&self, load_case: usize, joint: usize) -> Option<(f64, f64)> {
        let d = self.displacements.get(load_case)?;
        if 2 * joint + 1 >= d.len() {
            return None;
        }
        Some((d[2 * joint], d[2 * joint + 1]))
    }

    /// Axial force in a member for a load case, kN, positive tension
    pub fn member_force(&self, load_case: usize, member: usize) -> Option<f64> {
        self.member_forces.get(load_case)?.get(member).copied()
    }

    /// Whether a member's force exceeded its strength in a load case
    pub fn member_fails(&self, load_case: usize, member: usize) -> Option<bool> {
        self.fails.get(load_case)?.get(member).copied()
    }

    /// Force/strength envelope for a member
    pub fn envelope(&self, member: usize) -> Option<&MemberEnvelope> {
        self.envelopes.get(member)
    }

    /// Summarize the analysis, or `None` when no solution exists
    pub fn summary(&self) -> Option<AnalysisSummary> {
        if self.displacements.is_empty() {
            return None;
        }

        let mut summary = AnalysisSummary {
            status: self.status,
            n_load_cases: self.n_load_cases,
            n_members: self.n_members,
            total_dofs: self.displacements[0].len(),
            ..Default::default()
        };

        for d in &self.displacements {
            for joint in 0..d.len() / 2 {
                let mag = d[2 * joint].hypot(d[2 * joint + 1]);
                if mag > summary.max_displacement {
                    summary.max_displacement = mag;
                    summary.max_disp_joint = joint;
                }
            }
        }

        for (member, envelope) in self.envelopes.iter().enumerate() {
            if envelope.max_compression > summary.max_compression {
                summary.max_compression = envelope.max_compression;
                summary.max_compression_member = member;
            }
            if envelope.max_tension > summary.max_tension {
                summary.max_tension = envelope.max_tension;
                summary.max_tension_member = member;
            }
        }

        Some(summary)
    }
}

/// Summary of one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Overall verdict
    pub status: AnalysisStatus,
    /// Number of load cases
    pub n_load_cases: usize,
    /// Number of members
    pub n_members: usize,
    /// Total DOFs (2 per joint)
    pub total_dofs: usize,
    /// Largest joint displacement magnitude over all cases
    pub max_displacement: f64,
    /// Joint with the largest displacement
    pub max_disp_joint: usize,
    /// Largest compressive member force
    pub max_compression: f64,
    /// Member with the largest compressive force
    pub max_compression_member: usize,
    /// Largest tensile member force
    pub max_tension: f64,
    /// Member with the largest tensile force
    pub max_tension_member: usize,
}

impl Default for AnalysisSummary {
    fn default() -> Self {
        Self {
            status: AnalysisStatus::None,
            n_load_cases: 0,
            n_members: 0,
            total_dofs: 0,
            max_displacement: 0.0,
            max_disp_joint: 0,
            max_compression: 0.0,
            max_compression_member: 0,
            max_tension: 0.0,
            max_tension_member: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_envelope() {
        let envelope = MemberEnvelope::invalid();
        assert!(!envelope.is_valid());
        assert!(envelope.compression_ratio().is_nan());
    }

    #[test]
    fn test_ratios() {
        let envelope = MemberEnvelope {
            max_compression: 50.0,
            max_tension: 20.0,
            compressive_strength: 100.0,
            tensile_strength: 200.0,
        };
        assert!(envelope.is_valid());
        assert_eq!(envelope.compression_ratio(), 0.5);
        assert_eq!(envelope.tension_ratio(), 0.1);
    }

    #[test]
    fn test_unstable_result_hides_details() {
        let result = AnalysisResult::unstable(3, 5);
        assert_eq!(result.status(), AnalysisStatus::Unstable);
        assert_eq!(result.n_load_cases(), 3);
        assert!(result.member_force(0, 0).is_none());
        assert!(result.displacement(0).is_none());
        assert!(result.summary().is_none());
    }
}

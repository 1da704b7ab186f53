//! Design conditions - per-bridge site configuration

use serde::{Deserialize, Serialize};

use crate::error::{TrussError, TrussResult};

/// Concrete deck variant, which fixes the per-panel deck dead load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckType {
    MediumStrength,
    LightweightConcrete,
}

impl DeckType {
    /// Unfactored deck dead load per loaded joint in kN (slab plus surfacing)
    pub fn point_dead_load(&self) -> f64 {
        match self {
            DeckType::MediumStrength => 120.265 + 33.097,
            DeckType::LightweightConcrete => 82.608 + 33.097,
        }
    }
}

/// Truck loading variant, which fixes the axle load pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadType {
    StandardTruck,
    HeavyTruck,
}

impl LoadType {
    /// Unfactored (front, rear) axle loads in kN
    pub fn axle_loads(&self) -> (f64, f64) {
        match self {
            LoadType::StandardTruck => (44.0, 181.0),
            LoadType::HeavyTruck => (124.0, 124.0),
        }
    }
}

/// Immutable per-bridge site configuration.
///
/// The first `loaded_joint_count` joints of the model are the deck-level
/// joints where the truck can stop, in left-to-right order. Special joints
/// (pier, arch base, anchorages) are identified by index into the same
/// joint list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignConditions {
    /// Number of deck-level joints carrying the moving load
    pub loaded_joint_count: usize,
    /// Intermediate pier support present
    pub is_pier: bool,
    /// Pier is tall enough that the left abutment slides freely in x
    pub is_hi_pier: bool,
    /// Arch abutments replace the simple span supports
    pub is_arch: bool,
    /// Cable anchorage at the left end
    pub is_left_anchorage: bool,
    /// Cable anchorage at the right end
    pub is_right_anchorage: bool,
    /// Joint index of the pier support
    pub pier_joint: usize,
    /// Joint index of the left arch base; the right base is the next index
    pub arch_joint: usize,
    /// Joint index of the left anchorage
    pub left_anchorage_joint: usize,
    /// Joint index of the right anchorage
    pub right_anchorage_joint: usize,
    /// Deck variant
    pub deck_type: DeckType,
    /// Truck variant
    pub load_type: LoadType,
    /// Allowable length over radius-of-gyration ratio
    pub allowable_slenderness: f64,
}

impl DesignConditions {
    /// Simple span with default deck, standard truck and the usual
    /// slenderness bound
    pub fn simple_span(loaded_joint_count: usize) -> Self {
        Self {
            loaded_joint_count,
            is_pier: false,
            is_hi_pier: false,
            is_arch: false,
            is_left_anchorage: false,
            is_right_anchorage: false,
            pier_joint: 0,
            arch_joint: 0,
            left_anchorage_joint: 0,
            right_anchorage_joint: 0,
            deck_type: DeckType::MediumStrength,
            load_type: LoadType::StandardTruck,
            allowable_slenderness: 300.0,
        }
    }

    /// Add an intermediate pier at the given joint
    pub fn with_pier(mut self, joint: usize) -> Self {
        self.is_pier = true;
        self.pier_joint = joint;
        self
    }

    /// Add a high pier at the given joint (left abutment slides in x)
    pub fn with_hi_pier(mut self, joint: usize) -> Self {
        self.is_pier = true;
        self.is_hi_pier = true;
        self.pier_joint = joint;
        self
    }

    /// Replace the span supports with arch bases at `joint` and `joint + 1`
    pub fn with_arch(mut self, joint: usize) -> Self {
        self.is_arch = true;
        self.arch_joint = joint;
        self
    }

    /// Add a left cable anchorage at the given joint
    pub fn with_left_anchorage(mut self, joint: usize) -> Self {
        self.is_left_anchorage = true;
        self.left_anchorage_joint = joint;
        self
    }

    /// Add a right cable anchorage at the given joint
    pub fn with_right_anchorage(mut self, joint: usize) -> Self {
        self.is_right_anchorage = true;
        self.right_anchorage_joint = joint;
        self
    }

    /// Set the deck variant
    pub fn with_deck_type(mut self, deck_type: DeckType) -> Self {
        self.deck_type = deck_type;
        self
    }

    /// Set the truck variant
    pub fn with_load_type(mut self, load_type: LoadType) -> Self {
        self.load_type = load_type;
        self
    }

    /// Set the allowable slenderness ratio
    pub fn with_allowable_slenderness(mut self, ratio: f64) -> Self {
        self.allowable_slenderness = ratio;
        self
    }

    /// Number of load cases: one truck-off-bridge case plus one case per
    /// adjacent pair of loaded joints
    pub fn load_case_count(&self) -> usize {
        self.loaded_joint_count
    }

    /// Check the configuration against a model with `n_joints` joints
    pub(crate) fn validate(&self, n_joints: usize) -> TrussResult<()> {
        if self.loaded_joint_count < 2 {
            return Err(TrussError::InvalidConditions(
                "at least two loaded joints are required".to_string(),
            ));
        }
        if self.loaded_joint_count > n_joints {
            return Err(TrussError::InvalidConditions(format!(
                "{} loaded joints but the model has {} joints",
                self.loaded_joint_count, n_joints
            )));
        }
        if self.is_pier && self.pier_joint >= n_joints {
            return Err(TrussError::InvalidConditions(format!(
                "pier joint {} out of range",
                self.pier_joint
            )));
        }
        if self.is_arch && self.arch_joint + 1 >= n_joints {
            return Err(TrussError::InvalidConditions(format!(
                "arch joints {} and {} out of range",
                self.arch_joint,
                self.arch_joint + 1
            )));
        }
        if self.is_left_anchorage && self.left_anchorage_joint >= n_joints {
            return Err(TrussError::InvalidConditions(format!(
                "left anchorage joint {} out of range",
                self.left_anchorage_joint
            )));
        }
        if self.is_right_anchorage && self.right_anchorage_joint >= n_joints {
            return Err(TrussError::InvalidConditions(format!(
                "right anchorage joint {} out of range",
                self.right_anchorage_joint
            )));
        }
        Ok(())
    }

    /// Determine which of the `2 * n_joints` DOFs are restrained.
    ///
    /// The rules form an ordered sequence of set/clear operations; later
    /// support topologies override the base simple-span restraints (an arch
    /// releases the abutment restraints the base rules set).
    pub(crate) fn restrained_dofs(&self, n_joints: usize) -> Vec<bool> {
        let mut restrained = vec![false; 2 * n_joints];
        let last_loaded = self.loaded_joint_count - 1;

        restrained[0] = true;
        restrained[1] = true;
        restrained[2 * last_loaded + 1] = true;

        if self.is_pier {
            restrained[2 * self.pier_joint] = true;
            restrained[2 * self.pier_joint + 1] = true;
            if self.is_hi_pier {
                restrained[0] = false;
            }
        }

        if self.is_arch {
            restrained[0] = false;
            restrained[1] = false;
            restrained[2 * self.arch_joint] = true;
            restrained[2 * self.arch_joint + 1] = true;
            restrained[2 * (self.arch_joint + 1)] = true;
            restrained[2 * (self.arch_joint + 1) + 1] = true;
            restrained[2 * last_loaded + 1] = false;
        }

        if self.is_left_anchorage {
            restrained[2 * self.left_anchorage_joint] = true;
            restrained[2 * self.left_anchorage_joint + 1] = true;
        }
        if self.is_right_anchorage {
            restrained[2 * self.right_anchorage_joint] = true;
            restrained[2 * self.right_anchorage_joint + 1] = true;
        }

        restrained
    }
}

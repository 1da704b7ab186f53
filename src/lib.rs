//! Truss Solver - load-test analysis for 2D pin-jointed truss bridges
//!
//! This library implements a direct-stiffness-method solver that decides
//! whether a bridge design survives a moving two-axle truck load:
//! - Dead load (member self-weight plus deck) and per-position live load cases
//! - Support topologies: simple span, pier, high pier, arch, cable anchorages
//! - Dense Gauss-Jordan solution with instability detection
//! - Per-member strength envelopes and a slenderness check
//!
//! ## Example
//! ```rust
//! use truss_solver::prelude::*;
//!
//! let mut model = BridgeModel::new();
//!
//! // Part catalogs
//! let steel = model.add_material(Material::carbon_steel());
//! let tube = model.add_shape(Shape::tube(0.2, 0.012));
//!
//! // A minimal triangular span: two deck joints plus an apex
//! model.add_joint(Joint::fixed(0.0, 0.0));
//! model.add_joint(Joint::fixed(4.0, 0.0));
//! model.add_joint(Joint::new(2.0, 2.0));
//! model.add_member(Member::new(0, 1, steel, tube)).unwrap();
//! model.add_member(Member::new(0, 2, steel, tube)).unwrap();
//! model.add_member(Member::new(1, 2, steel, tube)).unwrap();
//!
//! // Analyze
//! let conditions = DesignConditions::simple_span(2);
//! let result = model.analyze(&conditions, &StockInventory).unwrap();
//!
//! assert_ne!(result.status(), AnalysisStatus::None);
//! if result.status().is_solved() {
//!     let envelope = result.envelope(0).unwrap();
//!     println!("bottom chord ratio: {:.2}", envelope.tension_ratio());
//! }
//! ```

pub mod analysis;
pub mod conditions;
pub mod elements;
pub mod error;
pub mod inventory;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{AnalysisOptions, AnalysisStatus};
    pub use crate::conditions::{DeckType, DesignConditions, LoadType};
    pub use crate::elements::{Joint, Material, Member, Shape, ShapeKind};
    pub use crate::error::{TrussError, TrussResult};
    pub use crate::inventory::{Inventory, StockInventory};
    pub use crate::model::BridgeModel;
    pub use crate::results::{AnalysisResult, AnalysisSummary, MemberEnvelope};
}

//! Structural elements of the truss model

pub mod joint;
pub mod material;
pub mod member;
pub mod shape;

pub use joint::Joint;
pub use material::Material;
pub use member::Member;
pub use shape::{Shape, ShapeKind};

//! Error types for the truss solver

use thiserror::Error;

/// Main error type for solver operations
#[derive(Error, Debug)]
pub enum TrussError {
    #[error("Joint {0} not found in model")]
    JointNotFound(usize),

    #[error("Material {0} not found in model")]
    MaterialNotFound(usize),

    #[error("Shape {0} not found in model")]
    ShapeNotFound(usize),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Model has no joints or no members")]
    EmptyModel,

    #[error("Invalid design conditions: {0}")]
    InvalidConditions(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for solver operations
pub type TrussResult<T> = Result<T, TrussError>;

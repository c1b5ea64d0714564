use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    #[error("physics world has not been started")]
    NotStarted,
    #[error("shape needs at least {needed} vertices, got {got}")]
    TooFewVertices { needed: usize, got: usize },
}

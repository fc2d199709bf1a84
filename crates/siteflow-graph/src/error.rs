//! Resource graph error types

use thiserror::Error;

use crate::desc::ResourceId;

/// Resource graph errors
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Resource already declared: {0}")]
    DuplicateResource(ResourceId),

    #[error("Resource {resource} depends on undeclared resource: {dependency}")]
    MissingDependency {
        resource: ResourceId,
        dependency: ResourceId,
    },

    #[error("Payload serialization error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Provisioning engine error: {0}")]
    Engine(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

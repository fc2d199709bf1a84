//! Provisioning engine seam

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::desc::ResourceId;
use crate::error::Result;
use crate::graph::ResourceGraph;

/// Provisioning engine abstraction
///
/// Siteflow builds a [`ResourceGraph`] and hands it over in a single
/// call; apply ordering and the actual cloud API traffic belong to the
/// engine. Implementations live outside this workspace.
#[async_trait]
pub trait Provisioner: Send + Sync {
    /// Returns the engine name (e.g., "aws", "dry-run")
    fn name(&self) -> &str;

    /// Apply every description in the graph
    async fn apply(&self, graph: &ResourceGraph) -> Result<ApplyReport>;
}

/// Result of applying a resource graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyReport {
    /// Successfully applied resources
    pub succeeded: Vec<ResourceOutcome>,

    /// Failed resources
    pub failed: Vec<ResourceOutcome>,

    /// Total execution time in milliseconds
    pub duration_ms: u64,
}

impl ApplyReport {
    pub fn new() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn add_success(&mut self, resource: ResourceId, message: impl Into<String>) {
        self.succeeded.push(ResourceOutcome {
            resource,
            message: message.into(),
            error: None,
        });
    }

    pub fn add_failure(&mut self, resource: ResourceId, error: impl Into<String>) {
        self.failed.push(ResourceOutcome {
            resource,
            message: String::new(),
            error: Some(error.into()),
        });
    }
}

impl Default for ApplyReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome for a single resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceOutcome {
    /// The resource this outcome belongs to
    pub resource: ResourceId,

    /// Success message
    pub message: String,

    /// Error message if failed
    pub error: Option<String>,
}

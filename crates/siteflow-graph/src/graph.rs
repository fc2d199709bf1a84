//! Append-only resource graph

use std::collections::HashMap;

use tracing::debug;

use crate::desc::{ResourceDesc, ResourceId};
use crate::error::{GraphError, Result};

/// Collection of resource descriptions handed to the engine in one batch
///
/// The graph is append-only: descriptions are added as builders produce
/// them and never mutated or removed. Iteration preserves insertion
/// order, and every `depends_on` edge must point at a resource already
/// present, so dependencies always precede their dependents.
#[derive(Debug, Clone, Default)]
pub struct ResourceGraph {
    nodes: Vec<ResourceDesc>,
    index: HashMap<String, usize>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a description to the graph
    ///
    /// Rejects a second declaration of the same identity and any
    /// dependency or parent edge naming a resource not yet declared.
    pub fn add(&mut self, desc: ResourceDesc) -> Result<()> {
        if self.index.contains_key(&desc.id.key()) {
            return Err(GraphError::DuplicateResource(desc.id));
        }
        if let Some(parent) = &desc.parent {
            if !self.contains(parent) {
                return Err(GraphError::MissingDependency {
                    resource: desc.id.clone(),
                    dependency: parent.clone(),
                });
            }
        }
        for dependency in &desc.depends_on {
            if !self.contains(dependency) {
                return Err(GraphError::MissingDependency {
                    resource: desc.id.clone(),
                    dependency: dependency.clone(),
                });
            }
        }

        debug!("Declared resource: {}", desc.id);
        self.index.insert(desc.id.key(), self.nodes.len());
        self.nodes.push(desc);
        Ok(())
    }

    pub fn contains(&self, id: &ResourceId) -> bool {
        self.index.contains_key(&id.key())
    }

    pub fn get(&self, id: &ResourceId) -> Option<&ResourceDesc> {
        self.index.get(&id.key()).map(|&i| &self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate descriptions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ResourceDesc> {
        self.nodes.iter()
    }

    /// All descriptions, in declaration order
    pub fn descriptions(&self) -> &[ResourceDesc] {
        &self.nodes
    }

    /// Descriptions declared with the given parent
    pub fn children_of(&self, parent: &ResourceId) -> Vec<&ResourceDesc> {
        self.nodes
            .iter()
            .filter(|d| d.parent.as_ref() == Some(parent))
            .collect()
    }

    /// Descriptions of the given kind, in declaration order
    pub fn by_kind(&self, kind: &str) -> Vec<&ResourceDesc> {
        self.nodes.iter().filter(|d| d.id.kind == kind).collect()
    }
}

//! Siteflow Resource Graph
//!
//! This crate provides the declarative core of Siteflow: resource
//! descriptions, the append-only graph that collects them, and the
//! seam to the provisioning engine that realizes the graph.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 siteflow (builders)              │
//! │     content sync, distribution, DNS records      │
//! └─────────────────┬───────────────────────────────┘
//!                   │ ResourceDesc
//! ┌─────────────────▼───────────────────────────────┐
//! │               siteflow-graph                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │  ResourceGraph (append-only, ordered)     │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │  trait Provisioner { apply(graph) }       │   │
//! │  └──────────────────────────────────────────┘   │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//!           ┌───────▼───────┐
//!           │ provisioning  │
//!           │    engine     │
//!           └───────────────┘
//! ```

pub mod desc;
pub mod engine;
pub mod error;
pub mod graph;

// Re-exports
pub use desc::{AttrValue, ResourceDesc, ResourceId};
pub use engine::{ApplyReport, Provisioner, ResourceOutcome};
pub use error::{GraphError, Result};
pub use graph::ResourceGraph;

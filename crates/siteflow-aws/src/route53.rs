//! Route 53 record payloads

use serde::{Deserialize, Serialize};
use siteflow_graph::AttrValue;

/// Resource kind for Route 53 records
pub const RECORD_KIND: &str = "route53-record";

/// Payload for a Route 53 record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Hosted zone the record is created in
    pub zone_id: String,

    /// Record name relative to the zone; empty for the zone apex
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub alias: AliasTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    A,
    #[serde(rename = "AAAA")]
    Aaaa,
    #[serde(rename = "CNAME")]
    Cname,
}

/// Alias target pointing the record at another AWS resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasTarget {
    /// Target hostname, an engine output for distributions
    pub name: AttrValue,

    /// The target's own hosted zone, also an engine output
    pub zone_id: AttrValue,

    pub evaluate_target_health: bool,
}

//! DNS alias record construction

use siteflow_aws::route53::{AliasTarget, RecordConfig, RecordType};
use siteflow_graph::{AttrValue, ResourceId};
use tracing::debug;

use crate::domain::split_domain;
use crate::error::{Result, SiteError};
use crate::zone::ZoneDirectory;

/// Build the A record aliasing a target domain to a distribution
///
/// The record lands in the hosted zone of the target's parent domain;
/// the zone must already exist in the directory. The alias target's
/// hostname and hosted zone are engine outputs of the distribution.
pub fn build_alias_record(
    target_domain: &str,
    distribution: &ResourceId,
    zones: &dyn ZoneDirectory,
) -> Result<RecordConfig> {
    let parts = split_domain(target_domain)?;

    let zone_id = zones
        .zone_id(&parts.parent_domain)?
        .ok_or_else(|| SiteError::ZoneNotFound(parts.parent_domain.clone()))?;
    debug!(
        zone = %parts.parent_domain,
        zone_id = %zone_id,
        "Resolved hosted zone for alias record"
    );

    Ok(RecordConfig {
        zone_id,
        name: parts.subdomain,
        record_type: RecordType::A,
        alias: AliasTarget {
            name: AttrValue::output_of(distribution, "domain_name"),
            zone_id: AttrValue::output_of(distribution, "hosted_zone_id"),
            evaluate_target_health: true,
        },
    })
}

//! Domain name splitting

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// A target domain split into the record name and the zone it lives in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParts {
    /// Leading label, empty when the target is a zone apex
    pub subdomain: String,

    /// Domain of the hosted zone; canonicalized with a trailing dot
    /// when a subdomain was split off
    pub parent_domain: String,
}

impl DomainParts {
    /// The original fully qualified domain, without trailing dot
    pub fn fqdn(&self) -> String {
        let parent = self.parent_domain.trim_end_matches('.');
        if self.subdomain.is_empty() {
            parent.to_string()
        } else {
            format!("{}.{}", self.subdomain, parent)
        }
    }
}

/// Split a target domain into subdomain and parent zone domain
///
/// `"www.example.com"` becomes subdomain `"www"` in zone
/// `"example.com."`; a bare `"example.com"` is an apex record (empty
/// subdomain) in its own zone. Fewer than two labels, or any empty
/// label, is rejected.
pub fn split_domain(domain: &str) -> Result<DomainParts> {
    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() < 2 {
        return Err(SiteError::InvalidDomain(format!(
            "{domain} has no top-level domain"
        )));
    }
    if labels.iter().any(|label| label.is_empty()) {
        return Err(SiteError::InvalidDomain(format!(
            "{domain} contains an empty label"
        )));
    }

    if labels.len() == 2 {
        return Ok(DomainParts {
            subdomain: String::new(),
            parent_domain: domain.to_string(),
        });
    }

    Ok(DomainParts {
        subdomain: labels[0].to_string(),
        parent_domain: format!("{}.", labels[1..].join(".")),
    })
}

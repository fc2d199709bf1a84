//! Hosted zone lookup

use std::collections::HashMap;

use crate::error::Result;

/// Source of hosted zone identifiers
///
/// Alias records are created in an existing zone; the directory maps a
/// zone's domain name to its identifier. Lookups are by exact domain,
/// ignoring the trailing dot of a canonicalized name. A miss is
/// `Ok(None)`; `Err` is reserved for directories that fail to answer
/// (e.g., a backing API call).
pub trait ZoneDirectory: Send + Sync {
    fn zone_id(&self, name: &str) -> Result<Option<String>>;
}

/// In-memory zone directory
#[derive(Debug, Clone, Default)]
pub struct StaticZoneDirectory {
    zones: HashMap<String, String>,
}

impl StaticZoneDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, zone_id: impl Into<String>) {
        let name = name.into();
        self.zones
            .insert(name.trim_end_matches('.').to_string(), zone_id.into());
    }

    pub fn with_zone(mut self, name: impl Into<String>, zone_id: impl Into<String>) -> Self {
        self.insert(name, zone_id);
        self
    }
}

impl ZoneDirectory for StaticZoneDirectory {
    fn zone_id(&self, name: &str) -> Result<Option<String>> {
        Ok(self.zones.get(name.trim_end_matches('.')).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_trailing_dot() {
        let zones = StaticZoneDirectory::new().with_zone("example.com", "Z123456");

        assert_eq!(
            zones.zone_id("example.com.").unwrap().as_deref(),
            Some("Z123456")
        );
        assert_eq!(
            zones.zone_id("example.com").unwrap().as_deref(),
            Some("Z123456")
        );
    }

    #[test]
    fn test_registration_with_trailing_dot() {
        let zones = StaticZoneDirectory::new().with_zone("example.com.", "Z123456");
        assert_eq!(
            zones.zone_id("example.com").unwrap().as_deref(),
            Some("Z123456")
        );
    }

    #[test]
    fn test_unknown_zone_is_none() {
        let zones = StaticZoneDirectory::new().with_zone("example.com", "Z123456");
        assert_eq!(zones.zone_id("example.org").unwrap(), None);
    }
}

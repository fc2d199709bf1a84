//! Site manifest
//!
//! A `site.kdl` file declares the same surface as the builder
//! arguments, so a site can live next to its content:
//!
//! ```kdl
//! site "docs" {
//!     content {
//!         path "./www"
//!         not-found-page "/404.html"
//!     }
//!     domain {
//!         name "docs.example.com"
//!         certificate-arn "arn:aws:acm:us-east-1:123456789012:certificate/abc"
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use kdl::{KdlDocument, KdlNode};
use tracing::{debug, warn};

use crate::args::{ContentArgs, DomainArgs};
use crate::error::{Result, SiteError};

/// Manifest file name
pub const MANIFEST_FILE: &str = "site.kdl";

/// Directory checked when the manifest is not at the base itself
pub const MANIFEST_DIR: &str = ".siteflow";

/// Parsed site manifest
#[derive(Debug, Clone, PartialEq)]
pub struct SiteManifest {
    pub name: String,
    pub content: ContentArgs,
    pub domain: Option<DomainArgs>,
}

/// Locate the manifest under an explicit base directory
///
/// Checks `site.kdl` first, then `.siteflow/site.kdl`. Nothing outside
/// the base directory is consulted.
pub fn find_site_manifest(base_dir: &Path) -> Result<PathBuf> {
    let direct = base_dir.join(MANIFEST_FILE);
    if direct.is_file() {
        debug!(manifest = %direct.display(), "Found site manifest");
        return Ok(direct);
    }

    let nested = base_dir.join(MANIFEST_DIR).join(MANIFEST_FILE);
    if nested.is_file() {
        debug!(manifest = %nested.display(), "Found site manifest in .siteflow/");
        return Ok(nested);
    }

    Err(SiteError::ManifestNotFound(base_dir.to_path_buf()))
}

/// Read and parse a manifest file
pub fn load_site_manifest(path: &Path) -> Result<SiteManifest> {
    let text = std::fs::read_to_string(path)?;
    parse_site_manifest(&text)
}

/// Parse manifest text
pub fn parse_site_manifest(text: &str) -> Result<SiteManifest> {
    let doc: KdlDocument = text.parse()?;

    let site = doc
        .nodes()
        .iter()
        .find(|node| node.name().value() == "site")
        .ok_or_else(|| SiteError::InvalidManifest("Missing site node".to_string()))?;

    let name = string_arg(site)
        .ok_or_else(|| SiteError::InvalidManifest("site requires a name".to_string()))?;

    let mut content: Option<ContentArgs> = None;
    let mut domain: Option<DomainArgs> = None;

    if let Some(children) = site.children() {
        for child in children.nodes() {
            match child.name().value() {
                "content" => {
                    content = Some(parse_content(child)?);
                }
                "domain" => {
                    domain = Some(parse_domain(child)?);
                }
                other => {
                    warn!(node = %other, "Ignoring unknown manifest node");
                }
            }
        }
    }

    let content = content
        .ok_or_else(|| SiteError::InvalidManifest("site requires a content block".to_string()))?;

    Ok(SiteManifest {
        name,
        content,
        domain,
    })
}

/// Parse a content block
fn parse_content(node: &KdlNode) -> Result<ContentArgs> {
    let mut path: Option<String> = None;
    let mut not_found_page: Option<String> = None;

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "path" => {
                    path = string_arg(child);
                }
                "not-found-page" | "not_found_page" => {
                    not_found_page = string_arg(child);
                }
                other => {
                    warn!(node = %other, "Ignoring unknown content node");
                }
            }
        }
    }

    let path = path
        .ok_or_else(|| SiteError::InvalidManifest("content requires a path".to_string()))?;

    let mut content = ContentArgs::new(path);
    if let Some(page) = not_found_page {
        content = content.with_custom_404(page);
    }
    Ok(content)
}

/// Parse a domain block
fn parse_domain(node: &KdlNode) -> Result<DomainArgs> {
    let mut name: Option<String> = None;
    let mut certificate_arn: Option<String> = None;

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "name" => {
                    name = string_arg(child);
                }
                "certificate-arn" | "certificate_arn" => {
                    certificate_arn = string_arg(child);
                }
                other => {
                    warn!(node = %other, "Ignoring unknown domain node");
                }
            }
        }
    }

    let name =
        name.ok_or_else(|| SiteError::InvalidManifest("domain requires a name".to_string()))?;
    let certificate_arn = certificate_arn.ok_or_else(|| {
        SiteError::InvalidManifest("domain requires a certificate-arn".to_string())
    })?;

    Ok(DomainArgs::new(name, certificate_arn))
}

/// First string argument of a node
fn string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .first()
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = parse_site_manifest(
            r#"
site "docs" {
    content {
        path "./www"
        not-found-page "/404.html"
    }
    domain {
        name "docs.example.com"
        certificate-arn "arn:aws:acm:us-east-1:123456789012:certificate/abc"
    }
}
"#,
        )
        .unwrap();

        assert_eq!(manifest.name, "docs");
        assert_eq!(manifest.content.path_to_content, PathBuf::from("./www"));
        assert_eq!(manifest.content.custom_404_path.as_deref(), Some("/404.html"));

        let domain = manifest.domain.unwrap();
        assert_eq!(domain.target_domain, "docs.example.com");
        assert_eq!(
            domain.acm_certificate_arn,
            "arn:aws:acm:us-east-1:123456789012:certificate/abc"
        );
    }

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = parse_site_manifest(
            r#"
site "landing" {
    content {
        path "./public"
    }
}
"#,
        )
        .unwrap();

        assert_eq!(manifest.name, "landing");
        assert_eq!(manifest.content.custom_404_path, None);
        assert!(manifest.domain.is_none());
    }

    #[test]
    fn test_snake_case_node_names_are_accepted() {
        let manifest = parse_site_manifest(
            r#"
site "docs" {
    content {
        path "./www"
        not_found_page "/404.html"
    }
    domain {
        name "docs.example.com"
        certificate_arn "arn:aws:acm:us-east-1:123456789012:certificate/abc"
    }
}
"#,
        )
        .unwrap();

        assert_eq!(manifest.content.custom_404_path.as_deref(), Some("/404.html"));
        assert!(manifest.domain.is_some());
    }

    #[test]
    fn test_unknown_nodes_are_ignored() {
        let manifest = parse_site_manifest(
            r#"
site "docs" {
    content {
        path "./www"
        compression "gzip"
    }
    analytics {
        provider "none"
    }
}
"#,
        )
        .unwrap();

        assert_eq!(manifest.name, "docs");
        assert_eq!(manifest.content.path_to_content, PathBuf::from("./www"));
    }

    #[test]
    fn test_missing_site_node_is_invalid() {
        let err = parse_site_manifest(r#"project "docs""#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidManifest(_)));
    }

    #[test]
    fn test_missing_content_path_is_invalid() {
        let err = parse_site_manifest(
            r#"
site "docs" {
    content {
        not-found-page "/404.html"
    }
}
"#,
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::InvalidManifest(_)));
    }

    #[test]
    fn test_domain_without_certificate_is_invalid() {
        let err = parse_site_manifest(
            r#"
site "docs" {
    content {
        path "./www"
    }
    domain {
        name "docs.example.com"
    }
}
"#,
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::InvalidManifest(_)));
    }

    #[test]
    fn test_kdl_syntax_errors_propagate() {
        let err = parse_site_manifest("site \"docs\" {").unwrap_err();
        assert!(matches!(err, SiteError::Kdl(_)));
    }

    #[test]
    fn test_find_prefers_direct_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join(MANIFEST_DIR)).unwrap();
        fs::write(base.join(MANIFEST_FILE), "site \"a\"").unwrap();
        fs::write(base.join(MANIFEST_DIR).join(MANIFEST_FILE), "site \"b\"").unwrap();

        let found = find_site_manifest(base).unwrap();
        assert_eq!(found, base.join(MANIFEST_FILE));
    }

    #[test]
    fn test_find_falls_back_to_siteflow_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join(MANIFEST_DIR)).unwrap();
        fs::write(base.join(MANIFEST_DIR).join(MANIFEST_FILE), "site \"b\"").unwrap();

        let found = find_site_manifest(base).unwrap();
        assert_eq!(found, base.join(MANIFEST_DIR).join(MANIFEST_FILE));
    }

    #[test]
    fn test_find_without_manifest_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = find_site_manifest(temp_dir.path()).unwrap_err();
        assert!(matches!(err, SiteError::ManifestNotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(MANIFEST_FILE);
        fs::write(
            &path,
            r#"
site "docs" {
    content {
        path "./www"
    }
}
"#,
        )
        .unwrap();

        let manifest = load_site_manifest(&path).unwrap();
        assert_eq!(manifest.name, "docs");
    }
}

//! Siteflow
//!
//! Siteflow turns a directory of static files into the resource graph
//! of a hosted website: an S3 bucket in website mode with one object
//! per file, a private log bucket, a CloudFront distribution fronting
//! the bucket's website endpoint, and, given a custom domain, a
//! Route 53 alias record in the domain's parent zone.
//!
//! Construction is synchronous and touches nothing but the content
//! directory; the finished [`ResourceGraph`](siteflow_graph::ResourceGraph)
//! is handed to a [`Provisioner`](siteflow_graph::Provisioner) in a
//! single call.
//!
//! # Example
//!
//! ```no_run
//! use siteflow::{ContentArgs, DomainArgs, SiteBuilder, StaticZoneDirectory};
//! use std::path::Path;
//!
//! # fn main() -> siteflow::Result<()> {
//! let zones = StaticZoneDirectory::new().with_zone("example.com", "Z123456");
//! let builder = SiteBuilder::new(zones);
//!
//! let content = ContentArgs::new("./www").with_custom_404("/404.html");
//! let domain = DomainArgs::new(
//!     "www.example.com",
//!     "arn:aws:acm:us-east-1:123456789012:certificate/abc",
//! );
//!
//! let site = builder.build("docs", Path::new("."), &content, Some(&domain))?;
//! assert!(site.alias_record.is_some());
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod content;
pub mod crawl;
pub mod distribution;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod record;
pub mod website;
pub mod zone;

// Re-exports
pub use args::{ContentArgs, DomainArgs};
pub use content::{plan_content_sync, ContentTypeMap};
pub use crawl::crawl_directory;
pub use distribution::{build_distribution, CacheTtl};
pub use domain::{split_domain, DomainParts};
pub use error::{Result, SiteError};
pub use manifest::{
    find_site_manifest, load_site_manifest, parse_site_manifest, SiteManifest, MANIFEST_DIR,
    MANIFEST_FILE,
};
pub use record::build_alias_record;
pub use website::{SiteBuilder, StaticWebsite};
pub use zone::{StaticZoneDirectory, ZoneDirectory};

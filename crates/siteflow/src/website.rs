//! Website orchestration
//!
//! Expands a content directory and optional domain into the full set of
//! resource descriptions a static website needs: the content bucket and
//! its objects, a log bucket, the CDN distribution, and the DNS alias.

use std::path::Path;

use siteflow_aws::cloudfront::DISTRIBUTION_KIND;
use siteflow_aws::route53::RECORD_KIND;
use siteflow_aws::s3::{BucketConfig, BUCKET_KIND};
use siteflow_graph::{ResourceDesc, ResourceGraph, ResourceId};
use tracing::info;

use crate::args::{validate_custom_404, ContentArgs, DomainArgs};
use crate::content::{plan_content_sync, ContentTypeMap};
use crate::distribution::{build_distribution, CacheTtl};
use crate::domain::split_domain;
use crate::error::{Result, SiteError};
use crate::record::build_alias_record;
use crate::zone::ZoneDirectory;

/// A fully described website, ready to hand to the engine
#[derive(Debug)]
pub struct StaticWebsite {
    pub name: String,

    pub content_bucket: ResourceId,

    /// One identity per synced file, in crawl order
    pub objects: Vec<ResourceId>,

    pub logs_bucket: ResourceId,

    pub distribution: ResourceId,

    /// Present only when domain args were given
    pub alias_record: Option<ResourceId>,

    /// Every description above, dependencies before dependents
    pub graph: ResourceGraph,
}

/// Builds [`StaticWebsite`] graphs from website arguments
///
/// The builder owns the collaborators that outlive a single website:
/// the zone directory, the MIME table, and the cache policy.
pub struct SiteBuilder {
    zones: Box<dyn ZoneDirectory>,
    content_types: ContentTypeMap,
    cache_ttl: CacheTtl,
}

impl SiteBuilder {
    pub fn new(zones: impl ZoneDirectory + 'static) -> Self {
        Self {
            zones: Box::new(zones),
            content_types: ContentTypeMap::default(),
            cache_ttl: CacheTtl::default(),
        }
    }

    pub fn with_content_types(mut self, content_types: ContentTypeMap) -> Self {
        self.content_types = content_types;
        self
    }

    pub fn with_cache_ttl(mut self, cache_ttl: CacheTtl) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Describe a website named `name` serving `content`
    ///
    /// The content path is resolved against `base_dir`; nothing is read
    /// from the process environment. All arguments are validated before
    /// the first description is built, so an error never leaves a
    /// partially declared site behind.
    #[tracing::instrument(
        skip(self, base_dir, content, domain),
        fields(base_dir = %base_dir.display())
    )]
    pub fn build(
        &self,
        name: &str,
        base_dir: &Path,
        content: &ContentArgs,
        domain: Option<&DomainArgs>,
    ) -> Result<StaticWebsite> {
        let content_root = base_dir.join(&content.path_to_content);
        if !content_root.is_dir() {
            return Err(SiteError::InvalidContentPath(content_root));
        }
        if let Some(path) = &content.custom_404_path {
            validate_custom_404(path)?;
        }
        if let Some(domain) = domain {
            split_domain(&domain.target_domain)?;
        }

        let mut graph = ResourceGraph::new();

        // Content bucket and its objects
        let content_bucket = ResourceId::new(BUCKET_KIND, name);
        graph.add(
            ResourceDesc::new(
                content_bucket.clone(),
                &BucketConfig::website("index.html", "404.html"),
            )?
            .with_owner(name),
        )?;
        let objects = plan_content_sync(
            &content_root,
            &content_bucket,
            &self.content_types,
            name,
            &mut graph,
        )?;

        // Log bucket, kept out of the website path
        let logs_bucket = ResourceId::new(BUCKET_KIND, format!("{name}-logs"));
        graph.add(
            ResourceDesc::new(logs_bucket.clone(), &BucketConfig::private())?.with_owner(name),
        )?;

        // Distribution fronting the content bucket
        let distribution = ResourceId::new(DISTRIBUTION_KIND, name);
        let distribution_config = build_distribution(
            name,
            &content_bucket,
            &logs_bucket,
            content,
            domain,
            self.cache_ttl,
        )?;
        graph.add(
            ResourceDesc::new(distribution.clone(), &distribution_config)?
                .with_owner(name)
                .with_dependency(content_bucket.clone())
                .with_dependency(logs_bucket.clone()),
        )?;

        // Alias record, only for a custom domain
        let alias_record = match domain {
            Some(domain) => {
                let record_config =
                    build_alias_record(&domain.target_domain, &distribution, self.zones.as_ref())?;
                let record = ResourceId::new(RECORD_KIND, &domain.target_domain);
                graph.add(
                    ResourceDesc::new(record.clone(), &record_config)?
                        .with_owner(name)
                        .with_dependency(distribution.clone()),
                )?;
                Some(record)
            }
            None => None,
        };

        info!(
            site = %name,
            resource_count = graph.len(),
            aliased = alias_record.is_some(),
            "Described static website"
        );
        Ok(StaticWebsite {
            name: name.to_string(),
            content_bucket,
            objects,
            logs_bucket,
            distribution,
            alias_record,
            graph,
        })
    }
}

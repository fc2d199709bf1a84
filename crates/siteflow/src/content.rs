//! Content sync planning
//!
//! Turns a crawled content directory into one `s3-object` description
//! per file, keyed by the file's path relative to the content root.

use std::collections::HashMap;
use std::path::{Component, Path};

use siteflow_aws::s3::{Acl, BucketObjectConfig, OBJECT_KIND};
use siteflow_graph::{ResourceDesc, ResourceGraph, ResourceId};
use tracing::{debug, info};

use crate::crawl::crawl_directory;
use crate::error::{Result, SiteError};

/// Extension to MIME type table
///
/// Lookup is by lowercased file extension. The default table covers the
/// types a static website serves; callers with exotic content register
/// additional types instead of patching the table.
#[derive(Debug, Clone)]
pub struct ContentTypeMap {
    types: HashMap<String, String>,
}

impl ContentTypeMap {
    /// A table with no entries; every lookup misses
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    pub fn insert(&mut self, extension: impl Into<String>, mime: impl Into<String>) {
        self.types.insert(extension.into().to_lowercase(), mime.into());
    }

    pub fn with_type(mut self, extension: impl Into<String>, mime: impl Into<String>) -> Self {
        self.insert(extension, mime);
        self
    }

    /// MIME type for a file, by its extension
    pub fn lookup(&self, path: &Path) -> Option<&str> {
        let extension = path.extension().and_then(|e| e.to_str())?.to_lowercase();
        self.types.get(&extension).map(String::as_str)
    }
}

impl Default for ContentTypeMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for (extension, mime) in [
            ("html", "text/html"),
            ("htm", "text/html"),
            ("css", "text/css"),
            ("js", "text/javascript"),
            ("mjs", "text/javascript"),
            ("json", "application/json"),
            ("map", "application/json"),
            ("webmanifest", "application/manifest+json"),
            ("xml", "application/xml"),
            ("txt", "text/plain"),
            ("md", "text/markdown"),
            ("svg", "image/svg+xml"),
            ("png", "image/png"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("gif", "image/gif"),
            ("webp", "image/webp"),
            ("avif", "image/avif"),
            ("ico", "image/vnd.microsoft.icon"),
            ("pdf", "application/pdf"),
            ("woff", "font/woff"),
            ("woff2", "font/woff2"),
            ("ttf", "font/ttf"),
            ("otf", "font/otf"),
            ("wasm", "application/wasm"),
            ("mp4", "video/mp4"),
            ("webm", "video/webm"),
        ] {
            map.insert(extension, mime);
        }
        map
    }
}

/// Declare one object per file under `root` into `graph`
///
/// Object keys are relative to `root` with forward slashes on every
/// platform. Returns the declared object identities in crawl order.
pub fn plan_content_sync(
    root: &Path,
    bucket: &ResourceId,
    types: &ContentTypeMap,
    owner: &str,
    graph: &mut ResourceGraph,
) -> Result<Vec<ResourceId>> {
    let mut objects = Vec::new();

    crawl_directory(root, |path| {
        let key = object_key(root, path)?;
        let config = BucketObjectConfig {
            key: key.clone(),
            source: path.to_path_buf(),
            content_type: types.lookup(path).map(String::from),
            acl: Acl::PublicRead,
        };

        let id = ResourceId::new(OBJECT_KIND, format!("{}/{}", bucket.name, key));
        debug!(key = %key, source = %path.display(), "Declaring content object");
        graph.add(
            ResourceDesc::new(id.clone(), &config)?
                .with_owner(owner)
                .with_parent(bucket.clone()),
        )?;
        objects.push(id);
        Ok(())
    })?;

    info!(
        object_count = objects.len(),
        bucket = %bucket.name,
        "Planned content sync"
    );
    Ok(objects)
}

/// Bucket key for a file: its path relative to the content root,
/// joined with forward slashes
fn object_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| SiteError::Crawl {
            path: path.to_path_buf(),
            message: format!("File escapes content root {}", root.display()),
        })?;

    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    Ok(segments.join("/"))
}

//! S3 bucket and object payloads

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resource kind for S3 buckets
pub const BUCKET_KIND: &str = "s3-bucket";

/// Resource kind for S3 objects
pub const OBJECT_KIND: &str = "s3-object";

/// Canned access control list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Acl {
    PublicRead,
    Private,
}

/// Payload for an S3 bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketConfig {
    pub acl: Acl,

    /// Static website hosting settings, absent for plain storage buckets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<BucketWebsite>,
}

impl BucketConfig {
    /// A private bucket with no website endpoint (e.g., for access logs)
    pub fn private() -> Self {
        Self {
            acl: Acl::Private,
            website: None,
        }
    }

    /// A public bucket serving a website
    pub fn website(index_document: impl Into<String>, error_document: impl Into<String>) -> Self {
        Self {
            acl: Acl::PublicRead,
            website: Some(BucketWebsite {
                index_document: index_document.into(),
                error_document: error_document.into(),
            }),
        }
    }
}

/// Website hosting settings on a bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketWebsite {
    /// Object served for directory requests
    pub index_document: String,

    /// Object served when the requested key does not exist
    pub error_document: String,
}

/// Payload for a single S3 object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketObjectConfig {
    /// Object key, relative to the bucket root with forward slashes
    pub key: String,

    /// Local file the engine uploads
    pub source: PathBuf,

    /// MIME type, omitted when the extension is not recognized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    pub acl: Acl,
}

//! Website arguments

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// What content the website serves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentArgs {
    /// Directory holding the site files, resolved against the base
    /// directory passed to the builder
    pub path_to_content: PathBuf,

    /// Bucket-absolute path of the page served for missing objects
    /// (e.g., "/404.html")
    #[serde(default)]
    pub custom_404_path: Option<String>,
}

impl ContentArgs {
    pub fn new(path_to_content: impl Into<PathBuf>) -> Self {
        Self {
            path_to_content: path_to_content.into(),
            custom_404_path: None,
        }
    }

    pub fn with_custom_404(mut self, path: impl Into<String>) -> Self {
        self.custom_404_path = Some(path.into());
        self
    }
}

/// Custom domain the website answers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainArgs {
    /// Fully qualified domain name (e.g., "www.example.com")
    pub target_domain: String,

    /// ARN of an ACM certificate covering the target domain
    pub acm_certificate_arn: String,
}

impl DomainArgs {
    pub fn new(target_domain: impl Into<String>, acm_certificate_arn: impl Into<String>) -> Self {
        Self {
            target_domain: target_domain.into(),
            acm_certificate_arn: acm_certificate_arn.into(),
        }
    }
}

/// Check that a custom 404 path is bucket-absolute
pub(crate) fn validate_custom_404(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(SiteError::InvalidArgument(format!(
            "custom 404 path must start with '/': {path}"
        )));
    }
    Ok(())
}

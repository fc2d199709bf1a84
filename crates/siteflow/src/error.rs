//! Siteflow error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Content path is not a directory: {0}")]
    InvalidContentPath(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("No hosted zone found for domain: {0}")]
    ZoneNotFound(String),

    #[error("Content crawl failed at {path}: {message}")]
    Crawl { path: PathBuf, message: String },

    #[error("Invalid site manifest: {0}")]
    InvalidManifest(String),

    #[error("Site manifest not found under: {0}")]
    ManifestNotFound(PathBuf),

    #[error("KDL parse error: {0}")]
    Kdl(#[from] kdl::KdlError),

    #[error("Resource graph error: {0}")]
    Graph(#[from] siteflow_graph::GraphError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;

//! Siteflow AWS Vocabulary
//!
//! Typed payloads for the AWS resources Siteflow declares: S3 buckets
//! and objects, CloudFront distributions, and Route 53 records. Each
//! module pairs a kind constant with the serde structs whose JSON form
//! the provisioning engine consumes.

pub mod cloudfront;
pub mod route53;
pub mod s3;

// Re-exports
pub use cloudfront::{
    CacheBehavior, CookieForwarding, CustomErrorResponse, CustomOriginConfig, DistributionConfig,
    ForwardedValues, GeoRestriction, GeoRestrictionType, HttpMethod, LoggingConfig, Origin,
    OriginProtocolPolicy, PriceClass, Restrictions, SslProtocol, SslSupportMethod,
    ViewerCertificate, ViewerProtocolPolicy, DISTRIBUTION_KIND,
};
pub use route53::{AliasTarget, RecordConfig, RecordType, RECORD_KIND};
pub use s3::{Acl, BucketConfig, BucketObjectConfig, BucketWebsite, BUCKET_KIND, OBJECT_KIND};

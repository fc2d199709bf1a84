//! CloudFront distribution payloads
//!
//! Field names and enum values follow the CloudFront API vocabulary so
//! the engine can pass payloads through without renaming.

use serde::{Deserialize, Serialize};
use siteflow_graph::AttrValue;

/// Resource kind for CloudFront distributions
pub const DISTRIBUTION_KIND: &str = "cloudfront-distribution";

/// Payload for a CloudFront distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionConfig {
    pub enabled: bool,

    /// CNAMEs the distribution answers to, empty without a custom domain
    pub aliases: Vec<String>,

    pub origins: Vec<Origin>,

    pub default_cache_behavior: CacheBehavior,

    pub custom_error_responses: Vec<CustomErrorResponse>,

    pub viewer_certificate: ViewerCertificate,

    pub logging: LoggingConfig,

    pub price_class: PriceClass,

    pub restrictions: Restrictions,
}

/// A content origin behind the distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub origin_id: String,

    /// Origin hostname; for bucket websites this is an engine output
    pub domain_name: AttrValue,

    pub custom_origin: CustomOriginConfig,
}

/// Connection settings for a custom (non-S3-API) origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomOriginConfig {
    pub origin_protocol_policy: OriginProtocolPolicy,

    pub http_port: u16,

    pub https_port: u16,

    pub origin_ssl_protocols: Vec<SslProtocol>,
}

impl CustomOriginConfig {
    /// Plain-HTTP origin on the standard ports
    ///
    /// S3 website endpoints only speak HTTP; TLS terminates at the edge.
    pub fn http_only() -> Self {
        Self {
            origin_protocol_policy: OriginProtocolPolicy::HttpOnly,
            http_port: 80,
            https_port: 443,
            origin_ssl_protocols: vec![SslProtocol::TlsV1_2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OriginProtocolPolicy {
    HttpOnly,
    HttpsOnly,
    MatchViewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SslProtocol {
    #[serde(rename = "TLSv1")]
    TlsV1,
    #[serde(rename = "TLSv1.1")]
    TlsV1_1,
    #[serde(rename = "TLSv1.2")]
    TlsV1_2,
}

/// Default cache behavior for the distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheBehavior {
    pub target_origin_id: String,

    pub allowed_methods: Vec<HttpMethod>,

    pub cached_methods: Vec<HttpMethod>,

    pub viewer_protocol_policy: ViewerProtocolPolicy,

    pub forwarded_values: ForwardedValues,

    /// TTLs in seconds
    pub min_ttl: u64,
    pub default_ttl: u64,
    pub max_ttl: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "HEAD")]
    Head,
    #[serde(rename = "OPTIONS")]
    Options,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PATCH")]
    Patch,
    #[serde(rename = "DELETE")]
    Delete,
}

impl HttpMethod {
    /// The read-only method set used for static content
    pub fn read_only() -> Vec<Self> {
        vec![Self::Get, Self::Head, Self::Options]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewerProtocolPolicy {
    AllowAll,
    RedirectToHttps,
    HttpsOnly,
}

/// What the edge forwards to the origin
///
/// Static sites serve the same bytes to everyone, so the default
/// forwards neither cookies nor query strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardedValues {
    pub query_string: bool,

    pub cookies: CookieForwarding,
}

impl Default for ForwardedValues {
    fn default() -> Self {
        Self {
            query_string: false,
            cookies: CookieForwarding::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CookieForwarding {
    None,
    All,
}

/// Mapping from an origin error to a replacement page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomErrorResponse {
    pub error_code: u16,

    pub response_code: u16,

    /// Bucket-absolute path, starting with '/'
    pub response_page_path: String,
}

/// Certificate the distribution presents to viewers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerCertificate {
    /// The shared *.cloudfront.net certificate
    Default,

    /// A certificate from ACM, required for custom domain aliases
    Acm {
        acm_certificate_arn: String,
        ssl_support_method: SslSupportMethod,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslSupportMethod {
    SniOnly,
    Vip,
}

/// Access log delivery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log bucket hostname, an engine output
    pub bucket: AttrValue,

    pub include_cookies: bool,

    /// Key prefix within the log bucket
    pub prefix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceClass {
    #[serde(rename = "PriceClass_100")]
    Class100,
    #[serde(rename = "PriceClass_200")]
    Class200,
    #[serde(rename = "PriceClass_All")]
    All,
}

/// Geographic restriction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restrictions {
    pub geo_restriction: GeoRestriction,
}

impl Default for Restrictions {
    fn default() -> Self {
        Self {
            geo_restriction: GeoRestriction {
                restriction_type: GeoRestrictionType::None,
                locations: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRestriction {
    pub restriction_type: GeoRestrictionType,

    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeoRestrictionType {
    None,
    Whitelist,
    Blacklist,
}

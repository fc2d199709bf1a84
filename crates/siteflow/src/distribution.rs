//! CDN distribution construction

use siteflow_aws::cloudfront::{
    CacheBehavior, CustomErrorResponse, CustomOriginConfig, DistributionConfig, ForwardedValues,
    HttpMethod, LoggingConfig, Origin, PriceClass, Restrictions, SslSupportMethod,
    ViewerCertificate, ViewerProtocolPolicy,
};
use siteflow_graph::{AttrValue, ResourceId};

use crate::args::{validate_custom_404, ContentArgs, DomainArgs};
use crate::error::Result;

/// Edge cache lifetimes, in seconds
///
/// The default caps edge caching at ten minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtl {
    pub min: u64,
    pub default: u64,
    pub max: u64,
}

impl Default for CacheTtl {
    fn default() -> Self {
        Self {
            min: 0,
            default: 600,
            max: 600,
        }
    }
}

/// Build the distribution payload fronting a website bucket
///
/// The origin is the bucket's website endpoint (HTTP only; TLS
/// terminates at the edge). With a domain the distribution answers to
/// it and presents its ACM certificate over SNI; without one it stays
/// on the shared edge certificate with no aliases.
pub fn build_distribution(
    site: &str,
    content_bucket: &ResourceId,
    logs_bucket: &ResourceId,
    content: &ContentArgs,
    domain: Option<&DomainArgs>,
    cache: CacheTtl,
) -> Result<DistributionConfig> {
    let mut custom_error_responses = Vec::new();
    if let Some(path) = &content.custom_404_path {
        validate_custom_404(path)?;
        custom_error_responses.push(CustomErrorResponse {
            error_code: 404,
            response_code: 404,
            response_page_path: path.clone(),
        });
    }

    let (aliases, viewer_certificate) = match domain {
        Some(domain) => (
            vec![domain.target_domain.clone()],
            ViewerCertificate::Acm {
                acm_certificate_arn: domain.acm_certificate_arn.clone(),
                ssl_support_method: SslSupportMethod::SniOnly,
            },
        ),
        None => (Vec::new(), ViewerCertificate::Default),
    };

    let origin_id = content_bucket.key();
    let origin = Origin {
        origin_id: origin_id.clone(),
        domain_name: AttrValue::output_of(content_bucket, "website_endpoint"),
        custom_origin: CustomOriginConfig::http_only(),
    };

    Ok(DistributionConfig {
        enabled: true,
        aliases,
        origins: vec![origin],
        default_cache_behavior: CacheBehavior {
            target_origin_id: origin_id,
            allowed_methods: HttpMethod::read_only(),
            cached_methods: HttpMethod::read_only(),
            viewer_protocol_policy: ViewerProtocolPolicy::RedirectToHttps,
            forwarded_values: ForwardedValues::default(),
            min_ttl: cache.min,
            default_ttl: cache.default,
            max_ttl: cache.max,
        },
        custom_error_responses,
        viewer_certificate,
        logging: LoggingConfig {
            bucket: AttrValue::output_of(logs_bucket, "bucket_domain_name"),
            include_cookies: false,
            prefix: format!("{site}/"),
        },
        price_class: PriceClass::Class100,
        restrictions: Restrictions::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use siteflow_aws::s3::BUCKET_KIND;

    fn buckets() -> (ResourceId, ResourceId) {
        (
            ResourceId::new(BUCKET_KIND, "docs"),
            ResourceId::new(BUCKET_KIND, "docs-logs"),
        )
    }

    fn build(
        content: &ContentArgs,
        domain: Option<&DomainArgs>,
        cache: CacheTtl,
    ) -> DistributionConfig {
        let (content_bucket, logs_bucket) = buckets();
        build_distribution("docs", &content_bucket, &logs_bucket, content, domain, cache).unwrap()
    }

    #[test]
    fn test_distribution_without_domain() {
        let config = build(&ContentArgs::new("./www"), None, CacheTtl::default());

        assert!(config.enabled);
        assert!(config.aliases.is_empty());
        assert_eq!(config.viewer_certificate, ViewerCertificate::Default);
        assert!(config.custom_error_responses.is_empty());
        assert_eq!(config.price_class, PriceClass::Class100);
        assert_eq!(config.logging.prefix, "docs/");
    }

    #[test]
    fn test_origin_targets_bucket_website_endpoint() {
        let (content_bucket, _) = buckets();
        let config = build(&ContentArgs::new("./www"), None, CacheTtl::default());

        assert_eq!(config.origins.len(), 1);
        let origin = &config.origins[0];
        assert_eq!(origin.origin_id, "s3-bucket:docs");
        assert_eq!(
            origin.domain_name,
            AttrValue::output_of(&content_bucket, "website_endpoint")
        );
        assert_eq!(
            config.default_cache_behavior.target_origin_id,
            origin.origin_id
        );
    }

    #[test]
    fn test_domain_brings_alias_and_sni_certificate() {
        let domain = DomainArgs::new(
            "www.example.com",
            "arn:aws:acm:us-east-1:123456789012:certificate/abc",
        );
        let config = build(
            &ContentArgs::new("./www"),
            Some(&domain),
            CacheTtl::default(),
        );

        assert_eq!(config.aliases, vec!["www.example.com"]);
        assert_eq!(
            config.viewer_certificate,
            ViewerCertificate::Acm {
                acm_certificate_arn: "arn:aws:acm:us-east-1:123456789012:certificate/abc"
                    .to_string(),
                ssl_support_method: SslSupportMethod::SniOnly,
            }
        );
    }

    #[test]
    fn test_custom_404_maps_to_error_response() {
        let content = ContentArgs::new("./www").with_custom_404("/404.html");
        let config = build(&content, None, CacheTtl::default());

        assert_eq!(
            config.custom_error_responses,
            vec![CustomErrorResponse {
                error_code: 404,
                response_code: 404,
                response_page_path: "/404.html".to_string(),
            }]
        );
    }

    #[test]
    fn test_relative_404_path_is_rejected() {
        let (content_bucket, logs_bucket) = buckets();
        let content = ContentArgs::new("./www").with_custom_404("404.html");

        let err = build_distribution(
            "docs",
            &content_bucket,
            &logs_bucket,
            &content,
            None,
            CacheTtl::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::InvalidArgument(_)));
    }

    #[test]
    fn test_identical_inputs_build_identical_configs() {
        let content = ContentArgs::new("./www").with_custom_404("/404.html");
        let domain = DomainArgs::new(
            "www.example.com",
            "arn:aws:acm:us-east-1:123456789012:certificate/abc",
        );

        let first = build(&content, Some(&domain), CacheTtl::default());
        let second = build(&content, Some(&domain), CacheTtl::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_ttl_defaults_and_override() {
        let config = build(&ContentArgs::new("./www"), None, CacheTtl::default());
        let behavior = &config.default_cache_behavior;
        assert_eq!(
            (behavior.min_ttl, behavior.default_ttl, behavior.max_ttl),
            (0, 600, 600)
        );

        let config = build(
            &ContentArgs::new("./www"),
            None,
            CacheTtl {
                min: 5,
                default: 3600,
                max: 86400,
            },
        );
        let behavior = &config.default_cache_behavior;
        assert_eq!(
            (behavior.min_ttl, behavior.default_ttl, behavior.max_ttl),
            (5, 3600, 86400)
        );
    }
}

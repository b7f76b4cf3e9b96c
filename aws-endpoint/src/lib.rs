/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use http::Uri;

use aws_types::{Region, SigningRegion, SigningService};
use smithy_http::endpoint::Endpoint;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to connect to an AWS Service
///
/// An `AwsEndpoint` captures all necessary information needed to connect to an AWS service, including:
/// - The URI of the endpoint (needed to actually send the request)
/// - The name of the service (needed downstream for signing)
/// - The signing region (which may differ from the actual region)
#[derive(Clone, Debug)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
    signing_service: Option<SigningService>,
    signing_region: Option<SigningRegion>,
}

impl AwsEndpoint {
    pub fn from_endpoint(endpoint: Endpoint) -> Self {
        AwsEndpoint {
            endpoint,
            signing_service: None,
            signing_region: None,
        }
    }

    pub fn with_signing_region(mut self, region: SigningRegion) -> Self {
        self.signing_region = Some(region);
        self
    }

    pub fn with_signing_service(mut self, service: SigningService) -> Self {
        self.signing_service = Some(service);
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn signing_region(&self) -> Option<&SigningRegion> {
        self.signing_region.as_ref()
    }

    pub fn signing_service(&self) -> Option<&SigningService> {
        self.signing_service.as_ref()
    }

    pub fn set_endpoint(&self, uri: &mut http::Uri) {
        self.endpoint.set_endpoint(uri);
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// To provide a static endpoint, [`Endpoint`](smithy_http::endpoint::Endpoint) implements this trait.
/// Example usage:
/// ```rust
/// # mod codebuild {
/// # use aws_endpoint::ResolveAwsEndpoint;
/// # pub struct ConfigBuilder;
/// # impl ConfigBuilder {
/// #     pub fn endpoint(&mut self, resolver: impl ResolveAwsEndpoint + 'static) {
/// #         // ...
/// #     }
/// # }
/// # }
/// use smithy_http::endpoint::Endpoint;
/// use http::Uri;
/// let mut config = codebuild::ConfigBuilder;
/// config.endpoint(
///     Endpoint::immutable(Uri::from_static("http://localhost:8080"))
/// );
/// ```
pub trait ResolveAwsEndpoint: Send + Sync {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

/// Default AWS Endpoint Implementation
///
/// Requests go to `https://{service}.{region}.amazonaws.com`, or the `amazonaws.com.cn` domain for
/// regions in the China partition.
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    service: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(service: &'static str) -> Self {
        Self { service }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let region = region.as_ref();
        let suffix = if region.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let uri = Uri::from_str(&format!("https://{}.{}.{}", self.service, region, suffix))?;
        Ok(AwsEndpoint::from_endpoint(Endpoint::mutable(uri)))
    }
}

/// A user-provided endpoint is used for every region; the request region is still used for signing
impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint::from_endpoint(self.clone()))
    }
}

pub type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(config: &PropertyBag) -> Option<&AwsEndpointResolver> {
    config.get()
}

pub fn set_endpoint_resolver(config: &mut PropertyBag, provider: AwsEndpointResolver) {
    config.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
/// 4. Set the `SigningRegion` and `SigningService` in the property bag to drive downstream
/// signing middleware.
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug)]
pub enum AwsEndpointStageError {
    NoEndpointResolver,
    NoRegion,
    EndpointResolutionError(BoxError),
}

impl Display for AwsEndpointStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for AwsEndpointStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointStageError::EndpointResolutionError(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, config| {
            let provider =
                get_endpoint_resolver(config).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = config
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
            let signing_region = endpoint
                .signing_region()
                .cloned()
                .unwrap_or_else(|| region.clone().into());
            config.insert::<SigningRegion>(signing_region);
            if let Some(signing_service) = endpoint.signing_service() {
                config.insert::<SigningService>(signing_service.clone());
            }
            endpoint.set_endpoint(http_req.uri_mut());
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use http::Uri;

    use aws_types::{Region, SigningRegion, SigningService};
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    use crate::{
        set_endpoint_resolver, AwsEndpointStage, AwsEndpointStageError,
        DefaultAwsEndpointResolver, ResolveAwsEndpoint,
    };

    fn request_in(region: &'static str, resolver: Arc<dyn ResolveAwsEndpoint>) -> operation::Request {
        let req = http::Request::builder()
            .uri("/")
            .body(SdkBody::from(""))
            .unwrap();
        let mut req = operation::Request::new(req);
        {
            let mut conf = req.config_mut();
            conf.insert(Region::new(region));
            conf.insert(SigningService::from_static("codebuild"));
            set_endpoint_resolver(&mut conf, resolver);
        }
        req
    }

    #[test]
    fn default_endpoint_updates_request() {
        let req = request_in(
            "us-east-1",
            Arc::new(DefaultAwsEndpointResolver::for_service("codebuild")),
        );
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.config().get(),
            Some(&SigningRegion::from(Region::new("us-east-1")))
        );
        assert_eq!(
            req.config().get(),
            Some(&SigningService::from_static("codebuild"))
        );
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("https://codebuild.us-east-1.amazonaws.com/")
        );
    }

    #[test]
    fn china_regions_use_the_cn_domain() {
        let req = request_in(
            "cn-north-1",
            Arc::new(DefaultAwsEndpointResolver::for_service("directconnect")),
        );
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("https://directconnect.cn-north-1.amazonaws.com.cn/")
        );
    }

    #[test]
    fn static_endpoint_keeps_signing_region() {
        let req = request_in(
            "us-west-2",
            Arc::new(Endpoint::immutable(Uri::from_static("http://localhost:8000"))),
        );
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(req.http().uri(), &Uri::from_static("http://localhost:8000/"));
        assert_eq!(
            req.config().get::<SigningRegion>().map(|r| r.as_ref().to_string()),
            Some("us-west-2".to_string())
        );
    }

    #[test]
    fn missing_region_is_an_error() {
        let req = operation::Request::new(http::Request::new(SdkBody::from("")));
        let mut req = req;
        set_endpoint_resolver(
            &mut req.config_mut(),
            Arc::new(DefaultAwsEndpointResolver::for_service("codebuild")),
        );
        match AwsEndpointStage.apply(req) {
            Err(AwsEndpointStageError::NoRegion) => {}
            other => panic!("expected a missing region error, got {:?}", other.err()),
        }
    }
}

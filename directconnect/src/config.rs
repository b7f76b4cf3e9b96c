/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::{CredentialsProvider, ProvideCredentials};
use aws_endpoint::{AwsEndpointResolver, DefaultAwsEndpointResolver, ResolveAwsEndpoint};
use aws_types::region::{ProvideRegion, Region};
use std::sync::Arc;

/// Service configuration shared by every request made with it
///
/// Values that are not set explicitly are loaded when the configuration is built: the region
/// from `AWS_REGION`/`AWS_DEFAULT_REGION`, and credentials from the environment.
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint_resolver: AwsEndpointResolver,
    pub(crate) credentials_provider: CredentialsProvider,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds a configuration entirely from the environment
    pub fn from_env() -> Self {
        Builder::default().build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_resolver: Option<AwsEndpointResolver>,
    credentials_provider: Option<CredentialsProvider>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    /// Overrides the endpoint resolver
    ///
    /// A fixed [`Endpoint`](smithy_http::endpoint::Endpoint) can be used to target a local mock.
    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn credentials_provider(
        mut self,
        credentials_provider: impl ProvideCredentials + 'static,
    ) -> Self {
        self.credentials_provider = Some(Arc::new(credentials_provider));
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self
                .region
                .or_else(|| aws_types::region::default_provider().region()),
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultAwsEndpointResolver::for_service(crate::ENDPOINT_PREFIX))
            }),
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| Arc::new(aws_auth::default_provider())),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Config;
    use aws_auth::Credentials;
    use aws_types::region::Region;

    #[test]
    fn explicit_region_is_kept() {
        let conf = Config::builder()
            .region(Region::new("eu-west-1"))
            .credentials_provider(Credentials::from_keys("akid", "secret", None))
            .build();
        assert_eq!(conf.region(), Some(&Region::new("eu-west-1")));
    }

    #[test]
    fn debug_omits_credentials() {
        let conf = Config::builder()
            .region("us-east-1")
            .credentials_provider(Credentials::from_keys("akid", "very-secret", None))
            .build();
        let debug = format!("{:?}", conf);
        assert!(debug.contains("us-east-1"));
        assert!(!debug.contains("very-secret"));
    }
}

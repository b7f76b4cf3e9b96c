/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// The region to send requests to.
///
/// The region MUST be specified on a request. It may be configured globally or on a
/// per-client basis unless otherwise noted. A full list of regions is found in the
/// "Regions and Endpoints" document.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Provide a [`Region`] to use when building a client
///
/// Providers are consulted once, when the service config is built.
pub trait ProvideRegion {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl<'a> ProvideRegion for &'a Region {
    fn region(&self) -> Option<Region> {
        Some((*self).clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

impl ProvideRegion for &'static str {
    fn region(&self) -> Option<Region> {
        Some(Region::new(*self))
    }
}

/// Load a region from the environment
///
/// `AWS_REGION` takes precedence over `AWS_DEFAULT_REGION`. Empty values are ignored.
pub struct EnvironmentProvider {
    env: Env,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    #[doc(hidden)]
    pub fn for_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .iter()
            .filter_map(|key| self.env.get(key).ok())
            .find(|value| !value.trim().is_empty())
            .map(Region::new)
    }
}

/// The default region provider: the process environment
pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

/// The region to use when signing requests
///
/// Generally, user code will not need to interact with `SigningRegion`. It is set by the endpoint
/// stage from the region the request is sent to, unless the endpoint overrides it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRegion(Cow<'static, str>);

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(region: Region) -> Self {
        SigningRegion(region.0)
    }
}

impl SigningRegion {
    pub const fn from_static(region: &'static str) -> Self {
        SigningRegion(Cow::Borrowed(region))
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use crate::region::{EnvironmentProvider, ProvideRegion, Region, SigningRegion};

    #[test]
    fn aws_region_takes_precedence() {
        let provider = EnvironmentProvider::for_env(Env::from_slice(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(provider.region(), Some(Region::new("us-west-2")));
    }

    #[test]
    fn falls_back_to_default_region() {
        let provider = EnvironmentProvider::for_env(Env::from_slice(&[
            ("AWS_REGION", ""),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(provider.region(), Some(Region::from_static("eu-west-1")));
    }

    #[test]
    fn no_region() {
        let provider = EnvironmentProvider::for_env(Env::from_slice(&[]));
        assert_eq!(provider.region(), None);
    }

    #[test]
    fn signing_region_from_region() {
        let region = Region::new(String::from("cn-north-1"));
        assert_eq!(SigningRegion::from(region).as_ref(), "cn-north-1");
    }
}

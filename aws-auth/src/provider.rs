/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod env;

use crate::Credentials;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::sync::Arc;

/// Failure to produce credentials for a request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CredentialsError {
    /// The provider had nothing to offer, for example because `AWS_ACCESS_KEY_ID` is unset.
    #[error("no credentials were loaded")]
    CredentialsNotLoaded,
    #[error(transparent)]
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

/// A credentials provider
///
/// Credentials are loaded on every request, immediately before signing.
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
}

pub type CredentialsProvider = Arc<dyn ProvideCredentials>;

/// Provider used when a service `Config` is built without one: the `AWS_*` environment variables.
pub fn default_provider() -> impl ProvideCredentials {
    env::EnvironmentVariableCredentialsProvider::new()
}

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.clone())
    }
}

/// Stores `provider` in an operation's property bag for the signing stage to load from.
pub fn set_provider(config: &mut PropertyBag, provider: CredentialsProvider) {
    config.insert(provider);
}

#[cfg(test)]
mod test {
    use crate::provider::{set_provider, CredentialsProvider, ProvideCredentials};
    use crate::Credentials;
    use smithy_http::property_bag::PropertyBag;
    use std::sync::Arc;

    #[test]
    fn provider_is_stored_in_property_bag() {
        let mut bag = PropertyBag::new();
        set_provider(
            &mut bag,
            Arc::new(Credentials::from_keys("akid", "secret", None)),
        );
        let provider = bag
            .get::<CredentialsProvider>()
            .expect("provider should be set");
        let creds = provider.provide_credentials().expect("static credentials");
        assert_eq!(creds.access_key_id(), "akid");
        assert_eq!(creds.secret_access_key(), "secret");
    }

    #[test]
    fn missing_credentials_message() {
        assert_eq!(
            crate::CredentialsError::CredentialsNotLoaded.to_string(),
            "no credentials were loaded"
        );
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{
    OperationSigningConfig, RequestConfig, SigV4Signer, SigningError, SigningRequirements,
};
use aws_auth::{Credentials, CredentialsError, CredentialsProvider};
use aws_types::{SigningRegion, SigningService};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::time::SystemTime;
use thiserror::Error;

/// Middleware stage to sign requests with SigV4
///
/// SigV4SigningStage will load configuration from the request property bag and add
/// a signature.
///
/// Prior to signing, the following fields MUST be present in the property bag:
/// - [`SigningRegion`](SigningRegion): The region used when signing the request, eg. `us-east-1`
/// - [`SigningService`](SigningService): The name of the service to use when signing the request, eg. `codebuild`
/// - [`CredentialsProvider`](CredentialsProvider): A credentials provider to retrieve credentials
/// - [`OperationSigningConfig`](OperationSigningConfig): Operation specific signing configuration, eg.
///   changes to URL encoding behavior, or headers that must be omitted.
/// If any of these fields are missing, the middleware will return an error.
///
/// The following fields MAY be present in the property bag:
/// - [`SystemTime`](SystemTime): The timestamp to use when signing the request. If this field is not present
///   [`SystemTime::now`](SystemTime::now) will be used.
#[derive(Clone, Debug)]
pub struct SigV4SigningStage {
    signer: SigV4Signer,
}

impl SigV4SigningStage {
    pub fn new(signer: SigV4Signer) -> Self {
        Self { signer }
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("No credentials provider in the property bag")]
    MissingCredentialsProvider,
    #[error("No signing region in the property bag")]
    MissingSigningRegion,
    #[error("No signing service in the property bag")]
    MissingSigningService,
    #[error("No signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("Signing failed: {0}")]
    SigningFailure(SigningError),
    #[error("Failed to load credentials from the credentials provider: {0}")]
    CredentialsLoadingError(#[from] CredentialsError),
}

struct SigningInputs<'a> {
    operation_config: &'a OperationSigningConfig,
    request_config: RequestConfig<'a>,
    credentials: Result<Credentials, CredentialsError>,
}

/// Extract a signing config from a [`PropertyBag`](smithy_http::property_bag::PropertyBag)
fn signing_config(config: &PropertyBag) -> Result<SigningInputs<'_>, SigningStageError> {
    let operation_config = config
        .get::<OperationSigningConfig>()
        .ok_or(SigningStageError::MissingSigningConfig)?;
    let credentials_provider = config
        .get::<CredentialsProvider>()
        .ok_or(SigningStageError::MissingCredentialsProvider)?;
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    let request_config = RequestConfig {
        request_ts: config
            .get::<SystemTime>()
            .copied()
            .unwrap_or_else(SystemTime::now),
        region,
        service,
    };
    Ok(SigningInputs {
        operation_config,
        request_config,
        credentials: credentials_provider.provide_credentials(),
    })
}

impl MapRequest for SigV4SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|mut req, config| {
            let SigningInputs {
                operation_config,
                request_config,
                credentials,
            } = signing_config(config)?;
            let credentials = match (operation_config.signing_requirements, credentials) {
                (SigningRequirements::Disabled, _) => return Ok(req),
                (SigningRequirements::Optional, Err(err)) => {
                    tracing::debug!(error = %err, "no credentials available, sending unsigned request");
                    return Ok(req);
                }
                (_, credentials) => credentials?,
            };
            self.signer
                .sign(operation_config, &request_config, &credentials, &mut req)
                .map_err(SigningStageError::SigningFailure)?;
            tracing::trace!(
                service = request_config.service.as_ref(),
                region = request_config.region.as_ref(),
                "signed request"
            );
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::{SigV4SigningStage, SigningStageError};
    use crate::signer::{OperationSigningConfig, SigV4Signer, SigningRequirements};
    use aws_auth::{set_provider, Credentials, CredentialsError, ProvideCredentials};
    use aws_endpoint::{set_endpoint_resolver, AwsEndpointStage, DefaultAwsEndpointResolver};
    use aws_types::{Region, SigningService};
    use http::header::AUTHORIZATION;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;
    use std::time::{Duration, UNIX_EPOCH};

    struct NoCredentials;

    impl ProvideCredentials for NoCredentials {
        fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
            Err(CredentialsError::CredentialsNotLoaded)
        }
    }

    fn base_request() -> operation::Request {
        let mut req = operation::Request::new(
            http::Request::builder()
                .method("POST")
                .uri("/")
                .body(SdkBody::from("{}"))
                .unwrap(),
        );
        {
            let mut conf = req.config_mut();
            conf.insert(Region::new("us-east-1"));
            conf.insert(SigningService::from_static("directconnect"));
            conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
            set_endpoint_resolver(
                &mut conf,
                Arc::new(DefaultAwsEndpointResolver::for_service("directconnect")),
            );
        }
        req
    }

    // check that the endpoint middleware followed by signing middleware produce the expected result
    #[test]
    fn endpoint_plus_signer() {
        let mut req = base_request();
        {
            let mut conf = req.config_mut();
            conf.insert(OperationSigningConfig::default_config());
            set_provider(
                &mut conf,
                Arc::new(Credentials::from_keys("AKIDEXAMPLE", "secret", None)),
            );
        }
        let endpoint = AwsEndpointStage;
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let req = endpoint.apply(req).expect("add endpoint should succeed");
        let req = signer.apply(req).expect("signing should succeed");
        let auth = req
            .http()
            .headers()
            .get(AUTHORIZATION)
            .expect("auth header must be present")
            .to_str()
            .unwrap();
        assert!(auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210215/us-east-1/directconnect/aws4_request"
        ));
    }

    #[test]
    fn missing_signing_config() {
        let req = AwsEndpointStage.apply(base_request()).unwrap();
        let err = SigV4SigningStage::new(SigV4Signer::new())
            .apply(req)
            .expect_err("no signing config was set");
        assert!(matches!(err, SigningStageError::MissingSigningConfig));
    }

    #[test]
    fn optional_signing_without_credentials() {
        let mut req = base_request();
        {
            let mut conf = req.config_mut();
            let mut signing_config = OperationSigningConfig::default_config();
            signing_config.signing_requirements = SigningRequirements::Optional;
            conf.insert(signing_config);
            set_provider(&mut conf, Arc::new(NoCredentials));
        }
        let req = AwsEndpointStage.apply(req).unwrap();
        let req = SigV4SigningStage::new(SigV4Signer::new())
            .apply(req)
            .expect("unsigned request is allowed");
        assert!(req.http().headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn required_signing_without_credentials() {
        let mut req = base_request();
        {
            let mut conf = req.config_mut();
            conf.insert(OperationSigningConfig::default_config());
            set_provider(&mut conf, Arc::new(NoCredentials));
        }
        let req = AwsEndpointStage.apply(req).unwrap();
        let err = SigV4SigningStage::new(SigV4Signer::new())
            .apply(req)
            .expect_err("credentials are required");
        assert!(matches!(
            err,
            SigningStageError::CredentialsLoadingError(CredentialsError::CredentialsNotLoaded)
        ));
    }
}

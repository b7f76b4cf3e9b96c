/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_sigv4::http_request::{
    sign, PayloadChecksumKind, PercentEncodingMode, SignableBody, SignableRequest, SigningParams,
    SigningSettings,
};
use aws_types::{SigningRegion, SigningService};
use smithy_http::body::SdkBody;
use std::error::Error;
use std::fmt;
use std::time::SystemTime;

pub type SigningError = Box<dyn Error + Send + Sync>;

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signing_options: SigningOptions,
    pub signing_requirements: SigningRequirements,
}

impl OperationSigningConfig {
    /// The signing configuration shared by every AWS JSON operation
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signing_options: SigningOptions {
                double_uri_encode: true,
                content_sha256_header: false,
            },
            signing_requirements: SigningRequirements::Required,
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum SigningRequirements {
    /// A signature MAY be added if credentials are defined
    Optional,

    /// A signature MUST be added.
    ///
    /// If no credentials are provided, this will return an error without dispatching the operation.
    Required,

    /// A signature MUST NOT be added.
    Disabled,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub double_uri_encode: bool,
    pub content_sha256_header: bool,
}

/// Signing Configuration for an individual Request
///
/// These fields may vary on a per-request basis
#[derive(Clone, PartialEq, Eq)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

#[derive(Clone, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer").finish()
    }
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    fn settings(operation_config: &OperationSigningConfig) -> SigningSettings {
        let mut settings = SigningSettings::default();
        settings.percent_encoding_mode = if operation_config.signing_options.double_uri_encode {
            PercentEncodingMode::Double
        } else {
            PercentEncodingMode::Single
        };
        settings.payload_checksum_kind = if operation_config.signing_options.content_sha256_header {
            PayloadChecksumKind::XAmzSha256
        } else {
            PayloadChecksumKind::NoHeader
        };
        settings
    }

    /// Sign a request using the SigV4 Protocol
    ///
    /// Although this function may be used, end users will not typically
    /// interact with this code. It is generally used via middleware in the request pipeline. See [`SigV4SigningStage`](crate::middleware::SigV4SigningStage).
    pub fn sign(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        request: &mut http::Request<SdkBody>,
    ) -> Result<(), SigningError> {
        let settings = Self::settings(operation_config);
        let mut builder = SigningParams::builder()
            .access_key(credentials.access_key_id())
            .secret_key(credentials.secret_access_key())
            .region(request_config.region.as_ref())
            .service_name(request_config.service.as_ref())
            .time(request_config.request_ts)
            .settings(settings);
        builder.set_security_token(credentials.session_token());
        let signing_params = builder.build().map_err(SigningError::from)?;

        let (signing_instructions, _signature) = {
            // AWS JSON bodies are always in memory; anything else is signed as UNSIGNED-PAYLOAD
            let signable_body = request
                .body()
                .bytes()
                .map(SignableBody::Bytes)
                .unwrap_or(SignableBody::UnsignedPayload);
            let signable_request = SignableRequest::new(
                request.method(),
                request.uri(),
                request.headers(),
                signable_body,
            );
            sign(signable_request, &signing_params).map_err(SigningError::from)?
        }
        .into_parts();

        signing_instructions.apply_to_request(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::signer::{OperationSigningConfig, RequestConfig, SigV4Signer};
    use aws_auth::Credentials;
    use aws_types::{SigningRegion, SigningService};
    use http::header::AUTHORIZATION;
    use smithy_http::body::SdkBody;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn sign_adds_authorization_and_date() {
        let mut request = http::Request::builder()
            .method("POST")
            .uri("https://codebuild.us-east-1.amazonaws.com/")
            .header("x-amz-target", "CodeBuild_20161006.ListProjects")
            .body(SdkBody::from("{}"))
            .unwrap();
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("codebuild");
        let request_config = RequestConfig {
            request_ts: UNIX_EPOCH + Duration::from_secs(1613414417),
            region: &region,
            service: &service,
        };
        let creds = Credentials::from_keys("AKIDEXAMPLE", "secret", Some("token".to_string()));
        SigV4Signer::new()
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                &mut request,
            )
            .expect("signing should succeed");

        let auth = request
            .headers()
            .get(AUTHORIZATION)
            .expect("authorization header")
            .to_str()
            .unwrap();
        assert!(auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210215/us-east-1/codebuild/aws4_request"
        ));
        assert!(auth.contains("x-amz-target"));
        assert_eq!(request.headers().get("x-amz-date").unwrap(), "20210215T184017Z");
        assert_eq!(request.headers().get("x-amz-security-token").unwrap(), "token");
        assert_eq!(request.body().bytes(), Some(&b"{}"[..]));
    }
}

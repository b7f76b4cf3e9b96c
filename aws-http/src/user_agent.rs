/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::build_metadata::{OsFamily, BUILD_METADATA};
use aws_types::os_shim_internal::Env;
use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::HeaderValue;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::fmt::Write;
use thiserror::Error;

/// AWS User Agent
///
/// Ths struct should be inserted into the [`PropertyBag`](smithy_http::operation::Request::config)
/// during operation construction. [`UserAgentStage`](UserAgentStage) reads `AwsUserAgent`
/// from the property bag and sets the `User-Agent` and `x-amz-user-agent` headers.
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_metadata: SdkMetadata,
    api_metadata: ApiMetadata,
    os_metadata: OsMetadata,
    language_metadata: LanguageMetadata,
    exec_env_metadata: Option<ExecEnvMetadata>,
}

impl AwsUserAgent {
    /// Load a User Agent configuration from the environment
    ///
    /// This utilizes [`BUILD_METADATA`](const@aws_types::build_metadata::BUILD_METADATA) from `aws_types`
    /// to capture the Rust version & target platform. `ApiMetadata` provides
    /// the version & name of the specific service.
    pub fn new_from_environment(api_metadata: ApiMetadata) -> Self {
        Self::new_from_env(&Env::real(), api_metadata)
    }

    #[doc(hidden)]
    pub fn new_from_env(env: &Env, api_metadata: ApiMetadata) -> Self {
        let build_metadata = &BUILD_METADATA;
        AwsUserAgent {
            sdk_metadata: SdkMetadata {
                name: "rust",
                version: build_metadata.core_pkg_version,
            },
            api_metadata,
            os_metadata: OsMetadata {
                os_family: build_metadata.os_family,
                version: None,
            },
            language_metadata: LanguageMetadata {
                lang: "rust",
                version: build_metadata.rust_version,
            },
            exec_env_metadata: env
                .get("AWS_EXECUTION_ENV")
                .ok()
                .map(|name| ExecEnvMetadata { name }),
        }
    }

    /// For test purposes, construct an environment-independent User Agent
    ///
    /// Without this, running CI on a different platform would produce different user agent strings
    pub fn for_tests() -> Self {
        Self {
            sdk_metadata: SdkMetadata {
                name: "rust",
                version: "0.123.test",
            },
            api_metadata: ApiMetadata {
                service_id: "test-service".into(),
                version: "0.123",
            },
            os_metadata: OsMetadata {
                os_family: OsFamily::Windows,
                version: Some("XPSP3".to_string()),
            },
            language_metadata: LanguageMetadata {
                lang: "rust",
                version: "1.50.0",
            },
            exec_env_metadata: None,
        }
    }

    /// Generate a new-style user agent style header
    ///
    /// This header should be set at `x-amz-user-agent`
    pub fn aws_ua_header(&self) -> String {
        let mut ua_value = String::new();
        // writing into a String cannot fail
        let _ = write!(
            ua_value,
            "{} {} {} {}",
            &self.sdk_metadata, &self.api_metadata, &self.os_metadata, &self.language_metadata
        );
        if let Some(ref env_meta) = self.exec_env_metadata {
            let _ = write!(ua_value, " {}", env_meta);
        }
        ua_value
    }

    /// Generate an old-style User-Agent header for backward compatibility
    ///
    /// This header is intended to be set at `User-Agent`
    pub fn ua_header(&self) -> String {
        format!(
            "{} {} {}",
            &self.sdk_metadata, &self.os_metadata, &self.language_metadata
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct SdkMetadata {
    name: &'static str,
    version: &'static str,
}

impl Display for SdkMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "aws-sdk-{}/{}", self.name, self.version)
    }
}

/// Name and version of the service client, eg. `api/codebuild/0.0.1`
#[derive(Clone, Debug)]
pub struct ApiMetadata {
    service_id: Cow<'static, str>,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        Self {
            service_id: Cow::Borrowed(service_id),
            version,
        }
    }
}

impl Display for ApiMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

#[derive(Clone, Debug)]
struct OsMetadata {
    os_family: OsFamily,
    version: Option<String>,
}

impl Display for OsMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let os_family = match self.os_family {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::Macos => "macos",
            OsFamily::Android => "android",
            OsFamily::Ios => "ios",
            OsFamily::Other => "other",
        };
        write!(f, "os/{}", os_family)?;
        if let Some(ref version) = self.version {
            write!(f, "/{}", version)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
struct LanguageMetadata {
    lang: &'static str,
    version: &'static str,
}

impl Display for LanguageMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "lang/{}/{}", self.lang, self.version)
    }
}

#[derive(Clone, Debug)]
struct ExecEnvMetadata {
    name: String,
}

impl Display for ExecEnvMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "exec-env/{}", &self.name)
    }
}

#[non_exhaustive]
#[derive(Default, Clone, Debug)]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Error)]
pub enum UserAgentStageError {
    #[error("User agent missing from property bag")]
    UserAgentMissing,
    #[error("Provided user agent header was invalid")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

const X_AMZ_USER_AGENT: &str = "x-amz-user-agent";

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, conf| {
            let ua = conf
                .get::<AwsUserAgent>()
                .ok_or(UserAgentStageError::UserAgentMissing)?;
            req.headers_mut()
                .append(USER_AGENT, HeaderValue::try_from(ua.ua_header())?);
            req.headers_mut()
                .append(
                    HeaderName::from_static(X_AMZ_USER_AGENT),
                    HeaderValue::try_from(ua.aws_ua_header())?,
                );
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::user_agent::{ApiMetadata, AwsUserAgent, UserAgentStage, X_AMZ_USER_AGENT};
    use aws_types::os_shim_internal::Env;
    use http::header::USER_AGENT;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    #[test]
    fn generate_a_valid_ua() {
        let api_metadata = ApiMetadata {
            service_id: "codebuild".into(),
            version: "123",
        };
        let ua = AwsUserAgent::new_from_env(&Env::from_slice(&[]), api_metadata);
        assert!(ua.aws_ua_header().contains("api/codebuild/123"));
        assert!(ua.ua_header().starts_with("aws-sdk-rust/"));
        assert!(!ua.aws_ua_header().contains("exec-env"));
    }

    #[test]
    fn execution_environment_is_reported() {
        let ua = AwsUserAgent::new_from_env(
            &Env::from_slice(&[("AWS_EXECUTION_ENV", "AWS_Lambda_rust")]),
            ApiMetadata::new("directconnect", "0.0.1"),
        );
        assert!(ua.aws_ua_header().ends_with(" exec-env/AWS_Lambda_rust"));
    }

    #[test]
    fn ua_stage_adds_headers() {
        let stage = UserAgentStage::new();
        let req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        stage
            .apply(req)
            .expect_err("adding UA should fail without a UA set");
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        req.config_mut().insert(AwsUserAgent::for_tests());
        let req = stage.apply(req).expect("setting user agent should succeed");
        let (req, _) = req.into_parts();
        assert_eq!(
            req.headers()
                .get(USER_AGENT)
                .expect("UA header should be set"),
            "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0"
        );
        assert_eq!(
            req.headers()
                .get(X_AMZ_USER_AGENT)
                .expect("UA header should be set"),
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0"
        );
    }
}

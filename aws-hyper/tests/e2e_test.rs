/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, RetryConfig, SdkError};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::{AUTHORIZATION, HOST, USER_AGENT};
use http::{Response, Uri};
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{Metadata, Operation};
use smithy_http::response::ParseHttpResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::convert::Infallible;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Clone)]
struct TestOperationParser;

#[derive(Debug)]
struct TestError {
    code: String,
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestError: {}", self.code)
    }
}

impl Error for TestError {}

impl ProvideErrorKind for TestError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl<B> ParseHttpResponse<B> for TestOperationParser
where
    B: http_body::Body,
{
    type Output = Result<String, TestError>;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok(String::from_utf8_lossy(response.body()).into_owned())
        } else {
            Err(TestError {
                code: String::from_utf8_lossy(response.body()).into_owned(),
            })
        }
    }
}

fn test_operation() -> Operation<TestOperationParser, AwsErrorRetryPolicy> {
    let req = operation::Request::new(
        http::Request::builder()
            .uri("/")
            .method("POST")
            .body(SdkBody::from("request body"))
            .unwrap(),
    )
    .augment(|req, conf| {
        set_endpoint_resolver(
            conf,
            Arc::new(DefaultAwsEndpointResolver::for_service("test-service")),
        );
        aws_auth::set_provider(
            conf,
            Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
        );
        conf.insert(Region::new("test-region"));
        conf.insert(SigningService::from_static("test-service"));
        conf.insert(OperationSigningConfig::default_config());
        conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
        conf.insert(AwsUserAgent::for_tests());
        Result::<_, Infallible>::Ok(req)
    })
    .unwrap();
    Operation::new(req, TestOperationParser)
        .with_metadata(Metadata::new("TestOperation", "test-service"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
}

fn expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .header(USER_AGENT, "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
        .header(
            "x-amz-user-agent",
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0",
        )
        .header(AUTHORIZATION, "ignored")
        .header("x-amz-date", "20210215T184017Z")
        .uri(Uri::from_static(
            "https://test-service.test-region.amazonaws.com/",
        ))
        .method("POST")
        .body(SdkBody::from("request body"))
        .unwrap()
}

fn no_jitter() -> RetryConfig {
    RetryConfig::default().with_base(|| 0_f64)
}

#[tokio::test]
async fn e2e_test() {
    let events = vec![(
        expected_request(),
        http::Response::builder()
            .status(200)
            .body("Hello!")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client.call(test_operation()).await;
    let resp = resp.expect("successful operation");
    assert_eq!(resp, "Hello!");

    assert_eq!(conn.requests().len(), 1);
    conn.requests()[0].assert_matches(vec![AUTHORIZATION]);
    let auth = conn.requests()[0]
        .actual
        .headers()
        .get(AUTHORIZATION)
        .expect("request is signed")
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=access_key/20210215/test-region/test-service/aws4_request"
        ),
        "{}",
        auth
    );
    // the signer covers the host taken from the URI without adding a `host` header
    let signed_headers = auth
        .split("SignedHeaders=")
        .nth(1)
        .and_then(|rest| rest.split(',').next())
        .unwrap_or_default();
    assert!(signed_headers.split(';').any(|h| h == "host"), "{}", auth);
    assert!(conn.requests()[0].actual.headers().get(HOST).is_none());
}

#[tokio::test]
async fn transient_errors_are_retried() {
    let events = vec![
        (
            expected_request(),
            http::Response::builder()
                .status(503)
                .body("ServiceUnavailable")
                .unwrap(),
        ),
        (
            expected_request(),
            http::Response::builder()
                .status(200)
                .body("Hello!")
                .unwrap(),
        ),
    ];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(no_jitter());
    let resp = client.call(test_operation()).await.expect("second attempt succeeds");
    assert_eq!(resp, "Hello!");
    assert_eq!(conn.requests().len(), 2);
    for req in conn.requests().iter() {
        req.assert_matches(vec![AUTHORIZATION]);
    }
}

#[tokio::test]
async fn modeled_client_errors_are_not_retried() {
    let events = vec![(
        expected_request(),
        http::Response::builder()
            .status(400)
            .body("ValidationException")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(no_jitter());
    let err = client
        .call(test_operation())
        .await
        .expect_err("400s are not retried");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(err.code, "ValidationException");
            assert_eq!(raw.status(), 400);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn retries_stop_after_max_attempts() {
    let failure = || {
        http::Response::builder()
            .status(500)
            .body("InternalFailure")
            .unwrap()
    };
    let events = vec![
        (expected_request(), failure()),
        (expected_request(), failure()),
        (expected_request(), failure()),
        (expected_request(), failure()),
    ];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(no_jitter());
    client
        .call(test_operation())
        .await
        .expect_err("every attempt fails");
    assert_eq!(conn.requests().len(), 3);
}

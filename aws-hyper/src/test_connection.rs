/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::{HeaderName, CONTENT_TYPE};
use http::Request;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers};
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};
use tower::BoxError;

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request received by a [`TestConnection`] paired with the request it was expected to be
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Assert that the actual request matches the expected one
    ///
    /// Every header on the expected request must be present with the same value unless it is
    /// listed in `ignore_headers`. JSON bodies are compared structurally.
    #[track_caller]
    pub fn assert_matches(&self, ignore_headers: Vec<HeaderName>) {
        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let expected_value = String::from_utf8_lossy(value.as_bytes());
                assert_ok(validate_headers(
                    actual,
                    &[(name.as_str(), expected_value.as_ref())],
                ));
            }
        }
        let actual_body = actual.body().bytes().unwrap_or(&[]);
        let expected_body = expected.body().bytes().unwrap_or(&[]);
        let is_json = expected
            .headers()
            .get(CONTENT_TYPE)
            .map(|ct| ct.as_bytes().starts_with(b"application/x-amz-json"))
            .unwrap_or(false);
        match (is_json, std::str::from_utf8(expected_body)) {
            (true, Ok(expected_str)) => assert_ok(validate_body(actual_body, expected_str)),
            _ => assert_eq!(actual_body, expected_body),
        };
        assert_eq!(actual.uri(), expected.uri());
        assert_eq!(actual.method(), expected.method());
    }
}

/// TestConnection for use with a [`aws_hyper::Client`](crate::Client)
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// Usage example:
/// ```rust
/// use aws_hyper::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = aws_hyper::Client::new(conn);
/// ```
#[derive(Clone)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<B: Into<hyper::Body>> tower::Service<http::Request<SdkBody>> for TestConnection<B> {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = lock(&self.data).pop() {
            lock(&self.requests).push(ValidateRequest { actual, expected });
            std::future::ready(Ok(resp.map(|body| body.into())))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::TestConnection;
    use http::header::{CONTENT_TYPE, USER_AGENT};
    use smithy_http::body::SdkBody;
    use tower::{BoxError, Service, ServiceExt};

    /// Validate that the `TestConnection` meets the required trait bounds to be used with a aws-hyper service
    #[test]
    fn meets_trait_bounds() {
        fn check() -> impl tower::Service<
            http::Request<SdkBody>,
            Response = http::Response<hyper::Body>,
            Error = BoxError,
            Future = impl Send,
        > + Clone {
            TestConnection::<String>::new(vec![])
        }
        let _ = check();
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let expected = || {
            http::Request::builder()
                .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                .uri("https://codebuild.us-east-1.amazonaws.com/")
                .method("POST")
                .body(SdkBody::from(r#"{"names":["a"]}"#))
                .unwrap()
        };
        let mut conn = TestConnection::new(vec![
            (expected(), http::Response::new("first")),
            (expected(), http::Response::new("second")),
        ]);
        for _ in 0..2 {
            let actual = http::Request::builder()
                .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                .header(USER_AGENT, "ignored")
                .uri("https://codebuild.us-east-1.amazonaws.com/")
                .method("POST")
                .body(SdkBody::from(r#"{ "names": [ "a" ] }"#))
                .unwrap();
            conn.ready().await.unwrap().call(actual).await.unwrap();
        }
        assert!(conn.ready().await.unwrap().call(expected()).await.is_err());

        assert_eq!(conn.requests().len(), 2);
        for req in conn.requests().iter() {
            req.assert_matches(vec![]);
        }
    }
}

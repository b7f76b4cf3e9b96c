/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod dispatch;
pub mod map_request;
pub mod parse_response;

use smithy_http::result::SdkError;
use tower::BoxError;

/// An Error Occurred During the process of sending an Operation
///
/// The variants are split to enable the final [SdkError](`smithy_http::result::SdkError`) to differentiate
/// between two types of errors:
/// 1. [`RequestConstructionError`](SendOperationError::RequestConstructionError): Errors where the
/// SDK never attempted to dispatch the underlying `http::Request`. These represent errors that
/// occurred during the request construction pipeline. These generally stem from configuration issues.
/// 2. [`RequestDispatchError`](SendOperationError::RequestDispatchError): Errors where the inner
/// tower service failed (eg. because the hostname couldn't be resolved, connection errors,
/// socket hangup etc.). In this case, we don't know how much of the request was _actually_ sent
/// to the client. We only know that we never got back an `http::Response` (and instead got an error).
///
/// `SendOperationError` is currently defined only in `smithy-http-tower` because it may be removed
/// or replaced with `SdkError` in the future.
///
/// `SendOperationError` MAY be moved to a private module in the future.
#[derive(Debug)]
pub enum SendOperationError {
    /// The request could not be constructed
    ///
    /// These errors usually stem from configuration issues (eg. no region, bad credential provider, etc.)
    RequestConstructionError(BoxError),

    /// The request could not be dispatched
    RequestDispatchError(BoxError),
}

impl std::fmt::Display for SendOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendOperationError::RequestConstructionError(err) => {
                write!(f, "failed to construct request: {}", err)
            }
            SendOperationError::RequestDispatchError(err) => {
                write!(f, "failed to dispatch request: {}", err)
            }
        }
    }
}

impl std::error::Error for SendOperationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SendOperationError::RequestConstructionError(err)
            | SendOperationError::RequestDispatchError(err) => Some(err.as_ref()),
        }
    }
}

/// Convert a `SendOperationError` into an `SdkError`
impl<E, B> From<SendOperationError> for SdkError<E, B> {
    fn from(err: SendOperationError) -> Self {
        match err {
            SendOperationError::RequestDispatchError(e) => SdkError::DispatchFailure(e),
            SendOperationError::RequestConstructionError(e) => SdkError::ConstructionFailure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::DispatchLayer;
    use crate::map_request::MapRequestLayer;
    use crate::parse_response::ParseResponseLayer;
    use bytes::Bytes;
    use http::header::HeaderName;
    use http::HeaderValue;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use smithy_http::operation::{Operation, Request};
    use smithy_http::response::ParseStrictResponse;
    use smithy_http::result::SdkError;
    use std::convert::{Infallible, TryInto};
    use tower::{service_fn, Service, ServiceBuilder};

    /// Creates a stubbed service stack and runs it to validate that all the types line up &
    /// everything is properly wired
    #[tokio::test]
    async fn service_stack() {
        #[derive(Clone)]
        struct AddHeader;
        impl MapRequest for AddHeader {
            type Error = Infallible;

            fn apply(&self, request: Request) -> Result<Request, Self::Error> {
                request.augment(|mut req, _| {
                    req.headers_mut()
                        .insert("X-Test", "Value".try_into().unwrap());
                    Ok(req)
                })
            }
        }

        struct TestParseResponse;
        impl ParseStrictResponse for TestParseResponse {
            type Output = Result<String, Infallible>;

            fn parse(&self, _response: &http::Response<Bytes>) -> Self::Output {
                Ok("OK".to_string())
            }
        }

        let http_layer = service_fn(|request: http::Request<SdkBody>| async move {
            if request.headers().contains_key("X-Test") {
                Ok(http::Response::new(SdkBody::from("ok")))
            } else {
                Err("header not set")
            }
        });

        let mut svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<TestParseResponse, ()>::new())
            .layer(MapRequestLayer::for_mapper(AddHeader))
            .layer(DispatchLayer)
            .service(http_layer);
        let req = http::Request::new(SdkBody::from("hello"));
        let req = operation::Request::new(req);
        let req = Operation::new(req, TestParseResponse);
        let resp = svc.call(req).await.expect("Response should succeed");
        assert_eq!(resp.parsed, "OK".to_string())
    }

    #[tokio::test]
    async fn failed_mapping_is_a_construction_failure() {
        #[derive(Clone)]
        struct Reject;
        impl MapRequest for Reject {
            type Error = std::io::Error;

            fn apply(&self, _request: Request) -> Result<Request, Self::Error> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "rejected"))
            }
        }

        struct Unreachable;
        impl ParseStrictResponse for Unreachable {
            type Output = Result<(), Infallible>;

            fn parse(&self, _response: &http::Response<Bytes>) -> Self::Output {
                panic!("no response should be parsed")
            }
        }

        let http_layer = service_fn(|_request: http::Request<SdkBody>| async move {
            Result::<_, Infallible>::Ok(http::Response::new(SdkBody::empty()))
        });
        let mut svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<Unreachable, ()>::new())
            .layer(MapRequestLayer::for_mapper(Reject))
            .layer(DispatchLayer)
            .service(http_layer);
        let mut req = http::Request::new(SdkBody::from("hello"));
        req.headers_mut().insert(
            HeaderName::from_static("x-amz-target"),
            HeaderValue::from_static("CodeBuild_20161006.ListProjects"),
        );
        let req = Operation::new(operation::Request::new(req), Unreachable);
        match svc.call(req).await {
            Err(SdkError::ConstructionFailure(err)) => assert_eq!(err.to_string(), "rejected"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("request should not have been dispatched"),
        }
    }
}

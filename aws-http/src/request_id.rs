/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::{HeaderMap, HeaderValue};
use smithy_http::result::{SdkError, SdkSuccess};

/// Implementers add a function to return an AWS request ID
pub trait RequestId {
    /// Returns the request ID if it's available.
    fn request_id(&self) -> Option<&str>;
}

impl<E, B> RequestId for SdkError<E, B> {
    fn request_id(&self) -> Option<&str> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => {
                extract_request_id(raw.headers())
            }
            _ => None,
        }
    }
}

impl<T, B> RequestId for SdkSuccess<T, B> {
    fn request_id(&self) -> Option<&str> {
        extract_request_id(self.raw.headers())
    }
}

impl RequestId for smithy_types::Error {
    fn request_id(&self) -> Option<&str> {
        smithy_types::Error::request_id(self)
    }
}

/// Extracts a request ID from HTTP response headers
///
/// AWS JSON services send `x-amzn-requestid`; `x-amz-request-id` is accepted as a fallback.
pub fn extract_request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .or_else(|| headers.get("x-amz-request-id"))
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use crate::request_id::{extract_request_id, RequestId};
    use http::{HeaderMap, HeaderValue};
    use smithy_http::result::SdkError;

    #[test]
    fn test_extract_request_id() {
        let mut headers = HeaderMap::new();
        assert_eq!(None, extract_request_id(&headers));

        headers.append(
            "x-amz-request-id",
            HeaderValue::from_static("some-request-id"),
        );
        assert_eq!(Some("some-request-id"), extract_request_id(&headers));

        headers.append(
            "x-amzn-requestid",
            HeaderValue::from_static("other-request-id"),
        );
        assert_eq!(Some("other-request-id"), extract_request_id(&headers));
    }

    #[test]
    fn test_request_id_sdk_error() {
        let with_request_id = http::Response::builder()
            .header("x-amzn-requestid", "b6e2e1a1-5e1a-4b5a-9e0c-1d2f3a4b5c6d")
            .body("")
            .unwrap();
        let err: SdkError<(), &str> = SdkError::ServiceError {
            err: (),
            raw: with_request_id,
        };
        assert_eq!(
            Some("b6e2e1a1-5e1a-4b5a-9e0c-1d2f3a4b5c6d"),
            err.request_id()
        );

        let err: SdkError<(), &str> = SdkError::DispatchFailure("timeout".into());
        assert_eq!(None, err.request_id());
    }

    #[test]
    fn test_request_id_generic_error() {
        let err = smithy_types::Error::builder()
            .code("InvalidInputException")
            .request_id("abc-123")
            .build();
        assert_eq!(Some("abc-123"), RequestId::request_id(&err));
    }
}

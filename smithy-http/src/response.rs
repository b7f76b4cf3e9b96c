/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;

/// `ParseHttpResponse` is a generic trait for parsing structured data from HTTP responses.
///
/// It is designed to be nearly infinitely flexible, because `Output` is unconstrained, it can be
/// used to support event streams, S3 streaming responses, regular request-response style
/// operations, as well as any other HTTP-based protocol that we manage to come up with.
///
/// The split between `parse_unloaded` and `parse_loaded` enables keeping the parsing code pure
/// and sync whenever possible and delegating the process of actually reading the HTTP response
/// to the caller when the required behavior is simply "read to the end."
///
/// It also enables this critical and core trait to avoid being async, and it makes code that
/// uses the trait easier to test.
pub trait ParseHttpResponse<B> {
    /// Output type of the HttpResponse.
    ///
    /// For request/response style operations, this is typically something like:
    /// `Result<ListBuildsOutput, ListBuildsError>`
    type Output;

    /// Parse an HTTP request without reading the body. If the body must be provided to proceed,
    /// return `None`
    ///
    /// This exists to serve APIs like S3::GetObject where the body is passed directly into the
    /// response and consumed by the client. However, even in the case of S3::GetObject, errors
    /// require reading the entire body.
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP request from a fully loaded body. This is for standard request/response style
    /// APIs like ListBuilds
    ///
    /// Using an explicit body type of Bytes here is a conscious decision. If you _really_ need
    /// to precisely control how the data is loaded into memory (eg. by using `bytes::Buf`),
    /// implement your own `ParseHttpResponse`
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience Trait for non-streaming APIs
///
/// `ParseStrictResponse` enables operations that _never_ need to stream the body incrementally to
/// have cleaner implementations. There is a blanket implementation
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut http::Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::response::{ParseHttpResponse, ParseStrictResponse};
    use bytes::Bytes;

    #[test]
    fn strict_responses_always_load_the_body() {
        struct Status;
        impl ParseStrictResponse for Status {
            type Output = u16;
            fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                response.status().as_u16()
            }
        }

        let mut unloaded = http::Response::new(SdkBody::from("data"));
        assert_eq!(
            ParseHttpResponse::<SdkBody>::parse_unloaded(&Status, &mut unloaded),
            None
        );
        let loaded = http::Response::builder()
            .status(202)
            .body(Bytes::from_static(b"data"))
            .unwrap();
        assert_eq!(
            ParseHttpResponse::<SdkBody>::parse_loaded(&Status, &loaded),
            202
        );
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Every AWS JSON request is fully
/// serialized before dispatch, so the body is always held in memory. It can be cloned for retries
/// and read by request signers before it is sent.
///
/// For handling responses, the type of the body will be controlled by the HTTP stack.
pub struct SdkBody {
    inner: Option<Bytes>,
    // set once the body has been polled to completion, `bytes()` is no longer available
    taken: bool,
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody {
            inner: Some(Bytes::new()),
            taken: false,
        }
    }

    /// Returns the in-memory contents of the body, or `None` once the body has been read.
    pub fn bytes(&self) -> Option<&[u8]> {
        match (&self.inner, self.taken) {
            (Some(bytes), false) => Some(bytes.as_ref()),
            _ => None,
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        self.bytes().map(|bytes| SdkBody::from(Bytes::copy_from_slice(bytes)))
    }

    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|bytes| bytes.len() as u64)
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        self.taken = true;
        match self.inner.take() {
            Some(bytes) if !bytes.is_empty() => Poll::Ready(Some(Ok(bytes))),
            _ => Poll::Ready(None),
        }
    }
}

impl fmt::Debug for SdkBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("SdkBody");
        match self.bytes() {
            Some(bytes) => fmt.field("bytes", &String::from_utf8_lossy(bytes)),
            None => fmt.field("bytes", &"<taken>"),
        };
        fmt.finish()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody {
            inner: Some(bytes),
            taken: false,
        }
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        self.inner.as_ref().map(|bytes| bytes.is_empty()).unwrap_or(true)
    }

    fn size_hint(&self) -> http_body::SizeHint {
        let len = self.inner.as_ref().map(|bytes| bytes.len()).unwrap_or(0);
        http_body::SizeHint::with_exact(len as u64)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[tokio::test]
    async fn body_is_read_once() {
        let mut body = SdkBody::from("{\"projectName\":\"x\"}");
        assert_eq!(body.content_length(), Some(19));
        let cloned = body.try_clone().expect("in-memory bodies can be cloned");

        let data = body.data().await;
        assert_eq!(
            data.expect("one chunk").expect("no error").as_ref(),
            b"{\"projectName\":\"x\"}"
        );
        assert!(body.data().await.is_none());
        assert!(body.bytes().is_none());
        assert!(body.try_clone().is_none());

        assert_eq!(cloned.bytes(), Some(&b"{\"projectName\":\"x\"}"[..]));
    }

    #[test]
    fn empty_body() {
        let body = SdkBody::empty();
        assert!(body.is_end_stream());
        assert_eq!(body.bytes(), Some(&b""[..]));
        assert_eq!(format!("{:?}", body), "SdkBody { bytes: \"\" }");
    }
}

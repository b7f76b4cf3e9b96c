/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use bytes::Bytes;
use smithy_http::middleware::load_response;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::result::{SdkError, SdkSuccess};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{BoxError, Layer, Service};

/// Sends the request half of an [`Operation`] to an inner service and hands the HTTP response
/// to the operation's response handler.
///
/// The inner service is normally a [`DispatchService`](crate::dispatch::DispatchService) sitting
/// on top of the connector.
#[derive(Clone)]
pub struct ParseResponseService<S, O, R> {
    inner: S,
    _handler: PhantomData<(O, R)>,
}

/// Layer producing a [`ParseResponseService`] for operations with handler `O` and retry policy `R`.
#[derive(Default)]
pub struct ParseResponseLayer<O, R> {
    _handler: PhantomData<(O, R)>,
}

impl<O, R> ParseResponseLayer<O, R> {
    pub fn new() -> Self {
        ParseResponseLayer {
            _handler: PhantomData,
        }
    }
}

impl<S, O, R> Layer<S> for ParseResponseLayer<O, R>
where
    S: Service<operation::Request>,
{
    type Service = ParseResponseService<S, O, R>;

    fn layer(&self, inner: S) -> Self::Service {
        ParseResponseService {
            inner,
            _handler: PhantomData,
        }
    }
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>>>>;

// `O` parses a response into `Result<T, E>`, `B` is the body type of the inner service and `R`
// is carried along for the retry layer above.
impl<S, O, T, E, B, R> tower::Service<operation::Operation<O, R>> for ParseResponseService<S, O, R>
where
    S: Service<operation::Request, Response = http::Response<B>, Error = SendOperationError>,
    S::Future: 'static,
    B: http_body::Body + Unpin + From<Bytes> + 'static,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>> + 'static,
    T: 'static,
    E: 'static,
{
    type Response = SdkSuccess<T, B>;
    type Error = SdkError<E, B>;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: Operation<O, R>) -> Self::Future {
        let (request, parts) = req.into_request_response();
        let handler = parts.response_handler;
        let response = self.inner.call(request);
        Box::pin(async move {
            let response = response.await.map_err(|err| {
                tracing::debug!(error = %err, "request was not sent");
                SdkError::from(err)
            })?;
            load_response(response, &handler).await
        })
    }
}

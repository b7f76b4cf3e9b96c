/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use smithy_http::middleware::MapRequest;
use smithy_http::operation;
use pin_project::pin_project;
use std::future::{ready, Future, Ready};
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{BoxError, Layer, Service};

/// Tower service for [`MapRequest`](smithy_http::middleware::MapRequest)
///
/// A mapping failure short-circuits the stack and is reported as a construction error since the
/// request was never sent.
#[derive(Clone)]
pub struct MapRequestService<S, M> {
    inner: S,
    mapper: M,
}

#[pin_project(project = MapRequestFutureProj)]
pub enum MapRequestFuture<F, T> {
    Inner(#[pin] F),
    Ready(#[pin] Ready<Result<T, SendOperationError>>),
}

impl<F, T> Future for MapRequestFuture<F, T>
where
    F: Future<Output = Result<T, SendOperationError>>,
{
    type Output = Result<T, SendOperationError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            MapRequestFutureProj::Inner(inner) => inner.poll(cx),
            MapRequestFutureProj::Ready(ready) => ready.poll(cx),
        }
    }
}

impl<S, M> Service<operation::Request> for MapRequestService<S, M>
where
    S: Service<operation::Request, Error = SendOperationError>,
    M: MapRequest,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = MapRequestFuture<S::Future, S::Response>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        match self.mapper.apply(req) {
            Ok(req) => MapRequestFuture::Inner(self.inner.call(req)),
            Err(err) => {
                let err: BoxError = err.into();
                tracing::debug!(error = %err, "request middleware failed");
                MapRequestFuture::Ready(ready(Err(
                    SendOperationError::RequestConstructionError(err),
                )))
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct MapRequestLayer<M> {
    mapper: M,
}

impl<M> MapRequestLayer<M> {
    pub fn for_mapper(mapper: M) -> Self {
        MapRequestLayer { mapper }
    }
}

impl<S, M> Layer<S> for MapRequestLayer<M>
where
    M: Clone,
{
    type Service = MapRequestService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        MapRequestService {
            inner,
            mapper: self.mapper.clone(),
        }
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::BoxError;
use hyper::client::{HttpConnector, ResponseFuture};
use hyper_tls::HttpsConnector;
use smithy_http::body::SdkBody;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::util::BoxCloneService;
use tower::{Service, ServiceExt};

type DynFuture = Pin<Box<dyn Future<Output = Result<http::Response<hyper::Body>, BoxError>> + Send>>;

/// A good base connection type for most use cases
///
/// This supports two options:
/// 1. HTTPS via hyper
/// 2. Any other connector, boxed (eg. a [`TestConnection`](crate::test_connection::TestConnection))
#[derive(Clone)]
pub struct Standard(Connector);

#[derive(Clone)]
enum Connector {
    Https(hyper::Client<HttpsConnector<HttpConnector>, SdkBody>),
    Dyn(BoxCloneService<http::Request<SdkBody>, http::Response<hyper::Body>, BoxError>),
}

impl Standard {
    /// An https connection backed by hyper and native-tls
    pub fn https() -> Self {
        let https = HttpsConnector::new();
        Standard(Connector::Https(hyper::Client::builder().build::<_, SdkBody>(https)))
    }

    /// Wrap any connector that can dispatch an `http::Request<SdkBody>`
    pub fn new<S>(conn: S) -> Self
    where
        S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
            + Clone
            + Send
            + 'static,
        S::Error: Into<BoxError>,
        S::Future: Send + 'static,
    {
        Standard(Connector::Dyn(BoxCloneService::new(
            conn.map_err(|err| err.into()),
        )))
    }
}

impl fmt::Debug for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Connector::Https(_) => f.write_str("Standard(Https)"),
            Connector::Dyn(_) => f.write_str("Standard(Dyn)"),
        }
    }
}

impl Service<http::Request<SdkBody>> for Standard {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = StandardFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        match &mut self.0 {
            Connector::Https(https) => https.poll_ready(cx).map_err(|err| err.into()),
            Connector::Dyn(conn) => conn.poll_ready(cx),
        }
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        match &mut self.0 {
            Connector::Https(https) => StandardFuture::Https(https.call(req)),
            Connector::Dyn(conn) => StandardFuture::Dyn(conn.call(req)),
        }
    }
}

#[pin_project::pin_project(project = FutProj)]
pub enum StandardFuture {
    Https(#[pin] ResponseFuture),
    Dyn(#[pin] DynFuture),
}

impl Future for StandardFuture {
    type Output = Result<http::Response<hyper::Body>, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            FutProj::Https(fut) => fut.poll(cx).map_err(|err| err.into()),
            FutProj::Dyn(dyn_fut) => dyn_fut.poll(cx),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::conn::Standard;
    use smithy_http::body::SdkBody;
    use tower::{Service, ServiceExt};

    #[tokio::test]
    async fn dyn_connector_dispatches() {
        let inner = tower::service_fn(|req: http::Request<SdkBody>| async move {
            let body = req.body().bytes().unwrap_or_default().to_vec();
            Ok::<_, std::convert::Infallible>(http::Response::new(hyper::Body::from(body)))
        });
        let mut conn = Standard::new(inner);
        assert_eq!(format!("{:?}", conn), "Standard(Dyn)");
        let resp = conn
            .ready()
            .await
            .expect("ready")
            .call(http::Request::new(SdkBody::from("{}")))
            .await
            .expect("dispatched");
        let body = hyper::body::to_bytes(resp.into_body()).await.expect("body");
        assert_eq!(body.as_ref(), b"{}");
    }
}

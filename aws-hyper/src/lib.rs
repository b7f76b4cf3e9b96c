/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod conn;
mod retry;
#[cfg(feature = "test-util")]
pub mod test_connection;

pub use retry::RetryConfig;

use crate::conn::Standard;
use crate::retry::RetryHandlerFactory;
use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use aws_sig_auth::middleware::SigV4SigningStage;
use aws_sig_auth::signer::SigV4Signer;
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::retry::ClassifyResponse;
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::map_request::MapRequestLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use smithy_types::retry::ProvideErrorKind;
use std::error::Error;
use std::fmt::Debug;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::Instrument;

type BoxError = Box<dyn Error + Send + Sync>;
pub type StandardClient = Client<conn::Standard>;

pub type SdkError<E> = smithy_http::result::SdkError<E, hyper::Body>;
pub type SdkSuccess<T> = smithy_http::result::SdkSuccess<T, hyper::Body>;

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`Client::https()`](Client::https). For testing & other more advanced use cases, a custom
/// connector may be used via [`Client::new(connector)`](Client::new).
///
/// The internal connector must implement the following trait bound to be used to dispatch requests:
/// ```rust,ignore
///    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
///        + Send
///        + Clone
///        + 'static,
///    S::Error: Into<BoxError> + Send + Sync + 'static,
///    S::Future: Send + 'static,
/// ```
#[derive(Debug)]
pub struct Client<S> {
    inner: S,
    retry_handler: RetryHandlerFactory,
}

impl<S> Client<S> {
    /// Construct a new `Client` with a custom connector
    pub fn new(connector: S) -> Self {
        Client {
            inner: connector,
            retry_handler: RetryHandlerFactory::new(RetryConfig::default()),
        }
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_handler.with_config(retry_config);
        self
    }
}

impl Client<Standard> {
    /// Construct an `https` based client
    pub fn https() -> StandardClient {
        Client {
            inner: Standard::https(),
            retry_handler: RetryHandlerFactory::new(RetryConfig::default()),
        }
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + Clone + 'static,
        T: 'static,
        E: Error + ProvideErrorKind + 'static,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, R, E, Retry>(
        &self,
        input: Operation<O, Retry>,
    ) -> Result<SdkSuccess<R>, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<R, E>> + Send + Clone + 'static,
        R: 'static,
        E: Error + ProvideErrorKind + 'static,
        Retry: ClassifyResponse<SdkSuccess<R>, SdkError<E>>,
    {
        let span = match input.metadata() {
            Some(metadata) => tracing::debug_span!(
                "dispatch",
                service = %metadata.service(),
                operation = %metadata.name()
            ),
            None => tracing::debug_span!("dispatch"),
        };
        let signer = MapRequestLayer::for_mapper(SigV4SigningStage::new(SigV4Signer::new()));
        let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage);
        let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
        let inner = self.inner.clone();
        let mut svc = ServiceBuilder::new()
            .retry(self.retry_handler.new_handler())
            .layer(ParseResponseLayer::<O, Retry>::new())
            .layer(user_agent)
            .layer(endpoint_resolver)
            .layer(signer)
            .layer(DispatchLayer::new())
            .service(inner);
        async move {
            let result = svc.ready().await?.call(input).await;
            if let Err(err) = &result {
                tracing::debug!(error = %DisplayErr(err), "operation failed");
            }
            result
        }
        .instrument(span)
        .await
    }
}

struct DisplayErr<'a, E, B>(&'a smithy_http::result::SdkError<E, B>);

impl<E: Error, B: Debug> std::fmt::Display for DisplayErr<'_, E, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            smithy_http::result::SdkError::ServiceError { err, raw } => {
                write!(f, "service error ({}): {}", raw.status(), err)
            }
            smithy_http::result::SdkError::ResponseError { err, raw } => {
                write!(f, "unparseable response ({}): {}", raw.status(), err)
            }
            smithy_http::result::SdkError::ConstructionFailure(err) => {
                write!(f, "construction failure: {}", err)
            }
            smithy_http::result::SdkError::DispatchFailure(err) => {
                write!(f, "dispatch failure: {}", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Client;

    #[test]
    fn construct_default_client() {
        let _ = Client::https();
    }

    #[test]
    fn client_debug() {
        let client = Client::new(());
        assert!(format!("{:?}", client).contains("Client"));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use thiserror::Error;

/// Name of an operation and of the service it belongs to, used for logging
#[derive(Clone, Debug)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Parts<H, R> {
    pub response_handler: H,
    pub retry_policy: R,
    pub metadata: Option<Metadata>,
}

/// An error occurred while turning an operation input into an HTTP request
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid field in input: {field} (details: {details})")]
    InvalidField {
        field: &'static str,
        details: String,
    },
    #[error("{field} was missing")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    #[error("failed to construct the HTTP request: {0}")]
    InvalidRequest(#[from] http::Error),
    #[error("error during request construction: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// A fully built request, its response parser, and the policy that decides whether it is retried
pub struct Operation<H, R> {
    request: Request,
    parts: Parts<H, R>,
}

impl<H, R> Operation<H, R> {
    pub fn into_request_response(self) -> (Request, Parts<H, R>) {
        (self.request, self.parts)
    }

    pub fn from_parts(request: Request, parts: Parts<H, R>) -> Self {
        Self { request, parts }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn with_retry_policy<R2>(self, retry_policy: R2) -> Operation<H, R2> {
        Operation {
            request: self.request,
            parts: Parts {
                response_handler: self.parts.response_handler,
                retry_policy,
                metadata: self.parts.metadata,
            },
        }
    }

    pub fn retry_policy(&self) -> &R {
        &self.parts.retry_policy
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn config_mut(&mut self) -> RefMut<'_, PropertyBag> {
        self.request.config_mut()
    }

    pub fn config(&self) -> Ref<'_, PropertyBag> {
        self.request.config()
    }

    /// Clones the operation for a retry attempt. Fails when the request body cannot be replayed.
    pub fn try_clone(&self) -> Option<Self>
    where
        H: Clone,
        R: Clone,
    {
        let request = self.request.try_clone()?;
        Some(Self {
            request,
            parts: self.parts.clone(),
        })
    }
}

impl<H> Operation<H, ()> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                retry_policy: (),
                metadata: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see `Request::augment`).
    ///
    /// The bag is shared between the clones made for retries.
    configuration: Rc<RefCell<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            configuration: Rc::new(RefCell::new(PropertyBag::new())),
        }
    }

    /// Transforms the HTTP request with access to the property bag.
    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let configuration: &mut PropertyBag = &mut self.configuration.as_ref().borrow_mut();
            f(self.inner, configuration)?
        };
        Ok(Request {
            inner,
            configuration: self.configuration,
        })
    }

    pub fn config_mut(&mut self) -> RefMut<'_, PropertyBag> {
        self.configuration.as_ref().borrow_mut()
    }

    pub fn config(&self) -> Ref<'_, PropertyBag> {
        self.configuration.as_ref().borrow()
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::new(cloned_body);
        *cloned_request.method_mut() = self.inner.method().clone();
        *cloned_request.uri_mut() = self.inner.uri().clone();
        *cloned_request.version_mut() = self.inner.version();
        *cloned_request.headers_mut() = self.inner.headers().clone();
        Some(Request {
            inner: cloned_request,
            configuration: self.configuration.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Rc<RefCell<PropertyBag>>) {
        (self.inner, self.configuration)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{Metadata, Operation, Request};
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::Uri;

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("https://codebuild.us-east-1.amazonaws.com/"))
                .method("POST")
                .header(CONTENT_LENGTH, 2)
                .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                .body(SdkBody::from("{}"))
                .expect("valid request"),
        );
        request.config_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(
            request.uri(),
            &Uri::from_static("https://codebuild.us-east-1.amazonaws.com/")
        );
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-amz-json-1.1"
        );
        assert_eq!(request.body().bytes().unwrap(), b"{}");
        assert_eq!(config.as_ref().borrow().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn clones_share_configuration() {
        let request = Request::new(http::Request::new(SdkBody::from("{}")));
        let mut op = Operation::new(request, ()).with_metadata(Metadata::new("StartBuild", "codebuild"));
        let clone = op.try_clone().expect("cloneable");
        op.config_mut().insert(5_u32);
        assert_eq!(clone.config().get::<u32>(), Some(&5));
        assert_eq!(clone.metadata().map(|m| m.name()), Some("StartBuild"));
        assert_eq!(clone.metadata().map(|m| m.service()), Some("codebuild"));
    }

    #[test]
    fn augment_can_fail() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        let result: Result<Request, &str> = request.augment(|_req, props| {
            props.insert(1_u8);
            Err("no region")
        });
        assert_eq!(result.err(), Some("no region"));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// A parsed operation output together with the HTTP response it was read from.
///
/// `B` is the body type of the connector, eg. `hyper::Body` for real traffic.
#[derive(Debug)]
pub struct SdkSuccess<O, B> {
    pub raw: http::Response<B>,
    pub parsed: O,
}

/// Every way an operation call can fail, from building the request to parsing the reply.
///
/// `E` is the operation's error type, eg. `StartBuildError`, and `B` the connector's body type.
#[derive(Debug)]
pub enum SdkError<E, B> {
    /// The request could not be built, eg. a required member was missing. Nothing was sent.
    ConstructionFailure(BoxError),

    /// No HTTP response was received. The request may or may not have reached the service.
    DispatchFailure(BoxError),

    /// A response arrived but could not be read as either an output or an error.
    ResponseError {
        raw: http::Response<B>,
        err: BoxError,
    },

    /// The service answered with an error, modeled or not.
    ServiceError { raw: http::Response<B>, err: E },
}

impl<E, B> SdkError<E, B> {
    /// The error the service returned, when the failure came from the service.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl<E, B> Display for SdkError<E, B>
where
    E: Error,
    B: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "failed to dispatch request: {}", err),
            SdkError::ResponseError { err, raw } => {
                write!(f, "unreadable response (status {}): {}", raw.status(), err)
            }
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E, B> Error for SdkError<E, B>
where
    E: Error + 'static,
    B: Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::operation::BuildError;
    use crate::result::SdkError;

    #[derive(Debug)]
    struct NotFound;

    impl std::fmt::Display for NotFound {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "ResourceNotFoundException")
        }
    }

    impl std::error::Error for NotFound {}

    #[test]
    fn display_names_the_failing_stage() {
        let err: SdkError<NotFound, &str> = SdkError::ConstructionFailure(
            BuildError::MissingField {
                field: "projectName",
                details: "required",
            }
            .into(),
        );
        assert!(err.to_string().starts_with("failed to construct request"));
        assert!(err.service_error().is_none());

        let err: SdkError<NotFound, &str> = SdkError::ServiceError {
            raw: http::Response::builder().status(400).body("").unwrap(),
            err: NotFound,
        };
        assert_eq!(err.to_string(), "service error: ResourceNotFoundException");
        assert!(err.service_error().is_some());
    }
}

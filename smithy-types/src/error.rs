/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error type carried by every service error, modeled or not

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[derive(Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn builder_sets_fields() {
        let err = Error::builder()
            .code("InvalidInputException")
            .message("projectName is required")
            .request_id("abc-123")
            .build();
        assert_eq!(err.code(), Some("InvalidInputException"));
        assert_eq!(err.message(), Some("projectName is required"));
        assert_eq!(err.request_id(), Some("abc-123"));
        assert_eq!(
            format!("{}", err),
            r#"Error { code: "InvalidInputException", message: "projectName is required", request_id: "abc-123" }"#
        );
    }

    #[test]
    fn empty_error_displays() {
        assert_eq!(format!("{}", Error::default()), "Error");
    }
}

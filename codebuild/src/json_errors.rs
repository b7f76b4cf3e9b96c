/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::header::ToStrError;
use http::{HeaderMap, HeaderValue, Response};
use smithy_json::deserialize::token::skip_value;
use smithy_json::deserialize::{json_token_iter, Error as DeserializeError, Token};
use std::borrow::Cow;

// Error codes may be namespaced (`com.amazonaws.service#InvalidInputException`) or carry a
// suffix after a colon (`InvalidInputException:http://internal.amazon.com/`). Only the shape
// name is matched against modeled errors.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

struct ErrorBody<'a> {
    code: Option<Cow<'a, str>>,
    message: Option<Cow<'a, str>>,
}

fn parse_error_body(bytes: &[u8]) -> Result<ErrorBody<'_>, DeserializeError> {
    let mut tokens = json_token_iter(bytes).peekable();
    let (mut typ, mut code, mut message) = (None, None, None);
    if let Some(Token::StartObject { .. }) = tokens.next().transpose()? {
        loop {
            match tokens.next().transpose()? {
                Some(Token::EndObject { .. }) => break,
                Some(Token::ObjectKey { key, .. }) => {
                    if let Some(Ok(Token::ValueString { value, .. })) = tokens.peek() {
                        match key.as_escaped_str() {
                            "code" => code = Some(value.to_unescaped()?),
                            "__type" => typ = Some(value.to_unescaped()?),
                            "message" | "Message" | "errorMessage" => {
                                message = Some(value.to_unescaped()?)
                            }
                            _ => {}
                        }
                    }
                    skip_value(&mut tokens)?;
                }
                _ => {
                    return Err(DeserializeError::custom(
                        "expected object key or end object",
                    ))
                }
            }
        }
        if tokens.next().is_some() {
            return Err(DeserializeError::custom(
                "found more JSON tokens after completing parsing",
            ));
        }
    }
    Ok(ErrorBody {
        code: code.or(typ),
        message,
    })
}

fn error_type_from_header(headers: &HeaderMap<HeaderValue>) -> Result<Option<&str>, ToStrError> {
    headers
        .get("X-Amzn-Errortype")
        .map(|v| v.to_str())
        .transpose()
}

/// Reads the code, message and request id shared by every error response
///
/// The `X-Amzn-Errortype` header takes precedence over `code` or `__type` in the body.
pub fn parse_generic_error(
    response: &Response<Bytes>,
) -> Result<smithy_types::Error, DeserializeError> {
    let ErrorBody { code, message } = parse_error_body(response.body().as_ref())?;
    let header_code = error_type_from_header(response.headers())
        .map_err(|_| DeserializeError::custom("X-Amzn-Errortype header is not valid UTF-8"))?;

    let mut err_builder = smithy_types::Error::builder();
    if let Some(code) = header_code.or_else(|| code.as_deref()).map(sanitize_error_code) {
        err_builder.code(code);
    }
    if let Some(message) = message {
        err_builder.message(message);
    }
    if let Some(request_id) = aws_http::request_id::extract_request_id(response.headers()) {
        err_builder.request_id(request_id);
    }
    Ok(err_builder.build())
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_error_body, parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use std::borrow::Cow;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            smithy_types::Error::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn error_type() {
        assert_eq!(
            Some(Cow::Borrowed("FooError")),
            parse_error_body(br#"{ "__type": "FooError" }"#).unwrap().code
        );
    }

    #[test]
    fn code_takes_priority() {
        assert_eq!(
            Some(Cow::Borrowed("BarError")),
            parse_error_body(br#"{ "code": "BarError", "__type": "FooError" }"#)
                .unwrap()
                .code
        );
    }

    #[test]
    fn ignore_unrecognized_fields() {
        assert_eq!(
            Some(Cow::Borrowed("FooError")),
            parse_error_body(br#"{ "__type": "FooError", "asdf": 5, "fdsa": {}, "foo": "1" }"#)
                .unwrap()
                .code
        );
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }

    #[test]
    fn header_takes_priority_over_body() {
        let response = http::Response::builder()
            .header("X-Amzn-Errortype", "HeaderError:http://internal.amazon.com/")
            .body(Bytes::from_static(br#"{ "__type": "BodyError" }"#))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap().code(),
            Some("HeaderError")
        );
    }

    #[test]
    fn empty_body_has_no_code() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn alternate_message_keys() {
        for body in &[
            &br#"{ "__type": "E", "Message": "capitalized" }"#[..],
            &br#"{ "__type": "E", "errorMessage": "capitalized" }"#[..],
        ] {
            assert_eq!(
                parse_error_body(body).unwrap().message,
                Some(Cow::Borrowed("capitalized"))
            );
        }
    }
}

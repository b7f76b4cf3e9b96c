/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::error::{Error, ErrorReason};
use crate::escape::unescape_string;
use smithy_types::{base64, Blob, Instant, Number};
use std::borrow::Cow;

pub use crate::escape::Error as EscapeError;

/// New-type around `&str` that indicates the string is an escaped JSON string.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct EscapedStr<'a>(&'a str);

impl<'a> EscapedStr<'a> {
    pub fn new(value: &'a str) -> EscapedStr<'a> {
        EscapedStr(value)
    }

    /// Returns the escaped string value
    pub fn as_escaped_str(&self) -> &'a str {
        self.0
    }

    /// Unescapes the string and returns it.
    /// If the string doesn't need unescaping, it will be returned directly.
    pub fn to_unescaped(&self) -> Result<Cow<'a, str>, EscapeError> {
        unescape_string(self.0)
    }
}

/// Byte offset of a token in the input
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Offset(pub usize);

impl Offset {
    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        Error::new(ErrorReason::Custom(msg), Some(self.0))
    }
}

/// Enum representing the different JSON tokens that can be returned by
/// [`json_token_iter`](crate::deserialize::json_token_iter).
#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    StartArray { offset: Offset },
    EndArray { offset: Offset },
    ObjectKey { offset: Offset, key: EscapedStr<'a> },
    StartObject { offset: Offset },
    EndObject { offset: Offset },
    ValueBool { offset: Offset, value: bool },
    ValueNull { offset: Offset },
    ValueNumber { offset: Offset, value: Number },
    ValueString { offset: Offset, value: EscapedStr<'a> },
}

impl<'a> Token<'a> {
    pub fn offset(&self) -> Offset {
        use Token::*;
        *match self {
            StartArray { offset }
            | EndArray { offset }
            | StartObject { offset }
            | EndObject { offset }
            | ValueNull { offset } => offset,
            ObjectKey { offset, .. }
            | ValueBool { offset, .. }
            | ValueNumber { offset, .. }
            | ValueString { offset, .. } => offset,
        }
    }

    /// Builds an error from the token's offset
    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        self.offset().error(msg)
    }
}

macro_rules! expect_fn {
    ($name:ident, $typ:ident) => {
        pub fn $name(token_result: Option<Result<Token<'_>, Error>>) -> Result<(), Error> {
            match token_result.transpose()? {
                Some(Token::$typ { .. }) => Ok(()),
                Some(token) => {
                    Err(token.error(Cow::Borrowed(concat!("expected ", stringify!($typ)))))
                }
                None => Err(Error::new(
                    ErrorReason::Custom(Cow::Borrowed(concat!("expected ", stringify!($typ)))),
                    None,
                )),
            }
        }
    };
}

expect_fn!(expect_start_object, StartObject);
expect_fn!(expect_start_array, StartArray);

/// Expects a boolean or null token and returns its value.
pub fn expect_bool_or_null(token: Option<Result<Token<'_>, Error>>) -> Result<Option<bool>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueBool { value, .. }) => Ok(Some(value)),
        _ => Err(Error::custom("expected null or boolean value")),
    }
}

/// Expects a string or null token. If the value was a string, its **unescaped** value will be returned.
pub fn expect_string_or_null(
    token: Option<Result<Token<'_>, Error>>,
) -> Result<Option<String>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueString { value, .. }) => Ok(Some(value.to_unescaped()?.into_owned())),
        _ => Err(Error::custom("expected null or string value")),
    }
}

/// Expects a number or null token, and if its a number, returns it.
pub fn expect_number_or_null(
    token: Option<Result<Token<'_>, Error>>,
) -> Result<Option<Number>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueNumber { value, .. }) => Ok(Some(value)),
        _ => Err(Error::custom("expected null or number value")),
    }
}

fn expect_integer_or_null<T>(
    token: Option<Result<Token<'_>, Error>>,
    convert: fn(Number) -> Option<T>,
    out_of_range: &'static str,
) -> Result<Option<T>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueNumber { offset, value }) => convert(value)
            .map(Some)
            .ok_or_else(|| offset.error(Cow::Borrowed(out_of_range))),
        _ => Err(Error::custom("expected null or number value")),
    }
}

/// Expects null or a number that fits in an `i32`.
pub fn expect_i32_or_null(token: Option<Result<Token<'_>, Error>>) -> Result<Option<i32>, Error> {
    expect_integer_or_null(token, Number::to_i32, "integer does not fit in 32 bits")
}

/// Expects null or a number that fits in an `i64`.
pub fn expect_i64_or_null(token: Option<Result<Token<'_>, Error>>) -> Result<Option<i64>, Error> {
    expect_integer_or_null(token, Number::to_i64, "integer does not fit in 64 bits")
}

/// Expects a timestamp encoded as (possibly fractional) epoch seconds, or null.
pub fn expect_timestamp_or_null(
    token: Option<Result<Token<'_>, Error>>,
) -> Result<Option<Instant>, Error> {
    Ok(expect_number_or_null(token)
        .map_err(|_| Error::custom("expected null or epoch seconds timestamp"))?
        .map(|number| match number {
            Number::PosInt(seconds) => Instant::from_epoch_seconds(seconds as i64),
            Number::NegInt(seconds) => Instant::from_epoch_seconds(seconds),
            Number::Float(seconds) => Instant::from_f64(seconds),
        }))
}

/// Expects a base64 encoded blob or null.
pub fn expect_blob_or_null(token: Option<Result<Token<'_>, Error>>) -> Result<Option<Blob>, Error> {
    Ok(match expect_string_or_null(token)? {
        Some(value) => Some(Blob::new(
            base64::decode(&value).map_err(|_| Error::custom("failed to decode base64 blob"))?,
        )),
        None => None,
    })
}

/// Skips an entire value in the token stream. Errors if it isn't a value.
pub fn skip_value<'a>(
    tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>,
) -> Result<(), Error> {
    let mut depth = 0_usize;
    loop {
        match tokens.next().transpose()? {
            Some(Token::StartObject { .. }) | Some(Token::StartArray { .. }) => depth += 1,
            Some(Token::EndObject { .. }) | Some(Token::EndArray { .. }) => {
                if depth == 0 {
                    return Err(Error::custom("expected value"));
                }
                depth -= 1;
            }
            Some(Token::ObjectKey { .. }) if depth > 0 => continue,
            Some(Token::ValueNull { .. })
            | Some(Token::ValueBool { .. })
            | Some(Token::ValueNumber { .. })
            | Some(Token::ValueString { .. }) => {}
            _ => return Err(Error::custom("expected value")),
        }
        if depth == 0 {
            return Ok(());
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::deserialize::error::ErrorReason::UnexpectedToken;
    use crate::deserialize::json_token_iter;

    pub fn start_array<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::StartArray {
            offset: Offset(offset),
        }))
    }

    pub fn end_array<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::EndArray {
            offset: Offset(offset),
        }))
    }

    pub fn start_object<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::StartObject {
            offset: Offset(offset),
        }))
    }

    pub fn end_object<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::EndObject {
            offset: Offset(offset),
        }))
    }

    pub fn object_key(offset: usize, key: &str) -> Option<Result<Token<'_>, Error>> {
        Some(Ok(Token::ObjectKey {
            offset: Offset(offset),
            key: EscapedStr::new(key),
        }))
    }

    pub fn value_bool<'a>(offset: usize, boolean: bool) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueBool {
            offset: Offset(offset),
            value: boolean,
        }))
    }

    pub fn value_number<'a>(offset: usize, number: Number) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueNumber {
            offset: Offset(offset),
            value: number,
        }))
    }

    pub fn value_null<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueNull {
            offset: Offset(offset),
        }))
    }

    pub fn value_string(offset: usize, string: &str) -> Option<Result<Token<'_>, Error>> {
        Some(Ok(Token::ValueString {
            offset: Offset(offset),
            value: EscapedStr::new(string),
        }))
    }

    #[test]
    fn skip_simple_value() {
        let mut tokens = json_token_iter(b"null true");
        skip_value(&mut tokens).unwrap();
        assert_eq!(value_bool(5, true), tokens.next());
    }

    #[test]
    fn skip_unknown_fields() {
        let mut tokens = json_token_iter(
            br#"{"projects": ["a"], "nextToken": {"unknown": [1, {"deep": []}]}, "after": false}"#,
        );
        assert_eq!(start_object(0), tokens.next());
        assert_eq!(object_key(1, "projects"), tokens.next());
        skip_value(&mut tokens).unwrap();
        assert_eq!(object_key(20, "nextToken"), tokens.next());
        skip_value(&mut tokens).unwrap();
        assert_eq!(object_key(65, "after"), tokens.next());
        assert_eq!(value_bool(74, false), tokens.next());
        assert_eq!(end_object(79), tokens.next());
    }

    #[test]
    fn mismatched_braces() {
        assert_eq!(
            Err(Error::new(UnexpectedToken(']', "'}', ','"), Some(10))),
            skip_value(&mut json_token_iter(br#"[{"foo": 5]}"#))
        );
        assert_eq!(
            Err(Error::new(UnexpectedToken(']', "'}', ','"), Some(9))),
            skip_value(&mut json_token_iter(br#"{"foo": 5]}"#))
        );
        assert_eq!(
            Err(Error::new(UnexpectedToken('}', "']', ','"), Some(4))),
            skip_value(&mut json_token_iter(br#"[5,6}"#))
        );
    }

    #[test]
    fn skip_rejects_end_tokens() {
        assert_eq!(
            Err(Error::custom("expected value")),
            skip_value(&mut vec![end_object(0).unwrap()].into_iter())
        );
        assert_eq!(
            Err(Error::custom("expected value")),
            skip_value(&mut Vec::new().into_iter())
        );
    }

    #[test]
    fn test_expect_start_object() {
        assert_eq!(
            Err(Error::new(
                ErrorReason::Custom("expected StartObject".into()),
                Some(2)
            )),
            expect_start_object(value_bool(2, true))
        );
        assert_eq!(Ok(()), expect_start_object(start_object(0)));
    }

    #[test]
    fn test_expect_string_or_null() {
        assert_eq!(Ok(None), expect_string_or_null(value_null(0)));
        assert_eq!(
            Ok(Some("test\n".to_string())),
            expect_string_or_null(value_string(0, "test\\n"))
        );
        assert_eq!(
            Err(Error::custom("expected null or string value")),
            expect_string_or_null(value_bool(0, true))
        );
    }

    #[test]
    fn test_expect_scalars_or_null() {
        assert_eq!(Ok(Some(true)), expect_bool_or_null(value_bool(0, true)));
        assert_eq!(Ok(None), expect_bool_or_null(value_null(0)));
        assert_eq!(
            Ok(Some(Number::PosInt(5))),
            expect_number_or_null(value_number(0, Number::PosInt(5)))
        );
        assert_eq!(
            Err(Error::custom("expected null or number value")),
            expect_number_or_null(value_string(0, "5"))
        );
    }

    #[test]
    fn test_expect_integers_or_null() {
        assert_eq!(Ok(Some(50)), expect_i32_or_null(value_number(0, Number::PosInt(50))));
        assert_eq!(Ok(None), expect_i32_or_null(value_null(0)));
        assert_eq!(
            Err(Error::new(
                ErrorReason::Custom("integer does not fit in 32 bits".into()),
                Some(16)
            )),
            expect_i32_or_null(value_number(16, Number::PosInt(4294967297)))
        );
        assert_eq!(
            Ok(Some(4294967294)),
            expect_i64_or_null(value_number(0, Number::PosInt(4294967294)))
        );
        assert_eq!(
            Err(Error::custom("expected null or number value")),
            expect_i64_or_null(value_string(0, "1"))
        );
    }

    #[test]
    fn test_expect_blob_or_null() {
        assert_eq!(
            Ok(Some(Blob::new(b"%PDF-1.4".to_vec()))),
            expect_blob_or_null(value_string(0, "JVBERi0xLjQ="))
        );
        assert_eq!(Ok(None), expect_blob_or_null(value_null(0)));
        assert_eq!(
            Err(Error::custom("failed to decode base64 blob")),
            expect_blob_or_null(value_string(0, "%%%"))
        );
    }

    #[test]
    fn test_expect_timestamp_or_null() {
        assert_eq!(
            Ok(Some(Instant::from_epoch_seconds(1576540098))),
            expect_timestamp_or_null(value_number(0, Number::PosInt(1576540098)))
        );
        assert_eq!(
            Ok(Some(Instant::from_secs_and_nanos(1576540098, 500_000_000))),
            expect_timestamp_or_null(value_number(0, Number::Float(1576540098.5)))
        );
        assert_eq!(Ok(None), expect_timestamp_or_null(value_null(0)));
        assert_eq!(
            Err(Error::custom("expected null or epoch seconds timestamp")),
            expect_timestamp_or_null(value_string(0, "yesterday"))
        );
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Pull-based JSON tokenizer
//!
//! [`json_token_iter`] yields one [`Token`] at a time without building a document tree. Strings
//! are borrowed from the input in their escaped form; callers decide whether to unescape them.

mod error;
pub mod token;

pub use error::{Error, ErrorReason};
pub use token::{EscapedStr, Offset, Token};

use smithy_types::Number;

/// Creates a JSON token iterator over `input`. Multiple top-level values are yielded in sequence.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: Vec::new(),
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Initial,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    fn state(&self) -> State {
        self.state_stack.last().copied().unwrap_or(State::Initial)
    }

    fn replace_state(&mut self, state: State) {
        self.state_stack.pop();
        self.state_stack.push(state);
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn peek_expect(&self) -> Result<u8, Error> {
        self.peek_byte().ok_or_else(|| self.error(ErrorReason::UnexpectedEos))
    }

    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    fn error_at(&self, offset: usize, reason: ErrorReason) -> Error {
        Error::new(reason, Some(offset))
    }

    fn error(&self, reason: ErrorReason) -> Error {
        self.error_at(self.index, reason)
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek_byte() {
            self.index += 1;
        }
    }

    fn read_value(&mut self) -> Result<Token<'a>, Error> {
        self.discard_whitespace();
        let offset = Offset(self.index);
        match self.peek_expect()? {
            b'{' => {
                self.advance();
                self.state_stack.push(State::ObjectFirstKeyOrEnd);
                Ok(Token::StartObject { offset })
            }
            b'[' => {
                self.advance();
                self.state_stack.push(State::ArrayFirstValueOrEnd);
                Ok(Token::StartArray { offset })
            }
            b'"' => Ok(Token::ValueString {
                offset,
                value: EscapedStr::new(self.read_string()?),
            }),
            b'n' => {
                self.expect_literal(b"null")?;
                Ok(Token::ValueNull { offset })
            }
            b't' => {
                self.expect_literal(b"true")?;
                Ok(Token::ValueBool {
                    offset,
                    value: true,
                })
            }
            b'f' => {
                self.expect_literal(b"false")?;
                Ok(Token::ValueBool {
                    offset,
                    value: false,
                })
            }
            b'-' | b'0'..=b'9' => Ok(Token::ValueNumber {
                offset,
                value: self.read_number()?,
            }),
            byte => Err(self.error(ErrorReason::UnexpectedToken(
                byte.into(),
                "'{', '[', '\"', 'null', 'true', 'false', <number>",
            ))),
        }
    }

    fn expect_literal(&mut self, literal: &'static [u8]) -> Result<(), Error> {
        if self.input[self.index..].starts_with(literal) {
            self.index += literal.len();
            Ok(())
        } else {
            Err(self.error(ErrorReason::ExpectedLiteral(
                String::from_utf8_lossy(literal).into(),
            )))
        }
    }

    /// Reads a quoted string and returns its contents without the quotes, still escaped
    fn read_string(&mut self) -> Result<&'a str, Error> {
        debug_assert_eq!(self.peek_byte(), Some(b'"'));
        self.advance();
        let start = self.index;
        loop {
            match self.peek_expect()? {
                b'"' => {
                    let value = std::str::from_utf8(&self.input[start..self.index])
                        .map_err(|_| self.error_at(start, ErrorReason::InvalidUtf8))?;
                    self.advance();
                    return Ok(value);
                }
                b'\\' => {
                    self.advance();
                    match self.peek_expect()? {
                        b'\\' | b'/' | b'"' | b'b' | b'f' | b'n' | b'r' | b't' | b'u' => {
                            self.advance()
                        }
                        byte => return Err(self.error(ErrorReason::InvalidEscape(byte.into()))),
                    }
                }
                byte @ 0x00..=0x1F => {
                    return Err(self.error(ErrorReason::UnexpectedControlCharacter(byte)))
                }
                _ => self.advance(),
            }
        }
    }

    fn read_number(&mut self) -> Result<Number, Error> {
        let start = self.index;
        while let Some(b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9') = self.peek_byte() {
            self.index += 1;
        }
        let invalid = || self.error_at(start, ErrorReason::InvalidNumber);
        let text = std::str::from_utf8(&self.input[start..self.index]).map_err(|_| invalid())?;
        let is_float = text.contains(|chr| matches!(chr, '.' | 'e' | 'E'));
        if !is_float {
            let integer = if text.starts_with('-') {
                text.parse::<i64>().ok().map(Number::NegInt)
            } else {
                text.parse::<u64>().ok().map(Number::PosInt)
            };
            if let Some(integer) = integer {
                return Ok(integer);
            }
        }
        // integers that overflow 64 bits are still valid JSON numbers
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Number::Float)
            .ok_or_else(invalid)
    }

    fn state_array_first_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b']' => self.end_array(),
            _ => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
        }
    }

    fn state_array_next_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b']' => self.end_array(),
            b',' => {
                self.advance();
                self.read_value()
            }
            byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "']', ','"))),
        }
    }

    fn state_object_first_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b'}' => self.end_object(),
            b'"' => self.read_object_key(),
            byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "'}', '\"'"))),
        }
    }

    fn state_object_next_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b'}' => self.end_object(),
            b',' => {
                self.advance();
                self.discard_whitespace();
                match self.peek_expect()? {
                    b'"' => self.read_object_key(),
                    byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "'\"'"))),
                }
            }
            byte => Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "'}', ','"))),
        }
    }

    fn state_object_field_value(&mut self) -> Result<Token<'a>, Error> {
        self.replace_state(State::ObjectNextKeyOrEnd);
        self.read_value()
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        let key = self.read_string()?;
        self.discard_whitespace();
        match self.peek_expect()? {
            b':' => self.advance(),
            byte => return Err(self.error(ErrorReason::UnexpectedToken(byte.into(), "':'"))),
        }
        self.replace_state(State::ObjectFieldValue);
        Ok(Token::ObjectKey {
            offset,
            key: EscapedStr::new(key),
        })
    }

    fn end_array(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        self.advance();
        self.state_stack.pop();
        Ok(Token::EndArray { offset })
    }

    fn end_object(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        self.advance();
        self.state_stack.pop();
        Ok(Token::EndObject { offset })
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        debug_assert!(self.index <= self.input.len());
        self.discard_whitespace();
        if self.index == self.input.len() {
            if self.state_stack.is_empty() {
                return None;
            }
            // an unterminated array or object: report it once, then stay exhausted
            self.state_stack.clear();
            return Some(Err(self.error(ErrorReason::UnexpectedEos)));
        }
        let result = match self.state() {
            State::Initial => self.read_value(),
            State::ArrayFirstValueOrEnd => self.state_array_first_value_or_end(),
            State::ArrayNextValueOrEnd => self.state_array_next_value_or_end(),
            State::ObjectFirstKeyOrEnd => self.state_object_first_key_or_end(),
            State::ObjectNextKeyOrEnd => self.state_object_next_key_or_end(),
            State::ObjectFieldValue => self.state_object_field_value(),
        };
        if result.is_err() {
            // the stream is unusable after an error
            self.index = self.input.len();
            self.state_stack.clear();
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::token::test::{
        end_array, end_object, object_key, start_array, start_object, value_bool, value_null,
        value_number, value_string,
    };
    use super::{json_token_iter, Error, ErrorReason};
    use proptest::prelude::*;
    use smithy_types::Number;

    #[test]
    fn test_empty() {
        assert!(json_token_iter(b"").next().is_none());
        assert!(json_token_iter(b" \r\n\t ").next().is_none());
    }

    #[test]
    fn test_scalars() {
        let mut iter = json_token_iter(b"null true false 5 -3 1.5 \"hi\"");
        assert_eq!(value_null(0), iter.next());
        assert_eq!(value_bool(5, true), iter.next());
        assert_eq!(value_bool(10, false), iter.next());
        assert_eq!(value_number(16, Number::PosInt(5)), iter.next());
        assert_eq!(value_number(18, Number::NegInt(-3)), iter.next());
        assert_eq!(value_number(21, Number::Float(1.5)), iter.next());
        assert_eq!(value_string(25, "hi"), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_object() {
        let mut iter = json_token_iter(br#"{ "type": "GITHUB", "gitCloneDepth" : 1, "x": [null, {}] }"#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(2, "type"), iter.next());
        assert_eq!(value_string(10, "GITHUB"), iter.next());
        assert_eq!(object_key(20, "gitCloneDepth"), iter.next());
        assert_eq!(value_number(38, Number::PosInt(1)), iter.next());
        assert_eq!(object_key(41, "x"), iter.next());
        assert_eq!(start_array(46), iter.next());
        assert_eq!(value_null(47), iter.next());
        assert_eq!(start_object(53), iter.next());
        assert_eq!(end_object(54), iter.next());
        assert_eq!(end_array(55), iter.next());
        assert_eq!(end_object(57), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn strings_stay_escaped() {
        let mut iter = json_token_iter(r#"["a\"b\\cé"]"#.as_bytes());
        assert_eq!(start_array(0), iter.next());
        assert_eq!(value_string(1, r#"a\"b\\cé"#), iter.next());
        assert_eq!(end_array(12), iter.next());
    }

    #[test]
    fn errors() {
        assert_eq!(
            Some(Err(Error::new(ErrorReason::UnexpectedEos, Some(5)))),
            json_token_iter(b"[1, 2").nth(3)
        );
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::ExpectedLiteral("null".into()),
                Some(0)
            ))),
            json_token_iter(b"nul").next()
        );
        assert_eq!(
            Some(Err(Error::new(ErrorReason::InvalidNumber, Some(0)))),
            json_token_iter(b"1.2.3").next()
        );
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedControlCharacter(b'\n'),
                Some(3)
            ))),
            json_token_iter(b"\"ab\ncd\"").next()
        );
        assert_eq!(
            Some(Err(Error::new(ErrorReason::InvalidEscape('x'), Some(2)))),
            json_token_iter(br#""\x""#).next()
        );
        assert_eq!(
            Some(Err(Error::new(
                ErrorReason::UnexpectedToken(']', "'}', '\"'"),
                Some(1)
            ))),
            json_token_iter(b"{]").nth(1)
        );
    }

    #[test]
    fn fused_after_error() {
        let mut iter = json_token_iter(b"[x, 1]");
        assert_eq!(start_array(0), iter.next());
        assert!(matches!(iter.next(), Some(Err(_))));
        assert_eq!(None, iter.next());
    }

    #[test]
    fn large_integers_become_floats() {
        let mut iter = json_token_iter(b"18446744073709551616");
        assert_eq!(
            value_number(0, Number::Float(18446744073709551616.0)),
            iter.next()
        );
    }

    proptest! {
        #[test]
        fn tokenizes_serde_json_output(
            s in ".*",
            n in proptest::num::i64::ANY,
            b in proptest::bool::ANY
        ) {
            let document = serde_json::json!({ "s": s.clone(), "n": n, "b": b, "list": [s, null] });
            let text = serde_json::to_string(&document).unwrap();
            let tokens: Result<Vec<_>, Error> = json_token_iter(text.as_bytes()).collect();
            let tokens = tokens.unwrap();
            prop_assert_eq!(tokens.len(), 13);
        }
    }
}

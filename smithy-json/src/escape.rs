/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    ExpectedSurrogatePair(String),
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    InvalidUtf8,
    UnexpectedEndOfString,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            ExpectedSurrogatePair(low) => write!(
                f,
                "expected a UTF-16 surrogate pair, but got {} as the low word",
                low
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04X}\\u{:04X}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{}", escape),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON string"),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

/// Escapes a string for embedding in a JSON string value.
pub fn escape_string(value: &str) -> Cow<'_, str> {
    match value
        .bytes()
        .position(|byte| matches!(byte, 0..=0x1F | b'"' | b'\\'))
    {
        None => Cow::Borrowed(value),
        Some(first) => {
            let mut escaped = String::with_capacity(value.len() + 8);
            escaped.push_str(&value[..first]);
            for chr in value[first..].chars() {
                match chr {
                    '"' => escaped.push_str("\\\""),
                    '\\' => escaped.push_str("\\\\"),
                    '\u{08}' => escaped.push_str("\\b"),
                    '\u{0C}' => escaped.push_str("\\f"),
                    '\n' => escaped.push_str("\\n"),
                    '\r' => escaped.push_str("\\r"),
                    '\t' => escaped.push_str("\\t"),
                    '\u{00}'..='\u{1F}' => escaped.push_str(&format!("\\u{:04x}", chr as u32)),
                    _ => escaped.push(chr),
                }
            }
            Cow::Owned(escaped)
        }
    }
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, it directly returns the reference.
pub fn unescape_string(value: &str) -> Result<Cow<'_, str>, Error> {
    match value.bytes().position(|byte| byte == b'\\') {
        None => Ok(Cow::Borrowed(value)),
        Some(first) => {
            let bytes = value.as_bytes();
            let mut unescaped = Vec::with_capacity(bytes.len());
            unescaped.extend_from_slice(&bytes[..first]);
            let mut index = first;
            while index < bytes.len() {
                if bytes[index] != b'\\' {
                    unescaped.push(bytes[index]);
                    index += 1;
                    continue;
                }
                let escape = *bytes.get(index + 1).ok_or(Error::UnexpectedEndOfString)?;
                let simple = match escape {
                    b'"' => Some(b'"'),
                    b'\\' => Some(b'\\'),
                    b'/' => Some(b'/'),
                    b'b' => Some(0x08),
                    b'f' => Some(0x0C),
                    b'n' => Some(b'\n'),
                    b'r' => Some(b'\r'),
                    b't' => Some(b'\t'),
                    b'u' => None,
                    other => return Err(Error::InvalidEscapeCharacter(other.into())),
                };
                match simple {
                    Some(byte) => {
                        unescaped.push(byte);
                        index += 2;
                    }
                    None => index += read_unicode_escapes(&bytes[index..], &mut unescaped)?,
                }
            }
            String::from_utf8(unescaped)
                .map(Cow::Owned)
                .map_err(|_| Error::InvalidUtf8)
        }
    }
}

/// Reads a single `\uXXXX` escape from the start of `bytes`
fn read_codepoint(bytes: &[u8]) -> Result<u16, Error> {
    if bytes.len() < 6 {
        return Err(Error::UnexpectedEndOfString);
    }
    if &bytes[0..2] != b"\\u" {
        // the leading codepoint is always prefixed, so this can only be a missing low surrogate
        return Err(Error::ExpectedSurrogatePair(
            String::from_utf8_lossy(&bytes[0..6]).into(),
        ));
    }
    let hex = std::str::from_utf8(&bytes[2..6]).map_err(|_| Error::InvalidUtf8)?;
    // `from_str_radix` tolerates a leading `+`, JSON does not
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(Error::InvalidUnicodeEscape(hex.into()));
    }
    u16::from_str_radix(hex, 16).map_err(|_| Error::InvalidUnicodeEscape(hex.into()))
}

/// Decodes one codepoint escape, or two when they form a UTF-16 surrogate pair, appending the
/// UTF-8 encoding to `into`. Returns the number of bytes consumed.
fn read_unicode_escapes(bytes: &[u8], into: &mut Vec<u8>) -> Result<usize, Error> {
    let high = read_codepoint(bytes)?;
    let (consumed, chr) = if high & 0xFC00 == 0xD800 {
        let low = read_codepoint(&bytes[6..])?;
        if low & 0xFC00 != 0xDC00 {
            return Err(Error::InvalidSurrogatePair(high, low));
        }
        let codepoint = 0x10000 + ((high as u32 - 0xD800) << 10) + (low as u32 - 0xDC00);
        let chr = std::char::from_u32(codepoint).ok_or(Error::InvalidSurrogatePair(high, low))?;
        (12, chr)
    } else {
        let chr = std::char::from_u32(high as u32).ok_or_else(|| {
            Error::InvalidUnicodeEscape(String::from_utf8_lossy(&bytes[2..6]).into())
        })?;
        (6, chr)
    };
    let mut buffer = [0; 4];
    into.extend_from_slice(chr.encode_utf8(&mut buffer).as_bytes());
    Ok(consumed)
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, Error};
    use proptest::proptest;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\n", escape_string("foo\r\n").as_ref());
        assert_eq!(r#"foo\\bar"#, escape_string(r#"foo\bar"#).as_ref());
        assert_eq!(
            r#"\bf\fo\to\r\n"#,
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
        assert_eq!("h\u{e9}llo\\n", escape_string("h\u{e9}llo\n").as_ref());
    }

    #[test]
    fn unescape() {
        assert_eq!("", unescape_string("").unwrap());
        assert_eq!("https://github.com/x/y", unescape_string("https:\\/\\/github.com\\/x\\/y").unwrap());
        assert_eq!("\"quoted\"\n", unescape_string("\\\"quoted\\\"\\n").unwrap());
        assert_eq!("\u{e9}", unescape_string("\\u00e9").unwrap());
        assert_eq!("\u{1F600}", unescape_string("\\ud83d\\ude00").unwrap());
    }

    #[test]
    fn unescape_failures() {
        assert_eq!(
            Err(Error::InvalidEscapeCharacter('q')),
            unescape_string("\\q")
        );
        assert_eq!(Err(Error::UnexpectedEndOfString), unescape_string("foo\\"));
        assert_eq!(Err(Error::UnexpectedEndOfString), unescape_string("\\u12"));
        assert_eq!(
            Err(Error::InvalidUnicodeEscape("+123".into())),
            unescape_string("\\u+123")
        );
        assert_eq!(
            Err(Error::ExpectedSurrogatePair("abcdef".into())),
            unescape_string("\\ud83dabcdef")
        );
        assert_eq!(
            Err(Error::InvalidSurrogatePair(0xD83D, 0x0041)),
            unescape_string("\\ud83d\\u0041")
        );
    }

    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!(r#""{}""#, escape_string(&s))
            )
        }

        #[test]
        fn escape_then_unescape(s in ".*") {
            let escaped = escape_string(&s);
            assert_eq!(s, unescape_string(&escaped).unwrap());
        }
    }
}

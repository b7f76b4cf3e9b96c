/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::Request;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("header `{forbidden}` is forbidden but was present")]
    ForbiddenHeader { forbidden: String, found: String },
    #[error("body did not match. Hint:\n{hint}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

fn header_value<B>(request: &Request<B>, key: &str) -> String {
    // multi-valued headers are compared comma-delimited
    request
        .headers()
        .get_all(key)
        .iter()
        .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value = header_value(request, key);
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
                found: header_value(request, key),
            });
        }
    }
    Ok(())
}

pub fn require_headers<B>(
    request: &Request<B>,
    required_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in required_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Compare two JSON documents structurally: key order and whitespace are ignored.
///
/// An empty expected body matches an empty or `{}` actual body.
pub fn validate_body(actual_body: &[u8], expected_body: &str) -> Result<(), ProtocolTestFailure> {
    let actual_str = std::str::from_utf8(actual_body).map_err(|_| {
        ProtocolTestFailure::InvalidBodyFormat {
            expected: "UTF-8 encoded text".to_owned(),
            found: format!("{:?}", actual_body),
        }
    })?;
    if expected_body.is_empty() && (actual_str.is_empty() || actual_str == "{}") {
        return Ok(());
    }
    let expected_json: serde_json::Value =
        serde_json::from_str(expected_body).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{} (expected body)", e),
        })?;
    let actual_json: serde_json::Value =
        serde_json::from_str(actual_str).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{}: {}", e, actual_str),
        })?;
    assert_json_eq_no_panic(&actual_json, &expected_json).map_err(|hint| {
        ProtocolTestFailure::BodyDidNotMatch {
            expected: expected_body.to_string(),
            found: actual_str.to_string(),
            hint,
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::{forbid_headers, require_headers, validate_body, validate_headers, ProtocolTestFailure};
    use http::Request;

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Amz-Target", "CodeBuild_20161006.StartBuild")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("x-amz-target", "CodeBuild_20161006.StartBuild")])
            .expect("header present");
        validate_headers(&request, &[("X-Amz-Target", "codebuild_20161006.startbuild")])
            .expect_err("values are case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_forbid_and_require_headers() {
        let request = Request::builder()
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .body(())
            .unwrap();
        require_headers(&request, &["content-type"]).expect("present");
        require_headers(&request, &["x-amz-target"]).expect_err("absent");
        forbid_headers(&request, &["x-amz-target"]).expect("absent");
        assert_eq!(
            forbid_headers(&request, &["content-type"]),
            Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: "content-type".to_owned(),
                found: "application/x-amz-json-1.1".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   5 }"#;
        validate_body(actual.as_bytes(), expected).expect("inputs matched as JSON");

        let expected = r#"{"type":"GITHUB","location":"https://github.com/x/y"}"#;
        let actual = r#"{"location":"https://github.com/x/y","type":"GITHUB"}"#;
        validate_body(actual.as_bytes(), expected).expect("key order is ignored");

        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   6 }"#;
        validate_body(actual.as_bytes(), expected).expect_err("bodies do not match");
    }

    #[test]
    fn test_empty_bodies() {
        validate_body(b"{}", "").expect("empty expected body matches {}");
        validate_body(b"", "").expect("empty bodies match");
        validate_body(b"not json", "{}").expect_err("actual body is not json");
    }
}

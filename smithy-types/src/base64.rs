/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A thin wrapper over `base64`

/// Decode `input` from base64 using the standard base64 alphabet
pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, ::base64::DecodeError> {
    ::base64::decode(input.as_ref())
}

/// Encode `input` into base64 using the standard base64 alphabet
pub fn encode(input: impl AsRef<[u8]>) -> String {
    ::base64::encode(input)
}

#[cfg(test)]
mod test {
    use super::{decode, encode};

    #[test]
    fn pdf_magic_round_trips() {
        assert_eq!(encode(b"%PDF-1.4"), "JVBERi0xLjQ=");
        assert_eq!(decode("JVBERi0xLjQ=").unwrap(), b"%PDF-1.4");
        assert!(decode("not base64!").is_err());
    }
}

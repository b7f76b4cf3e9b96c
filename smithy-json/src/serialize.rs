/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Streaming JSON writer
//!
//! Values are appended directly to a `String`. The writers never buffer, so a field that is
//! never written never appears in the output.

use crate::escape::escape_string;
use smithy_types::instant::Format;
use smithy_types::{Instant, Number};

/// Writes a single JSON value. Obtained from [`JsonObjectWriter::key`] or [`JsonArrayWriter::value`].
pub struct JsonValueWriter<'a> {
    output: &'a mut String,
}

impl<'a> JsonValueWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        JsonValueWriter { output }
    }

    /// Writes a null value.
    pub fn null(self) {
        self.output.push_str("null");
    }

    /// Writes the boolean `value`.
    pub fn boolean(self, value: bool) {
        self.output.push_str(if value { "true" } else { "false" });
    }

    /// Writes a string `value`, escaping it as needed.
    pub fn string(self, value: &str) {
        append_string_unchecked(self.output, &escape_string(value));
    }

    /// Writes a string `value` without escaping it.
    pub fn string_unchecked(self, value: &str) {
        append_string_unchecked(self.output, value);
    }

    /// Writes a number `value`. NaN and infinities become `null`.
    pub fn number(self, value: Number) {
        match value {
            Number::PosInt(value) => self.output.push_str(itoa::Buffer::new().format(value)),
            Number::NegInt(value) => self.output.push_str(itoa::Buffer::new().format(value)),
            Number::Float(value) if value.is_finite() => {
                self.output
                    .push_str(ryu::Buffer::new().format_finite(value))
            }
            Number::Float(_) => self.output.push_str("null"),
        }
    }

    /// Writes an `Instant`. Epoch seconds are written as a bare number, other formats as strings.
    pub fn instant(self, instant: &Instant, format: Format) {
        let formatted = instant.fmt(format);
        match format {
            Format::EpochSeconds => self.output.push_str(&formatted),
            Format::DateTime => self.string(&formatted),
        }
    }

    /// Starts an array.
    pub fn start_array(self) -> JsonArrayWriter<'a> {
        JsonArrayWriter::new(self.output)
    }

    /// Starts an object.
    pub fn start_object(self) -> JsonObjectWriter<'a> {
        JsonObjectWriter::new(self.output)
    }
}

pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes `key` and returns a writer for its value. The value MUST be written.
    pub fn key(&mut self, key: &str) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        append_string_unchecked(self.json, &escape_string(key));
        self.json.push(':');
        JsonValueWriter::new(self.json)
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }
}

pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    /// Returns a writer for the next element. The value MUST be written.
    pub fn value(&mut self) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        JsonValueWriter::new(self.json)
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }
}

fn append_string_unchecked(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(value);
    json.push('"');
}

#[cfg(test)]
mod tests {
    use super::{JsonArrayWriter, JsonObjectWriter, JsonValueWriter};
    use proptest::proptest;
    use smithy_types::instant::Format;
    use smithy_types::{Instant, Number};

    #[test]
    fn empty() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", &output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", &output);
    }

    #[test]
    fn fields_are_written_in_call_order() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("type").string("GITHUB");
        object.key("location").string("https://github.com/x/y");
        object.finish();
        assert_eq!(
            r#"{"type":"GITHUB","location":"https://github.com/x/y"}"#,
            &output
        );
    }

    #[test]
    fn nested() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("name").string("my-project");
        object.key("badgeEnabled").boolean(false);
        object.key("timeoutInMinutes").number(Number::PosInt(60));
        object.key("nothing").null();
        let mut tags = object.key("tags").start_array();
        {
            let mut tag = tags.value().start_object();
            tag.key("key").string("team");
            tag.key("value").string("build\ttools");
            tag.finish();
        }
        tags.value().start_array().finish();
        tags.finish();
        object.key("empty").start_object().finish();
        object.finish();
        assert_eq!(
            r#"{"name":"my-project","badgeEnabled":false,"timeoutInMinutes":60,"nothing":null,"tags":[{"key":"team","value":"build\ttools"},[]],"empty":{}}"#,
            &output
        );
    }

    #[test]
    fn instants() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array
            .value()
            .instant(&Instant::from_f64(1576540098.5), Format::EpochSeconds);
        array
            .value()
            .instant(&Instant::from_epoch_seconds(1576540098), Format::DateTime);
        array.finish();
        assert_eq!(r#"[1576540098.5,"2019-12-16T23:48:18Z"]"#, &output);
    }

    #[test]
    fn numbers() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array.value().number(Number::NegInt(-65000));
        array.value().number(Number::Float(1.5));
        array.value().number(Number::Float(f64::NAN));
        array.value().number(Number::Float(f64::NEG_INFINITY));
        array.finish();
        assert_eq!("[-65000,1.5,null,null]", &output);
    }

    proptest! {
        #[test]
        fn strings_match_serde_json(s in ".*") {
            let mut output = String::new();
            JsonValueWriter::new(&mut output).string(&s);
            assert_eq!(serde_json::to_string(&s).unwrap(), output);
        }

        #[test]
        fn integers_match_serde_json(value in proptest::num::i64::ANY) {
            let mut output = String::new();
            JsonValueWriter::new(&mut output).number(Number::from(value));
            assert_eq!(serde_json::to_string(&value).unwrap(), output);
        }
    }
}

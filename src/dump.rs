//! Canonical serialization of a [JsonValue] back to text.
//!
//! The output is the compact form: no whitespace between tokens, object members in
//! source order, strings escaped with the inverse of the lexer's escape map. Emission
//! runs in two passes - an exact size computation followed by the write - so the output
//! buffer is allocated exactly once.
use std::fmt::Write;

use crate::dom::JsonValue;

/// Serialize a value to its canonical compact textual form
pub fn dump(value: &JsonValue) -> String {
    let mut out = String::with_capacity(measure(value));
    emit(value, &mut out);
    out
}

/// Compute the exact number of bytes [emit] will produce for `value`
fn measure(value: &JsonValue) -> usize {
    match value {
        JsonValue::Null => 4,
        JsonValue::Bool(true) => 4,
        JsonValue::Bool(false) => 5,
        JsonValue::Number(number) => number_width(*number),
        JsonValue::String(text) => string_width(text),
        JsonValue::Array(values) => {
            let separators = values.len().saturating_sub(1);
            2 + separators + values.iter().map(measure).sum::<usize>()
        }
        JsonValue::Object(pairs) => {
            let separators = pairs.len().saturating_sub(1);
            2 + separators
                + pairs
                    .iter()
                    .map(|(key, value)| string_width(key) + 1 + measure(value))
                    .sum::<usize>()
        }
    }
}

fn emit(value: &JsonValue, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(true) => out.push_str("true"),
        JsonValue::Bool(false) => out.push_str("false"),
        JsonValue::Number(number) => {
            let _ = write!(out, "{}", number);
        }
        JsonValue::String(text) => emit_string(text, out),
        JsonValue::Array(values) => {
            out.push('[');
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                emit(value, out);
            }
            out.push(']');
        }
        JsonValue::Object(pairs) => {
            out.push('{');
            for (index, (key, value)) in pairs.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                emit_string(key, out);
                out.push(':');
                emit(value, out);
            }
            out.push('}');
        }
    }
}

fn emit_string(text: &str, out: &mut String) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn string_width(text: &str) -> usize {
    2 + text.chars().map(escaped_width).sum::<usize>()
}

fn escaped_width(c: char) -> usize {
    match c {
        '"' | '\\' | '\u{0008}' | '\u{000C}' | '\n' | '\r' | '\t' => 2,
        c if (c as u32) < 0x20 => 6,
        c => c.len_utf8(),
    }
}

/// Numbers are rendered with the shortest representation that round-trips to the same
/// double; the counting pass writes through a length adapter instead of allocating.
fn number_width(number: f64) -> usize {
    struct ByteCounter(usize);
    impl Write for ByteCounter {
        fn write_str(&mut self, s: &str) -> std::fmt::Result {
            self.0 += s.len();
            Ok(())
        }
    }
    let mut counter = ByteCounter(0);
    let _ = write!(&mut counter, "{}", number);
    counter.0
}

impl std::fmt::Display for JsonValue {
    /// The canonical compact form, identical to [dump]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(measure(self));
        emit(self, &mut out);
        f.write_str(&out)
    }
}

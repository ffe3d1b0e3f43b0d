//! Diagnostic-notation renderer.
//!
//! Produces a debug-oriented textual form, not meant to be re-parsed:
//! hex-quoted byte strings, escaped text, `tag(child)` for tagged
//! values, named simple constants, and floats that always carry a
//! decimal point.

use std::fmt::Write as _;

use crate::constants::{SIMPLE_FALSE, SIMPLE_NULL, SIMPLE_TRUE, SIMPLE_UNDEFINED};
use crate::item::DataItem;

/// Renders a value in diagnostic notation.
pub fn dump(item: &DataItem) -> String {
    let mut out = String::new();
    write_item(&mut out, item);
    out
}

impl std::fmt::Display for DataItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&dump(self))
    }
}

fn write_item(out: &mut String, item: &DataItem) {
    match item {
        DataItem::Unsigned(value) => {
            let _ = write!(out, "{value}");
        }
        DataItem::Negative(value) => {
            if *value == u64::MAX {
                // -1 - u64::MAX does not fit any machine integer.
                out.push_str("-18446744073709551616");
            } else {
                let _ = write!(out, "-{}", value + 1);
            }
        }
        DataItem::Binary(bytes) => {
            out.push_str("h'");
            for byte in bytes {
                let _ = write!(out, "{byte:02x}");
            }
            out.push('\'');
        }
        DataItem::Text(text) => write_text(out, text),
        DataItem::Array(items) => {
            out.push('[');
            for (i, child) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_item(out, child);
            }
            out.push(']');
        }
        DataItem::Map(entries) => {
            out.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_item(out, key);
                out.push_str(": ");
                write_item(out, value);
            }
            out.push('}');
        }
        DataItem::Tagged(tag, child) => {
            let _ = write!(out, "{tag}(");
            write_item(out, child);
            out.push(')');
        }
        DataItem::Simple(code) => match *code {
            SIMPLE_FALSE => out.push_str("false"),
            SIMPLE_TRUE => out.push_str("true"),
            SIMPLE_NULL => out.push_str("null"),
            SIMPLE_UNDEFINED => out.push_str("undefined"),
            other => {
                let _ = write!(out, "simple({other})");
            }
        },
        DataItem::Float(value) => write_float(out, *value),
    }
}

fn write_text(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn write_float(out: &mut String, value: f64) {
    if value.is_infinite() {
        out.push_str(if value < 0.0 { "-Infinity" } else { "Infinity" });
    } else if value.is_nan() {
        out.push_str("NaN");
    } else {
        let mut text = format!("{value}");
        // Keep a decimal point visible even for whole values.
        if !text.contains('.') {
            match text.find('e') {
                Some(pos) => text.insert_str(pos, ".0"),
                None => text.push_str(".0"),
            }
        }
        out.push_str(&text);
    }
}

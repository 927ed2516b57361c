//! Converts a `JsonValue` back into JSON text.
//!
//! [`serialize`] produces the canonical single-line form, which is what
//! round-trip guarantees are stated against. [`serialize_pretty`] produces
//! an indented form for humans.
use crate::value::{Array, JsonValue, Object};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The indentation string used for pretty-printing (two spaces).
const INDENT: &str = "  ";

/// Serializes a value into its canonical text.
///
/// Containers put one space inside the brackets and after every comma
/// (`[ 1, 2 ]`, `{ "a": 1 }`); empty containers are `[  ]` and `{  }`.
/// Numbers use the shortest text that parses back to the same `f64`.
///
/// # Examples
/// ```
/// use canon_json::{parse, serialize};
///
/// let value = parse(r#"{"a":[1,2,3]}"#).unwrap();
/// assert_eq!(serialize(&value), r#"{ "a": [ 1, 2, 3 ] }"#);
/// ```
#[must_use]
pub fn serialize(value: &JsonValue) -> String {
    let mut output = String::new();
    write_value(value, &mut output);
    output
}

/// Serializes a value into indented, multi-line text.
///
/// Empty containers are written as `[]` and `{}`.
#[must_use]
pub fn serialize_pretty(value: &JsonValue) -> String {
    let mut output = String::new();
    write_value_pretty(value, &mut output, 0);
    output
}

fn write_value(value: &JsonValue, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        JsonValue::Number(n) => write_number(*n, out),
        JsonValue::String(s) => write_string(s, out),
        JsonValue::Array(items) => write_array(items, out),
        JsonValue::Object(members) => write_object(members, out),
    }
}

fn write_array(items: &Array, out: &mut String) {
    if items.is_empty() {
        out.push_str("[  ]");
        return;
    }
    out.push_str("[ ");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_value(item, out);
    }
    out.push_str(" ]");
}

fn write_object(members: &Object, out: &mut String) {
    if members.is_empty() {
        out.push_str("{  }");
        return;
    }
    out.push_str("{ ");
    for (i, (key, value)) in members.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_string(key, out);
        out.push_str(": ");
        write_value(value, out);
    }
    out.push_str(" }");
}

/// Writes the shortest decimal text that reads back as `n`.
///
/// Plain notation is used while the decimal exponent is in `-7 < e < 21`,
/// scientific notation outside of it. Infinities are written as the
/// smallest overflowing literal of their sign, which parses back to the
/// same infinity. NaN has no JSON spelling and is written as `null`.
fn write_number(n: f64, out: &mut String) {
    if n.is_nan() {
        out.push_str("null");
        return;
    }
    if n.is_infinite() {
        out.push_str(if n > 0.0 { "1e309" } else { "-1e309" });
        return;
    }
    let scientific = format!("{n:e}");
    let exponent = scientific
        .rsplit_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);
    if (-6..21).contains(&exponent) {
        out.push_str(&n.to_string());
    } else {
        out.push_str(&scientific);
    }
}

/// Writes an escaped, quoted JSON string.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0000}'..='\u{001F}' => {
                let byte = c as u8;
                out.push_str("\\u00");
                out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
                out.push(HEX_DIGITS[usize::from(byte & 0x0F)] as char);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
}

fn write_value_pretty(value: &JsonValue, out: &mut String, depth: usize) {
    match value {
        JsonValue::Array(items) => write_array_pretty(items, out, depth),
        JsonValue::Object(members) => write_object_pretty(members, out, depth),
        scalar => write_value(scalar, out),
    }
}

fn write_array_pretty(items: &Array, out: &mut String, depth: usize) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }

    let new_depth = depth + 1;
    let indent = INDENT.repeat(new_depth);

    out.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&indent);
        write_value_pretty(item, out, new_depth);
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push(']');
}

fn write_object_pretty(members: &Object, out: &mut String, depth: usize) {
    if members.is_empty() {
        out.push_str("{}");
        return;
    }

    let new_depth = depth + 1;
    let indent = INDENT.repeat(new_depth);

    out.push_str("{\n");
    for (i, (key, value)) in members.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&indent);
        write_string(key, out);
        out.push_str(": ");
        write_value_pretty(value, out, new_depth);
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as SerdeValue;

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(serialize(&JsonValue::Null), "null");
        assert_eq!(serialize(&JsonValue::Bool(true)), "true");
        assert_eq!(serialize(&JsonValue::Bool(false)), "false");
        assert_eq!(serialize(&JsonValue::from("abc")), r#""abc""#);
    }

    #[test]
    fn test_serialize_numbers() {
        let cases: &[(f64, &str)] = &[
            (0.0, "0"),
            (-0.0, "-0"),
            (1.0, "1"),
            (-1.5, "-1.5"),
            (123.45, "123.45"),
            (3.25, "3.25"),
            (1e3, "1000"),
            (0.000_001, "0.000001"),
            (1e-7, "1e-7"),
            (1e20, "100000000000000000000"),
            (1e21, "1e21"),
            (1.234e20, "123400000000000000000"),
            (1.234e-20, "1.234e-20"),
            (1.000_000_000_000_000_2, "1.0000000000000002"),
            (5e-324, "5e-324"),
            (1.797_693_134_862_315_7e308, "1.7976931348623157e308"),
            (-2.225_073_858_507_201_4e-308, "-2.2250738585072014e-308"),
        ];
        for &(n, expected) in cases {
            assert_eq!(serialize(&JsonValue::Number(n)), expected, "{n:e}");
        }
    }

    #[test]
    fn test_serialize_nan_as_null() {
        assert_eq!(serialize(&JsonValue::Number(f64::NAN)), "null");
    }

    #[test]
    fn test_serialize_infinity_as_overflowing_literal() {
        assert_eq!(serialize(&JsonValue::Number(f64::INFINITY)), "1e309");
        assert_eq!(serialize(&JsonValue::Number(f64::NEG_INFINITY)), "-1e309");
    }

    #[test]
    fn test_overflowing_literal_survives_round_trip() {
        for text in ["1e400", "-1e400", "[1e400, { \"n\": -1E+999 }]"] {
            let value = crate::parse(text).unwrap();
            let again = crate::parse(&serialize(&value)).unwrap();
            assert_eq!(again, value, "{text}");
        }
        let inf = crate::parse("-1e400").unwrap();
        let again = crate::parse(&serialize(&inf)).unwrap();
        assert_eq!(again.to_number().to_bits(), f64::NEG_INFINITY.to_bits());
    }

    #[test]
    fn test_serialize_string_escapes() {
        let s = JsonValue::from("\" \\ / \u{0008} \u{000C} \n \r \t");
        assert_eq!(serialize(&s), r#""\" \\ / \b \f \n \r \t""#);

        let control = JsonValue::from("hello\u{0001}world\u{001F}");
        assert_eq!(serialize(&control), r#""hello\u0001world\u001F""#);

        let nul = JsonValue::from("Hello\u{0000}World");
        assert_eq!(serialize(&nul), r#""Hello\u0000World""#);

        let unicode = JsonValue::from("\u{20AC}\u{1D11E}");
        assert_eq!(serialize(&unicode), "\"\u{20AC}\u{1D11E}\"");
    }

    #[test]
    fn test_serialize_containers() {
        assert_eq!(serialize(&JsonValue::array()), "[  ]");
        assert_eq!(serialize(&JsonValue::object()), "{  }");

        let arr = JsonValue::from(vec![
            JsonValue::Null,
            JsonValue::from(false),
            JsonValue::from(true),
            JsonValue::from(123),
            JsonValue::from("abc"),
            JsonValue::from(vec![1, 2, 3]),
        ]);
        assert_eq!(
            serialize(&arr),
            r#"[ null, false, true, 123, "abc", [ 1, 2, 3 ] ]"#
        );

        let obj = JsonValue::from_iter([
            ("n", JsonValue::Null),
            ("o", JsonValue::from_iter([("1", JsonValue::from(1))])),
            ("e", JsonValue::object()),
        ]);
        assert_eq!(serialize(&obj), r#"{ "n": null, "o": { "1": 1 }, "e": {  } }"#);
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let obj = JsonValue::from_iter([
            ("z", JsonValue::from(1)),
            ("a", JsonValue::from(2)),
            ("m", JsonValue::from(3)),
        ]);
        assert_eq!(serialize(&obj), r#"{ "z": 1, "a": 2, "m": 3 }"#);
    }

    #[test]
    fn test_serialize_escapes_keys() {
        let obj = JsonValue::from_iter([("a\"b\n", JsonValue::Null)]);
        assert_eq!(serialize(&obj), r#"{ "a\"b\n": null }"#);
    }

    #[test]
    fn test_output_is_valid_json() {
        let obj = JsonValue::from_iter([
            ("key", JsonValue::from("value\u{0002}")),
            ("items", JsonValue::from(vec![JsonValue::from(1), JsonValue::Null])),
            ("tiny", JsonValue::from(5e-324)),
        ]);
        let parsed: SerdeValue =
            serde_json::from_str(&serialize(&obj)).expect("canonical output should be valid JSON");
        let expected = serde_json::json!({
            "key": "value\u{0002}",
            "items": [1, null],
            "tiny": 5e-324
        });
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_serialize_pretty() {
        let obj = JsonValue::from_iter([
            ("key", JsonValue::from("value")),
            (
                "items",
                JsonValue::from(vec![
                    JsonValue::from(1),
                    JsonValue::Null,
                    JsonValue::from_iter([("sub_key", JsonValue::from(2))]),
                ]),
            ),
            ("admin", JsonValue::from(true)),
        ]);

        let expected = "{\n  \"key\": \"value\",\n  \"items\": [\n    1,\n    null,\n    {\n      \"sub_key\": 2\n    }\n  ],\n  \"admin\": true\n}";
        let pretty = serialize_pretty(&obj);
        assert_eq!(pretty, expected);

        let parsed: SerdeValue =
            serde_json::from_str(&pretty).expect("pretty output should be valid JSON");
        assert_eq!(parsed["items"][2]["sub_key"], 2);
    }

    #[test]
    fn test_serialize_pretty_empty() {
        assert_eq!(serialize_pretty(&JsonValue::object()), "{}");
        assert_eq!(serialize_pretty(&JsonValue::array()), "[]");
        assert_eq!(serialize_pretty(&JsonValue::from(1.5)), "1.5");
    }

    #[test]
    fn test_display_matches_serialize() {
        let value = JsonValue::from(vec![JsonValue::from("x"), JsonValue::from(2)]);
        assert_eq!(value.to_string(), serialize(&value));
    }
}

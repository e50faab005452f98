use serde_yaml::{Number, Value};

pub const NULL_TEXT: &str = "None";
pub const TRUE_TEXT: &str = "True";
pub const FALSE_TEXT: &str = "False";

/**
Returns the xml text of a yaml scalar,
or None if the value is a mapping, a sequence or a tagged value.

| scalar        | text                      |
|---------------|---------------------------|
| string        | unchanged                 |
| integer       | decimal                   |
| float         | `1.5`, `2.0`, `1e20`, `nan`, `inf`, `-inf` |
| true / false  | `True` / `False`          |
| null          | `None`                    |

Scalars are resolved with the yaml 1.2 core schema:
`yes`/`no`/`on`/`off` stay strings, `017` stays the string `017` (not octal 15),
and exponents are written without a sign (`1e20`, not `1e+20`).
*/
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(NULL_TEXT.to_owned()),
        Value::Bool(true) => Some(TRUE_TEXT.to_owned()),
        Value::Bool(false) => Some(FALSE_TEXT.to_owned()),
        Value::Number(number) => Some(number_to_text(number)),
        Value::String(string) => Some(string.to_owned()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

fn number_to_text(number: &Number) -> String {
    if let Some(x) = number.as_i64() {
        x.to_string()
    } else if let Some(x) = number.as_u64() {
        x.to_string()
    } else {
        // Every yaml number fits a f64 once it isn't an integer.
        float_to_text(number.as_f64().unwrap_or(f64::NAN))
    }
}

fn float_to_text(x: f64) -> String {
    if x.is_nan() {
        "nan".to_owned()
    } else if x == f64::INFINITY {
        "inf".to_owned()
    } else if x == f64::NEG_INFINITY {
        "-inf".to_owned()
    } else {
        // Debug keeps the fractional part ("2.0") and the shortest round-trip digits.
        format!("{:?}", x)
    }
}

/**
Characters allowed in xml 1.0 text.
Rust chars are never surrogates, which leaves the C0 controls and U+FFFE/U+FFFF out.
*/
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/**
Human readable kind of a yaml value, for error messages.
*/
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

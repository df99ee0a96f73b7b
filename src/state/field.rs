//! Per-field validators for untrusted JSON
//!
//! Each validator inspects one raw value and reports either a usable value or
//! [`Field::Invalid`]. None of them fail; the caller decides the fallback.

use serde_json::{Map, Value};

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Valid(T),
    Invalid,
}

impl<T> Field<T> {
    /// Take the valid value or fall back to `default`
    pub fn or(self, default: T) -> T {
        match self {
            Field::Valid(value) => value,
            Field::Invalid => default,
        }
    }

    pub fn or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Field::Valid(value) => value,
            Field::Invalid => default(),
        }
    }

    pub fn or_default(self) -> T
    where
        T: Default,
    {
        self.or_else(T::default)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Valid(value) => Some(value),
            Field::Invalid => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Valid(value) => Field::Valid(f(value)),
            Field::Invalid => Field::Invalid,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Valid(v),
            None => Field::Invalid,
        }
    }
}

/// A JSON object
pub fn object(value: Option<&Value>) -> Field<&Map<String, Value>> {
    value.and_then(Value::as_object).into()
}

/// A string with at least one character
pub fn non_empty_string(value: Option<&Value>) -> Field<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Field::Valid(s.clone()),
        _ => Field::Invalid,
    }
}

/// Any JSON array, items untouched
pub fn array(value: Option<&Value>) -> Field<Vec<Value>> {
    match value {
        Some(Value::Array(items)) => Field::Valid(items.clone()),
        _ => Field::Invalid,
    }
}

/// A JSON array, keeping only its string items
///
/// Used for the staff roster: displays render each entry as a name, so a
/// number or object in the list is dropped rather than stored.
pub fn string_array(value: Option<&Value>) -> Field<Vec<String>> {
    match value {
        Some(Value::Array(items)) => Field::Valid(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        ),
        _ => Field::Invalid,
    }
}

/// A finite number, accepting numeric strings the way browsers' `parseFloat` does
pub fn finite_float(value: Option<&Value>) -> Field<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_float_prefix(s),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Field::Valid(n),
        _ => Field::Invalid,
    }
}

/// A non-zero millisecond timestamp, truncated to an integer
pub fn timestamp(value: Option<&Value>) -> Field<i64> {
    let Some(Value::Number(n)) = value else {
        return Field::Invalid;
    };

    if let Some(ms) = n.as_i64() {
        return if ms != 0 { Field::Valid(ms) } else { Field::Invalid };
    }

    match n.as_f64() {
        Some(ms) if ms.is_finite() && ms.trunc() != 0.0 => Field::Valid(ms.trunc() as i64),
        _ => Field::Invalid,
    }
}

/// Parse the longest leading decimal number of `s`, ignoring leading whitespace
///
/// `"25"`, `" 25.5px"` and `"1e1%"` all parse; `"px25"` does not.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it has digits
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_fallbacks() {
        assert_eq!(Field::Valid(3).or(7), 3);
        assert_eq!(Field::<i32>::Invalid.or(7), 7);
        assert_eq!(Field::<i32>::Invalid.or_else(|| 9), 9);
        assert_eq!(Field::Valid(2).map(|v| v * 2), Field::Valid(4));
    }

    #[test]
    fn test_non_empty_string() {
        assert_eq!(non_empty_string(Some(&json!("John"))), Field::Valid("John".to_string()));
        assert_eq!(non_empty_string(Some(&json!(""))), Field::Invalid);
        assert_eq!(non_empty_string(Some(&json!(42))), Field::Invalid);
        assert_eq!(non_empty_string(None), Field::Invalid);
    }

    #[test]
    fn test_array_keeps_items_verbatim() {
        let items = json!([{"text": "a"}, 3, null]);
        assert_eq!(
            array(Some(&items)),
            Field::Valid(vec![json!({"text": "a"}), json!(3), Value::Null])
        );
        assert_eq!(array(Some(&json!("not-an-array"))), Field::Invalid);
        assert_eq!(array(Some(&json!({"0": "a"}))), Field::Invalid);
    }

    #[test]
    fn test_string_array_drops_non_strings() {
        let staff = json!(["Ann", 5, "Ben", null]);
        assert_eq!(
            string_array(Some(&staff)),
            Field::Valid(vec!["Ann".to_string(), "Ben".to_string()])
        );
        assert_eq!(string_array(Some(&json!("Ann"))), Field::Invalid);
    }

    #[test]
    fn test_finite_float() {
        assert_eq!(finite_float(Some(&json!(12.5))), Field::Valid(12.5));
        assert_eq!(finite_float(Some(&json!("25"))), Field::Valid(25.0));
        assert_eq!(finite_float(Some(&json!("  30px"))), Field::Valid(30.0));
        assert_eq!(finite_float(Some(&json!("1e1%"))), Field::Valid(10.0));
        assert_eq!(finite_float(Some(&json!("7e"))), Field::Valid(7.0));
        assert_eq!(finite_float(Some(&json!(".5"))), Field::Valid(0.5));
        assert_eq!(finite_float(Some(&json!("px25"))), Field::Invalid);
        assert_eq!(finite_float(Some(&json!("Infinity"))), Field::Invalid);
        assert_eq!(finite_float(Some(&json!("1e999"))), Field::Invalid);
        assert_eq!(finite_float(Some(&json!(true))), Field::Invalid);
        assert_eq!(finite_float(None), Field::Invalid);
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(timestamp(Some(&json!(1_700_000_000_000i64))), Field::Valid(1_700_000_000_000));
        assert_eq!(timestamp(Some(&json!(1234.9))), Field::Valid(1234));
        assert_eq!(timestamp(Some(&json!(0))), Field::Invalid);
        assert_eq!(timestamp(Some(&json!(0.4))), Field::Invalid);
        assert_eq!(timestamp(Some(&json!("1700000000000"))), Field::Invalid);
        assert_eq!(timestamp(None), Field::Invalid);
    }
}

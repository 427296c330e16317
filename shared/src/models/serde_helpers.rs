//! Common serde helpers for lenient backend payloads
//!
//! The backend is loosely typed: decimal columns may arrive as JSON strings,
//! optional objects as `null`. These helpers normalize both directions.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a value that treats null as `T::default()`
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parse the leading numeric prefix of `raw` the way `parseFloat` does
///
/// `" 12.50 INR"` → 12.50, `"abc"` → None, `""` → None. Exponents are not
/// recognized; `"1e3"` reads as 1.
pub fn parse_decimal_prefix(raw: &str) -> Option<Decimal> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, tail) = rest.split_at(int_len);
    let frac_part = tail
        .strip_prefix('.')
        .map(|t| &t[..t.bytes().take_while(u8::is_ascii_digit).count()])
        .unwrap_or("");
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(int_len + frac_part.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }
    normalized.parse::<Decimal>().ok()
}

/// Convert a JSON number to a decimal without going through binary floats
/// when the textual form is exact
pub fn decimal_from_number(n: &serde_json::Number) -> Option<Decimal> {
    let text = n.to_string();
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| n.as_f64().and_then(Decimal::from_f64))
}

/// Convert a decimal to a JSON number (integral values stay integral)
pub fn decimal_to_number(d: Decimal) -> Option<serde_json::Number> {
    if d.fract().is_zero()
        && let Some(i) = d.to_i64()
    {
        return Some(i.into());
    }
    d.to_f64().and_then(serde_json::Number::from_f64)
}

/// Optional price serialization
///
/// Always emitted: a JSON number or `null`, never a string. Deserialization
/// accepts numbers, numeric strings, and null.
pub mod price {
    use super::*;
    use serde::{Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Decimal>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.and_then(decimal_to_number) {
            Some(n) => n.serialize(s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::Number(n)) => decimal_from_number(&n),
            Some(Value::String(s)) => parse_decimal_prefix(&s),
            _ => None,
        })
    }
}

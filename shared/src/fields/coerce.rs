//! Raw input coercion
//!
//! Every function here is total: malformed input resolves to a
//! type-appropriate default, never to an error.

/// Integer from raw text with `parseInt` semantics
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits. Anything else (including `""`) yields 0. Out-of-range
/// values saturate at the i64 bounds.
pub fn coerce_integer(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

/// Boolean from raw text: case-insensitive `"true"`, anything else is false
pub fn coerce_boolean(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// Split a comma list, trimming elements and dropping empty ones
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join stored list elements for editing
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

//! Locale-style number grouping.

/// Format `value` with a thousands separator (`28500` -> `"28.500"` with
/// `'.'`, the es-AR grouping).
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(separator);
        }
        out.push(d);
    }
    out
}

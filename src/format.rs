//! Live input formatting

const PHONE_DIGITS: usize = 10;

/// Re-render phone input as `(XXX) XXX-XXXX`, progressively.
///
/// Every non-digit is stripped first, so the function can run on its own
/// output after each keystroke. Digits past the tenth are dropped.
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

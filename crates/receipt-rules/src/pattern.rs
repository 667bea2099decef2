//! Fixed-shape format matchers for receipt fields.
//!
//! Each matcher accepts exactly the strings its doc comment describes. All
//! character classes are ASCII-only: a non-ASCII digit or letter never
//! matches.

/// One or more of: ASCII letters, ASCII digits, `_`, space, `\t`, `\n`,
/// form feed, `\r`, `-`, `&`.
pub fn is_retailer_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_retailer_byte)
}

fn is_retailer_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'_' | b' ' | b'\t' | b'\n' | b'\x0C' | b'\r' | b'-' | b'&')
}

/// `DDDD-DD-DD`. The digits are not checked against the calendar.
pub fn is_date(s: &str) -> bool {
    is_digit_groups(s, '-', &[4, 2, 2])
}

/// `DD:DD`. Hours and minutes are not range-checked.
pub fn is_time(s: &str) -> bool {
    is_digit_groups(s, ':', &[2, 2])
}

/// One or more digits, a `.`, then exactly two digits.
pub fn is_amount(s: &str) -> bool {
    match s.split_once('.') {
        Some((whole, cents)) => {
            !whole.is_empty() && is_digits(whole) && cents.len() == 2 && is_digits(cents)
        }
        None => false,
    }
}

fn is_digit_groups(s: &str, sep: char, widths: &[usize]) -> bool {
    let groups: Vec<&str> = s.split(sep).collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, &width)| group.len() == width && is_digits(group))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Order comparators
///
/// Two strategies, selected by [`OrderSortType`](super::OrderSortType):
/// - timestamp: natural ordering of the timestamps, earlier first
/// - ID: exchanges encode order IDs as decimal numbers, hex strings or opaque
///   tokens, so IDs are compared numerically where both sides allow it
///
/// ## ID comparison rules
/// 1. Both IDs parse as base-10 integers: compare the numbers
/// 2. Otherwise both parse as base-16 integers: compare the numbers
/// 3. Otherwise compare the ID text lexicographically, by UTF-16 code units
///
/// Digits may come from any Unicode decimal digit block, and hex letters may
/// be fullwidth. Integers are arbitrary precision; IDs routinely exceed 64
/// bits. The rules are pairwise, so a list mixing encodings has no single consistent order
/// (e.g. "9" < "10" numerically, "10" < "5z" < "9" lexically).

use super::traits::OrderRecord;
use num_bigint::BigInt;
use std::cmp::Ordering;

/// Radixes tried, in order, before falling back to text comparison
const ALLOWED_RADIXES: [u32; 2] = [10, 16];

/// 各 Unicode 十进制数字 (Nd) 区段中 "0" 的码位，每段连续 10 个
const DECIMAL_ZEROES: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6,
    0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0,
    0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620,
    0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0,
    0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8,
    0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Digit value of `c` in `radix`, or `None`.
///
/// Any Unicode decimal digit counts (Arabic-Indic, Devanagari, fullwidth...).
/// Letters count from 10 upwards in ASCII and fullwidth forms.
pub fn digit_value(c: char, radix: u32) -> Option<u32> {
    let code = c as u32;
    let value = match c {
        'a'..='z' => code - 'a' as u32 + 10,
        'A'..='Z' => code - 'A' as u32 + 10,
        '\u{FF41}'..='\u{FF5A}' => code - 0xFF41 + 10,
        '\u{FF21}'..='\u{FF3A}' => code - 0xFF21 + 10,
        _ => {
            // 表按码位升序排列
            let slot = DECIMAL_ZEROES.partition_point(|&zero| zero <= code);
            let zero = DECIMAL_ZEROES[slot.checked_sub(1)?];
            let offset = code - zero;
            if offset >= 10 {
                return None;
            }
            offset
        }
    };
    (value < radix).then_some(value)
}

/// Parses `text` as a signed integer in `radix`.
///
/// Grammar: optional single ASCII `+`/`-`, then at least one digit of the
/// radix as judged by [`digit_value`]. Underscores, whitespace and `0x`
/// prefixes are rejected.
pub fn parse_id(text: &str, radix: u32) -> Option<BigInt> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() {
        return None;
    }

    // 归一化为 ASCII 数字后交给 num-bigint
    let mut normalized = Vec::with_capacity(digits.len() + 1);
    if negative {
        normalized.push(b'-');
    }
    for c in digits.chars() {
        let value = digit_value(c, radix)?;
        normalized.push(char::from_digit(value, radix)? as u8);
    }
    BigInt::parse_bytes(&normalized, radix)
}

/// Pre-parsed readings of one order ID
///
/// Parsing once per order instead of once per comparison keeps the sort at
/// O(n) parses; comparisons give the same answers as [`compare_ids`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdKey<'a> {
    raw: &'a str,
    readings: [Option<BigInt>; 2],
}

impl<'a> IdKey<'a> {
    pub fn new(raw: &'a str) -> Self {
        let readings = ALLOWED_RADIXES.map(|radix| parse_id(raw, radix));
        if readings.iter().all(Option::is_none) {
            tracing::trace!(id = raw, "order id has no numeric reading");
        }
        Self { raw, readings }
    }

    /// Compares two keys with the radix fallback chain
    pub fn compare(&self, other: &Self) -> Ordering {
        for (mine, theirs) in self.readings.iter().zip(other.readings.iter()) {
            if let (Some(a), Some(b)) = (mine, theirs) {
                return a.cmp(b);
            }
        }
        // UTF-16 码元顺序
        self.raw.encode_utf16().cmp(other.raw.encode_utf16())
    }
}

/// Compares two order IDs: decimal, then hexadecimal, then lexicographic.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    IdKey::new(a).compare(&IdKey::new(b))
}

/// Compares two orders by ID.
pub fn compare_by_id<O: OrderRecord + ?Sized>(a: &O, b: &O) -> Ordering {
    compare_ids(a.id(), b.id())
}

/// Compares two orders by timestamp, earlier first.
#[inline]
pub fn compare_by_timestamp<O: OrderRecord + ?Sized>(a: &O, b: &O) -> Ordering {
    a.timestamp().cmp(&b.timestamp())
}

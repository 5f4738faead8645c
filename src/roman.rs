//! Integer to Roman numeral conversion used for episode headings.

/// Symbol table in strictly decreasing value order, including the subtractive
/// pairs. The greedy scan in [`to_roman`] depends on this ordering.
const ROMAN_TABLE: [(&str, i64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Convert a positive integer to its Roman numeral form.
///
/// Output is standard notation for `1..=3999`. Larger values keep repeating
/// `M`. Zero and negative values are outside the domain and produce an empty
/// string; callers should not rely on that.
pub fn to_roman(value: i64) -> String {
    let mut remaining = value;
    let mut roman = String::new();

    for (symbol, amount) in ROMAN_TABLE {
        while remaining >= amount {
            roman.push_str(symbol);
            remaining -= amount;
        }
    }

    roman
}

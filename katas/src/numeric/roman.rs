//! Roman numerals in canonical subtractive form (`IV`, `IX`, `XL`, ...).

/// Largest value with a canonical numeral (`MMMCMXCIX`).
pub const MAX_ROMAN: u32 = 3999;

const DESCENDING: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(symbol: char) -> Option<u32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Convert a numeral to its value.
///
/// A symbol smaller than its successor is subtracted, every other symbol is
/// added. `None` for the empty string or any character outside `IVXLCDM`.
pub fn roman_to_int(numeral: &str) -> Option<u32> {
    let values: Vec<u32> = numeral.chars().map(symbol_value).collect::<Option<_>>()?;
    let (&last, rest) = values.split_last()?;

    let mut total = i64::from(last);
    for (index, &value) in rest.iter().enumerate() {
        if value < values[index + 1] {
            total -= i64::from(value);
        } else {
            total += i64::from(value);
        }
    }
    u32::try_from(total).ok()
}

/// Canonical numeral for `1..=3999`, `None` outside that range.
pub fn int_to_roman(value: u32) -> Option<String> {
    if value == 0 || value > MAX_ROMAN {
        return None;
    }

    let mut remaining = value;
    let mut numeral = String::new();
    for &(amount, symbol) in &DESCENDING {
        while remaining >= amount {
            numeral.push_str(symbol);
            remaining -= amount;
        }
    }
    Some(numeral)
}

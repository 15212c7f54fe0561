const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BASE: f64 = 36.0;

/// Expands a fraction in `[0, 1)` into at most `max_digits` base-36 digits
/// after the radix point (0-9, a-z).
///
/// The expansion stops early once the remaining fraction is exactly zero, so
/// `0.0` encodes to an empty string and `0.5` to `"i"`.
pub fn encode_fraction(fraction: f64, max_digits: usize) -> String {
    let mut remaining = if (0.0..1.0).contains(&fraction) {
        fraction
    } else {
        fraction.abs().fract()
    };
    let mut out = String::with_capacity(max_digits);

    while out.len() < max_digits && remaining > 0.0 {
        remaining *= BASE;
        let digit = remaining.floor();
        remaining -= digit;
        let index = (digit as usize).min(CHARSET.len() - 1);
        out.push(CHARSET[index] as char);
    }

    out
}

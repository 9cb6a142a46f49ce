use crate::error::BookError;

/// 1 NEAR = 10^24 yoctoNEAR.
pub const YOCTO_PER_NEAR: u128 = 1_000_000_000_000_000_000_000_000;

pub fn remove_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url[..url.len() - 1].to_string()
    } else {
        url.to_string()
    }
}

/// Parse a decimal integer string exactly. Signs, fractions, exponents and
/// whitespace are rejected.
pub fn parse_amount(field: &'static str, value: &str) -> Result<u128, BookError> {
    let invalid = || BookError::InvalidAmount {
        field,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<u128>().map_err(|_| invalid())
}

/// Same as [`parse_amount`], lifted into the crate error for balance fields.
pub fn parse_yocto(field: &'static str, value: &str) -> crate::Result<u128> {
    Ok(parse_amount(field, value)?)
}

/// Render `value / unit` with `decimals` fractional digits, rounding half up.
///
/// Done entirely in integers so 24-decimal token amounts keep every digit.
/// `decimals` must stay below 15 for `unit = 10^24`.
pub fn format_units(value: u128, unit: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let mut whole = value / unit;
    let rem = value % unit;
    let mut frac = (rem * scale + unit / 2) / unit;
    if frac >= scale {
        whole += 1;
        frac -= scale;
    }
    if decimals == 0 {
        whole.to_string()
    } else {
        format!("{}.{:0width$}", whole, frac, width = decimals as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_trailing_slash() {
        assert_eq!(remove_trailing_slash("https://rpc.testnet.near.org/"), "https://rpc.testnet.near.org");
        assert_eq!(remove_trailing_slash("https://rpc.testnet.near.org"), "https://rpc.testnet.near.org");
    }

    #[test]
    fn test_parse_amount_exact_beyond_f64() {
        assert_eq!(
            parse_amount("price", "123456789012345678901234567").unwrap(),
            123_456_789_012_345_678_901_234_567
        );
    }

    #[test]
    fn test_parse_amount_rejects_non_integers() {
        for bad in ["", "-1", "+1", "1.5", "2e23", " 1", "abc"] {
            assert!(parse_amount("price", bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_format_units_yocto() {
        assert_eq!(format_units(123 * YOCTO_PER_NEAR, YOCTO_PER_NEAR, 5), "123.00000");
        assert_eq!(format_units(123_000_000_000_000_000_000_000, YOCTO_PER_NEAR, 5), "0.12300");
        assert_eq!(format_units(0, YOCTO_PER_NEAR, 5), "0.00000");
    }

    #[test]
    fn test_format_units_rounds_half_up() {
        // 0.999995 NEAR rounds into the next whole unit
        assert_eq!(format_units(999_995_000_000_000_000_000_000, YOCTO_PER_NEAR, 5), "1.00000");
        assert_eq!(format_units(1_234_564_000_000_000_000_000_000, YOCTO_PER_NEAR, 5), "1.23456");
        assert_eq!(format_units(15, 10, 0), "2");
    }
}

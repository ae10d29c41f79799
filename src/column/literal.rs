//! SQLite literal grammar for the kinds columns render.

/// SQLite's null literal
pub(crate) const NULL: &str = "NULL";

/// Magnitude SQLite's parser rounds to infinity
const POSITIVE_INFINITY: &str = "9e999";
const NEGATIVE_INFINITY: &str = "-9e999";

/// Largest magnitude below which every integer is exactly a double
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Render a double so that SQLite's literal parser yields the same bits.
///
/// Exact integers print as `N.0` so SQLite reads them as REAL. Values whose
/// shortest form has at most two fractional digits print as written (`3.14`);
/// everything else prints 17 significant digits, which leaves SQLite's
/// parser enough margin to land on the same double. NaN has no SQLite
/// literal and yields `None`.
pub(crate) fn real(value: f64) -> Option<String> {
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() {
        let literal = if value > 0.0 {
            POSITIVE_INFINITY
        } else {
            NEGATIVE_INFINITY
        };
        return Some(literal.to_string());
    }
    if value.abs() <= EXACT_INTEGER_LIMIT {
        if value.fract() == 0.0 {
            return Some(format!("{value:.1}"));
        }
        let shortest = value.to_string();
        let fraction_digits = shortest.split_once('.').map_or(0, |(_, digits)| digits.len());
        if fraction_digits <= 2 {
            return Some(shortest);
        }
    }
    Some(format!("{value:.16e}"))
}

/// Quote text, doubling embedded single quotes. Text containing NUL cannot be
/// embedded in statement text and yields `None`.
pub(crate) fn text(value: &str) -> Option<String> {
    if value.contains('\0') {
        return None;
    }
    Some(format!("'{}'", value.replace('\'', "''")))
}

/// `X'..'` blob literal
pub(crate) fn blob(bytes: &[u8]) -> String {
    let hex: String = bytes.iter().map(|byte| format!("{byte:02X}")).collect();
    format!("X'{hex}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_short_decimals_print_as_written() {
        assert_eq!(real(3.14).as_deref(), Some("3.14"));
        assert_eq!(real(-0.5).as_deref(), Some("-0.5"));
        assert_eq!(real(1234.25).as_deref(), Some("1234.25"));
    }

    #[test]
    fn test_real_integral_values_keep_fraction() {
        assert_eq!(real(0.0).as_deref(), Some("0.0"));
        assert_eq!(real(-0.0).as_deref(), Some("-0.0"));
        assert_eq!(real(42.0).as_deref(), Some("42.0"));
        assert_eq!(real(9007199254740992.0).as_deref(), Some("9007199254740992.0"));
    }

    #[test]
    fn test_real_seventeen_significant_digits() {
        assert_eq!(real(0.001).as_deref(), Some("1.0000000000000000e-3"));
        assert_eq!(real(1e300).as_deref(), Some("1.0000000000000001e300"));
        assert_eq!(real(0.125).as_deref(), Some("1.2500000000000000e-1"));
        assert_eq!(real(f64::MAX).as_deref(), Some("1.7976931348623157e308"));
    }

    #[test]
    fn test_real_digits_parse_back_exactly() {
        for v in [0.1, 1.0 / 3.0, -2.404858437694134e60, 1.103203030177992e-153, 5e-324] {
            let literal = real(v).unwrap();
            assert_eq!(literal.parse::<f64>().unwrap().to_bits(), v.to_bits(), "{literal}");
        }
    }

    #[test]
    fn test_real_special_values() {
        assert_eq!(real(f64::INFINITY).as_deref(), Some("9e999"));
        assert_eq!(real(f64::NEG_INFINITY).as_deref(), Some("-9e999"));
        assert_eq!(real(f64::NAN), None);
        assert_eq!("9e999".parse::<f64>(), Ok(f64::INFINITY));
    }

    #[test]
    fn test_text_escaping() {
        assert_eq!(text("it's").as_deref(), Some("'it''s'"));
        assert_eq!(text("").as_deref(), Some("''"));
        assert_eq!(text("a\0b"), None);
    }

    #[test]
    fn test_blob_hex() {
        assert_eq!(blob(&[0x00, 0xAB, 0x7f]), "X'00AB7F'");
        assert_eq!(blob(&[]), "X''");
    }
}

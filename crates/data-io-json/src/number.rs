//! Number text in the `%g` style used for stored numbers.

use serde_json::{Number, Value};

use crate::DataIoError;

/// Significant digits kept by [`format_general`].
pub const PRECISION: usize = 6;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Format a number like C's `%g`.
///
/// Six significant digits, trailing zeros dropped, exponent form when the
/// decimal exponent is below -4 or at least six.
///
/// ```
/// use data_io_json::format_general;
///
/// assert_eq!(format_general(2.0), "2");
/// assert_eq!(format_general(1.23456789), "1.23457");
/// assert_eq!(format_general(1234567.0), "1.23457e+06");
/// assert_eq!(format_general(0.00001), "1e-05");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent must come from the value already rounded to PRECISION digits.
    let sci = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_fraction_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        strip_fraction_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_fraction_zeros(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

/// Build the JSON number stored for `value`.
///
/// The value goes through [`format_general`] first, so what is stored is what
/// the text form says. Integral results are stored as integers.
pub fn number_value(value: f64) -> Result<Value, DataIoError> {
    if !value.is_finite() {
        return Err(DataIoError::NonFiniteNumber(value));
    }
    let rounded: f64 = format_general(value).parse().unwrap_or(value);
    if rounded.fract() == 0.0 && rounded.abs() <= MAX_SAFE_INTEGER {
        return Ok(Value::from(rounded as i64));
    }
    Number::from_f64(rounded)
        .map(Value::Number)
        .ok_or(DataIoError::NonFiniteNumber(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_general_fixed() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(-0.0), "-0");
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(-1.5), "-1.5");
        assert_eq!(format_general(0.5), "0.5");
        assert_eq!(format_general(100000.0), "100000");
        assert_eq!(format_general(123456.0), "123456");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(0.000123456789), "0.000123457");
    }

    #[test]
    fn test_format_general_exponent() {
        assert_eq!(format_general(1000000.0), "1e+06");
        assert_eq!(format_general(999999.5), "1e+06");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(-2.5e-7), "-2.5e-07");
        assert_eq!(format_general(1e100), "1e+100");
    }

    #[test]
    fn test_format_general_non_finite() {
        assert_eq!(format_general(f64::NAN), "nan");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(2.0).unwrap(), json!(2));
        assert_eq!(number_value(-7.0).unwrap(), json!(-7));
        assert_eq!(number_value(0.25).unwrap(), json!(0.25));
        assert_eq!(number_value(1.23456789).unwrap(), json!(1.23457));
        assert_eq!(number_value(1234567.0).unwrap(), json!(1234570));
        assert!(matches!(
            number_value(f64::NAN),
            Err(DataIoError::NonFiniteNumber(_))
        ));
        assert!(number_value(f64::INFINITY).is_err());
    }
}

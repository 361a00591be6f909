#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Formats a result for display.
///
/// Integral values keep a trailing `.0` so `5` prints as `5.0`; infinities
/// print as `Infinity` and `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{value:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_a_decimal() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(-12.0), "-12.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn fractions_use_shortest_form() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(17.5), "17.5");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}

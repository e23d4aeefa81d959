//! Length input normalizer.
//!
//! Accepts the textual forms people actually type: "404", "404.5",
//! "404,5", "404 см". Output is a positive finite number of centimeters.

/// Why a length input was rejected. Both variants are recoverable: the
/// dialog simply asks again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseLengthError {
    #[error("not a number")]
    InvalidFormat,
    #[error("length must be positive")]
    NonPositive,
}

/// Parse a user-supplied length in centimeters.
///
/// Tolerates the "см" unit token (any case) and a decimal comma. There is
/// deliberately no upper bound.
pub fn parse_length(text: &str) -> Result<f64, ParseLengthError> {
    let mut t = text.trim().to_lowercase();
    t = t.replace("см", "").trim().to_string();
    t = t.replace(',', ".");

    let x: f64 = t.parse().map_err(|_| ParseLengthError::InvalidFormat)?;
    if !x.is_finite() {
        return Err(ParseLengthError::InvalidFormat);
    }
    if x <= 0.0 {
        return Err(ParseLengthError::NonPositive);
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_integers() {
        assert_eq!(parse_length("404"), Ok(404.0));
    }

    #[test]
    fn accepts_decimal_point_and_comma() {
        assert_eq!(parse_length("404.5"), Ok(404.5));
        assert_eq!(parse_length("404,5"), Ok(404.5));
    }

    #[test]
    fn strips_unit_token_and_whitespace() {
        assert_eq!(parse_length("404 см"), Ok(404.0));
        assert_eq!(parse_length("  404СМ "), Ok(404.0));
        assert_eq!(parse_length("404см"), Ok(404.0));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(parse_length("0"), Err(ParseLengthError::NonPositive));
        assert_eq!(parse_length("-5"), Err(ParseLengthError::NonPositive));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_length("abc"), Err(ParseLengthError::InvalidFormat));
        assert_eq!(parse_length(""), Err(ParseLengthError::InvalidFormat));
        assert_eq!(parse_length("см"), Err(ParseLengthError::InvalidFormat));
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(parse_length("inf"), Err(ParseLengthError::InvalidFormat));
        assert_eq!(parse_length("nan"), Err(ParseLengthError::InvalidFormat));
    }
}

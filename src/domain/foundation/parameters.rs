//! Parsing of the comma-separated weight and impact parameters.

use super::TopsisError;

/// Parses a comma-separated list of weights such as `"1,1,2,0.5"`.
///
/// Tokens are trimmed. Empty tokens, unparseable numbers and non-finite
/// values are rejected. Sign is not checked here.
pub fn parse_weights(raw: &str) -> Result<Vec<f64>, TopsisError> {
    let tokens = split_tokens(raw, "weights")?;

    tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            let value: f64 = token.parse().map_err(|_| {
                TopsisError::malformed(
                    "weights",
                    format!("value {} ('{}') is not a number", i + 1, token),
                )
            })?;
            if !value.is_finite() {
                return Err(TopsisError::malformed(
                    "weights",
                    format!("value {} ('{}') is not finite", i + 1, token),
                ));
            }
            Ok(value)
        })
        .collect()
}

/// Splits a comma-separated list of impact symbols such as `"+,-,+"`.
///
/// Only the list structure is checked; symbol validity is the validator's job.
pub fn parse_impacts(raw: &str) -> Result<Vec<String>, TopsisError> {
    Ok(split_tokens(raw, "impacts")?
        .into_iter()
        .map(str::to_string)
        .collect())
}

fn split_tokens<'a>(raw: &'a str, parameter: &'static str) -> Result<Vec<&'a str>, TopsisError> {
    if raw.trim().is_empty() {
        return Err(TopsisError::malformed(parameter, "list is empty"));
    }

    let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
    if let Some(pos) = tokens.iter().position(|t| t.is_empty()) {
        return Err(TopsisError::malformed(
            parameter,
            format!("entry {} is empty in '{}'", pos + 1, raw),
        ));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn parse_weights_reads_numbers() {
        let weights = parse_weights("1,1,2,0.5").unwrap();
        assert_eq!(weights, vec![1.0, 1.0, 2.0, 0.5]);
    }

    #[test]
    fn parse_weights_trims_whitespace() {
        let weights = parse_weights(" 1 , 2 ,3 ").unwrap();
        assert_eq!(weights, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn parse_weights_allows_negative_and_zero() {
        let weights = parse_weights("-1,0,2").unwrap();
        assert_eq!(weights, vec![-1.0, 0.0, 2.0]);
    }

    #[test]
    fn parse_weights_rejects_text() {
        let err = parse_weights("1,abc,2").unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedParameter);
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn parse_weights_rejects_empty_entry() {
        let err = parse_weights("1,,2").unwrap_err();
        assert!(err.to_string().contains("entry 2 is empty"));
    }

    #[test]
    fn parse_weights_rejects_empty_list() {
        assert!(parse_weights("").is_err());
        assert!(parse_weights("   ").is_err());
    }

    #[test]
    fn parse_weights_rejects_non_finite() {
        assert!(parse_weights("1,inf,2").is_err());
        assert!(parse_weights("NaN,1,2").is_err());
    }

    #[test]
    fn parse_impacts_splits_symbols() {
        let impacts = parse_impacts("+, -,+").unwrap();
        assert_eq!(impacts, vec!["+", "-", "+"]);
    }

    #[test]
    fn parse_impacts_keeps_unknown_symbols_for_validator() {
        let impacts = parse_impacts("+,*,-").unwrap();
        assert_eq!(impacts[1], "*");
    }

    #[test]
    fn parse_impacts_rejects_trailing_comma() {
        let err = parse_impacts("+,-,").unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedParameter);
    }
}

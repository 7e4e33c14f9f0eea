use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a `usize` constrained to the inclusive range [1, 512].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range [1, 512].
pub fn parse_usize_1_to_512(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_parser_enforces_minimum_and_maximum() {
        assert_eq!(parse_usize_1_to_512("1"), Ok(1));
        assert_eq!(parse_usize_1_to_512("512"), Ok(512));
        assert!(parse_usize_1_to_512("0").is_err());
        assert!(parse_usize_1_to_512("513").is_err());
    }

    #[test]
    fn bounded_parser_rejects_garbage() {
        let err = parse_usize_1_to_512("four").unwrap_err();
        assert!(err.starts_with("invalid number 'four'"));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Test bounded usize [1, 512]
        #[test]
        fn test_bounded_usize_valid(n in 1usize..=512) {
            let formatted = format!("{n}");
            let parsed = parse_usize_1_to_512(&formatted).unwrap();
            prop_assert_eq!(parsed, n);
        }

        /// Test bounded usize rejects values above max
        #[test]
        fn test_bounded_usize_rejects_large(n in 513usize..10_000) {
            let formatted = format!("{n}");
            prop_assert!(parse_usize_1_to_512(&formatted).is_err());
        }
    }
}

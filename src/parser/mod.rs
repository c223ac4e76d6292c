pub mod dataset;
pub mod table;

pub use dataset::build_solar_data;
pub use table::{parse_table, Row};

/// Coerce an arbitrary cell value to a number, degrading to zero.
///
/// Thousands separators are stripped before parsing and anything that does
/// not parse to a finite number becomes `0.0`. This is the single named
/// policy for numeric fallback: aggregation must never fail because one
/// row has a malformed cell, so there is no error path here.
#[must_use]
pub fn parse_numeric_or_zero(raw: &str) -> f64 {
    let cleaned = raw.replace(',', "");
    match cleaned.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_numeric_or_zero;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_numeric_or_zero("42"), 42.0);
        assert_eq!(parse_numeric_or_zero(" 3.5 "), 3.5);
        assert_eq!(parse_numeric_or_zero("-7"), -7.0);
    }

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(parse_numeric_or_zero("1,250,000"), 1_250_000.0);
    }

    #[test]
    fn non_numeric_input_degrades_to_zero() {
        assert_eq!(parse_numeric_or_zero(""), 0.0);
        assert_eq!(parse_numeric_or_zero("n/a"), 0.0);
        assert_eq!(parse_numeric_or_zero("12kwh"), 0.0);
        assert_eq!(parse_numeric_or_zero("NaN"), 0.0);
        assert_eq!(parse_numeric_or_zero("inf"), 0.0);
    }
}

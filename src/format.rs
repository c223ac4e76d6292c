//! Number formatting for axis labels, KPIs, and the summary table.
//! Fixed conventions, no locale lookup: energy uses comma grouping, IDR
//! uses the Indonesian dot grouping with an `Rp` prefix.

/// Compact axis notation: 950, 12K, 3M, 1B. Rounded to whole units.
#[must_use]
pub fn format_compact(n: f64) -> String {
    let magnitude = n.abs();
    if magnitude >= 1e9 {
        format!("{:.0}B", n / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.0}M", n / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.0}K", n / 1e3)
    } else {
        format!("{n:.0}")
    }
}

/// Whole kWh with thousands separators: `12,345`.
#[must_use]
pub fn format_kwh(n: f64) -> String {
    grouped(n, ',')
}

/// Indonesian rupiah: `Rp 5.000`.
#[must_use]
pub fn format_idr(n: f64) -> String {
    format!("Rp {}", grouped(n, '.'))
}

fn grouped(n: f64, separator: char) -> String {
    let rounded = n.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_compact, format_idr, format_kwh};
    use pretty_assertions::assert_eq;

    #[test]
    fn compact_scales_by_magnitude() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(12_400.0), "12K");
        assert_eq!(format_compact(3_000_000.0), "3M");
        assert_eq!(format_compact(1_500_000_000.0), "2B");
        assert_eq!(format_compact(-12_400.0), "-12K");
        assert_eq!(format_compact(0.0), "0");
    }

    #[test]
    fn kwh_groups_with_commas() {
        assert_eq!(format_kwh(0.0), "0");
        assert_eq!(format_kwh(999.0), "999");
        assert_eq!(format_kwh(1_000.0), "1,000");
        assert_eq!(format_kwh(12_345.0), "12,345");
        assert_eq!(format_kwh(1_234_567.0), "1,234,567");
        assert_eq!(format_kwh(-1_000.0), "-1,000");
    }

    #[test]
    fn idr_groups_with_dots_and_prefix() {
        assert_eq!(format_idr(5_000.0), "Rp 5.000");
        assert_eq!(format_idr(2_500_000.0), "Rp 2.500.000");
    }
}

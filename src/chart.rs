//! Pure chart geometry: padded value axis, reference gridlines, and month
//! labels. The UI layer only maps these numbers onto widgets, so the parts
//! that can divide by zero or collapse live here where they are testable.

use crate::analytics::MonthlyPoint;
use crate::model::Measures;

/// Fixed English month names; the axis never depends on locale.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Which measure a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Generated,
    Used,
    Grid,
    Saving,
}

impl Metric {
    #[must_use]
    pub fn value(self, measures: &Measures) -> f64 {
        match self {
            Self::Generated => measures.energy_generated_kwh,
            Self::Used => measures.energy_used_kwh,
            Self::Grid => measures.grid_energy_kwh,
            Self::Saving => measures.cost_saving_idr,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Generated => "Total Generation by Month",
            Self::Used => "Total Usage by Month",
            Self::Grid => "Total Grid Energy by Month",
            Self::Saving => "Total Savings by Month",
        }
    }

    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Saving => "IDR",
            _ => "kWh",
        }
    }
}

/// Padded vertical axis range for a series of values.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Span of the padded range, floored at 1 so positions never divide
    /// by zero.
    #[must_use]
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1.0)
    }

    /// The three horizontal reference gridlines: minimum, midpoint,
    /// maximum of the padded range.
    #[must_use]
    pub fn gridlines(&self) -> [f64; 3] {
        [self.min, f64::midpoint(self.min, self.max), self.max]
    }

    /// Normalized vertical position of a value, 0 at the axis minimum and
    /// 1 at the maximum.
    #[must_use]
    pub fn position(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// Expand the observed min/max so the plot never renders a flat or empty
/// axis: the pad is the larger of 25% of the observed range and 5% of the
/// observed maximum, floored at 5 units.
#[must_use]
pub fn padded_range(values: &[f64]) -> AxisRange {
    let (min_raw, max_raw) = values.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    let (min_raw, max_raw) = if values.is_empty() {
        (0.0, 0.0)
    } else {
        (min_raw, max_raw)
    };

    let raw_range = (max_raw - min_raw).max(1.0);
    let pad = (raw_range * 0.25).max((max_raw.abs() * 0.05).max(5.0));

    AxisRange {
        min: min_raw - pad,
        max: max_raw + pad,
    }
}

/// Full month name for a `YYYY-MM` key; anything out of range falls back
/// to the raw key.
#[must_use]
pub fn month_label(month_key: &str) -> String {
    month_key
        .split('-')
        .nth(1)
        .and_then(|mm| mm.parse::<usize>().ok())
        .and_then(|mm| MONTH_NAMES.get(mm.wrapping_sub(1)))
        .map_or_else(|| month_key.to_string(), |name| (*name).to_string())
}

/// One plottable chart: uniformly spaced points plus the padded axis.
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub metric: Metric,
    /// `(index, value)` pairs, uniformly spaced on x.
    pub points: Vec<(f64, f64)>,
    /// Month label per point, same order.
    pub labels: Vec<String>,
    pub range: AxisRange,
}

impl ChartModel {
    #[must_use]
    pub fn new(series: &[MonthlyPoint], metric: Metric) -> Self {
        let values: Vec<f64> = series.iter().map(|p| metric.value(&p.measures)).collect();
        let range = padded_range(&values);
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();
        let labels = series.iter().map(|p| month_label(&p.month)).collect();
        Self {
            metric,
            points,
            labels,
            range,
        }
    }

    /// Upper x-axis bound; at least 1 so a single point still spans an
    /// axis.
    #[must_use]
    pub fn x_max(&self) -> f64 {
        (self.points.len().saturating_sub(1)).max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{month_label, padded_range, ChartModel, Metric};
    use crate::analytics::MonthlyPoint;
    use crate::model::Measures;
    use pretty_assertions::assert_eq;

    #[test]
    fn pads_by_a_quarter_of_the_range() {
        let range = padded_range(&[0.0, 100.0]);
        assert_eq!(range.min, -25.0);
        assert_eq!(range.max, 125.0);
    }

    #[test]
    fn all_equal_values_still_produce_a_usable_axis() {
        let range = padded_range(&[40.0, 40.0, 40.0]);
        assert!(range.max > range.min);
        assert!(range.span() > 0.0);
        // raw range floors at 1, so pad = max(0.25, max(2, 5)) = 5
        assert_eq!(range.min, 35.0);
        assert_eq!(range.max, 45.0);
    }

    #[test]
    fn all_zero_values_do_not_collapse() {
        let range = padded_range(&[0.0; 12]);
        assert_eq!(range.min, -5.0);
        assert_eq!(range.max, 5.0);
        assert_eq!(range.position(0.0), 0.5);
    }

    #[test]
    fn empty_series_is_non_degenerate() {
        let range = padded_range(&[]);
        assert!(range.span() > 0.0);
        let model = ChartModel::new(&[], Metric::Generated);
        assert!(model.x_max() >= 1.0);
    }

    #[test]
    fn large_values_use_the_five_percent_pad() {
        let range = padded_range(&[1000.0, 1010.0]);
        // 25% of range = 2.5; 5% of max = 50.5; the larger wins
        assert_eq!(range.min, 949.5);
        assert_eq!(range.max, 1060.5);
    }

    #[test]
    fn gridlines_are_min_mid_max() {
        let range = padded_range(&[0.0, 100.0]);
        assert_eq!(range.gridlines(), [-25.0, 50.0, 125.0]);
    }

    #[test]
    fn month_labels_come_from_the_fixed_table() {
        assert_eq!(month_label("2024-01"), "January");
        assert_eq!(month_label("2024-12"), "December");
    }

    #[test]
    fn out_of_range_months_fall_back_to_the_raw_key() {
        assert_eq!(month_label("2024-13"), "2024-13");
        assert_eq!(month_label("2024-00"), "2024-00");
        assert_eq!(month_label("garbage"), "garbage");
    }

    #[test]
    fn chart_model_spaces_points_uniformly() {
        let series: Vec<MonthlyPoint> = (1..=3)
            .map(|mm| MonthlyPoint {
                month: format!("2024-{mm:02}"),
                measures: Measures {
                    energy_generated_kwh: f64::from(mm) * 10.0,
                    ..Measures::default()
                },
            })
            .collect();

        let model = ChartModel::new(&series, Metric::Generated);
        assert_eq!(model.points, vec![(0.0, 10.0), (1.0, 20.0), (2.0, 30.0)]);
        assert_eq!(model.labels, vec!["January", "February", "March"]);
    }
}

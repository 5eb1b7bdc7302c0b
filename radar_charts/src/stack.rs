// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zero-baseline stacking across series.
//!
//! For each category independently, series are accumulated bottom-up: series 0 starts at 0 and
//! series `j` starts where series `j - 1` ends. There is no accumulation across categories.

extern crate alloc;

use alloc::vec::Vec;

use crate::convert::SeriesCollection;

/// Totals produced by [`stack`].
#[derive(Clone, Debug, PartialEq)]
pub struct StackSummary {
    /// Top of the topmost series, per category.
    pub totals: Vec<f64>,
    /// Largest per-category total; `0.0` when every value is zero.
    pub max_stacked_total: f64,
}

/// Fills in `stacked_baseline` for every point and returns the per-category totals.
pub fn stack(collection: &mut SeriesCollection) -> StackSummary {
    let mut totals = alloc::vec![0.0_f64; collection.category_count()];
    for series in collection.series_mut() {
        for point in &mut series.points {
            let Some(acc) = totals.get_mut(point.category_index) else {
                continue;
            };
            point.stacked_baseline = *acc;
            *acc += point.raw_value;
        }
    }
    let max_stacked_total = totals.iter().copied().fold(0.0, f64::max);
    StackSummary {
        totals,
        max_stacked_total,
    }
}

impl StackSummary {
    /// First category whose stacked total is not finite.
    ///
    /// Finite inputs can still sum past `f64::MAX`; such a total cannot be scaled.
    pub fn overflowing_category(&self) -> Option<usize> {
        self.totals.iter().position(|t| !t.is_finite())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::convert::{CategoricalPalette, SeriesColumn, TableSnapshot, convert};

    fn stacked(values: &[&[f64]]) -> (SeriesCollection, StackSummary) {
        let categories: Vec<alloc::string::String> = (0..values[0].len())
            .map(|i| alloc::format!("c{i}"))
            .collect();
        let mut snapshot = TableSnapshot::new(categories);
        for (i, v) in values.iter().enumerate() {
            snapshot = snapshot.with_series(SeriesColumn::new(alloc::format!("s{i}"), v.to_vec()));
        }
        let mut collection = convert(&snapshot, &CategoricalPalette::default())
            .unwrap()
            .collection;
        let summary = stack(&mut collection);
        (collection, summary)
    }

    #[test]
    fn baselines_accumulate_per_category_bottom_up() {
        let (c, summary) = stacked(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let baselines: Vec<Vec<f64>> = c
            .series()
            .iter()
            .map(|s| s.points.iter().map(|p| p.stacked_baseline).collect())
            .collect();
        assert_eq!(baselines, vec![vec![0.0, 0.0], vec![1.0, 2.0]]);
        let tops: Vec<Vec<f64>> = c
            .series()
            .iter()
            .map(|s| s.points.iter().map(|p| p.stacked_top()).collect())
            .collect();
        assert_eq!(tops, vec![vec![1.0, 2.0], vec![4.0, 6.0]]);
        assert_eq!(summary.totals, vec![4.0, 6.0]);
        assert_eq!(summary.max_stacked_total, 6.0);
    }

    #[test]
    fn baseline_equals_sum_of_series_below_for_every_cell() {
        let values: [&[f64]; 4] = [
            &[0.5, 0.0, 7.0],
            &[2.0, 1.0, 0.0],
            &[0.0, 3.5, 1.0],
            &[4.0, 4.0, 4.0],
        ];
        let (c, summary) = stacked(&values);
        for k in 0..3 {
            let mut previous = 0.0;
            for (j, series) in c.series().iter().enumerate() {
                let expected: f64 = values[..j].iter().map(|v| v[k]).sum();
                let baseline = series.points[k].stacked_baseline;
                assert_eq!(baseline, expected, "series {j} category {k}");
                assert!(baseline >= previous, "baselines are monotonic");
                previous = baseline;
            }
            let top = c.series().last().unwrap().points[k].stacked_top();
            assert_eq!(top, summary.totals[k]);
        }
        assert_eq!(summary.max_stacked_total, 12.0);
    }

    #[test]
    fn all_zero_values_give_zero_total() {
        let (_, summary) = stacked(&[&[0.0, 0.0, 0.0]]);
        assert_eq!(summary.max_stacked_total, 0.0);
        assert_eq!(summary.overflowing_category(), None);
    }

    #[test]
    fn finite_values_summing_past_max_are_reported() {
        let (_, summary) = stacked(&[&[1.0, 1e308, 1.0], &[1.0, 1e308, 1.0]]);
        assert_eq!(summary.totals[0], 2.0);
        assert!(summary.totals[1].is_infinite(), "sum overflows to inf");
        assert_eq!(summary.overflowing_category(), Some(1));
    }
}

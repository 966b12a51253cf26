//! Day-over-day deltas and growth percentages

use serde::{Deserialize, Serialize};

use crate::domain::Statistic;

/// Daily change of a region relative to the previous day.
///
/// Growth percentages are non-finite when the baseline count is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub new_confirmed: i64,
    pub new_recovered: i64,
    pub new_deaths: i64,
    pub confirmed_growth_percent: f64,
    pub recovered_growth_percent: f64,
    pub deaths_growth_percent: f64,
}

impl Change {
    pub fn new(
        new_confirmed: i64,
        new_recovered: i64,
        new_deaths: i64,
        confirmed_growth_percent: f64,
        recovered_growth_percent: f64,
        deaths_growth_percent: f64,
    ) -> Self {
        Self {
            new_confirmed,
            new_recovered,
            new_deaths,
            confirmed_growth_percent,
            recovered_growth_percent,
            deaths_growth_percent,
        }
    }

    /// Change from `baseline` to `current`.
    pub fn between(current: &Statistic, baseline: &Statistic) -> Self {
        Self::new(
            current.confirmed_count - baseline.confirmed_count,
            current.recovered_count - baseline.recovered_count,
            current.death_count - baseline.death_count,
            growth_percent(current.confirmed_count, baseline.confirmed_count),
            growth_percent(current.recovered_count, baseline.recovered_count),
            growth_percent(current.death_count, baseline.death_count),
        )
    }

    pub fn is_growing(&self) -> bool {
        self.new_confirmed > 0
    }

    /// Sum of several changes, `None` when there are none.
    ///
    /// Deltas are added. Growth percentages are averaged over the finite
    /// values only; if none is finite the result is NaN.
    pub fn sum<I>(changes: I) -> Option<Change>
    where
        I: IntoIterator<Item = Change>,
    {
        let changes: Vec<Change> = changes.into_iter().collect();
        if changes.is_empty() {
            return None;
        }

        Some(Change {
            new_confirmed: changes.iter().map(|c| c.new_confirmed).sum(),
            new_recovered: changes.iter().map(|c| c.new_recovered).sum(),
            new_deaths: changes.iter().map(|c| c.new_deaths).sum(),
            confirmed_growth_percent: finite_mean(changes.iter().map(|c| c.confirmed_growth_percent)),
            recovered_growth_percent: finite_mean(changes.iter().map(|c| c.recovered_growth_percent)),
            deaths_growth_percent: finite_mean(changes.iter().map(|c| c.deaths_growth_percent)),
        })
    }
}

// real-valued division, x/0 is not special-cased
fn growth_percent(current: i64, baseline: i64) -> f64 {
    (current as f64 / baseline as f64 - 1.0) * 100.0
}

fn finite_mean(values: impl Iterator<Item = f64>) -> f64 {
    let (total, count) = values
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(total, count), v| (total + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        total / count as f64
    }
}

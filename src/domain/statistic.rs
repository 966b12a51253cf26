//! Case counts and the reports that carry them

use std::ops::{Add, AddAssign};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confirmed, recovered and death counts for one region at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub confirmed_count: i64,
    pub recovered_count: i64,
    pub death_count: i64,
}

impl Statistic {
    pub fn new(confirmed_count: i64, recovered_count: i64, death_count: i64) -> Self {
        Self {
            confirmed_count,
            recovered_count,
            death_count,
        }
    }

    /// Cases neither recovered nor dead.
    pub fn existing_count(&self) -> i64 {
        self.confirmed_count - self.recovered_count - self.death_count
    }

    pub fn recovered_percent(&self) -> f64 {
        share(self.recovered_count, self.confirmed_count)
    }

    pub fn death_percent(&self) -> f64 {
        share(self.death_count, self.confirmed_count)
    }

    /// Component-wise sum of several statistics, `None` when there are none.
    pub fn join<'a, I>(stats: I) -> Option<Statistic>
    where
        I: IntoIterator<Item = &'a Statistic>,
    {
        let mut iter = stats.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, stat| acc + *stat))
    }
}

fn share(part: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

impl Add for Statistic {
    type Output = Statistic;

    fn add(self, rhs: Statistic) -> Statistic {
        Statistic {
            confirmed_count: self.confirmed_count + rhs.confirmed_count,
            recovered_count: self.recovered_count + rhs.recovered_count,
            death_count: self.death_count + rhs.death_count,
        }
    }
}

impl AddAssign for Statistic {
    fn add_assign(&mut self, rhs: Statistic) {
        *self = *self + rhs;
    }
}

/// Current snapshot of a region: a statistic plus when it was last updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub last_update: DateTime<Utc>,
    pub stat: Statistic,
}

impl Report {
    pub fn new(last_update: DateTime<Utc>, stat: Statistic) -> Self {
        Self { last_update, stat }
    }

    /// Combines several reports into one.
    ///
    /// Statistics are summed and the most recent `last_update` wins.
    /// Returns `None` for an empty input.
    pub fn join<'a, I>(reports: I) -> Option<Report>
    where
        I: IntoIterator<Item = &'a Report>,
    {
        let mut iter = reports.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, report| Report {
            last_update: acc.last_update.max(report.last_update),
            stat: acc.stat + report.stat,
        }))
    }
}

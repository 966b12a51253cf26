//! Date-keyed history of statistics

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Statistic;

/// Historical statistics of a region, at most one per date, sorted by date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    pub series: BTreeMap<NaiveDate, Statistic>,
}

impl TimeSeries {
    pub fn new(series: BTreeMap<NaiveDate, Statistic>) -> Self {
        Self { series }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&Statistic> {
        self.series.get(date)
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<(NaiveDate, &Statistic)> {
        self.series.iter().next_back().map(|(date, stat)| (*date, stat))
    }

    /// Merges several series into one.
    ///
    /// The result covers the union of all dates; statistics sharing a date are
    /// summed. Returns `None` for an empty input.
    pub fn join<'a, I>(serieses: I) -> Option<TimeSeries>
    where
        I: IntoIterator<Item = &'a TimeSeries>,
    {
        let mut iter = serieses.into_iter().peekable();
        iter.peek()?;

        let mut series: BTreeMap<NaiveDate, Statistic> = BTreeMap::new();
        for time_series in iter {
            for (date, stat) in &time_series.series {
                *series.entry(*date).or_default() += *stat;
            }
        }
        Some(TimeSeries { series })
    }
}

impl FromIterator<(NaiveDate, Statistic)> for TimeSeries {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, Statistic)>>(iter: T) -> Self {
        Self {
            series: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, day).unwrap()
    }

    #[test]
    fn given_overlapping_series_when_join_then_sums_per_date_over_union() {
        let a: TimeSeries = [(date(1), Statistic::new(1, 0, 0)), (date(2), Statistic::new(2, 1, 0))]
            .into_iter()
            .collect();
        let b: TimeSeries = [(date(2), Statistic::new(3, 0, 1)), (date(3), Statistic::new(4, 0, 1))]
            .into_iter()
            .collect();

        let joined = TimeSeries::join([&a, &b]).unwrap();

        assert_eq!(joined.len(), 3);
        assert_eq!(joined.get(&date(1)), Some(&Statistic::new(1, 0, 0)));
        assert_eq!(joined.get(&date(2)), Some(&Statistic::new(5, 1, 1)));
        assert_eq!(joined.get(&date(3)), Some(&Statistic::new(4, 0, 1)));
    }

    #[test]
    fn given_no_series_when_join_then_none() {
        let empty: Vec<&TimeSeries> = Vec::new();
        assert!(TimeSeries::join(empty).is_none());
    }

    #[test]
    fn given_series_then_latest_is_last_date() {
        let ts: TimeSeries = [(date(5), Statistic::new(9, 0, 0)), (date(2), Statistic::new(1, 0, 0))]
            .into_iter()
            .collect();
        assert_eq!(ts.latest(), Some((date(5), &Statistic::new(9, 0, 0))));
    }

    #[test]
    fn given_series_when_serialized_then_dates_are_keys() {
        let ts: TimeSeries = [(date(4), Statistic::new(1, 2, 3))].into_iter().collect();
        let json = serde_json::to_value(&ts).unwrap();
        assert_eq!(json["series"]["2020-03-04"]["confirmedCount"], 1);
        let back: TimeSeries = serde_json::from_value(json).unwrap();
        assert_eq!(back, ts);
    }
}

//! Region: one node of the world → country → province hierarchy
//!
//! Leaves carry their own report and time series. Interior nodes always hold the
//! join of their children's, recomputed whenever the children are replaced.

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use chrono::{Local, NaiveDate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::domain::{Change, Coordinate, Level, Report, TimeSeries};

/// Name of the root region.
pub const WORLD_NAME: &str = "Worldwide";

/// Name given to a joined region whose children carry no parent name.
pub const UNKNOWN_NAME: &str = "N/A";

/// A series whose latest entry is this many days old (or older) is stale.
pub const STALE_AFTER_DAYS: i64 = 2;

/// Tree node of the geographic hierarchy.
///
/// Equality is an identity rule: two regions are equal when their
/// `(level, parent_name, name)` match **or** their locations match.
/// Ordering by case count is available through [`Region::cmp_confirmed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawRegion")]
pub struct Region {
    level: Level,
    name: String,
    /// Name of the enclosing country; `None` for the world and joined regions
    parent_name: Option<String>,
    location: Coordinate,
    report: Option<Report>,
    time_series: Option<TimeSeries>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sub_regions: Vec<Region>,
    /// Memoized daily change, reset whenever report, series or children change
    #[serde(skip)]
    daily_change: OnceLock<Option<Change>>,
}

/// Decoded form of a [`Region`] before its aggregates are rebuilt.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegion {
    level: Level,
    name: String,
    parent_name: Option<String>,
    location: Coordinate,
    #[serde(default)]
    report: Option<Report>,
    #[serde(default)]
    time_series: Option<TimeSeries>,
    #[serde(default)]
    sub_regions: Vec<Region>,
}

impl From<RawRegion> for Region {
    /// Leaves keep their stored report and series. Interior nodes discard
    /// theirs and rejoin from the decoded children.
    fn from(raw: RawRegion) -> Self {
        let mut region = Region::new(raw.level, raw.name, raw.parent_name, raw.location);
        if raw.sub_regions.is_empty() {
            region.report = raw.report;
            region.time_series = raw.time_series;
        } else {
            region.set_sub_regions(raw.sub_regions);
        }
        region
    }
}

impl Region {
    /// New leaf without children, report or time series.
    pub fn new(
        level: Level,
        name: impl Into<String>,
        parent_name: Option<String>,
        location: Coordinate,
    ) -> Self {
        Self {
            level,
            name: name.into(),
            parent_name,
            location,
            report: None,
            time_series: None,
            sub_regions: Vec::new(),
            daily_change: OnceLock::new(),
        }
    }

    /// Freshly constructed root of the hierarchy.
    pub fn world() -> Self {
        Self::new(Level::World, WORLD_NAME, None, Coordinate::ZERO)
    }

    /// Synthetic parent of `sub_regions`, `None` if the slice is empty.
    ///
    /// Level, name and location derive from the inputs directly. The parent does
    /// not adopt the inputs as children: its report and time series stay empty
    /// until [`Region::set_sub_regions`] is called. See [`Region::join_owned`]
    /// for the one-step form.
    pub fn join(sub_regions: &[Region]) -> Option<Region> {
        let first = sub_regions.first()?;
        let locations: Vec<Coordinate> = sub_regions.iter().map(|r| r.location).collect();

        Some(Region::new(
            first.level.parent(),
            first.parent_name.as_deref().unwrap_or(UNKNOWN_NAME),
            None,
            Coordinate::center(&locations),
        ))
    }

    /// Joins `sub_regions` and assigns them as children of the result.
    pub fn join_owned(sub_regions: Vec<Region>) -> Option<Region> {
        let mut parent = Self::join(&sub_regions)?;
        parent.set_sub_regions(sub_regions);
        Some(parent)
    }

    pub fn with_report(mut self, report: Report) -> Self {
        self.set_report(Some(report));
        self
    }

    pub fn with_time_series(mut self, time_series: TimeSeries) -> Self {
        self.set_time_series(Some(time_series));
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn time_series(&self) -> Option<&TimeSeries> {
        self.time_series.as_ref()
    }

    pub fn sub_regions(&self) -> &[Region] {
        &self.sub_regions
    }

    pub fn is_leaf(&self) -> bool {
        self.sub_regions.is_empty()
    }

    pub fn is_country(&self) -> bool {
        self.level == Level::Country
    }

    pub fn is_province(&self) -> bool {
        self.level == Level::Province
    }

    /// `"{name}, {parent}"` for provinces, the plain name otherwise.
    pub fn long_name(&self) -> String {
        if self.is_province() {
            format!("{}, {}", self.name, self.parent_name.as_deref().unwrap_or("-"))
        } else {
            self.name.clone()
        }
    }

    /// Confirmed count of the current report, `0` when unknown.
    pub fn confirmed_count(&self) -> i64 {
        self.report.map_or(0, |r| r.stat.confirmed_count)
    }

    /// Orders regions by confirmed count, a missing report counting as `0`.
    pub fn cmp_confirmed(&self, other: &Region) -> Ordering {
        self.confirmed_count().cmp(&other.confirmed_count())
    }

    /// Replaces the current report. Meant for leaves: an interior node's report
    /// is overwritten on the next child assignment.
    pub fn set_report(&mut self, report: Option<Report>) {
        self.report = report;
        self.invalidate_daily_change();
    }

    /// Replaces the time series. Meant for leaves, like [`Region::set_report`].
    pub fn set_time_series(&mut self, time_series: Option<TimeSeries>) {
        self.time_series = time_series;
        self.invalidate_daily_change();
    }

    /// Replaces the children and recomputes report and time series from them.
    ///
    /// Children without a report (or series) are skipped rather than counted as
    /// zero; if none has one, the aggregate is `None`.
    #[instrument(level = "trace", skip_all, fields(region = %self.name, children = sub_regions.len()))]
    pub fn set_sub_regions(&mut self, sub_regions: Vec<Region>) {
        self.report = Report::join(sub_regions.iter().filter_map(|r| r.report.as_ref()));
        self.time_series =
            TimeSeries::join(sub_regions.iter().filter_map(|r| r.time_series.as_ref()));
        self.sub_regions = sub_regions;
        self.invalidate_daily_change();
        trace!(
            confirmed = self.confirmed_count(),
            dates = self.time_series.as_ref().map_or(0, TimeSeries::len),
            "aggregated children"
        );
    }

    fn invalidate_daily_change(&mut self) {
        self.daily_change = OnceLock::new();
    }

    /// Change since the previous day, computed on first read and memoized.
    ///
    /// Interior nodes sum their children's changes, skipping children without one.
    /// Leaves derive it from their report and time series relative to today's
    /// local date.
    pub fn daily_change(&self) -> Option<Change> {
        *self.daily_change.get_or_init(|| {
            if self.is_leaf() {
                self.leaf_change(Local::now().date_naive())
            } else {
                Change::sum(self.sub_regions.iter().filter_map(Region::daily_change))
            }
        })
    }

    /// Same derivation as [`Region::daily_change`] against an explicit `today`,
    /// bypassing the cache.
    pub fn daily_change_on(&self, today: NaiveDate) -> Option<Change> {
        if self.is_leaf() {
            self.leaf_change(today)
        } else {
            Change::sum(self.sub_regions.iter().filter_map(|r| r.daily_change_on(today)))
        }
    }

    fn leaf_change(&self, today: NaiveDate) -> Option<Change> {
        let report = self.report.as_ref()?;
        let time_series = self.time_series.as_ref()?;

        // latest first
        let mut dates = time_series.series.iter().rev();
        let (last_date, last_stat) = dates.next()?;
        if (today - *last_date).num_days() >= STALE_AFTER_DAYS {
            trace!(region = %self.name, %last_date, "stale time series");
            return None;
        }

        // series already holds today's numbers as its latest entry
        let baseline = if report.stat.confirmed_count == last_stat.confirmed_count {
            let (_, next_to_last) = dates.next()?;
            next_to_last
        } else {
            last_stat
        };

        Some(Change::between(&report.stat, baseline))
    }

    /// Computes and caches the daily change of every node in the subtree,
    /// visiting siblings in parallel.
    pub fn warm_daily_changes(&self) {
        self.sub_regions
            .par_iter()
            .for_each(Region::warm_daily_changes);
        self.daily_change();
    }

    /// `self` if equal to `region`, else the first equal direct child.
    ///
    /// Does not descend below the immediate children.
    pub fn find(&self, region: &Region) -> Option<&Region> {
        if region == self {
            return Some(self);
        }
        self.sub_regions.iter().find(|r| *r == region)
    }

    /// Pre-order traversal of the subtree rooted at `self`.
    pub fn walk(&self) -> RegionIter<'_> {
        RegionIter { stack: vec![self] }
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        (self.level == other.level
            && self.parent_name == other.parent_name
            && self.name == other.name)
            || self.location == other.location
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_name())
    }
}

pub struct RegionIter<'a> {
    stack: Vec<&'a Region>,
}

impl<'a> Iterator for RegionIter<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.sub_regions.iter().rev());
        Some(current)
    }
}

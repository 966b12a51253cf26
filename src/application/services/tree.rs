//! Assembling the world hierarchy from flat leaf regions.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::{Level, Region};

/// Builds the world tree from leaf regions.
///
/// Provinces are grouped by their parent name. A group becomes the children of
/// the country-level region of that name if the input has one, otherwise of a
/// country joined from the group. All countries become children of
/// [`Region::world`], so every interior node aggregates its children.
///
/// Siblings are ordered by confirmed count, largest first.
#[instrument(level = "debug", skip_all, fields(leaves = leaves.len()))]
pub fn build_world(leaves: Vec<Region>) -> Region {
    let (provinces, mut countries): (Vec<Region>, Vec<Region>) =
        leaves.into_iter().partition(Region::is_province);
    countries.retain(|region| {
        let keep = region.level() == Level::Country;
        if !keep {
            debug!(region = %region.name(), "dropping world-level leaf");
        }
        keep
    });

    let groups = provinces
        .into_iter()
        .into_group_map_by(|province| province.parent_name().map(str::to_owned));

    for (parent_name, mut group) in groups {
        sort_by_confirmed(&mut group);
        let existing = countries
            .iter_mut()
            .find(|country| Some(country.name()) == parent_name.as_deref());
        match existing {
            Some(country) => {
                debug!(country = %country.name(), provinces = group.len(), "attaching provinces");
                country.set_sub_regions(group);
            }
            None => {
                if let Some(country) = Region::join_owned(group) {
                    debug!(country = %country.name(), "joined country from provinces");
                    countries.push(country);
                }
            }
        }
    }

    sort_by_confirmed(&mut countries);
    let mut world = Region::world();
    world.set_sub_regions(countries);
    world
}

/// Attaches time series from a separate source to the matching leaf regions.
///
/// Regions are matched by region equality, so a series region whose name is
/// spelled differently still attaches when its location matches. Returns the
/// number of series attached.
#[instrument(level = "debug", skip_all, fields(regions = regions.len(), series = series.len()))]
pub fn attach_time_series(regions: &mut [Region], series: Vec<Region>) -> usize {
    let mut attached = 0;
    for source in series {
        let Some(time_series) = source.time_series() else {
            continue;
        };
        match regions.iter_mut().find(|region| **region == source) {
            Some(region) => {
                region.set_time_series(Some(time_series.clone()));
                attached += 1;
            }
            None => debug!(region = %source.long_name(), "no matching region for time series"),
        }
    }
    attached
}

fn sort_by_confirmed(regions: &mut [Region]) {
    regions.sort_by(|a, b| b.cmp_confirmed(a).then_with(|| a.name().cmp(b.name())));
}

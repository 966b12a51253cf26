//! Tests for assembling the world hierarchy

use chrono::{Duration, Local, Utc};

use corona::application::services::tree::{attach_time_series, build_world};
use corona::domain::{Coordinate, Level, Region, Report, Statistic, TimeSeries, UNKNOWN_NAME};

fn report(confirmed: i64) -> Report {
    Report::new(Utc::now(), Statistic::new(confirmed, 0, 0))
}

fn yesterday_series(confirmed: i64) -> TimeSeries {
    [(
        Local::now().date_naive() - Duration::days(1),
        Statistic::new(confirmed, 0, 0),
    )]
    .into_iter()
    .collect()
}

fn province(name: &str, country: Option<&str>, lat: f64, confirmed: i64) -> Region {
    Region::new(
        Level::Province,
        name,
        country.map(str::to_string),
        Coordinate::new(lat, 1.0),
    )
    .with_report(report(confirmed))
}

fn country(name: &str, lat: f64, confirmed: i64) -> Region {
    Region::new(Level::Country, name, None, Coordinate::new(lat, 2.0)).with_report(report(confirmed))
}

#[test]
fn given_countries_and_provinces_when_building_world_then_groups_by_parent() {
    // Arrange
    let leaves = vec![
        country("Italy", 1.0, 300),
        province("Hubei", Some("China"), 2.0, 800),
        province("Henan", Some("China"), 3.0, 100),
        province("Ontario", Some("Canada"), 4.0, 20),
    ];

    // Act
    let world = build_world(leaves);

    // Assert
    assert_eq!(world.level(), Level::World);
    assert_eq!(world.confirmed_count(), 1220);
    let names: Vec<&str> = world.sub_regions().iter().map(Region::name).collect();
    assert_eq!(names, vec!["China", "Italy", "Canada"]);

    let china = &world.sub_regions()[0];
    assert!(china.is_country());
    assert_eq!(china.confirmed_count(), 900);
    assert_eq!(china.location(), Coordinate::new(2.5, 1.0));
    let provinces: Vec<&str> = china.sub_regions().iter().map(Region::name).collect();
    assert_eq!(provinces, vec!["Hubei", "Henan"]);
}

#[test]
fn given_country_leaf_with_provinces_when_building_world_then_provinces_replace_its_report() {
    // Arrange: the country-level entry has a stale total, provinces are authoritative
    let leaves = vec![
        country("Australia", 1.0, 5),
        province("Victoria", Some("Australia"), 2.0, 30),
        province("Queensland", Some("Australia"), 3.0, 12),
    ];

    // Act
    let world = build_world(leaves);

    // Assert
    assert_eq!(world.sub_regions().len(), 1);
    let australia = &world.sub_regions()[0];
    assert_eq!(australia.location(), Coordinate::new(1.0, 2.0));
    assert_eq!(australia.confirmed_count(), 42);
    assert_eq!(australia.sub_regions().len(), 2);
}

#[test]
fn given_province_without_parent_when_building_world_then_joins_under_sentinel() {
    let world = build_world(vec![province("Diamond Princess", None, 1.0, 700)]);

    assert_eq!(world.sub_regions()[0].name(), UNKNOWN_NAME);
    assert_eq!(world.confirmed_count(), 700);
}

#[test]
fn given_world_level_leaf_when_building_world_then_dropped() {
    let stray = Region::world().with_report(report(1_000_000));

    let world = build_world(vec![stray, country("Italy", 1.0, 3)]);

    assert_eq!(world.sub_regions().len(), 1);
    assert_eq!(world.confirmed_count(), 3);
}

#[test]
fn given_no_leaves_when_building_world_then_empty_world() {
    let world = build_world(Vec::new());

    assert!(world.sub_regions().is_empty());
    assert!(world.report().is_none());
    assert!(world.daily_change().is_none());
}

#[test]
fn given_built_world_then_daily_change_rolls_up() {
    let leaves = vec![
        country("Italy", 1.0, 110).with_time_series(yesterday_series(100)),
        province("Hubei", Some("China"), 2.0, 55).with_time_series(yesterday_series(50)),
        province("Henan", Some("China"), 3.0, 20),
    ];

    let world = build_world(leaves);

    assert_eq!(world.daily_change().unwrap().new_confirmed, 15);
    let china = world.sub_regions().iter().find(|r| r.name() == "China").unwrap();
    assert_eq!(china.daily_change().unwrap().new_confirmed, 5);
}

#[test]
fn given_series_from_other_source_when_attaching_then_matches_by_identity_or_location() {
    // Arrange
    let mut regions = vec![
        country("Korea, South", 36.0, 10),
        province("Hubei", Some("China"), 30.0, 800),
        country("Iran", 32.0, 5),
    ];
    let series = vec![
        // different name, same location
        Region::new(Level::Country, "South Korea", None, Coordinate::new(36.0, 2.0))
            .with_time_series(yesterday_series(8)),
        // same identity, slightly different location
        Region::new(Level::Province, "Hubei", Some("China".into()), Coordinate::new(30.5, 1.0))
            .with_time_series(yesterday_series(700)),
        // no match
        Region::new(Level::Country, "Atlantis", None, Coordinate::new(-50.0, -50.0))
            .with_time_series(yesterday_series(1)),
        // no series to attach
        Region::new(Level::Country, "Iran", None, Coordinate::new(32.0, 2.0)),
    ];

    // Act
    let attached = attach_time_series(&mut regions, series);

    // Assert
    assert_eq!(attached, 2);
    assert!(regions[0].time_series().is_some());
    assert!(regions[1].time_series().is_some());
    assert!(regions[2].time_series().is_none());
    assert_eq!(regions[0].daily_change().unwrap().new_confirmed, 2);
}

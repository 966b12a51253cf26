//! Hierarchical epidemic statistics.
//!
//! Leaf regions (countries and provinces) carry a current [`domain::Report`] and a
//! [`domain::TimeSeries`]. Interior regions aggregate their children, and every
//! region derives a [`domain::Change`] against the previous day.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

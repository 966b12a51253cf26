//! Domain layer: the region hierarchy and its statistics
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod change;
pub mod coordinate;
pub mod error;
pub mod level;
pub mod region;
pub mod statistic;
pub mod time_series;

pub use change::Change;
pub use coordinate::Coordinate;
pub use error::DomainError;
pub use level::Level;
pub use region::{Region, RegionIter, STALE_AFTER_DAYS, UNKNOWN_NAME, WORLD_NAME};
pub use statistic::{Report, Statistic};
pub use time_series::TimeSeries;

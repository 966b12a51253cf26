//! Application services

pub mod query;
pub mod region;
pub mod tree;

pub use region::RegionService;

//! Region data service
//!
//! Loads leaf regions from JSON, assembles the world tree and writes it back out.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::services::tree::{attach_time_series, build_world};
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Region;
use crate::infrastructure::traits::FileSystem;

/// Service for reading, assembling and persisting region trees.
pub struct RegionService {
    fs: Arc<dyn FileSystem>,
}

impl RegionService {
    /// Create a new region service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read a JSON array of regions.
    #[instrument(level = "debug", skip(self))]
    pub fn load_regions(&self, path: &Path) -> ApplicationResult<Vec<Region>> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read regions", path)?;
        let regions: Vec<Region> =
            serde_json::from_str(&content).map_err(|source| ApplicationError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("load_regions: {} regions from {}", regions.len(), path.display());
        Ok(regions)
    }

    /// Build the world tree from a leaf file, optionally taking time series
    /// from a second file.
    ///
    /// The daily change of every node is computed before returning.
    #[instrument(level = "debug", skip(self))]
    pub fn load_world(&self, reports: &Path, series: Option<&Path>) -> ApplicationResult<Region> {
        let mut leaves = self.load_regions(reports)?;

        if let Some(series_path) = series {
            let series_regions = self.load_regions(series_path)?;
            let total = series_regions.len();
            let attached = attach_time_series(&mut leaves, series_regions);
            debug!("load_world: attached {}/{} time series", attached, total);
        }

        let world = build_world(leaves);
        world.warm_daily_changes();
        Ok(world)
    }

    /// Write a region tree as pretty-printed JSON.
    #[instrument(level = "debug", skip(self, region), fields(region = %region.name()))]
    pub fn save_region(&self, region: &Region, path: &Path) -> ApplicationResult<()> {
        let json = serde_json::to_string_pretty(region).map_err(|e| {
            ApplicationError::OperationFailed {
                context: format!("encode region {}", region.name()),
                source: Box::new(e),
            }
        })?;
        self.fs
            .ensure_parent(path)
            .with_path_context("create parent directory", path)?;
        self.fs
            .write(path, &json)
            .with_path_context("write region tree", path)
    }
}

//! Dataset path resolution shared by commands

use std::path::{Path, PathBuf};

use flightpath_core::config::RouterConfig;
use flightpath_core::error::{Result, RouteError};

/// Resolve which dataset file to load.
///
/// An explicit `--data` path wins over the `dataset` entry in the config.
/// Fails with `NoDataset` when neither is set.
pub fn resolve_dataset_path(data: Option<&Path>, config: &RouterConfig) -> Result<PathBuf> {
    data.map(Path::to_path_buf)
        .or_else(|| config.dataset.clone())
        .ok_or(RouteError::NoDataset)
}

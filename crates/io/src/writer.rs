//! Chart file output.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::chart::BarChart;
use crate::error::IoError;

/// Renders `chart` and writes it to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the chart layout is invalid, or
/// [`IoError::Io`] if the file cannot be written.
pub fn write_svg(path: &Path, chart: &BarChart) -> Result<(), IoError> {
    let svg = chart.to_svg()?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| IoError::io(parent, e))?;
    }
    fs::write(path, svg).map_err(|e| IoError::io(path, e))?;
    info!(path = %path.display(), bars = chart.bars().len(), "wrote chart");
    Ok(())
}

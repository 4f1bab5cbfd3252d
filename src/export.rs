use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::bindings::ChartTarget;
use crate::chart::ChartSpec;

/// Pretty JSON object keyed by graph id.
pub fn charts_json(charts: &BTreeMap<ChartTarget, ChartSpec>) -> serde_json::Result<String> {
    let by_id: BTreeMap<&str, &ChartSpec> = charts.iter().map(|(t, c)| (t.id(), c)).collect();
    serde_json::to_string_pretty(&by_id)
}

/// Write the displayed chart specs to `path`.
pub fn export_charts(path: &Path, charts: &BTreeMap<ChartTarget, ChartSpec>) -> Result<()> {
    let json = charts_json(charts).context("serialising chart specs")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!("Exported {} chart specs to {}", charts.len(), path.display());
    Ok(())
}

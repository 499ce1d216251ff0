use crate::io::text::parse_clock_label;
use crate::series::LoadSamples;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cognitive-load document the analysis backend serves for a finished job.
///
/// `labels` are `mm:ss` positions on the video timeline; both load arrays run
/// parallel to it. Wire names are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub labels: Vec<String>,
    pub instantaneous_load_data: Vec<f64>,
    pub cumulative_load_data: Vec<f64>,
}

impl AnalysisPayload {
    /// The instantaneous series with labels converted to seconds.
    pub fn instantaneous(&self) -> Result<LoadSamples> {
        self.series(&self.instantaneous_load_data)
    }

    /// The cumulative series with labels converted to seconds.
    pub fn cumulative(&self) -> Result<LoadSamples> {
        self.series(&self.cumulative_load_data)
    }

    fn series(&self, values: &[f64]) -> Result<LoadSamples> {
        let times = self
            .labels
            .iter()
            .map(|label| parse_clock_label(label))
            .collect::<Result<Vec<_>>>()
            .context("converting timeline labels")?;
        Ok(LoadSamples {
            times,
            values: values.to_vec(),
        })
    }
}

/// Load an analysis payload from a JSON file on disk.
pub fn read_payload(path: &Path) -> Result<AnalysisPayload> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

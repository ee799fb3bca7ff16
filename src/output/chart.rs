// Bar chart renderer
//
// Draws one bar per directory key with labeled axes and a title,
// written as a PNG via the plotters bitmap backend. An empty mapping
// still produces a valid (axes-only) image.

use crate::config::ChartSettings;
use crate::error::{Error, Result};
use crate::scan::MatchCounts;
use plotters::prelude::*;
use std::path::Path;

/// Renders match counts as a bar chart image
pub struct ChartRenderer {
    settings: ChartSettings,
}

impl ChartRenderer {
    /// Create a renderer with the given chart settings
    pub fn new(settings: ChartSettings) -> Self {
        Self { settings }
    }

    /// Render the counts to an image file
    pub fn render(&self, results: &MatchCounts, path: &Path) -> Result<()> {
        // The root directory's empty key gets a visible axis label
        let labels: Vec<String> = results
            .iter()
            .map(|(key, _)| if key.is_empty() { ".".to_string() } else { key.to_string() })
            .collect();
        let counts: Vec<u64> = results.iter().map(|(_, count)| count).collect();

        let x_max = labels.len().max(1);
        let y_max = counts.iter().copied().max().unwrap_or(0) + 1;

        let area = BitMapBackend::new(path, (self.settings.width, self.settings.height))
            .into_drawing_area();
        area.fill(&WHITE).map_err(|e| Error::chart(e.to_string()))?;

        let mut chart = ChartBuilder::on(&area)
            .caption(&self.settings.title, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(90)
            .y_label_area_size(60)
            .build_cartesian_2d(0usize..x_max, 0u64..y_max)
            .map_err(|e| Error::chart(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(x_max)
            .x_label_formatter(&|idx| labels.get(*idx).cloned().unwrap_or_default())
            .x_desc("Subdirectory")
            .y_desc("Matching File Count")
            .draw()
            .map_err(|e| Error::chart(e.to_string()))?;

        chart
            .draw_series(
                counts
                    .iter()
                    .enumerate()
                    .map(|(i, &count)| Rectangle::new([(i, 0), (i + 1, count)], BLUE.filled())),
            )
            .map_err(|e| Error::chart(e.to_string()))?;

        area.present().map_err(|e| Error::chart(e.to_string()))?;
        Ok(())
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(ChartSettings::default())
    }
}

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::style::{CAPTION_FONT, LABEL_FONT};

/// One stacked panel of a bar figure.
#[derive(Debug, Clone)]
pub struct BarPanel {
    pub title: String,
    pub points: Vec<(f64, f64)>,
}

/// Renders vertically stacked bar panels, one per series, to a PNG file.
pub fn render_bar_panels<P: AsRef<Path>>(
    output_path: P,
    panels: &[BarPanel],
    x_label: &str,
    y_label: &str,
) -> Result<(), Box<dyn Error>> {
    if panels.is_empty() {
        return Err("no panels to draw".into());
    }

    let root = BitMapBackend::new(output_path.as_ref(), (1000, 400 * panels.len() as u32))
        .into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((panels.len(), 1));

    for (panel, area) in panels.iter().zip(areas.iter()) {
        if panel.points.is_empty() {
            return Err(format!("panel '{}' has no points", panel.title).into());
        }
        let max_x = panel.points.iter().map(|p| p.0).fold(0.0, f64::max);
        let max_y = panel.points.iter().map(|p| p.1).fold(0.0, f64::max);

        let mut chart = ChartBuilder::on(area)
            .caption(panel.title.as_str(), CAPTION_FONT)
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..max_x * 1.05 + 1.0, 0.0..max_y * 1.1 + 1.0)?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .axis_desc_style(LABEL_FONT)
            .draw()?;

        let width = bar_width(&panel.points);
        chart.draw_series(panel.points.iter().map(|&(x, y)| {
            Rectangle::new([(x - width / 2.0, 0.0), (x + width / 2.0, y)], BLUE.filled())
        }))?;
    }

    root.present()?;
    Ok(())
}

// Bars follow the tightest spacing between thread counts so panels with
// power-of-two thread steps still read as separate bars.
fn bar_width(points: &[(f64, f64)]) -> f64 {
    let mut min_gap = f64::INFINITY;
    for pair in points.windows(2) {
        let gap = pair[1].0 - pair[0].0;
        if gap > 0.0 && gap < min_gap {
            min_gap = gap;
        }
    }
    if min_gap.is_finite() { min_gap * 0.8 } else { 1.0 }
}

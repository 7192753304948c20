use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::style::{GUIDE_COLOR, LABEL_FONT};

/// One line on a chart.
#[derive(Debug, Clone)]
pub struct LineSpec {
    /// Legend label; an empty label keeps the series out of the legend.
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub dashed: bool,
}

/// Axis labels and fixed bounds for a line chart.
#[derive(Debug, Clone)]
pub struct LineChartOptions {
    pub x_label: String,
    pub y_label: String,
    /// Thread counts marked with a dashed vertical guide.
    pub guides: Vec<f64>,
    /// Fixed y-range; computed from the data when absent.
    pub y_range: Option<(f64, f64)>,
}

/// Renders a multi-series line chart to a PNG file.
pub fn render_line_chart<P: AsRef<Path>>(
    output_path: P,
    series: &[LineSpec],
    options: &LineChartOptions,
) -> Result<(), Box<dyn Error>> {
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for spec in series {
        for &(x, y) in &spec.points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    for &g in &options.guides {
        min_x = min_x.min(g);
        max_x = max_x.max(g);
    }
    if let Some((lo, hi)) = options.y_range {
        min_y = lo;
        max_y = hi;
    }
    if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
        return Err("no points to plot".into());
    }
    if min_x == max_x {
        max_x = min_x + 1.0;
    }
    if min_y == max_y {
        max_y = min_y + 1.0;
    }

    let root = BitMapBackend::new(output_path.as_ref(), (1000, 750)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

    chart
        .configure_mesh()
        .x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str())
        .axis_desc_style(LABEL_FONT)
        .draw()?;

    for spec in series {
        let style = ShapeStyle::from(&spec.color).stroke_width(2);
        let anno = if spec.dashed {
            chart.draw_series(DashedLineSeries::new(
                spec.points.iter().copied(),
                6,
                4,
                style,
            ))?
        } else {
            chart.draw_series(LineSeries::new(spec.points.iter().copied(), style))?
        };
        if !spec.label.is_empty() {
            anno.label(spec.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], style)
            });
        }
    }

    for &guide in &options.guides {
        chart.draw_series(DashedLineSeries::new(
            [(guide, min_y), (guide, max_y)],
            4,
            4,
            ShapeStyle::from(&GUIDE_COLOR).stroke_width(1),
        ))?;
    }

    if series.iter().any(|s| !s.label.is_empty()) {
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_renders_png() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("lines.png");

        let series = vec![
            LineSpec {
                label: "Local Node".to_string(),
                points: (1..=16).map(|i| (i as f64, (i * i) as f64)).collect(),
                color: BLUE,
                dashed: false,
            },
            LineSpec {
                label: "Est 200ns".to_string(),
                points: vec![(17.0, 300.0), (33.0, 420.0)],
                color: GREEN,
                dashed: true,
            },
        ];
        let options = LineChartOptions {
            x_label: "Number of Threads".to_string(),
            y_label: "Number of operations".to_string(),
            guides: vec![8.0],
            y_range: None,
        };

        render_line_chart(&out, &series, &options).unwrap();
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("empty.png");
        let options = LineChartOptions {
            x_label: String::new(),
            y_label: String::new(),
            guides: Vec::new(),
            y_range: None,
        };
        assert!(render_line_chart(&out, &[], &options).is_err());
    }
}

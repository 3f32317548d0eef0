use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::{
    config::PlotConfig,
    layout::{GroupedBarChart, LegendPosition},
};

use std::path::Path;

static FONT: &str = "sans-serif";

/// Default color cycle of the classic plotting tools, so that the images look
/// like the ones produced before.
static COLORS: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

pub fn series_color(series_index: usize) -> RGBColor {
    COLORS[series_index % COLORS.len()]
}

// font sizes are given in points, like the figure size is given in inches
fn points_to_pixels(points: f64, dpi: u32) -> u32 {
    (points * dpi as f64 / 72.0).round() as u32
}

pub fn render_png(chart: &GroupedBarChart, path: &Path, config: &PlotConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create folder {}", parent.display()))?;
        }
    }

    draw(chart, path, config).with_context(|| format!("could not draw {}", path.display()))
}

fn draw(chart: &GroupedBarChart, path: &Path, config: &PlotConfig) -> Result<()> {
    let dpi = config.dpi;
    let root = BitMapBackend::new(path, config.pixel_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let title_font_size = points_to_pixels(12.0, dpi);
    let label_font_size = points_to_pixels(10.0, dpi);
    let tick_font_size = points_to_pixels(8.0, dpi);

    let (x_start, x_end) = chart.x_range();

    // tight bounding box: only reserve room for what is actually drawn
    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(points_to_pixels(4.0, dpi))
        .x_label_area_size(
            tick_font_size * 2 + chart.x_label.as_ref().map_or(0, |_| label_font_size * 2),
        )
        .y_label_area_size(tick_font_size * 3 + label_font_size * 2);

    if let Some(title) = &chart.title {
        builder.caption(title, (FONT, title_font_size));
    }

    let mut cartesian = builder.build_cartesian_2d(x_start..x_end, 0f64..chart.y_max())?;

    let num_groups = chart.num_groups();
    let tick_formatter = |x: &f64| {
        let index = x.round();
        if index >= 0.0 && (x - index).abs() < 0.3 {
            chart
                .tick_labels
                .get(index as usize)
                .cloned()
                .unwrap_or_default()
        } else {
            String::new()
        }
    };

    let mut mesh = cartesian.configure_mesh();
    mesh.disable_x_mesh()
        .disable_y_mesh()
        .x_labels(num_groups)
        .x_label_formatter(&tick_formatter)
        .y_desc(chart.y_label)
        .label_style((FONT, tick_font_size))
        .axis_desc_style((FONT, label_font_size));
    if let Some(x_label) = &chart.x_label {
        mesh.x_desc(x_label.as_str());
    }
    mesh.draw()?;

    for (series_index, series) in chart.series.iter().enumerate() {
        let color = series_color(series_index);

        cartesian
            .draw_series(series.bars.iter().map(|bar| {
                Rectangle::new([(bar.left(), 0.0), (bar.right(), bar.height)], color.filled())
            }))?
            .label(series.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    let position = match chart.legend_position {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
    };
    cartesian
        .configure_series_labels()
        .position(position)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, tick_font_size))
        .draw()?;

    root.present()?;

    Ok(())
}

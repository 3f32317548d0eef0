use anyhow::{anyhow, bail, Context, Result};
use charming::{
    component::{Axis, Legend, Title},
    element::{AxisType, NameLocation, Tooltip, Trigger},
    series::Bar,
    Chart, HtmlRenderer,
};

use crate::layout::{GroupedBarChart, LegendPosition};

use std::{env, path::Path, process::Command};

static PAGE_TITLE: &str = "channel benchmark";

pub fn build_chart(chart: &GroupedBarChart) -> Chart {
    let (legend_left, legend_top) = match chart.legend_position {
        LegendPosition::UpperLeft => ("left", "top"),
    };

    let mut x_axis = Axis::new()
        .type_(AxisType::Category)
        .data(chart.tick_labels.clone());
    if let Some(x_label) = &chart.x_label {
        x_axis = x_axis
            .name(x_label.as_str())
            .name_location(NameLocation::Middle)
            .name_gap(30);
    }

    let mut echarts = Chart::new()
        .background_color("white")
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().left(legend_left).top(legend_top))
        .x_axis(x_axis)
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(chart.y_label)
                .name_location(NameLocation::Middle)
                .name_gap(40),
        );

    if let Some(title) = &chart.title {
        echarts = echarts.title(Title::new().text(title.as_str()).left("center"));
    }

    for series in &chart.series {
        let heights: Vec<f64> = series.bars.iter().map(|bar| bar.height).collect();
        echarts = echarts.series(Bar::new().name(series.label).data(heights));
    }

    echarts
}

pub fn render_html(chart: &GroupedBarChart, path: &Path, (width, height): (u32, u32)) -> Result<()> {
    let echarts = build_chart(chart);

    HtmlRenderer::new(PAGE_TITLE, width as u64, height as u64)
        .save(&echarts, path)
        .map_err(|err| anyhow!("could not write {}: {err:?}", path.display()))
}

/// Whether a graphical session is available to show the chart in.
pub fn display_available() -> bool {
    if cfg!(target_os = "linux") {
        ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|var| env::var_os(var).is_some_and(|value| !value.is_empty()))
    } else {
        true
    }
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg("-W").arg(path);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "/WAIT", ""]).arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

/// Opens `path` with the platform viewer.
///
/// On macOS and Windows this blocks until the viewer is closed. `xdg-open` has no way to
/// wait, so on other systems it returns as soon as the viewer was handed the page.
pub fn show(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    let status = command
        .status()
        .with_context(|| format!("could not start viewer {:?}", command.get_program()))?;

    if !status.success() {
        bail!("viewer for {} exited with {status}", path.display());
    }

    Ok(())
}

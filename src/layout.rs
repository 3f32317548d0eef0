use crate::{data::MeasurementMatrix, series};

/// Total width of a group of bars, in units of the distance between two ticks.
pub static GROUP_WIDTH: f64 = 0.5;
/// msg/s to msg/µs
pub static THROUGHPUT_SCALE: f64 = 1e-6;
pub static Y_LABEL: &str = "msg/µs";

static Y_HEADROOM: f64 = 1.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub center: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    pub fn left(&self) -> f64 {
        self.center - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub label: &'static str,
    pub bars: Vec<Bar>,
}

/// Backend-independent description of the grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    pub tick_labels: Vec<String>,
    pub series: Vec<BarSeries>,
    pub x_label: Option<String>,
    pub y_label: &'static str,
    pub title: Option<String>,
    pub legend_position: LegendPosition,
}

/// Offset of the center of bar `index` from the center of its group.
///
/// Bar centers are spread evenly over `[-GROUP_WIDTH / 2, GROUP_WIDTH / 2]`, so the two
/// outermost centers sit exactly on the group boundary.
pub fn bar_offset(index: usize, num_bars: usize) -> f64 {
    if num_bars < 2 {
        return 0.0;
    }

    -GROUP_WIDTH / 2.0 + index as f64 * GROUP_WIDTH / (num_bars - 1) as f64
}

pub fn bar_width(num_bars: usize) -> f64 {
    GROUP_WIDTH / num_bars.max(1) as f64
}

impl GroupedBarChart {
    pub fn new(matrix: &MeasurementMatrix, x_label: Option<String>, title: Option<String>) -> Self {
        let tick_labels = matrix
            .parameter_labels()
            .iter()
            .map(|parameter| parameter.to_string())
            .collect();

        let specs = series::series();
        let num_series = specs.len();
        let width = bar_width(num_series);

        let bar_series = specs
            .iter()
            .enumerate()
            .map(|(series_index, spec)| {
                let offset = bar_offset(series_index, num_series);

                let bars = matrix
                    .series_column(spec)
                    .into_iter()
                    .enumerate()
                    .map(|(row_index, throughput)| Bar {
                        center: row_index as f64 + offset,
                        width,
                        height: throughput * THROUGHPUT_SCALE,
                    })
                    .collect();

                BarSeries {
                    label: spec.label,
                    bars,
                }
            })
            .collect();

        Self {
            tick_labels,
            series: bar_series,
            x_label,
            y_label: Y_LABEL,
            title,
            legend_position: LegendPosition::UpperLeft,
        }
    }

    pub fn num_groups(&self) -> usize {
        self.tick_labels.len()
    }

    /// Horizontal extent of the categorical axis, half a tick spacing beyond the outer ticks.
    pub fn x_range(&self) -> (f64, f64) {
        (-0.5, self.num_groups() as f64 - 0.5)
    }

    pub fn y_max(&self) -> f64 {
        let tallest = self
            .series
            .iter()
            .flat_map(|series| series.bars.iter())
            .map(|bar| bar.height)
            .fold(0.0_f64, f64::max);

        if tallest > 0.0 {
            tallest * Y_HEADROOM
        } else {
            1.0
        }
    }
}

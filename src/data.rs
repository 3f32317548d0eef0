use anyhow::{bail, Context, Result};
use strum::{EnumCount, IntoEnumIterator};

use crate::series::{self, Channel, SeriesSpec, COLUMN_COUNT};

use std::{collections::HashSet, fs, path::Path};

/// Rectangular matrix of benchmark results, one row per parameter value:
/// `[parameter, throughput of every channel in msg/s]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementMatrix {
    rows: Vec<Vec<f64>>,
    parameter_name: Option<String>,
}

impl MeasurementMatrix {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read data file {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("invalid data file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut parameter_name = None;

        for (line_index, line) in content.lines().enumerate() {
            let line_number = line_index + 1;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                if let Some(header) = ColumnHeader::parse(comment) {
                    header.check_order().with_context(|| {
                        format!("unexpected column header on line {line_number}")
                    })?;
                    parameter_name = Some(header.parameter_name);
                }
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().with_context(|| {
                        format!("line {line_number}: '{token}' is not a number")
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            if let Some(first_row) = rows.first() {
                if row.len() != first_row.len() {
                    bail!(
                        "line {line_number}: expected {} columns like the rows before, found {}",
                        first_row.len(),
                        row.len()
                    );
                }
            }

            rows.push(row);
        }

        let Some(first_row) = rows.first() else {
            bail!("no data rows found");
        };

        if first_row.len() != COLUMN_COUNT {
            let labels: Vec<_> = series::series().iter().map(|spec| spec.label).collect();
            bail!(
                "expected {COLUMN_COUNT} columns (the parameter, then {}), found {}",
                labels.join(", "),
                first_row.len()
            );
        }

        Ok(Self {
            rows,
            parameter_name,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn parameters(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row[0])
    }

    /// Parameters are integral in practice; fractional values are truncated.
    pub fn parameter_labels(&self) -> Vec<i64> {
        self.parameters().map(|parameter| parameter as i64).collect()
    }

    pub fn series_column(&self, spec: &SeriesSpec) -> Vec<f64> {
        self.rows.iter().map(|row| row[spec.column_index]).collect()
    }

    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter_name.as_deref()
    }
}

/// Column header written by the benchmark runner: the parameter name, which may span
/// several words, followed by one name per channel.
struct ColumnHeader<'a> {
    parameter_name: String,
    series_names: Vec<&'a str>,
}

impl<'a> ColumnHeader<'a> {
    // any other comment is left alone
    fn parse(comment: &'a str) -> Option<Self> {
        let tokens: Vec<_> = comment.split_whitespace().collect();
        if tokens.len() <= Channel::COUNT {
            return None;
        }

        let (parameter_tokens, series_names) = tokens.split_at(tokens.len() - Channel::COUNT);

        let found: HashSet<_> = series_names.iter().map(|name| normalize_name(name)).collect();
        let expected: HashSet<_> = Channel::iter()
            .map(|channel| normalize_name(channel.bench_name()))
            .collect();
        if found != expected {
            return None;
        }

        Some(Self {
            parameter_name: parameter_tokens.join(" "),
            series_names: series_names.to_vec(),
        })
    }

    fn check_order(&self) -> Result<()> {
        for (channel, name) in Channel::iter().zip(&self.series_names) {
            if normalize_name(name) != normalize_name(channel.bench_name()) {
                bail!(
                    "column {} is '{name}', but it is plotted as '{}'",
                    channel.column_index() + 1,
                    channel.label()
                );
            }
        }

        Ok(())
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

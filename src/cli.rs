use clap::Parser;
use std::path::PathBuf;

/// Plot channel throughput benchmark results as a grouped bar chart.
#[derive(Parser, Debug)]
#[command()]
pub struct Args {
    /// Whitespace-separated data file; the first column is the parameter, the next
    /// columns are the throughputs of the benchmarked channels in msg/s
    pub data_file: PathBuf,

    /// Label of the x axis
    pub x_label: Option<String>,

    /// Title of the plot
    pub title: Option<String>,

    /// Where to write the PNG image [default: bench.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file with plot settings (output path, dpi, figure size)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only write the image, don't open the interactive view
    #[arg(long)]
    pub no_show: bool,
}

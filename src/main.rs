mod cli;
mod config;
mod data;
mod layout;
mod plots;
mod series;

use anyhow::Result;
use clap::Parser;

use cli::Args;
use config::PlotConfig;
use data::MeasurementMatrix;
use layout::GroupedBarChart;

fn main() -> Result<()> {
    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let config = PlotConfig::from_args(&args)?;

    let matrix = MeasurementMatrix::load(&args.data_file)?;
    println!(
        "Plotting {} parameter value(s){} from {}",
        matrix.num_rows(),
        matrix
            .parameter_name()
            .map(|name| format!(" of '{name}'"))
            .unwrap_or_default(),
        args.data_file.display()
    );

    let chart = GroupedBarChart::new(&matrix, args.x_label, args.title);

    plots::save_and_show(&chart, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn plots_two_row_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("funnel.txt");
        let output = dir.path().join("bench.png");
        fs::write(
            &data_file,
            "1 1e6 2e6 3e6 4e6 5e6\n2 1.1e6 2.1e6 3.1e6 4.1e6 5.1e6\n",
        )
        .unwrap();

        let args = Args::try_parse_from([
            "plot",
            data_file.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--no-show",
        ])
        .unwrap();

        match run(args) {
            Ok(()) => assert_eq!(&fs::read(&output).unwrap()[1..4], b"PNG"),
            // text rendering needs a system font, which minimal containers lack
            Err(err) if format!("{err:#}").to_lowercase().contains("font") => {}
            Err(err) => panic!("{err:#}"),
        }
    }

    #[test]
    fn missing_data_file_fails_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("bench.png");

        let args = Args::try_parse_from([
            "plot",
            dir.path().join("missing.txt").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--no-show",
        ])
        .unwrap();

        assert!(run(args).is_err());
        assert!(!output.exists());
    }
}

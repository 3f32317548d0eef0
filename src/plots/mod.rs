pub mod bitmap;
pub mod interactive;

use anyhow::Result;

use crate::{config::PlotConfig, layout::GroupedBarChart};

/// Writes the PNG image and then, if enabled, opens the interactive view.
///
/// The image is always written first, so a failing or missing viewer never costs the
/// result. Existing files are overwritten.
pub fn save_and_show(chart: &GroupedBarChart, config: &PlotConfig) -> Result<()> {
    bitmap::render_png(chart, &config.output, config)?;
    println!("Generated: {}", config.output.display());

    if !config.show {
        return Ok(());
    }

    let html_output = config.html_output();
    interactive::render_html(chart, &html_output, config.pixel_size())?;
    println!("Generated: {}", html_output.display());

    if !interactive::display_available() {
        eprintln!("No display available, not opening {}", html_output.display());
        return Ok(());
    }

    interactive::show(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MeasurementMatrix;

    fn render_or_skip(chart: &GroupedBarChart, config: &PlotConfig) -> bool {
        match save_and_show(chart, config) {
            Ok(()) => true,
            // text rendering needs a system font, which minimal containers lack
            Err(err) if format!("{err:#}").to_lowercase().contains("font") => {
                eprintln!("skipping, no usable font: {err:#}");
                false
            }
            Err(err) => panic!("rendering failed: {err:#}"),
        }
    }

    #[test]
    fn writes_png_without_showing() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlotConfig {
            output: dir.path().join("bench.png"),
            show: false,
            ..PlotConfig::default()
        };

        let matrix = MeasurementMatrix::parse(
            "1 1e6 2e6 3e6 4e6 5e6\n\
             2 1.1e6 2.1e6 3.1e6 4.1e6 5.1e6\n",
        )
        .unwrap();
        let chart = GroupedBarChart::new(&matrix, None, None);

        if !render_or_skip(&chart, &config) {
            return;
        }

        let png = std::fs::read(&config.output).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        assert!(!config.html_output().exists());
    }

    fn assert_unwritable(output: std::path::PathBuf) {
        let config = PlotConfig {
            output,
            ..PlotConfig::default()
        };
        let matrix = MeasurementMatrix::parse("1 1 2 3 4 5\n").unwrap();

        assert!(save_and_show(&GroupedBarChart::new(&matrix, None, None), &config).is_err());
        assert!(!config.html_output().exists());
    }

    #[test]
    fn output_below_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("results.txt");
        std::fs::write(&file, "1 1 2 3 4 5\n").unwrap();

        assert_unwritable(file.join("bench.png"));
    }

    #[test]
    fn output_that_is_a_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("bench.png");
        std::fs::create_dir(&output).unwrap();

        assert_unwritable(output);
    }

    #[test]
    fn second_render_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlotConfig {
            output: dir.path().join("nested").join("bench.png"),
            show: false,
            ..PlotConfig::default()
        };

        let small = MeasurementMatrix::parse("1 1 2 3 4 5\n").unwrap();
        let large = MeasurementMatrix::parse(
            "1 1e6 2e6 3e6 4e6 5e6\n2 1e6 2e6 3e6 4e6 5e6\n4 1e6 2e6 3e6 4e6 5e6\n",
        )
        .unwrap();

        if !render_or_skip(
            &GroupedBarChart::new(&small, None, Some(String::from("first"))),
            &config,
        ) {
            return;
        }
        assert!(render_or_skip(
            &GroupedBarChart::new(&large, Some(String::from("tasks")), None),
            &config,
        ));

        let entries: Vec<_> = std::fs::read_dir(dir.path().join("nested"))
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(&std::fs::read(&config.output).unwrap()[1..4], b"PNG");
    }
}

//! GnuPlot data files and scripts.
//!
//! Each plot is a [`PlotBundle`]: a whitespace-separated `.dat` file, a `.gp`
//! script that reads it, and the PNG the script produces. Paths inside the
//! scripts point into the directory passed to the builders, so writing both
//! artifacts there and running `gnuplot <script>` from any working directory
//! renders the image next to them.

use std::fmt::Write as _;
use std::path::Path;

use netflux_io::PlotRecord;

const TERMINAL: &str = "set terminal pngcairo size 1000,600 enhanced font 'Sans,10'";

/// A named text file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Full file contents.
    pub contents: String,
}

/// Data file, script and target image of one plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotBundle {
    /// Short plot name, also the stem of the data and script file names.
    pub name: &'static str,
    /// `.dat` file.
    pub data: Artifact,
    /// `.gp` script.
    pub script: Artifact,
    /// File name of the PNG the script renders.
    pub image: String,
}

struct Names {
    data: String,
    image: String,
    data_path: String,
    image_path: String,
}

fn names(stem: &str, image_stem: &str, out_dir: &Path) -> Names {
    let data = format!("{stem}_data.dat");
    let image = format!("{image_stem}.png");
    Names {
        data_path: out_dir.join(&data).display().to_string(),
        image_path: out_dir.join(&image).display().to_string(),
        data,
        image,
    }
}

fn bundle(name: &'static str, names: Names, data: String, script: String) -> PlotBundle {
    PlotBundle {
        name,
        data: Artifact {
            file_name: names.data,
            contents: data,
        },
        script: Artifact {
            file_name: format!("{name}_plot.gp"),
            contents: script,
        },
        image: names.image,
    }
}

fn preamble(script: &mut String, title: &str, ylabel: &str, image_path: &str) {
    // Writing into a String cannot fail.
    let _ = writeln!(script, "{TERMINAL}");
    let _ = writeln!(script, "set output '{image_path}'");
    let _ = writeln!(script, "set title '{title}'");
    let _ = writeln!(script, "set xlabel 'Hour'");
    let _ = writeln!(script, "set ylabel '{ylabel}'");
    let _ = writeln!(script, "set grid");
    let _ = writeln!(script, "set key outside right top");
}

/// Observed bandwidth with peaks highlighted.
pub fn bandwidth_plot(records: &[PlotRecord], out_dir: &Path) -> PlotBundle {
    let names = names("bandwidth", "bandwidth_analysis", out_dir);
    let mut data = String::from("# Hour Bandwidth_Mbps Peak\n");
    for r in records {
        let _ = writeln!(
            data,
            "{:.3} {:.3} {}",
            r.hour,
            r.bandwidth,
            u8::from(r.is_peak)
        );
    }
    let mut script = String::new();
    preamble(&mut script, "Network Bandwidth", "Bandwidth (Mbps)", &names.image_path);
    let _ = writeln!(
        script,
        "plot '{0}' using 1:2 with linespoints lw 2 pt 7 title 'Bandwidth', \\\n     '{0}' using 1:($3 == 1 ? $2 : 1/0) with points pt 9 ps 2 lc rgb 'red' title 'Peak'",
        names.data_path
    );
    bundle("bandwidth", names, data, script)
}

/// Gradient and curvature around a zero line.
pub fn gradient_plot(records: &[PlotRecord], out_dir: &Path) -> PlotBundle {
    let names = names("gradient", "gradient_analysis", out_dir);
    let mut data = String::from("# Hour Gradient Curvature\n");
    for r in records {
        let _ = writeln!(data, "{:.3} {:.3} {:.3}", r.hour, r.gradient, r.curvature);
    }
    let mut script = String::new();
    preamble(
        &mut script,
        "Rate of Change",
        "Mbps/hour, Mbps/hour^2",
        &names.image_path,
    );
    let _ = writeln!(script, "set xzeroaxis lt -1");
    let _ = writeln!(
        script,
        "plot '{0}' using 1:2 with linespoints lw 2 pt 7 title 'Gradient', \\\n     '{0}' using 1:3 with lines dt 2 title 'Curvature'",
        names.data_path
    );
    bundle("gradient", names, data, script)
}

/// Observed day followed by the predicted day, split by a dashed separator.
///
/// Predicted values are placed at `last_hour + 1 + i`; the column a row does
/// not belong to holds `NaN`, which the script declares missing.
pub fn rk4_plot(records: &[PlotRecord], out_dir: &Path) -> PlotBundle {
    let names = names("rk4", "rk4_prediction", out_dir);
    let last_hour = records.last().map_or(0.0, |r| r.hour);
    let mut data = String::from("# Hour Historical_Mbps Predicted_Mbps\n");
    for r in records {
        let _ = writeln!(data, "{:.3} {:.3} {:.3}", r.hour, r.bandwidth, f64::NAN);
    }
    for (i, r) in records.iter().enumerate() {
        let hour = last_hour + 1.0 + i as f64;
        let _ = writeln!(data, "{hour:.3} {:.3} {:.3}", f64::NAN, r.rk4_prediction);
    }
    let mut script = String::new();
    preamble(
        &mut script,
        "RK4 Prediction vs Historical",
        "Bandwidth (Mbps)",
        &names.image_path,
    );
    let _ = writeln!(script, "set datafile missing 'NaN'");
    let _ = writeln!(
        script,
        "set arrow from {0:.1}, graph 0 to {0:.1}, graph 1 nohead dt 2 lc rgb 'gray'",
        last_hour + 0.5
    );
    let _ = writeln!(
        script,
        "plot '{0}' using 1:2 with linespoints lw 2 pt 7 title 'Historical', \\\n     '{0}' using 1:3 with linespoints lw 2 pt 5 title 'RK4 Prediction'",
        names.data_path
    );
    bundle("rk4", names, data, script)
}

/// Every plot, in report order.
pub fn all_plots(records: &[PlotRecord], out_dir: &Path) -> Vec<PlotBundle> {
    vec![
        bandwidth_plot(records, out_dir),
        gradient_plot(records, out_dir),
        rk4_plot(records, out_dir),
    ]
}

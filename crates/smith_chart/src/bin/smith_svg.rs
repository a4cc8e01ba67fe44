//! # Smith SVG
//!
//! Command-line host: mounts a chart on a virtual canvas and writes it as SVG.
//!
//! ```bash
//! smith_svg 800 600
//! smith_svg 800 600 --config chart.toml --out chart.svg
//! ```

use smith_chart::{CanvasSize, ChartConfig, SmithChart, SvgSurface};

fn usage() {
    eprintln!("Usage: smith_svg <width> <height> [--config <file.toml>] [--out <file.svg>]");
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        usage();
        std::process::exit(2);
    }

    let (Ok(width), Ok(height)) = (args[1].parse::<f64>(), args[2].parse::<f64>()) else {
        eprintln!("Error: width and height must be numbers");
        usage();
        std::process::exit(2);
    };

    let config = match flag_value(&args, "--config") {
        Some(path) => match ChartConfig::from_toml_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => ChartConfig::default(),
    };

    let size = CanvasSize::new(width, height);
    let background = config.style.background;
    let mut chart = SmithChart::new(config);
    let count = chart.mount(size).len();

    let mut surface = SvgSurface::new(size).with_background(background);
    chart.present(&mut surface);
    let svg = surface.finish();

    match flag_value(&args, "--out") {
        Some(path) => {
            if let Err(e) = std::fs::write(path, svg) {
                eprintln!("Error: could not write {path}: {e}");
                std::process::exit(1);
            }
            eprintln!("Wrote {count} primitives to {path}");
        }
        None => print!("{svg}"),
    }
}

use anyhow::Context;
use clap::Parser;
use horncore::prelude::{Language, LengthUnit};
use horncore::report;
use request::DesignRequest;
use schematic::{svg, SchematicModel};
use std::fs;
use std::path::PathBuf;

mod request;
mod schematic;

#[derive(Parser)]
#[command(author, version, about = "Pyramidal horn antenna design driver")]
struct Args {
    /// Operating frequency, MHz
    #[arg(long, default_value_t = 1420.4)]
    frequency: f64,
    /// Desired antenna input impedance, ohms
    #[arg(long, default_value_t = 50.0)]
    impedance: f64,
    /// Desired antenna gain, dBi
    #[arg(long, default_value_t = 20.2)]
    gain: f64,
    /// Display unit selector: 0 = mm, 1 = cm, 2 = m
    #[arg(long, default_value_t = 0)]
    unit: u8,
    /// Report label language (en, ru)
    #[arg(long, default_value = "en")]
    lang: String,
    /// Load the design targets from a YAML request file
    #[arg(long)]
    request: Option<PathBuf>,
    /// Emit the result record as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Write an annotated top/side schematic SVG to the given path
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = if let Some(path) = args.request {
        DesignRequest::load(path)?
    } else {
        DesignRequest::from_args(args.frequency, args.impedance, args.gain)
    };

    let input = request.to_input();
    let dims = horncore::solve(&input).context("solving horn dimensions")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dims)?);
    } else {
        let unit = LengthUnit::from_selector(args.unit);
        let lang = Language::from_code(&args.lang);
        print!("{}", report::render(&input, &dims, unit, lang));
    }

    if let Some(path) = args.svg {
        let model = SchematicModel::from_dimensions(&dims);
        fs::write(&path, svg::render(&model))
            .with_context(|| format!("writing schematic {}", path.display()))?;
        log::info!("schematic written to {}", path.display());
    }

    Ok(())
}

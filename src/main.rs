//! Molscene CLI
//!
//! Usage:
//!   molscene [OPTIONS] [FILE]
//!
//! Options:
//!   -v, --view <VIEW>        planar (default) or spatial
//!   -f, --format <FORMAT>    svg (default) or json (spatial only)
//!   -c, --config <FILE>      Layout/spatial/view settings (TOML format)
//!   -s, --stylesheet <FILE>  Element colors and radii (TOML format)
//!   -t, --time <SECONDS>     Spin time for the spatial view
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use molscene::{
    load, layout, render_scene_svg, render_svg, spatial, RenderConfig, RenderError, Spin,
    Stylesheet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Normalized 2D diagram
    Planar,
    /// Ball-and-stick 3D scene
    Spatial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Parser)]
#[command(name = "molscene")]
#[command(about = "Render molecule records as planar diagrams and 3D scenes")]
struct Cli {
    /// Input molecule record (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Which view to produce
    #[arg(short, long, value_enum, default_value_t = View::Planar)]
    view: View,

    /// Output format; json emits the 3D scene description
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stylesheet file for element colors (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Seconds of turntable rotation applied to the spatial view
    #[arg(short, long, default_value_t = 0.0)]
    time: f32,

    /// Hide lone-pair markers
    #[arg(long)]
    no_lone_pairs: bool,

    /// Hide charge badges
    #[arg(long)]
    no_charges: bool,

    /// Fail instead of skipping unresolvable atoms and bonds
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let (source, filename) = match read_input(&cli) {
        Ok(input) => input,
        Err(e) => {
            log::error!("reading input failed: {}", e);
            eprintln!("Error: could not load the molecule. Please try again.");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config, &source) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(RenderError::Parse(e)) => {
            eprint!("{}", e.format(&source, &filename));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<RenderConfig, String> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_file(path)
            .map_err(|e| format!("loading config '{}': {}", path.display(), e))?,
        None => RenderConfig::default(),
    };

    if let Some(path) = &cli.stylesheet {
        let stylesheet = Stylesheet::from_file(path)
            .map_err(|e| format!("loading stylesheet '{}': {}", path.display(), e))?;
        config = config.with_stylesheet(stylesheet);
    }

    if cli.no_lone_pairs {
        config.view.show_lone_pairs = false;
    }
    if cli.no_charges {
        config.view.show_charges = false;
    }
    if cli.strict {
        config.strict = true;
    }
    Ok(config)
}

fn read_input(cli: &Cli) -> io::Result<(String, String)> {
    match &cli.input {
        Some(path) => Ok((fs::read_to_string(path)?, path.display().to_string())),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok((buffer, "<stdin>".to_string()))
        }
    }
}

fn run(cli: &Cli, config: &RenderConfig, source: &str) -> Result<String, RenderError> {
    let molecule = load(source, config)?;

    match (cli.view, cli.format) {
        (View::Planar, Format::Svg) => {
            let result = layout::compute(&molecule, &config.layout);
            Ok(render_svg(&molecule, &result, config))
        }
        (View::Planar, Format::Json) => {
            log::warn!("json output describes the spatial scene; ignoring --view planar");
            spatial_json(cli, config, &molecule)
        }
        (View::Spatial, Format::Json) => spatial_json(cli, config, &molecule),
        (View::Spatial, Format::Svg) => {
            let spin = spin_at(cli, config);
            let scene = spatial::build_scene(&molecule, &config.stylesheet, &config.spatial, &spin);
            Ok(render_scene_svg(&molecule, &scene, config))
        }
    }
}

fn spatial_json(
    cli: &Cli,
    config: &RenderConfig,
    molecule: &molscene::Molecule,
) -> Result<String, RenderError> {
    let spin = spin_at(cli, config);
    let scene = spatial::build_scene(molecule, &config.stylesheet, &config.spatial, &spin);
    Ok(serde_json::to_string_pretty(&scene)?)
}

fn spin_at(cli: &Cli, config: &RenderConfig) -> Spin {
    let mut spin = Spin::new(config.spatial.spin_rate);
    match Duration::try_from_secs_f32(cli.time) {
        Ok(elapsed) => spin.advance(elapsed),
        Err(e) => log::warn!("ignoring --time {}: {}", cli.time, e),
    }
    spin
}

mod script;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use canvas::CanvasError;
use canvas::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_CANVAS_SIDE};
use canvas::engine::EngineCore;
use canvas::picker::ColorPicker;
use clap::{Args, Parser, Subcommand};
use museum::{ArtworkProvider, FetchOutcome, MetClient, MuseumConfig, MuseumError, Selection};
use script::ScriptError;
use tracing::info;

const SQUARE_FILENAME: &str = "hue-square.png";
const RAMP_FILENAME: &str = "hue-ramp.png";

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("museum: {0}")]
    Museum(#[from] MuseumError),
    #[error("canvas: {0}")]
    Canvas(#[from] CanvasError),
    #[error("script: {0}")]
    Script(#[from] ScriptError),
    #[error("failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("no artwork available right now; try again")]
    Unavailable,
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "artstudy", about = "Random artwork and sketching study tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one random artwork and print its metadata as JSON.
    Artwork(ArtworkCommand),
    /// Replay a pointer script onto a blank surface and export the drawing.
    Sketch(SketchCommand),
    /// Render the color picker square and hue ramp for a hue.
    Swatch(SwatchCommand),
}

#[derive(Args, Debug)]
struct ArtworkCommand {
    /// Pick from the whole collection, keeping only these departments.
    #[arg(long = "department")]
    departments: Vec<String>,

    /// Pick from the whole collection with the built-in department allow-list.
    #[arg(long, conflicts_with = "departments")]
    catalog: bool,
}

#[derive(Args, Debug)]
struct SketchCommand {
    /// Script path, or `-` for stdin.
    #[arg(long, default_value = "-")]
    input: String,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH, value_parser = canvas_side())]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT, value_parser = canvas_side())]
    height: u32,
}

fn canvas_side() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_CANVAS_SIDE))
}

#[derive(Args, Debug)]
struct SwatchCommand {
    /// Hue in degrees.
    #[arg(long, default_value_t = 0.0)]
    hue: f64,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Artwork(cmd) => run_artwork(cmd).await,
        Command::Sketch(cmd) => run_sketch(&cmd),
        Command::Swatch(cmd) => run_swatch(&cmd),
    }
}

fn selection_for(cmd: ArtworkCommand) -> Selection {
    if !cmd.departments.is_empty() {
        Selection::Departments(cmd.departments)
    } else if cmd.catalog {
        Selection::default_departments()
    } else {
        Selection::default()
    }
}

async fn run_artwork(cmd: ArtworkCommand) -> Result<(), AppError> {
    let config = MuseumConfig::from_env()?;
    let client = MetClient::new(&config)?;
    info!(base_url = %client.base_url(), max_attempts = config.max_attempts, "fetching artwork");

    let mut provider = ArtworkProvider::new(client, selection_for(cmd), config.max_attempts);
    match provider.fetch_another().await {
        FetchOutcome::Found(art) => {
            println!("{}", serde_json::to_string_pretty(&art)?);
            Ok(())
        }
        FetchOutcome::Unavailable => Err(AppError::Unavailable),
    }
}

fn open_script(input: &str) -> Result<Box<dyn BufRead>, AppError> {
    if input == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let path = PathBuf::from(input);
    match File::open(&path) {
        Ok(file) => Ok(Box::new(BufReader::new(file))),
        Err(source) => Err(AppError::Open { path, source }),
    }
}

fn run_sketch(cmd: &SketchCommand) -> Result<(), AppError> {
    let events = script::parse(open_script(&cmd.input)?)?;

    let mut core = EngineCore::new(cmd.width, cmd.height);
    let stats = script::replay(&mut core, &events);
    info!(events = stats.events, segments = stats.segments, picks = stats.picks, "script replayed");

    fs::create_dir_all(&cmd.out_dir)?;
    let path = core.export()?.save_in(&cmd.out_dir)?;
    info!(path = %path.display(), "drawing exported");
    Ok(())
}

fn run_swatch(cmd: &SwatchCommand) -> Result<(), AppError> {
    let mut picker = ColorPicker::new();
    picker.set_hue(cmd.hue);

    fs::create_dir_all(&cmd.out_dir)?;
    for (name, raster) in [(SQUARE_FILENAME, picker.square()), (RAMP_FILENAME, picker.ramp())] {
        let path = cmd.out_dir.join(name);
        fs::write(&path, raster.encode_png()?)?;
        info!(path = %path.display(), hue = picker.hue(), "swatch written");
    }
    Ok(())
}

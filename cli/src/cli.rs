use std::path::PathBuf;

/// Vernacular map CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "vernamap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render a static SVG snapshot of the map
    Render(RenderArgs),

    /// List the district labels visible at a zoom level
    Labels(LabelsArgs),

    /// Print the info panel of a feature
    Inspect(InspectArgs),
}

/// Where the data comes from and how the view is configured.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Base directory (or http(s) URL) holding data/points.geojson, data/lines.geojson, data/districts.geojson
    pub base: String,

    /// Map configuration file (TOML)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output SVG file, defaults to "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Zoom level, defaults to the configured initial zoom
    #[arg(short, long)]
    pub zoom: Option<f64>,

    /// Open the info panel for the first feature with this name
    #[arg(long)]
    pub select: Option<String>,

    /// Expand the selected feature's text
    #[arg(long, requires = "select")]
    pub expand: bool,

    /// Show the about panel
    #[arg(long)]
    pub about: bool,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1200.0)]
    pub width: f64,
}

#[derive(clap::Args, Debug)]
pub struct LabelsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Zoom level, defaults to the configured initial zoom
    #[arg(short, long)]
    pub zoom: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Feature name
    pub name: String,

    /// Show the full text instead of the preview
    #[arg(long)]
    pub expand: bool,
}

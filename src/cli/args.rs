use clap::Parser;
use std::path::PathBuf;

use tilery::types::{TileScaling, TitleFont, TitlePlacement};

#[derive(Parser)]
#[command(name = "tilery", version, about = "TILERY CLI")]
pub struct CliArgs {
    /// Input image files, in tile order
    #[arg(short, long, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Input directory of images (alternative to --input; sorted by name)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output mosaic path (.png, .jpg or .jpeg)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Grid size as ROWSxCOLS; either side may be omitted (e.g. "2x3", "2x", "x3")
    #[arg(long)]
    pub grid: Option<String>,

    /// Exact tile size as WIDTHxHEIGHT (e.g. "640x480")
    #[arg(long)]
    pub tile_size: Option<String>,

    /// Tile size aggregation when --tile-size is not given (default: avg)
    #[arg(long, value_enum)]
    pub scaling: Option<TileScaling>,

    /// Letterbox padding color as hex (default: #D9D9D9)
    #[arg(long)]
    pub padding_color: Option<String>,

    /// Margin between tiles in pixels (default: 10)
    #[arg(long)]
    pub margin: Option<usize>,

    /// Margin color as hex (default: #BFBEBD)
    #[arg(long)]
    pub margin_color: Option<String>,

    /// Per-tile title, repeatable in input order; pass "" to skip a tile
    #[arg(long)]
    pub title: Vec<String>,

    /// Default title placement when no anchor is given (default: top)
    #[arg(long, value_enum)]
    pub placement: Option<TitlePlacement>,

    /// Title text scale; computed from the tile resolution when omitted
    #[arg(long)]
    pub title_scale: Option<f32>,

    /// Title stroke thickness (default: 1)
    #[arg(long)]
    pub title_thickness: Option<usize>,

    /// Title background padding in pixels (default: 10)
    #[arg(long)]
    pub title_padding: Option<usize>,

    /// Title glyph table (default: basic)
    #[arg(long, value_enum)]
    pub title_font: Option<TitleFont>,

    /// Title text color as hex (default: #262523)
    #[arg(long)]
    pub title_color: Option<String>,

    /// Title background color as hex (default: #D9D9D9)
    #[arg(long)]
    pub title_background_color: Option<String>,

    /// JSON preset file with tiling parameters; explicit flags override it
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

use std::path::PathBuf;

use clap::Parser;

/// lumascii — Interactive brightness-matching ASCII art generator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source image (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: PathBuf,

    /// TOML config file.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Initial grid resolution (characters per row; rounded to a power of two).
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Initial charset: preset name (digits, compact, standard) or literal characters.
    #[arg(long)]
    pub charset: Option<String>,

    /// Output mode: console or html.
    #[arg(long)]
    pub output: Option<String>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

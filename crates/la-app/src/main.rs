use anyhow::Result;
use clap::Parser;
use la_core::config::{self, OutputMode, SessionConfig};

pub mod cli;
pub mod output;
pub mod pipeline;
pub mod session;
pub mod shell;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialize logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Load config, then apply CLI overrides
    let mut config = resolve_config(&cli)?;
    if let Some(resolution) = cli.resolution {
        config.resolution = resolution;
        config.clamp_all();
    }
    if let Some(ref charset) = cli.charset {
        config.charset = config::resolve_charset(charset);
    }
    if let Some(ref mode) = cli.output {
        config.output = match mode.as_str() {
            "console" => OutputMode::Console,
            "html" => OutputMode::Html,
            _ => {
                log::warn!("unknown output mode '{mode}', keeping {:?}", config.output);
                config.output
            }
        };
    }

    // 4. Load the initial image and build the session
    let image = la_image::load_image(&cli.image)?;
    let mut session = session::Session::new(image, &config);

    // 5. Interactive loop
    shell::run(&mut session)
}

/// Load the config file, or fall back to defaults when it does not exist.
fn resolve_config(cli: &cli::Cli) -> Result<SessionConfig> {
    if cli.config.exists() {
        config::load_config(&cli.config)
    } else {
        log::warn!(
            "config not found: {}. Using defaults.",
            cli.config.display()
        );
        Ok(SessionConfig::default())
    }
}

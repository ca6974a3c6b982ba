use clap::Parser;
use guidebook::core::config::{self, ResolvedConfig};
use guidebook::core::content;
use guidebook::core::export::{self, DumpFormat};
use guidebook::core::state::App;
use guidebook::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "guidebook", version, about = "Terminal reader for the built-in web performance guide")]
struct Args {
    /// Read configuration from this file instead of ~/.guidebook/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the whole guide to stdout and exit
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    dump: Option<DumpFormat>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to guidebook.log in current directory.
    // Starts fully open so config loading is logged; narrowed once resolved.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("guidebook.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let resolved = resolve_config(args.config.as_deref());
    log::set_max_level(resolved.log_level);
    log::info!("Guidebook starting up");
    log::debug!("Resolved config: {:?}", resolved);

    let catalog = match content::guide() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Built-in guide is invalid: {}", e);
            eprintln!("guidebook: built-in guide is invalid: {e}");
            std::process::exit(1);
        }
    };

    if let Some(format) = args.dump {
        let output = export::render(&catalog, format, resolved.wrap_width)
            .map_err(std::io::Error::other)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            writeln!(stdout)?;
        }
        return Ok(());
    }

    tui::run(App::new(catalog), &resolved)
}

/// A broken config file is reported and replaced by defaults; it never stops the reader.
fn resolve_config(path: Option<&std::path::Path>) -> ResolvedConfig {
    let loaded = match path {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    match loaded {
        Ok(file_config) => config::resolve(&file_config),
        Err(e) => {
            log::warn!("Ignoring config: {}", e);
            eprintln!("guidebook: {e}; using defaults");
            config::resolve(&config::GuidebookConfig::default())
        }
    }
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ascedit::assets::AssetLoader;
use ascedit::models::AppConfig;
use ascedit::services::ConvertService;
use ascedit_color::{Alpha, Format};

#[derive(Parser)]
#[command(name = "ascedit")]
#[command(about = "Color tools for the ascedit character art editor")]
struct Cli {
    /// Config file (defaults to CONFIG_FILE, then the embedded config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color or palette name into other representations
    Convert {
        /// Palette name, "rgb(R, G, B)", "rgba(R, G, B, A)" or hex
        color: String,

        /// Output format (rgb, rgbf, hsvf); repeat for several
        #[arg(short, long)]
        to: Vec<Format>,

        /// Override alpha as a fraction of full opacity (e.g. 0.5)
        #[arg(short, long)]
        alpha: Option<f32>,
    },
    /// List the configured palette
    Palette,
    /// Write the embedded default config.yaml for customization
    Init {
        /// Destination path (defaults to the config path or ./config.yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ascedit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let loader = match cli.config {
        Some(path) => AssetLoader::new(Some(path)),
        None => AssetLoader::from_env(),
    };

    match cli.command {
        Some(Commands::Convert { color, to, alpha }) => {
            run_convert_command(&loader, &color, &to, alpha)
        }
        Some(Commands::Palette) => {
            run_palette_command(&loader);
            Ok(())
        }
        Some(Commands::Init { output, force }) => run_init_command(&loader, output, force),
        None => {
            run_status_command(&loader);
            Ok(())
        }
    }
}

fn run_convert_command(
    loader: &AssetLoader,
    color: &str,
    formats: &[Format],
    alpha: Option<f32>,
) -> anyhow::Result<()> {
    let config = Arc::new(AppConfig::load_from_assets(loader));
    let service = ConvertService::new(config);

    let conversion = service
        .convert(color, formats, alpha.map(Alpha::from))
        .with_context(|| format!("Failed to convert {color:?}"))?;

    println!("{conversion}");
    Ok(())
}

fn run_palette_command(loader: &AssetLoader) {
    let config = AppConfig::load_from_assets(loader);

    if config.palette.is_empty() {
        println!("Palette is empty.");
        return;
    }

    let width = config.palette.keys().map(String::len).max().unwrap_or(0);
    for (name, color) in &config.palette {
        println!("  {name:<width$}  {color}");
    }
}

fn run_init_command(
    loader: &AssetLoader,
    output: Option<PathBuf>,
    force: bool,
) -> anyhow::Result<()> {
    let report = loader
        .init(output.as_deref(), force)
        .context("Failed to write config")?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped existing files (use --force to overwrite):");
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display configuration source and available commands
fn run_status_command(loader: &AssetLoader) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("ascedit v{VERSION}\n");

    let config_source = match loader.config_file() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("Config: {config_source}");

    println!("\nCommands:");
    println!("  ascedit convert   Convert a color into other representations");
    println!("  ascedit palette   List configured colors");
    println!("  ascedit init      Write the default config.yaml");
    println!("\nRun 'ascedit --help' for more details.");
}

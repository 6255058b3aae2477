use clap::{Parser, Subcommand};
use icon_mill::{config, fetch, generate, output, process, resolve, scan};
use std::path::{Path, PathBuf};

/// Shared flags for the build command.
#[derive(clap::Args, Clone)]
struct BuildArgs {
    /// Reuse an already-extracted icons directory instead of downloading
    #[arg(long)]
    skip_fetch: bool,

    /// Keep the temp directory (extracted archive and manifests) afterwards
    #[arg(long)]
    keep_temp: bool,
}

#[derive(Parser)]
#[command(name = "icon-mill")]
#[command(about = "Generate typed React icon components from a vendor icon archive")]
#[command(long_about = "\
Generate typed React icon components from a vendor icon archive

Downloads the Azure Public Service Icons archive, converts every SVG into a
typed .tsx component, and emits an aggregated index.ts re-exporting each
component individually and grouped by category.

Pipeline stages (each runnable on its own):

  fetch      download + unpack the vendor zip into the temp dir
  scan       walk the icon tree into manifest.json
  process    optimize each SVG and write its component file
  generate   resolve export names, write index.ts and types.ts

Export names are disambiguated automatically when icons collide: same icon
filed under two categories, icons named like a category, duplicate names
within or across categories. Genuinely ambiguous vendor data (several
distinct icons sharing both name and numeric id) is reported rather than
silently renamed.

Run 'icon-mill gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Icons directory to scan (defaults to the extracted archive in the temp dir)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output directory for generated sources
    #[arg(long, default_value = "src/generated", global = true)]
    output: PathBuf,

    /// Directory for the downloaded archive and intermediate manifests
    #[arg(long, default_value = ".icon-mill-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download and unpack the vendor icon archive
    Fetch,
    /// Scan the icons directory into a manifest
    Scan,
    /// Generate component files from the scan manifest
    Process,
    /// Produce the aggregated index from the processed manifest
    Generate,
    /// Run the full pipeline: fetch → scan → process → generate
    Build(BuildArgs),
    /// Validate the icon set and alias resolution without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_config(Path::new("."))?;

    match cli.command {
        Command::Fetch => {
            let icons_root = fetch::fetch(&cli.temp_dir, &config.source)?;
            println!("Icons extracted to {}", icons_root.display());
        }
        Command::Scan => {
            let icons_root = resolve_icons_root(&cli, &config);
            let manifest = scan::scan(&icons_root, &config)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(cli.temp_dir.join("manifest.json"), json)?;
            output::print_scan_output(&manifest);
        }
        Command::Process => {
            let icons_root = resolve_icons_root(&cli, &config);
            init_thread_pool(&config.processing);
            let manifest_path = cli.temp_dir.join("manifest.json");
            let outcome = process::process(&manifest_path, &icons_root, &cli.output)?;
            let json = serde_json::to_string_pretty(&outcome.manifest)?;
            std::fs::write(cli.temp_dir.join("processed.json"), json)?;
            output::print_process_output(&outcome);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("processed.json");
            let summary = generate::generate(&manifest_path, &cli.output)?;
            output::print_generate_output(&summary);
        }
        Command::Build(ref build_args) => {
            let icons_root = if build_args.skip_fetch {
                resolve_icons_root(&cli, &config)
            } else {
                println!("==> Stage 1: Fetching {}", config.source.resolved_url());
                fetch::fetch(&cli.temp_dir, &config.source)?
            };

            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 2: Scanning {}", icons_root.display());
            let manifest = scan::scan(&icons_root, &config)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 3: Processing icons");
            init_thread_pool(&config.processing);
            let outcome = process::process(&manifest_path, &icons_root, &cli.output)?;
            let processed_path = cli.temp_dir.join("processed.json");
            let json = serde_json::to_string_pretty(&outcome.manifest)?;
            std::fs::write(&processed_path, json)?;
            output::print_process_output(&outcome);

            println!("==> Stage 4: Generating index → {}", cli.output.display());
            let summary = generate::generate(&processed_path, &cli.output)?;
            output::print_generate_output(&summary);

            if !build_args.keep_temp {
                std::fs::remove_dir_all(&cli.temp_dir)?;
            }
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let icons_root = resolve_icons_root(&cli, &config);
            println!("==> Checking {}", icons_root.display());
            let manifest = scan::scan(&icons_root, &config)?;
            output::print_scan_output(&manifest);
            let resolved = resolve::resolve(&manifest.records)?;
            let duplicates = resolve::duplicate_aliases(&resolved);
            if duplicates.is_empty() {
                println!("==> {} exports resolve cleanly", resolved.len());
            } else {
                println!("==> {} exports, duplicate aliases:", resolved.len());
                for alias in duplicates {
                    println!("    {}", alias);
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// The icons directory a command should read: `--input` when given,
/// otherwise the archive layout inside the temp dir.
fn resolve_icons_root(cli: &Cli, config: &config::BuildConfig) -> PathBuf {
    cli.input
        .clone()
        .unwrap_or_else(|| cli.temp_dir.join(&config.source.icons_subdir))
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

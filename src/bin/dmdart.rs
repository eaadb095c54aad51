use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dmdart", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert every manifest item at every configured size.
    Convert(ConvertArgs),
    /// Print the sizes a size list resolves to.
    Sizes(SizesArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Settings JSON.
    #[arg(long)]
    config: PathBuf,

    /// Manifest JSON: `[{"path", "category", "itemName"}]`.
    #[arg(long)]
    manifest: PathBuf,

    /// Enable job-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Override the configured output folder.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SizesArgs {
    /// Comma-separated `WxH` list, e.g. "128x32,192x64".
    list: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Sizes(args) => cmd_sizes(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let mut settings = dmdart::Settings::from_path(&args.config)?;
    dmdart::init_logging(&settings.logging);
    if let Some(output) = args.output {
        settings.output_folder = output;
    }
    let config = settings.to_conversion_config()?;
    let items = load_manifest(&args.manifest)?;

    let summary = dmdart::ConversionOrchestrator::new(&config)
        .with_options(dmdart::RunOptions {
            parallel: args.parallel,
            threads: args.threads,
        })
        .run(&items)?;

    for failure in &summary.failures {
        eprintln!(
            "failed {} @ {}: {}",
            failure.source.display(),
            failure.size,
            failure.error
        );
    }
    eprintln!("{summary}");
    Ok(())
}

fn load_manifest(path: &Path) -> anyhow::Result<Vec<dmdart::SourceItem>> {
    let f = std::fs::File::open(path)
        .with_context(|| format!("open manifest '{}'", path.display()))?;
    let items: Vec<dmdart::SourceItem> = serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parse manifest '{}'", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(items
        .into_iter()
        .map(|item| {
            if item.path.is_absolute() {
                item
            } else {
                dmdart::SourceItem::new(base.join(&item.path), item.category, item.item_name)
            }
        })
        .collect())
}

fn cmd_sizes(args: SizesArgs) -> anyhow::Result<()> {
    dmdart::logging::init_default_logging();
    let sizes = dmdart::parse_target_sizes(&args.list);
    if sizes.is_empty() {
        anyhow::bail!("no valid sizes in '{}'", args.list);
    }
    for size in sizes {
        println!("{size}");
    }
    Ok(())
}

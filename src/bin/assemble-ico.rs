use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use icon_assembler::IconLayout;

/// Build a multi-size .ico from <assets-dir>/<name>-<size>.png inputs.
#[derive(Parser, Debug)]
#[command(name = "assemble-ico", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Directory holding the pre-rendered PNGs.
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Shared file stem of the inputs (`<name>-<size>.png`).
    #[arg(long, default_value = "app")]
    name: String,

    /// Output .ico path [default: <assets-dir>/<name>.ico].
    #[arg(long)]
    out: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the entries embedded in an existing .ico file.
    Inspect {
        /// Icon container to read.
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Some(Command::Inspect { ref path }) => cmd_inspect(path),
        None => cmd_assemble(&cli),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn layout_from_args(cli: &Cli) -> IconLayout {
    let mut layout = IconLayout::for_dir(&cli.assets_dir);
    layout.base_name = cli.name.clone();
    layout.output = cli
        .out
        .clone()
        .unwrap_or_else(|| cli.assets_dir.join(format!("{}.ico", cli.name)));
    layout
}

fn cmd_assemble(cli: &Cli) -> anyhow::Result<ExitCode> {
    let layout = layout_from_args(cli);
    match icon_assembler::assemble(&layout) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_no_inputs() => {
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            Err(err).with_context(|| format!("assemble '{}'", layout.output.display()))
        }
    }
}

fn cmd_inspect(path: &Path) -> anyhow::Result<ExitCode> {
    let entries = icon_assembler::read_ico_entries(path)
        .with_context(|| format!("inspect '{}'", path.display()))?;

    println!("{}: {} entries", path.display(), entries.len());
    for e in &entries {
        println!(
            "  {}x{}, {} bpp, {} bytes",
            e.width,
            e.height,
            e.bits_per_pixel,
            e.len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

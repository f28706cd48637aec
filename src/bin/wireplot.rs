use std::{num::NonZeroU32, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "wireplot", version, about = "Render routed wires to an image")]
struct Cli {
    /// Wire description text file.
    #[arg(long, default_value = "output/wire_output.txt")]
    input_file: PathBuf,

    /// Destination image; the format follows the extension.
    #[arg(long, default_value = "output/wire_plot.png")]
    output_file: PathBuf,

    /// Pixels per grid unit.
    #[arg(long, default_value = "4")]
    scale: NonZeroU32,

    /// Open the image in a viewer instead of writing --output-file.
    #[arg(long)]
    show: bool,

    /// Font file to try before the system fonts for the title.
    #[arg(long)]
    title_font: Option<PathBuf>,

    /// Print diagnostics about title font resolution (strategy, family, SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut opts = wireplot::PlotOptions::new(
        &cli.input_file,
        (!cli.show).then(|| cli.output_file.clone()),
    );
    opts.scale = cli.scale;
    if let Some(path) = &cli.title_font {
        opts.style = opts.style.with_title_font_file(path);
    }

    let summary = wireplot::plot_file(&opts)
        .with_context(|| format!("plot wire file '{}'", cli.input_file.display()))?;

    if cli.dump_fonts {
        dump_font_diagnostics(&summary.title_font);
    }

    eprintln!(
        "{}x{} grid, {} wires ({} lines skipped) -> {}x{} image",
        summary.dims.width,
        summary.dims.height,
        summary.wire_count,
        summary.skipped_lines,
        summary.image_width,
        summary.image_height,
    );
    match summary.target {
        wireplot::OutputTarget::File(path) => eprintln!("wrote {}", path.display()),
        wireplot::OutputTarget::Preview(path) => eprintln!("previewing {}", path.display()),
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dump_font_diagnostics(font: &wireplot::TitleFont) {
    eprintln!("title font diagnostics:");
    match font {
        wireplot::TitleFont::Outline(f) => {
            eprintln!("  strategy: {}", f.strategy);
            eprintln!("  family:   {}", f.family);
            eprintln!("  index:    {}", f.index);
            eprintln!("  sha256:   {}", sha256_hex(&f.bytes));
        }
        wireplot::TitleFont::Builtin => {
            eprintln!("  strategy: {}", wireplot::FontStrategy::Builtin);
            eprintln!("  family:   {}", font.family());
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

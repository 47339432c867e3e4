use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use photosort::{classify, ClassifyOptions};

#[derive(Parser)]
#[command(
    name = "photosort",
    version,
    about = "Back up photos and videos into a YYYY/MM tree keyed by capture date"
)]
struct Cli {
    /// Source directory to scan for media files
    #[arg(short, long)]
    source: PathBuf,

    /// Target directory receiving the YYYY/MM tree
    #[arg(short, long)]
    target: PathBuf,

    /// Write the log to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Skip files whose path contains this substring (repeatable)
    #[arg(long = "ignore", value_name = "SUBSTRING")]
    ignored_folders: Vec<String>,

    /// Additional allowed extension, e.g. ".heic" (repeatable)
    #[arg(long = "ext", value_name = "EXTENSION")]
    extra_extensions: Vec<String>,

    /// Verbosity level. Max: 2.
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn configure_logging(verbosity: u8, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{:<5} {}", record.level(), record.args()));
    if let Some(path) = log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = configure_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("failed to set up logging: {e}");
        std::process::exit(1);
    }

    let mut options = ClassifyOptions::new(cli.source, cli.target);
    options.ignored_folders = cli.ignored_folders;
    for ext in cli.extra_extensions {
        let ext = ext.to_ascii_lowercase();
        let ext = if ext.starts_with('.') {
            ext
        } else {
            format!(".{ext}")
        };
        options.allowed_extensions.push(ext);
    }

    if let Err(e) = classify(&options) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

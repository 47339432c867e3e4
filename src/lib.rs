//! Classify photos and videos into a `YYYY/MM` directory tree, copying each
//! file under the best-available capture date without ever overwriting
//! distinct content.

pub mod date;
pub mod filter;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::bail;
use log::{debug, error, info};
use walkdir::WalkDir;

/// What happened to a single candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Created,
    SkippedUnsupportedType,
    SkippedIgnoredFolder,
    SkippedDuplicateContent,
    SkippedGiveUp,
}

#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Lowercase extensions with leading dot, e.g. `.jpg`.
    pub allowed_extensions: Vec<String>,
    /// Path substrings; a file is skipped when its full path contains one.
    pub ignored_folders: Vec<String>,
}

impl ClassifyOptions {
    pub fn new(source: PathBuf, target: PathBuf) -> Self {
        Self {
            source,
            target,
            allowed_extensions: filter::DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            ignored_folders: Vec::new(),
        }
    }
}

/// Per-run counters, reported once at the end of a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassifySummary {
    pub scanned: u64,
    pub created: u64,
    pub duplicates: u64,
    pub unsupported: u64,
    pub ignored: u64,
    pub gave_up: u64,
}

impl ClassifySummary {
    fn record(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Created => self.created += 1,
            CopyOutcome::SkippedUnsupportedType => self.unsupported += 1,
            CopyOutcome::SkippedIgnoredFolder => self.ignored += 1,
            CopyOutcome::SkippedDuplicateContent => self.duplicates += 1,
            CopyOutcome::SkippedGiveUp => self.gave_up += 1,
        }
    }
}

/// Walk the source tree and copy every eligible media file into
/// `target/YYYY/MM`. One bad file never aborts the run; a missing source
/// directory does, before anything is copied.
pub fn classify(options: &ClassifyOptions) -> anyhow::Result<ClassifySummary> {
    if !options.source.is_dir() {
        bail!(
            "source directory '{}' does not exist",
            options.source.display()
        );
    }
    fs::create_dir_all(&options.target)?;

    let mut summary = ClassifySummary::default();
    for entry in WalkDir::new(&options.source) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("cannot read directory entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
            error!("skipping non-UTF-8 file name: {}", entry.path().display());
            continue;
        };

        summary.scanned += 1;
        match classify_file(entry.path(), &file_name, options) {
            Ok(outcome) => summary.record(outcome),
            Err(e) => error!("failed to process {}: {e:#}", entry.path().display()),
        }
    }

    info!(
        "copied {} new file(s) to {} ({} scanned, {} duplicate, {} unsupported, {} ignored, {} given up)",
        summary.created,
        options.target.display(),
        summary.scanned,
        summary.duplicates,
        summary.unsupported,
        summary.ignored,
        summary.gave_up
    );
    Ok(summary)
}

fn classify_file(
    path: &Path,
    file_name: &str,
    options: &ClassifyOptions,
) -> anyhow::Result<CopyOutcome> {
    if !filter::is_supported_media(file_name, &options.allowed_extensions) {
        debug!("skip {}: unsupported file type", path.display());
        return Ok(CopyOutcome::SkippedUnsupportedType);
    }
    if filter::is_in_ignored_folder(path, &options.ignored_folders) {
        debug!("skip {}: inside ignored folder", path.display());
        return Ok(CopyOutcome::SkippedIgnoredFolder);
    }

    let resolved = date::resolve_date(path);
    debug!(
        "{}: {} via {:?}",
        path.display(),
        resolved.date.format("%Y-%m-%d"),
        resolved.source
    );

    let bucket = options
        .target
        .join(resolved.date.format("%Y").to_string())
        .join(resolved.date.format("%m").to_string());
    fs::create_dir_all(&bucket)?;

    writer::place_file(path, &bucket.join(file_name))
}

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, error, info};
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::CopyOutcome;

/// Candidate names probed per file before giving up on a collision.
const MAX_ATTEMPTS: u32 = 10;

static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<base>.*)-p(?P<n>\d+)$").unwrap());

/// Store `source`'s bytes under `dest` or a `-p<N>`-suffixed sibling,
/// never overwriting differing content. The first probe is `dest` itself;
/// each collision with distinct content advances the suffix counter.
pub fn place_file(source: &Path, dest: &Path) -> anyhow::Result<CopyOutcome> {
    let mut candidate = dest.to_path_buf();
    for _ in 0..MAX_ATTEMPTS {
        if !candidate.exists() {
            copy_with_mtime(source, &candidate)?;
            info!("copied {} -> {}", source.display(), candidate.display());
            return Ok(CopyOutcome::Created);
        }
        if same_content(source, &candidate)? {
            info!(
                "skip {}: already stored as {}",
                source.display(),
                candidate.display()
            );
            return Ok(CopyOutcome::SkippedDuplicateContent);
        }
        candidate = next_candidate(&candidate);
        debug!(
            "collision on {}, retrying as {}",
            dest.display(),
            candidate.display()
        );
    }

    error!(
        "giving up on {} after {} attempts (next candidate was {})",
        source.display(),
        MAX_ATTEMPTS,
        candidate.display()
    );
    Ok(CopyOutcome::SkippedGiveUp)
}

/// Next disambiguated sibling: `name.jpg` -> `name-p1.jpg`,
/// `name-p3.jpg` -> `name-p4.jpg`.
fn next_candidate(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("file");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let next_stem = match SUFFIX_RE.captures(stem) {
        Some(caps) => {
            let n: u32 = caps["n"].parse().unwrap_or(0);
            format!("{}-p{}", &caps["base"], n + 1)
        }
        None => format!("{stem}-p1"),
    };

    let file_name = if ext.is_empty() {
        next_stem
    } else {
        format!("{next_stem}.{ext}")
    };
    path.with_file_name(file_name)
}

fn copy_with_mtime(source: &Path, dest: &Path) -> anyhow::Result<()> {
    fs::copy(source, dest)?;
    let meta = fs::metadata(source)?;
    filetime::set_file_mtime(dest, filetime::FileTime::from_last_modification_time(&meta)).ok();
    Ok(())
}

/// Full-content equality. Unequal sizes prove inequality; equal-sized files
/// are compared by streaming SHA-256 digests, never by timestamps.
fn same_content(a: &Path, b: &Path) -> anyhow::Result<bool> {
    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }
    Ok(content_digest(a)? == content_digest(b)?)
}

fn content_digest(path: &Path) -> anyhow::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

pub mod exif;
pub mod guess;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use log::error;

/// Where the winning timestamp came from; ordered most to least trustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Exif,
    FileName,
    Modified,
    Fallback,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedDate {
    pub date: NaiveDateTime,
    pub source: DateSource,
}

/// Resolve the best timestamp for a media file. Total: the strategies fall
/// through in priority order and a fixed sentinel closes the chain, so the
/// caller always gets a date.
pub fn resolve_date(path: &Path) -> ResolvedDate {
    let is_image = mime_guess::from_path(path)
        .first()
        .map_or(false, |mime| mime.type_() == mime_guess::mime::IMAGE);
    if is_image {
        if let Some(date) = exif::extract_exif_date(path) {
            return ResolvedDate {
                date,
                source: DateSource::Exif,
            };
        }
    }

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if let Some(date) = guess::guess_date_from_filename(file_name) {
        return ResolvedDate {
            date: date.and_time(NaiveTime::MIN),
            source: DateSource::FileName,
        };
    }

    if let Some(date) = modified_date(path) {
        return ResolvedDate {
            date,
            source: DateSource::Modified,
        };
    }

    let date = sentinel();
    error!(
        "no usable timestamp for {}; falling back to {}",
        path.display(),
        date.format("%Y-%m-%d")
    );
    ResolvedDate {
        date,
        source: DateSource::Fallback,
    }
}

fn modified_date(path: &Path) -> Option<NaiveDateTime> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.naive_local())
}

/// 2000-01-01, used only when every real strategy failed.
fn sentinel() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

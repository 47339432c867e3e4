use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use exif::{In, Reader, Tag};

/// Extract the capture date from a file's EXIF data.
/// EXIF datetimes have no timezone info - they are local time as-is.
pub fn extract_exif_date(path: &Path) -> Option<NaiveDateTime> {
    let file = File::open(path).ok()?;
    let exif = Reader::new()
        .read_from_container(&mut BufReader::new(&file))
        .ok()?;

    let tags = [Tag::DateTimeOriginal, Tag::DateTimeDigitized, Tag::DateTime];

    for tag in &tags {
        if let Some(field) = exif.get_field(*tag, In::PRIMARY) {
            let val = field.display_value().to_string();
            if let Some(dt) = parse_exif_datetime(&val) {
                return Some(dt);
            }
        }
    }

    None
}

fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let cleaned = s.replace(['-', '/', '\\', '.'], ":");

    if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, "%Y:%m:%d %H:%M:%S") {
        return Some(dt);
    }

    // Some writers store a bare or mangled date; the first 10 characters
    // are still YYYY:MM:DD.
    let date = NaiveDate::parse_from_str(cleaned.get(..10)?, "%Y:%m:%d").ok()?;
    Some(date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_exif_datetimes() {
        let dt = parse_exif_datetime("2019:09:09 09:09:09").unwrap();
        assert_eq!(
            dt,
            NaiveDate::from_ymd_opt(2019, 9, 9)
                .unwrap()
                .and_hms_opt(9, 9, 9)
                .unwrap()
        );
        // Dash-separated display form round-trips too.
        assert_eq!(parse_exif_datetime("2019-09-09 09:09:09"), Some(dt));
    }

    #[test]
    fn falls_back_to_the_date_prefix() {
        let dt = parse_exif_datetime("2019:09:09").unwrap();
        assert_eq!(
            dt,
            NaiveDate::from_ymd_opt(2019, 9, 9)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
        let dt = parse_exif_datetime("2019:09:09 9h09").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2019, 9, 9).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_exif_datetime(""), None);
        assert_eq!(parse_exif_datetime("not a date"), None);
        assert_eq!(parse_exif_datetime("0000:00:00 00:00:00"), None);
    }
}
